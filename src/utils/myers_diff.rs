//! Myers' diff algorithm in its divide-and-conquer form.
//!
//! * time: `O((N+M)D)`
//! * space: `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf).
//! The middle-snake search follows the implementation in
//! <https://github.com/mitsuhiko/similar/blob/main/src/algorithms/myers.rs>.
//!
//! The routine is generic over the element type: the word-level differ runs
//! it over [`Token`](crate::Token) slices, the character-level differ over
//! `char` slices. Equality of the elements is the only thing it consults,
//! so any domain equivalence (such as line-ending equality between tokens)
//! is picked up automatically.

use std::{
    fmt::Debug,
    ops::{Index, IndexMut, Range},
};

use crate::{
    raw_operation::RawOperation,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Diff `old` against `new`, returning maximal-effort runs in order.
///
/// The returned operations cover both inputs completely: `Equal` and
/// `Delete` runs carry `old` elements, `Insert` runs carry `new` elements.
/// Adjacent runs of the same variant may still occur across recursion
/// boundaries; [`RawOperation::runs_between`] coalesces them.
pub fn myers_diff<T>(old: &[T], new: &[T]) -> Vec<RawOperation<T>>
where
    T: PartialEq + Clone + Debug,
{
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vf = V::new(max_d);
    let mut vb = V::new(max_d);
    let mut result = Vec::new();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

/// `V` holds the endpoints of the furthest-reaching D-paths, indexed by
/// diagonal `k`. Only the row index `x` is stored since `y = x - k`.
/// `k` can be negative, so the storage is a Vec plus an offset.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize {
        self.v.len()
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Find the middle snake of an optimal D-path by running the basic
/// algorithm forwards and backwards simultaneously until the two
/// furthest-reaching paths overlap. Returns the snake's start coordinate,
/// or `None` when no overlap was found within the depth bound.
fn find_middle_snake<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)>
where
    T: PartialEq + Clone + Debug,
{
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or
    // even as `delta` is odd or even.
    let delta = isize::try_from(n).unwrap_or(isize::MAX) - isize::try_from(m).unwrap_or(isize::MAX);
    let odd = delta & 1 == 1;

    // The initial points at (0, -1) and (N, M+1).
    vf[1] = 0;
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    assert!(vf.len() >= d_max);
    assert!(vb.len() >= d_max);

    let d_max_isize = isize::try_from(d_max).unwrap_or(isize::MAX);
    for d in 0..d_max_isize {
        // Forward search.
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            let (x0, y0) = (x, y);
            // Follow the diagonal while the elements keep matching.
            if x < n && y < m {
                let advance = common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
                x += advance;
            }

            vf[k] = x;

            // A connection can only come from the forward search when
            // N - M is odd and a reciprocal k line exists on the other
            // side.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward search.
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer<T>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<RawOperation<T>>,
) where
    T: PartialEq + Clone + Debug,
{
    let prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    if prefix_len > 0 {
        result.push(RawOperation::Equal(
            old[old_range.start..old_range.start + prefix_len].to_vec(),
        ));
    }
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let suffix_start = old_range.end - suffix_len;
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // everything was prefix and suffix
    } else if new_range.is_empty() {
        result.push(RawOperation::Delete(old[old_range].to_vec()));
    } else if old_range.is_empty() {
        result.push(RawOperation::Insert(new[new_range].to_vec()));
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        // No middle snake within the depth bound: fall back to replacing
        // the whole region so the recursion always terminates.
        result.push(RawOperation::Delete(old[old_range].to_vec()));
        result.push(RawOperation::Insert(new[new_range].to_vec()));
    }

    if suffix_len > 0 {
        result.push(RawOperation::Equal(
            old[suffix_start..suffix_start + suffix_len].to_vec(),
        ));
    }
}
