use std::ops::Range;

/// Length of the common suffix of `old[old_range]` and `new[new_range]`.
///
/// After the idea in <https://github.com/mitsuhiko/similar/blob/main/src/algorithms/utils.rs>.
pub fn common_suffix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old_range
        .rev()
        .zip(new_range.rev())
        .take_while(|&(old_index, new_index)| old[old_index] == new[new_index])
        .count()
}
