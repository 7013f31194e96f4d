use std::ops::Range;

/// Length of the common prefix of `old[old_range]` and `new[new_range]`.
///
/// After the idea in <https://github.com/mitsuhiko/similar/blob/main/src/algorithms/utils.rs>.
pub fn common_prefix_len<T: PartialEq>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
) -> usize {
    old_range
        .zip(new_range)
        .take_while(|&(old_index, new_index)| old[old_index] == new[new_index])
        .count()
}
