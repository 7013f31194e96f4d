use std::collections::HashSet;

use crate::chunk::{DiffChunk, DiffKind};

/// Produce a pruned copy of `chunks` without any chunk whose kind is in
/// `excluded`.
///
/// A retained [`DiffChunk::ChangedWords`] has its nested character chunks
/// filtered against the same set; when everything nested is excluded the
/// parent is dropped too, otherwise the parent keeps its kind even if only
/// unchanged characters remain. The input is never mutated.
///
/// ```
/// use std::collections::HashSet;
///
/// use prosediff::{DiffKind, diff_line, filtered_chunks};
///
/// let chunks = diff_line("the quick fox", "the quick fox jumps");
/// let without_additions = filtered_chunks(&chunks, &HashSet::from([DiffKind::AddedWords]));
/// assert_eq!(without_additions.len(), 1);
/// ```
#[must_use]
pub fn filtered_chunks(chunks: &[DiffChunk], excluded: &HashSet<DiffKind>) -> Vec<DiffChunk> {
    chunks
        .iter()
        .filter_map(|chunk| {
            if excluded.contains(&chunk.kind()) {
                return None;
            }

            match chunk {
                DiffChunk::ChangedWords { chunks: nested } => {
                    let nested = filtered_chunks(nested, excluded);
                    if nested.is_empty() {
                        None
                    } else {
                        Some(DiffChunk::ChangedWords { chunks: nested })
                    }
                }
                other => Some(other.clone()),
            }
        })
        .collect()
}
