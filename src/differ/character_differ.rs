use crate::{chunk::DiffChunk, raw_operation::RawOperation};

/// Refine a deleted/added word-run pair into character-level chunks, or
/// decline with `None` when the two texts share no aligned character at
/// all, in which case the caller should keep its coarser word-level
/// replace.
///
/// Both strings empty is a refinement to an empty sequence, not a decline.
/// One empty string declines (there is nothing to align against). Decline
/// is a normal outcome, never an error.
///
/// ```
/// use prosediff::{DiffChunk, character_chunks};
///
/// assert_eq!(character_chunks("ABC", "ABCD"), Some(vec![
///     DiffChunk::Unchanged { text: "ABC".to_owned() },
///     DiffChunk::AddedCharacters { text: "D".to_owned() },
/// ]));
/// assert_eq!(character_chunks("ABC", "XYZ"), None);
/// ```
#[must_use]
pub fn character_chunks(deleted_text: &str, added_text: &str) -> Option<Vec<DiffChunk>> {
    let deleted: Vec<char> = deleted_text.chars().collect();
    let added: Vec<char> = added_text.chars().collect();

    if deleted.is_empty() && added.is_empty() {
        return Some(Vec::new());
    }

    let runs = RawOperation::runs_between(&deleted, &added);
    if !runs
        .iter()
        .any(|run| matches!(run, RawOperation::Equal(_)))
    {
        return None;
    }

    Some(
        runs.into_iter()
            .map(|run| match run {
                RawOperation::Equal(characters) => DiffChunk::Unchanged {
                    text: characters.into_iter().collect(),
                },
                RawOperation::Delete(characters) => DiffChunk::DeletedCharacters {
                    text: characters.into_iter().collect(),
                },
                RawOperation::Insert(characters) => DiffChunk::AddedCharacters {
                    text: characters.into_iter().collect(),
                },
            })
            .collect(),
    )
}
