#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The discriminant of a [`DiffChunk`], sufficient for a renderer to pick a
/// visual style and for callers to build exclusion sets for
/// [`filtered_chunks`](crate::filtered_chunks).
///
/// `Unchanged` is shared between the word and character levels; the other
/// kinds are level-specific.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffKind {
    Unchanged,
    AddedWords,
    DeletedWords,
    ChangedWords,
    AddedCharacters,
    DeletedCharacters,
}

/// One contiguous labeled span of diff output.
///
/// Chunks are immutable value objects produced by
/// [`diff_line`](crate::diff_line) and
/// [`character_chunks`](crate::character_chunks); no chunk is ever shared or
/// mutated across calls. The variant is the chunk's kind, so invalid
/// kind/payload combinations cannot be constructed: only `ChangedWords`
/// nests, and its children are character-level chunks (`Unchanged`,
/// `AddedCharacters`, `DeletedCharacters`).
///
/// Text in `Unchanged` and deleted chunks always carries the original
/// input's bytes; added chunks carry the revision's. See
/// [`original_text`] and [`revised_text`] for the reconstruction rules.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffChunk {
    /// A span present in both inputs, at either granularity.
    Unchanged { text: String },
    /// A word run present only in the revision.
    AddedWords { text: String },
    /// A word run present only in the original.
    DeletedWords { text: String },
    /// A replaced word run that was close enough to its replacement to be
    /// broken down into character-level chunks.
    ChangedWords { chunks: Vec<DiffChunk> },
    /// A character run present only in the revision.
    AddedCharacters { text: String },
    /// A character run present only in the original.
    DeletedCharacters { text: String },
}

impl DiffChunk {
    #[must_use]
    pub fn kind(&self) -> DiffKind {
        match self {
            DiffChunk::Unchanged { .. } => DiffKind::Unchanged,
            DiffChunk::AddedWords { .. } => DiffKind::AddedWords,
            DiffChunk::DeletedWords { .. } => DiffKind::DeletedWords,
            DiffChunk::ChangedWords { .. } => DiffKind::ChangedWords,
            DiffChunk::AddedCharacters { .. } => DiffKind::AddedCharacters,
            DiffChunk::DeletedCharacters { .. } => DiffKind::DeletedCharacters,
        }
    }

    /// The chunk's text, or `None` for the nesting `ChangedWords` variant.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            DiffChunk::Unchanged { text }
            | DiffChunk::AddedWords { text }
            | DiffChunk::DeletedWords { text }
            | DiffChunk::AddedCharacters { text }
            | DiffChunk::DeletedCharacters { text } => Some(text),
            DiffChunk::ChangedWords { .. } => None,
        }
    }

    /// The nested character chunks of a `ChangedWords` chunk.
    #[must_use]
    pub fn nested(&self) -> Option<&[DiffChunk]> {
        match self {
            DiffChunk::ChangedWords { chunks } => Some(chunks),
            _ => None,
        }
    }
}

/// Reassemble the original input from a chunk sequence by concatenating
/// `Unchanged` and deleted spans in order, recursing into `ChangedWords`.
///
/// This reconstruction is exact for every input pair.
#[must_use]
pub fn original_text(chunks: &[DiffChunk]) -> String {
    let mut text = String::new();
    for chunk in chunks {
        match chunk {
            DiffChunk::Unchanged { text: span }
            | DiffChunk::DeletedWords { text: span }
            | DiffChunk::DeletedCharacters { text: span } => text.push_str(span),
            DiffChunk::ChangedWords { chunks: nested } => {
                text.push_str(&original_text(nested));
            }
            DiffChunk::AddedWords { .. } | DiffChunk::AddedCharacters { .. } => {}
        }
    }
    text
}

/// Reassemble the revised input from a chunk sequence by concatenating
/// `Unchanged` and added spans in order, recursing into `ChangedWords`.
///
/// Exact except where the inputs differ only in line-ending details:
/// matched spans reconstruct with the original's line-ending
/// representation, and the leading line break of a word-bearing insertion
/// is folded into the unchanged context rather than the added chunk.
#[must_use]
pub fn revised_text(chunks: &[DiffChunk]) -> String {
    let mut text = String::new();
    for chunk in chunks {
        match chunk {
            DiffChunk::Unchanged { text: span }
            | DiffChunk::AddedWords { text: span }
            | DiffChunk::AddedCharacters { text: span } => text.push_str(span),
            DiffChunk::ChangedWords { chunks: nested } => {
                text.push_str(&revised_text(nested));
            }
            DiffChunk::DeletedWords { .. } | DiffChunk::DeletedCharacters { .. } => {}
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vec<DiffChunk> {
        vec![
            DiffChunk::Unchanged {
                text: "the ".to_owned(),
            },
            DiffChunk::ChangedWords {
                chunks: vec![
                    DiffChunk::Unchanged {
                        text: "f".to_owned(),
                    },
                    DiffChunk::DeletedCharacters {
                        text: "ox".to_owned(),
                    },
                    DiffChunk::AddedCharacters {
                        text: "ix".to_owned(),
                    },
                ],
            },
            DiffChunk::DeletedWords {
                text: " ran".to_owned(),
            },
            DiffChunk::AddedWords {
                text: " hid".to_owned(),
            },
        ]
    }

    #[test]
    fn test_original_side_reconstruction() {
        assert_eq!(original_text(&sample()), "the fox ran");
    }

    #[test]
    fn test_revised_side_reconstruction() {
        assert_eq!(revised_text(&sample()), "the fix hid");
    }

    #[test]
    fn test_kind_matches_variant() {
        let kinds: Vec<DiffKind> = sample().iter().map(DiffChunk::kind).collect();
        assert_eq!(
            kinds,
            vec![
                DiffKind::Unchanged,
                DiffKind::ChangedWords,
                DiffKind::DeletedWords,
                DiffKind::AddedWords,
            ]
        );
    }

    #[test]
    fn test_text_and_nested_accessors() {
        let chunks = sample();
        assert_eq!(chunks[0].text(), Some("the "));
        assert_eq!(chunks[1].text(), None);
        assert_eq!(chunks[1].nested().map(<[DiffChunk]>::len), Some(3));
        assert_eq!(chunks[2].nested(), None);
    }
}
