use prosediff::DiffChunk;
use serde::Deserialize;

/// The chunk shape used by the YAML documents under `tests/examples/`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedChunk {
    Unchanged(String),
    AddedWords(String),
    DeletedWords(String),
    ChangedWords(Vec<ExpectedChunk>),
    AddedCharacters(String),
    DeletedCharacters(String),
}

impl ExpectedChunk {
    fn to_chunk(&self) -> DiffChunk {
        match self {
            ExpectedChunk::Unchanged(text) => DiffChunk::Unchanged { text: text.clone() },
            ExpectedChunk::AddedWords(text) => DiffChunk::AddedWords { text: text.clone() },
            ExpectedChunk::DeletedWords(text) => DiffChunk::DeletedWords { text: text.clone() },
            ExpectedChunk::ChangedWords(nested) => DiffChunk::ChangedWords {
                chunks: nested.iter().map(ExpectedChunk::to_chunk).collect(),
            },
            ExpectedChunk::AddedCharacters(text) => DiffChunk::AddedCharacters {
                text: text.clone(),
            },
            ExpectedChunk::DeletedCharacters(text) => DiffChunk::DeletedCharacters {
                text: text.clone(),
            },
        }
    }
}

/// One diff scenario: two input versions and the chunk sequence they must
/// produce.
///
/// `revision_reconstructs` is false for the few documents whose inputs
/// differ only in line-ending details, where the revised side reconstructs
/// with the original's line-ending representation.
#[derive(Debug, Deserialize)]
pub struct ExampleCase {
    pub name: String,
    pub original: String,
    pub revised: String,
    #[serde(default = "default_true")]
    pub revision_reconstructs: bool,
    chunks: Vec<ExpectedChunk>,
}

fn default_true() -> bool {
    true
}

impl ExampleCase {
    pub fn expected_chunks(&self) -> Vec<DiffChunk> {
        self.chunks.iter().map(ExpectedChunk::to_chunk).collect()
    }
}
