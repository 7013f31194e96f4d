//! Word- and character-level text diffing with display-ready chunks.
//!
//! Given two versions of a text field, [`diff_line`] returns an ordered
//! sequence of [`DiffChunk`]s: unchanged spans, added/deleted word runs, and
//! — where a replaced run of words is close enough to its replacement —
//! [`DiffChunk::ChangedWords`] chunks carrying a finer character-level
//! breakdown. [`filtered_chunks`] prunes a chunk sequence for display by
//! excluding unwanted [`DiffKind`]s.
//!
//! ```
//! use prosediff::{DiffChunk, diff_line};
//!
//! let chunks = diff_line("the quick fox", "the quick fox jumps");
//! assert_eq!(chunks, vec![
//!     DiffChunk::Unchanged { text: "the quick fox".to_owned() },
//!     DiffChunk::AddedWords { text: " jumps".to_owned() },
//! ]);
//! ```
//!
//! Every operation is a pure function over immutable inputs; nothing in the
//! crate retains state between calls.

mod chunk;
mod differ;
mod filter;
mod raw_operation;
mod tokenizer;
mod utils;

pub use chunk::{DiffChunk, DiffKind, original_text, revised_text};
pub use differ::{
    character_differ::character_chunks,
    word_differ::{diff_line, unchanged_words_between},
};
pub use filter::filtered_chunks;
pub use tokenizer::{
    token::{Token, TokenKind},
    word_tokenizer::word_tokenizer,
};
