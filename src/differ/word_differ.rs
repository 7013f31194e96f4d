use crate::{
    chunk::DiffChunk,
    differ::character_differ::character_chunks,
    raw_operation::RawOperation,
    tokenizer::{
        token::{Token, TokenKind},
        word_tokenizer::word_tokenizer,
    },
};

/// Compute the word-level diff between two versions of a text field.
///
/// Both strings are tokenized, aligned, and the aligned runs translated
/// into ordered [`DiffChunk`]s. A deleted run adjacent to an added run is a
/// replace candidate: when [`character_chunks`] can refine the pair, a
/// single [`DiffChunk::ChangedWords`] carries the character breakdown,
/// otherwise the coarser `DeletedWords` + `AddedWords` pair is kept.
///
/// Line endings are matched by presence rather than representation: a `\r`
/// aligned with a `\r\n` is unchanged, while an extra line break is a real
/// change. Unchanged and deleted chunks always carry the original's bytes.
///
/// ```
/// use prosediff::{DiffChunk, diff_line};
///
/// assert_eq!(diff_line("same", "same"), vec![DiffChunk::Unchanged {
///     text: "same".to_owned(),
/// }]);
/// assert_eq!(diff_line("", ""), vec![]);
/// ```
#[must_use]
pub fn diff_line(original: &str, revised: &str) -> Vec<DiffChunk> {
    let original_tokens = word_tokenizer(original);
    let revised_tokens = word_tokenizer(revised);
    let runs = RawOperation::runs_between(&original_tokens, &revised_tokens);

    let mut chunks = Vec::new();
    let mut deleted: Vec<Token> = Vec::new();
    let mut inserted: Vec<Token> = Vec::new();

    for run in runs {
        match run {
            RawOperation::Equal(tokens) => {
                flush_pending(&mut chunks, &mut deleted, &mut inserted);
                chunks.push(DiffChunk::Unchanged {
                    text: concatenated(&tokens),
                });
            }
            RawOperation::Delete(tokens) => deleted.extend(tokens),
            RawOperation::Insert(tokens) => inserted.extend(tokens),
        }
    }
    flush_pending(&mut chunks, &mut deleted, &mut inserted);

    chunks
}

/// A single `Unchanged` chunk spanning the tokens strictly between two
/// previously computed alignment boundaries, for building context windows
/// around a change.
///
/// `before` is the exclusive end of the earlier change, `after` the start
/// of the later one; `None` extends the span to the corresponding end of
/// the token array.
#[must_use]
pub fn unchanged_words_between(
    tokens: &[Token],
    before: Option<usize>,
    after: Option<usize>,
) -> DiffChunk {
    let end = after.unwrap_or(tokens.len()).min(tokens.len());
    let start = before.unwrap_or(0).min(end);

    DiffChunk::Unchanged {
        text: concatenated(&tokens[start..end]),
    }
}

/// Turn the gathered deleted/inserted tokens of one non-matching stretch
/// into chunks and reset the buffers.
fn flush_pending(chunks: &mut Vec<DiffChunk>, deleted: &mut Vec<Token>, inserted: &mut Vec<Token>) {
    match (deleted.is_empty(), inserted.is_empty()) {
        (true, true) => {}
        (false, true) => chunks.push(DiffChunk::DeletedWords {
            text: concatenated(deleted),
        }),
        (true, false) => chunks.push(DiffChunk::AddedWords {
            text: added_text(inserted),
        }),
        (false, false) => {
            let deleted_text = concatenated(deleted);
            let inserted_text = concatenated(inserted);
            match character_chunks(&deleted_text, &inserted_text) {
                Some(nested) => chunks.push(DiffChunk::ChangedWords { chunks: nested }),
                None => {
                    chunks.push(DiffChunk::DeletedWords { text: deleted_text });
                    chunks.push(DiffChunk::AddedWords {
                        text: inserted_text,
                    });
                }
            }
        }
    }

    deleted.clear();
    inserted.clear();
}

/// Text of a pure insertion. A line break opening a word-bearing insertion
/// separates it from the unchanged context rather than belonging to the
/// inserted words, so the first break of a leading newline run is left out
/// of the chunk. Any further breaks are real blank lines and stay in.
fn added_text(inserted: &[Token]) -> String {
    let leads_with_break = inserted
        .first()
        .is_some_and(|token| token.kind() == TokenKind::Newline);
    let has_words = inserted
        .iter()
        .any(|token| matches!(token.kind(), TokenKind::Word | TokenKind::Other));

    if !(leads_with_break && has_words) {
        return concatenated(inserted);
    }

    let mut text = without_first_break(inserted[0].text()).to_owned();
    text.push_str(&concatenated(&inserted[1..]));
    text
}

/// Drop the first line-break sequence of a newline run, keeping the rest.
fn without_first_break(run: &str) -> &str {
    run.strip_prefix("\r\n")
        .or_else(|| run.strip_prefix('\r'))
        .or_else(|| run.strip_prefix('\n'))
        .unwrap_or(run)
}

fn concatenated(tokens: &[Token]) -> String {
    tokens.iter().map(Token::text).collect()
}
