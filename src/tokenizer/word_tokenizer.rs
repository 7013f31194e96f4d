use super::token::{Token, TokenKind};

/// Splits text into the maximal runs the word-level differ aligns: word
/// characters (Unicode letters, digits, and `_`), space/tab whitespace, and
/// line terminators. Every other character becomes its own single-character
/// token.
///
/// Total over any input; `""` yields no tokens.
///
/// ## Example
///
/// ```not_rust
/// "Fist_Go there!" -> ["Fist_Go", " ", "there", "!"]
/// "V-8\r\n"        -> ["V", "-", "8", "\r\n"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();

    let mut run_start = 0;
    let mut run_kind = None;

    for (i, c) in text.char_indices() {
        let kind = classify(c);
        match run_kind {
            // `Other` characters never form runs
            Some(current) if current == kind && kind != TokenKind::Other => {}
            Some(current) => {
                result.push(Token::new(current, text[run_start..i].to_owned()));
                run_start = i;
                run_kind = Some(kind);
            }
            None => run_kind = Some(kind),
        }
    }

    if let Some(kind) = run_kind {
        result.push(Token::new(kind, text[run_start..].to_owned()));
    }

    result
}

fn classify(c: char) -> TokenKind {
    match c {
        '\r' | '\n' => TokenKind::Newline,
        ' ' | '\t' => TokenKind::Whitespace,
        _ if c.is_alphanumeric() || c == '_' => TokenKind::Word,
        _ => TokenKind::Other,
    }
}
