#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The character class a [`Token`] was built from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of Unicode letters, digits, or `_`.
    Word,
    /// A run of spaces and tabs.
    Whitespace,
    /// A run of `\r` and `\n` line terminators.
    Newline,
    /// Any other single character.
    Other,
}

/// An immutable span of input text, produced once by
/// [`word_tokenizer`](crate::word_tokenizer) and never mutated.
///
/// Equality is what the aligner matches on. For most tokens it means the
/// same kind and the same text; two [`TokenKind::Newline`] tokens instead
/// compare equal when they contain the same number of line breaks, so a
/// lone `\r`, a lone `\n`, and a `\r\n` occupying the same structural
/// position align as unchanged, while an extra blank line does not.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Eq)]
pub struct Token {
    text: String,
    kind: TokenKind,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: String) -> Self {
        debug_assert!(!text.is_empty(), "tokens must span at least one character");
        Self { text, kind }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Number of line breaks in this token; `\r\n` counts once.
    ///
    /// Zero for every kind but [`TokenKind::Newline`].
    #[must_use]
    pub fn line_breaks(&self) -> usize {
        let line_feeds = self.text.matches('\n').count();
        let bare_carriage_returns = self
            .text
            .as_bytes()
            .windows(2)
            .filter(|pair| pair[0] == b'\r' && pair[1] != b'\n')
            .count()
            + usize::from(self.text.ends_with('\r'));
        line_feeds + bare_carriage_returns
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (TokenKind::Newline, TokenKind::Newline) => {
                self.line_breaks() == other.line_breaks()
            }
            (own_kind, other_kind) => own_kind == other_kind && self.text == other.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("\n", 1)]
    #[test_case("\r", 1)]
    #[test_case("\r\n", 1)]
    #[test_case("\n\n", 2)]
    #[test_case("\r\r", 2)]
    #[test_case("\r\n\n", 2)]
    #[test_case("\r\r\n", 2)]
    #[test_case("\n\r", 2)]
    fn test_line_breaks(text: &str, expected: usize) {
        let token = Token::new(TokenKind::Newline, text.to_owned());
        assert_eq!(token.line_breaks(), expected);
    }

    #[test]
    fn test_newline_representation_is_ignored_by_equality() {
        let carriage_return = Token::new(TokenKind::Newline, "\r".to_owned());
        let line_feed = Token::new(TokenKind::Newline, "\n".to_owned());
        let both = Token::new(TokenKind::Newline, "\r\n".to_owned());

        assert_eq!(carriage_return, line_feed);
        assert_eq!(line_feed, both);
        assert_eq!(carriage_return, both);
    }

    #[test]
    fn test_extra_blank_line_is_not_equal() {
        let single = Token::new(TokenKind::Newline, "\n".to_owned());
        let double = Token::new(TokenKind::Newline, "\n\n".to_owned());

        assert_ne!(single, double);
    }

    #[test]
    fn test_word_tokens_compare_by_text() {
        let fist = Token::new(TokenKind::Word, "Fist_Go".to_owned());
        let fast = Token::new(TokenKind::Word, "Fast_Go".to_owned());

        assert_ne!(fist, fast);
        assert_eq!(fist, fist.clone());
    }

    #[test]
    fn test_kinds_never_mix() {
        let space = Token::new(TokenKind::Whitespace, " ".to_owned());
        let underscore = Token::new(TokenKind::Word, "_".to_owned());
        let dash = Token::new(TokenKind::Other, "-".to_owned());

        assert_ne!(space, underscore);
        assert_ne!(underscore, dash);
    }
}
