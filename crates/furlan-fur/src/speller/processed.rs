// Elements of a checked text: words with their state, and everything else

use furlan_core::case::{self, CaseClass};
use furlan_core::enums::WordState;

use crate::tokenizer::{Token, TokenKind};

/// A word of a checked text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedWord {
    /// The word as it appeared in the text.
    pub original: String,
    /// The word as it will be written back; changed by a swap.
    pub current: String,
    pub state: WordState,
    /// Case class of `original`, applied to replacements.
    pub case: CaseClass,
}

impl ProcessedWord {
    pub fn new(word: impl Into<String>) -> Self {
        let original = word.into();
        Self {
            case: case::classify(&original),
            current: original.clone(),
            original,
            state: WordState::Unchecked,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.state.is_correct()
    }

    /// Whether the word was checked and rejected.
    pub fn is_incorrect(&self) -> bool {
        self.state == WordState::Incorrect
    }

    /// Replace the current text with `replacement` in the original's case.
    pub fn swap(&mut self, replacement: &str) {
        self.current = case::apply(self.case, replacement);
        self.state = WordState::Correct;
    }
}

/// A piece of a checked text, in text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedElement {
    Word(ProcessedWord),
    /// Punctuation or whitespace, copied through unchanged.
    Other(String),
}

impl ProcessedElement {
    pub fn text(&self) -> &str {
        match self {
            Self::Word(word) => &word.current,
            Self::Other(text) => text,
        }
    }

    pub fn as_word(&self) -> Option<&ProcessedWord> {
        match self {
            Self::Word(word) => Some(word),
            Self::Other(_) => None,
        }
    }

    pub fn as_word_mut(&mut self) -> Option<&mut ProcessedWord> {
        match self {
            Self::Word(word) => Some(word),
            Self::Other(_) => None,
        }
    }
}

impl From<Token> for ProcessedElement {
    fn from(token: Token) -> Self {
        match token.kind {
            TokenKind::Word => Self::Word(ProcessedWord::new(token.text)),
            TokenKind::Punctuation | TokenKind::Whitespace => Self::Other(token.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_is_unchecked() {
        let w = ProcessedWord::new("Cjase");
        assert_eq!(w.state, WordState::Unchecked);
        assert_eq!(w.case, CaseClass::UcFirst);
        assert_eq!(w.current, "Cjase");
        assert!(!w.is_correct());
        assert!(!w.is_incorrect());
    }

    #[test]
    fn swap_keeps_case() {
        let mut w = ProcessedWord::new("CJASA");
        w.state = WordState::Incorrect;
        w.swap("cjase");
        assert_eq!(w.current, "CJASE");
        assert_eq!(w.original, "CJASA");
        assert!(w.is_correct());
    }

    #[test]
    fn tokens_become_elements() {
        let word: ProcessedElement = Token {
            kind: TokenKind::Word,
            text: "aghe".into(),
        }
        .into();
        assert_eq!(word.as_word().map(|w| w.original.as_str()), Some("aghe"));

        let comma: ProcessedElement = Token {
            kind: TokenKind::Punctuation,
            text: ",".into(),
        }
        .into();
        assert_eq!(comma.text(), ",");
        assert!(comma.as_word().is_none());
    }
}
