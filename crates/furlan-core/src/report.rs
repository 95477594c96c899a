// Per-word and per-text check results handed to callers

use serde::{Deserialize, Serialize};

/// Result of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordReport {
    /// The word as it appeared in the input text.
    pub original: String,
    /// The current form of the word (differs from `original` after a swap).
    pub word: String,
    pub is_correct: bool,
    /// Ranked suggestions, empty for correct words.
    pub suggestions: Vec<String>,
}

/// Result of checking a whole text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextReport {
    pub processed_text: String,
    pub total_words: usize,
    pub incorrect_count: usize,
    /// Incorrect words in text order.
    pub incorrect_words: Vec<WordReport>,
}

impl TextReport {
    /// True when every word of the text was accepted.
    pub fn is_clean(&self) -> bool {
        self.incorrect_count == 0
    }
}
