// Shared enums: word states, check outcomes, store operation results

use serde::{Deserialize, Serialize};

/// Lifecycle of a word inside a checked text.
///
/// `Unchecked` moves to `Correct` or `Incorrect` (or `Unverified` when a
/// required store could not be queried). A checked word can then be
/// `Ignored` or `Added` by an explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordState {
    Unchecked,
    Correct,
    Incorrect,
    /// The word could not be verified because a required store was unavailable.
    Unverified,
    /// Treated as correct without touching any dictionary.
    Ignored,
    /// Written to the user dictionary, then treated as correct.
    Added,
}

impl WordState {
    /// Whether the word counts as correctly spelled.
    pub fn is_correct(self) -> bool {
        matches!(self, Self::Correct | Self::Ignored | Self::Added)
    }

    /// Whether the word has gone through a check (or a user action).
    pub fn is_checked(self) -> bool {
        !matches!(self, Self::Unchecked)
    }
}

/// Outcome of adding a word to the user dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddWordResult {
    Success,
    AlreadyPresent,
    /// Nothing to add (empty word or empty phonetic key).
    NotFound,
    /// The user dictionary could not be written.
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_states() {
        assert!(WordState::Correct.is_correct());
        assert!(WordState::Ignored.is_correct());
        assert!(WordState::Added.is_correct());
        assert!(!WordState::Incorrect.is_correct());
        assert!(!WordState::Unverified.is_correct());
        assert!(!WordState::Unchecked.is_correct());
    }

    #[test]
    fn checked_states() {
        assert!(!WordState::Unchecked.is_checked());
        assert!(WordState::Incorrect.is_checked());
        assert!(WordState::Ignored.is_checked());
    }
}
