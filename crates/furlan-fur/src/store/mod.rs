// Key-value lookup facade over the Friulian dictionary tables
//
// The spell checker never touches dictionary files directly. Every lookup
// goes through `LexiconStore`, so the tables can live in memory, in files
// or behind any other backend.

pub mod memory;
pub mod tsv;

use std::fmt;

use furlan_core::enums::AddWordResult;

use crate::error::Error;

pub use memory::MemoryStore;

/// The tables behind a [`LexiconStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    /// System words grouped by phonetic code.
    System,
    /// User words grouped by phonetic code.
    User,
    /// Known misspelling -> correction.
    Errors,
    /// User-defined misspelling -> correction.
    UserErrors,
    /// Word -> corpus frequency.
    Frequencies,
    /// Words that take an elided article (`l'`).
    Elisions,
    /// The serialized word tree used for containment and neighbors.
    RadixTree,
}

impl StoreKind {
    pub fn name(self) -> &'static str {
        match self {
            StoreKind::System => "system words",
            StoreKind::User => "user words",
            StoreKind::Errors => "errors",
            StoreKind::UserErrors => "user errors",
            StoreKind::Frequencies => "frequencies",
            StoreKind::Elisions => "elisions",
            StoreKind::RadixTree => "radix tree",
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookups needed by the spell checker and the suggestion engine.
///
/// Phonetic clusters are returned as stored: a comma-joined word list.
/// Every method except [`add_user_word`](Self::add_user_word) is a pure read.
pub trait LexiconStore: Send + Sync {
    fn lookup_system(&self, hash: &str) -> Result<Option<String>, Error>;

    fn lookup_user(&self, hash: &str) -> Result<Option<String>, Error>;

    fn lookup_system_error(&self, word: &str) -> Result<Option<String>, Error>;

    fn lookup_user_error(&self, word: &str) -> Result<Option<String>, Error>;

    /// Corpus frequency, 0 when the word is unknown.
    fn lookup_frequency(&self, word: &str) -> Result<u32, Error>;

    fn has_elision(&self, word: &str) -> Result<bool, Error>;

    fn add_user_word(&self, word: &str) -> AddWordResult;

    /// Every word with a recorded frequency. Used by the optional
    /// frequency-table scan; stores that cannot enumerate return nothing.
    fn frequency_words(&self) -> Result<Vec<String>, Error> {
        Ok(Vec::new())
    }
}

/// Split a stored cluster into its words, skipping empty entries.
pub fn split_cluster(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|w| !w.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_cluster_skips_blanks() {
        let words: Vec<_> = split_cluster("cjase, cjas,,cjasis").collect();
        assert_eq!(words, vec!["cjase", "cjas", "cjasis"]);
        assert_eq!(split_cluster("").count(), 0);
    }

    #[test]
    fn store_kind_names() {
        assert_eq!(StoreKind::UserErrors.to_string(), "user errors");
    }
}
