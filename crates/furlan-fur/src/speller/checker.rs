// Word correctness: phonetic clusters, radix tree, known error patterns

use std::sync::Arc;

use furlan_core::character::{has_letter, normalize_apostrophes};
use furlan_core::enums::WordState;
use furlan_radix::RadixTree;

use crate::error::Error;
use crate::phonetic::{PhoneticHashes, phonetic_hashes};
use crate::store::{LexiconStore, split_cluster};

/// Decides whether single words are spelled correctly.
///
/// Lookups run cheapest first: the system phonetic clusters, the user
/// clusters, radix tree containment, then the known-error table. A word
/// whose phonetic key has a non-empty cluster is correct, whether or not the
/// cluster lists that exact spelling.
#[derive(Clone)]
pub struct WordChecker {
    store: Arc<dyn LexiconStore>,
    radix: Option<Arc<RadixTree>>,
}

impl WordChecker {
    pub fn new(store: Arc<dyn LexiconStore>, radix: Option<Arc<RadixTree>>) -> Self {
        Self { store, radix }
    }

    pub fn store(&self) -> &Arc<dyn LexiconStore> {
        &self.store
    }

    /// Classify `word` as `Correct`, `Incorrect`, or `Unverified` when the
    /// system word table could not be queried.
    pub fn check_word(&self, word: &str) -> WordState {
        match self.is_correct(word) {
            Ok(true) => WordState::Correct,
            Ok(false) => WordState::Incorrect,
            Err(err) => {
                log::warn!("cannot verify {word:?}: {err}");
                WordState::Unverified
            }
        }
    }

    /// Like [`check_word`](Self::check_word), but surfaces store errors.
    ///
    /// Words without any letter (numbers, stray symbols) are accepted.
    pub fn is_correct(&self, word: &str) -> Result<bool, Error> {
        let word = normalize_apostrophes(word.trim());
        if word.is_empty() || !has_letter(&word) {
            return Ok(true);
        }
        let lower = word.to_lowercase();
        let hashes = phonetic_hashes(&lower);

        if cluster_hit(&hashes, |k| self.store.lookup_system(k))? {
            return Ok(true);
        }
        match cluster_hit(&hashes, |k| self.store.lookup_user(k)) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(err) if err.is_unavailable() => log::debug!("user words skipped: {err}"),
            Err(err) => return Err(err),
        }
        if self.radix.as_ref().is_some_and(|tree| tree.contains(&lower)) {
            return Ok(true);
        }
        // A known misspelling is wrong whatever comes after.
        match self.store.lookup_system_error(&word) {
            Ok(Some(_)) => return Ok(false),
            Ok(None) => {}
            Err(err) if err.is_unavailable() => log::debug!("error table skipped: {err}"),
            Err(err) => return Err(err),
        }
        Ok(false)
    }
}

/// True when either phonetic key maps to a cluster with at least one word.
fn cluster_hit<F>(hashes: &PhoneticHashes, lookup: F) -> Result<bool, Error>
where
    F: Fn(&str) -> Result<Option<String>, Error>,
{
    for key in hashes.keys() {
        if let Some(list) = lookup(key)? {
            if split_cluster(&list).next().is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}
