// In-memory lexicon store, populated programmatically or from TSV files

use std::fmt::Write as _;
use std::path::Path;

use furlan_core::enums::AddWordResult;
use hashbrown::{HashMap, HashSet};
use parking_lot::RwLock;

use crate::error::Error;
use crate::phonetic::phonetic_hashes;
use crate::store::{LexiconStore, StoreKind, split_cluster, tsv};

/// File names inside a dictionary directory.
pub mod files {
    pub const RADIX_TREE: &str = "words.rt";
    pub const SYSTEM_WORDS: &str = "words.tsv";
    pub const ERRORS: &str = "errors.tsv";
    pub const FREQUENCIES: &str = "frequencies.tsv";
    pub const ELISIONS: &str = "elisions.txt";
    pub const USER_WORDS: &str = "user_words.tsv";
    pub const USER_ERRORS: &str = "user_errors.tsv";
}

/// Lexicon tables held in hash maps.
///
/// System tables are immutable after construction. The user tables sit
/// behind a `RwLock` so words can be added through a shared reference.
///
/// ```
/// use furlan_fur::store::{LexiconStore, MemoryStore};
///
/// let store = MemoryStore::new()
///     .with_system_words(["cjase", "furlan"])
///     .with_frequency("cjase", 120)
///     .with_error("sbaliat", "sbaliât");
/// assert_eq!(store.lookup_frequency("cjase").unwrap(), 120);
/// assert_eq!(store.lookup_system_error("sbaliat").unwrap().as_deref(), Some("sbaliât"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    system: HashMap<String, String>,
    errors: HashMap<String, String>,
    frequencies: HashMap<String, u32>,
    elisions: HashSet<String>,
    user: RwLock<HashMap<String, String>>,
    user_errors: RwLock<HashMap<String, String>>,
    disabled: HashSet<StoreKind>,
}

/// Append `word` to the comma-joined cluster under `key`. Returns false if
/// the cluster already lists it.
fn push_to_cluster(map: &mut HashMap<String, String>, key: &str, word: &str) -> bool {
    match map.get_mut(key) {
        Some(list) => {
            if split_cluster(list).any(|w| w == word) {
                return false;
            }
            if !list.is_empty() {
                list.push(',');
            }
            list.push_str(word);
        }
        None => {
            map.insert(key.to_string(), word.to_string());
        }
    }
    true
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the tables of a dictionary directory.
    ///
    /// `words.tsv` is required. The other tables are optional and start
    /// empty when their file is missing. Every table except the elision
    /// list must map each key once; a repeated key is a
    /// [`Error::DuplicateKey`], never a merge.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let system = tsv::unique_map(
            StoreKind::System,
            tsv::read_required_pairs(&dir.join(files::SYSTEM_WORDS), StoreKind::System)?,
        )?;

        let errors = match tsv::read_pairs(&dir.join(files::ERRORS))? {
            Some(records) => tsv::unique_map(StoreKind::Errors, records)?,
            None => HashMap::new(),
        };
        let freq_path = dir.join(files::FREQUENCIES);
        let frequencies = match tsv::read_pairs(&freq_path)? {
            Some(records) => tsv::frequency_map(&freq_path, records)?,
            None => HashMap::new(),
        };
        let elisions: HashSet<String> = tsv::read_lines(&dir.join(files::ELISIONS))?
            .unwrap_or_default()
            .into_iter()
            .collect();
        let user = match tsv::read_pairs(&dir.join(files::USER_WORDS))? {
            Some(records) => tsv::unique_map(StoreKind::User, records)?,
            None => HashMap::new(),
        };
        let user_errors = match tsv::read_pairs(&dir.join(files::USER_ERRORS))? {
            Some(records) => tsv::unique_map(StoreKind::UserErrors, records)?,
            None => HashMap::new(),
        };

        log::debug!(
            "loaded dictionary tables from {}: {} phonetic keys, {} errors, {} frequencies, {} elisions",
            dir.display(),
            system.len(),
            errors.len(),
            frequencies.len(),
            elisions.len()
        );

        Ok(Self {
            system,
            errors,
            frequencies,
            elisions,
            user: RwLock::new(user),
            user_errors: RwLock::new(user_errors),
            disabled: HashSet::new(),
        })
    }

    /// Add a system word under both of its phonetic codes.
    pub fn insert_system_word(&mut self, word: &str) {
        let hashes = phonetic_hashes(word);
        for key in hashes.keys() {
            push_to_cluster(&mut self.system, key, word);
        }
    }

    pub fn with_system_words<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        for word in words {
            self.insert_system_word(word);
        }
        self
    }

    /// Store a raw cluster under a phonetic key, bypassing hashing.
    pub fn with_system_cluster(mut self, key: &str, words: &str) -> Self {
        for word in split_cluster(words) {
            push_to_cluster(&mut self.system, key, word);
        }
        self
    }

    pub fn with_error(mut self, wrong: &str, right: &str) -> Self {
        self.errors.insert(wrong.to_string(), right.to_string());
        self
    }

    pub fn with_frequency(mut self, word: &str, frequency: u32) -> Self {
        self.frequencies.insert(word.to_string(), frequency);
        self
    }

    pub fn with_elision(mut self, word: &str) -> Self {
        self.elisions.insert(word.to_string());
        self
    }

    pub fn with_user_words<'a>(self, words: impl IntoIterator<Item = &'a str>) -> Self {
        for word in words {
            self.add_user_word(word);
        }
        self
    }

    pub fn with_user_error(self, wrong: &str, right: &str) -> Self {
        self.user_errors
            .write()
            .insert(wrong.to_string(), right.to_string());
        self
    }

    /// Make every lookup on `kind` fail with [`Error::StoreUnavailable`],
    /// as if its backing table could not be opened.
    pub fn without(mut self, kind: StoreKind) -> Self {
        self.disabled.insert(kind);
        self
    }

    fn check(&self, kind: StoreKind) -> Result<(), Error> {
        if self.disabled.contains(&kind) {
            Err(Error::unavailable(kind, "table disabled"))
        } else {
            Ok(())
        }
    }

    pub fn user_word_count(&self) -> usize {
        self.user
            .read()
            .values()
            .flat_map(|list| split_cluster(list))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Write the user word table as TSV, keys sorted.
    pub fn save_user_words(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let user = self.user.read();
        let mut keys: Vec<&String> = user.keys().collect();
        keys.sort();
        let mut out = String::from("# user words: phonetic key<TAB>words\n");
        for key in keys {
            let _ = writeln!(out, "{key}\t{}", user[key]);
        }
        std::fs::write(path, out).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl LexiconStore for MemoryStore {
    fn lookup_system(&self, hash: &str) -> Result<Option<String>, Error> {
        self.check(StoreKind::System)?;
        Ok(self.system.get(hash).cloned())
    }

    fn lookup_user(&self, hash: &str) -> Result<Option<String>, Error> {
        self.check(StoreKind::User)?;
        Ok(self.user.read().get(hash).cloned())
    }

    fn lookup_system_error(&self, word: &str) -> Result<Option<String>, Error> {
        self.check(StoreKind::Errors)?;
        Ok(self.errors.get(word).cloned())
    }

    fn lookup_user_error(&self, word: &str) -> Result<Option<String>, Error> {
        self.check(StoreKind::UserErrors)?;
        Ok(self.user_errors.read().get(word).cloned())
    }

    fn lookup_frequency(&self, word: &str) -> Result<u32, Error> {
        self.check(StoreKind::Frequencies)?;
        Ok(self.frequencies.get(word).copied().unwrap_or(0))
    }

    fn has_elision(&self, word: &str) -> Result<bool, Error> {
        self.check(StoreKind::Elisions)?;
        Ok(self.elisions.contains(word))
    }

    fn add_user_word(&self, word: &str) -> AddWordResult {
        if self.disabled.contains(&StoreKind::User) {
            return AddWordResult::Error;
        }
        let word = word.trim();
        if word.is_empty() {
            return AddWordResult::NotFound;
        }
        let hashes = phonetic_hashes(word);
        // Held across the read-modify-write so concurrent adds of words
        // sharing a key cannot drop each other.
        let mut user = self.user.write();
        let present = hashes.keys().any(|key| {
            user.get(key)
                .is_some_and(|list| split_cluster(list).any(|w| w == word))
        });
        if present {
            return AddWordResult::AlreadyPresent;
        }
        for key in hashes.keys() {
            push_to_cluster(&mut user, key, word);
        }
        log::debug!("added user word {word:?}");
        AddWordResult::Success
    }

    fn frequency_words(&self) -> Result<Vec<String>, Error> {
        self.check(StoreKind::Frequencies)?;
        Ok(self.frequencies.keys().cloned().collect())
    }
}
