// FurlanHandle: single entry point for Friulian spell checking.
//
// Owns the dictionary tables, the optional radix tree and the frequency
// cache, and shares them between the word checker, the suggestion engine
// and every `SpellChecker` it hands out. Without a radix tree the handle
// runs degraded: containment and edit-distance neighbors are skipped.

use std::path::Path;
use std::sync::Arc;

use furlan_core::enums::{AddWordResult, WordState};
use furlan_core::report::{TextReport, WordReport};
use furlan_radix::RadixTree;

use crate::cache::FrequencyCache;
use crate::error::Error;
use crate::phonetic::{PhoneticHashes, phonetic_hashes};
use crate::speller::{CheckOptions, SpellChecker, WordChecker};
use crate::store::memory::files;
use crate::store::{LexiconStore, MemoryStore, StoreKind};
use crate::suggestion::{SuggestOptions, SuggestionEngine};

/// Top-level handle owning every Friulian spell checking component.
pub struct FurlanHandle {
    store: Arc<dyn LexiconStore>,
    radix: Option<Arc<RadixTree>>,
    cache: Arc<FrequencyCache>,
    checker: WordChecker,
    engine: Arc<SuggestionEngine>,
    check_options: CheckOptions,
}

impl FurlanHandle {
    /// Build a handle over an existing store and optional tree, with
    /// default options.
    pub fn new(store: Arc<dyn LexiconStore>, radix: Option<RadixTree>) -> Self {
        Self::with_options(store, radix, SuggestOptions::default(), CheckOptions::default())
    }

    pub fn with_options(
        store: Arc<dyn LexiconStore>,
        radix: Option<RadixTree>,
        suggest_options: SuggestOptions,
        check_options: CheckOptions,
    ) -> Self {
        let radix = radix.map(Arc::new);
        let cache = Arc::new(FrequencyCache::new());
        let checker = WordChecker::new(store.clone(), radix.clone());
        let engine = Arc::new(SuggestionEngine::new(
            store.clone(),
            radix.clone(),
            cache.clone(),
            suggest_options,
        ));
        log::info!(
            "Friulian handle ready ({})",
            if radix.is_some() { "with radix tree" } else { "degraded, no radix tree" }
        );
        Self {
            store,
            radix,
            cache,
            checker,
            engine,
            check_options,
        }
    }

    /// Load a dictionary directory. Both `words.rt` and `words.tsv` must be
    /// present; a missing tree is reported as an unavailable store.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let path = dir.join(files::RADIX_TREE);
        if !path.is_file() {
            return Err(Error::unavailable(
                StoreKind::RadixTree,
                format!("{} not found", path.display()),
            ));
        }
        let radix = RadixTree::open(&path)?;
        let store = MemoryStore::load_dir(dir)?;
        Ok(Self::new(Arc::new(store), Some(radix)))
    }

    /// Like [`open`](Self::open), but runs without the radix tree when
    /// `words.rt` is missing.
    pub fn open_degraded(dir: impl AsRef<Path>) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let path = dir.join(files::RADIX_TREE);
        let radix = if path.is_file() {
            Some(RadixTree::open(&path)?)
        } else {
            log::warn!("{} not found, radix tier disabled", path.display());
            None
        };
        let store = MemoryStore::load_dir(dir)?;
        Ok(Self::new(Arc::new(store), radix))
    }

    /// Whether the handle runs without a radix tree.
    pub fn is_degraded(&self) -> bool {
        self.radix.is_none()
    }

    pub fn store(&self) -> &Arc<dyn LexiconStore> {
        &self.store
    }

    pub fn cache(&self) -> &Arc<FrequencyCache> {
        &self.cache
    }

    pub fn suggest_options(&self) -> &SuggestOptions {
        self.engine.options()
    }

    /// Replace the suggestion options. The frequency cache is kept.
    pub fn set_suggest_options(&mut self, options: SuggestOptions) {
        self.engine = Arc::new(SuggestionEngine::new(
            self.store.clone(),
            self.radix.clone(),
            self.cache.clone(),
            options,
        ));
    }

    pub fn set_max_suggestions(&mut self, max: usize) {
        let options = SuggestOptions {
            max_suggestions: max,
            ..self.engine.options().clone()
        };
        self.set_suggest_options(options);
    }

    pub fn set_check_options(&mut self, options: CheckOptions) {
        self.check_options = options;
    }

    pub fn check_word(&self, word: &str) -> WordState {
        self.checker.check_word(word)
    }

    /// Suggestions for `word`; empty when the word is already correct.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, Error> {
        if self.checker.is_correct(word)? {
            return Ok(Vec::new());
        }
        self.engine.suggest(word)
    }

    /// Suggestions for `word` whether or not it is correct.
    pub fn suggest_always(&self, word: &str) -> Result<Vec<String>, Error> {
        self.engine.suggest(word)
    }

    /// Check one word and attach suggestions when it is incorrect.
    pub fn check_word_report(&self, word: &str) -> Result<WordReport, Error> {
        let is_correct = self.checker.is_correct(word)?;
        let suggestions = if is_correct {
            Vec::new()
        } else {
            self.engine.suggest(word)?
        };
        Ok(WordReport {
            original: word.to_string(),
            word: word.to_string(),
            is_correct,
            suggestions,
        })
    }

    /// Check a whole text.
    pub fn check_text(&self, text: &str) -> Result<TextReport, Error> {
        let mut checker = self.spell_checker();
        checker.execute_spell_check(text);
        checker.report()
    }

    /// A fresh text checker sharing this handle's tables.
    pub fn spell_checker(&self) -> SpellChecker {
        SpellChecker::new(
            self.checker.clone(),
            self.engine.clone(),
            self.check_options.clone(),
        )
    }

    pub fn add_user_word(&self, word: &str) -> AddWordResult {
        self.store.add_user_word(word)
    }

    pub fn phonetic_hashes(&self, word: &str) -> PhoneticHashes {
        phonetic_hashes(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furlan_radix::RadixTreeBuilder;
    use std::fs;

    fn handle() -> FurlanHandle {
        let store = MemoryStore::new()
            .with_system_words(["cjase", "furlan", "aghe"])
            .with_frequency("cjase", 50);
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["cjase", "furlan", "aghe"]);
        FurlanHandle::new(Arc::new(store), Some(builder.build().unwrap()))
    }

    #[test]
    fn checks_and_suggests() {
        let h = handle();
        assert!(!h.is_degraded());
        assert_eq!(h.check_word("cjase"), WordState::Correct);
        assert_eq!(h.check_word("cjasa"), WordState::Incorrect);
        assert_eq!(h.suggest("cjasa").unwrap(), vec!["cjase"]);
        assert!(h.suggest("cjase").unwrap().is_empty());
        assert_eq!(h.suggest_always("cjase").unwrap()[0], "cjase");
    }

    #[test]
    fn word_report() {
        let h = handle();
        let report = h.check_word_report("Cjasa").unwrap();
        assert!(!report.is_correct);
        assert_eq!(report.suggestions, vec!["Cjase"]);
        assert!(h.check_word_report("aghe").unwrap().is_correct);
    }

    #[test]
    fn text_report() {
        let report = handle().check_text("cjase furlan cjasa").unwrap();
        assert_eq!(report.total_words, 3);
        assert_eq!(report.incorrect_count, 1);
        assert_eq!(report.incorrect_words[0].word, "cjasa");
    }

    #[test]
    fn added_words_become_correct() {
        let h = handle();
        assert_eq!(h.add_user_word("blecs"), AddWordResult::Success);
        assert_eq!(h.check_word("blecs"), WordState::Correct);
        assert_eq!(h.add_user_word("blecs"), AddWordResult::AlreadyPresent);
    }

    #[test]
    fn max_suggestions_setter() {
        let store = MemoryStore::new().with_system_words(["cjase", "cjape", "cjope"]);
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["cjase", "cjape", "cjope"]);
        let mut h = FurlanHandle::new(Arc::new(store), Some(builder.build().unwrap()));
        // "cjupe" shares its phonetic key with "cjope", so it checks correct.
        assert_eq!(h.check_word("cjupe"), WordState::Correct);
        assert!(h.suggest("cjupe").unwrap().is_empty());
        assert_eq!(h.suggest_always("cjupe").unwrap().len(), 2);
        h.set_max_suggestions(1);
        assert_eq!(h.suggest_options().max_suggestions, 1);
        assert_eq!(h.suggest_always("cjupe").unwrap(), vec!["cjape"]);
    }

    #[test]
    fn degraded_without_tree() {
        let store = MemoryStore::new().with_system_words(["cjase"]);
        let h = FurlanHandle::new(Arc::new(store), None);
        assert!(h.is_degraded());
        assert_eq!(h.check_word("cjase"), WordState::Correct);
        assert!(h.suggest("cjasa").unwrap().is_empty());
    }

    #[test]
    fn open_requires_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(files::SYSTEM_WORDS), "").unwrap();
        let err = FurlanHandle::open(dir.path()).err().unwrap();
        assert!(matches!(
            err,
            Error::StoreUnavailable {
                store: StoreKind::RadixTree,
                ..
            }
        ));
        let h = FurlanHandle::open_degraded(dir.path()).unwrap();
        assert!(h.is_degraded());
    }
}
