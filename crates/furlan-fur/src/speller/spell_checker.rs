// Text-level spell checking over tokenized elements

use std::sync::Arc;

use furlan_core::enums::{AddWordResult, WordState};
use furlan_core::report::{TextReport, WordReport};
use rayon::prelude::*;

use crate::error::Error;
use crate::speller::CheckOptions;
use crate::speller::checker::WordChecker;
use crate::speller::processed::{ProcessedElement, ProcessedWord};
use crate::suggestion::SuggestionEngine;
use crate::tokenizer::tokenize;

/// Holds the elements of the last checked text and the actions a user can
/// take on its words.
///
/// Word indexes count words only, in text order, as yielded by
/// [`processed_words`](Self::processed_words).
pub struct SpellChecker {
    checker: WordChecker,
    engine: Arc<SuggestionEngine>,
    options: CheckOptions,
    elements: Vec<ProcessedElement>,
    /// Element index of each word.
    word_positions: Vec<usize>,
}

impl SpellChecker {
    pub fn new(checker: WordChecker, engine: Arc<SuggestionEngine>, options: CheckOptions) -> Self {
        Self {
            checker,
            engine,
            options,
            elements: Vec::new(),
            word_positions: Vec::new(),
        }
    }

    /// Tokenize `text` and check every word, replacing any previous text.
    pub fn execute_spell_check(&mut self, text: &str) {
        self.clean();
        self.elements = tokenize(text).into_iter().map(ProcessedElement::from).collect();
        self.word_positions = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.as_word().is_some())
            .map(|(i, _)| i)
            .collect();

        let originals: Vec<&str> = self
            .processed_words()
            .map(|w| w.original.as_str())
            .collect();
        let checker = &self.checker;
        let states: Vec<WordState> = if self.options.parallel {
            originals.par_iter().map(|w| checker.check_word(w)).collect()
        } else {
            originals.iter().map(|w| checker.check_word(w)).collect()
        };

        for (&pos, state) in self.word_positions.iter().zip(states) {
            if let Some(word) = self.elements[pos].as_word_mut() {
                word.state = state;
            }
        }
        log::debug!(
            "checked {} words, {} incorrect",
            self.word_positions.len(),
            self.incorrect_words().len()
        );
    }

    /// Forget the last text.
    pub fn clean(&mut self) {
        self.elements.clear();
        self.word_positions.clear();
    }

    pub fn elements(&self) -> &[ProcessedElement] {
        &self.elements
    }

    pub fn processed_words(&self) -> impl Iterator<Item = &ProcessedWord> {
        self.word_positions
            .iter()
            .filter_map(|&pos| self.elements[pos].as_word())
    }

    pub fn word(&self, index: usize) -> Option<&ProcessedWord> {
        let pos = *self.word_positions.get(index)?;
        self.elements[pos].as_word()
    }

    fn word_mut(&mut self, index: usize) -> Option<&mut ProcessedWord> {
        let pos = *self.word_positions.get(index)?;
        self.elements[pos].as_word_mut()
    }

    /// Incorrect words with their word index.
    pub fn incorrect_words(&self) -> Vec<(usize, &ProcessedWord)> {
        self.processed_words()
            .enumerate()
            .filter(|(_, w)| w.is_incorrect())
            .collect()
    }

    /// Suggestions for the word at `index`; empty when it is not incorrect.
    pub fn suggestions(&self, index: usize) -> Result<Vec<String>, Error> {
        match self.word(index) {
            Some(word) if word.is_incorrect() => self.engine.suggest(&word.current),
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the word at `index` with `suggestion`, cased like the
    /// original. Returns false when there is no such word.
    pub fn swap_word_with_suggested(&mut self, index: usize, suggestion: &str) -> bool {
        match self.word_mut(index) {
            Some(word) => {
                word.swap(suggestion);
                true
            }
            None => false,
        }
    }

    /// Accept the word at `index` without touching any dictionary.
    pub fn ignore_word(&mut self, index: usize) -> bool {
        match self.word_mut(index) {
            Some(word) if word.state.is_checked() => {
                word.state = WordState::Ignored;
                true
            }
            _ => false,
        }
    }

    /// Write the word at `index` to the user dictionary and accept it.
    pub fn add_word(&mut self, index: usize) -> AddWordResult {
        let Some(current) = self.word(index).map(|w| w.current.clone()) else {
            return AddWordResult::NotFound;
        };
        let result = self.checker.store().add_user_word(&current);
        if matches!(result, AddWordResult::Success | AddWordResult::AlreadyPresent) {
            if let Some(word) = self.word_mut(index) {
                word.state = WordState::Added;
            }
        }
        result
    }

    /// The text with every swap applied.
    pub fn processed_text(&self) -> String {
        self.elements.iter().map(ProcessedElement::text).collect()
    }

    /// Summary of the last text, with suggestions for every incorrect word.
    pub fn report(&self) -> Result<TextReport, Error> {
        let incorrect = self.incorrect_words();
        let suggest = |word: &ProcessedWord| -> Result<WordReport, Error> {
            Ok(WordReport {
                original: word.original.clone(),
                word: word.current.clone(),
                is_correct: false,
                suggestions: self.engine.suggest(&word.current)?,
            })
        };
        let incorrect_words = if self.options.parallel {
            incorrect
                .par_iter()
                .map(|&(_, w)| suggest(w))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            incorrect
                .iter()
                .map(|&(_, w)| suggest(w))
                .collect::<Result<Vec<_>, _>>()?
        };
        Ok(TextReport {
            processed_text: self.processed_text(),
            total_words: self.word_positions.len(),
            incorrect_count: incorrect_words.len(),
            incorrect_words,
        })
    }
}
