// Spell checking of words and whole texts

pub mod checker;
pub mod processed;
pub mod spell_checker;

pub use checker::WordChecker;
pub use processed::{ProcessedElement, ProcessedWord};
pub use spell_checker::SpellChecker;

/// Options for text checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    /// Check the words of a text on the rayon thread pool. Results are
    /// always reported in text order.
    pub parallel: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}
