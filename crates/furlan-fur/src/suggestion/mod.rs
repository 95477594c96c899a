// Suggestion generation
//
// Candidates are gathered from every dictionary table, merged by tier
// priority, expanded across elisions and hyphens, then ranked and cased
// like the input.
//
// - `candidate`: tiers, scored candidates and the merge table
// - `sources`: one candidate source per dictionary table
// - `engine`: orchestration, expansion and ranking

pub mod candidate;
pub mod engine;
pub mod sources;

pub use candidate::{Candidate, CandidateTable, Tier};
pub use engine::SuggestionEngine;
pub use sources::{CandidateSource, default_sources};

/// Options for suggestion generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Most suggestions returned per word.
    pub max_suggestions: usize,
    /// Most radix tree neighbors considered per word.
    pub radix_candidates: usize,
    /// Also scan the whole frequency table for phonetically compatible
    /// words. Slow on large tables.
    pub scan_frequencies: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
            radix_candidates: 50,
            scan_frequencies: false,
        }
    }
}
