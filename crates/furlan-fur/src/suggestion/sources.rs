// Candidate sources: one per dictionary table consulted for suggestions

use furlan_radix::RadixTree;
use rayon::prelude::*;

use crate::error::Error;
use crate::phonetic::{PhoneticHashes, phonetic_hashes};
use crate::store::{LexiconStore, split_cluster};
use crate::suggestion::SuggestOptions;
use crate::suggestion::candidate::Tier;

/// Everything a source may consult for one word.
pub struct SourceContext<'a> {
    /// The word as typed.
    pub word: &'a str,
    pub lower: &'a str,
    pub hashes: &'a PhoneticHashes,
    pub store: &'a dyn LexiconStore,
    pub radix: Option<&'a RadixTree>,
    pub options: &'a SuggestOptions,
}

/// A word proposed by a source, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub word: String,
    /// Stored only in capitalized form.
    pub proper: bool,
}

impl Proposal {
    fn from_stored(word: &str) -> Self {
        Self {
            proper: word.chars().next().is_some_and(char::is_uppercase),
            word: word.to_string(),
        }
    }
}

/// A producer of suggestion candidates for one tier.
pub trait CandidateSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn tier(&self) -> Tier;

    /// A required source's availability errors abort the suggestion call;
    /// an optional source is skipped when its table is unavailable.
    fn required(&self) -> bool {
        false
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error>;
}

fn clusters<F>(ctx: &SourceContext<'_>, lookup: F) -> Result<Vec<Proposal>, Error>
where
    F: Fn(&str) -> Result<Option<String>, Error>,
{
    let mut out = Vec::new();
    for key in ctx.hashes.keys() {
        if let Some(list) = lookup(key)? {
            out.extend(split_cluster(&list).map(Proposal::from_stored));
        }
    }
    Ok(out)
}

/// Words sharing a phonetic code in the system dictionary.
pub struct SystemPhonetic;

impl CandidateSource for SystemPhonetic {
    fn name(&self) -> &'static str {
        "system phonetic"
    }

    fn tier(&self) -> Tier {
        Tier::SystemPhonetic
    }

    fn required(&self) -> bool {
        true
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        clusters(ctx, |key| ctx.store.lookup_system(key))
    }
}

/// Words sharing a phonetic code in the user dictionary.
pub struct UserPhonetic;

impl CandidateSource for UserPhonetic {
    fn name(&self) -> &'static str {
        "user phonetic"
    }

    fn tier(&self) -> Tier {
        Tier::UserDict
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        clusters(ctx, |key| ctx.store.lookup_user(key))
    }
}

/// Radix tree words one edit away.
pub struct RadixNeighbors;

impl CandidateSource for RadixNeighbors {
    fn name(&self) -> &'static str {
        "radix"
    }

    fn tier(&self) -> Tier {
        Tier::Radix
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        let Some(tree) = ctx.radix else {
            return Ok(Vec::new());
        };
        Ok(tree
            .suggest_ed1(ctx.lower)
            .into_iter()
            .take(ctx.options.radix_candidates)
            .map(|m| Proposal {
                proper: m.is_upper(),
                word: m.word,
            })
            .collect())
    }
}

/// Look up a correction for the word as typed, then lowercased.
fn correction<F>(ctx: &SourceContext<'_>, lookup: F) -> Result<Vec<Proposal>, Error>
where
    F: Fn(&str) -> Result<Option<String>, Error>,
{
    let mut found = lookup(ctx.word)?;
    if found.is_none() && ctx.lower != ctx.word {
        found = lookup(ctx.lower)?;
    }
    Ok(found
        .filter(|c| !c.is_empty())
        .map(|c| Proposal::from_stored(&c))
        .into_iter()
        .collect())
}

/// Known misspellings from the system error table.
pub struct SystemErrors;

impl CandidateSource for SystemErrors {
    fn name(&self) -> &'static str {
        "system errors"
    }

    fn tier(&self) -> Tier {
        Tier::SystemError
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        correction(ctx, |w| ctx.store.lookup_system_error(w))
    }
}

/// User-defined corrections.
pub struct UserErrors;

impl CandidateSource for UserErrors {
    fn name(&self) -> &'static str {
        "user errors"
    }

    fn tier(&self) -> Tier {
        Tier::UserException
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        correction(ctx, |w| ctx.store.lookup_user_error(w))
    }
}

/// Minimum code length for prefix compatibility in the frequency scan.
const SCAN_PREFIX_MIN: usize = 3;

fn codes_compatible(a: &str, b: &str) -> bool {
    a == b
        || (a.len() >= SCAN_PREFIX_MIN
            && b.len() >= SCAN_PREFIX_MIN
            && (a.starts_with(b) || b.starts_with(a)))
}

/// Full scan of the frequency table for words whose codes equal, or extend,
/// one of the input's codes. Expensive; enabled with
/// [`SuggestOptions::scan_frequencies`].
pub struct FrequencyScan;

impl CandidateSource for FrequencyScan {
    fn name(&self) -> &'static str {
        "frequency scan"
    }

    fn tier(&self) -> Tier {
        Tier::SystemPhonetic
    }

    fn collect(&self, ctx: &SourceContext<'_>) -> Result<Vec<Proposal>, Error> {
        let words = ctx.store.frequency_words()?;
        let ours = [ctx.hashes.primary.as_str(), ctx.hashes.secondary.as_str()];
        Ok(words
            .par_iter()
            .filter(|w| w.chars().count() >= 2)
            .filter(|w| {
                let theirs = phonetic_hashes(w);
                ours.iter().any(|a| {
                    codes_compatible(a, &theirs.primary) || codes_compatible(a, &theirs.secondary)
                })
            })
            .map(|w| Proposal::from_stored(w))
            .collect())
    }
}

/// Sources in the order they are consulted.
pub fn default_sources(options: &SuggestOptions) -> Vec<Box<dyn CandidateSource>> {
    let mut sources: Vec<Box<dyn CandidateSource>> = vec![Box::new(SystemPhonetic)];
    if options.scan_frequencies {
        sources.push(Box::new(FrequencyScan));
    }
    sources.push(Box::new(UserPhonetic));
    sources.push(Box::new(RadixNeighbors));
    sources.push(Box::new(SystemErrors));
    sources.push(Box::new(UserErrors));
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn with_ctx<R>(store: &MemoryStore, word: &str, f: impl FnOnce(&SourceContext<'_>) -> R) -> R {
        let lower = word.to_lowercase();
        let hashes = phonetic_hashes(&lower);
        let options = SuggestOptions::default();
        let ctx = SourceContext {
            word,
            lower: &lower,
            hashes: &hashes,
            store,
            radix: None,
            options: &options,
        };
        f(&ctx)
    }

    fn words(proposals: Vec<Proposal>) -> Vec<String> {
        proposals.into_iter().map(|p| p.word).collect()
    }

    #[test]
    fn system_phonetic_reads_both_codes() {
        let store = MemoryStore::new().with_system_words(["cjase", "cjasse"]);
        let found = with_ctx(&store, "cjase", |ctx| SystemPhonetic.collect(ctx)).unwrap();
        // Same cluster under both codes
        assert_eq!(words(found), vec!["cjase", "cjasse", "cjase", "cjasse"]);
    }

    #[test]
    fn capitalized_cluster_entry_is_proper() {
        let store = MemoryStore::new().with_system_words(["Udin"]);
        let found = with_ctx(&store, "udin", |ctx| SystemPhonetic.collect(ctx)).unwrap();
        assert!(found.iter().all(|p| p.proper));
    }

    #[test]
    fn corrections_try_lowercase_second() {
        let store = MemoryStore::new().with_error("sbaliat", "sbali\u{e2}t");
        let found = with_ctx(&store, "Sbaliat", |ctx| SystemErrors.collect(ctx)).unwrap();
        assert_eq!(words(found), vec!["sbali\u{e2}t"]);
    }

    #[test]
    fn radix_source_without_tree_is_empty() {
        let store = MemoryStore::new();
        let found = with_ctx(&store, "cjase", |ctx| RadixNeighbors.collect(ctx)).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn frequency_scan_matches_code_prefixes() {
        let store = MemoryStore::new()
            .with_frequency("furlan", 10)
            .with_frequency("furlane", 5)
            .with_frequency("cjase", 9);
        let mut found = words(with_ctx(&store, "furlan", |ctx| FrequencyScan.collect(ctx)).unwrap());
        found.sort();
        assert_eq!(found, vec!["furlan", "furlane"]);
    }

    #[test]
    fn compatible_codes() {
        assert!(codes_compatible("fYl65", "fYl65"));
        assert!(codes_compatible("fYl6", "fYl657"));
        assert!(!codes_compatible("fY", "fYl65"));
        assert!(!codes_compatible("A6A7", "fYl65"));
    }

    #[test]
    fn scan_is_opt_in() {
        let names: Vec<_> = default_sources(&SuggestOptions::default())
            .iter()
            .map(|s| s.name())
            .collect();
        assert!(!names.contains(&"frequency scan"));
        let options = SuggestOptions {
            scan_frequencies: true,
            ..SuggestOptions::default()
        };
        assert_eq!(default_sources(&options).len(), 6);
    }
}
