// Suggestion engine: tier merging, elision and hyphen expansion, ranking

use std::sync::Arc;

use furlan_core::case::{self, CaseClass};
use furlan_core::character::normalize_apostrophes;
use furlan_radix::RadixTree;
use hashbrown::HashSet;

use crate::cache::FrequencyCache;
use crate::error::Error;
use crate::phonetic::{levenshtein, phonetic_hashes};
use crate::store::LexiconStore;
use crate::suggestion::SuggestOptions;
use crate::suggestion::candidate::{Candidate, CandidateTable, Tier, WEIGHT_SELF_MATCH};
use crate::suggestion::sources::{CandidateSource, Proposal, SourceContext, default_sources};

/// Elided prefixes and the full form they stand for.
const ELISIONS: [(&str, &str); 3] = [("d'", "di "), ("un'", "une "), ("l'", "la ")];

/// Produces ranked, cased suggestions for a word.
pub struct SuggestionEngine {
    store: Arc<dyn LexiconStore>,
    radix: Option<Arc<RadixTree>>,
    cache: Arc<FrequencyCache>,
    options: SuggestOptions,
    sources: Vec<Box<dyn CandidateSource>>,
}

impl SuggestionEngine {
    pub fn new(
        store: Arc<dyn LexiconStore>,
        radix: Option<Arc<RadixTree>>,
        cache: Arc<FrequencyCache>,
        options: SuggestOptions,
    ) -> Self {
        let sources = default_sources(&options);
        Self {
            store,
            radix,
            cache,
            options,
            sources,
        }
    }

    /// Replace the candidate sources.
    pub fn with_sources(mut self, sources: Vec<Box<dyn CandidateSource>>) -> Self {
        self.sources = sources;
        self
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<FrequencyCache> {
        &self.cache
    }

    /// Suggestions for `word`, best first, cased like the input.
    pub fn suggest(&self, word: &str) -> Result<Vec<String>, Error> {
        Ok(self
            .suggest_ranked(word)?
            .into_iter()
            .map(|c| c.word)
            .collect())
    }

    /// Like [`suggest`](Self::suggest), keeping tier, score and distance.
    pub fn suggest_ranked(&self, word: &str) -> Result<Vec<Candidate>, Error> {
        let word = normalize_apostrophes(word.trim());
        if word.is_empty() {
            return Ok(Vec::new());
        }
        let lower = word.to_lowercase();
        let class = case::classify(&word);

        let mut table = self.basic(&word, &lower)?;
        self.expand_elision(&word, &lower, &mut table)?;
        self.expand_hyphen(&word, &mut table)?;
        Ok(self.finish(table, class))
    }

    /// Candidates from every source for a single word, merged by tier.
    fn basic(&self, word: &str, lower: &str) -> Result<CandidateTable, Error> {
        let mut table = CandidateTable::new();
        if lower.is_empty() {
            return Ok(table);
        }
        let hashes = phonetic_hashes(lower);
        let ctx = SourceContext {
            word,
            lower,
            hashes: &hashes,
            store: self.store.as_ref(),
            radix: self.radix.as_deref(),
            options: &self.options,
        };
        for source in &self.sources {
            let proposals = match source.collect(&ctx) {
                Ok(found) => found,
                Err(err) if err.is_unavailable() && !source.required() => {
                    log::debug!("skipping {} for {lower:?}: {err}", source.name());
                    continue;
                }
                Err(err) => return Err(err),
            };
            log::debug!("{}: {} candidates for {lower:?}", source.name(), proposals.len());
            for proposal in proposals {
                let candidate = self.score(source.tier(), proposal, lower)?;
                table.offer(candidate);
            }
        }
        Ok(table)
    }

    fn score(&self, tier: Tier, proposal: Proposal, lower: &str) -> Result<Candidate, Error> {
        let key = proposal.word.to_lowercase();
        let (tier, score, distance) = if key == lower {
            (Tier::SelfMatch, WEIGHT_SELF_MATCH, 1)
        } else {
            match tier {
                Tier::Radix => (tier, self.frequency(&proposal.word)?, 1),
                Tier::SystemPhonetic => (
                    tier,
                    self.frequency(&proposal.word)?,
                    levenshtein(lower, &key),
                ),
                Tier::UserDict => (
                    tier,
                    tier.weight().unwrap_or_default(),
                    levenshtein(lower, &key),
                ),
                Tier::SystemError | Tier::UserException | Tier::SelfMatch => {
                    (tier, tier.weight().unwrap_or_default(), 0)
                }
            }
        };
        Ok(Candidate {
            word: key,
            tier,
            score,
            distance,
            proper: proposal.proper,
        })
    }

    fn frequency(&self, word: &str) -> Result<u32, Error> {
        match self
            .cache
            .get_or_load(word, |w| self.store.lookup_frequency(w))
        {
            Ok(freq) => Ok(freq),
            Err(err) if err.is_unavailable() => {
                log::debug!("no frequency for {word:?}: {err}");
                Ok(0)
            }
            Err(err) => Err(err),
        }
    }

    fn elidable(&self, word: &str) -> Result<bool, Error> {
        match self.store.has_elision(word) {
            Ok(found) => Ok(found),
            Err(err) if err.is_unavailable() => {
                log::debug!("elision table unavailable: {err}");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// `d'`, `un'` and `l'` words: suggest for the rest of the word and
    /// re-attach the article, one edit further away. An `l'` suggestion
    /// keeps the elided form when the word takes elision, and always offers
    /// the full `la ` form.
    fn expand_elision(&self, word: &str, lower: &str, table: &mut CandidateTable) -> Result<(), Error> {
        let Some(&(elided, full)) = ELISIONS
            .iter()
            .find(|(elided, _)| lower.starts_with(elided) && lower.len() > elided.len())
        else {
            return Ok(());
        };
        let skip = elided.chars().count();
        let Some((at, _)) = word.char_indices().nth(skip) else {
            return Ok(());
        };
        let rest = &word[at..];
        let suffix = self.basic(rest, &rest.to_lowercase())?;

        for candidate in suffix.into_ranked() {
            if elided == "l'" && self.elidable(&candidate.word)? {
                table.offer(attach(elided, &candidate, 1));
                table.offer(attach(full, &candidate, 2));
            } else {
                table.offer(attach(full, &candidate, 1));
            }
        }
        Ok(())
    }

    /// `left-right`: every pairing of suggestions for the two halves,
    /// joined by a space, with scores and distances added.
    fn expand_hyphen(&self, word: &str, table: &mut CandidateTable) -> Result<(), Error> {
        let mut parts = word.split('-');
        let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
            return Ok(());
        };
        if left.is_empty() || right.is_empty() {
            return Ok(());
        }
        let top = |part: &str| -> Result<Vec<Candidate>, Error> {
            let mut ranked = self.basic(part, &part.to_lowercase())?.into_ranked();
            ranked.truncate(self.options.max_suggestions);
            Ok(ranked)
        };
        let lefts = top(left)?;
        let rights = top(right)?;
        for l in &lefts {
            for r in &rights {
                table.offer(Candidate {
                    word: format!("{} {}", l.word, r.word),
                    tier: l.tier.min(r.tier),
                    score: l.score.saturating_add(r.score),
                    distance: l.distance + r.distance,
                    proper: false,
                });
            }
        }
        Ok(())
    }

    fn finish(&self, table: CandidateTable, class: CaseClass) -> Vec<Candidate> {
        let mut seen = HashSet::new();
        let mut out = Vec::with_capacity(self.options.max_suggestions);
        for mut candidate in table.into_ranked() {
            if out.len() >= self.options.max_suggestions {
                break;
            }
            let target = if candidate.proper && class == CaseClass::Lower {
                CaseClass::UcFirst
            } else {
                class
            };
            candidate.word = case::apply(target, &candidate.word);
            if seen.insert(candidate.word.clone()) {
                out.push(candidate);
            }
        }
        out
    }
}

fn attach(prefix: &str, candidate: &Candidate, extra: usize) -> Candidate {
    Candidate {
        word: format!("{prefix}{}", candidate.word),
        distance: candidate.distance + extra,
        proper: false,
        ..candidate.clone()
    }
}
