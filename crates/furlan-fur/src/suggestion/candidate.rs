// Suggestion candidates, their source tiers and the merge table

use std::cmp::Ordering;

use hashbrown::HashMap;

use crate::phonetic::friulian_cmp;

pub const WEIGHT_USER_EXCEPTION: u32 = 1000;
pub const WEIGHT_SELF_MATCH: u32 = 400;
pub const WEIGHT_USER_DICT: u32 = 350;
pub const WEIGHT_SYSTEM_ERROR: u32 = 300;

/// Where a candidate came from. Variants are declared from lowest to
/// highest priority, so `Ord` ranks tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// System phonetic cluster (or frequency-table scan), scored by frequency.
    SystemPhonetic,
    /// Radix tree edit-distance-1 neighbor, scored by frequency.
    Radix,
    /// System error-pattern correction.
    SystemError,
    /// User phonetic cluster.
    UserDict,
    /// The input itself, case-insensitively.
    SelfMatch,
    /// User error-pattern correction.
    UserException,
}

impl Tier {
    /// Fixed weight of the tier, or `None` when candidates are scored by
    /// corpus frequency.
    pub fn weight(self) -> Option<u32> {
        match self {
            Tier::UserException => Some(WEIGHT_USER_EXCEPTION),
            Tier::SelfMatch => Some(WEIGHT_SELF_MATCH),
            Tier::UserDict => Some(WEIGHT_USER_DICT),
            Tier::SystemError => Some(WEIGHT_SYSTEM_ERROR),
            Tier::Radix | Tier::SystemPhonetic => None,
        }
    }
}

/// A scored suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Lowercase while candidates are merged; cased like the input once
    /// returned from the engine.
    pub word: String,
    pub tier: Tier,
    /// Tier weight or corpus frequency.
    pub score: u32,
    /// Edit distance from the input (0 for direct corrections).
    pub distance: usize,
    /// The dictionary only knows the word capitalized (proper nouns).
    pub proper: bool,
}

impl Candidate {
    /// Ranking order: nearest first, then highest score, then Friulian
    /// alphabetical order.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.score.cmp(&self.score))
            .then_with(|| friulian_cmp(&self.word, &other.word))
    }
}

/// Candidates keyed by lowercase word. When a word arrives from several
/// tiers the highest-priority tier's values are kept, whatever the arrival
/// order.
#[derive(Debug, Default)]
pub struct CandidateTable {
    entries: HashMap<String, Candidate>,
}

impl CandidateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, candidate: Candidate) {
        match self.entries.get_mut(&candidate.word) {
            Some(existing) => {
                if candidate.tier > existing.tier {
                    *existing = candidate;
                } else if candidate.tier == existing.tier && !candidate.proper {
                    existing.proper = false;
                }
            }
            None => {
                self.entries.insert(candidate.word.clone(), candidate);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Candidate> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain into a ranked vector.
    pub fn into_ranked(self) -> Vec<Candidate> {
        let mut ranked: Vec<Candidate> = self.entries.into_values().collect();
        ranked.sort_by(Candidate::rank_cmp);
        ranked
    }
}

impl Extend<Candidate> for CandidateTable {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.offer(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(word: &str, tier: Tier, score: u32, distance: usize) -> Candidate {
        Candidate {
            word: word.to_string(),
            tier,
            score,
            distance,
            proper: false,
        }
    }

    #[test]
    fn tier_order() {
        assert!(Tier::UserException > Tier::SelfMatch);
        assert!(Tier::SelfMatch > Tier::UserDict);
        assert!(Tier::UserDict > Tier::SystemError);
        assert!(Tier::SystemError > Tier::Radix);
        assert!(Tier::Radix > Tier::SystemPhonetic);
        assert_eq!(Tier::Radix.weight(), None);
        assert_eq!(Tier::SelfMatch.weight(), Some(400));
    }

    #[test]
    fn higher_tier_wins_regardless_of_order() {
        let mut table = CandidateTable::new();
        table.offer(cand("cjase", Tier::SystemPhonetic, 5, 2));
        table.offer(cand("cjase", Tier::SystemError, 300, 0));
        assert_eq!(table.get("cjase").unwrap().tier, Tier::SystemError);

        let mut table = CandidateTable::new();
        table.offer(cand("cjase", Tier::SystemError, 300, 0));
        table.offer(cand("cjase", Tier::SystemPhonetic, 5, 2));
        assert_eq!(table.get("cjase").unwrap().score, 300);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lowercase_entry_clears_proper_flag() {
        let mut table = CandidateTable::new();
        table.offer(Candidate {
            proper: true,
            ..cand("udin", Tier::Radix, 0, 1)
        });
        table.offer(cand("udin", Tier::Radix, 0, 1));
        assert!(!table.get("udin").unwrap().proper);
    }

    #[test]
    fn ranking_distance_then_score_then_collation() {
        let mut table = CandidateTable::new();
        table.extend([
            cand("b", Tier::SystemPhonetic, 80, 1),
            cand("a", Tier::SystemPhonetic, 120, 1),
            cand("c", Tier::SystemError, 300, 0),
            cand("\u{e0}", Tier::Radix, 80, 1),
            cand("d", Tier::Radix, 999, 2),
        ]);
        let words: Vec<String> = table.into_ranked().into_iter().map(|c| c.word).collect();
        assert_eq!(words, vec!["c", "a", "\u{e0}", "b", "d"]);
    }
}
