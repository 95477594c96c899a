// Edit-distance-1 candidate generation
//
// The walk follows the query down the tree. At the first byte where an edge
// label and the query disagree, the four single edits that would make the
// query agree with the label at that byte are tried: substitution,
// insertion, deletion and transposition. Each edited remainder is confirmed
// by an exact lookup from the same edge, so only stored words are emitted.
// Edits past the end of the query (append one byte) and of a word (drop the
// final byte) are handled where the label boundary meets the query end.

use crate::format::common_prefix_len;
use crate::lookup::{MAX_DEPTH, lookup_from};
use crate::node::{Edge, Node};
use crate::{RadixMatch, WordCase};

/// Raw matches in discovery order, duplicates included.
pub(crate) fn edit_distance_one(root: Node<'_>, query: &[u8]) -> Vec<(Vec<u8>, WordCase)> {
    let mut walker = Walker { out: Vec::new() };
    let mut prefix = Vec::with_capacity(query.len() + 1);
    walker.walk(root, &mut prefix, query, 0);
    walker.out
}

struct Walker {
    out: Vec<(Vec<u8>, WordCase)>,
}

impl Walker {
    fn emit(&mut self, prefix: &[u8], tail: &[u8], case: WordCase) {
        let mut word = Vec::with_capacity(prefix.len() + tail.len());
        word.extend_from_slice(prefix);
        word.extend_from_slice(tail);
        self.out.push((word, case));
    }

    fn walk(&mut self, node: Node<'_>, prefix: &mut Vec<u8>, rest: &[u8], depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }
        for edge in node.edges() {
            let label = edge.label();
            if label.is_empty() {
                continue;
            }
            let i = common_prefix_len(label, rest);

            if i == label.len() {
                // The whole label matches: keep following the query.
                if let Some(child) = edge.child() {
                    let mark = prefix.len();
                    prefix.extend_from_slice(label);
                    self.walk(child, prefix, &rest[i..], depth + 1);
                    prefix.truncate(mark);
                }
                // Drop the last byte of the query.
                if rest.len() == label.len() + 1 {
                    if let Some(case) = edge.word_case() {
                        self.emit(prefix, label, case);
                    }
                }
            } else if i == rest.len() {
                // The query ends inside this label: append one byte.
                if label.len() == rest.len() + 1 {
                    if let Some(case) = edge.word_case() {
                        self.emit(prefix, label, case);
                    }
                }
            } else {
                self.edit_at(&edge, prefix, rest, i, depth);
            }
        }
    }

    fn edit_at(&mut self, edge: &Edge<'_>, prefix: &[u8], rest: &[u8], i: usize, depth: usize) {
        let wanted = edge.label()[i];

        let mut substituted = rest.to_vec();
        substituted[i] = wanted;
        self.confirm(edge, prefix, &substituted, depth);

        let mut inserted = Vec::with_capacity(rest.len() + 1);
        inserted.extend_from_slice(&rest[..i]);
        inserted.push(wanted);
        inserted.extend_from_slice(&rest[i..]);
        self.confirm(edge, prefix, &inserted, depth);

        if rest.get(i + 1) == Some(&wanted) {
            let mut deleted = Vec::with_capacity(rest.len() - 1);
            deleted.extend_from_slice(&rest[..i]);
            deleted.extend_from_slice(&rest[i + 1..]);
            self.confirm(edge, prefix, &deleted, depth);

            let mut transposed = rest.to_vec();
            transposed.swap(i, i + 1);
            self.confirm(edge, prefix, &transposed, depth);
        }
    }

    /// Emit `prefix + candidate` if the candidate is spelled by this edge
    /// and the subtree below it.
    fn confirm(&mut self, edge: &Edge<'_>, prefix: &[u8], candidate: &[u8], depth: usize) {
        let label = edge.label();
        if !candidate.starts_with(label) {
            return;
        }
        let case = if candidate.len() == label.len() {
            edge.word_case()
        } else {
            edge.child()
                .and_then(|child| lookup_from(child, &candidate[label.len()..], depth + 1))
        };
        if let Some(case) = case {
            self.emit(prefix, candidate, case);
        }
    }
}

/// Collapse repeated words, keeping first-seen order. A word reached both
/// as a lowercase and as an uppercase-only entry keeps the lowercase form.
pub(crate) fn dedup(raw: Vec<(Vec<u8>, WordCase)>) -> Vec<(Vec<u8>, WordCase)> {
    let mut index: hashbrown::HashMap<Vec<u8>, usize> = hashbrown::HashMap::new();
    let mut out: Vec<(Vec<u8>, WordCase)> = Vec::with_capacity(raw.len());
    for (word, case) in raw {
        match index.get(&word) {
            Some(&at) => {
                if case == WordCase::Lower {
                    out[at].1 = WordCase::Lower;
                }
            }
            None => {
                index.insert(word.clone(), out.len());
                out.push((word, case));
            }
        }
    }
    out
}

pub(crate) fn to_matches(raw: Vec<(Vec<u8>, WordCase)>) -> Vec<RadixMatch> {
    dedup(raw)
        .into_iter()
        .map(|(bytes, case)| RadixMatch {
            word: furlan_core::charset::decode(&bytes),
            case,
        })
        .collect()
}
