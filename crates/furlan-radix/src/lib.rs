//! Binary radix tree codec for Friulian word lists.
//!
//! The tree is a single immutable byte buffer. Nodes and edges are views
//! (an offset into the buffer) and are never allocated on their own, so a
//! loaded [`RadixTree`] can be shared freely between threads.
//!
//! - [`format`] -- Flag bits, field sizes and bounds-checked reads
//! - [`node`] -- Zero-copy node and edge views
//! - [`builder`] -- Serializer producing trees from word lists
//!
//! Exact lookup and edit-distance-1 enumeration live in private modules and
//! are reached through [`RadixTree`].

pub mod builder;
pub mod format;
mod lookup;
pub mod node;
mod suggest;

use std::fmt;
use std::path::{Path, PathBuf};

pub use builder::RadixTreeBuilder;
use furlan_core::charset::{self, CharsetError};
use node::Node;

/// Error type for loading and building radix trees.
#[derive(Debug, thiserror::Error)]
pub enum RadixError {
    #[error("cannot read radix tree {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("radix tree is empty")]
    Empty,
    #[error("radix tree too short: root node needs {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("word cannot be stored in the tree charset: {0}")]
    Unencodable(#[from] CharsetError),
    #[error("node has {0} edges, at most 255 fit in a node header")]
    TooManyEdges(usize),
    #[error("child offset does not fit in 32 bits at byte {0}")]
    OffsetOverflow(usize),
}

/// Case tag carried by a word edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCase {
    /// Ordinary lowercase entry.
    Lower,
    /// Entry that only exists in uppercase-initial form (proper nouns).
    Upper,
}

/// Marker appended by [`RadixMatch`]'s `Display` impl for uppercase-only
/// entries.
pub const UPPERCASE_MARKER: char = '*';

/// A word found by the edit-distance-1 walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixMatch {
    pub word: String,
    pub case: WordCase,
}

impl RadixMatch {
    pub fn is_upper(&self) -> bool {
        self.case == WordCase::Upper
    }
}

impl fmt::Display for RadixMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)?;
        if self.is_upper() {
            write!(f, "{UPPERCASE_MARKER}")?;
        }
        Ok(())
    }
}

/// A loaded radix tree.
pub struct RadixTree {
    data: Vec<u8>,
}

impl fmt::Debug for RadixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTree")
            .field("bytes", &self.data.len())
            .finish()
    }
}

impl RadixTree {
    /// Take ownership of a serialized tree.
    ///
    /// The root node must be complete: its header and every root edge have
    /// to fit in the buffer. Deeper truncation is tolerated and surfaces as
    /// missing words.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RadixError> {
        if data.is_empty() {
            return Err(RadixError::Empty);
        }
        let root = Node::new(&data, 0);
        let declared = root.edge_count().unwrap_or(0);
        let mut expected = 1;
        for edge in root.edges() {
            expected += edge.flags().encoded_len();
        }
        if root.edges().count() != declared {
            // The edge that failed to parse needs at least its flags byte.
            return Err(RadixError::TooShort {
                expected: expected + 1,
                actual: data.len(),
            });
        }
        log::debug!("radix tree loaded: {} bytes, {} root edges", data.len(), declared);
        Ok(Self { data })
    }

    /// Read a tree from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RadixError> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| RadixError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn root(&self) -> Node<'_> {
        Node::new(&self.data, 0)
    }

    /// Exact lookup. The word is matched byte-for-byte in the tree charset,
    /// so callers pass it lowercased. Words with characters outside the
    /// charset are never present.
    pub fn lookup(&self, word: &str) -> Option<WordCase> {
        let bytes = charset::encode(word).ok()?;
        if bytes.is_empty() {
            return None;
        }
        lookup::lookup_from(self.root(), &bytes, 0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Every stored word at edit distance 1 from `word` (one substitution,
    /// insertion, deletion or adjacent transposition), deduplicated in
    /// traversal order. An empty word has no neighbors.
    pub fn suggest_ed1(&self, word: &str) -> Vec<RadixMatch> {
        let Ok(bytes) = charset::encode(word) else {
            return Vec::new();
        };
        if bytes.is_empty() {
            return Vec::new();
        }
        suggest::to_matches(suggest::edit_distance_one(self.root(), &bytes))
    }

    /// Plain strings of [`suggest_ed1`](Self::suggest_ed1), at most `max`.
    pub fn words_ed1(&self, word: &str, max: usize) -> Vec<String> {
        let mut words: Vec<String> = self
            .suggest_ed1(word)
            .into_iter()
            .map(|m| m.word)
            .collect();
        words.truncate(max);
        words
    }

    /// Stored words starting with `prefix`, in byte order, at most `max`.
    /// An empty prefix matches nothing.
    pub fn words_with_prefix(&self, prefix: &str, max: usize) -> Vec<String> {
        let Ok(query) = charset::encode(prefix) else {
            return Vec::new();
        };
        if query.is_empty() {
            return Vec::new();
        }
        let mut out = Vec::new();
        match lookup::find_prefix(self.root(), &query, 0) {
            None => {}
            Some(lookup::PrefixHit::Node(node, mut path)) => {
                lookup::collect_words(node, &mut path, max, 0, &mut out);
            }
            Some(lookup::PrefixHit::Edge {
                mut spelled,
                case,
                child,
            }) => {
                if let Some(case) = case {
                    out.push((spelled.clone(), case));
                }
                if let Some(child) = child {
                    lookup::collect_words(child, &mut spelled, max, 0, &mut out);
                }
            }
        }
        out.truncate(max);
        out.into_iter()
            .map(|(bytes, _)| charset::decode(&bytes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(words: &[&str]) -> RadixTree {
        let mut builder = RadixTreeBuilder::new();
        builder.extend(words.iter().copied());
        builder.build().unwrap()
    }

    #[test]
    fn empty_buffer_is_rejected() {
        assert!(matches!(RadixTree::from_bytes(Vec::new()), Err(RadixError::Empty)));
    }

    #[test]
    fn truncated_root_is_rejected() {
        let mut bytes = tree(&["cjase", "furlan"]).as_bytes().to_vec();
        bytes.truncate(4);
        assert!(matches!(
            RadixTree::from_bytes(bytes),
            Err(RadixError::TooShort { .. })
        ));
    }

    #[test]
    fn root_with_no_edges_is_valid() {
        let tree = RadixTree::from_bytes(vec![0]).unwrap();
        assert!(!tree.contains("a"));
        assert!(tree.suggest_ed1("a").is_empty());
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let err = RadixTree::open("/nonexistent/words.rt").unwrap_err();
        assert!(matches!(err, RadixError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/words.rt"));
    }

    #[test]
    fn contains_inserted_words_only() {
        let t = tree(&["cjase", "cjast", "cjas", "furlan"]);
        for w in ["cjase", "cjast", "cjas", "furlan"] {
            assert!(t.contains(w), "{w}");
        }
        for w in ["", "c", "cja", "cjasei", "furla", "furlans", "zzz"] {
            assert!(!t.contains(w), "{w}");
        }
    }

    #[test]
    fn lookup_reports_uppercase_entries() {
        let mut builder = RadixTreeBuilder::new();
        builder.insert("cjase").unwrap();
        builder.insert_with_case("Cjas", WordCase::Upper).unwrap();
        let t = builder.build().unwrap();
        assert_eq!(t.lookup("cjase"), Some(WordCase::Lower));
        assert_eq!(t.lookup("cjas"), Some(WordCase::Upper));
    }

    #[test]
    fn non_latin1_word_is_absent() {
        let t = tree(&["aghe"]);
        assert!(!t.contains("\u{0101}ghe"));
        assert!(t.suggest_ed1("l\u{2019}aghe").is_empty());
    }

    #[test]
    fn accented_labels_round_trip() {
        let t = tree(&["furlan\u{e0}", "furlan\u{e2}", "fr\u{e2}s"]);
        assert!(t.contains("fr\u{e2}s"));
        assert_eq!(t.words_ed1("fras", 5), vec!["fr\u{e2}s".to_string()]);
    }

    #[test]
    fn ed1_substitution_in_order() {
        let t = tree(&["cjape", "cjepe", "cjope", "clupe", "crupe"]);
        assert_eq!(
            t.words_ed1("cjupe", 10),
            vec!["cjape", "cjepe", "cjope", "clupe", "crupe"]
        );
    }

    #[test]
    fn ed1_insertion_at_end() {
        let t = tree(&["furlan"]);
        assert_eq!(t.words_ed1("furla", 10), vec!["furlan"]);
    }

    #[test]
    fn ed1_deletion_at_end() {
        let t = tree(&["furlan"]);
        assert_eq!(t.words_ed1("furlann", 10), vec!["furlan"]);
    }

    #[test]
    fn ed1_doubled_letter_and_transposition() {
        let t = tree(&["cjase", "scuele"]);
        assert_eq!(t.words_ed1("cjjase", 10), vec!["cjase"]);
        assert_eq!(t.words_ed1("cjsae", 10), vec!["cjase"]);
        assert_eq!(t.words_ed1("scuelle", 10), vec!["scuele"]);
    }

    #[test]
    fn ed1_insertion_in_middle() {
        let t = tree(&["cjase"]);
        assert_eq!(t.words_ed1("cjse", 10), vec!["cjase"]);
    }

    #[test]
    fn ed1_excludes_exact_match_and_farther_words() {
        let t = tree(&["cjase", "cjasis"]);
        assert!(t.words_ed1("cjase", 10).is_empty());
    }

    #[test]
    fn empty_query_has_no_neighbors() {
        let t = tree(&["a", "e", "al"]);
        assert!(t.suggest_ed1("").is_empty());
        assert!(t.words_ed1("", 10).is_empty());
        assert_eq!(t.words_ed1("o", 10), vec!["a", "e"]);
    }

    #[test]
    fn ed1_truncates_to_max() {
        let t = tree(&["cjape", "cjepe", "cjope", "clupe", "crupe"]);
        assert_eq!(t.words_ed1("cjupe", 2), vec!["cjape", "cjepe"]);
    }

    #[test]
    fn ed1_marks_uppercase_entries() {
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["cjase", "cjast"]);
        builder.insert_with_case("Cjas", WordCase::Upper).unwrap();
        let t = builder.build().unwrap();
        let found = t.suggest_ed1("cjasa");
        let rendered: Vec<String> = found.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["cjase", "cjast", "cjas*"]);
        assert_eq!(t.words_ed1("cjasa", 10), vec!["cjase", "cjast", "cjas"]);
    }

    #[test]
    fn prefix_enumeration() {
        let t = tree(&["furlan", "furlane", "furlans", "fur", "cjase"]);
        assert_eq!(t.words_with_prefix("furl", 10), vec!["furlan", "furlane", "furlans"]);
        assert_eq!(t.words_with_prefix("fur", 2), vec!["fur", "furlan"]);
        assert!(t.words_with_prefix("", 10).is_empty());
        assert!(t.words_with_prefix("zz", 10).is_empty());
    }

    #[test]
    fn tree_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RadixTree>();
    }
}
