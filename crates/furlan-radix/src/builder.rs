// Serialize a word list into the radix tree binary format

use std::collections::BTreeMap;

use crate::format::{CHILD_OFFSET_SIZE, FLAG_LEAF, FLAG_UPPER, FLAG_WORD, MAX_EDGES, MAX_LABEL_LEN};
use crate::{RadixError, RadixTree, WordCase};

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<u8, TrieNode>,
    word: Option<WordCase>,
}

/// Collects words and writes them out as a radix tree.
///
/// Labels are compressed (single-child chains without word boundaries are
/// merged up to 31 bytes) and every node lists its edges in ascending byte
/// order, which the lookup relies on.
///
/// ```
/// use furlan_radix::{RadixTreeBuilder, WordCase};
///
/// let mut builder = RadixTreeBuilder::new();
/// builder.insert("cjase").unwrap();
/// builder.insert_with_case("Udin", WordCase::Upper).unwrap();
/// let tree = builder.build().unwrap();
/// assert!(tree.contains("cjase"));
/// assert_eq!(tree.lookup("udin"), Some(WordCase::Upper));
/// ```
#[derive(Debug, Default)]
pub struct RadixTreeBuilder {
    root: TrieNode,
    len: usize,
}

impl RadixTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct words inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a lowercase word.
    pub fn insert(&mut self, word: &str) -> Result<(), RadixError> {
        self.insert_with_case(word, WordCase::Lower)
    }

    /// Insert a word with an explicit case tag. The word is stored
    /// lowercased; [`WordCase::Upper`] marks it as an uppercase-only entry.
    /// Empty words are ignored.
    pub fn insert_with_case(&mut self, word: &str, case: WordCase) -> Result<(), RadixError> {
        let bytes = furlan_core::charset::encode(&word.to_lowercase())?;
        if bytes.is_empty() {
            return Ok(());
        }
        let mut node = &mut self.root;
        for b in bytes {
            node = node.children.entry(b).or_default();
        }
        match node.word {
            None => {
                node.word = Some(case);
                self.len += 1;
            }
            // A lowercase entry subsumes an uppercase-only one.
            Some(WordCase::Upper) if case == WordCase::Lower => node.word = Some(case),
            Some(_) => {}
        }
        Ok(())
    }

    /// Serialize to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RadixError> {
        let mut out = Vec::new();
        write_node(&self.root, &mut out)?;
        Ok(out)
    }

    /// Serialize and wrap the result in a [`RadixTree`].
    pub fn build(&self) -> Result<RadixTree, RadixError> {
        RadixTree::from_bytes(self.to_bytes()?)
    }
}

impl<'a> Extend<&'a str> for RadixTreeBuilder {
    /// Insert lowercase words, skipping any that do not fit the charset.
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            if let Err(err) = self.insert(word) {
                log::warn!("skipping {word:?}: {err}");
            }
        }
    }
}

/// Follow a single-child chain from `first` to build one compressed edge.
fn compress(first: u8, mut node: &TrieNode) -> (Vec<u8>, &TrieNode) {
    let mut label = vec![first];
    while node.word.is_none() && node.children.len() == 1 && label.len() < MAX_LABEL_LEN {
        let Some((&b, next)) = node.children.iter().next() else {
            break;
        };
        label.push(b);
        node = next;
    }
    (label, node)
}

fn write_node(node: &TrieNode, out: &mut Vec<u8>) -> Result<(), RadixError> {
    let edges: Vec<(Vec<u8>, &TrieNode)> = node
        .children
        .iter()
        .map(|(&b, child)| compress(b, child))
        .collect();
    if edges.len() > MAX_EDGES {
        return Err(RadixError::TooManyEdges(edges.len()));
    }
    out.push(edges.len() as u8);

    let mut pending = Vec::new();
    for (label, target) in &edges {
        let edge_start = out.len();
        let mut flags = label.len() as u8;
        if let Some(case) = target.word {
            flags |= FLAG_WORD;
            if case == WordCase::Upper {
                flags |= FLAG_UPPER;
            }
        }
        if target.children.is_empty() {
            flags |= FLAG_LEAF;
        }
        out.push(flags);
        out.extend_from_slice(label);
        if !target.children.is_empty() {
            pending.push((edge_start, out.len(), *target));
            out.extend_from_slice(&[0; CHILD_OFFSET_SIZE]);
        }
    }

    for (edge_start, field, target) in pending {
        let relative = u32::try_from(out.len() - edge_start)
            .map_err(|_| RadixError::OffsetOverflow(out.len()))?;
        out[field..field + CHILD_OFFSET_SIZE].copy_from_slice(&relative.to_le_bytes());
        write_node(target, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_writes_empty_root() {
        let builder = RadixTreeBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.to_bytes().unwrap(), vec![0]);
    }

    #[test]
    fn single_word_is_one_leaf_edge() {
        let mut builder = RadixTreeBuilder::new();
        builder.insert("furlan").unwrap();
        let bytes = builder.to_bytes().unwrap();
        assert_eq!(bytes, [&[1u8, FLAG_WORD | FLAG_LEAF | 6][..], b"furlan"].concat());
    }

    #[test]
    fn shared_prefix_splits_edge() {
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["cjase", "cjast"]);
        let bytes = builder.to_bytes().unwrap();
        // root: "cjas" -> child with "e" and "t"
        let mut expected = vec![1u8, 4];
        expected.extend_from_slice(b"cjas");
        expected.extend_from_slice(&9u32.to_le_bytes());
        expected.extend_from_slice(&[2, FLAG_WORD | FLAG_LEAF | 1, b'e', FLAG_WORD | FLAG_LEAF | 1, b't']);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn word_inside_chain_stops_compression() {
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["cjas", "cjase"]);
        let tree = builder.build().unwrap();
        let root_edge = tree.root().edges().next().unwrap();
        assert_eq!(root_edge.label(), b"cjas");
        assert!(root_edge.is_word());
        assert!(!root_edge.is_leaf());
    }

    #[test]
    fn long_words_split_at_31_bytes() {
        let long = "a".repeat(40);
        let mut builder = RadixTreeBuilder::new();
        builder.insert(&long).unwrap();
        let tree = builder.build().unwrap();
        let first = tree.root().edges().next().unwrap();
        assert_eq!(first.label().len(), MAX_LABEL_LEN);
        assert!(!first.is_word());
        assert!(tree.contains(&long));
        assert!(!tree.contains(&long[..31]));
    }

    #[test]
    fn duplicates_count_once() {
        let mut builder = RadixTreeBuilder::new();
        builder.extend(["sede", "sede", "SEDE"]);
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn lowercase_wins_over_uppercase_tag() {
        let mut builder = RadixTreeBuilder::new();
        builder.insert_with_case("Roma", WordCase::Upper).unwrap();
        builder.insert("roma").unwrap();
        assert_eq!(builder.build().unwrap().lookup("roma"), Some(WordCase::Lower));
    }

    #[test]
    fn unencodable_word_is_rejected() {
        let mut builder = RadixTreeBuilder::new();
        assert!(matches!(
            builder.insert("l\u{2019}aghe"),
            Err(RadixError::Unencodable(_))
        ));
        builder.extend(["\u{0101}"]);
        assert!(builder.is_empty());
    }
}
