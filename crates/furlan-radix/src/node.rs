// Zero-copy views over radix tree nodes and edges

use crate::WordCase;
use crate::format::{EdgeFlags, read_u8, read_u32_le};

/// A node: an edge count followed by that many edges.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Node<'a> {
    pub(crate) fn new(data: &'a [u8], offset: usize) -> Self {
        Self { data, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of edges announced by the header, or `None` when the header
    /// lies outside the buffer.
    pub fn edge_count(&self) -> Option<usize> {
        read_u8(self.data, self.offset).map(usize::from)
    }

    /// Edges in stored (ascending label) order. Iteration stops early at
    /// the first edge that does not fit in the buffer.
    pub fn edges(&self) -> Edges<'a> {
        Edges {
            data: self.data,
            next: self.offset + 1,
            remaining: self.edge_count().unwrap_or(0),
        }
    }
}

/// A single edge: flags, label bytes and an optional child node.
#[derive(Debug, Clone, Copy)]
pub struct Edge<'a> {
    data: &'a [u8],
    offset: usize,
    flags: EdgeFlags,
    label: &'a [u8],
}

impl<'a> Edge<'a> {
    /// Decode the edge whose flags byte is at `offset`.
    pub(crate) fn parse(data: &'a [u8], offset: usize) -> Option<Self> {
        let flags = EdgeFlags(read_u8(data, offset)?);
        let label_start = offset + 1;
        let label = data.get(label_start..label_start + flags.label_len())?;
        if !flags.is_leaf() {
            read_u32_le(data, label_start + flags.label_len())?;
        }
        Some(Self {
            data,
            offset,
            flags,
            label,
        })
    }

    pub fn flags(&self) -> EdgeFlags {
        self.flags
    }

    pub fn label(&self) -> &'a [u8] {
        self.label
    }

    pub fn is_word(&self) -> bool {
        self.flags.is_word()
    }

    pub fn is_leaf(&self) -> bool {
        self.flags.is_leaf()
    }

    /// Case class of the word ending on this edge, if it ends one.
    pub fn word_case(&self) -> Option<WordCase> {
        if !self.flags.is_word() {
            None
        } else if self.flags.is_upper() {
            Some(WordCase::Upper)
        } else {
            Some(WordCase::Lower)
        }
    }

    /// The child node, or `None` for leaves and offsets that point outside
    /// the buffer. A zero offset would point back at this edge and is
    /// rejected as well.
    pub fn child(&self) -> Option<Node<'a>> {
        if self.flags.is_leaf() {
            return None;
        }
        let field = read_u32_le(self.data, self.offset + 1 + self.label.len())?;
        if field == 0 {
            log::warn!("radix edge at {} has a zero child offset", self.offset);
            return None;
        }
        let target = self.offset.checked_add(field as usize)?;
        if target >= self.data.len() {
            log::warn!(
                "radix edge at {} points past the end of the tree ({} >= {})",
                self.offset,
                target,
                self.data.len()
            );
            return None;
        }
        Some(Node::new(self.data, target))
    }

    fn encoded_len(&self) -> usize {
        self.flags.encoded_len()
    }
}

/// Iterator over the edges of a node.
pub struct Edges<'a> {
    data: &'a [u8],
    next: usize,
    remaining: usize,
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match Edge::parse(self.data, self.next) {
            Some(edge) => {
                self.remaining -= 1;
                self.next += edge.encoded_len();
                Some(edge)
            }
            None => {
                log::warn!("truncated radix edge at offset {}", self.next);
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
