// Radix tree binary format: flag bits and bounds-checked field reads
//
// Node:  [edge_count: u8][edge] * edge_count
// Edge:  [flags: u8][label: flags & 0x1F bytes][child_offset: u32 LE, absent for leaves]
//
// The child offset is relative to the first byte (the flags byte) of the edge
// that carries it. The root node starts at offset 0.

/// Bit 7: the path ending at this edge is a word.
pub const FLAG_WORD: u8 = 0x80;

/// Bit 6: the word is stored as an uppercase-only entry (meaningful only
/// together with [`FLAG_WORD`]).
pub const FLAG_UPPER: u8 = 0x40;

/// Bit 5: the edge has no child node and no child offset field.
pub const FLAG_LEAF: u8 = 0x20;

/// Bits 0-4: label length in bytes.
pub const LABEL_LEN_MASK: u8 = 0x1F;

/// Longest label an edge can carry.
pub const MAX_LABEL_LEN: usize = LABEL_LEN_MASK as usize;

/// Size of the child offset field.
pub const CHILD_OFFSET_SIZE: usize = 4;

/// Most edges a node header can announce.
pub const MAX_EDGES: usize = u8::MAX as usize;

/// Decoded flags byte of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFlags(pub u8);

impl EdgeFlags {
    #[inline]
    pub fn is_word(self) -> bool {
        self.0 & FLAG_WORD != 0
    }

    #[inline]
    pub fn is_upper(self) -> bool {
        self.is_word() && self.0 & FLAG_UPPER != 0
    }

    #[inline]
    pub fn is_leaf(self) -> bool {
        self.0 & FLAG_LEAF != 0
    }

    #[inline]
    pub fn label_len(self) -> usize {
        (self.0 & LABEL_LEN_MASK) as usize
    }

    /// Total encoded size of an edge with these flags.
    #[inline]
    pub fn encoded_len(self) -> usize {
        1 + self.label_len() + if self.is_leaf() { 0 } else { CHILD_OFFSET_SIZE }
    }
}

/// Read a single byte, or `None` past the end of the buffer.
#[inline]
pub fn read_u8(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

/// Read a little-endian `u32`, or `None` if any of its bytes is out of range.
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(CHILD_OFFSET_SIZE)?;
    let bytes = data.get(offset..end)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Length of the longest common prefix of two byte strings.
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
