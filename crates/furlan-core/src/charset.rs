// Single-byte charset (ISO-8859-1) used by serialized dictionary labels

/// Error raised when text cannot be represented in the dictionary charset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("character {ch:?} at index {index} is not representable in ISO-8859-1")]
pub struct CharsetError {
    pub ch: char,
    pub index: usize,
}

/// Encode a string into ISO-8859-1 bytes.
///
/// Every code point up to U+00FF maps to the byte of the same value; anything
/// above that is an error.
pub fn encode(text: &str) -> Result<Vec<u8>, CharsetError> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| u8::try_from(u32::from(ch)).map_err(|_| CharsetError { ch, index }))
        .collect()
}

/// Decode ISO-8859-1 bytes into a string. Every byte value is valid.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
