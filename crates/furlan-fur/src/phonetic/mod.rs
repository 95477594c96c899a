// Phonetic hashing and distance metrics for Friulian words

pub mod encoder;
pub mod levenshtein;

pub use encoder::{PhoneticHashes, are_phonetically_similar, phonetic_code, phonetic_hashes};
pub use levenshtein::{friulian_cmp, levenshtein, sort_friulian};
