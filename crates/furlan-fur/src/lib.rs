//! Friulian language module.
//!
//! Phonetic hashing, dictionary lookups, suggestion generation and spell
//! checking for Friulian, built on the radix tree of `furlan-radix`.
//!
//! # Architecture
//!
//! - [`phonetic`] -- Two-key phonetic hashing, accent-tolerant Levenshtein, collation
//! - [`store`] -- The `LexiconStore` lookup facade and its in-memory/TSV implementation
//! - [`cache`] -- Concurrent frequency cache
//! - [`suggestion`] -- Tiered suggestion engine (feature `suggest`)
//! - [`tokenizer`] -- Word/punctuation/whitespace tokenizer (feature `tokenize`)
//! - [`speller`] -- Word checking and text-level spell checking (feature `spell`)
//! - [`handle`] -- `FurlanHandle`, the single entry point (feature `handle`)

pub mod cache;
pub mod error;
pub mod phonetic;
pub mod store;

#[cfg(feature = "suggest")]
pub mod suggestion;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "spell")]
pub mod speller;

#[cfg(feature = "handle")]
pub mod handle;

pub use error::Error;

#[cfg(feature = "handle")]
pub use handle::FurlanHandle;
