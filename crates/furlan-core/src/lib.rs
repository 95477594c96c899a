//! Shared types and utilities for the Friulian spell checker.
//!
//! - [`case`] -- Case classification and re-casing of suggestions
//! - [`character`] -- Friulian character tables (apostrophes, accented vowels, collation)
//! - [`charset`] -- Single-byte charset used by serialized dictionaries
//! - [`enums`] -- Word states and store operation outcomes
//! - [`report`] -- Per-word and per-text check results

pub mod case;
pub mod character;
pub mod charset;
pub mod enums;
pub mod report;
