// Error type shared by stores, the suggestion engine and the handle

use std::path::PathBuf;

use furlan_radix::RadixError;

use crate::store::StoreKind;

/// Errors raised by Friulian spell checking components.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A backing table could not be reached. Callers may continue in a
    /// degraded mode when the table is optional.
    #[error("{store} store unavailable: {reason}")]
    StoreUnavailable { store: StoreKind, reason: String },

    /// A table that must map each key once holds several entries for it.
    #[error("{store} table has {count} entries for key {key:?}")]
    DuplicateKey {
        store: StoreKind,
        key: String,
        count: usize,
    },

    #[error("radix tree: {0}")]
    Radix(#[from] RadixError),

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {reason}")]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}

impl Error {
    pub fn unavailable(store: StoreKind, reason: impl Into<String>) -> Self {
        Error::StoreUnavailable {
            store,
            reason: reason.into(),
        }
    }

    /// True for availability problems, which optional tiers absorb.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::StoreUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::unavailable(StoreKind::User, "not opened");
        assert_eq!(err.to_string(), "user words store unavailable: not opened");
        assert!(err.is_unavailable());

        let err = Error::DuplicateKey {
            store: StoreKind::Errors,
            key: "sbaliat".into(),
            count: 2,
        };
        assert_eq!(err.to_string(), "errors table has 2 entries for key \"sbaliat\"");
        assert!(!err.is_unavailable());
    }

    #[test]
    fn radix_errors_convert() {
        let err: Error = RadixError::Empty.into();
        assert!(matches!(err, Error::Radix(RadixError::Empty)));
    }
}
