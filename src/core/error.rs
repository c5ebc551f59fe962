//! Error types.
//!
//! Only configuration problems are errors. Stale taps, full slot sets and
//! outdated resolution tickets are silent no-ops handled where they occur.

use thiserror::Error;

/// Result type alias using `MemoError`.
pub type Result<T> = std::result::Result<T, MemoError>;

/// Errors surfaced to the setup flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoError {
    /// A fair board cannot be built from the given inputs.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The image source was refused access (e.g. gallery permission).
    #[error("permission denied by image source {source_name}")]
    PermissionDenied { source_name: String },

    /// The image source could not produce any images.
    #[error("image source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A grid preset string did not match any known size.
    #[error("unknown grid size {0:?}")]
    UnknownGridSize(String),
}

impl MemoError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Whether the setup flow should ask for a different configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. } | Self::UnknownGridSize(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MemoError::invalid("need 8 images, got 3");
        assert_eq!(err.to_string(), "invalid configuration: need 8 images, got 3");

        let err = MemoError::UnknownGridSize("9x9".into());
        assert_eq!(err.to_string(), "unknown grid size \"9x9\"");
    }

    #[test]
    fn test_is_configuration() {
        assert!(MemoError::invalid("x").is_configuration());
        assert!(MemoError::UnknownGridSize("x".into()).is_configuration());
        assert!(!MemoError::PermissionDenied { source_name: "gallery".into() }.is_configuration());
    }
}
