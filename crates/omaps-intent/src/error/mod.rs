//! Domain errors raised while turning inbound requests into commands.
//!
//! A recognizer that claims a request but cannot extract its required
//! parameters reports [`IntentError::MissingExtra`] or
//! [`IntentError::InvalidExtra`]; the dispatcher aborts on either. I/O errors
//! are wrapped in `Arc` to satisfy the `result_large_err` Clippy lint.

use std::sync::Arc;

use thiserror::Error;

/// Errors arising from request recognition, command persistence, and the
/// import queue.
#[derive(Debug, Error)]
pub enum IntentError {
    /// A recognized request lacks an extra the recognizer requires.
    #[error("{recognizer}: required extra '{key}' is missing")]
    MissingExtra {
        /// Recognizer that claimed the request.
        recognizer: &'static str,
        /// Extra key that was absent.
        key: String,
    },

    /// A recognized request carries an extra of the wrong type or value.
    #[error("{recognizer}: extra '{key}' must be {expected}")]
    InvalidExtra {
        /// Recognizer that claimed the request.
        recognizer: &'static str,
        /// Offending extra key.
        key: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// A data locator could not be parsed as a URI.
    #[error("invalid data locator '{locator}': {source}")]
    InvalidLocator {
        /// Text that failed to parse.
        locator: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// A command could not be serialized for persistence.
    #[error("failed to encode command: {0}")]
    EncodeCommand(#[source] serde_json::Error),

    /// A persisted command could not be reconstructed.
    #[error("failed to decode command: {message}")]
    DecodeCommand {
        /// Human-readable description of the failure.
        message: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The import worker has stopped accepting jobs.
    #[error("import queue is closed")]
    ImportQueueClosed,

    /// The import worker thread could not be started.
    #[error("failed to start import worker: {source}")]
    ImportWorker {
        /// Underlying spawn error.
        #[source]
        source: Arc<std::io::Error>,
    },
}

impl IntentError {
    /// Creates a missing extra error.
    #[must_use]
    pub fn missing_extra(recognizer: &'static str, key: impl Into<String>) -> Self {
        Self::MissingExtra {
            recognizer,
            key: key.into(),
        }
    }

    /// Creates an invalid extra error.
    #[must_use]
    pub fn invalid_extra(
        recognizer: &'static str,
        key: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidExtra {
            recognizer,
            key: key.into(),
            expected,
        }
    }

    /// Returns `true` when the error reports a recognized but malformed
    /// request rather than an infrastructure failure.
    #[must_use]
    pub const fn is_malformed_request(&self) -> bool {
        matches!(self, Self::MissingExtra { .. } | Self::InvalidExtra { .. })
    }
}

/// Failure reported by a [`BookmarkImporter`](crate::BookmarkImporter).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to import '{document}': {message}")]
pub struct ImportFailure {
    /// Document that was being imported.
    pub document: String,
    /// Description of the failure.
    pub message: String,
}

impl ImportFailure {
    /// Creates an import failure for the given document.
    #[must_use]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            message: message.into(),
        }
    }
}
