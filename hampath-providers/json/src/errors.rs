use std::io;

use hampath_core::define_error_codes;
use thiserror::Error;

/// Errors raised while reading a JSON adjacency document.
#[derive(Debug, Error)]
pub enum JsonProviderError {
    /// Reading from the underlying source failed.
    #[error("failed to read graph JSON: {0}")]
    Io(#[source] io::Error),
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid graph JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

impl From<serde_json::Error> for JsonProviderError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::Io(io::Error::from(error))
        } else {
            Self::Parse(error)
        }
    }
}

define_error_codes! {
    /// Stable codes describing [`JsonProviderError`] variants.
    enum JsonProviderErrorCode for JsonProviderError {
        /// Reading from the underlying source failed.
        Io => Io(..) => "JSON_IO",
        /// The document is not valid JSON or does not match the expected shape.
        Parse => Parse(..) => "JSON_PARSE",
    }
}
