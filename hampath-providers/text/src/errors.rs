use std::io;

use hampath_core::define_error_codes;
use thiserror::Error;

/// Errors raised while reading an edge-list text document.
#[derive(Debug, Error)]
pub enum TextProviderError {
    /// Reading from the underlying source failed.
    #[error("failed to read graph text: {0}")]
    Io(#[from] io::Error),
    /// A `DIRECTED=` line carried a value other than `0`, `1`, `true`, or `false`.
    #[error("line {line}: unsupported DIRECTED value `{value}`; expected 0, 1, true, or false")]
    InvalidDirectedFlag {
        /// One-based line number.
        line: usize,
        /// Raw value after the `=`.
        value: String,
    },
    /// An edge line did not consist of exactly two vertex names.
    #[error("line {line}: expected an edge `u v` but found `{content}`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
        /// Trimmed line content.
        content: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`TextProviderError`] variants.
    enum TextProviderErrorCode for TextProviderError {
        /// Reading from the underlying source failed.
        Io => Io(..) => "TEXT_IO",
        /// A `DIRECTED=` line carried an unsupported value.
        InvalidDirectedFlag => InvalidDirectedFlag { .. } => "TEXT_INVALID_DIRECTED_FLAG",
        /// An edge line did not consist of exactly two vertex names.
        MalformedEdge => MalformedEdge { .. } => "TEXT_MALFORMED_EDGE",
    }
}
