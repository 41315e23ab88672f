//! Benchmark setup error type.

use hampath_core::HampathError;

use crate::families::GraphFamilyError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A graph family rejected its parameters.
    #[error("graph generation failed: {0}")]
    Family(#[from] GraphFamilyError),
    /// The search rejected its configuration.
    #[error("path search failed: {0}")]
    Search(#[from] HampathError),
}
