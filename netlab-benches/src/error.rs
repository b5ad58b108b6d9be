//! Benchmark setup error type.

use netlab_core::CatalogueError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A model rejected the benchmark parameters.
    #[error("graph generation failed: {0}")]
    Catalogue(#[from] CatalogueError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
