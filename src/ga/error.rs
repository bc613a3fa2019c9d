//! Engine error taxonomy.

use thiserror::Error;

/// Fatal precondition violations surfaced by the engine.
///
/// Both variants indicate a caller bug (mismatched configuration or a
/// hand-built genome of the wrong size), not a recoverable condition.
/// The evolution loop propagates them and aborts the run; nothing else
/// in the engine can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaError {
    /// A genome was scored against a catalog of a different length.
    #[error("genome length {genome} does not match item count {items}")]
    DimensionMismatch { genome: usize, items: usize },

    /// Two genomes of different lengths were passed to crossover.
    #[error("cannot cross over genomes of different lengths ({a} vs {b})")]
    LengthMismatch { a: usize, b: usize },
}
