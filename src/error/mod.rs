//! Error handling for the re-identification core.

use thiserror::Error;

/// Specialized error type for re-identification experiments
#[derive(Debug, Error)]
pub enum ReidError {
    /// A record failed the mutually exclusive race/ethnicity invariant.
    /// Signals data corruption upstream; the unit of work must abort.
    #[error(
        "taxonomy invariant violated at record {index}: category flags sum to {sum}, expected 1"
    )]
    TaxonomyInvariant {
        /// Position of the offending record in its table
        index: usize,
        /// Row-wise sum over the category flags
        sum: u32,
    },

    /// The attacker view and the ground-truth view no longer share an index
    #[error("commercial view and ground truth diverged at position {position}")]
    IndexMisaligned {
        /// First position at which the two views disagree
        position: usize,
    },

    /// Privacy budget outside the valid range
    #[error("invalid privacy budget epsilon = {0}; expected a finite value greater than zero")]
    InvalidEpsilon(f64),

    /// Chunking parameters that do not describe a valid partition
    #[error("invalid chunking: chunk_index {chunk_index} with n_chunks {n_chunks}")]
    InvalidChunking {
        /// Number of disjoint tract chunks
        n_chunks: usize,
        /// Chunk selected for this unit of work
        chunk_index: usize,
    },
}

/// Result type for re-identification operations
pub type Result<T> = std::result::Result<T, ReidError>;
