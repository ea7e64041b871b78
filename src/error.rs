//! Error types for sequence analysis

use thiserror::Error;

/// Errors raised by the sequence analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Input was empty or contained a character outside A/T/C/G.
    #[error("Invalid DNA sequence. Only 'A', 'T', 'C', 'G' are allowed.")]
    InvalidSequence,
}

pub type Result<T> = std::result::Result<T, SequenceError>;
