//! Error types for Reed-Solomon encoding and decoding

use crate::galois::FieldError;
use thiserror::Error;

/// Errors that can occur during Reed-Solomon operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Field parameters were rejected
    #[error(transparent)]
    Field(#[from] FieldError),

    /// ECC symbol count leaves no room in the field
    #[error("ECC symbol count {ecc_count} must be between 1 and {max}")]
    InvalidEccCount { ecc_count: usize, max: usize },

    /// Codeword does not fit into the multiplicative group
    #[error("Codeword of {length} symbols exceeds the maximum of {max}")]
    CodewordTooLong { length: usize, max: usize },

    /// Received buffer cannot even hold the parity symbols
    #[error("Buffer of {length} symbols is shorter than the {ecc_count} ECC symbols")]
    BufferTooShort { length: usize, ecc_count: usize },

    /// Symbol value is not an element of the field
    #[error("Symbol {value} at position {position} is not below the field size {size}")]
    SymbolOutOfRange {
        position: usize,
        value: u16,
        size: usize,
    },

    /// Too many errors to locate or correct
    #[error("Uncorrectable codeword: {0}")]
    Uncorrectable(Uncorrectable),
}

/// Why a decode attempt gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Uncorrectable {
    /// The remainder sequence collapsed before the locator was bounded
    #[error("euclidean iteration stopped early")]
    EuclidStalled,

    /// Error locator has a zero constant term
    #[error("error locator has no constant term")]
    DegenerateLocator,

    /// Syndromes are nonzero but the locator has no roots to look for
    #[error("error locator is constant")]
    ConstantLocator,

    /// Locator degree exceeds what the ECC symbols can correct
    #[error("error locator degree {degree} exceeds capacity {capacity}")]
    TooManyErrors { degree: usize, capacity: usize },

    /// Error evaluator degree is not below the locator degree
    #[error("error evaluator degree {evaluator} is not below locator degree {locator}")]
    EvaluatorDegree { evaluator: usize, locator: usize },

    /// Fewer in-range roots than the locator degree
    #[error("located {located} of {expected} errors")]
    MissingRoots { located: usize, expected: usize },

    /// Syndromes are still nonzero after correction
    #[error("syndromes nonzero after correction")]
    VerificationFailed,
}

/// Result type for Reed-Solomon operations
pub type RsResult<T> = Result<T, RsError>;
