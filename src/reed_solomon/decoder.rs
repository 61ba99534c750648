//! Reed-Solomon decoding: syndromes, Euclidean locator search, Forney repair.
//!
//! [`decode`] corrects the caller's buffer in place and reports one of three
//! outcomes: nothing to fix, the list of applied corrections, or
//! [`Uncorrectable`]. When decoding gives up the buffer is left untouched.

use super::error::{RsError, RsResult, Uncorrectable};
use super::euclid::{Correction, ErrorCorrectingAlgorithm};
use super::polynomial::Polynomial;
use crate::galois::GaloisField;
use crate::validation::validate_received;
use log::debug;

/// Successful decode outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// All syndromes were zero; the buffer was not modified
    NoErrors,
    /// These corrections were applied to the buffer
    Corrected(Vec<Correction>),
}

impl Decoded {
    /// Number of symbols that were changed
    pub fn corrected_count(&self) -> usize {
        match self {
            Decoded::NoErrors => 0,
            Decoded::Corrected(corrections) => corrections.len(),
        }
    }

    /// Positions that were changed, in the order they were located
    pub fn positions(&self) -> Vec<usize> {
        match self {
            Decoded::NoErrors => Vec::new(),
            Decoded::Corrected(corrections) => corrections.iter().map(|c| c.position).collect(),
        }
    }
}

/// Decode a received codeword in place.
///
/// `received` holds the data symbols followed by `ecc_count` parity symbols,
/// high-order first, exactly as produced by [`Encoder::encode`]. Up to
/// `ecc_count / 2` corrupted symbols are corrected. Heavier corruption is
/// usually reported as [`Uncorrectable`], but may also be miscorrected into a
/// different codeword.
///
/// [`Encoder::encode`]: super::encoder::Encoder::encode
///
/// # Errors
/// * parameter errors when `ecc_count` or the buffer do not fit the field
/// * `RsError::Uncorrectable` when the errors cannot be located
pub fn decode(field: &GaloisField, received: &mut [u16], ecc_count: usize) -> RsResult<Decoded> {
    validate_received(field, received, ecc_count)?;

    let syndrome = Polynomial::from_syndromes(field, received, ecc_count);
    if syndrome.is_zero() {
        return Ok(Decoded::NoErrors);
    }
    debug!(
        "Nonzero syndrome of degree {} for {} symbols, {} ECC",
        syndrome.degree(),
        received.len(),
        ecc_count
    );

    let mut session = ErrorCorrectingAlgorithm::new(syndrome, ecc_count);
    while 2 * session.remainder_degree() >= ecc_count {
        if session.calculate() {
            return Err(uncorrectable(Uncorrectable::EuclidStalled));
        }
    }

    let capacity = ecc_count / 2;
    let degree = session.locator().degree();
    debug!(
        "Euclid finished after {} steps, locator degree {}",
        session.iterations(),
        degree
    );

    if GaloisField::is_zero(session.locator().constant_coefficient()) {
        return Err(uncorrectable(Uncorrectable::DegenerateLocator));
    }
    if degree == 0 {
        return Err(uncorrectable(Uncorrectable::ConstantLocator));
    }
    if degree > capacity {
        return Err(uncorrectable(Uncorrectable::TooManyErrors { degree, capacity }));
    }
    let evaluator = session.evaluator().degree();
    if evaluator >= degree {
        return Err(uncorrectable(Uncorrectable::EvaluatorDegree {
            evaluator,
            locator: degree,
        }));
    }

    let corrections = session.corrections(received.len())?;
    if corrections.len() != degree {
        return Err(uncorrectable(Uncorrectable::MissingRoots {
            located: corrections.len(),
            expected: degree,
        }));
    }

    for correction in &corrections {
        received[correction.position] =
            GaloisField::add(received[correction.position], correction.magnitude);
    }
    debug!("Corrected {} symbols", corrections.len());

    Ok(Decoded::Corrected(corrections))
}

fn uncorrectable(reason: Uncorrectable) -> RsError {
    debug!("Giving up: {}", reason);
    RsError::Uncorrectable(reason)
}
