//! Shared validation of codec parameters and symbol buffers.
//!
//! The encoder and the decoder accept caller-supplied symbols and ECC counts;
//! both check them here before any table lookup can go out of bounds.

use crate::galois::GaloisField;
use crate::reed_solomon::error::{RsError, RsResult};

/// Check that `ecc_count` leaves at least one data symbol in a full codeword.
///
/// # Arguments
/// * `field` - Field the code is defined over
/// * `ecc_count` - Number of parity symbols per codeword
///
/// # Errors
/// Returns `RsError::InvalidEccCount` if `ecc_count` is zero or not smaller
/// than the field order
#[inline]
pub fn validate_ecc_count(field: &GaloisField, ecc_count: usize) -> RsResult<()> {
    let max = field.order() - 1;
    if ecc_count == 0 || ecc_count > max {
        return Err(RsError::InvalidEccCount { ecc_count, max });
    }
    Ok(())
}

/// Check that a codeword of `length` symbols fits into the field.
///
/// Positions are recovered from discrete logarithms, so a codeword can hold at
/// most `size - 1` symbols.
#[inline]
pub fn validate_codeword_length(field: &GaloisField, length: usize) -> RsResult<()> {
    if length > field.order() {
        return Err(RsError::CodewordTooLong {
            length,
            max: field.order(),
        });
    }
    Ok(())
}

/// Check that every symbol is an element of the field.
///
/// # Errors
/// Returns `RsError::SymbolOutOfRange` for the first offending symbol
pub fn validate_symbols(field: &GaloisField, symbols: &[u16]) -> RsResult<()> {
    match symbols.iter().position(|&s| !field.contains(s)) {
        Some(position) => Err(RsError::SymbolOutOfRange {
            position,
            value: symbols[position],
            size: field.size(),
        }),
        None => Ok(()),
    }
}

/// Validate a received codeword before decoding.
///
/// # Arguments
/// * `field` - Field the code is defined over
/// * `received` - Data symbols followed by parity symbols
/// * `ecc_count` - Number of parity symbols
pub fn validate_received(field: &GaloisField, received: &[u16], ecc_count: usize) -> RsResult<()> {
    validate_ecc_count(field, ecc_count)?;
    if received.len() < ecc_count {
        return Err(RsError::BufferTooShort {
            length: received.len(),
            ecc_count,
        });
    }
    validate_codeword_length(field, received.len())?;
    validate_symbols(field, received)
}
