//! Systematic Reed-Solomon encoder
//!
//! The generator polynomial is `g(x) = Π (x + α^(base + i))` for
//! `i in 0..ecc_count`. It is computed once per encoder and stored high-order
//! first without its monic leading term, which is exactly the tap layout of
//! the feedback shift register used by [`Encoder::encode`].

use super::error::RsResult;
use crate::galois::GaloisField;
use crate::validation::{validate_codeword_length, validate_ecc_count, validate_symbols};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Encoder {
    field: Arc<GaloisField>,
    generator: Vec<u16>,
}

impl Encoder {
    /// Build an encoder producing `ecc_count` parity symbols per codeword.
    pub fn new(field: Arc<GaloisField>, ecc_count: usize) -> RsResult<Self> {
        validate_ecc_count(&field, ecc_count)?;
        let generator = generator_coefficients(&field, ecc_count);
        Ok(Self { field, generator })
    }

    #[inline]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    #[inline]
    pub fn ecc_count(&self) -> usize {
        self.generator.len()
    }

    /// Generator coefficients `[g_{k-1}, .., g_1, g_0]`; the leading `x^k`
    /// term is implicit.
    #[inline]
    pub fn generator(&self) -> &[u16] {
        &self.generator
    }

    /// Encode `data`, returning the data followed by the parity symbols.
    ///
    /// # Errors
    /// Fails if the codeword would be longer than the field order or if any
    /// data symbol is not a field element
    pub fn encode(&self, data: &[u16]) -> RsResult<Vec<u16>> {
        let parity = self.parity(data)?;
        let mut output = Vec::with_capacity(data.len() + parity.len());
        output.extend_from_slice(data);
        output.extend_from_slice(&parity);
        Ok(output)
    }

    /// Compute only the parity symbols for `data`
    pub fn parity(&self, data: &[u16]) -> RsResult<Vec<u16>> {
        validate_codeword_length(&self.field, data.len() + self.ecc_count())?;
        validate_symbols(&self.field, data)?;

        let mut ecc = vec![0u16; self.ecc_count()];
        for &symbol in data {
            let factor = GaloisField::add(symbol, ecc[0]);
            ecc.rotate_left(1);
            if let Some(last) = ecc.last_mut() {
                *last = 0;
            }
            if GaloisField::is_zero(factor) {
                continue;
            }
            for (slot, &coefficient) in ecc.iter_mut().zip(&self.generator) {
                *slot = GaloisField::add(*slot, self.field.multiply(coefficient, factor));
            }
        }

        Ok(ecc)
    }
}

/// Multiply the running product by `(x + root)` for each consecutive root,
/// keeping the coefficients high-order first with the leading one implicit.
fn generator_coefficients(field: &GaloisField, ecc_count: usize) -> Vec<u16> {
    let mut coefficients = vec![0u16; ecc_count];
    coefficients[ecc_count - 1] = 1;

    let mut root = field.exp(field.base());
    for _ in 0..ecc_count {
        for j in 0..ecc_count {
            coefficients[j] = field.multiply(coefficients[j], root);
            if j + 1 < ecc_count {
                coefficients[j] = GaloisField::add(coefficients[j], coefficients[j + 1]);
            }
        }
        root = field.multiply(root, field.exp(1));
    }

    coefficients
}
