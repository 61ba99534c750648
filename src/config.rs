//! Configuration for a Reed-Solomon codec

use crate::galois::{GaloisField, GF16_GENERATOR, GF256_GENERATOR};
use crate::reed_solomon::codec::ReedSolomon;
use crate::reed_solomon::error::RsResult;

/// Field and code parameters for a [`ReedSolomon`] codec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Number of field elements, 2^m
    pub field_size: usize,
    /// Primitive polynomial, bit-encoded (0x11d = x⁸ + x⁴ + x³ + x² + 1)
    pub generator: u32,
    /// Exponent of the first consecutive root
    pub base: usize,
    /// Parity symbols per codeword; corrects up to half as many errors
    pub ecc_symbols: usize,
    /// Recheck syndromes after correction and refuse miscorrections
    pub verify: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::rs_255_223()
    }
}

impl CodecConfig {
    pub fn new(field_size: usize, generator: u32, base: usize, ecc_symbols: usize) -> Self {
        Self {
            field_size,
            generator,
            base,
            ecc_symbols,
            verify: true,
        }
    }

    /// RS(255, 223) over GF(256): 32 parity bytes, 16 correctable errors
    pub fn rs_255_223() -> Self {
        Self::new(256, GF256_GENERATOR, 1, 32)
    }

    /// RS(15, 7) over GF(16): 8 parity nibbles, 4 correctable errors
    pub fn rs_15_7() -> Self {
        Self::new(16, GF16_GENERATOR, 1, 8)
    }

    pub fn with_ecc_symbols(mut self, ecc_symbols: usize) -> Self {
        self.ecc_symbols = ecc_symbols;
        self
    }

    pub fn with_base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Longest codeword this configuration can carry
    pub fn max_codeword_len(&self) -> usize {
        self.field_size.saturating_sub(1)
    }

    /// Most data symbols per codeword
    pub fn max_data_len(&self) -> usize {
        self.max_codeword_len().saturating_sub(self.ecc_symbols)
    }

    /// Errors correctable per codeword
    pub fn correction_capacity(&self) -> usize {
        self.ecc_symbols / 2
    }

    /// Build and validate the field described by this configuration
    pub fn build_field(&self) -> RsResult<GaloisField> {
        Ok(GaloisField::new(self.field_size, self.generator, self.base)?)
    }

    pub fn build(&self) -> RsResult<ReedSolomon> {
        ReedSolomon::new(self)
    }
}
