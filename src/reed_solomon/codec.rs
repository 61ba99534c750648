//! Configured Reed-Solomon codec
//!
//! Bundles a shared field, a cached encoder and the decode policy from a
//! [`CodecConfig`]. The free [`decode`] function remains available for callers
//! that manage fields themselves.

use super::decoder::{decode, Decoded};
use super::encoder::Encoder;
use super::error::{RsError, RsResult, Uncorrectable};
use super::polynomial::Polynomial;
use crate::config::CodecConfig;
use crate::galois::GaloisField;
use crate::validation::validate_received;
use log::debug;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ReedSolomon {
    field: Arc<GaloisField>,
    encoder: Encoder,
    verify: bool,
}

impl ReedSolomon {
    pub fn new(config: &CodecConfig) -> RsResult<Self> {
        let field = Arc::new(config.build_field()?);
        Self::with_field(field, config.ecc_symbols, config.verify)
    }

    /// Build a codec around an existing, possibly shared, field
    pub fn with_field(field: Arc<GaloisField>, ecc_symbols: usize, verify: bool) -> RsResult<Self> {
        let encoder = Encoder::new(field.clone(), ecc_symbols)?;
        Ok(Self {
            field,
            encoder,
            verify,
        })
    }

    #[inline]
    pub fn field(&self) -> &Arc<GaloisField> {
        &self.field
    }

    #[inline]
    pub fn ecc_symbols(&self) -> usize {
        self.encoder.ecc_count()
    }

    #[inline]
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn encode(&self, data: &[u16]) -> RsResult<Vec<u16>> {
        self.encoder.encode(data)
    }

    /// Whether `codeword` has all-zero syndromes
    pub fn syndromes_clean(&self, codeword: &[u16]) -> RsResult<bool> {
        validate_received(&self.field, codeword, self.ecc_symbols())?;
        Ok(Polynomial::from_syndromes(&self.field, codeword, self.ecc_symbols()).is_zero())
    }

    /// Decode `received` in place.
    ///
    /// With verification enabled the correction is tried on a scratch copy and
    /// only written back when the corrected word has clean syndromes.
    pub fn decode(&self, received: &mut [u16]) -> RsResult<Decoded> {
        if !self.verify {
            return decode(&self.field, received, self.ecc_symbols());
        }

        let mut scratch = received.to_vec();
        let decoded = decode(&self.field, &mut scratch, self.ecc_symbols())?;
        if let Decoded::Corrected(_) = decoded {
            self.check_corrected(&scratch)?;
            received.copy_from_slice(&scratch);
        }

        Ok(decoded)
    }

    fn check_corrected(&self, corrected: &[u16]) -> RsResult<()> {
        if !self.syndromes_clean(corrected)? {
            debug!("Correction did not produce a codeword");
            return Err(RsError::Uncorrectable(Uncorrectable::VerificationFailed));
        }
        Ok(())
    }

    /// Decode a copy of `received` and return only its data symbols
    pub fn decode_to_vec(&self, received: &[u16]) -> RsResult<Vec<u16>> {
        let mut codeword = received.to_vec();
        self.decode(&mut codeword)?;
        codeword.truncate(received.len().saturating_sub(self.ecc_symbols()));
        Ok(codeword)
    }
}
