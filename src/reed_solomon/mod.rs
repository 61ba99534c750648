//! Reed-Solomon Error Correction Module
//!
//! Systematic encoding with a generator polynomial over consecutive roots, and
//! decoding with syndromes, the extended Euclidean algorithm (Sugiyama), a
//! Chien root search and the Forney algorithm.
//!
//! Codewords are `u16` symbol buffers, data first, parity last, high-order
//! symbol first.

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod euclid;
pub mod polynomial;

pub use codec::ReedSolomon;
pub use decoder::{decode, Decoded};
pub use encoder::Encoder;
pub use error::{RsError, RsResult, Uncorrectable};
pub use euclid::{Correction, ErrorCorrectingAlgorithm, RepairReport};
pub use polynomial::Polynomial;
