pub mod config;
pub mod galois;
pub mod reed_solomon;
pub mod validation;

pub use config::CodecConfig;
pub use galois::{FieldError, GaloisField};
pub use reed_solomon::*;
