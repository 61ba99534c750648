//! Galois Field GF(2^m) arithmetic for Reed-Solomon coding
//!
//! Elements are stored as `u16`, so any field from GF(2) up to GF(2^16) can be
//! built. Multiplication and division go through logarithm / exponential
//! tables generated from a primitive polynomial.
//!
//! A field is built once per `(size, generator, base)` triple and then only
//! read; share it by reference (or `Arc`) between encoders and decoders.

use thiserror::Error;

/// GF(2^4) primitive polynomial: x⁴ + x + 1
pub const GF16_GENERATOR: u32 = 0x13;

/// GF(2^8) primitive polynomial: x⁸ + x⁴ + x³ + x² + 1
pub const GF256_GENERATOR: u32 = 0x11D;

/// Largest supported field (symbols must fit in a `u16`)
pub const MAX_FIELD_SIZE: usize = 1 << 16;

/// Errors raised by checked field construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field size is not a power of two in the supported range
    #[error("Field size {0} is not a power of two between 2 and 65536")]
    InvalidSize(usize),

    /// Generator polynomial degree does not match the field size
    #[error("Generator polynomial {generator:#x} does not have degree {expected}")]
    GeneratorDegree { generator: u32, expected: u32 },

    /// Generator polynomial does not generate the whole multiplicative group
    #[error("Generator polynomial {generator:#x} is not primitive (cycle length {cycle})")]
    NotPrimitive { generator: u32, cycle: usize },

    /// First consecutive root exponent is outside the multiplicative group
    #[error("Base exponent {base} must be smaller than the field order {order}")]
    InvalidBase { base: usize, order: usize },
}

/// Precomputed tables for GF(2^m)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    size: usize,
    generator: u32,
    base: usize,
    /// exponent -> element, `size - 1` entries
    exp_table: Vec<u16>,
    /// element -> exponent, entry 0 unused
    log_table: Vec<u16>,
}

impl GaloisField {
    /// Build a field, rejecting parameters that would produce broken tables.
    ///
    /// `base` is the exponent of the first consecutive root used by the
    /// encoder and the syndromes (the first root is α^base). 0 and 1 are the
    /// conventional choices.
    pub fn new(size: usize, generator: u32, base: usize) -> Result<Self, FieldError> {
        if !size.is_power_of_two() || !(2..=MAX_FIELD_SIZE).contains(&size) {
            return Err(FieldError::InvalidSize(size));
        }

        let bits = size.trailing_zeros();
        if generator >> bits != 1 {
            return Err(FieldError::GeneratorDegree {
                generator,
                expected: bits,
            });
        }

        let order = size - 1;
        if base >= order {
            return Err(FieldError::InvalidBase { base, order });
        }

        // x^i must not return to 1 before the full group has been walked
        let mut value = 1u32;
        for step in 1..=order {
            value <<= 1;
            if value & size as u32 != 0 {
                value ^= generator;
            }
            if value == 1 && step < order {
                return Err(FieldError::NotPrimitive {
                    generator,
                    cycle: step,
                });
            }
        }

        Ok(Self::new_unchecked(size, generator, base))
    }

    /// Build a field without validating its parameters.
    ///
    /// A generator that is not primitive for `size` silently yields tables
    /// that do not describe a field.
    pub fn new_unchecked(size: usize, generator: u32, base: usize) -> Self {
        let mut gf = GaloisField {
            size,
            generator,
            base,
            exp_table: vec![0; size - 1],
            log_table: vec![0; size],
        };
        gf.build_tables();
        gf
    }

    /// GF(16) with x⁴ + x + 1 and the first root at α
    pub fn gf16() -> Self {
        Self::new_unchecked(16, GF16_GENERATOR, 1)
    }

    /// GF(256) with x⁸ + x⁴ + x³ + x² + 1 and the first root at α
    pub fn gf256() -> Self {
        Self::new_unchecked(256, GF256_GENERATOR, 1)
    }

    fn build_tables(&mut self) {
        let mut value = 1u32;

        for i in 0..self.size - 1 {
            self.exp_table[i] = value as u16;
            self.log_table[value as usize] = i as u16;

            value <<= 1;
            if value & self.size as u32 != 0 {
                value ^= self.generator;
            }
        }
    }

    /// Number of elements (2^m)
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Order of the multiplicative group (2^m - 1), also the longest codeword
    #[inline]
    pub fn order(&self) -> usize {
        self.size - 1
    }

    /// m, the number of bits per symbol
    #[inline]
    pub fn symbol_bits(&self) -> u32 {
        self.size.trailing_zeros()
    }

    #[inline]
    pub fn generator(&self) -> u32 {
        self.generator
    }

    /// Exponent of the first consecutive root
    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    /// Whether `x` is a valid symbol of this field
    #[inline]
    pub fn contains(&self, x: u16) -> bool {
        (x as usize) < self.size
    }

    /// Add two elements - this is just XOR
    #[inline]
    pub fn add(x: u16, y: u16) -> u16 {
        x ^ y
    }

    #[inline]
    pub fn is_zero(x: u16) -> bool {
        x == 0
    }

    #[inline]
    pub fn is_one(x: u16) -> bool {
        x == 1
    }

    /// Multiply two elements
    #[inline]
    pub fn multiply(&self, x: u16, y: u16) -> u16 {
        if x == 0 || y == 0 {
            return 0;
        }

        let log_sum =
            (self.log_table[x as usize] as usize + self.log_table[y as usize] as usize) % self.order();
        self.exp_table[log_sum]
    }

    /// Multiplicative inverse. Zero has none; callers must not pass it.
    #[inline]
    pub fn invert(&self, x: u16) -> u16 {
        debug_assert!(x != 0, "Cannot invert zero in Galois Field");
        let order = self.order();
        self.exp_table[(order - self.log_table[x as usize] as usize) % order]
    }

    #[inline]
    pub fn divide(&self, x: u16, y: u16) -> u16 {
        self.multiply(x, self.invert(y))
    }

    /// α^exponent, with the exponent reduced modulo the group order
    #[inline]
    pub fn exp(&self, exponent: usize) -> u16 {
        self.exp_table[exponent % self.order()]
    }

    /// Discrete logarithm of a nonzero element
    #[inline]
    pub fn log(&self, x: u16) -> usize {
        self.log_table[x as usize] as usize
    }

    /// Raise an element to a power
    pub fn pow(&self, x: u16, exponent: usize) -> u16 {
        if exponent == 0 {
            return 1;
        }
        if x == 0 {
            return 0;
        }

        let log_result = (self.log(x) as u64 * exponent as u64) % self.order() as u64;
        self.exp_table[log_result as usize]
    }
}
