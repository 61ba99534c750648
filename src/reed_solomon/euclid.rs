//! Error locator / evaluator computation with the extended Euclidean
//! algorithm (Sugiyama's method) and Forney error correction.
//!
//! A session starts from the syndrome polynomial `S(x)` and `x^ecc` and runs
//! the remainder sequence of `x^ecc / S(x)` while tracking the Bézout
//! coefficient `t`. Once the remainder degree drops below `ecc / 2`, `t` is the
//! error locator σ(x) and the remainder is the error evaluator ω(x), both up
//! to the same constant factor.
//!
//! ```text
//!   t = 1      r = S(x)
//!   t' = 0     r' = x^ecc
//!
//!   q  = r' / r          r' <- r' mod r
//!   t  <- q·t + t'       t' <- t
//!   swap(r, r')
//! ```

use super::error::{RsError, RsResult, Uncorrectable};
use super::polynomial::Polynomial;
use crate::galois::GaloisField;
use log::trace;

/// One located error: the symbol index in the high-order-first buffer and the
/// value to XOR into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction {
    pub position: usize,
    pub magnitude: u16,
}

/// Outcome of [`ErrorCorrectingAlgorithm::repair`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairReport {
    /// Corrections that were applied
    pub corrections: Vec<Correction>,
    /// Number of errors the locator polynomial claims (its degree)
    pub expected: usize,
}

impl RepairReport {
    /// Whether every error the locator predicts was found and applied
    pub fn is_complete(&self) -> bool {
        self.corrections.len() == self.expected
    }
}

/// Decoding session state for one received codeword
#[derive(Debug, Clone)]
pub struct ErrorCorrectingAlgorithm<'a> {
    field: &'a GaloisField,
    t: Polynomial<'a>,
    r: Polynomial<'a>,
    t_next: Polynomial<'a>,
    r_next: Polynomial<'a>,
    iterations: usize,
}

impl<'a> ErrorCorrectingAlgorithm<'a> {
    /// Start a session from the syndrome polynomial of a codeword with
    /// `ecc_count` parity symbols.
    pub fn new(syndrome: Polynomial<'a>, ecc_count: usize) -> Self {
        let field = syndrome.field();
        Self {
            field,
            t: Polynomial::one(field),
            r: syndrome,
            t_next: Polynomial::zero(field),
            r_next: Polynomial::monomial(field, ecc_count, 1),
            iterations: 0,
        }
    }

    /// Current (unnormalized) error locator σ(x)
    #[inline]
    pub fn locator(&self) -> &Polynomial<'a> {
        &self.t
    }

    /// Current (unnormalized) error evaluator ω(x)
    #[inline]
    pub fn evaluator(&self) -> &Polynomial<'a> {
        &self.r
    }

    #[inline]
    pub fn remainder_degree(&self) -> usize {
        self.r.degree()
    }

    /// Number of `calculate` steps performed so far
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run one step of the extended Euclidean algorithm.
    ///
    /// Returns `true` when the iteration cannot continue: the current
    /// remainder is zero, or the new remainder did not drop in degree.
    pub fn calculate(&mut self) -> bool {
        if GaloisField::is_zero(self.r.leading_coefficient()) {
            return true;
        }

        // r_next becomes r_next mod r
        let mut t_new = Self::euclidean_algorithm(&mut self.r_next, &self.r);
        t_new.multiply(&self.t).add(&self.t_next);

        self.t_next = std::mem::replace(&mut self.t, t_new);
        std::mem::swap(&mut self.r, &mut self.r_next);
        self.iterations += 1;

        trace!(
            "Euclid step {}: deg(t) = {}, deg(r) = {}",
            self.iterations,
            self.t.degree(),
            self.r.degree()
        );

        self.r.degree() >= self.r_next.degree()
    }

    /// Polynomial long division of `r` by `r_last`.
    ///
    /// Returns the quotient and leaves the remainder in `r`. `r_last` must not
    /// be the zero polynomial; a zero divisor yields a zero quotient and
    /// leaves `r` untouched.
    pub fn euclidean_algorithm(r: &mut Polynomial<'a>, r_last: &Polynomial<'_>) -> Polynomial<'a> {
        let field = r.field();
        let mut quotient = Polynomial::zero(field);

        if r_last.is_zero() {
            return quotient;
        }

        while r.degree() >= r_last.degree() && !r.is_zero() {
            let degree_diff = r.degree() - r_last.degree();
            let scale = field.divide(r.leading_coefficient(), r_last.leading_coefficient());

            quotient.add(&Polynomial::monomial(field, degree_diff, scale));

            let mut term = Polynomial::new(field, r_last.coefficients().to_vec());
            term.multiply_by_scalar(scale).shift(degree_diff);
            r.add(&term);
        }

        quotient
    }

    /// Work out the corrections for a codeword of `length` symbols without
    /// touching it.
    ///
    /// Roots whose position falls outside the codeword are skipped, so the
    /// result may hold fewer entries than the locator degree.
    ///
    /// # Errors
    /// `Uncorrectable::DegenerateLocator` if σ(0) is zero, in which case the
    /// locator cannot be normalized
    pub fn corrections(&self, length: usize) -> RsResult<Vec<Correction>> {
        let field = self.field;
        let sigma_zero = self.t.constant_coefficient();
        if GaloisField::is_zero(sigma_zero) {
            return Err(RsError::Uncorrectable(Uncorrectable::DegenerateLocator));
        }

        let inverse = field.invert(sigma_zero);
        let mut locator = self.t.clone();
        locator.multiply_by_scalar(inverse);
        let mut evaluator = self.r.clone();
        evaluator.multiply_by_scalar(inverse).reduce();

        let zeroes = locator.find_zeroes();
        let mut corrections = Vec::with_capacity(zeroes.len());

        for (i, &zero) in zeroes.iter().enumerate() {
            let exponent = field.log(field.invert(zero));
            if exponent >= length {
                continue;
            }
            let position = length - exponent - 1;

            // Forney: Π (1 + X_j / X_i) over the other roots
            let denominator = zeroes
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(1, |acc, (_, &other)| {
                    field.multiply(acc, GaloisField::add(1, field.divide(zero, other)))
                });

            let mut magnitude = evaluator.evaluate_at(zero);
            if field.base() != 0 {
                magnitude = field.multiply(magnitude, field.pow(zero, field.base()));
            }

            corrections.push(Correction {
                position,
                magnitude: field.divide(magnitude, denominator),
            });
        }

        Ok(corrections)
    }

    /// Correct `symbols` in place.
    ///
    /// A report with fewer corrections than `expected` means some errors were
    /// not located and the buffer is only partially repaired; this is not an
    /// error here.
    pub fn repair(&self, symbols: &mut [u16]) -> RsResult<RepairReport> {
        let corrections = self.corrections(symbols.len())?;
        for correction in &corrections {
            symbols[correction.position] =
                GaloisField::add(symbols[correction.position], correction.magnitude);
        }

        Ok(RepairReport {
            corrections,
            expected: self.t.degree(),
        })
    }
}
