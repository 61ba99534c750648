//! Polynomials over a Galois field
//!
//! Coefficients are stored low-order first: `coefficients[i]` is the
//! coefficient of x^i. Codeword buffers handed in by callers are high-order
//! first and get reversed on the way in.
//!
//! All arithmetic happens in place and returns `&mut Self` so that steps can
//! be chained. Anything that must survive an operation has to be cloned first.

use crate::galois::GaloisField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial<'a> {
    field: &'a GaloisField,
    coefficients: Vec<u16>,
}

impl<'a> Polynomial<'a> {
    /// Wrap low-order-first coefficients. The result is reduced.
    pub fn new(field: &'a GaloisField, coefficients: Vec<u16>) -> Self {
        let mut poly = Self {
            field,
            coefficients: if coefficients.is_empty() {
                vec![0]
            } else {
                coefficients
            },
        };
        poly.reduce();
        poly
    }

    /// The canonical zero polynomial `[0]`
    pub fn zero(field: &'a GaloisField) -> Self {
        Self {
            field,
            coefficients: vec![0],
        }
    }

    pub fn one(field: &'a GaloisField) -> Self {
        Self {
            field,
            coefficients: vec![1],
        }
    }

    /// `scale * x^degree`
    pub fn monomial(field: &'a GaloisField, degree: usize, scale: u16) -> Self {
        let mut coefficients = vec![0; degree + 1];
        coefficients[degree] = scale;
        Self {
            field,
            coefficients,
        }
    }

    /// Interpret a high-order-first symbol buffer as a polynomial
    pub fn from_high_order_first(field: &'a GaloisField, symbols: &[u16]) -> Self {
        Self::new(field, symbols.iter().rev().copied().collect())
    }

    /// Syndrome polynomial of a received codeword.
    ///
    /// `S_i = R(α^(base + i))` for `i` in `0..ecc_count`, where `R` is the
    /// received buffer read high-order first. The result is the zero
    /// polynomial exactly when no error is detectable.
    pub fn from_syndromes(field: &'a GaloisField, received: &[u16], ecc_count: usize) -> Self {
        let received = Self::from_high_order_first(field, received);
        let syndromes = (0..ecc_count)
            .map(|i| received.evaluate_at(field.exp(field.base() + i)))
            .collect();
        Self::new(field, syndromes)
    }

    #[inline]
    pub fn field(&self) -> &'a GaloisField {
        self.field
    }

    #[inline]
    pub fn coefficients(&self) -> &[u16] {
        &self.coefficients
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[inline]
    pub fn leading_coefficient(&self) -> u16 {
        self.coefficients[self.degree()]
    }

    #[inline]
    pub fn constant_coefficient(&self) -> u16 {
        self.coefficients[0]
    }

    /// Coefficient of x^i, zero past the degree
    #[inline]
    pub fn coefficient_at(&self, i: usize) -> u16 {
        self.coefficients.get(i).copied().unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && GaloisField::is_zero(self.coefficients[0])
    }

    /// Drop leading zero terms, keeping at least the constant term
    pub fn reduce(&mut self) -> &mut Self {
        while self.coefficients.len() > 1 && GaloisField::is_zero(self.leading_coefficient()) {
            self.coefficients.pop();
        }
        self
    }

    /// Evaluate with Horner's rule
    pub fn evaluate_at(&self, a: u16) -> u16 {
        if GaloisField::is_zero(a) {
            return self.constant_coefficient();
        }
        if GaloisField::is_one(a) {
            return self
                .coefficients
                .iter()
                .fold(0, |acc, &c| GaloisField::add(acc, c));
        }

        self.coefficients
            .iter()
            .rev()
            .skip(1)
            .fold(self.leading_coefficient(), |acc, &c| {
                GaloisField::add(self.field.multiply(acc, a), c)
            })
    }

    /// `self += other`, which is also `self -= other` in characteristic 2
    pub fn add(&mut self, other: &Polynomial<'_>) -> &mut Self {
        if other.coefficients.len() > self.coefficients.len() {
            self.coefficients.resize(other.coefficients.len(), 0);
        }
        for (mine, &theirs) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *mine = GaloisField::add(*mine, theirs);
        }
        self.reduce()
    }

    /// `self *= other`
    pub fn multiply(&mut self, other: &Polynomial<'_>) -> &mut Self {
        let mut product = vec![0u16; self.coefficients.len() + other.coefficients.len()];

        for (i, &scale) in other.coefficients.iter().enumerate() {
            if GaloisField::is_zero(scale) {
                continue;
            }
            for (j, &c) in self.coefficients.iter().enumerate() {
                product[i + j] = GaloisField::add(product[i + j], self.field.multiply(c, scale));
            }
        }

        self.coefficients = product;
        self.reduce()
    }

    /// Multiply every coefficient by `scale`.
    ///
    /// Scaling by zero leaves `[0, 0, ..]`; call `reduce` to get back to the
    /// canonical zero polynomial.
    pub fn multiply_by_scalar(&mut self, scale: u16) -> &mut Self {
        for c in self.coefficients.iter_mut() {
            *c = self.field.multiply(*c, scale);
        }
        self
    }

    /// Multiply by x^k
    pub fn shift(&mut self, k: usize) -> &mut Self {
        if k > 0 {
            self.coefficients.splice(0..0, std::iter::repeat(0).take(k));
        }
        self
    }

    /// Roots of the polynomial, by trying every nonzero field element (Chien
    /// search). Stops once `degree()` roots are found; returns fewer when the
    /// field does not contain that many.
    ///
    /// For degree 1 the root is taken as `1 / leading_coefficient`, which only
    /// holds when the constant coefficient is 1. The normalized error locator
    /// always satisfies this.
    pub fn find_zeroes(&self) -> Vec<u16> {
        let expected = self.degree();

        if expected == 1 {
            return vec![self.field.invert(self.leading_coefficient())];
        }

        let mut zeroes = Vec::with_capacity(expected);
        if expected == 0 {
            return zeroes;
        }
        for candidate in 1..self.field.size() {
            let candidate = candidate as u16;
            if !GaloisField::is_zero(self.evaluate_at(candidate)) {
                continue;
            }
            zeroes.push(candidate);
            if zeroes.len() == expected {
                break;
            }
        }

        zeroes
    }
}
