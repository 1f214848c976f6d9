use std::cmp::max;
use std::ops::{Add, Mul, Sub};

use crate::types::Field;

/// A univariate polynomial over `F`, coefficients in ascending order (`coeffs[i]` is the
/// coefficient of `X^i`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: Field> {
    pub coeffs: Vec<F>,
}

impl<F: Field> Polynomial<F> {
    pub fn new(coeffs: Vec<F>) -> Self {
        Self { coeffs }
    }

    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    pub fn constant(c: F) -> Self {
        Self::new(vec![c])
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Field::is_zero)
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree + 1, i.e. the number of coefficients up to (and including) the leading nonzero one.
    /// Zero for the zero polynomial.
    pub fn degree_plus_one(&self) -> usize {
        (0..self.coeffs.len())
            .rev()
            .find(|&i| !self.coeffs[i].is_zero())
            .map_or(0, |i| i + 1)
    }

    /// Degree of the polynomial. Panics on the zero polynomial, whose degree is undefined.
    pub fn degree(&self) -> usize {
        self.degree_plus_one()
            .checked_sub(1)
            .expect("degree of the zero polynomial is undefined")
    }

    pub fn lead(&self) -> F {
        self.coeffs
            .iter()
            .rev()
            .find(|c| !c.is_zero())
            .copied()
            .unwrap_or(F::ZERO)
    }

    /// Removes trailing (high-degree) zero coefficients.
    pub fn trim(&mut self) {
        self.coeffs.truncate(self.degree_plus_one());
    }

    pub fn trimmed(&self) -> Self {
        let mut p = self.clone();
        p.trim();
        p
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    pub fn eval(&self, x: F) -> F {
        self.coeffs.iter().rev().fold(F::ZERO, |acc, &c| acc * x + c)
    }

    pub fn eval_batch(&self, xs: &[F]) -> Vec<F> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Builds `prod(X - r)` for `r` in `roots`.
    pub fn from_roots(roots: &[F]) -> Self {
        roots.iter().fold(Self::new(vec![F::ONE]), |acc, &r| {
            &acc * &Self::new(vec![-r, F::ONE])
        })
    }

    /// Returns `g(a*X)`: multiplies the `i`-th coefficient by `a^i`.
    pub fn scale(&self, a: F) -> Self {
        let mut power = F::ONE;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let scaled = c * power;
                power *= a;
                scaled
            })
            .collect();
        Self::new(coeffs)
    }

    /// Long division. Returns `(quotient, remainder)` such that `self == divisor*quotient +
    /// remainder` and `deg(remainder) < deg(divisor)`.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let divisor = divisor.trimmed();
        let (a_len, b_len) = (self.degree_plus_one(), divisor.degree_plus_one());
        assert!(b_len > 0, "division by the zero polynomial");

        if a_len < b_len {
            return (Self::zero(), self.trimmed());
        }

        let mut quotient = Self::new(vec![F::ZERO; a_len - b_len + 1]);
        let mut remainder = self.trimmed();
        let lead_inv = divisor.lead().inverse();

        while !remainder.is_zero() && remainder.degree_plus_one() >= b_len {
            let cur_len = remainder.degree_plus_one();
            let q_coeff = remainder.lead() * lead_inv;
            let q_degree = cur_len - b_len;
            quotient.coeffs[q_degree] = q_coeff;
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                remainder.coeffs[q_degree + i] -= q_coeff * d;
            }
            remainder.trim();
        }
        (quotient, remainder)
    }

}

impl<F: Field> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Polynomial<F> {
        let len = max(self.len(), rhs.len());
        let mut coeffs = vec![F::ZERO; len];
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs[i] += c;
        }
        for (i, &c) in rhs.coeffs.iter().enumerate() {
            coeffs[i] += c;
        }
        Polynomial::new(coeffs)
    }
}

impl<F: Field> Add for Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, rhs: Self) -> Polynomial<F> {
        &self + &rhs
    }
}

impl<F: Field> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Polynomial<F> {
        let len = max(self.len(), rhs.len());
        let mut coeffs = vec![F::ZERO; len];
        for (i, &c) in self.coeffs.iter().enumerate() {
            coeffs[i] += c;
        }
        for (i, &c) in rhs.coeffs.iter().enumerate() {
            coeffs[i] -= c;
        }
        Polynomial::new(coeffs)
    }
}

impl<F: Field> Sub for Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, rhs: Self) -> Polynomial<F> {
        &self - &rhs
    }
}

impl<F: Field> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    /// Schoolbook convolution. The reference domain sizes here (FRI/STARK test vectors, not
    /// production-scale traces) don't justify an FFT-based multiply.
    fn mul(self, rhs: Self) -> Polynomial<F> {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![F::ZERO; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl<F: Field> Mul for Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: Self) -> Polynomial<F> {
        &self * &rhs
    }
}

impl<F: Field> Mul<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, rhs: F) -> Polynomial<F> {
        Polynomial::new(self.coeffs.iter().map(|&c| c * rhs).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small193::Small193Field as F;

    #[test]
    fn eval_matches_direct_computation() {
        // p(X) = 1 + 2X + 3X^2
        let p = Polynomial::new(vec![F::from_canonical_u64(1), F::from_canonical_u64(2), F::from_canonical_u64(3)]);
        let x = F::from_canonical_u64(5);
        assert_eq!(p.eval(x), F::from_canonical_u64(1 + 2 * 5 + 3 * 25));
    }

    #[test]
    fn from_roots_vanishes_on_roots() {
        let roots = vec![F::from_canonical_u64(3), F::from_canonical_u64(7), F::from_canonical_u64(11)];
        let p = Polynomial::from_roots(&roots);
        for &r in &roots {
            assert_eq!(p.eval(r), F::ZERO);
        }
    }

    #[test]
    fn div_rem_round_trips() {
        let a = Polynomial::new((1..=6).map(F::from_canonical_u64).collect());
        let b = Polynomial::new(vec![F::from_canonical_u64(5), F::ONE]);
        let (q, r) = a.div_rem(&b);
        let reconstructed = &(&b * &q) + &r;
        assert_eq!(reconstructed.trimmed(), a.trimmed());
    }

    #[test]
    fn div_rem_exact_when_roots_match() {
        let roots = vec![F::from_canonical_u64(2), F::from_canonical_u64(9)];
        let p = Polynomial::from_roots(&roots) * Polynomial::new(vec![F::from_canonical_u64(4), F::ONE]);
        let (_, r) = p.div_rem(&Polynomial::from_roots(&roots));
        assert!(r.is_zero());
    }
}
