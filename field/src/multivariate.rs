use std::collections::HashMap;

use crate::polynomial::Polynomial;
use crate::types::Field;

/// A sparse multivariate polynomial: a map from exponent tuple to coefficient. Exponent tuples
/// all share the same arity (`num_vars`); terms with a mismatched tuple length are a caller bug.
#[derive(Clone, Debug)]
pub struct MultivariatePoly<F: Field> {
    pub num_vars: usize,
    pub terms: HashMap<Vec<u64>, F>,
}

impl<F: Field> MultivariatePoly<F> {
    pub fn new(num_vars: usize, terms: HashMap<Vec<u64>, F>) -> Self {
        for exponents in terms.keys() {
            assert_eq!(exponents.len(), num_vars, "exponent tuple arity mismatch");
        }
        Self { num_vars, terms }
    }

    /// Evaluates at a single point `(x_1, ..., x_n)`.
    pub fn eval(&self, point: &[F]) -> F {
        assert_eq!(point.len(), self.num_vars);
        self.terms
            .iter()
            .map(|(exponents, &coeff)| {
                let monomial: F = exponents
                    .iter()
                    .zip(point)
                    .map(|(&e, &x)| x.exp_u64(e))
                    .product();
                coeff * monomial
            })
            .sum()
    }

    /// Evaluates `self` at each row of `points` (`points[i]` has length `num_vars`).
    pub fn eval_broadcast(&self, points: &[Vec<F>]) -> Vec<F> {
        points.iter().map(|p| self.eval(p)).collect()
    }

    /// Symbolic composition: substitutes each variable `X_i` with a univariate polynomial
    /// `substitutions[i]`, returning the resulting univariate polynomial. Used by the STARK
    /// prover/verifier to turn a transition constraint over `(current || next)` registers into a
    /// single polynomial in the evaluation-domain variable.
    pub fn substitute(&self, substitutions: &[Polynomial<F>]) -> Polynomial<F> {
        assert_eq!(substitutions.len(), self.num_vars);
        let mut result = Polynomial::zero();
        for (exponents, &coeff) in &self.terms {
            let mut term = Polynomial::constant(coeff);
            for (&e, poly) in exponents.iter().zip(substitutions) {
                for _ in 0..e {
                    term = &term * poly;
                }
            }
            result = &result + &term;
        }
        result
    }
}
