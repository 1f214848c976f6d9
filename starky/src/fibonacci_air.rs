//! Toy AIR for the Fibonacci sequence, used to exercise the prover/verifier end to end.

use std::collections::HashMap;

use stark_field::{Field, MultivariatePoly};

use crate::air::Air;

/// Computes `n` rows with `row[0] = F(i)`, `row[1] = F(i+1)`.
pub struct FibonacciAir<F: Field> {
    trace_height: usize,
    last_value: F,
}

impl<F: Field> FibonacciAir<F> {
    pub fn new(trace_height: usize, last_value: F) -> Self {
        Self { trace_height, last_value }
    }
}

impl<F: Field> Air<F> for FibonacciAir<F> {
    fn aet(&self) -> Vec<Vec<F>> {
        let mut rows = Vec::with_capacity(self.trace_height);
        rows.push(vec![F::ZERO, F::ONE]);
        for i in 1..self.trace_height {
            let prev = &rows[i - 1];
            rows.push(vec![prev[1], prev[0] + prev[1]]);
        }
        rows
    }

    fn boundary_constraints(&self) -> Vec<(usize, usize, F)> {
        vec![(0, 0, F::ZERO), (self.trace_height - 1, 1, self.last_value)]
    }

    fn transition_constraints(&self) -> Vec<MultivariatePoly<F>> {
        // y1 - x2
        let a = MultivariatePoly::new(
            4,
            HashMap::from([(vec![0, 0, 1, 0], F::ONE), (vec![0, 1, 0, 0], -F::ONE)]),
        );
        // y2 - x1 - x2
        let b = MultivariatePoly::new(
            4,
            HashMap::from([
                (vec![0, 0, 0, 1], F::ONE),
                (vec![1, 0, 0, 0], -F::ONE),
                (vec![0, 1, 0, 0], -F::ONE),
            ]),
        );
        vec![a, b]
    }

    fn n_registers(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryConstraint;
    use crate::parameters::StarkParameters;
    use stark_field::GoldilocksField as F;
    use stark_fri::{FriParameters, Sponge};

    fn params() -> StarkParameters<F> {
        let fri = FriParameters::<F>::new(2, 2, 16, 1, 5).unwrap();
        StarkParameters::new(fri, 16)
    }

    #[test]
    fn honest_fibonacci_proof_verifies() {
        // F(16) = 987 under F(0)=0, F(1)=1 indexing; row 15's second register holds it.
        let air = FibonacciAir::new(16, F::from_canonical_u64(987));
        let params = params();

        let mut prover_sponge = Sponge::new();
        let proof = crate::prover::prove(&air, &params, &mut prover_sponge).unwrap();

        let boundary: Vec<BoundaryConstraint<F>> = air
            .boundary_constraints()
            .into_iter()
            .map(|(row, register, value)| BoundaryConstraint { row, register, value })
            .collect();
        let transitions = air.transition_constraints();

        let mut verifier_sponge = Sponge::new();
        assert!(crate::verifier::verify(&proof, &boundary, &transitions, 2, &params, &mut verifier_sponge).is_ok());
    }

    #[test]
    fn tampered_boundary_value_fails_verification() {
        let air = FibonacciAir::new(16, F::from_canonical_u64(987));
        let params = params();

        let mut prover_sponge = Sponge::new();
        let proof = crate::prover::prove(&air, &params, &mut prover_sponge).unwrap();

        // verifier checks against a wrong claimed last Fibonacci value.
        let boundary = vec![
            BoundaryConstraint { row: 0, register: 0, value: F::ZERO },
            BoundaryConstraint { row: 15, register: 1, value: F::from_canonical_u64(988) },
        ];
        let transitions = air.transition_constraints();

        let mut verifier_sponge = Sponge::new();
        assert!(crate::verifier::verify(&proof, &boundary, &transitions, 2, &params, &mut verifier_sponge).is_err());
    }
}
