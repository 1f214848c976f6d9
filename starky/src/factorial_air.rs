//! Toy AIR for the factorial sequence: register 0 counts up, register 1 accumulates the product.
//! The logical computation only runs for `n+1` rows; remaining rows up to the trace subgroup size
//! continue the same transition rule so that quotient division stays exact across all of `H`.

use std::collections::HashMap;

use stark_field::{Field, MultivariatePoly};
use stark_util::next_power_of_two;

use crate::air::Air;

pub struct FactorialAir<F: Field> {
    n: usize,
    trace_height: usize,
    _marker: std::marker::PhantomData<F>,
}

impl<F: Field> FactorialAir<F> {
    pub fn new(n: usize) -> Self {
        let trace_height = next_power_of_two(n + 1);
        Self { n, trace_height, _marker: std::marker::PhantomData }
    }
}

impl<F: Field> Air<F> for FactorialAir<F> {
    fn aet(&self) -> Vec<Vec<F>> {
        let mut rows = Vec::with_capacity(self.trace_height);
        rows.push(vec![F::ZERO, F::ONE]);
        for i in 1..self.trace_height {
            let prev = &rows[i - 1];
            let counter = prev[0] + F::ONE;
            let product = prev[1] * counter;
            rows.push(vec![counter, product]);
        }
        rows
    }

    fn boundary_constraints(&self) -> Vec<(usize, usize, F)> {
        let result = self.aet()[self.n][1];
        vec![
            (0, 0, F::ZERO),
            (0, 1, F::ONE),
            (1, 0, F::ONE),
            (1, 1, F::ONE),
            (self.n, 0, F::from_canonical_u64(self.n as u64)),
            (self.n, 1, result),
        ]
    }

    fn transition_constraints(&self) -> Vec<MultivariatePoly<F>> {
        // y1 - x1 - 1
        let a = MultivariatePoly::new(
            4,
            HashMap::from([(vec![0, 0, 1, 0], F::ONE), (vec![1, 0, 0, 0], -F::ONE), (vec![0, 0, 0, 0], -F::ONE)]),
        );
        // y2 - y1*x2
        let b = MultivariatePoly::new(
            4,
            HashMap::from([(vec![0, 0, 0, 1], F::ONE), (vec![0, 1, 1, 0], -F::ONE)]),
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

    #[test]
    fn honest_factorial_proof_verifies() {
        let air = FactorialAir::<F>::new(5);
        let fri = FriParameters::<F>::new(2, 2, 8, 1, 5).unwrap();
        let params = StarkParameters::new(fri, air.trace_height);

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
        assert_eq!(air.aet()[5][1], F::from_canonical_u64(120));
    }
}
