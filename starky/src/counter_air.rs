//! Toy AIR for a single register counting from `0` to `n-1`.

use std::collections::HashMap;

use stark_field::{Field, MultivariatePoly};

use crate::air::Air;

pub struct CounterAir<F: Field> {
    trace_height: usize,
    _marker: std::marker::PhantomData<F>,
}

impl<F: Field> CounterAir<F> {
    pub fn new(trace_height: usize) -> Self {
        Self { trace_height, _marker: std::marker::PhantomData }
    }
}

impl<F: Field> Air<F> for CounterAir<F> {
    fn aet(&self) -> Vec<Vec<F>> {
        (0..self.trace_height).map(|i| vec![F::from_canonical_u64(i as u64)]).collect()
    }

    fn boundary_constraints(&self) -> Vec<(usize, usize, F)> {
        vec![(0, 0, F::ZERO), (self.trace_height - 1, 0, F::from_canonical_u64((self.trace_height - 1) as u64))]
    }

    fn transition_constraints(&self) -> Vec<MultivariatePoly<F>> {
        // y - x - 1
        let c = MultivariatePoly::new(
            2,
            HashMap::from([(vec![0, 1], F::ONE), (vec![1, 0], -F::ONE), (vec![0, 0], -F::ONE)]),
        );
        vec![c]
    }

    fn n_registers(&self) -> usize {
        1
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
    fn honest_counter_proof_verifies() {
        let air = CounterAir::<F>::new(8);
        let fri = FriParameters::<F>::new(2, 2, 8, 1, 5).unwrap();
        let params = StarkParameters::new(fri, 8);

        let mut prover_sponge = Sponge::new();
        let proof = crate::prover::prove(&air, &params, &mut prover_sponge).unwrap();

        let boundary: Vec<BoundaryConstraint<F>> = air
            .boundary_constraints()
            .into_iter()
            .map(|(row, register, value)| BoundaryConstraint { row, register, value })
            .collect();
        let transitions = air.transition_constraints();

        let mut verifier_sponge = Sponge::new();
        assert!(crate::verifier::verify(&proof, &boundary, &transitions, 1, &params, &mut verifier_sponge).is_ok());
    }
}
