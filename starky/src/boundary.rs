use stark_field::interpolation::lagrange_interpolate;
use stark_field::{Field, Polynomial};

/// An assertion that a specific trace cell holds a specific value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryConstraint<F: Field> {
    pub row: usize,
    pub register: usize,
    pub value: F,
}

/// Per-register boundary interpolants and zerofiers, built once from the constraint list and the
/// trace subgroup generator. Needed by both prover (to build boundary quotients) and verifier (to
/// reconstruct trace values from opened boundary-quotient evaluations).
#[derive(Clone, Debug)]
pub struct Boundaries<F: Field> {
    pub polynomials: Vec<Polynomial<F>>,
    pub zerofiers: Vec<Polynomial<F>>,
}

pub fn compute_boundaries<F: Field>(
    n_registers: usize,
    omicron: F,
    constraints: &[BoundaryConstraint<F>],
) -> Boundaries<F> {
    let mut polynomials = Vec::with_capacity(n_registers);
    let mut zerofiers = Vec::with_capacity(n_registers);

    for register in 0..n_registers {
        let points: Vec<(F, F)> = constraints
            .iter()
            .filter(|c| c.register == register)
            .map(|c| (omicron.exp_u64(c.row as u64), c.value))
            .collect();
        let xs: Vec<F> = points.iter().map(|&(x, _)| x).collect();
        polynomials.push(lagrange_interpolate(&points));
        zerofiers.push(Polynomial::from_roots(&xs));
    }

    Boundaries { polynomials, zerofiers }
}
