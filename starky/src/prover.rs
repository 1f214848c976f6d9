use stark_field::fold::stack;
use stark_field::interpolation::lagrange_interpolate;
use stark_field::{Field, Polynomial};
use stark_fri::{MerkleTree, Sponge};

use crate::air::Air;
use crate::boundary::{compute_boundaries, BoundaryConstraint};
use crate::error::ProtocolViolation;
use crate::parameters::StarkParameters;
use crate::proof::{BqCommitment, StarkProof};

/// Runs the STARK prover against `air`, using `sponge` as the running Fiat-Shamir transcript
/// (shared with the inner FRI call, so the verifier can replay both protocols from one transcript).
pub fn prove<F: Field, A: Air<F>>(
    air: &A,
    params: &StarkParameters<F>,
    sponge: &mut Sponge,
) -> Result<StarkProof<F>, ProtocolViolation> {
    let trace = air.aet();
    let n_registers = air.n_registers();
    if trace.iter().any(|row| row.len() != n_registers) {
        return Err(ProtocolViolation::RegisterCountMismatch {
            expected: n_registers,
            got: trace.first().map_or(0, |row| row.len()),
        });
    }

    let omicron = params.omicron;
    let h: Vec<F> = omicron.powers().take(params.trace_height).collect();

    // Trace polynomials, one per register: the unique interpolant through (H[i], T[i][j]).
    let trace_polynomials: Vec<Polynomial<F>> = (0..n_registers)
        .map(|j| {
            let points: Vec<(F, F)> = h.iter().zip(trace.iter()).map(|(&x, row)| (x, row[j])).collect();
            lagrange_interpolate(&points)
        })
        .collect();

    let boundary_constraints: Vec<BoundaryConstraint<F>> = air
        .boundary_constraints()
        .into_iter()
        .map(|(row, register, value)| BoundaryConstraint { row, register, value })
        .collect();
    let boundaries = compute_boundaries(n_registers, omicron, &boundary_constraints);

    let mut boundary_quotients = Vec::with_capacity(n_registers);
    for j in 0..n_registers {
        let numerator = &trace_polynomials[j] - &boundaries.polynomials[j];
        let (q, r) = numerator.div_rem(&boundaries.zerofiers[j]);
        if !r.is_zero() {
            return Err(ProtocolViolation::BoundaryQuotientRemainder { register: j });
        }
        boundary_quotients.push(q);
    }

    let k = params.fri.folding_factor;
    let domain = &params.fri.domain;
    let domain_next = domain.shifted(omicron);

    let mut current_trees = Vec::with_capacity(n_registers);
    let mut current_stacked = Vec::with_capacity(n_registers);
    let mut next_trees = Vec::with_capacity(n_registers);
    let mut next_stacked = Vec::with_capacity(n_registers);

    for q in &boundary_quotients {
        let evals = q.eval_batch(&domain.points);
        let stacked = stack(&evals, k);
        let tree = MerkleTree::append_bulk(stacked.clone());
        sponge.absorb_hash(tree.root());
        current_trees.push(tree);
        current_stacked.push(stacked);

        let evals_next = q.eval_batch(&domain_next.points);
        let stacked_next = stack(&evals_next, k);
        let tree_next = MerkleTree::append_bulk(stacked_next.clone());
        sponge.absorb_hash(tree_next.root());
        next_trees.push(tree_next);
        next_stacked.push(stacked_next);
    }

    let shifted_trace_polynomials: Vec<Polynomial<F>> =
        trace_polynomials.iter().map(|t| t.scale(omicron)).collect();

    let transition_constraints = air.transition_constraints();
    let z_h_star = Polynomial::from_roots(&h[..h.len() - 1]);

    let mut transition_quotients = Vec::with_capacity(transition_constraints.len());
    for (t, constraint) in transition_constraints.iter().enumerate() {
        let mut substitutions = trace_polynomials.clone();
        substitutions.extend(shifted_trace_polynomials.iter().cloned());
        let p_t = constraint.substitute(&substitutions);
        let (tq, r) = p_t.div_rem(&z_h_star);
        if !r.is_zero() {
            return Err(ProtocolViolation::TransitionQuotientRemainder { constraint: t });
        }
        transition_quotients.push(tq);
    }

    let mut committed: Vec<&Polynomial<F>> = transition_quotients.iter().collect();
    committed.extend(boundary_quotients.iter());

    let weights: Vec<F> = committed.iter().map(|_| sponge.squeeze_field_element::<F>()).collect();
    let combination = weights
        .iter()
        .zip(committed.iter())
        .map(|(&w, &p)| p * w)
        .fold(Polynomial::zero(), |acc, term| &acc + &term);

    let combination_proof = stark_fri::prove(&combination, &params.fri, sponge);

    let indices = &combination_proof.round_proofs[0].indices;
    let bq_current = (0..n_registers)
        .map(|j| BqCommitment {
            root: current_trees[j].root(),
            stacked_rows: indices.iter().map(|&i| current_stacked[j][i].clone()).collect(),
            paths: current_trees[j].prove_bulk(indices),
        })
        .collect();
    let bq_next = (0..n_registers)
        .map(|j| BqCommitment {
            root: next_trees[j].root(),
            stacked_rows: indices.iter().map(|&i| next_stacked[j][i].clone()).collect(),
            paths: next_trees[j].prove_bulk(indices),
        })
        .collect();

    Ok(StarkProof { combination_proof, bq_current, bq_next })
}
