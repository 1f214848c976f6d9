use stark_field::fold::extend_indices;
use stark_field::{Field, MultivariatePoly, Polynomial};
use stark_fri::{MerkleTree, Sponge};

use crate::boundary::{compute_boundaries, BoundaryConstraint};
use crate::error::VerificationFailure;
use crate::parameters::StarkParameters;
use crate::proof::StarkProof;

/// Runs the STARK verifier against `proof`, replaying `sponge` in lockstep with the prover
/// (including the handoff into the inner FRI verifier). Takes the boundary/transition constraints
/// directly rather than an `Air` implementor, since the verifier never needs the trace itself.
pub fn verify<F: Field>(
    proof: &StarkProof<F>,
    boundary_constraints: &[BoundaryConstraint<F>],
    transition_constraints: &[MultivariatePoly<F>],
    n_registers: usize,
    params: &StarkParameters<F>,
    sponge: &mut Sponge,
) -> Result<(), VerificationFailure> {
    let indices = proof.combination_proof.round_proofs[0].indices.clone();

    for j in 0..n_registers {
        let current = &proof.bq_current[j];
        if !MerkleTree::verify_bulk(&current.stacked_rows, current.root, &indices, &current.paths) {
            return Err(VerificationFailure::BoundaryQuotientOpening { register: j, which: "current" });
        }
        sponge.absorb_hash(current.root);

        let next = &proof.bq_next[j];
        if !MerkleTree::verify_bulk(&next.stacked_rows, next.root, &indices, &next.paths) {
            return Err(VerificationFailure::BoundaryQuotientOpening { register: j, which: "next" });
        }
        sponge.absorb_hash(next.root);
    }

    let boundaries = compute_boundaries(n_registers, params.omicron, boundary_constraints);

    let weight_count = transition_constraints.len() + n_registers;
    let weights: Vec<F> = (0..weight_count).map(|_| sponge.squeeze_field_element::<F>()).collect();

    stark_fri::verify(&proof.combination_proof, &params.fri, sponge)?;

    let k = params.fri.folding_factor;
    let n0 = params.fri.domain.len();
    let e = extend_indices(&indices, n0, k);
    let xs_current: Vec<F> = e.iter().map(|&p| params.fri.domain.points[p]).collect();
    let xs_next: Vec<F> = xs_current.iter().map(|&x| x * params.omicron).collect();

    let h: Vec<F> = params.omicron.powers().take(params.trace_height).collect();
    let z_h_star = Polynomial::from_roots(&h[..h.len() - 1]);

    let flatten = |rows: &[Vec<F>]| -> Vec<F> { rows.iter().flatten().copied().collect() };

    let bq_current_flat: Vec<Vec<F>> = proof.bq_current.iter().map(|bq| flatten(&bq.stacked_rows)).collect();
    let bq_next_flat: Vec<Vec<F>> = proof.bq_next.iter().map(|bq| flatten(&bq.stacked_rows)).collect();

    let mut trace_current = Vec::with_capacity(n_registers);
    let mut trace_next = Vec::with_capacity(n_registers);
    for j in 0..n_registers {
        let zj_current = boundaries.zerofiers[j].eval_batch(&xs_current);
        let bj_current = boundaries.polynomials[j].eval_batch(&xs_current);
        trace_current.push(
            bq_current_flat[j]
                .iter()
                .zip(zj_current.iter().zip(bj_current.iter()))
                .map(|(&q, (&z, &b))| q * z + b)
                .collect::<Vec<F>>(),
        );

        let zj_next = boundaries.zerofiers[j].eval_batch(&xs_next);
        let bj_next = boundaries.polynomials[j].eval_batch(&xs_next);
        trace_next.push(
            bq_next_flat[j]
                .iter()
                .zip(zj_next.iter().zip(bj_next.iter()))
                .map(|(&q, (&z, &b))| q * z + b)
                .collect::<Vec<F>>(),
        );
    }

    let width = e.len();
    let mut expected = vec![F::ZERO; width];
    for (t_idx, constraint) in transition_constraints.iter().enumerate() {
        let z_h_star_at: Vec<F> = xs_current.iter().map(|&x| z_h_star.eval(x).inverse()).collect();
        for pos in 0..width {
            let mut point: Vec<F> = (0..n_registers).map(|j| trace_current[j][pos]).collect();
            point.extend((0..n_registers).map(|j| trace_next[j][pos]));
            let value = constraint.eval(&point);
            expected[pos] += weights[t_idx] * value * z_h_star_at[pos];
        }
    }
    for j in 0..n_registers {
        let w = weights[transition_constraints.len() + j];
        for pos in 0..width {
            expected[pos] += w * bq_current_flat[j][pos];
        }
    }

    let actual = flatten(&proof.combination_proof.round_proofs[0].stacked_rows);
    for pos in 0..width {
        if expected[pos] != actual[pos] {
            return Err(VerificationFailure::Consistency { position: pos });
        }
    }

    Ok(())
}
