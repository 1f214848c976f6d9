use stark_field::fold::{extend_indices, fold_sort_generate};
use stark_field::interpolation::{barycentric_weights, interpolate_at};
use stark_field::{EvaluationDomain, Field};

use crate::error::VerificationFailure;
use crate::merkle::MerkleTree;
use crate::parameters::FriParameters;
use crate::proof::FriProof;
use crate::sponge::Sponge;

/// Runs the FRI verifier against `proof`, replaying `sponge` in lockstep with the prover. Returns
/// `Ok(())` on acceptance; otherwise the specific check that failed, localized per the contract
/// that a verifier never partially accepts.
pub fn verify<F: Field>(
    proof: &FriProof<F>,
    params: &FriParameters<F>,
    sponge: &mut Sponge,
) -> Result<(), VerificationFailure> {
    let k = params.folding_factor;

    if proof.final_polynomial.degree_plus_one() > params.final_coeffs {
        return Err(VerificationFailure::FinalDegreeTooHigh);
    }

    if proof.roots.len() != params.rounds + 1 || proof.round_proofs.len() != params.rounds + 1 {
        return Err(VerificationFailure::MerkleOpening { round: 0 });
    }
    for (round, rp) in proof.round_proofs.iter().enumerate() {
        let ok = MerkleTree::verify_bulk(&rp.stacked_rows, proof.roots[round], &rp.indices, &rp.paths);
        if !ok {
            return Err(VerificationFailure::MerkleOpening { round });
        }
    }

    let mut phis = Vec::with_capacity(params.rounds + 1);
    for (round, &root) in proof.roots.iter().enumerate() {
        sponge.absorb_hash(root);
        if round == 0 {
            // discarded: mirrors the prover's expand_ext randomness, already baked into
            // degree_correction_polynomial, which the proof carries explicitly.
            let _ = sponge.squeeze_field_element::<F>();
        }
        phis.push(sponge.squeeze_field_element::<F>());
    }

    let domains = fold_domain_chain(&params.domain, k, params.rounds);
    let q0 = domains[0].len() / k;
    let indices = sponge.squeeze_indices(params.repetitions, q0);
    if indices != proof.round_proofs[0].indices {
        return Err(VerificationFailure::Consistency { round: 0, query: 0 });
    }

    for round in 0..=params.rounds {
        let rp = &proof.round_proofs[round];
        let domain = &domains[round];
        let n = domain.len();

        let mut folded_values = Vec::with_capacity(rp.indices.len());
        for (qi, &i) in rp.indices.iter().enumerate() {
            let preimages = extend_indices(&[i], n, k);
            let xs: Vec<F> = preimages.iter().map(|&p| domain.points[p]).collect();
            let mut ys = rp.stacked_rows[qi].clone();
            if round == 0 {
                for (y, &x) in ys.iter_mut().zip(&xs) {
                    *y *= proof.degree_correction_polynomial.eval(x);
                }
            }
            let points: Vec<(F, F)> = xs.iter().zip(ys.iter()).map(|(&x, &y)| (x, y)).collect();
            let weights = barycentric_weights(&points);
            folded_values.push(interpolate_at(&points, phis[round], &weights));
        }

        let q_round = n / k;
        if round < params.rounds {
            let next_len = q_round / k;
            let (next_indices, check_indices, folded_values) =
                fold_sort_generate(&rp.indices, next_len, &folded_values);
            let next_rp = &proof.round_proofs[round + 1];
            if next_rp.indices != next_indices {
                return Err(VerificationFailure::Consistency { round, query: 0 });
            }
            for (t, (&ci, &expected)) in check_indices.iter().zip(folded_values.iter()).enumerate() {
                if next_rp.stacked_rows[t][ci] != expected {
                    return Err(VerificationFailure::Consistency { round, query: t });
                }
            }
        } else {
            let next_len = q_round / k;
            let (next_indices, check_indices, folded_values) =
                fold_sort_generate(&rp.indices, next_len, &folded_values);
            let positions: Vec<F> = next_indices
                .iter()
                .zip(check_indices.iter())
                .map(|(&ni, &ci)| domain.points[ni + q_round * ci])
                .collect();
            let expected = proof.final_polynomial.eval_batch(&positions);
            for (t, (&e, &v)) in expected.iter().zip(folded_values.iter()).enumerate() {
                if e != v {
                    return Err(VerificationFailure::FinalCheck { query: t });
                }
            }
        }
    }

    Ok(())
}

fn fold_domain_chain<F: Field>(initial: &EvaluationDomain<F>, k: usize, rounds: usize) -> Vec<EvaluationDomain<F>> {
    let mut domains = Vec::with_capacity(rounds + 1);
    let mut current = initial.clone();
    domains.push(current.clone());
    for _ in 0..rounds {
        current = current.fold(k);
        domains.push(current.clone());
    }
    domains
}
