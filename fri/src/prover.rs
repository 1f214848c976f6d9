use stark_field::fold::{expand_ext, fold_indices, fold_polynomial, stack};
use stark_field::{Field, Polynomial};

use crate::merkle::MerkleTree;
use crate::parameters::FriParameters;
use crate::proof::{FriProof, RoundProof};
use crate::sponge::Sponge;

/// Runs the FRI prover on `f` (required to have degree `< params.initial_coeffs`), using `sponge`
/// as the running Fiat-Shamir transcript. `sponge` is passed by exclusive borrow rather than taken
/// by value so a caller (the STARK prover) can continue absorbing/squeezing from the same
/// transcript afterwards. Infallible: every division this algorithm performs is against a fixed
/// folding-factor-sized set of coefficients, never against a caller-supplied invariant that could
/// fail to hold.
pub fn prove<F: Field>(f: &Polynomial<F>, params: &FriParameters<F>, sponge: &mut Sponge) -> FriProof<F> {
    let k = params.folding_factor;
    let mut domain = params.domain.clone();

    let evals0 = f.eval_batch(&domain.points);
    let stacked0 = stack(&evals0, k);
    let tree0 = MerkleTree::append_bulk(stacked0.clone());
    let root0 = tree0.root();
    sponge.absorb_hash(root0);

    let r0 = sponge.squeeze_field_element::<F>();
    let (mut g, degree_correction_polynomial) = expand_ext(f, r0, params.initial_coeffs);

    let mut roots = vec![root0];
    let mut trees = vec![tree0];
    let mut stacked_rows_by_round = vec![stacked0];

    for _ in 1..=params.rounds {
        let r_i = sponge.squeeze_field_element::<F>();
        g = fold_polynomial(&g, r_i, k);
        domain = domain.fold(k);

        let evals = g.eval_batch(&domain.points);
        let stacked = stack(&evals, k);
        let tree = MerkleTree::append_bulk(stacked.clone());
        let root = tree.root();
        sponge.absorb_hash(root);

        roots.push(root);
        trees.push(tree);
        stacked_rows_by_round.push(stacked);
    }

    let r_final = sponge.squeeze_field_element::<F>();

    let q0 = stacked_rows_by_round[0].len();
    let mut indices = sponge.squeeze_indices(params.repetitions, q0);

    let mut round_proofs = Vec::with_capacity(params.rounds + 1);
    for (round, (stacked, tree)) in stacked_rows_by_round.iter().zip(trees.iter()).enumerate() {
        if round > 0 {
            indices = fold_indices(&indices, stacked.len());
        }
        let stacked_rows: Vec<Vec<F>> = indices.iter().map(|&i| stacked[i].clone()).collect();
        let paths = tree.prove_bulk(&indices);
        round_proofs.push(RoundProof {
            stacked_rows,
            paths,
            indices: indices.clone(),
        });
    }

    let final_polynomial = fold_polynomial(&g, r_final, k);

    FriProof {
        roots,
        round_proofs,
        final_polynomial,
        degree_correction_polynomial,
    }
}
