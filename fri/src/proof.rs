use stark_field::{Field, Polynomial};

use crate::merkle::{Hash, MerkleProof};

/// The queried openings for a single FRI round: the stacked rows at the queried indices, their
/// Merkle inclusion paths, and the (round-local) indices they were queried at.
#[derive(Clone, Debug)]
pub struct RoundProof<F: Field> {
    pub stacked_rows: Vec<Vec<F>>,
    pub paths: Vec<MerkleProof>,
    pub indices: Vec<usize>,
}

/// A complete FRI proof: one [`RoundProof`] and committed root per round, the final polynomial,
/// and the degree-correction polynomial applied to round 0.
#[derive(Clone, Debug)]
pub struct FriProof<F: Field> {
    pub roots: Vec<Hash>,
    pub round_proofs: Vec<RoundProof<F>>,
    pub final_polynomial: Polynomial<F>,
    pub degree_correction_polynomial: Polynomial<F>,
}
