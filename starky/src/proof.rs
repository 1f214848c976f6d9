use stark_field::Field;
use stark_fri::{FriProof, Hash, MerkleProof};

/// A single register's boundary-quotient opening at the FRI round-0 queried indices, over one of
/// the two committed domains (current or omicron-shifted).
#[derive(Clone, Debug)]
pub struct BqCommitment<F: Field> {
    pub root: Hash,
    pub stacked_rows: Vec<Vec<F>>,
    pub paths: Vec<MerkleProof>,
}

/// A complete STARK proof: the combination polynomial's FRI proof, plus one boundary-quotient
/// opening per register on each of the current and omicron-shifted domains.
#[derive(Clone, Debug)]
pub struct StarkProof<F: Field> {
    pub combination_proof: FriProof<F>,
    pub bq_current: Vec<BqCommitment<F>>,
    pub bq_next: Vec<BqCommitment<F>>,
}
