use sha3::{Digest, Sha3_256};
use stark_field::Field;
use stark_util::log2_strict;

pub type Hash = [u8; 32];

/// Serializes a stacked-evaluation row to bytes for hashing: each element's canonical
/// representative, big-endian, concatenated in order.
pub fn serialize_row<F: Field>(row: &[F]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(row.len() * 8);
    for x in row {
        bytes.extend_from_slice(&x.to_canonical_u64().to_be_bytes());
    }
    bytes
}

fn hash_leaf(bytes: &[u8]) -> Hash {
    let mut hasher = Sha3_256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

fn hash_node(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha3_256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}

/// The sibling digests of a leaf's path to the root, ordered from the bottommost layer up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub siblings: Vec<Hash>,
}

/// A binary Merkle tree over serialized stacked-evaluation rows, SHA3-256 throughout. Built once
/// from a complete set of rows (`append_bulk`) and then queried; there is no incremental append or
/// deletion, matching the per-proof, build-once-discard lifecycle of the prover/verifier.
#[derive(Clone, Debug)]
pub struct MerkleTree<F: Field> {
    leaves: Vec<Vec<F>>,
    /// `layers[0]` holds the leaf hashes; `layers.last()` holds the single root hash.
    layers: Vec<Vec<Hash>>,
}

impl<F: Field> MerkleTree<F> {
    pub fn append_bulk(rows: Vec<Vec<F>>) -> Self {
        assert!(!rows.is_empty(), "cannot build a Merkle tree over zero rows");
        log2_strict(rows.len());

        let leaf_hashes: Vec<Hash> = rows.iter().map(|row| hash_leaf(&serialize_row(row))).collect();
        let mut layers = vec![leaf_hashes];
        while layers.last().unwrap().len() > 1 {
            let prev = layers.last().unwrap();
            let next = prev.chunks(2).map(|pair| hash_node(&pair[0], &pair[1])).collect();
            layers.push(next);
        }
        Self { leaves: rows, layers }
    }

    pub fn root(&self) -> Hash {
        self.layers.last().unwrap()[0]
    }

    pub fn leaf(&self, index: usize) -> &[F] {
        &self.leaves[index]
    }

    pub fn prove(&self, mut index: usize) -> MerkleProof {
        let num_layers = self.layers.len() - 1;
        let siblings = (0..num_layers)
            .map(|layer| {
                let sibling_index = index ^ 1;
                index >>= 1;
                self.layers[layer][sibling_index]
            })
            .collect();
        MerkleProof { siblings }
    }

    pub fn prove_bulk(&self, indices: &[usize]) -> Vec<MerkleProof> {
        indices.iter().map(|&i| self.prove(i)).collect()
    }

    pub fn verify(row: &[F], root: Hash, index: usize, proof: &MerkleProof) -> bool {
        let mut digest = hash_leaf(&serialize_row(row));
        let mut index = index;
        for sibling in &proof.siblings {
            digest = if index & 1 == 0 {
                hash_node(&digest, sibling)
            } else {
                hash_node(sibling, &digest)
            };
            index >>= 1;
        }
        digest == root
    }

    pub fn verify_bulk(rows: &[Vec<F>], root: Hash, indices: &[usize], proofs: &[MerkleProof]) -> bool {
        rows.len() == indices.len()
            && rows.len() == proofs.len()
            && rows
                .iter()
                .zip(indices)
                .zip(proofs)
                .all(|((row, &index), proof)| Self::verify(row, root, index, proof))
    }
}
