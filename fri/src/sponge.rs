use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;
use stark_field::Field;

use crate::merkle::Hash;

/// The Fiat-Shamir transcript. Absorbs arbitrary byte strings (Merkle roots, field elements);
/// squeezes bytes, field elements, or distinct index sets deterministically from
/// `SHAKE256(serialize(state) || counter_be || postfix)`.
///
/// State is a value, passed by move or `&mut` through the prover/verifier call chain — never a
/// shared or global singleton — so that a STARK proof's sponge can be handed to its inner FRI
/// call and the two transcripts stay byte-identical between prover and verifier.
#[derive(Clone, Debug, Default)]
pub struct Sponge {
    /// Length-prefixed concatenation of every absorbed byte string, in order.
    objects: Vec<u8>,
    /// Monotonically increasing counter, reset to zero on every absorb.
    counter: u32,
}

impl Sponge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, bytes: &[u8]) {
        self.counter = 0;
        self.objects.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
        self.objects.extend_from_slice(bytes);
    }

    pub fn absorb_hash(&mut self, hash: Hash) {
        self.absorb(&hash);
    }

    pub fn absorb_field_element<F: Field>(&mut self, x: F) {
        self.absorb(&x.to_canonical_u64().to_be_bytes());
    }

    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        self.squeeze_with_postfix(n, &[])
    }

    fn squeeze_with_postfix(&mut self, n: usize, postfix: &[u8]) -> Vec<u8> {
        self.counter += n as u32;
        let mut hasher = Shake256::default();
        hasher.update(&self.objects);
        hasher.update(&self.counter.to_be_bytes());
        hasher.update(postfix);
        let mut reader = hasher.finalize_xof();
        let mut out = vec![0u8; n];
        reader.read(&mut out);
        out
    }

    fn squeeze_number(&mut self, upper_bound: u64, n: usize, postfix: &[u8]) -> u64 {
        let bytes = self.squeeze_with_postfix(n, postfix);
        let mut accumulator: u128 = 0;
        for &b in &bytes {
            accumulator = (accumulator << 8) | b as u128;
        }
        (accumulator % upper_bound as u128) as u64
    }

    pub fn squeeze_field_element<F: Field>(&mut self) -> F {
        F::from_canonical_u64(self.squeeze_number(F::ORDER, 32, &[]))
    }

    pub fn squeeze_index(&mut self, upper_bound: usize) -> usize {
        self.squeeze_number(upper_bound as u64, 32, &[]) as usize
    }

    /// A sorted set of `amount` distinct indices in `[0, upper_bound)`, via rejection sampling:
    /// each attempt `i` re-squeezes with `postfix = i`'s big-endian bytes until enough distinct
    /// values have been collected.
    pub fn squeeze_indices(&mut self, amount: usize, upper_bound: usize) -> Vec<usize> {
        assert!(amount <= upper_bound, "not enough integers to sample indices from");
        if amount == upper_bound {
            return (0..upper_bound).collect();
        }

        let mut result = Vec::with_capacity(amount);
        let mut i: u32 = 0;
        while result.len() < amount {
            let candidate = self.squeeze_number(upper_bound as u64, 32, &i.to_be_bytes()) as usize;
            if !result.contains(&candidate) {
                result.push(candidate);
            }
            i += 1;
        }
        result.sort_unstable();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stark_field::Small193Field as F;

    #[test]
    fn same_absorb_sequence_yields_identical_squeezes() {
        let mut a = Sponge::new();
        let mut b = Sponge::new();
        a.absorb(b"root0");
        b.absorb(b"root0");
        a.absorb_field_element(F::from_canonical_u64(7));
        b.absorb_field_element(F::from_canonical_u64(7));

        assert_eq!(a.squeeze(16), b.squeeze(16));
        assert_eq!(a.squeeze_field_element::<F>(), b.squeeze_field_element::<F>());
        assert_eq!(a.squeeze_indices(3, 10), b.squeeze_indices(3, 10));
    }

    #[test]
    fn different_absorptions_diverge() {
        let mut a = Sponge::new();
        let mut b = Sponge::new();
        a.absorb(b"root0");
        b.absorb(b"root1");
        assert_ne!(a.squeeze(16), b.squeeze(16));
    }

    #[test]
    fn squeeze_indices_are_distinct_and_in_range() {
        let mut s = Sponge::new();
        s.absorb(b"seed");
        let indices = s.squeeze_indices(5, 20);
        assert_eq!(indices.len(), 5);
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
        assert!(indices.iter().all(|&i| i < 20));
    }

    #[test]
    fn squeeze_indices_full_range_returns_everything() {
        let mut s = Sponge::new();
        s.absorb(b"seed");
        assert_eq!(s.squeeze_indices(6, 6), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn counter_resets_on_absorb() {
        let mut a = Sponge::new();
        a.absorb(b"x");
        let first = a.squeeze(8);
        a.absorb(b"y");
        let mut b = Sponge::new();
        b.absorb(b"x");
        b.absorb(b"y");
        assert_eq!(a.squeeze(8), b.squeeze(8));
        let _ = first;
    }
}
