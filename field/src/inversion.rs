use crate::types::Field;

/// Inverts an element via the extended Euclidean algorithm on `(ORDER, x)`, run in `i128` to
/// avoid overflow for any of the field sizes this crate supports. Returns `None` for zero.
///
/// Plonky2's Goldilocks implementation instead uses a branchless plus-minus binary GCD
/// specialized to a single 64-bit modulus; since this crate's fields are small enough that
/// inversion is never a bottleneck, a single generic routine is used for all three.
pub(crate) fn try_inverse_u64<F: Field>(x: &F) -> Option<F> {
    let a = x.to_canonical_u64() as i128;
    let modulus = F::ORDER as i128;
    if a == 0 {
        return None;
    }

    let (mut old_r, mut r) = (a, modulus);
    let (mut old_s, mut s) = (1i128, 0i128);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    // old_r is now gcd(a, modulus), which must be 1 since modulus is prime and a != 0.
    debug_assert_eq!(old_r, 1, "bug in try_inverse_u64: inputs were not coprime");

    let canonical = old_s.rem_euclid(modulus) as u64;
    Some(F::from_canonical_u64(canonical))
}
