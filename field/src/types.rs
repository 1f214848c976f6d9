use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::BigUint;
use rand::rngs::OsRng;
use rand::Rng;

/// Sampling of values uniformly at random, for test fixtures and benchmarking-style setup code.
/// Never used by the prover/verifier themselves, which derive everything from the sponge.
pub trait Sample: Sized {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;

    #[inline]
    fn rand() -> Self {
        Self::sample(&mut OsRng)
    }

    fn rand_vec(n: usize) -> Vec<Self> {
        (0..n).map(|_| Self::rand()).collect()
    }
}

/// An iterator over the powers of a base element: `b^0, b^1, b^2, ...`.
#[derive(Clone, Debug)]
pub struct Powers<F: Field> {
    base: F,
    current: F,
}

impl<F: Field> Iterator for Powers<F> {
    type Item = F;

    fn next(&mut self) -> Option<F> {
        let result = self.current;
        self.current *= self.base;
        Some(result)
    }
}

/// A prime field `F_p`, parameterized by its concrete representation.
///
/// Implementations provide `Goldilocks` (`p = 2^64 - 2^32 + 1`, the reference target),
/// `BabyBear` (`p = 2^31 - 2^27 + 1`), and `Small193` (the toy `p = 193` field used in tests).
pub trait Field:
    'static
    + Copy
    + Clone
    + Eq
    + Hash
    + Debug
    + Display
    + Default
    + Sample
    + Neg<Output = Self>
    + Add<Self, Output = Self>
    + AddAssign<Self>
    + Sub<Self, Output = Self>
    + SubAssign<Self>
    + Mul<Self, Output = Self>
    + MulAssign<Self>
    + Sum
    + Product
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const NEG_ONE: Self;

    /// Prime modulus of the field.
    const ORDER: u64;

    /// The 2-adicity of `F_p^*`, i.e. the largest `k` such that `2^k | (p - 1)`.
    const TWO_ADICITY: usize;

    /// Generator of the full multiplicative group `F_p^*`.
    const MULTIPLICATIVE_GROUP_GENERATOR: Self;

    /// Generator of the multiplicative subgroup of order `2^TWO_ADICITY`.
    const POWER_OF_TWO_GENERATOR: Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    /// Multiplicative inverse, or `None` for zero.
    fn try_inverse(&self) -> Option<Self>;

    fn inverse(&self) -> Self {
        self.try_inverse().expect("tried to invert zero")
    }

    /// Returns `n`, assumed already reduced (`n < ORDER`).
    fn from_canonical_u64(n: u64) -> Self;

    /// Returns the canonical representative of `self` as an integer in `[0, ORDER)`.
    fn to_canonical_u64(&self) -> u64;

    fn exp_u64(&self, power: u64) -> Self {
        let mut current = *self;
        let mut product = Self::ONE;
        let mut p = power;
        while p > 0 {
            if p & 1 != 0 {
                product *= current;
            }
            current *= current;
            p >>= 1;
        }
        product
    }

    /// The generator of `F_p^*`, also called `primitive_element`.
    fn primitive_element() -> Self {
        Self::MULTIPLICATIVE_GROUP_GENERATOR
    }

    /// A primitive `n`-th root of unity, for `n` a power of two dividing `ORDER - 1`.
    fn primitive_root_of_unity(n: usize) -> Self {
        assert!(stark_util::is_pow2(n), "subgroup order must be a power of two: {n}");
        let n_log = stark_util::log2_strict(n);
        assert!(
            n_log <= Self::TWO_ADICITY,
            "no subgroup of order {n} in this field (two-adicity is {})",
            Self::TWO_ADICITY
        );
        let mut base = Self::POWER_OF_TWO_GENERATOR;
        for _ in 0..(Self::TWO_ADICITY - n_log) {
            base *= base;
        }
        base
    }

    fn powers(&self) -> Powers<Self> {
        Powers {
            base: *self,
            current: Self::ONE,
        }
    }

    /// Uniformly samples a field element from an arbitrary-length byte string, by treating the
    /// bytes as a big-endian integer accumulator and reducing modulo `ORDER`.
    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
        let n = BigUint::from_bytes_be(bytes);
        let reduced = n % BigUint::from(Self::ORDER);
        let digits = reduced.to_u64_digits();
        Self::from_canonical_u64(digits.first().copied().unwrap_or(0))
    }
}
