use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::inversion::try_inverse_u64;
use crate::types::{Field, Sample};

/// The 31-bit BabyBear field, `p = 2^31 - 2^27 + 1`. Its values fit in a `u32`, but arithmetic is
/// carried out in `u64` to keep products from overflowing before reduction.
#[derive(Copy, Clone, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BabyBearField(pub u32);

impl BabyBearField {
    pub const ORDER: u64 = 2_013_265_921;
}

impl Default for BabyBearField {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for BabyBearField {
    fn eq(&self, other: &Self) -> bool {
        self.to_canonical_u64() == other.to_canonical_u64()
    }
}

impl Eq for BabyBearField {}

impl Hash for BabyBearField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.to_canonical_u64())
    }
}

impl Display for BabyBearField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_canonical_u64(), f)
    }
}

impl Debug for BabyBearField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_canonical_u64(), f)
    }
}

impl Field for BabyBearField {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);
    const TWO: Self = Self(2);
    const NEG_ONE: Self = Self((Self::ORDER - 1) as u32);
    const ORDER: u64 = Self::ORDER;
    const TWO_ADICITY: usize = 27;

    // p - 1 = 2^27 * 15; `31` generates the full multiplicative group.
    const MULTIPLICATIVE_GROUP_GENERATOR: Self = Self(31);

    // g^15 mod p, the generator of the order-2^27 subgroup.
    const POWER_OF_TWO_GENERATOR: Self = Self(440_564_289);

    #[inline]
    fn try_inverse(&self) -> Option<Self> {
        try_inverse_u64(self)
    }

    #[inline]
    fn from_canonical_u64(n: u64) -> Self {
        debug_assert!(n < Self::ORDER);
        Self(n as u32)
    }

    #[inline]
    fn to_canonical_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl Sample for BabyBearField {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_canonical_u64(rng.gen_range(0..Self::ORDER))
    }
}

impl Neg for BabyBearField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if self.is_zero() {
            Self::ZERO
        } else {
            Self::from_canonical_u64(Self::ORDER - self.to_canonical_u64())
        }
    }
}

impl Add for BabyBearField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_canonical_u64((self.to_canonical_u64() + rhs.to_canonical_u64()) % Self::ORDER)
    }
}

impl AddAssign for BabyBearField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for BabyBearField {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Sub for BabyBearField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl SubAssign for BabyBearField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BabyBearField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let product = (self.0 as u64) * (rhs.0 as u64);
        Self::from_canonical_u64(product % Self::ORDER)
    }
}

impl MulAssign for BabyBearField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Product for BabyBearField {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
