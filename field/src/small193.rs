use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::inversion::try_inverse_u64;
use crate::types::{Field, Sample};

/// The toy field `p = 193`, used for hand-checkable FRI/STARK test vectors. `193` is prime,
/// `192 = 2^6 * 3`, so it has a subgroup of order up to `64`, enough for small test domains.
#[derive(Copy, Clone, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Small193Field(pub u8);

impl Small193Field {
    pub const ORDER: u64 = 193;
}

impl Default for Small193Field {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Small193Field {
    fn eq(&self, other: &Self) -> bool {
        self.to_canonical_u64() == other.to_canonical_u64()
    }
}

impl Eq for Small193Field {}

impl Hash for Small193Field {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.to_canonical_u64())
    }
}

impl Display for Small193Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_canonical_u64(), f)
    }
}

impl Debug for Small193Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_canonical_u64(), f)
    }
}

impl Field for Small193Field {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);
    const TWO: Self = Self(2);
    const NEG_ONE: Self = Self((Self::ORDER - 1) as u8);
    const ORDER: u64 = Self::ORDER;
    const TWO_ADICITY: usize = 6;

    // p - 1 = 192 = 2^6 * 3; `5` generates the full multiplicative group.
    const MULTIPLICATIVE_GROUP_GENERATOR: Self = Self(5);

    // g^3 mod p, the generator of the order-64 subgroup.
    const POWER_OF_TWO_GENERATOR: Self = Self(125);

    #[inline]
    fn try_inverse(&self) -> Option<Self> {
        try_inverse_u64(self)
    }

    #[inline]
    fn from_canonical_u64(n: u64) -> Self {
        debug_assert!(n < Self::ORDER);
        Self(n as u8)
    }

    #[inline]
    fn to_canonical_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl Sample for Small193Field {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_canonical_u64(rng.gen_range(0..Self::ORDER))
    }
}

impl Neg for Small193Field {
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

impl Add for Small193Field {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_canonical_u64((self.to_canonical_u64() + rhs.to_canonical_u64()) % Self::ORDER)
    }
}

impl AddAssign for Small193Field {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Small193Field {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Sub for Small193Field {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl SubAssign for Small193Field {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Small193Field {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let product = (self.0 as u64) * (rhs.0 as u64);
        Self::from_canonical_u64(product % Self::ORDER)
    }
}

impl MulAssign for Small193Field {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Product for Small193Field {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}
