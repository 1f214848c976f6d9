//! Prime-field arithmetic, polynomial routines, and the FRI/STARK folding primitives they share.

pub mod babybear;
pub mod domain;
#[cfg(test)]
mod field_testing;
pub mod fold;
pub mod goldilocks;
mod inversion;
pub mod interpolation;
pub mod multivariate;
pub mod polynomial;
pub mod small193;
pub mod types;

pub use babybear::BabyBearField;
pub use domain::EvaluationDomain;
pub use goldilocks::GoldilocksField;
pub use multivariate::MultivariatePoly;
pub use polynomial::Polynomial;
pub use small193::Small193Field;
pub use types::{Field, Powers, Sample};
