pub mod air;
pub mod boundary;
pub mod error;
pub mod parameters;
pub mod proof;
pub mod prover;
pub mod verifier;

#[cfg(test)]
mod counter_air;
#[cfg(test)]
mod factorial_air;
#[cfg(test)]
mod fibonacci_air;

pub use air::Air;
pub use boundary::{compute_boundaries, BoundaryConstraint, Boundaries};
pub use error::{ProtocolViolation, VerificationFailure};
pub use parameters::StarkParameters;
pub use proof::{BqCommitment, StarkProof};
pub use prover::prove;
pub use verifier::verify;
