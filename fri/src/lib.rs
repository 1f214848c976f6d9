pub mod error;
pub mod merkle;
pub mod parameters;
pub mod proof;
pub mod prover;
pub mod sponge;
pub mod verifier;

pub use error::{ParameterError, VerificationFailure};
pub use merkle::{Hash, MerkleProof, MerkleTree};
pub use parameters::FriParameters;
pub use proof::{FriProof, RoundProof};
pub use prover::prove;
pub use sponge::Sponge;
pub use verifier::verify;
