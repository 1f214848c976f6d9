use thiserror::Error;

/// Raised by the prover when a division the algorithm assumes is exact turns out not to be, or
/// when the supplied trace doesn't match the constraint arity. Always a caller or prover bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("boundary quotient division for register {register} had a nonzero remainder")]
    BoundaryQuotientRemainder { register: usize },
    #[error("transition quotient division for constraint {constraint} had a nonzero remainder")]
    TransitionQuotientRemainder { constraint: usize },
    #[error("trace has {got} registers, constraints expect {expected}")]
    RegisterCountMismatch { expected: usize, got: usize },
}

/// The STARK verifier's ordinary failure mode, localized per the check that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    #[error("boundary quotient merkle opening failed for register {register} ({which})")]
    BoundaryQuotientOpening { register: usize, which: &'static str },
    #[error("combination polynomial FRI proof failed to verify: {0}")]
    Fri(#[from] stark_fri::VerificationFailure),
    #[error("expected combination-polynomial evaluation mismatch at query position {position}")]
    Consistency { position: usize },
}
