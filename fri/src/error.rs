use thiserror::Error;

/// Raised at `FriParameters` construction when `(k, ρ, d₀, d_f, λ)` are mutually inconsistent.
/// Fatal: no parameter value, and therefore no proof state, is ever created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("folding factor k={k} is not a power of two")]
    FoldingFactorNotPowerOfTwo { k: usize },
    #[error("expansion factor rho={rho} must be greater than one")]
    TrivialExpansionFactor { rho: usize },
    #[error("initial domain size d0*rho={size} is not a power of two")]
    DomainSizeNotPowerOfTwo { size: usize },
    #[error("initial coefficient count d0={d0} is not a power of two")]
    InitialNotPowerOfTwo { d0: usize },
    #[error("final coefficient count d_f={d_f} must be smaller than initial d0={d0}")]
    FinalNotSmallerThanInitial { d0: usize, d_f: usize },
    #[error("derived round count is negative for d0={d0}, d_f={d_f}, k={k}")]
    NegativeRoundCount { d0: usize, d_f: usize, k: usize },
}

/// The verifier's ordinary failure mode. Not exceptional: every check that can fail is localized
/// to a specific tag rather than collapsing into a single boolean, while still never granting
/// partial acceptance — any variant here means the whole proof is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationFailure {
    #[error("final polynomial has degree >= d_f")]
    FinalDegreeTooHigh,
    #[error("merkle opening failed in round {round}")]
    MerkleOpening { round: usize },
    #[error("per-query consistency check failed in round {round} for query index {query}")]
    Consistency { round: usize, query: usize },
    #[error("final polynomial evaluation mismatch at query index {query}")]
    FinalCheck { query: usize },
}
