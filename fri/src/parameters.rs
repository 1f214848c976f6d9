use stark_field::{EvaluationDomain, Field};
use stark_util::{is_pow2, log2_strict, log_floor};

use crate::error::ParameterError;

/// `(k, ρ, d₀, d_f, λ, F, ω, h, D)` from the data model: the folding factor, expansion factor,
/// initial/final coefficient counts, security level, and the derived evaluation domain.
#[derive(Clone, Debug)]
pub struct FriParameters<F: Field> {
    pub folding_factor: usize,
    pub expansion_factor: usize,
    pub initial_coeffs: usize,
    pub final_coeffs: usize,
    pub security_bits: usize,
    pub domain: EvaluationDomain<F>,
    pub rounds: usize,
    pub repetitions: usize,
}

impl<F: Field> FriParameters<F> {
    pub fn new(
        folding_factor: usize,
        expansion_factor: usize,
        initial_coeffs: usize,
        final_coeffs: usize,
        security_bits: usize,
    ) -> Result<Self, ParameterError> {
        if !is_pow2(folding_factor) {
            return Err(ParameterError::FoldingFactorNotPowerOfTwo { k: folding_factor });
        }
        if expansion_factor <= 1 {
            return Err(ParameterError::TrivialExpansionFactor { rho: expansion_factor });
        }
        if !is_pow2(initial_coeffs) {
            return Err(ParameterError::InitialNotPowerOfTwo { d0: initial_coeffs });
        }
        if final_coeffs >= initial_coeffs {
            return Err(ParameterError::FinalNotSmallerThanInitial {
                d0: initial_coeffs,
                d_f: final_coeffs,
            });
        }
        let domain_size = initial_coeffs * expansion_factor;
        if !is_pow2(domain_size) {
            return Err(ParameterError::DomainSizeNotPowerOfTwo { size: domain_size });
        }

        // rounds = floor(log_k(d0/d_f)) - 1, reproduced exactly per the accumulator derivation.
        let ratio_log = log_floor((initial_coeffs / final_coeffs.max(1)) as u64, folding_factor as u64);
        let rounds = (ratio_log as isize) - 1;
        if rounds < 0 {
            return Err(ParameterError::NegativeRoundCount {
                d0: initial_coeffs,
                d_f: final_coeffs,
                k: folding_factor,
            });
        }

        let repetitions = stark_util::ceil_div(security_bits, log2_strict(expansion_factor));
        let domain = EvaluationDomain::with_coset_offset(domain_size);

        Ok(Self {
            folding_factor,
            expansion_factor,
            initial_coeffs,
            final_coeffs,
            security_bits,
            domain,
            rounds: rounds as usize,
            repetitions,
        })
    }
}
