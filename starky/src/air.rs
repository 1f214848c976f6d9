use stark_field::{Field, MultivariatePoly};

/// The abstract collaborator interface an execution-trace provider implements. The library never
/// validates that a supplied trace actually satisfies its own constraints — that's the caller's
/// obligation; a dishonest implementation simply fails to produce a proof that verifies.
pub trait Air<F: Field> {
    /// The algebraic execution trace, shape `n_rows x n_registers`. Its row count must equal the
    /// trace subgroup size used by the prover (the next power of two at or above the logical
    /// computation length), so that boundary/transition quotients divide exactly across the whole
    /// subgroup; rows beyond the logical computation continue the same transition rule.
    fn aet(&self) -> Vec<Vec<F>>;

    /// `(row, register, value)` triples asserting `trace[row][register] == value`.
    fn boundary_constraints(&self) -> Vec<(usize, usize, F)>;

    /// One multivariate polynomial per transition constraint, each over `2 * n_registers`
    /// variables (current row registers, then next row registers) that must vanish on every
    /// consecutive pair of trace rows.
    fn transition_constraints(&self) -> Vec<MultivariatePoly<F>>;

    fn n_registers(&self) -> usize;
}
