use crate::types::Field;

/// The ordered evaluation domain `D = [h * w^i : i = 0..N)`, for `w` a primitive `N`-th root of
/// unity and `h` a coset offset keeping `D` disjoint from the roots of any zerofier built over a
/// smaller subgroup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain<F: Field> {
    pub offset: F,
    pub generator: F,
    pub points: Vec<F>,
}

impl<F: Field> EvaluationDomain<F> {
    pub fn new(offset: F, size: usize) -> Self {
        let generator = F::primitive_root_of_unity(size);
        let points = generator
            .powers()
            .take(size)
            .map(|w| offset * w)
            .collect();
        Self {
            offset,
            generator,
            points,
        }
    }

    /// The default FRI domain: offset by the field's primitive element.
    pub fn with_coset_offset(size: usize) -> Self {
        Self::new(F::primitive_element(), size)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `D' = [D[i]^k : i=0..N/k)` — the first `N/k` entries raised to the `k`-th power, *not*
    /// an arbitrary representative subset. Taking anything else desynchronizes the verifier's
    /// extended-index mapping.
    pub fn fold(&self, k: usize) -> Self {
        let new_len = self.len() / k;
        let points = self.points[..new_len].iter().map(|&x| x.exp_u64(k as u64)).collect();
        Self {
            offset: self.offset.exp_u64(k as u64),
            generator: self.generator.exp_u64(k as u64),
            points,
        }
    }

    /// `D * shift`, pointwise. Used to build the omicron-shifted FRI domain for "next row"
    /// boundary-quotient commitments.
    pub fn shifted(&self, shift: F) -> Self {
        Self {
            offset: self.offset * shift,
            generator: self.generator,
            points: self.points.iter().map(|&x| x * shift).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small193::Small193Field as F;

    #[test]
    fn fold_matches_pointwise_power() {
        let domain = EvaluationDomain::<F>::new(F::from_canonical_u64(2), 16);
        let folded = domain.fold(2);
        assert_eq!(folded.len(), 8);
        for i in 0..folded.len() {
            assert_eq!(folded.points[i], domain.points[i] * domain.points[i]);
        }
    }

    #[test]
    fn fold_idempotence_class() {
        let domain = EvaluationDomain::<F>::new(F::from_canonical_u64(2), 16);
        let once_then_once = domain.fold(2).fold(2);
        let twice = domain.fold(4);
        assert_eq!(once_then_once.points, twice.points);
    }
}
