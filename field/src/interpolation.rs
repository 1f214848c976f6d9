use crate::polynomial::Polynomial;
use crate::types::Field;

/// Builds the unique degree-`< n` polynomial through `points`, by summing scaled Lagrange basis
/// polynomials. Unlike plonky2's FFT-based `interpolant`, this works for an arbitrary point set,
/// not just a two-adic subgroup — needed since FRI/STARK interpolate through query-derived
/// point sets that are not roots of unity.
pub fn lagrange_interpolate<F: Field>(points: &[(F, F)]) -> Polynomial<F> {
    let n = points.len();
    let mut result = Polynomial::zero();
    for i in 0..n {
        let (xi, yi) = points[i];
        if yi.is_zero() {
            continue;
        }
        let other_xs: Vec<F> = (0..n).filter(|&j| j != i).map(|j| points[j].0).collect();
        let numerator = Polynomial::from_roots(&other_xs);
        let denom: F = other_xs.iter().map(|&xj| xi - xj).product();
        let basis = &numerator * (yi * denom.inverse());
        result = &result + &basis;
    }
    result
}

/// Barycentric weights for `points`, for use with [`interpolate_at`].
pub fn barycentric_weights<F: Field>(points: &[(F, F)]) -> Vec<F> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let product: F = (0..n)
                .filter(|&j| j != i)
                .map(|j| points[i].0 - points[j].0)
                .product();
            product.inverse()
        })
        .collect()
}

/// Evaluates the interpolant of `points` at `x` directly, without building its coefficient
/// vector. Cheaper than [`lagrange_interpolate`] followed by `eval` when only a handful of
/// evaluation points are needed, as in the FRI verifier's per-query consistency check.
pub fn interpolate_at<F: Field>(points: &[(F, F)], x: F, weights: &[F]) -> F {
    for &(xi, yi) in points {
        if xi == x {
            return yi;
        }
    }
    let l_x: F = points.iter().map(|&(xi, _)| x - xi).product();
    let sum: F = (0..points.len())
        .map(|i| {
            let (xi, yi) = points[i];
            weights[i] * yi * (x - xi).inverse()
        })
        .sum();
    l_x * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::small193::Small193Field as F;

    #[test]
    fn interpolant_matches_source_points() {
        let points = [
            (F::from_canonical_u64(1), F::from_canonical_u64(4)),
            (F::from_canonical_u64(2), F::from_canonical_u64(9)),
            (F::from_canonical_u64(5), F::from_canonical_u64(25)),
        ];
        let poly = lagrange_interpolate(&points);
        for &(x, y) in &points {
            assert_eq!(poly.eval(x), y);
        }
    }

    #[test]
    fn interpolate_at_matches_coefficient_form() {
        let points = [
            (F::from_canonical_u64(3), F::from_canonical_u64(11)),
            (F::from_canonical_u64(8), F::from_canonical_u64(40)),
            (F::from_canonical_u64(12), F::from_canonical_u64(2)),
        ];
        let poly = lagrange_interpolate(&points);
        let weights = barycentric_weights(&points);
        let x = F::from_canonical_u64(50);
        assert_eq!(poly.eval(x), interpolate_at(&points, x, &weights));
    }
}
