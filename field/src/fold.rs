use crate::polynomial::Polynomial;
use crate::types::Field;

/// Folds `g` under folding randomness `r` and arity `k`. Requires `deg(g)+1` to be a multiple of
/// `k`. Reshapes the ascending coefficient list into an `(m x k)` matrix and right-multiplies by
/// `[1, r, r^2, ..., r^{k-1}]^T`; `g(x) = sum_j g_j(x^k) * x^j` where `g_j` are the `k` "slices",
/// so the resulting `m`-vector is the coefficient list of `g' = sum_j r^j * g_j`.
pub fn fold_polynomial<F: Field>(g: &Polynomial<F>, r: F, k: usize) -> Polynomial<F> {
    let len = g.len();
    assert_eq!(len % k, 0, "coefficient count must be a multiple of the folding factor");
    let m = len / k;
    let powers: Vec<F> = r.powers().take(k).collect();
    let mut folded = vec![F::ZERO; m];
    for i in 0..m {
        for j in 0..k {
            folded[i] += g.coeffs[i * k + j] * powers[j];
        }
    }
    Polynomial::new(folded)
}

/// Reshapes `v` (length `N`) into an `(N/k x k)` matrix, `stacked[i][j] = v[i + j*(N/k)]`: row
/// `i` holds the `k` siblings whose `k`-th powers all land on folded-domain index `i`.
pub fn stack<F: Field>(v: &[F], k: usize) -> Vec<Vec<F>> {
    let n = v.len();
    assert_eq!(n % k, 0, "evaluation count must be a multiple of the folding factor");
    let rows = n / k;
    (0..rows)
        .map(|i| (0..k).map(|j| v[i + j * rows]).collect())
        .collect()
}

/// For each `i` in `indices`, the `k` original-domain indices whose `k`-th powers fold to the
/// same folded-domain point `i`.
pub fn extend_indices(indices: &[usize], n: usize, k: usize) -> Vec<usize> {
    let rows = n / k;
    indices
        .iter()
        .flat_map(|&i| (0..k).map(move |j| i + j * rows))
        .collect()
}

/// `sort(dedup(indices mod folded_len))`.
pub fn fold_indices(indices: &[usize], folded_len: usize) -> Vec<usize> {
    let mut folded: Vec<usize> = indices.iter().map(|&i| i % folded_len).collect();
    folded.sort_unstable();
    folded.dedup();
    folded
}

/// For every `i` in `indices` (paired with its folded value in `values`), emits the triple
/// `(i mod folded_len, i / folded_len, value)`, sorted and deduplicated on the first
/// component (keeping the first occurrence), split into parallel arrays. The second component
/// tells the verifier which column of the next round's stacked row must equal the folded value.
pub fn fold_sort_generate<F: Field>(
    indices: &[usize],
    folded_len: usize,
    values: &[F],
) -> (Vec<usize>, Vec<usize>, Vec<F>) {
    assert_eq!(indices.len(), values.len());
    let mut triples: Vec<(usize, usize, F)> = indices
        .iter()
        .zip(values.iter())
        .map(|(&i, &v)| (i % folded_len, i / folded_len, v))
        .collect();
    triples.sort_by_key(|&(next_index, _, _)| next_index);
    triples.dedup_by_key(|&mut (next_index, _, _)| next_index);

    let mut next_indices = Vec::with_capacity(triples.len());
    let mut check_indices = Vec::with_capacity(triples.len());
    let mut folded_values = Vec::with_capacity(triples.len());
    for (next_index, check_index, value) in triples {
        next_indices.push(next_index);
        check_indices.push(check_index);
        folded_values.push(value);
    }
    (next_indices, check_indices, folded_values)
}

/// Builds the non-binding degree-correction polynomial `c(X) = sum_{i<gap} r^i X^i`, where
/// `gap = target_n - (deg(g)+1)`, and returns `(g*c, c)`. Used when `g`'s coefficient count is
/// below the committed domain's expected size; the verifier multiplies its interpolated values
/// by `c(x)` before comparing.
pub fn expand_ext<F: Field>(g: &Polynomial<F>, r: F, target_n: usize) -> (Polynomial<F>, Polynomial<F>) {
    let g = g.trimmed();
    let c_len = target_n + 1 - g.degree_plus_one();
    let c = Polynomial::new(r.powers().take(c_len).collect());
    (&g * &c, c)
}
