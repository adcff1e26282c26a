#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Index of the smallest value in `row`. Ties go to the lowest index.
///
/// `row` must be non-empty.
#[inline]
pub(crate) fn argmin(row: &[f32]) -> usize {
    let mut best = 0;
    let mut best_val = f32::INFINITY;
    for (j, &v) in row.iter().enumerate() {
        // Strict `<` keeps the first-encountered minimum.
        if v < best_val {
            best_val = v;
            best = j;
        }
    }
    best
}
