//! Bucket statistics for uniformity tests.

/// Counts how many of `indices` fall into each of `buckets` buckets.
///
/// # Panics
///
/// Panics if an index is not below `buckets`.
pub fn bucket_counts(indices: impl IntoIterator<Item = usize>, buckets: usize) -> Vec<usize> {
    let mut counts = vec![0; buckets];
    for index in indices {
        counts[index] += 1;
    }
    counts
}

/// Standard deviation of bucket counts around the expected count `expected`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn bucket_std_dev(counts: &[usize], expected: f64) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&count| {
            let delta = count as f64 - expected;
            delta * delta
        })
        .sum();
    (sum_sq / counts.len() as f64).sqrt()
}
