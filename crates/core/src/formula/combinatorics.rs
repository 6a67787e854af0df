/// Natural logarithm of the binomial coefficient `C(n, k)`.
///
/// Computed as a running sum of `ln((n − k + j) / j)` over the smaller of `k`
/// and `n − k`, so it never forms a factorial and stays finite for any `u32`
/// arguments. Returns negative infinity when `k > n`, where `C(n, k) = 0`.
#[must_use]
pub fn ln_choose(n: u32, k: u32) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    let base = n - k;
    (1..=k)
        .map(|j| (f64::from(base + j) / f64::from(j)).ln())
        .sum()
}

/// The binomial coefficient `C(n, k)` as an `f64`.
///
/// Built incrementally as `Π (n − k + j) / j`, which keeps every partial
/// product an integer and therefore exact until it exceeds 2^53.
/// Returns `0.0` when `k > n` and overflows to infinity for very large results;
/// use [`ln_choose`] when that matters.
#[must_use]
pub fn choose(n: u32, k: u32) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let base = n - k;
    (1..=k).fold(1.0, |acc, j| acc * f64::from(base + j) / f64::from(j))
}
