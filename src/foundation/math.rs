/// `C(n, k)` computed multiplicatively; `None` on overflow.
pub(crate) fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = acc.checked_mul(u128::from(n - i))? / u128::from(i + 1);
    }
    u64::try_from(acc).ok()
}

/// Integer square root when `v` is a perfect square.
pub(crate) fn exact_isqrt(v: usize) -> Option<usize> {
    let mut r = (v as f64).sqrt() as usize;
    // Float sqrt can be off by one for large inputs.
    while r.checked_mul(r).is_some_and(|sq| sq > v) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= v) {
        r += 1;
    }
    (r * r == v).then_some(r)
}
