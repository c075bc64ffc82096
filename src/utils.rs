use crate::error::Error;

/// Integer square root: the largest k with k * k <= n.
pub fn isqrt(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }

    // float guess refined by integer Newton steps, so the result is exact
    // even where f64 cannot represent n
    let mut r = (n as f64).sqrt() as u64;
    if r == 0 {
        r = 1;
    }

    loop {
        let r_new = (r + n / r) / 2;
        // a +1 step means the iteration entered a two-cycle around the root
        if r == r_new || r == r_new - 1 {
            return r;
        }
        r = r_new;
    }
}

/// Returns true iff `n` is a perfect square. `n` must be positive.
pub fn is_square(n: u64) -> Result<bool, Error> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "n must be a positive integer".to_string(),
        ));
    }

    let r = isqrt(n);
    Ok(r * r == n)
}
