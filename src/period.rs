use std::collections::HashMap;

use crate::error::Error;
use crate::utils::isqrt;

/// a_i = floor((sqrt(n) - r) / q), computed from floor(sqrt(n)) alone.
/// Exact for irrational sqrt(n): with q > 0 the fractional part of sqrt(n)
/// can never push the quotient past the next integer.
fn partial_quotient(sqrt_floor: i64, r: i64, q: i64) -> i64 {
    (sqrt_floor - r).div_euclid(q)
}

/// Period of the continued-fraction expansion of sqrt(n), i.e. the length of
/// the repeating block of partial quotients.
///
/// Walks the state recurrence on (r, q), where the current tail of the
/// expansion is (sqrt(n) - r) / q:
///     a = floor((sqrt(n) - r) / q)
///     r' = -(r + a*q)
///     q' = (n - (r + a*q)^2) / q
/// and returns once a state repeats. The states range over finitely many
/// conjugate surds of sqrt(n), so a repeat is reached within O(sqrt(n)) steps.
///
/// `n` must be positive and not a perfect square.
pub fn continued_fraction_period(n: u64) -> Result<u32, Error> {
    if n == 0 {
        return Err(Error::InvalidArgument(
            "n must be a positive integer".to_string(),
        ));
    }
    let s = isqrt(n);
    if s * s == n {
        return Err(Error::InvalidArgument(format!(
            "{} is a perfect square, sqrt({}) has no period",
            n, n
        )));
    }

    let n = n as i64;
    let s = s as i64;

    let mut i = 0u32;
    let (mut r, mut q) = (0i64, 1i64);
    let mut seen = HashMap::new();
    seen.insert((r, q), i);

    loop {
        i += 1;
        let a = partial_quotient(s, r, q);
        let t = r + a * q;
        // (n - t^2) / q is exact by construction of the recurrence
        (r, q) = (-t, (n - t * t) / q);

        if let Some(&j) = seen.get(&(r, q)) {
            return Ok(i - j);
        }
        seen.insert((r, q), i);
    }
}
