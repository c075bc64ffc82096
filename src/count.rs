use rayon::prelude::*;

use crate::error::Error;
use crate::period::continued_fraction_period;
use crate::utils::is_square;

/// Counts the non-square n in [2, `bound`] whose sqrt(n) has an odd-period
/// continued fraction.
///
/// Each candidate is independent, so the range is scanned in parallel and the
/// matches are reduced with a plain count.
pub fn count_odd_period_sqrt_continued_fractions(bound: u64) -> Result<u64, Error> {
    if bound == 0 {
        return Err(Error::InvalidArgument(
            "bound must be a positive integer".to_string(),
        ));
    }

    let count = (2..=bound)
        .into_par_iter()
        .filter(|&n| {
            is_square(n) == Ok(false)
                && continued_fraction_period(n).map_or(false, |p| p % 2 == 1)
        })
        .count();

    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_to_13() {
        // sqrt(2), sqrt(3), sqrt(7), sqrt(13) are the odd-period roots
        assert_eq!(count_odd_period_sqrt_continued_fractions(13), Ok(4));
    }

    #[test]
    fn counts_up_to_10000() {
        assert_eq!(count_odd_period_sqrt_continued_fractions(10000), Ok(1322));
    }

    #[test]
    fn smallest_bounds() {
        // [2, 1] is empty; sqrt(2) has period 1
        assert_eq!(count_odd_period_sqrt_continued_fractions(1), Ok(0));
        assert_eq!(count_odd_period_sqrt_continued_fractions(2), Ok(1));
    }

    #[test]
    fn rejects_zero() {
        assert!(matches!(
            count_odd_period_sqrt_continued_fractions(0),
            Err(Error::InvalidArgument(_))
        ));
    }
}
