//! Factorial function and factorial-base digit expansion.

use crate::error::FactoradicError;

/// Largest supported bell count.
///
/// `20!` is the largest factorial that fits in a `u64`, and identifiers
/// `0..=20` fit in a `u8`.
pub const MAX_BELLS: usize = 20;

pub(crate) fn check_bells(bells: usize) -> Result<(), FactoradicError> {
    if !(1..=MAX_BELLS).contains(&bells) {
        return Err(FactoradicError::InvalidBellCount {
            bells,
            max: MAX_BELLS,
        });
    }
    Ok(())
}

/// Computes `x!`, returning `None` if the result overflows a `u64`.
///
/// Both `0!` and `1!` are 1.
///
/// # Examples
///
/// ```
/// use chimes_factoradic::factorial;
///
/// assert_eq!(factorial(0), Some(1));
/// assert_eq!(factorial(10), Some(3_628_800));
/// assert_eq!(factorial(21), None);
/// ```
pub fn factorial(x: u64) -> Option<u64> {
    (2..=x).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Expands `n` into `bells` factorial-base digits.
///
/// The digit at 1-indexed position `i` is `floor(n / (i - 1)!) mod i`, so it
/// always lies in `[0, i)`. Only integer arithmetic is used. Values of `n`
/// at or above `bells!` wrap around: the digits encode `n mod bells!`.
///
/// # Errors
///
/// Returns [`FactoradicError::InvalidBellCount`] if `bells` is zero or
/// larger than [`MAX_BELLS`].
///
/// # Examples
///
/// ```
/// use chimes_factoradic::expand;
///
/// assert_eq!(expand(0, 4).unwrap(), vec![0, 0, 0, 0]);
/// assert_eq!(expand(23, 4).unwrap(), vec![0, 1, 2, 3]);
/// ```
pub fn expand(n: u64, bells: usize) -> Result<Vec<u8>, FactoradicError> {
    check_bells(bells)?;
    let digits = (1..=bells as u64)
        .map(|i| {
            // A divisor past u64::MAX leaves a zero digit.
            factorial(i - 1).map_or(0, |f| ((n / f) % i) as u8)
        })
        .collect();
    Ok(digits)
}
