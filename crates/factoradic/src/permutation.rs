//! Insertion-built permutations from factorial-base digits.

use crate::digits::{check_bells, expand};
use crate::error::FactoradicError;

/// Identifier that stands for "no bell" in a permutation.
pub const SENTINEL: u8 = 0;

/// Builds a permutation of the identifiers `0..=bells` from factoradic digits.
///
/// The canonical identifier list `[bells, ..., 1, 0]` is walked from its
/// end, and each identifier is inserted into an initially empty working
/// list. Identifier `i >= 1` goes in at offset `digits[i - 1]`; the sentinel
/// uses the implicit position-0 digit, which is always 0. Offset 0 inserts
/// at the front, offset `k` after the first `k` elements, and an offset
/// equal to the current length appends. The working list is returned
/// reversed, so index 0 is the first identifier struck. The sentinel always
/// ends up at index 0.
///
/// # Errors
///
/// Returns [`FactoradicError::InvalidBellCount`] for an unsupported bell
/// count, [`FactoradicError::DigitCountMismatch`] if `digits.len() != bells`,
/// and [`FactoradicError::DigitOutOfRange`] if a digit at 1-indexed
/// position `i` is not below `i`.
///
/// # Examples
///
/// ```
/// use chimes_factoradic::build;
///
/// assert_eq!(build(&[0, 0, 0], 3).unwrap(), vec![0, 1, 2, 3]);
/// assert_eq!(build(&[0, 1, 0], 3).unwrap(), vec![0, 2, 1, 3]);
/// ```
pub fn build(digits: &[u8], bells: usize) -> Result<Vec<u8>, FactoradicError> {
    check_bells(bells)?;
    if digits.len() != bells {
        return Err(FactoradicError::DigitCountMismatch {
            expected: bells,
            got: digits.len(),
        });
    }
    if let Some((position, &digit)) = (1..)
        .zip(digits)
        .find(|&(position, &digit)| usize::from(digit) >= position)
    {
        return Err(FactoradicError::DigitOutOfRange { position, digit });
    }

    let canonical: Vec<u8> = (SENTINEL..=bells as u8).rev().collect();
    let mut working = Vec::with_capacity(canonical.len());
    for &id in canonical.iter().rev() {
        let offset = match id {
            SENTINEL => 0,
            _ => usize::from(digits[usize::from(id) - 1]),
        };
        // `digits[id - 1] < id == working.len()`, so the offset is in bounds.
        working.insert(offset, id);
    }
    working.reverse();
    Ok(working)
}

/// Returns the permutation for index `n`: [`expand`] followed by [`build`].
///
/// # Errors
///
/// Returns [`FactoradicError::InvalidBellCount`] for an unsupported bell
/// count.
pub fn nth_permutation(n: u64, bells: usize) -> Result<Vec<u8>, FactoradicError> {
    build(&expand(n, bells)?, bells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_digits_give_ascending_order() {
        let perm = build(&[0; 10], 10).unwrap();
        assert_eq!(perm, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn offset_equal_to_length_appends() {
        // Maximal digits: each identifier lands just before the sentinel.
        let perm = build(&[0, 1, 2, 3], 4).unwrap();
        assert_eq!(perm, vec![0, 4, 3, 2, 1]);
    }

    #[test]
    fn single_bell() {
        assert_eq!(build(&[0], 1).unwrap(), vec![0, 1]);
    }

    #[test]
    fn sentinel_always_first() {
        for n in 0..720 {
            let perm = nth_permutation(n, 6).unwrap();
            assert_eq!(perm[0], SENTINEL, "n = {n}");
        }
    }

    #[test]
    fn known_permutations() {
        assert_eq!(
            nth_permutation(1, 10).unwrap(),
            vec![0, 2, 1, 3, 4, 5, 6, 7, 8, 9, 10]
        );
        assert_eq!(
            nth_permutation(8971, 10).unwrap(),
            vec![0, 4, 7, 5, 2, 6, 1, 8, 3, 9, 10]
        );
    }

    #[test]
    fn rejects_wrong_digit_count() {
        assert_eq!(
            build(&[0; 9], 10).unwrap_err(),
            FactoradicError::DigitCountMismatch {
                expected: 10,
                got: 9,
            }
        );
    }

    #[test]
    fn rejects_digit_out_of_range() {
        assert_eq!(
            build(&[0, 1, 3, 0], 4).unwrap_err(),
            FactoradicError::DigitOutOfRange {
                position: 3,
                digit: 3,
            }
        );
    }

    #[test]
    fn rejects_nonzero_first_digit() {
        assert_eq!(
            build(&[1, 0], 2).unwrap_err(),
            FactoradicError::DigitOutOfRange {
                position: 1,
                digit: 1,
            }
        );
    }

    #[test]
    fn rejects_zero_bells() {
        assert!(matches!(
            build(&[], 0),
            Err(FactoradicError::InvalidBellCount { bells: 0, .. })
        ));
    }
}
