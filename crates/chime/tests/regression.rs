//! Pinned chime sequences for known dates.

use chimes_chime::{ChimeError, chimes_for_range};

fn chime(year: i32, month: u8, day: u8) -> Vec<u8> {
    chimes_for_range(year, month, day, 1).unwrap()[0].numbers()
}

#[test]
fn baseline_dates() {
    let cases: &[((i32, u8, u8), [u8; 10])] = &[
        ((2000, 1, 1), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]),
        ((2000, 1, 2), [2, 1, 3, 4, 5, 6, 7, 8, 9, 10]),
        ((2000, 1, 3), [1, 3, 2, 4, 5, 6, 7, 8, 9, 10]),
        ((2000, 12, 31), [3, 2, 6, 1, 4, 5, 7, 8, 9, 10]),
        ((2001, 1, 1), [1, 2, 6, 4, 3, 5, 7, 8, 9, 10]),
        ((2024, 1, 1), [1, 7, 2, 4, 3, 6, 8, 5, 9, 10]),
        ((2024, 7, 24), [4, 7, 5, 2, 6, 1, 8, 3, 9, 10]),
        ((2026, 10, 17), [7, 4, 1, 6, 5, 2, 8, 3, 9, 10]),
        ((2100, 3, 1), [8, 5, 6, 1, 3, 4, 7, 2, 9, 10]),
    ];
    for &((year, month, day), expected) in cases {
        assert_eq!(
            chime(year, month, day),
            expected.to_vec(),
            "chime mismatch for {year}-{month:02}-{day:02}"
        );
    }
}

#[test]
fn baseline_week_range() {
    let chimes = chimes_for_range(2024, 1, 1, 3).unwrap();
    let numbers: Vec<Vec<u8>> = chimes.iter().map(|c| c.numbers()).collect();
    assert_eq!(
        numbers,
        vec![
            vec![1, 7, 2, 4, 3, 6, 8, 5, 9, 10],
            vec![2, 7, 1, 4, 3, 6, 8, 5, 9, 10],
            vec![1, 7, 3, 4, 2, 6, 8, 5, 9, 10],
        ]
    );
}

#[test]
fn repeated_calls_are_identical() {
    for _ in 0..5 {
        assert_eq!(
            chimes_for_range(2024, 7, 24, 1).unwrap(),
            chimes_for_range(2024, 7, 24, 1).unwrap()
        );
    }
}

#[test]
fn rejections() {
    assert!(matches!(
        chimes_for_range(1999, 1, 1, 1),
        Err(ChimeError::InvalidDate(_))
    ));
    assert!(matches!(
        chimes_for_range(2024, 2, 30, 1),
        Err(ChimeError::InvalidDate(_))
    ));
    assert!(matches!(
        chimes_for_range(2024, 13, 1, 1),
        Err(ChimeError::InvalidDate(_))
    ));
    assert_eq!(
        chimes_for_range(2024, 1, 1, 0).unwrap_err(),
        ChimeError::EmptyRange
    );
}
