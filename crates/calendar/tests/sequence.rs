use chimes_calendar::{ChimeDate, date_sequence};

#[test]
fn leap_year_month_boundaries() {
    let start = ChimeDate::new(2024, 1, 1).unwrap();
    let dates = date_sequence(start, 366);
    assert_eq!(dates.len(), 366);

    // Index 30: Jan 31
    assert_eq!(dates[30], ChimeDate::new(2024, 1, 31).unwrap());
    // Index 59: Feb 29
    assert_eq!(dates[59], ChimeDate::new(2024, 2, 29).unwrap());
    // Index 60: Mar 1
    assert_eq!(dates[60], ChimeDate::new(2024, 3, 1).unwrap());
    // Index 365: Dec 31
    assert_eq!(dates[365], ChimeDate::new(2024, 12, 31).unwrap());
}

#[test]
fn common_year_month_boundaries() {
    let start = ChimeDate::new(2023, 1, 1).unwrap();
    let dates = date_sequence(start, 366);

    // Index 58: Feb 28, Index 59: Mar 1
    assert_eq!(dates[58], ChimeDate::new(2023, 2, 28).unwrap());
    assert_eq!(dates[59], ChimeDate::new(2023, 3, 1).unwrap());
    // Index 365: Jan 1 of the next year
    assert_eq!(dates[365], ChimeDate::new(2024, 1, 1).unwrap());
}

#[test]
fn sequence_is_strictly_increasing() {
    let start = ChimeDate::new(2099, 11, 1).unwrap();
    let dates = date_sequence(start, 200);
    assert!(dates.windows(2).all(|w| w[0] < w[1]));
}
