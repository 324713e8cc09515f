//! Resolves the sequence-source flags into labelled bell sequences.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use chimes_calendar::{ChimeDate, date_sequence};
use chimes_chime::{Bell, chimes_for_dates};
use chimes_midi::default_peals;

use crate::cli::SourceArgs;

/// One labelled sequence of bells.
#[derive(Debug)]
pub struct Entry {
    pub label: String,
    pub bells: Vec<Bell>,
}

impl Entry {
    /// Bell numbers in playing order.
    pub fn numbers(&self) -> Vec<u8> {
        self.bells.iter().map(|b| b.get()).collect()
    }
}

/// The sequences selected on the command line.
#[derive(Debug)]
pub struct Programme {
    pub entries: Vec<Entry>,
    /// Whether one extra pause should follow the last peal.
    pub trailing_rest: bool,
}

fn to_chime_date(date: NaiveDate) -> Result<ChimeDate> {
    // chrono months and days always fit in a u8.
    ChimeDate::new(date.year(), date.month() as u8, date.day() as u8)
        .with_context(|| format!("unsupported date: {date}"))
}

fn dated(start: ChimeDate, n_days: usize) -> Result<Programme> {
    let chimes = chimes_for_dates(start, n_days)
        .with_context(|| format!("failed to compute chimes from {start}"))?;
    let entries = date_sequence(start, n_days)
        .into_iter()
        .zip(chimes)
        .map(|(date, chime)| Entry {
            label: date.to_string(),
            bells: chime.bells().to_vec(),
        })
        .collect();
    Ok(Programme {
        entries,
        trailing_rest: false,
    })
}

/// Builds the programme for `args`, using `today` for `--today`.
pub fn resolve(args: &SourceArgs, today: NaiveDate) -> Result<Programme> {
    if let Some(date) = args.date {
        return dated(to_chime_date(date)?, 1);
    }

    if let Some(range) = &args.range {
        let [start, end] = range.as_slice() else {
            bail!("--range takes exactly two dates, got {}", range.len());
        };
        let (start, end) = (to_chime_date(*start)?, to_chime_date(*end)?);
        if end < start {
            bail!("end date {end} is before start date {start}");
        }
        let n_days = usize::try_from(end.day_index() - start.day_index() + 1)
            .context("date range is too long")?;
        debug!(%start, %end, n_days, "resolved date range");
        return dated(start, n_days);
    }

    if args.today {
        return dated(to_chime_date(today)?, 1);
    }

    if let Some(numbers) = &args.sequence {
        let bells = numbers
            .iter()
            .map(|&n| Bell::new(n))
            .collect::<Result<Vec<_>, _>>()
            .context("invalid custom sequence")?;
        return Ok(Programme {
            entries: vec![Entry {
                label: "custom".to_string(),
                bells,
            }],
            trailing_rest: false,
        });
    }

    let entries = default_peals()
        .into_iter()
        .enumerate()
        .map(|(i, bells)| Entry {
            label: format!("peal {}", i + 1),
            bells,
        })
        .collect();
    Ok(Programme {
        entries,
        trailing_rest: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_date() {
        let args = SourceArgs {
            date: Some(day(2024, 7, 24)),
            ..SourceArgs::default()
        };
        let programme = resolve(&args, day(2030, 1, 1)).unwrap();
        assert_eq!(programme.entries.len(), 1);
        assert_eq!(programme.entries[0].label, "2024-07-24");
        assert_eq!(
            programme.entries[0].numbers(),
            vec![4, 7, 5, 2, 6, 1, 8, 3, 9, 10]
        );
        assert!(!programme.trailing_rest);
    }

    #[test]
    fn inclusive_range_across_leap_day() {
        let args = SourceArgs {
            range: Some(vec![day(2024, 2, 28), day(2024, 3, 1)]),
            ..SourceArgs::default()
        };
        let programme = resolve(&args, day(2030, 1, 1)).unwrap();
        let labels: Vec<&str> = programme.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn reversed_range_rejected() {
        let args = SourceArgs {
            range: Some(vec![day(2024, 1, 7), day(2024, 1, 1)]),
            ..SourceArgs::default()
        };
        let err = resolve(&args, day(2030, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("before start date"));
    }

    #[test]
    fn today_uses_supplied_date() {
        let args = SourceArgs {
            today: true,
            ..SourceArgs::default()
        };
        let programme = resolve(&args, day(2000, 1, 2)).unwrap();
        assert_eq!(programme.entries[0].label, "2000-01-02");
        assert_eq!(
            programme.entries[0].numbers(),
            vec![2, 1, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn pre_epoch_date_rejected() {
        let args = SourceArgs {
            date: Some(day(1999, 12, 31)),
            ..SourceArgs::default()
        };
        let err = resolve(&args, day(2030, 1, 1)).unwrap_err();
        assert!(format!("{err:#}").contains("before the epoch year 2000"));
    }

    #[test]
    fn custom_sequence_allows_repeats() {
        let args = SourceArgs {
            sequence: Some(vec![1, 3, 3, 10]),
            ..SourceArgs::default()
        };
        let programme = resolve(&args, day(2030, 1, 1)).unwrap();
        assert_eq!(programme.entries[0].numbers(), vec![1, 3, 3, 10]);
    }

    #[test]
    fn custom_sequence_rejects_bad_bell() {
        let args = SourceArgs {
            sequence: Some(vec![1, 11]),
            ..SourceArgs::default()
        };
        let err = resolve(&args, day(2030, 1, 1)).unwrap_err();
        assert!(format!("{err:#}").contains("invalid bell: 11"));
    }

    #[test]
    fn default_programme() {
        let programme = resolve(&SourceArgs::default(), day(2030, 1, 1)).unwrap();
        assert_eq!(programme.entries.len(), 2);
        assert_eq!(programme.entries[0].label, "peal 1");
        assert_eq!(
            programme.entries[1].numbers(),
            vec![2, 1, 3, 4, 5, 6, 7, 8, 9, 10]
        );
        assert!(programme.trailing_rest);
    }
}
