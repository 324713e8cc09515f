//! # chimes-chime
//!
//! Daily chime sequences for the ten bells of the Long Now clock.
//!
//! Each day since 2000-01-01 gets its own ordering of the bells: the day
//! index is written in the factorial number system and decoded into a
//! permutation, so no ordering repeats for `10!` days (about 9935 years).
//! Everything here is pure and deterministic; timing, randomness and output
//! devices belong to the consumers of [`ChimeSequence`].
//!
//! ## Quick Start
//!
//! ```
//! use chimes_chime::chimes_for_range;
//!
//! let week = chimes_for_range(2024, 1, 1, 7).unwrap();
//! assert_eq!(week.len(), 7);
//! assert_eq!(week[0].to_string(), "[1, 7, 2, 4, 3, 6, 8, 5, 9, 10]");
//! assert!(week.iter().all(|day| day.len() == 10));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `bell` | Bell number newtype |
//! | `sequence` | One day's ordered bells |
//! | `range` | Dates and day indices to chime sequences |
//! | `error` | Error types |

mod bell;
mod error;
mod range;
mod sequence;

pub use bell::{BELLS, Bell};
pub use error::ChimeError;
pub use range::{chime_for_index, chimes_for_dates, chimes_for_range};
pub use sequence::ChimeSequence;
