//! # chimes-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, anchored at
//! 2000-01-01 (day index 0). Years before 2000 are rejected.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"day_index()"| B["u64 day index"]
//!     B -->|"ChimeDate::from_day_index()"| C["ChimeDate"]
//!     A -->|"ChimeDate::new()"| C
//!     C -->|".next()"| C
//!     C -->|"date_sequence()"| D["Vec of ChimeDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chimes_calendar::{ChimeDate, date_sequence, day_index, days_in_year};
//!
//! assert_eq!(day_index(2000, 1, 1).unwrap(), 0);
//! assert_eq!(days_in_year(2100).unwrap(), 365);
//!
//! let start = ChimeDate::new(2024, 2, 28).unwrap();
//! let dates = date_sequence(start, 3); // Feb 28, Feb 29, Mar 1
//! assert_eq!(dates[2].day_index(), start.day_index() + 2);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap-year rule and month-length tables |
//! | `index` | Date to day-index conversion and its inverse |
//! | `date` | Validated date value type |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod gregorian;
mod index;
mod sequence;

pub use date::ChimeDate;
pub use error::CalendarError;
pub use gregorian::{EPOCH_YEAR, days_in_month, days_in_year, is_leap_year};
pub use index::day_index;
pub use sequence::date_sequence;
