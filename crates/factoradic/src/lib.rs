//! Factorial-base numerals and the permutations they encode.
//!
//! An index `n` is written as `bells` factoradic digits, where the digit at
//! 1-indexed position `i` lies in `[0, i)`. The digits are then decoded into
//! an ordering of the identifiers `0..=bells` by successive positional
//! insertion. Every index in `[0, bells!)` maps to a distinct permutation.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐
//!  │    expand     │────▶│     build      │
//!  │  (n → digits) │     │ (digits → perm)│
//!  └──────────────┘     └────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chimes_factoradic::{build, expand, nth_permutation};
//!
//! let digits = expand(1, 3).unwrap();
//! assert_eq!(digits, vec![0, 1, 0]);
//! assert_eq!(build(&digits, 3).unwrap(), vec![0, 2, 1, 3]);
//! assert_eq!(nth_permutation(1, 3).unwrap(), vec![0, 2, 1, 3]);
//! ```

pub mod digits;
pub mod error;
pub mod permutation;

pub use digits::{MAX_BELLS, expand, factorial};
pub use error::FactoradicError;
pub use permutation::{SENTINEL, build, nth_permutation};
