//! Bell number newtype.

use std::fmt;

use crate::error::ChimeError;

/// Number of bells in the clock.
pub const BELLS: usize = 10;

/// One of the ten bells, numbered 1 (highest) to 10 (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bell(u8);

impl Bell {
    /// Creates a bell from its number.
    ///
    /// # Errors
    ///
    /// Returns [`ChimeError::InvalidBell`] if `number` is not in 1..=10.
    pub fn new(number: u8) -> Result<Self, ChimeError> {
        if !(1..=BELLS as u8).contains(&number) {
            return Err(ChimeError::InvalidBell {
                bell: number,
                max: BELLS as u8,
            });
        }
        Ok(Self(number))
    }

    /// Wraps an identifier already known to be in 1..=10.
    pub(crate) fn from_identifier(id: u8) -> Self {
        debug_assert!((1..=BELLS as u8).contains(&id));
        Self(id)
    }

    /// Returns the bell number (1..=10).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterates over all bells in order, 1 through 10.
    pub fn all() -> impl Iterator<Item = Bell> {
        (1..=BELLS as u8).map(Self)
    }
}

impl TryFrom<u8> for Bell {
    type Error = ChimeError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl fmt::Display for Bell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
