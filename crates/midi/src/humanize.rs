//! Randomized note length and loudness.
//!
//! The chime core is deterministic; all randomness lives here and is drawn
//! from a generator supplied by the caller.

use std::time::Duration;

use rand::Rng;

use crate::error::MidiError;

/// Draws a humanized note duration.
///
/// 30 % of notes last 1000 ms, 30 % 1100 ms, 30 % 1200 ms and the remaining
/// 10 % 1300 ms.
pub fn note_duration(rng: &mut impl Rng) -> Duration {
    let r: f64 = rng.random();
    let millis = if r > 0.7 {
        1000
    } else if r > 0.4 {
        1100
    } else if r > 0.1 {
        1200
    } else {
        1300
    };
    Duration::from_millis(millis)
}

/// Draws a velocity uniformly from the inclusive range `min..=max`.
///
/// # Errors
///
/// Returns [`MidiError::InvalidVelocityRange`] if the range is empty or
/// leaves 1..=127.
pub fn note_velocity(min: u8, max: u8, rng: &mut impl Rng) -> Result<u8, MidiError> {
    if min == 0 || max > 127 || min > max {
        return Err(MidiError::InvalidVelocityRange { min, max });
    }
    Ok(rng.random_range(min..=max))
}
