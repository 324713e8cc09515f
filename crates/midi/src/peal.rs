//! Peals: chime sequences with humanized timing and loudness.

use std::time::Duration;

use chimes_chime::Bell;
use rand::Rng;

use crate::config::PealConfig;
use crate::error::MidiError;
use crate::humanize::{note_duration, note_velocity};
use crate::note::midi_note;

/// One struck bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// The bell struck.
    pub bell: Bell,
    /// MIDI note for the bell.
    pub note: u8,
    /// Note-on velocity.
    pub velocity: u8,
    /// Time until the note is released and the next bell is struck.
    pub duration: Duration,
}

/// A run of strikes followed by a pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Peal {
    strikes: Vec<Strike>,
    pause: Duration,
}

impl Peal {
    /// Humanizes `bells` into a peal, drawing duration and velocity for every
    /// strike from `rng`.
    ///
    /// Bells may repeat; the sequence is played as given.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by [`PealConfig::validate`].
    pub fn humanized(
        bells: &[Bell],
        config: &PealConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, MidiError> {
        config.validate()?;
        let (min, max) = config.velocity_range();
        let strikes = bells
            .iter()
            .map(|&bell| {
                Ok(Strike {
                    bell,
                    note: midi_note(bell),
                    velocity: note_velocity(min, max, rng)?,
                    duration: note_duration(rng),
                })
            })
            .collect::<Result<_, MidiError>>()?;
        Ok(Self {
            strikes,
            pause: config.peal_pause(),
        })
    }

    /// A silent peal that only waits for `pause`.
    pub fn rest(pause: Duration) -> Self {
        Self {
            strikes: Vec::new(),
            pause,
        }
    }

    /// Returns the strikes in order.
    pub fn strikes(&self) -> &[Strike] {
        &self.strikes
    }

    /// Returns the pause after the last strike.
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Returns the total length of the peal including its pause.
    pub fn length(&self) -> Duration {
        self.strikes.iter().map(|s| s.duration).sum::<Duration>() + self.pause
    }
}

/// The built-in demonstration peals: bells 1 to 10 in order, then the same
/// with the first two bells swapped.
pub fn default_peals() -> [Vec<Bell>; 2] {
    let rounds: Vec<Bell> = Bell::all().collect();
    let mut swapped = rounds.clone();
    swapped.swap(0, 1);
    [rounds, swapped]
}
