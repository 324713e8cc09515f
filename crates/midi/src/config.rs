//! Configuration for peal humanization and MIDI rendering.

use std::time::Duration;

use crate::error::MidiError;

/// Configuration for building and rendering peals.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use chimes_midi::PealConfig;
///
/// let config = PealConfig::new()
///     .with_channel(2)
///     .with_peal_pause(Duration::from_secs(5));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PealConfig {
    channel: u8,
    ppqn: u16,
    bpm: u32,
    peal_pause: Duration,
    velocity_min: u8,
    velocity_max: u8,
}

impl PealConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: channel 0, 480 PPQN at 120 BPM (960 ticks per second),
    /// 3 s pause after each peal, velocities 76..=101 (60-80 % of full
    /// scale).
    pub fn new() -> Self {
        Self {
            channel: 0,
            ppqn: 480,
            bpm: 120,
            peal_pause: Duration::from_secs(3),
            velocity_min: 76,
            velocity_max: 101,
        }
    }

    /// Sets the MIDI channel (0..=15).
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Sets the pulses per quarter note.
    pub fn with_ppqn(mut self, ppqn: u16) -> Self {
        self.ppqn = ppqn;
        self
    }

    /// Sets the tempo in beats per minute.
    pub fn with_bpm(mut self, bpm: u32) -> Self {
        self.bpm = bpm;
        self
    }

    /// Sets the silence that follows each peal.
    pub fn with_peal_pause(mut self, pause: Duration) -> Self {
        self.peal_pause = pause;
        self
    }

    /// Sets the inclusive range velocities are drawn from.
    pub fn with_velocity_range(mut self, min: u8, max: u8) -> Self {
        self.velocity_min = min;
        self.velocity_max = max;
        self
    }

    // --- Accessors ---

    /// Returns the MIDI channel.
    pub fn channel(&self) -> u8 {
        self.channel
    }

    /// Returns the pulses per quarter note.
    pub fn ppqn(&self) -> u16 {
        self.ppqn
    }

    /// Returns the tempo in beats per minute.
    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Returns the pause after each peal.
    pub fn peal_pause(&self) -> Duration {
        self.peal_pause
    }

    /// Returns the inclusive velocity range as `(min, max)`.
    pub fn velocity_range(&self) -> (u8, u8) {
        (self.velocity_min, self.velocity_max)
    }

    /// Returns the tempo as microseconds per quarter note.
    pub fn micros_per_quarter(&self) -> u32 {
        60_000_000 / self.bpm.max(1)
    }

    /// Converts a wall-clock duration into MIDI ticks at this tempo.
    pub fn ticks(&self, duration: Duration) -> u64 {
        let ticks = duration.as_millis() * u128::from(self.ppqn) * u128::from(self.bpm) / 60_000;
        u64::try_from(ticks).unwrap_or(u64::MAX)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MidiError::InvalidChannel`], [`MidiError::InvalidPpqn`],
    /// [`MidiError::InvalidTempo`] or [`MidiError::InvalidVelocityRange`]
    /// for the first parameter that cannot be encoded.
    pub fn validate(&self) -> Result<(), MidiError> {
        if self.channel > 15 {
            return Err(MidiError::InvalidChannel {
                channel: self.channel,
            });
        }
        if !(1..=0x7FFF).contains(&self.ppqn) {
            return Err(MidiError::InvalidPpqn { ppqn: self.ppqn });
        }
        // Set-tempo stores microseconds per quarter note in 24 bits.
        if !(4..=60_000_000).contains(&self.bpm) {
            return Err(MidiError::InvalidTempo { bpm: self.bpm });
        }
        if self.velocity_min == 0 || self.velocity_max > 127 || self.velocity_min > self.velocity_max
        {
            return Err(MidiError::InvalidVelocityRange {
                min: self.velocity_min,
                max: self.velocity_max,
            });
        }
        Ok(())
    }
}

impl Default for PealConfig {
    fn default() -> Self {
        Self::new()
    }
}
