//! Real-time playback: peals as a timed list of MIDI messages.
//!
//! Playback is split into a pure [`schedule`] and a [`MidiSink`] that sends
//! messages and waits. The sink owns the clock, so a recording sink replays
//! a schedule instantly.

use std::time::Duration;

use tracing::debug;

use crate::config::PealConfig;
use crate::error::MidiError;
use crate::peal::Peal;

const NOTE_ON: u8 = 0x90;
const NOTE_OFF: u8 = 0x80;

/// One step of real-time playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Send a three-byte channel message.
    Send([u8; 3]),
    /// Wait before the next cue.
    Wait(Duration),
}

/// Destination for real-time playback.
pub trait MidiSink {
    /// Sends one raw MIDI message.
    ///
    /// # Errors
    ///
    /// Returns [`MidiError`] if the message cannot be delivered.
    fn send(&mut self, message: &[u8]) -> Result<(), MidiError>;

    /// Blocks for `duration`.
    fn wait(&mut self, duration: Duration);
}

/// Builds a note-on message.
pub fn note_on(channel: u8, note: u8, velocity: u8) -> [u8; 3] {
    [NOTE_ON | (channel & 0x0F), note & 0x7F, velocity & 0x7F]
}

/// Builds a note-off message with release velocity 0.
pub fn note_off(channel: u8, note: u8) -> [u8; 3] {
    [NOTE_OFF | (channel & 0x0F), note & 0x7F, 0]
}

/// Lays `peals` out in playing order.
///
/// Every strike is a note-on, a wait of the strike's duration, and a
/// note-off. A peal's pause follows its last strike; zero pauses produce no
/// cue. The waits of each peal add up to [`Peal::length`].
///
/// # Errors
///
/// Returns the first error reported by [`PealConfig::validate`].
pub fn schedule(peals: &[Peal], config: &PealConfig) -> Result<Vec<Cue>, MidiError> {
    config.validate()?;
    let channel = config.channel();
    let mut cues = Vec::new();
    for peal in peals {
        for strike in peal.strikes() {
            cues.push(Cue::Send(note_on(channel, strike.note, strike.velocity)));
            cues.push(Cue::Wait(strike.duration));
            cues.push(Cue::Send(note_off(channel, strike.note)));
        }
        if !peal.pause().is_zero() {
            cues.push(Cue::Wait(peal.pause()));
        }
    }
    Ok(cues)
}

/// Plays `peals` through `sink` in real time.
///
/// # Errors
///
/// Returns a validation error from [`schedule`] before anything is sent, or
/// the first error reported by the sink.
pub fn play(
    peals: &[Peal],
    config: &PealConfig,
    sink: &mut impl MidiSink,
) -> Result<(), MidiError> {
    let cues = schedule(peals, config)?;
    let total: Duration = peals.iter().map(Peal::length).sum();
    debug!(
        n_peals = peals.len(),
        n_cues = cues.len(),
        total_ms = total.as_millis() as u64,
        "playing peals"
    );
    for cue in &cues {
        match cue {
            Cue::Send(message) => sink.send(message)?,
            Cue::Wait(duration) => sink.wait(*duration),
        }
    }
    Ok(())
}
