//! Error types for the chimes-midi crate.

use std::path::PathBuf;

/// Error type for all fallible operations in the chimes-midi crate.
#[derive(Debug, thiserror::Error)]
pub enum MidiError {
    /// Returned when the MIDI channel is outside 0..=15.
    #[error("invalid MIDI channel: {channel} (must be 0..=15)")]
    InvalidChannel {
        /// The channel that was provided.
        channel: u8,
    },

    /// Returned when the pulses-per-quarter-note value cannot be encoded.
    #[error("invalid PPQN: {ppqn} (must be 1..=32767)")]
    InvalidPpqn {
        /// The PPQN that was provided.
        ppqn: u16,
    },

    /// Returned when the tempo cannot be encoded as a set-tempo event.
    #[error("invalid tempo: {bpm} BPM (must be 4..=60000000)")]
    InvalidTempo {
        /// The tempo that was provided.
        bpm: u32,
    },

    /// Returned when the velocity range is empty or outside 1..=127.
    #[error("invalid velocity range: {min}..={max} (must be within 1..=127, min <= max)")]
    InvalidVelocityRange {
        /// Lower bound.
        min: u8,
        /// Upper bound.
        max: u8,
    },

    /// Returned when an event time does not fit in a MIDI delta.
    #[error("event delta of {ticks} ticks exceeds the MIDI maximum")]
    DeltaOverflow {
        /// The delta that was computed.
        ticks: u64,
    },

    /// Returned when encoding the Standard MIDI File fails.
    #[error("failed to encode MIDI file")]
    Encode(#[source] std::io::Error),

    /// Returned when a real-time MIDI message cannot be delivered.
    #[error("failed to send MIDI message")]
    Playback(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Returned when the MIDI backend cannot be initialised.
    #[error("failed to initialise MIDI output")]
    PortInit(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Returned when a port's name cannot be read.
    #[error("failed to query MIDI output port")]
    PortInfo(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Returned when the requested port number does not exist.
    #[error("MIDI output port {index} not found ({available} available)")]
    PortNotFound {
        /// The port number that was requested.
        index: usize,
        /// Number of output ports present.
        available: usize,
    },

    /// Returned when connecting to an output port fails.
    #[error("failed to open MIDI output port {name}: {reason}")]
    PortConnect {
        /// Name of the port.
        name: String,
        /// Backend error message.
        reason: String,
    },

    /// Returned when writing the MIDI file to disk fails.
    #[error("failed to write MIDI file: {}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
