//! Standard MIDI File rendering.

use std::path::Path;

use midly::num::u28;
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use tracing::debug;

use crate::config::PealConfig;
use crate::error::MidiError;
use crate::peal::Peal;

/// Largest value a variable-length delta can hold.
const MAX_DELTA: u32 = 0x0FFF_FFFF;

fn delta(ticks: u64) -> Result<u28, MidiError> {
    match u32::try_from(ticks) {
        Ok(t) if t <= MAX_DELTA => Ok(t.into()),
        _ => Err(MidiError::DeltaOverflow { ticks }),
    }
}

fn track(peals: &[Peal], config: &PealConfig) -> Result<Vec<TrackEvent<'static>>, MidiError> {
    let channel = config.channel().into();
    let mut events = vec![TrackEvent {
        delta: 0.into(),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(config.micros_per_quarter().into())),
    }];

    // Silence owed to the next event.
    let mut pending: u64 = 0;
    for peal in peals {
        for strike in peal.strikes() {
            events.push(TrackEvent {
                delta: delta(pending)?,
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn {
                        key: strike.note.into(),
                        vel: strike.velocity.into(),
                    },
                },
            });
            events.push(TrackEvent {
                delta: delta(config.ticks(strike.duration))?,
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key: strike.note.into(),
                        vel: 0.into(),
                    },
                },
            });
            pending = 0;
        }
        pending = pending.saturating_add(config.ticks(peal.pause()));
    }

    events.push(TrackEvent {
        delta: delta(pending)?,
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    Ok(events)
}

/// Renders `peals` as a single-track (format 0) Standard MIDI File.
///
/// Each strike becomes a note-on followed by a note-off after the strike's
/// duration; the next strike starts when the previous note is released.
/// Peal pauses become silence before the next event, and the final pause is
/// carried by the end-of-track event.
///
/// # Errors
///
/// Returns a validation error from [`PealConfig::validate`],
/// [`MidiError::DeltaOverflow`] if a pause is too long to encode, or
/// [`MidiError::Encode`] if serialization fails.
pub fn render_smf(peals: &[Peal], config: &PealConfig) -> Result<Vec<u8>, MidiError> {
    config.validate()?;
    let events = track(peals, config)?;
    let n_events = events.len();

    let header = Header::new(Format::SingleTrack, Timing::Metrical(config.ppqn().into()));
    let smf = Smf {
        header,
        tracks: vec![events],
    };
    let mut bytes = Vec::new();
    smf.write_std(&mut bytes).map_err(MidiError::Encode)?;
    debug!(
        n_peals = peals.len(),
        n_events,
        n_bytes = bytes.len(),
        "rendered MIDI file"
    );
    Ok(bytes)
}

/// Renders `peals` and writes the MIDI file to `path`.
///
/// # Errors
///
/// Returns any error from [`render_smf`], or [`MidiError::Write`] if the file
/// cannot be written.
pub fn write_smf(path: &Path, peals: &[Peal], config: &PealConfig) -> Result<(), MidiError> {
    let bytes = render_smf(peals, config)?;
    std::fs::write(path, &bytes).map_err(|source| MidiError::Write {
        path: path.to_path_buf(),
        source,
    })
}
