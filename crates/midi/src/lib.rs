//! MIDI rendering for daily chime sequences.
//!
//! Turns ordered bells into peals (one MIDI note per bell with humanized
//! duration and velocity), then either serializes peals as a Standard MIDI
//! File or plays them in real time through a [`MidiSink`]. With the `port`
//! feature (on by default) [`PortSink`] drives a system MIDI output port.
//! Randomness is always drawn from a generator owned by the caller, so a
//! seeded generator reproduces the same file.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ ChimeSequence │────▶│ Peal::humanized│──┬─▶│    render_smf    │
//!  │   (bells)     │     │ (note/vel/dur) │  │  │  (format 0 SMF)  │
//!  └──────────────┘     └────────────────┘  │  └──────────────────┘
//!                                           │  ┌──────────────────┐
//!                                           └─▶│ schedule + play  │
//!                                              │  (MidiSink)      │
//!                                              └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use chimes_chime::chimes_for_range;
//! use chimes_midi::{Peal, PealConfig, render_smf};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = PealConfig::new();
//! let mut rng = StdRng::seed_from_u64(0);
//! let peals: Vec<Peal> = chimes_for_range(2024, 7, 24, 1)
//!     .unwrap()
//!     .iter()
//!     .map(|day| Peal::humanized(day.bells(), &config, &mut rng))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! let bytes = render_smf(&peals, &config).unwrap();
//! assert_eq!(&bytes[..4], b"MThd");
//! ```

pub mod config;
pub mod error;
pub mod humanize;
pub mod note;
pub mod peal;
pub mod play;
#[cfg(feature = "port")]
pub mod port;
pub mod smf;

pub use config::PealConfig;
pub use error::MidiError;
pub use humanize::{note_duration, note_velocity};
pub use note::midi_note;
pub use peal::{Peal, Strike, default_peals};
pub use play::{Cue, MidiSink, play, schedule};
#[cfg(feature = "port")]
pub use port::{PortSink, output_ports};
pub use smf::{render_smf, write_smf};
