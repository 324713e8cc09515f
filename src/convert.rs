//! Pure conversion functions: TOML config structs -> crate API config types.

use std::time::Duration;

use anyhow::{Context, Result};
use chimes_midi::PealConfig;

use crate::config::MidiToml;

/// Builds a validated [`PealConfig`] from the `[midi]` TOML section.
pub fn build_peal_config(midi: &MidiToml) -> Result<PealConfig> {
    let config = PealConfig::new()
        .with_channel(midi.channel)
        .with_ppqn(midi.ppqn)
        .with_bpm(midi.bpm)
        .with_peal_pause(Duration::from_millis(midi.peal_pause_ms))
        .with_velocity_range(midi.velocity_min, midi.velocity_max);
    config.validate().context("invalid [midi] configuration")?;
    Ok(config)
}
