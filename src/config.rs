use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level chimes configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ChimesConfig {
    /// Seed for note humanization.
    #[serde(default)]
    pub seed: Option<u64>,

    /// MIDI rendering settings.
    #[serde(default)]
    pub midi: MidiToml,
}

impl ChimesConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MidiToml {
    #[serde(default)]
    pub channel: u8,
    #[serde(default = "default_ppqn")]
    pub ppqn: u16,
    #[serde(default = "default_bpm")]
    pub bpm: u32,
    #[serde(default = "default_peal_pause_ms")]
    pub peal_pause_ms: u64,
    #[serde(default = "default_velocity_min")]
    pub velocity_min: u8,
    #[serde(default = "default_velocity_max")]
    pub velocity_max: u8,
}

impl Default for MidiToml {
    fn default() -> Self {
        Self {
            channel: 0,
            ppqn: default_ppqn(),
            bpm: default_bpm(),
            peal_pause_ms: default_peal_pause_ms(),
            velocity_min: default_velocity_min(),
            velocity_max: default_velocity_max(),
        }
    }
}

fn default_ppqn() -> u16 {
    480
}
fn default_bpm() -> u32 {
    120
}
fn default_peal_pause_ms() -> u64 {
    3000
}
fn default_velocity_min() -> u8 {
    76
}
fn default_velocity_max() -> u8 {
    101
}
