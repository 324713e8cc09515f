//! Shared setup for the commands that humanize peals.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use chimes_midi::{Peal, PealConfig};

use crate::cli::{HumanizeArgs, SourceArgs};
use crate::config::ChimesConfig;
use crate::convert;
use crate::source::{self, Programme};

/// Humanized peals ready for rendering or playback.
#[derive(Debug)]
pub struct Prepared {
    pub config: PealConfig,
    pub programme: Programme,
    /// One peal per programme entry, followed by the trailing rest if the
    /// programme asks for one.
    pub peals: Vec<Peal>,
}

/// Load config, resolve the sequences and humanize them.
pub fn prepare(
    source: &SourceArgs,
    humanize: &HumanizeArgs,
    today: NaiveDate,
) -> Result<Prepared> {
    // 1. Load optional TOML config, then apply CLI overrides
    let mut config = match &humanize.config {
        Some(path) => ChimesConfig::load(path)?,
        None => ChimesConfig::default(),
    };
    if let Some(seed) = humanize.seed {
        config.seed = Some(seed);
    }
    if let Some(channel) = humanize.channel {
        config.midi.channel = channel;
    }
    let peal_cfg = convert::build_peal_config(&config.midi)?;

    // 2. Resolve the bell sequences
    let programme = source::resolve(source, today)?;
    info!(n_sequences = programme.entries.len(), "sequences resolved");

    // 3. Humanize with a seeded RNG
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let mut peals = programme
        .entries
        .iter()
        .map(|entry| {
            debug!(label = %entry.label, n_bells = entry.bells.len(), "humanizing peal");
            Peal::humanized(&entry.bells, &peal_cfg, &mut rng)
                .with_context(|| format!("failed to humanize {}", entry.label))
        })
        .collect::<Result<Vec<_>>>()?;
    if programme.trailing_rest {
        peals.push(Peal::rest(peal_cfg.peal_pause()));
    }

    let total: Duration = peals.iter().map(Peal::length).sum();
    info!(
        n_peals = peals.len(),
        total_secs = total.as_secs_f64(),
        "peals humanized"
    );

    Ok(Prepared {
        config: peal_cfg,
        programme,
        peals,
    })
}
