//! Render command: write bell sequences to a Standard MIDI File.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chimes_midi::write_smf;

use crate::cli::RenderArgs;
use crate::prepare::prepare;

/// Run the rendering pipeline.
pub fn run(args: RenderArgs) -> Result<()> {
    let _cmd = info_span!("render").entered();

    let today = chrono::Local::now().date_naive();
    let prepared = prepare(&args.source, &args.humanize, today)?;

    info!(path = %args.output.display(), "writing MIDI file");
    write_smf(&args.output, &prepared.peals, &prepared.config)
        .with_context(|| format!("failed to render {}", args.output.display()))?;
    info!(n_peals = prepared.peals.len(), "MIDI file written");

    Ok(())
}
