//! Play command: strike bell sequences on a MIDI output port in real time.

use std::slice;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use chimes_midi::{PortSink, play};

use crate::cli::PlayArgs;
use crate::prepare::prepare;

/// Open the port and play every peal, printing each sequence as it starts.
pub fn run(args: PlayArgs) -> Result<()> {
    let _cmd = info_span!("play").entered();

    let today = chrono::Local::now().date_naive();
    let prepared = prepare(&args.source, &args.humanize, today)?;

    let mut sink = PortSink::open(args.port)
        .with_context(|| format!("failed to open MIDI output port {}", args.port))?;
    println!("Playing on port {}: {}", args.port, sink.name());

    let n_entries = prepared.programme.entries.len();
    for (entry, peal) in prepared.programme.entries.iter().zip(&prepared.peals) {
        println!("{}: {:?}", entry.label, entry.numbers());
        play(slice::from_ref(peal), &prepared.config, &mut sink)
            .with_context(|| format!("playback of {} failed", entry.label))?;
    }
    play(&prepared.peals[n_entries..], &prepared.config, &mut sink)
        .context("playback of the closing rest failed")?;

    sink.close();
    info!(n_peals = prepared.peals.len(), "playback finished");
    Ok(())
}
