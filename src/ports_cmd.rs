//! Ports command: list MIDI output ports.

use anyhow::{Context, Result};

use chimes_midi::output_ports;

/// Print each output port with the number `play --port` expects.
pub fn run() -> Result<()> {
    let names = output_ports().context("failed to list MIDI output ports")?;
    if names.is_empty() {
        println!("(no MIDI output ports found)");
    }
    for (i, name) in names.iter().enumerate() {
        println!("{i}: {name}");
    }
    Ok(())
}
