//! Show command: print bell sequences.

use anyhow::Result;
use tracing::info_span;

use crate::cli::ShowArgs;
use crate::source;

/// Print the selected sequences, one per line.
pub fn run(args: ShowArgs) -> Result<()> {
    let _cmd = info_span!("show").entered();
    let today = chrono::Local::now().date_naive();
    let programme = source::resolve(&args.source, today)?;

    for entry in &programme.entries {
        println!("{}: {:?}", entry.label, entry.numbers());
    }
    Ok(())
}
