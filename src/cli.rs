use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Long Now chime sequences: one unique bell ordering per day.
#[derive(Parser)]
#[command(
    name = "chimes",
    version,
    about = "Long Now 10,000-year chime sequences"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print bell sequences without playing them.
    Show(ShowArgs),
    /// Render bell sequences to a Standard MIDI File.
    Render(RenderArgs),
    /// Play bell sequences in real time on a MIDI output port.
    #[cfg(feature = "port")]
    Play(PlayArgs),
    /// List the available MIDI output ports.
    #[cfg(feature = "port")]
    Ports,
}

/// Where the bell sequences come from. With none given, the two built-in
/// demonstration peals are used.
#[derive(clap::Args, Debug, Default)]
#[group(id = "source", multiple = false)]
pub struct SourceArgs {
    /// Chimes for a single date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,

    /// Chimes for every day from START to END inclusive.
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub range: Option<Vec<NaiveDate>>,

    /// Chimes for today's local date.
    #[arg(long)]
    pub today: bool,

    /// A custom sequence of bells (1-10).
    #[arg(long, num_args = 1.., value_name = "BELL")]
    pub sequence: Option<Vec<u8>>,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Settings shared by the commands that humanize peals.
#[derive(clap::Args, Debug, Default)]
pub struct HumanizeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the humanization RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the MIDI channel (0-15) from config.
    #[arg(long)]
    pub channel: Option<u8>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub humanize: HumanizeArgs,

    /// Path of the MIDI file to write.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `play` subcommand.
#[cfg(feature = "port")]
#[derive(clap::Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub humanize: HumanizeArgs,

    /// MIDI output port number (see `chimes ports`).
    #[arg(short, long, value_name = "N")]
    pub port: usize,
}
