mod cli;
mod config;
mod convert;
mod logging;
#[cfg(feature = "port")]
mod play_cmd;
#[cfg(feature = "port")]
mod ports_cmd;
mod prepare;
mod render_cmd;
mod show_cmd;
mod source;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Show(args) => show_cmd::run(args),
        Command::Render(args) => render_cmd::run(args),
        #[cfg(feature = "port")]
        Command::Play(args) => play_cmd::run(args),
        #[cfg(feature = "port")]
        Command::Ports => ports_cmd::run(),
    }
}
