mod commands;
mod edit;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use meetgrid_core::meetgrid::Meetgrid;

#[derive(Parser)]
#[command(name = "meetgrid")]
#[command(about = "Record weekly availability and find the slots that work for everyone")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show everyone's schedule and the common availability
    Show,
    /// Record or update a participant's availability
    Set {
        /// Participant name (prompted for when omitted)
        name: Option<String>,

        /// Slot ids to mark unavailable (e.g. "Mon 6pm,Tue 7pm")
        #[arg(long, value_delimiter = ',')]
        unavailable: Vec<String>,

        /// Slot ids to mark unknown
        #[arg(long, value_delimiter = ',')]
        unknown: Vec<String>,
    },
    /// Remove the entry at the given position in `show`
    Remove { index: usize },
    /// Write the schedules to a file, byte-for-byte
    Export {
        /// Destination path (defaults to ./schedules.json)
        dest: Option<PathBuf>,
    },
    /// Replace all schedules with the contents of a file
    Import { src: PathBuf },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let meetgrid = Meetgrid::load()?;

    match cli.command {
        Commands::Show => commands::show::run(&meetgrid),
        Commands::Set {
            name,
            unavailable,
            unknown,
        } => commands::set::run(&meetgrid, name, unavailable, unknown),
        Commands::Remove { index } => commands::remove::run(&meetgrid, index),
        Commands::Export { dest } => commands::export::run(&meetgrid, dest),
        Commands::Import { src } => commands::import::run(&meetgrid, &src),
    }
}
