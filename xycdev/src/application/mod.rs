pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use xyc_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Convert { input, output } => handlers::handle_convert(input, output),
        Commands::Scan { input, json } => handlers::handle_scan(input, json),
    }
}
