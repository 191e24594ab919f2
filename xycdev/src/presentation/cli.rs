use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "XC/DSC acquisition file splitter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split every recognized file under the input tree into per-frame files
    Convert {
        /// Base directory with one subdirectory of data files per run
        #[arg(long, short = 'i', alias = "in")]
        input: PathBuf,

        /// Root for frame output; defaults to an `out` directory beside each run
        #[arg(long, short = 'o', alias = "out")]
        output: Option<PathBuf>,
    },

    /// Classify files without writing any frame output
    Scan {
        /// Base directory with one subdirectory of data files per run
        #[arg(long, short = 'i', alias = "in")]
        input: PathBuf,

        /// Emit the report as JSON instead of a text listing
        #[arg(long)]
        json: bool,
    },
}
