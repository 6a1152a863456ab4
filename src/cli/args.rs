use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "trailmark", version, about = "Eulerian trail analyzer for directed multigraphs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify graph files and print their trails
    Analyze {
        /// Graph files or directories to search; current directory if empty
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
        /// Report rendering
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Omit the trail line from text output
        #[arg(long)]
        no_trail: bool,
    },
    /// Print only the trail of a single graph file, space separated
    Trail {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}
