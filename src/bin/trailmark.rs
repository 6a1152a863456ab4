// src/bin/trailmark.rs
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use trailmark_core::cli::{self, Cli, Commands};
use trailmark_core::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    dispatch(&cli)
}

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Analyze {
            paths,
            format,
            no_trail,
        }) => {
            let mut config = Config::load();
            if let Some(format) = format {
                config.format = *format;
            }
            if *no_trail {
                config.show_trail = false;
            }
            run_analyze(paths, &config)
        }
        Some(Commands::Trail { file }) => cli::handle_trail(file),
        None => run_analyze(&[], &Config::load()),
    }
}

fn run_analyze(paths: &[PathBuf], config: &Config) -> Result<()> {
    if !cli::handle_analyze(paths, config)? {
        process::exit(1);
    }
    Ok(())
}
