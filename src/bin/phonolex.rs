//! phonolex - pronunciation and part-of-speech lexicon lookups
//!
//! Provides CLI utilities over a lexicon dictionary file.

use clap::Parser;
use colored::Colorize;
use std::process;

use phonolex::cli::{commands, logger, Cli};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
