//! CLI interface for phonolex
//!
//! Provides command-line lookups over a lexicon and management of the
//! configuration file.

pub mod args;
pub mod commands;
pub mod logger;
pub mod paths;

pub use args::{Cli, Commands, DataArgs};
pub use paths::{config_dir, default_config_path};
