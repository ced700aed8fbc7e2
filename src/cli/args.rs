//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phonolex")]
#[command(about = "Pronunciation and part-of-speech lexicon lookups")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log loading details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to load lexicon data from; overrides the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Dictionary file
    #[arg(short, long)]
    pub dict: Option<PathBuf>,

    /// Addenda file with overriding entries
    #[arg(short, long)]
    pub addenda: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show pronunciation, features and tags for words
    Lookup {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        data: DataArgs,

        /// Print feature sets as JSON
        #[arg(long)]
        json: bool,

        /// Predict phones for words missing from the lexicon
        #[arg(long)]
        lts: bool,
    },

    /// List words whose best part-of-speech tag matches
    Pos {
        /// Part-of-speech tag (e.g. nn, vbz)
        tag: String,

        #[command(flatten)]
        data: DataArgs,

        /// Result limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List words matching a regular expression (full match)
    Match {
        /// Pattern, e.g. "c.t" or "[aeiou].*ing"
        pattern: String,

        #[command(flatten)]
        data: DataArgs,

        /// Result limit
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print random words
    Random {
        #[command(flatten)]
        data: DataArgs,

        /// Number of words
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        /// Only words with this best part-of-speech tag
        #[arg(short, long)]
        pos: Option<String>,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Group a flat phone sequence into syllables
    Syllabify {
        /// Phones, e.g. "ah0 s t r ey1"
        #[arg(required = true)]
        phones: Vec<String>,
    },

    /// Show lexicon statistics
    Info {
        #[command(flatten)]
        data: DataArgs,
    },

    /// View or change the configuration file
    Config {
        /// Set the default dictionary path
        #[arg(long)]
        set_dict: Option<PathBuf>,

        /// Set the default addenda path
        #[arg(long)]
        set_addenda: Option<PathBuf>,

        /// Enable or disable the feature cache
        #[arg(long)]
        set_cache: Option<bool>,

        /// Enable or disable feature preloading
        #[arg(long)]
        set_preload: Option<bool>,

        /// Enable or disable letter-to-sound fallback in lookups
        #[arg(long)]
        set_lts: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,

        /// Show the configuration file path
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() {
        let cli = Cli::try_parse_from(["phonolex", "-v", "lookup", "cat", "dog", "--dict", "d.txt"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Lookup {
                words,
                data,
                json,
                lts,
            } => {
                assert_eq!(words, ["cat", "dog"]);
                assert_eq!(data.dict, Some(PathBuf::from("d.txt")));
                assert!(!json);
                assert!(!lts);
            }
            _ => panic!("expected lookup"),
        }
    }

    #[test]
    fn test_parse_random_defaults() {
        let cli = Cli::try_parse_from(["phonolex", "random", "--pos", "nn"]).unwrap();
        match cli.command {
            Commands::Random { count, pos, seed, .. } => {
                assert_eq!(count, 10);
                assert_eq!(pos.as_deref(), Some("nn"));
                assert_eq!(seed, None);
            }
            _ => panic!("expected random"),
        }
    }

    #[test]
    fn test_lookup_requires_words() {
        assert!(Cli::try_parse_from(["phonolex", "lookup"]).is_err());
    }
}
