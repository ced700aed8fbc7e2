//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::config::LexiconConfig;
use crate::lexicon::Lexicon;
use crate::phonetic::{format_phone_field, syllabify, ArpabetInventory};

use super::args::{Cli, Commands, DataArgs};
use super::paths::{config_file_path, load_config, save_config};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config_path = config_file_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Lookup {
            words,
            data,
            json,
            lts,
        } => {
            let config = resolve_config(&config_path, &data, lts.then_some(true), None)?;
            let lexicon = open_config(&config)?;
            cmd_lookup(&lexicon, &words, json)
        }
        Commands::Pos { tag, data, limit } => {
            let lexicon = open_lexicon(&config_path, &data, None)?;
            cmd_pos(&lexicon, &tag, limit)
        }
        Commands::Match {
            pattern,
            data,
            limit,
        } => {
            let lexicon = open_lexicon(&config_path, &data, None)?;
            cmd_match(&lexicon, &pattern, limit)
        }
        Commands::Random {
            data,
            count,
            pos,
            seed,
        } => {
            let mut lexicon = open_lexicon(&config_path, &data, seed)?;
            cmd_random(&mut lexicon, count, pos.as_deref())
        }
        Commands::Syllabify { phones } => cmd_syllabify(&phones),
        Commands::Info { data } => cmd_info(&config_path, &data),
        Commands::Config {
            set_dict,
            set_addenda,
            set_cache,
            set_preload,
            set_lts,
            reset,
            show,
        } => cmd_config(
            &config_path,
            ConfigChanges {
                dictionary_path: set_dict,
                addenda_path: set_addenda,
                cache_features: set_cache,
                preload_features: set_preload,
                use_lts: set_lts,
            },
            reset,
            show,
        ),
    }
}

/// Load the lexicon described by the config file and command-line overrides
pub fn open_lexicon(config_path: &Path, data: &DataArgs, seed: Option<u64>) -> Result<Lexicon> {
    open_config(&resolve_config(config_path, data, None, seed)?)
}

/// Overlay command-line choices on the config file
pub fn resolve_config(
    config_path: &Path,
    data: &DataArgs,
    use_lts: Option<bool>,
    seed: Option<u64>,
) -> Result<LexiconConfig> {
    Ok(load_config(config_path)?.merge(data.dict.clone(), data.addenda.clone(), use_lts, seed))
}

/// Load the lexicon a resolved config describes
pub fn open_config(config: &LexiconConfig) -> Result<Lexicon> {
    if config.dictionary_path.is_none() {
        bail!("No dictionary given. Use --dict or `phonolex config --set-dict <PATH>`.");
    }

    config.open().context("Failed to load lexicon")
}

/// Lookup command
fn cmd_lookup(lexicon: &Lexicon, words: &[String], json: bool) -> Result<()> {
    for word in words {
        if !lexicon.contains(word) {
            let predicted = lexicon.raw_phones(word, lexicon.lts_fallback());
            if predicted.is_empty() {
                println!("{}: {}", word.bold(), "not found".yellow());
            } else {
                println!("{}: {} {}", word.bold(), predicted, "(predicted)".dimmed());
            }
            continue;
        }

        if json {
            let features = lexicon.features(word)?;
            println!("{}", serde_json::to_string_pretty(&features)?);
        } else {
            for line in describe_word(lexicon, word)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

/// Render the lookup report for a word in the lexicon
pub fn describe_word(lexicon: &Lexicon, word: &str) -> Result<Vec<String>> {
    let features = lexicon.features(word)?;

    Ok(vec![
        word.to_lowercase(),
        format!("  phones:    {}", lexicon.raw_phones(word, lexicon.lts_fallback())),
        format!("  phonemes:  {}", features.phonemes),
        format!("  syllables: {}", features.syllables),
        format!("  stresses:  {}", features.stresses),
        format!("  pos:       {}", features.pos_list),
    ])
}

/// POS listing command
fn cmd_pos(lexicon: &Lexicon, tag: &str, limit: Option<usize>) -> Result<()> {
    let words = lexicon.words_with_pos(tag)?;
    print_words(words.iter().map(String::as_str), limit);
    Ok(())
}

/// Pattern search command
fn cmd_match(lexicon: &Lexicon, pattern: &str, limit: Option<usize>) -> Result<()> {
    let words = lexicon
        .words_matching(pattern)
        .with_context(|| format!("Bad pattern: {pattern}"))?;
    print_words(words.iter().map(String::as_str), limit);
    Ok(())
}

fn print_words<'a>(words: impl Iterator<Item = &'a str>, limit: Option<usize>) {
    let mut printed = 0;
    for word in words.take(limit.unwrap_or(usize::MAX)) {
        println!("{word}");
        printed += 1;
    }

    if printed == 0 {
        println!("{}", "No words found".yellow());
    }
}

/// Random words command
fn cmd_random(lexicon: &mut Lexicon, count: usize, pos: Option<&str>) -> Result<()> {
    let words: Vec<String> = match pos {
        Some(tag) => lexicon.random_word_iterator_with_pos(tag)?.take(count).collect(),
        None => lexicon.random_word_iterator().take(count).collect(),
    };

    print_words(words.iter().map(String::as_str), None);
    Ok(())
}

/// Syllabify command
fn cmd_syllabify(phones: &[String]) -> Result<()> {
    println!("{}", syllabify_args(phones));
    Ok(())
}

/// Group phones given as arguments (each may hold several phones) into a
/// phone field
pub fn syllabify_args(phones: &[String]) -> String {
    let flat: Vec<&str> = phones.iter().flat_map(|p| p.split_whitespace()).collect();
    format_phone_field(&syllabify(&ArpabetInventory, &flat))
}

/// Info command
fn cmd_info(config_path: &Path, data: &DataArgs) -> Result<()> {
    let config = resolve_config(config_path, data, None, None)?;
    let lexicon = open_config(&config)?;

    println!("{}", "Lexicon Information".bold().underline());
    println!();
    if let Some(path) = &config.dictionary_path {
        println!("  Dictionary: {}", path.display().to_string().cyan());
    }
    if let Some(path) = &config.addenda_path {
        println!("  Addenda:    {}", path.display().to_string().cyan());
    }
    println!("  Words:      {}", lexicon.len().to_string().green());
    println!("  Overrides:  {}", lexicon.addenda_count().to_string().green());

    let tags = best_pos_histogram(&lexicon);
    println!("  Tags:       {}", tags.len().to_string().green());
    let mut top: Vec<(&String, &usize)> = tags.iter().collect();
    top.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    for (tag, count) in top.into_iter().take(5) {
        println!("    {:<6} {}", tag, count);
    }

    println!();

    Ok(())
}

/// Count words by best part-of-speech tag
pub fn best_pos_histogram(lexicon: &Lexicon) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in lexicon.entries().values() {
        if let Some(tag) = entry.pos_field().split_whitespace().next() {
            *counts.entry(tag.to_lowercase()).or_insert(0) += 1;
        }
    }
    counts
}

/// Requested configuration edits
#[derive(Debug, Default)]
pub struct ConfigChanges {
    /// New dictionary path
    pub dictionary_path: Option<std::path::PathBuf>,
    /// New addenda path
    pub addenda_path: Option<std::path::PathBuf>,
    /// New cache flag
    pub cache_features: Option<bool>,
    /// New preload flag
    pub preload_features: Option<bool>,
    /// New letter-to-sound fallback flag
    pub use_lts: Option<bool>,
}

impl ConfigChanges {
    /// Apply the edits, returning true if anything changed
    pub fn apply(self, config: &mut LexiconConfig) -> bool {
        let mut changed = false;

        if let Some(path) = self.dictionary_path {
            config.dictionary_path = Some(path);
            changed = true;
        }
        if let Some(path) = self.addenda_path {
            config.addenda_path = Some(path);
            changed = true;
        }
        if let Some(enabled) = self.cache_features {
            config.cache_features = enabled;
            changed = true;
        }
        if let Some(enabled) = self.preload_features {
            config.preload_features = enabled;
            changed = true;
        }
        if let Some(enabled) = self.use_lts {
            config.use_lts = enabled;
            changed = true;
        }

        changed
    }
}

/// Config command
fn cmd_config(config_path: &Path, changes: ConfigChanges, reset: bool, show: bool) -> Result<()> {
    if show {
        println!("{}", "Config File Location:".bold().underline());
        println!();
        println!("  {}", config_path.display().to_string().cyan());
        println!();
    }

    if reset {
        let config = LexiconConfig::default();
        save_config(&config, config_path)?;
        println!("{}", "Configuration reset to defaults".green().bold());
        println!();
        print_config(&config);
        return Ok(());
    }

    let mut config = load_config(config_path)?;
    if changes.apply(&mut config) {
        save_config(&config, config_path)?;
        println!("{}", "Configuration saved".green().bold());
        println!();
    }

    print_config(&config);
    Ok(())
}

fn print_config(config: &LexiconConfig) {
    let path_or_unset = |path: &Option<std::path::PathBuf>| match path {
        Some(path) => path.display().to_string().cyan(),
        None => "(not set)".dimmed(),
    };

    println!("{}", "Current Configuration:".bold().underline());
    println!();
    println!("  Dictionary:       {}", path_or_unset(&config.dictionary_path));
    println!("  Addenda:          {}", path_or_unset(&config.addenda_path));
    println!("  Cache features:   {}", config.cache_features);
    println!("  Preload features: {}", config.preload_features);
    println!("  Use LTS:          {}", config.use_lts);
    match config.seed {
        Some(seed) => println!("  Seed:             {seed}"),
        None => println!("  Seed:             {}", "(random)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_syllabify_args() {
        let phones = vec!["ah0 s".to_string(), "t".to_string(), "r ey1".to_string()];
        assert_eq!(syllabify_args(&phones), "ah0-s t-r-ey1");
    }

    #[test]
    fn test_config_changes() {
        let mut config = LexiconConfig::default();
        assert!(!ConfigChanges::default().apply(&mut config));

        let changes = ConfigChanges {
            dictionary_path: Some(PathBuf::from("dict.txt")),
            cache_features: Some(true),
            ..Default::default()
        };
        assert!(changes.apply(&mut config));
        assert_eq!(config.dictionary_path, Some(PathBuf::from("dict.txt")));
        assert!(config.cache_features);
        assert!(!config.preload_features);

        let changes = ConfigChanges {
            use_lts: Some(true),
            ..Default::default()
        };
        assert!(changes.apply(&mut config));
        assert!(config.use_lts);
    }

    #[test]
    fn test_describe_word() {
        let lexicon = Lexicon::builder()
            .load("[\n'apple':['ae1 p-ah-l','nn']\n]", None)
            .unwrap();
        let lines = describe_word(&lexicon, "Apple").unwrap();
        assert_eq!(lines[0], "apple");
        assert_eq!(lines[1], "  phones:    ae1 p-ah-l");
        assert_eq!(lines[4], "  stresses:  1/0");
    }

    #[test]
    fn test_best_pos_histogram() {
        let lexicon = Lexicon::builder()
            .load(
                "[\n'cat':['k-ae1-t','nn'],\n'dog':['d-ao1-g','NN vb'],\n'runs':['r-ah1-n-z','vbz nns']\n]",
                None,
            )
            .unwrap();
        let counts = best_pos_histogram(&lexicon);
        assert_eq!(counts.get("nn"), Some(&2));
        assert_eq!(counts.get("vbz"), Some(&1));
        assert_eq!(counts.get("vb"), None);
    }

    #[test]
    fn test_resolve_config_carries_lts_flag() {
        let dir = tempfile::TempDir::new().unwrap();
        let dict = dir.path().join("dict.txt");
        std::fs::write(&dict, "[\n'cat':['k-ae1-t','nn']\n]\n").unwrap();
        let data = DataArgs {
            dict: Some(dict),
            addenda: None,
        };

        let config_path = dir.path().join("config.json");
        let config = resolve_config(&config_path, &data, Some(true), None).unwrap();
        assert!(config.use_lts);
        assert!(open_config(&config).unwrap().lts_fallback());

        let config = resolve_config(&config_path, &data, None, None).unwrap();
        assert!(!open_config(&config).unwrap().lts_fallback());
    }

    #[test]
    fn test_open_lexicon_requires_dictionary() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        assert!(open_lexicon(&config_path, &DataArgs::default(), None).is_err());
    }
}
