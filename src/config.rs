//! Serializable lexicon configuration.
//!
//! ```json
//! {
//!   "dictionary_path": "/usr/share/phonolex/dict.txt",
//!   "addenda_path": "/home/me/.local/share/phonolex/addenda.txt",
//!   "cache_features": true,
//!   "preload_features": false,
//!   "use_lts": false,
//!   "seed": null
//! }
//! ```
//!
//! Every field is optional in the file; missing fields take their defaults.

use crate::error::{LexiconError, Result};
use crate::lexicon::{Lexicon, LexiconBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to load lexicon data from and how to query it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Bundled dictionary file
    pub dictionary_path: Option<PathBuf>,
    /// User overrides; skipped if the file does not exist
    pub addenda_path: Option<PathBuf>,
    /// Memoize feature lookups
    pub cache_features: bool,
    /// Compute features for every word right after loading
    pub preload_features: bool,
    /// Fall back to letter-to-sound for unknown words
    pub use_lts: bool,
    /// Seed for random word iteration
    pub seed: Option<u64>,
}

impl LexiconConfig {
    /// Reads a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes the configuration as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Overlays command-line choices; set values win.
    pub fn merge(
        &self,
        dictionary_path: Option<PathBuf>,
        addenda_path: Option<PathBuf>,
        use_lts: Option<bool>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            dictionary_path: dictionary_path.or_else(|| self.dictionary_path.clone()),
            addenda_path: addenda_path.or_else(|| self.addenda_path.clone()),
            use_lts: use_lts.unwrap_or(self.use_lts),
            seed: seed.or(self.seed),
            ..self.clone()
        }
    }

    /// A builder carrying the caching, letter-to-sound fallback and seed
    /// settings.
    pub fn builder(&self) -> LexiconBuilder {
        let builder = LexiconBuilder::new()
            .feature_caching(self.cache_features)
            .lts_fallback(self.use_lts);
        match self.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
    }

    /// Loads a lexicon with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::LoadFailure`] if no dictionary path is set,
    /// and anything [`Lexicon::load_files`] returns.
    pub fn open(&self) -> Result<Lexicon> {
        self.open_with(self.builder())
    }

    /// Loads a lexicon using a caller-supplied builder, e.g. one with a
    /// letter-to-sound engine attached. Start from [`LexiconConfig::builder`]
    /// to keep the configured flags.
    pub fn open_with(&self, builder: LexiconBuilder) -> Result<Lexicon> {
        let dictionary = self
            .dictionary_path
            .as_deref()
            .ok_or_else(|| LexiconError::load_failure("configuration", "no dictionary path set"))?;

        let mut lexicon = builder.build();
        lexicon.load_files(dictionary, self.addenda_path.as_deref())?;

        if self.preload_features {
            lexicon.preload_features()?;
        }

        Ok(lexicon)
    }
}

impl Lexicon {
    /// Loads a lexicon as described by `config`.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const PRIMARY: &str = "[\n'cat':['k-ae1-t','nn'],\n'runs':['r-ah1-n-z','vbz nns']\n]\n";

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: LexiconConfig = serde_json::from_str(r#"{"cache_features": true}"#).unwrap();
        assert!(config.cache_features);
        assert!(!config.use_lts);
        assert_eq!(config.dictionary_path, None);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = LexiconConfig {
            dictionary_path: Some(PathBuf::from("dict.txt")),
            seed: Some(7),
            ..Default::default()
        };
        config.save(&path).unwrap();

        assert_eq!(LexiconConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            LexiconConfig::load(&path),
            Err(LexiconError::Config(_))
        ));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = LexiconConfig {
            dictionary_path: Some(PathBuf::from("a.txt")),
            addenda_path: Some(PathBuf::from("b.txt")),
            cache_features: true,
            ..Default::default()
        };
        let merged = base.merge(Some(PathBuf::from("c.txt")), None, Some(true), None);

        assert_eq!(merged.dictionary_path, Some(PathBuf::from("c.txt")));
        assert_eq!(merged.addenda_path, Some(PathBuf::from("b.txt")));
        assert!(merged.use_lts);
        assert!(merged.cache_features);
    }

    #[test]
    fn test_open() {
        let dir = TempDir::new().unwrap();
        let dict = dir.path().join("dict.txt");
        std::fs::write(&dict, PRIMARY).unwrap();

        let config = LexiconConfig {
            dictionary_path: Some(dict),
            addenda_path: Some(dir.path().join("missing.txt")),
            preload_features: true,
            ..Default::default()
        };
        let lexicon = Lexicon::from_config(&config).unwrap();

        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.is_caching());
        assert_eq!(lexicon.cached_feature_count(), 2);
    }

    #[test]
    fn test_use_lts_reaches_lexicon() {
        let dir = TempDir::new().unwrap();
        let dict = dir.path().join("dict.txt");
        std::fs::write(&dict, PRIMARY).unwrap();

        let config = LexiconConfig {
            dictionary_path: Some(dict),
            use_lts: true,
            ..Default::default()
        };
        let predict = |word: &str| {
            (word == "dog").then(|| vec!["d".to_string(), "ao1".to_string(), "g".to_string()])
        };
        let lexicon = config
            .open_with(config.builder().letter_to_sound(predict))
            .unwrap();

        assert!(lexicon.lts_fallback());
        assert_eq!(lexicon.raw_phones("dog", lexicon.lts_fallback()), "d-ao1-g");

        let without = LexiconConfig {
            use_lts: false,
            ..config
        };
        assert!(!Lexicon::from_config(&without).unwrap().lts_fallback());
    }

    #[test]
    fn test_open_without_dictionary() {
        assert!(matches!(
            LexiconConfig::default().open(),
            Err(LexiconError::LoadFailure { .. })
        ));
    }
}
