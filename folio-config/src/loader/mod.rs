//! Config discovery and parsing.
//!
//! Evaluation order:
//! 1) `$FOLIO_CONFIG_PATH` (TOML or JSON file),
//! 2) `$FOLIO_CONFIG_JSON` (inline JSON),
//! 3) the first existing default file under the search root,
//! 4) built-in defaults.
//!
//! Whatever is found is validated before it is handed out.

pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::constants::{DEFAULT_FILE_CANDIDATES, env as env_keys};
use crate::models::FolioConfig;
use error::ConfigLoadError;

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// A validated configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: FolioConfig,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    search_root: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe default files relative to `root` instead of the working directory.
    pub fn with_search_root(root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: Some(root.into()),
        }
    }

    /// Load using the process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        self.load_with(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn load_with<F>(&self, lookup: F) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = self.resolve(lookup)?;
        config.validate()?;
        log::debug!("loaded folio config from {:?}", source);
        Ok(ConfigLoad { config, source })
    }

    fn resolve<F>(
        &self,
        lookup: F,
    ) -> Result<(FolioConfig, ConfigSource), ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(env_keys::CONFIG_PATH)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(env_keys::CONFIG_JSON)
            && !raw.trim().is_empty()
        {
            let config = Self::parse_json(&raw, env_keys::CONFIG_JSON)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((FolioConfig::default(), ConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> Result<FolioConfig, ConfigLoadError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let origin = path.display().to_string();

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents, &origin),
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigLoadError::Toml { origin, source }),
            _ => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a document of unknown format: TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> Result<FolioConfig, ConfigLoadError> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                ConfigLoadError::Unrecognized {
                    origin: origin.to_string(),
                    toml_error: toml_err.to_string(),
                    json_error: json_err.to_string(),
                }
            })
        })
    }

    pub fn parse_json(
        raw: &str,
        origin: &str,
    ) -> Result<FolioConfig, ConfigLoadError> {
        serde_json::from_str(raw).map_err(|source| ConfigLoadError::Json {
            origin: origin.to_string(),
            source,
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self.search_root.as_deref().unwrap_or(Path::new("."));
        DEFAULT_FILE_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
