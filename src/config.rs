//! Configuration file loading

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tree::{ExclusionSet, ListingOrder, RenderOptions};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "snaptree.toml";

const DEFAULT_OUTPUT: &str = "tree.txt";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory to scan
    pub root: PathBuf,
    /// Literal names to skip; replaces the built-in set when given
    pub exclude: ExclusionSet,
    /// Destination of the rendered tree, relative to the working directory
    pub output: PathBuf,
    /// Sibling order: fs or name
    pub order: ListingOrder,
    /// Deepest level shown
    pub max_depth: Option<usize>,
    /// Worker threads (0 = auto, 1 = sequential)
    pub jobs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude: ExclusionSet::standard(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            order: ListingOrder::Fs,
            max_depth: None,
            jobs: 1,
        }
    }
}

impl Config {
    /// Load from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists, or
    /// fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        if let Some(bad) = self
            .exclude
            .iter()
            .find(|name| name.is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::Invalid(format!(
                "exclude entries must be plain names, got '{}'",
                bad
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output path is empty".into()));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            exclude: self.exclude.clone(),
            order: self.order,
            max_depth: self.max_depth,
            jobs: self.jobs,
        }
    }
}
