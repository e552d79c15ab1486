use crate::error::ConfigError;
use crate::store::{DocumentStore, DEFAULT_EXTENSION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the site keeps its documents and which one the public page shows.
///
/// ```yaml
/// data_dir: /srv/profile
/// profile: data.json
/// extension: json
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the profile documents.
    pub data_dir: PathBuf,
    /// Identifier of the document rendered by the public page.
    pub profile: String,
    /// File extension that makes a file in `data_dir` editable.
    pub extension: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            data_dir: PathBuf::from("."),
            profile: "data.json".to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl SiteConfig {
    /// Reads a YAML config file. Keys left out keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read and
    /// `ConfigError::Parse` if it is not a valid config mapping.
    pub fn load(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// # Errors
    /// Returns `ConfigError::Parse` if `yaml` is not a valid config mapping.
    pub fn from_yaml_str(yaml: &str) -> Result<SiteConfig, ConfigError> {
        Self::parse(yaml, Path::new("<inline>"))
    }

    fn parse(yaml: &str, path: &Path) -> Result<SiteConfig, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(SiteConfig::default());
        }
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn store(&self) -> DocumentStore {
        DocumentStore::new(&self.data_dir).with_extension(&self.extension)
    }
}
