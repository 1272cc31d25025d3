//! Configuration loading
//!
//! The migration is driven by a YAML document listing bucket pairs:
//!
//! ```yaml
//! locations:
//!   - source: old-bucket
//!     dest: new-bucket
//! ```
//!
//! The file lives at `config.yaml`, relative to the working directory,
//! unless a path is given explicitly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// One replication task: copy everything in `source` into `destination`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketPair {
    /// Source bucket name
    pub source: String,

    /// Destination bucket name
    #[serde(rename = "dest")]
    pub destination: String,
}

impl BucketPair {
    /// Create a new BucketPair
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// Bucket pairs, processed in declared order
    #[serde(default)]
    pub locations: Vec<BucketPair>,
}

impl MigrationConfig {
    /// Parse a configuration document
    ///
    /// An empty document yields an empty pair list. Unknown fields are ignored.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (index, pair) in self.locations.iter().enumerate() {
            if pair.source.is_empty() {
                return Err(Error::ConfigRead(format!(
                    "locations[{index}]: source bucket must not be empty"
                )));
            }
            if pair.destination.is_empty() {
                return Err(Error::ConfigRead(format!(
                    "locations[{index}]: dest bucket must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Loads the migration configuration from disk
#[derive(Debug)]
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader bound to the default, working-directory-relative path
    pub fn new() -> Self {
        Self::with_path(DEFAULT_CONFIG_PATH)
    }

    /// Create a loader with a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Load configuration from disk
    ///
    /// A missing file is an error, never an empty configuration.
    pub fn load(&self) -> Result<MigrationConfig> {
        let content = std::fs::read_to_string(&self.config_path).map_err(|e| {
            Error::ConfigRead(format!("{}: {e}", self.config_path.display()))
        })?;

        let config = MigrationConfig::from_yaml(&content).map_err(|e| match e {
            Error::Yaml(e) => Error::ConfigRead(format!("{}: {e}", self.config_path.display())),
            other => other,
        })?;

        tracing::debug!(
            path = %self.config_path.display(),
            pairs = config.locations.len(),
            "Loaded configuration"
        );

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_loader(content: Option<&str>) -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        if let Some(content) = content {
            std::fs::write(&config_path, content).unwrap();
        }
        (ConfigLoader::with_path(config_path), temp_dir)
    }

    #[test]
    fn test_default_path() {
        let loader = ConfigLoader::new();
        assert_eq!(loader.config_path, PathBuf::from("config.yaml"));
    }

    #[test]
    fn test_load_preserves_order() {
        let (loader, _temp_dir) = temp_loader(Some(
            r#"
locations:
  - source: alpha
    dest: alpha-copy
  - source: beta
    dest: beta-copy
"#,
        ));

        let config = loader.load().unwrap();
        assert_eq!(
            config.locations,
            vec![
                BucketPair::new("alpha", "alpha-copy"),
                BucketPair::new("beta", "beta-copy"),
            ]
        );
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let (loader, _temp_dir) = temp_loader(None);
        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::ConfigRead(_)));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_load_malformed_is_config_error() {
        let (loader, _temp_dir) = temp_loader(Some("locations: [source: {"));
        assert!(matches!(loader.load().unwrap_err(), Error::ConfigRead(_)));
    }

    #[test]
    fn test_missing_locations_is_empty() {
        let config = MigrationConfig::from_yaml("other: 1\n").unwrap();
        assert!(config.locations.is_empty());

        let config = MigrationConfig::from_yaml("").unwrap();
        assert!(config.locations.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config = MigrationConfig::from_yaml(
            r#"
region: eu-west-1
locations:
  - source: a
    dest: b
    note: legacy
"#,
        )
        .unwrap();
        assert_eq!(config.locations, vec![BucketPair::new("a", "b")]);
    }

    #[test]
    fn test_missing_dest_is_error() {
        let err = MigrationConfig::from_yaml("locations:\n  - source: a\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_empty_bucket_name_is_error() {
        let err = MigrationConfig::from_yaml("locations:\n  - source: a\n    dest: \"\"\n")
            .unwrap_err();
        assert!(matches!(err, Error::ConfigRead(_)));
        assert!(err.to_string().contains("locations[0]"));
    }
}
