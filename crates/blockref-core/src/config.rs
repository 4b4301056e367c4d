//! Project configuration for blockref
//!
//! Configuration is read from `.blockref/config.toml` under the project root.
//! Every key is optional; missing keys fall back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BlockrefError, Result};

/// Directory under the project root holding blockref state
pub const STATE_DIR: &str = ".blockref";

/// Config file name inside [`STATE_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

/// Upper bound for `suggest-links` result limits
pub const MAX_SUGGEST_LIMIT: usize = 100;

/// Project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Markdown source directory, relative to the project root
    pub vault_dir: PathBuf,
    /// SQLite index file, relative to the project root
    pub database: PathBuf,
    /// Editor launched by `open` when `--editor` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    pub find: FindConfig,
    pub suggest: SuggestConfig,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            vault_dir: PathBuf::from("vault"),
            database: Path::new(STATE_DIR).join("index.db"),
            editor: None,
            find: FindConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindConfig {
    pub limit: usize,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self { limit: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub limit: usize,
    pub min_score: f64,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            min_score: 0.1,
        }
    }
}

impl VaultConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BlockrefError::io_operation("read", path.display(), e))?;
        let config: VaultConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| BlockrefError::FailedOperation {
            operation: "serialize config".to_string(),
            reason: e.to_string(),
        })?;
        fs::write(path, content)
            .map_err(|e| BlockrefError::io_operation("write", path.display(), e))?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !self.suggest.min_score.is_finite() || self.suggest.min_score < 0.0 {
            return Err(BlockrefError::invalid_value(
                "suggest.min_score",
                self.suggest.min_score,
            ));
        }
        if self.find.limit == 0 {
            return Err(BlockrefError::invalid_value("find.limit", 0));
        }
        if self.suggest.limit == 0 {
            return Err(BlockrefError::invalid_value("suggest.limit", 0));
        }
        Ok(())
    }
}
