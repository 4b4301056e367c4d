//! Project handle for blockref
//!
//! A project root holds the Markdown vault (default `vault/`) and the state
//! directory `.blockref/` with `config.toml` and the SQLite index.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{VaultConfig, CONFIG_FILE, STATE_DIR};
use crate::db::Database;
use crate::error::{BlockrefError, Result};

/// What `init` had to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InitReport {
    pub created_config: bool,
    pub created_vault_dir: bool,
}

/// A blockref project rooted at a directory
#[derive(Debug)]
pub struct Vault {
    root: PathBuf,
    config: VaultConfig,
}

impl Vault {
    /// Open the project at `root`, reading `.blockref/config.toml` if present
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(BlockrefError::not_found("project root", root.display()));
        }
        let config = VaultConfig::load_or_default(&Self::config_path_for(root))?;
        Ok(Vault {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Create state directory, default config, vault directory and schema.
    ///
    /// Safe to run repeatedly; an existing config is never rewritten.
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn init(root: &Path) -> Result<(Self, InitReport)> {
        let mut report = InitReport::default();

        let state_dir = root.join(STATE_DIR);
        fs::create_dir_all(&state_dir)
            .map_err(|e| BlockrefError::io_operation("create", state_dir.display(), e))?;

        let config_path = Self::config_path_for(root);
        let config = if config_path.exists() {
            VaultConfig::load(&config_path)?
        } else {
            let config = VaultConfig::default();
            config.save(&config_path)?;
            report.created_config = true;
            config
        };

        let vault = Vault {
            root: root.to_path_buf(),
            config,
        };

        let vault_dir = vault.vault_dir();
        if !vault_dir.exists() {
            fs::create_dir_all(&vault_dir)
                .map_err(|e| BlockrefError::io_operation("create", vault_dir.display(), e))?;
            report.created_vault_dir = true;
        }

        // Opening creates or upgrades the schema
        vault.open_db()?;

        tracing::debug!(?report, "init");
        Ok((vault, report))
    }

    fn config_path_for(root: &Path) -> PathBuf {
        root.join(STATE_DIR).join(CONFIG_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        Self::config_path_for(&self.root)
    }

    /// Markdown source directory
    pub fn vault_dir(&self) -> PathBuf {
        self.root.join(&self.config.vault_dir)
    }

    /// SQLite index file
    pub fn db_path(&self) -> PathBuf {
        self.root.join(&self.config.database)
    }

    pub fn open_db(&self) -> Result<Database> {
        Database::open(&self.db_path())
    }
}
