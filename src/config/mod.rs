//! Configuration management for `publish.toml`.
//!
//! The file is optional. Without it, the project root is the current
//! directory and every setting keeps its default, which reproduces the plain
//! `mv _drafts/<name> _posts/<date>-<name>` behavior.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [paths], [git]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # PublishConfig (this file)
//! ```
//!
//! Precedence, lowest first: defaults, `publish.toml`, command-line flags.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{GitConfig, PathsConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::Cli,
    debug, log,
    post::PostLayout,
    utils::path::{expand_tilde, normalize_path},
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file looked up when `--config` is not given.
pub const CONFIG_FILE: &str = "publish.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing publish.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root: parent of the config file, else the current directory
    #[serde(skip)]
    pub root: PathBuf,

    /// Drafts and posts directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Commit and push settings
    #[serde(default)]
    pub git: GitConfig,
}

impl PublishConfig {
    /// Load configuration for the current directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(cli, &cwd)
    }

    /// Load configuration as if invoked from `cwd`.
    ///
    /// An explicit `--config` that cannot be found is an error; the default
    /// `publish.toml` is allowed to be missing.
    pub fn load_from(cli: &Cli, cwd: &Path) -> Result<Self> {
        let (name, explicit) = match &cli.config {
            Some(path) => (expand_tilde(path), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        let mut config = match find_config_file(&name, cwd) {
            Some(path) => {
                let path = normalize_path(&path);
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.to_path_buf());
                config.config_path = Some(path);
                config
            }
            None if explicit => {
                bail!("config file '{}' not found", name.display());
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self {
                    root: cwd.to_path_buf(),
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Layout used to plan moves.
    pub fn layout(&self) -> PostLayout {
        self.paths.layout()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.paths.drafts, cli.drafts.as_ref());
        Self::update_option(&mut self.paths.posts, cli.posts.as_ref());
        Self::update_option(&mut self.git.push, cli.push_override().as_ref());
        Self::update_option(&mut self.git.remote, cli.remote.as_ref());
        Self::update_option(&mut self.git.message, cli.message.as_ref());

        if let Some(branch) = &cli.branch {
            self.git.branch = Some(branch.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&mut diag);
        self.git.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PublishConfig {
    let (parsed, ignored) = PublishConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
