//! Configuration management for the markdown normalizer.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional project and user configuration files

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Deserialize;

/// Directory scanned when nothing else is configured.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Project-local configuration file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".mdnorm.toml";

/// Command-line arguments for the markdown normalizer
#[derive(Debug, Parser)]
#[command(name = "mdnorm")]
#[command(about = "Whitespace normalizer for markdown documentation files")]
#[command(version)]
pub struct Args {
    /// Directory of markdown files to normalize
    #[arg(long, help = "Directory containing the markdown files (default: docs)")]
    pub docs_dir: Option<PathBuf>,

    /// Log level for the normalizer
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// On-disk configuration file shape (project or user level)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Directory of markdown files to normalize
    pub docs_dir: Option<PathBuf>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for markdown files
    pub docs_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments and config files
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    ///
    /// Precedence for the docs directory: CLI flag, then the project
    /// config file, then the user config file, then the built-in default.
    pub fn from_args(args: Args) -> Result<Self> {
        let mut docs_dir = args.docs_dir;

        if docs_dir.is_none() {
            docs_dir = load_config_file(Path::new(PROJECT_CONFIG_FILE)).docs_dir;
        }

        if docs_dir.is_none() {
            if let Some(user_path) = user_config_path() {
                docs_dir = load_config_file(&user_path).docs_dir;
            }
        }

        Ok(Config {
            docs_dir: docs_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR)),
            log_level: args.log_level,
        })
    }
}

/// Location of the per-user configuration file, when a config dir exists
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mdnorm").join("config.toml"))
}

/// Read and parse one configuration file.
///
/// A missing file is ordinary and yields the empty configuration. An
/// unreadable or invalid file is logged and ignored, so a stray config
/// file cannot stop the run.
pub fn load_config_file(path: &Path) -> ConfigFile {
    if !path.is_file() {
        return ConfigFile::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            log::warn!("failed to read {}: {}. Ignoring it.", path.display(), e);
            return ConfigFile::default();
        }
    };

    match toml::from_str(&content) {
        Ok(file) => {
            log::debug!("loaded configuration from {}", path.display());
            file
        }
        Err(e) => {
            log::warn!("failed to parse {}: {}. Ignoring it.", path.display(), e);
            ConfigFile::default()
        }
    }
}
