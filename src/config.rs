use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::paths;
use crate::scan::DEFAULT_MAX_DEPTH;

/// Path-list variable consulted for search roots when no directories are
/// given on the command line.
pub const REPOHOP_PATH_ENV: &str = "REPOHOP_PATH";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    /// Fallback search roots for when neither arguments nor the path-list
    /// variable supply any
    #[serde(default)]
    pub roots: Vec<String>,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

fn default_max_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from("", "", "repohop").context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("repohop.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        // A missing file is not an error; defaults apply without touching disk
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn from_cli_and_file(cli_args: &CliArgs) -> Result<Self> {
        let mut config = Self::load(cli_args.config.clone())?;

        // CLI args override config file
        if let Some(maxdepth) = cli_args.maxdepth {
            config.max_depth = maxdepth;
        }

        Ok(config)
    }
}

/// Resolution order for search roots: positional arguments, then the
/// path-list variable, then configured roots, then the current directory.
/// Entries from every source are cleaned; empty ones are discarded.
pub fn search_roots(args: &[String], env_paths: Option<&str>, config: &Config) -> Vec<String> {
    let from_args = clean_entries(args.iter().map(String::as_str));
    if !from_args.is_empty() {
        return from_args;
    }
    if let Some(value) = env_paths {
        let from_env = split_path_list(value);
        if !from_env.is_empty() {
            return from_env;
        }
    }
    let from_config = clean_entries(config.roots.iter().map(String::as_str));
    if !from_config.is_empty() {
        return from_config;
    }
    vec![".".to_string()]
}

/// Splits a PATH-style list, discards empty entries, and cleans the rest.
fn split_path_list(value: &str) -> Vec<String> {
    env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| paths::clean(&p).to_string_lossy().into_owned())
        .collect()
}

fn clean_entries<'a>(entries: impl Iterator<Item = &'a str>) -> Vec<String> {
    entries
        .filter(|entry| !entry.is_empty())
        .map(|entry| paths::clean(entry).to_string_lossy().into_owned())
        .collect()
}
