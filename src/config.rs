//! Configuration loading for themedeck.
//!
//! Sources, in precedence order: environment (`THEMEDECK_*`), then an
//! explicit `--config` path, then `./themedeck.toml`, then
//! `~/.config/themedeck/themedeck.toml`. A missing file is not an error —
//! every field has a default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::TagPolicy;
use crate::error::ConfigError;

/// Default host base URL (a local SillyTavern-style server).
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Default per-request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Config file name searched in the working directory and config root.
const CONFIG_FILE: &str = "themedeck.toml";

/// Raw on-disk config shape; everything optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub host: Option<HostSection>,
    pub tags: Option<TagsSection>,
    pub favorites: Option<FavoritesSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostSection {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsSection {
    /// When false, `add-tag` skips tags the name already carries.
    pub allow_duplicate: Option<bool>,
    /// When true, `list` shows empty categories by default.
    pub show_empty: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoritesSection {
    /// Override path for the favorites JSON file.
    pub path: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
    pub tag_policy: TagPolicy,
    pub show_empty: bool,
    pub favorites_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            tag_policy: TagPolicy::AllowDuplicate,
            show_empty: false,
            favorites_path: None,
        }
    }
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        || dirs::config_dir().map(|root| root.join("themedeck")),
    )
}

/// Load with injected file/env/root sources so tests stay hermetic.
pub(crate) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let file: FileConfig = match read_config_text(path_override, &read_file, &config_root)? {
        Some(text) => toml::from_str(&text)?,
        None => FileConfig::default(),
    };

    let mut config = resolve(file);
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

/// Find and read the config file text, if any file exists.
///
/// An explicit `--config` path that cannot be read is an error; the default
/// search locations are optional.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        return Ok(Some(read_file(Path::new(path))?));
    }
    if let Ok(text) = read_file(Path::new(CONFIG_FILE)) {
        return Ok(Some(text));
    }
    if let Some(root) = config_root() {
        if let Ok(text) = read_file(&root.join(CONFIG_FILE)) {
            return Ok(Some(text));
        }
    }
    Ok(None)
}

fn resolve(file: FileConfig) -> Config {
    let mut config = Config::default();
    if let Some(host) = file.host {
        if let Some(url) = host.base_url {
            config.base_url = url;
        }
        if let Some(key) = host.api_key {
            config.api_key = key;
        }
        if let Some(secs) = host.timeout_secs {
            config.timeout_secs = secs;
        }
    }
    if let Some(tags) = file.tags {
        if tags.allow_duplicate == Some(false) {
            config.tag_policy = TagPolicy::SkipExisting;
        }
        if let Some(show) = tags.show_empty {
            config.show_empty = show;
        }
    }
    if let Some(favorites) = file.favorites {
        config.favorites_path = favorites.path;
    }
    config
}

fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_lookup("THEMEDECK_BASE_URL") {
        config.base_url = url;
    }
    if let Some(key) = env_lookup("THEMEDECK_API_KEY") {
        config.api_key = key;
    }
    if let Some(timeout) = env_lookup("THEMEDECK_API_TIMEOUT_SECS") {
        match timeout.parse::<u64>() {
            Ok(secs) if secs > 0 => config.timeout_secs = secs,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "invalid THEMEDECK_API_TIMEOUT_SECS value `{timeout}`: expected positive integer seconds"
                )));
            }
        }
    }
    Ok(())
}
