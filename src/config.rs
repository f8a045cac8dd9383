use crate::error::{ReleaseVersionError, Result};
use crate::git::github::DEFAULT_TOKEN_ENV;
use crate::manifest::ManifestRules;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration file looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = ".newrelver.toml";

/// Configuration file looked up in the user config directory
pub const USER_CONFIG_FILE: &str = "new-release-version.toml";

/// Represents the complete configuration for new-release-version.
///
/// Every value can be overridden from the command line; the file only
/// supplies defaults for a project or a user.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub resolution: ResolutionSettings,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub manifests: ManifestsConfig,
}

/// Defaults for the increment policy
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ResolutionSettings {
    #[serde(default)]
    pub same_release: bool,

    #[serde(default)]
    pub minor: bool,
}

fn default_fetch() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Settings for the local repository tag source
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    /// Refresh tags from the remote before listing them
    #[serde(default = "default_fetch")]
    pub fetch: bool,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            fetch: default_fetch(),
            remote: default_remote(),
        }
    }
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Settings for the GitHub tag source
///
/// The GitHub source is used only when both `owner` and `repository` are known.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubConfig {
    #[serde(default)]
    pub owner: Option<String>,

    #[serde(default)]
    pub repository: Option<String>,

    /// Environment variable holding the API token
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            owner: None,
            repository: None,
            token_env: default_token_env(),
        }
    }
}

/// Which manifest files are searched, and in what order
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ManifestsConfig {
    #[serde(default)]
    pub order: Option<Vec<String>>,
}

impl ManifestsConfig {
    /// Manifest rules for this configuration; the built-in order when unset
    pub fn rules(&self) -> Result<ManifestRules> {
        match &self.order {
            Some(names) => ManifestRules::from_file_names(names),
            None => Ok(ManifestRules::default()),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.newrelver.toml` in the project directory
/// 3. `new-release-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `directory` - Project directory being resolved
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, directory: &Path) -> Result<Config> {
    if let Some(path) = config_path {
        return read_config(path);
    }

    let project_config = directory.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join(USER_CONFIG_FILE);
        if user_config.exists() {
            return read_config(&user_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    tracing::debug!("loading configuration from {}", path.display());
    let config_str = fs::read_to_string(path).map_err(|e| {
        ReleaseVersionError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        ReleaseVersionError::config(format!("Cannot parse '{}': {}", path.display(), e))
    })
}
