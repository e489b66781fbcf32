use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{ENV_PREFIX, PASS_VAR, SERVER_VAR, USER_VAR};
use crate::utils::AghError;

/// Raw configuration as merged from file and environment
///
/// Every field is optional here; `validate` turns this into the
/// credentials the API client actually requires.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the management API (e.g. http://192.168.1.1/control)
    #[serde(default)]
    pub server: Option<String>,

    /// Basic auth username
    #[serde(default)]
    pub user: Option<String>,

    /// Basic auth password
    #[serde(default)]
    pub pass: Option<String>,
}

/// Validated, immutable connection settings handed to the API client
#[derive(Debug, Clone)]
pub struct Credentials {
    pub server: String,
    pub user: String,
    pub pass: String,
}

impl Config {
    /// Check that every required value is present, naming the missing
    /// environment variables otherwise. Runs before any network call.
    pub fn validate(self) -> Result<Credentials, AghError> {
        let mut missing = Vec::new();
        if self.server.as_deref().map_or(true, str::is_empty) {
            missing.push(SERVER_VAR);
        }
        if self.user.as_deref().map_or(true, str::is_empty) {
            missing.push(USER_VAR);
        }
        if self.pass.as_deref().map_or(true, str::is_empty) {
            missing.push(PASS_VAR);
        }
        if !missing.is_empty() {
            return Err(AghError::Config(format!(
                "{} environment variables undefined",
                missing.join(", ")
            )));
        }

        Ok(Credentials {
            // Routes already start with a slash
            server: self.server.unwrap_or_default().trim_end_matches('/').to_string(),
            user: self.user.unwrap_or_default(),
            pass: self.pass.unwrap_or_default(),
        })
    }
}

/// Load configuration from multiple sources
///
/// Merge order (later wins): defaults, global config file, explicit
/// `--config` file, `AGH_`-prefixed environment variables.
pub fn load_config(file: Option<&Path>) -> Result<Config, AghError> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    // Add global config if it exists
    if let Some(global_config) = global_config_file() {
        if global_config.exists() {
            figment = figment.merge(Toml::file(&global_config));
        }
    }

    // Add explicit config file if one was passed on the command line
    if let Some(file) = file {
        figment = figment.merge(Toml::file(file));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX));

    figment
        .extract()
        .map_err(|err| AghError::Config(err.to_string()))
}

/// Path of the global configuration file, if a config dir can be resolved
fn global_config_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aghblock").map(|dirs| dirs.config_dir().join("config.toml"))
}
