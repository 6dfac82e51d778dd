//! Client settings
//!
//! Layered with the `config` crate: built-in defaults, then the first of the
//! well-known config files that exists, then an explicit file, then
//! `SAYHI__SECTION__KEY` environment variables.

use crate::error::CoreResult;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config files checked when no explicit file is given
const CONFIG_PATHS: [&str; 2] = ["sayhi.toml", "config/sayhi.toml"];

/// Client settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Backend API settings
    #[serde(default)]
    pub api: ApiSettings,
    /// State directory override
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Backend origin; the `/api` base path is appended by the client
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    /// Request timeout as a duration
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Load settings from defaults, config files and the environment
    pub fn load(explicit: Option<&Path>) -> CoreResult<Self> {
        let mut builder = Config::builder();

        // Start with defaults
        builder = builder.add_source(Config::try_from(&Self::default())?);

        for path in &CONFIG_PATHS {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path).required(false));
            }
        }

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        // Environment variables with SAYHI prefix override everything
        builder = builder.add_source(
            Environment::with_prefix("SAYHI")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
