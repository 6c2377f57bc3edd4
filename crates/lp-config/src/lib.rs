//! # lp-config
//!
//! Layered configuration loading for Launchpad using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LAUNCHPAD_*` prefix, `__` as separator)
//! 2. `NEXT_PUBLIC_API_URL` (accepted as an alias for `api.base_url`)
//! 3. Project-level `.launchpad/config.toml`
//! 4. User-level `~/.config/launchpad/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LAUNCHPAD_API__BASE_URL` -> `api.base_url`,
//! `LAUNCHPAD_CLERK__SECRET_KEY` -> `clerk.secret_key`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lp_config::LaunchpadConfig;
//!
//! let config = LaunchpadConfig::load_with_dotenv().expect("config");
//! match config.api.base_url() {
//!     Ok(url) => println!("backend at {url}"),
//!     Err(error) => eprintln!("{error}"),
//! }
//! ```

mod api;
mod auth;
mod clerk;
mod error;
mod history;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use clerk::ClerkConfig;
pub use error::ConfigError;
pub use history::HistoryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable the web front end used for the backend URL.
pub const LEGACY_API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";

/// Placeholder shown instead of secret values.
const REDACTED: &str = "***";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LaunchpadConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub clerk: ClerkConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

impl LaunchpadConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".launchpad/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: the web front end's variable name
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_API_URL_ENV])
                .map(|_| "api.base_url".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("LAUNCHPAD_").split("__"))
    }

    /// Copy of this config with secrets replaced, safe to print.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.clerk.secret_key.is_empty() {
            copy.clerk.secret_key = REDACTED.to_string();
        }
        copy
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("launchpad").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir looking
    /// for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
