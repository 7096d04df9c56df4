//! # Storefront Configuration
//!
//! ## Configuration Sources (Priority Order, highest first)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Command-line flags        --api-url, --db                          │
//! │  2. Environment variables     ROCKETSHOES_API_URL, ...                 │
//! │  3. TOML config file          storefront.toml in the config dir        │
//! │  4. Defaults (this file)                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [cart]
//! storage_key = "@RocketShoes:cart"
//! check_stock_on_first_add = false
//!
//! [storage]
//! database_path = "/var/lib/rocketshoes/storefront.db"
//!
//! [display]
//! currency_symbol = "R$"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use rocketshoes_core::DEFAULT_CART_KEY;

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Sections
// =============================================================================

/// Where the inventory and catalog services live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; `/stock/{id}` and `/products/{id}` are appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Cart behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSettings {
    /// Slot key the cart is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Check stock before adding a product that is not yet in the cart.
    /// Off by default: the storefront has always allowed the first unit.
    #[serde(default)]
    pub check_stock_on_first_add: bool,
}

fn default_storage_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            storage_key: default_storage_key(),
            check_stock_on_first_add: false,
        }
    }
}

/// Local persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// SQLite file. `None` uses the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

/// Output formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub cart: CartSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else `storefront.toml` in the config dir)
    /// 3. Environment variables
    ///
    /// An explicitly given `config_path` must exist; the default one may not.
    /// The result is not validated: callers apply their own overrides first,
    /// then call [`validate`](Self::validate).
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|name| std::env::var(name).ok());

        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `ROCKETSHOES_*` overrides read through `var`.
    ///
    /// Unparseable numeric or boolean values are logged and ignored.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(url) = var("ROCKETSHOES_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = var("ROCKETSHOES_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid ROCKETSHOES_API_TIMEOUT_SECS"),
            }
        }

        if let Some(key) = var("ROCKETSHOES_CART_KEY") {
            self.cart.storage_key = key;
        }

        if let Some(flag) = var("ROCKETSHOES_CHECK_STOCK_ON_FIRST_ADD") {
            match flag.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.cart.check_stock_on_first_add = true,
                "0" | "false" | "no" => self.cart.check_stock_on_first_add = false,
                _ => warn!(value = %flag, "Ignoring invalid ROCKETSHOES_CHECK_STOCK_ON_FIRST_ADD"),
            }
        }

        if let Some(path) = var("ROCKETSHOES_DB_PATH") {
            self.storage.database_path = Some(PathBuf::from(path));
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("must start with http:// or https://, got: {}", url),
            });
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }

        if self.cart.storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "cart.storage_key".to_string(),
                reason: "must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Resolves the SQLite file path, falling back to the platform data dir:
    /// - **macOS**: `~/Library/Application Support/com.rocketshoes.storefront/storefront.db`
    /// - **Windows**: `%APPDATA%\rocketshoes\storefront\data\storefront.db`
    /// - **Linux**: `~/.local/share/storefront/storefront.db`
    pub fn database_path(&self) -> ConfigResult<PathBuf> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }

        let dirs = Self::project_dirs().ok_or(ConfigError::NoDataDir)?;
        Ok(dirs.data_dir().join("storefront.db"))
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "rocketshoes", "storefront")
    }
}
