//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ATELIER_STORE_NAME, ATELIER_PAGE_SIZE, ATELIER_STORAGE_PATH,       │
//! │     ATELIER_WALLET_APP_NAME, ATELIER_WALLET_PROJECT_ID,                │
//! │     ATELIER_WALLET_CHAINS=1,137                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/market.atelier.storefront/… (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! storeName = "Atelier"
//! pageSize = 12
//!
//! [wallet]
//! appName = "Atelier"
//! chains = [1, 137]
//! projectId = "your-connectivity-provider-id"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use atelier_core::validation::validate_page_size;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name of the storefront configuration.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to load config: {0}")]
    LoadFailed(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Wallet Configuration
// =============================================================================

/// Settings handed to the wallet/chain connectivity collaborator.
///
/// The storefront core never talks to a chain; it only carries these values
/// to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConfig {
    /// Application name shown in wallet connection prompts.
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Supported chain ids (EIP-155).
    #[serde(default = "default_chains")]
    pub chains: Vec<u64>,

    /// Connectivity-provider project identifier.
    #[serde(default)]
    pub project_id: Option<String>,
}

fn default_app_name() -> String {
    "Atelier".to_string()
}

fn default_chains() -> Vec<u64> {
    vec![1, 137] // Ethereum mainnet, Polygon
}

impl Default for WalletConfig {
    fn default() -> Self {
        WalletConfig {
            app_name: default_app_name(),
            chains: default_chains(),
            project_id: None,
        }
    }
}

// =============================================================================
// Storefront Configuration
// =============================================================================

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Display name of the storefront.
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Catalog listings per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Override for the credential mirror file.
    /// Default: `credentials.json` in the platform data directory.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Wallet/chain connectivity settings.
    #[serde(default)]
    pub wallet: WalletConfig,
}

fn default_store_name() -> String {
    "Atelier".to_string()
}

fn default_page_size() -> u32 {
    12
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: default_store_name(),
            page_size: default_page_size(),
            storage_path: None,
            wallet: WalletConfig::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_page_size(self.page_size).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        if self.wallet.chains.is_empty() {
            return Err(ConfigError::Invalid(
                "wallet.chains must list at least one chain".into(),
            ));
        }

        if let Some(ref id) = self.wallet.project_id {
            if id.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "wallet.project_id must not be empty when set".into(),
                ));
            }
        }

        Ok(())
    }

    /// Applies `ATELIER_*` overrides from `lookup` (the process environment
    /// in production). Unparsable values are logged and ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("ATELIER_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(size) = lookup("ATELIER_PAGE_SIZE") {
            match size.parse::<u32>() {
                Ok(s) => self.page_size = s,
                Err(_) => warn!(value = %size, "Ignoring invalid ATELIER_PAGE_SIZE"),
            }
        }

        if let Some(path) = lookup("ATELIER_STORAGE_PATH") {
            debug!(path = %path, "Overriding storage path from environment");
            self.storage_path = Some(PathBuf::from(path));
        }

        if let Some(app_name) = lookup("ATELIER_WALLET_APP_NAME") {
            self.wallet.app_name = app_name;
        }

        if let Some(id) = lookup("ATELIER_WALLET_PROJECT_ID") {
            self.wallet.project_id = Some(id);
        }

        if let Some(chains) = lookup("ATELIER_WALLET_CHAINS") {
            let parsed: Result<Vec<u64>, _> = chains
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse::<u64>)
                .collect();
            match parsed {
                Ok(ids) => self.wallet.chains = ids,
                Err(_) => warn!(value = %chains, "Ignoring invalid ATELIER_WALLET_CHAINS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("market", "atelier", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
