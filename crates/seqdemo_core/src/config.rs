use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error_handler::DemoError;

/// Environment variable that overrides the project access key.
pub const ACCESS_KEY_ENV: &str = "SEQUENCE_PROJECT_ACCESS_KEY";

/// Public demo access key used when the environment does not provide one.
pub const DEFAULT_PROJECT_ACCESS_KEY: &str = "AQAAAAAAAJbd_5JOcE50AqglZCtvu51YlGI";

pub const DEFAULT_APP_NAME: &str = "Sequence Web SDK Demo";
pub const DEFAULT_WALLET_URL: &str = "https://v3.sequence-dev.app";

/// Arbitrum Sepolia, Arbitrum One, Ethereum, Polygon.
const DEFAULT_CHAIN_IDS: [u64; 4] = [421_614, 42_161, 1, 137];
const DEFAULT_CHAIN_ID: u64 = 421_614;

/// Color scheme the UI starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Display options for the sign-in prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInOptions {
    pub project_name: String,
    pub descriptive_socials: bool,
    pub disable_tooltip_for_descriptive_socials: bool,
}

impl Default for SignInOptions {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_APP_NAME.into(),
            descriptive_socials: true,
            disable_tooltip_for_descriptive_socials: true,
        }
    }
}

// ---------------------------------------------------------------------------
// ConnectConfig
// ---------------------------------------------------------------------------

/// Connection configuration stored at `~/.seqdemo/config.json`.
///
/// The project access key is **never** written to the JSON file. It comes from
/// `SEQUENCE_PROJECT_ACCESS_KEY`, falling back to the public demo key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectConfig {
    #[serde(skip)]
    pub project_access_key: String,

    pub app_name: String,
    pub wallet_url: String,
    pub default_theme: ThemeMode,
    pub sign_in: SignInOptions,

    // Networks
    pub chain_ids: Vec<u64>,
    pub default_chain_id: u64,
    /// Custom RPC endpoints keyed by chain id.
    pub rpc_overrides: BTreeMap<u64, String>,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            project_access_key: DEFAULT_PROJECT_ACCESS_KEY.into(),
            app_name: DEFAULT_APP_NAME.into(),
            wallet_url: DEFAULT_WALLET_URL.into(),
            default_theme: ThemeMode::Light,
            sign_in: SignInOptions::default(),
            chain_ids: DEFAULT_CHAIN_IDS.to_vec(),
            default_chain_id: DEFAULT_CHAIN_ID,
            rpc_overrides: BTreeMap::new(),
        }
    }
}

impl ConnectConfig {
    /// Returns the base config directory: `~/.seqdemo/`
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".seqdemo"))
    }

    /// Returns the config file path: `~/.seqdemo/config.json`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.json"))
    }

    /// Returns the logs directory: `~/.seqdemo/logs/`
    pub fn logs_dir() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("logs"))
    }

    /// Ensures all required directories exist.
    pub fn ensure_dirs() -> Result<()> {
        let dirs = [Self::base_dir()?, Self::logs_dir()?];
        for dir in &dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Loads config from disk (creating the default file if missing) and
    /// resolves the access key from the environment.
    pub fn load() -> Result<Self> {
        Self::ensure_dirs()?;
        let path = Self::config_path()?;
        let mut config = Self::load_from_path(&path)?;
        config.project_access_key = resolve_access_key(std::env::var(ACCESS_KEY_ENV).ok());
        Ok(config)
    }

    /// Load config from a specific file path. The access key is left at the
    /// built-in default; [`ConnectConfig::load`] applies the env override.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let mut config: Self =
                serde_json::from_str(&content).with_context(|| "Failed to parse config.json")?;
            config.project_access_key = DEFAULT_PROJECT_ACCESS_KEY.into();
            info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to_path(path)?;
            info!("Created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config to a specific file path (access key excluded).
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Check the invariants the provider relies on.
    pub fn validate(&self) -> Result<(), DemoError> {
        if self.chain_ids.is_empty() {
            return Err(DemoError::Config("at least one chain id is required".into()));
        }

        let mut seen = HashSet::new();
        for id in &self.chain_ids {
            if !seen.insert(*id) {
                return Err(DemoError::Config(format!("duplicate chain id {id}")));
            }
        }

        if !self.chain_ids.contains(&self.default_chain_id) {
            return Err(DemoError::Config(format!(
                "default chain {} is not in the chain list",
                self.default_chain_id
            )));
        }

        if !is_http_url(&self.wallet_url) {
            return Err(DemoError::Config(format!(
                "invalid wallet URL: {}",
                self.wallet_url
            )));
        }

        if self.project_access_key.trim().is_empty() {
            return Err(DemoError::Config("project access key is empty".into()));
        }

        Ok(())
    }
}

/// Pick the access key: a non-blank environment value wins, otherwise the
/// built-in demo key.
pub fn resolve_access_key(env_value: Option<String>) -> String {
    match env_value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => DEFAULT_PROJECT_ACCESS_KEY.to_string(),
    }
}

fn is_http_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some()
        }
        Err(_) => false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
