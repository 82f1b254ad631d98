use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use url::Url;

use crate::{
    constant::{
        BUILD_API_URL, DEFAULT_EXPLORER_TX_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_RPC_URL,
        DEVELOPMENT_API_URL, PRODUCTION_API_URL,
    },
    error::ScannerError,
    i18n::Language,
    sanitize_error,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Which backend deployment to talk to when no explicit base URL is set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiEnvironment {
    Development,
    Production,
}

impl Default for ApiEnvironment {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ApiEnvironment::Development
        } else {
            ApiEnvironment::Production
        }
    }
}

impl ApiEnvironment {
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiEnvironment::Development => DEVELOPMENT_API_URL,
            ApiEnvironment::Production => PRODUCTION_API_URL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub environment: ApiEnvironment,
    #[serde(default = "default_request_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            environment: ApiEnvironment::default(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Explicit base URL, then the build-time override, then the environment default
    pub fn resolved_base_url(&self) -> &str {
        self.base_url.as_deref().or(BUILD_API_URL).unwrap_or_else(|| self.environment.base_url())
    }

    pub fn parsed_base_url(&self) -> Result<Url, ScannerError> {
        Url::parse(self.resolved_base_url()).map_err(|e| {
            ScannerError::ConfigError(format!("Invalid api base_url: {}", sanitize_error!(e)))
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Where signed transactions are submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadcastMode {
    /// Straight to the Solana JSON-RPC endpoint
    #[default]
    Rpc,
    /// Relayed through the backend's `send_signed_tx` endpoint
    Backend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_explorer_tx_url")]
    pub explorer_tx_url: String,
    #[serde(default)]
    pub broadcast: BroadcastMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            explorer_tx_url: DEFAULT_EXPLORER_TX_URL.to_string(),
            broadcast: BroadcastMode::default(),
        }
    }
}

impl NetworkConfig {
    pub fn explorer_link(&self, transaction_id: &str) -> String {
        format!("{}{}", self.explorer_tx_url, transaction_id)
    }
}

/// How a successful recovery gates further attempts in the same session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPolicy {
    /// One recovery per session, whatever later scans find
    #[default]
    OneShot,
    /// One recovery per distinct set of empty accounts
    PerScan,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub recovery_policy: RecoveryPolicy,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}

fn default_explorer_tx_url() -> String {
    DEFAULT_EXPLORER_TX_URL.to_string()
}

impl Config {
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ScannerError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ScannerError::ConfigError(format!("Failed to read config file: {}", sanitize_error!(e)))
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config, ScannerError> {
        let config: Config = toml::from_str(contents).map_err(|e| {
            ScannerError::ConfigError(format!(
                "Failed to parse config file: {}",
                sanitize_error!(e)
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise falls back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Config, ScannerError> {
        if path.as_ref().exists() {
            Self::load_config(path)
        } else {
            log::debug!("No config file at {}, using defaults", path.as_ref().display());
            Ok(Config::default())
        }
    }

    pub fn validate(&self) -> Result<(), ScannerError> {
        self.api.parsed_base_url()?;

        Url::parse(&self.network.rpc_url).map_err(|e| {
            ScannerError::ConfigError(format!("Invalid network rpc_url: {}", sanitize_error!(e)))
        })?;

        if self.network.explorer_tx_url.trim().is_empty() {
            return Err(ScannerError::ConfigError("explorer_tx_url cannot be empty".to_string()));
        }

        if self.api.timeout_secs == 0 {
            return Err(ScannerError::ConfigError("api timeout_secs must be > 0".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let toml = r#"
            [api]
            base_url = "https://backend.example.com"
            environment = "production"
            timeout_secs = 10

            [network]
            rpc_url = "https://rpc.example.com"
            explorer_tx_url = "https://explorer.solana.com/tx/"
            broadcast = "backend"

            [ui]
            language = "en"
            recovery_policy = "per_scan"
        "#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.api.resolved_base_url(), "https://backend.example.com");
        assert_eq!(config.api.environment, ApiEnvironment::Production);
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.network.rpc_url, "https://rpc.example.com");
        assert_eq!(config.network.broadcast, BroadcastMode::Backend);
        assert_eq!(config.ui.language, Language::En);
        assert_eq!(config.ui.recovery_policy, RecoveryPolicy::PerScan);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.network.rpc_url, DEFAULT_RPC_URL);
        assert_eq!(config.network.explorer_tx_url, DEFAULT_EXPLORER_TX_URL);
        assert_eq!(config.network.broadcast, BroadcastMode::Rpc);
        assert_eq!(config.api.timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.ui.language, Language::It);
        assert_eq!(config.ui.recovery_policy, RecoveryPolicy::OneShot);
    }

    #[test]
    fn test_environment_base_urls() {
        let api = ApiConfig {
            base_url: None,
            environment: ApiEnvironment::Production,
            timeout_secs: 30,
        };
        if BUILD_API_URL.is_none() {
            assert_eq!(api.resolved_base_url(), PRODUCTION_API_URL);
        }
        assert_eq!(ApiEnvironment::Development.base_url(), DEVELOPMENT_API_URL);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = Config::from_toml_str("[api]\nbase_url = \"not a url\"\n");
        assert!(matches!(result, Err(ScannerError::ConfigError(_))));

        let result = Config::from_toml_str("[api]\ntimeout_secs = 0\n");
        assert!(matches!(result, Err(ScannerError::ConfigError(_))));

        let result = Config::from_toml_str("[ui]\nlanguage = \"de\"\n");
        assert!(matches!(result, Err(ScannerError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[network]\nrpc_url = \"http://127.0.0.1:8899\"").unwrap();

        let config = Config::load_config(file.path()).unwrap();
        assert_eq!(config.network.rpc_url, "http://127.0.0.1:8899");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("/nonexistent/wallet-scanner.toml").unwrap();
        assert_eq!(config.network.rpc_url, DEFAULT_RPC_URL);

        let result = Config::load_config("/nonexistent/wallet-scanner.toml");
        assert!(matches!(result, Err(ScannerError::ConfigError(_))));
    }

    #[test]
    fn test_explorer_link() {
        let network = NetworkConfig::default();
        assert_eq!(network.explorer_link("5abc"), "https://solscan.io/tx/5abc");
    }
}
