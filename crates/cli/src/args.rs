use clap::{Parser, ValueEnum};
use wallet_scanner_lib::{Config, Language};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum LoggingFormat {
    #[default]
    Standard,
    Json,
}

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "wallet-scanner")]
pub struct GlobalArgs {
    /// Path to the configuration file (TOML format), optional
    #[arg(long, default_value = "wallet-scanner.toml")]
    pub config: String,

    /// Scanner backend base URL
    #[arg(long, env = "WALLET_SCANNER_API_URL")]
    pub api_url: Option<String>,

    /// Solana RPC endpoint URL used for broadcasting
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// Interface language (it, en)
    #[arg(long, env = "WALLET_SCANNER_LANG")]
    pub lang: Option<Language>,

    #[arg(long, value_enum, default_value_t = LoggingFormat::Standard)]
    pub logging_format: LoggingFormat,
}

impl GlobalArgs {
    /// Flags win over the file
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(api_url) = &self.api_url {
            config.api.base_url = Some(api_url.clone());
        }
        if let Some(rpc_url) = &self.rpc_url {
            config.network.rpc_url = rpc_url.clone();
        }
        if let Some(language) = self.lang {
            config.ui.language = language;
        }
    }
}
