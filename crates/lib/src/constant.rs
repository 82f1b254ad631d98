pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

// Backend
pub const PRODUCTION_API_URL: &str = "https://wallet-tool-1.onrender.com";
pub const DEVELOPMENT_API_URL: &str = "http://localhost:5000";
pub const SCAN_PATH: &str = "api/scan";
pub const CLOSE_PATH: &str = "api/close";
pub const SEND_SIGNED_TX_PATH: &str = "api/send_signed_tx";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// Network
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_EXPLORER_TX_URL: &str = "https://solscan.io/tx/";

// Build-time override of the backend base URL
pub const BUILD_API_URL: Option<&str> = option_env!("WALLET_SCANNER_API_URL");
