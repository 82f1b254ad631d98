use std::sync::Arc;

use solana_client::nonblocking::rpc_client::RpcClient;
use wallet_scanner_lib::{
    broadcaster_from_config, config::BroadcastMode, App, BackendClient, Config, KeypairWallet,
    TransactionBroadcaster,
};

/// App wired to the real HTTP client; RPC broadcasts go to a mock RPC client
pub fn build_app(config: &Config, wallet: KeypairWallet) -> App<KeypairWallet> {
    let backend = Arc::new(BackendClient::new(&config.api).expect("Failed to build client"));
    let broadcaster: Arc<dyn TransactionBroadcaster> = match config.network.broadcast {
        BroadcastMode::Rpc => Arc::new(RpcClient::new_mock("succeeds".to_string())),
        BroadcastMode::Backend => broadcaster_from_config(config, backend.clone()),
    };
    App::new(config, backend, broadcaster, wallet)
}
