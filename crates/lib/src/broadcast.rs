//! Submission of signed transactions to the network.

use async_trait::async_trait;
use mockall::automock;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::transaction::VersionedTransaction;
use std::{sync::Arc, time::Duration};

use crate::{
    api::BackendClient,
    config::{BroadcastMode, Config},
    constant::DEFAULT_RPC_TIMEOUT_SECS,
    error::ScannerError,
    transaction::VersionedTransactionOps,
};

#[automock]
#[async_trait]
pub trait TransactionBroadcaster: Send + Sync {
    /// Sends a fully signed transaction and returns its transaction id
    async fn broadcast(&self, transaction: &VersionedTransaction) -> Result<String, ScannerError>;
}

#[async_trait]
impl TransactionBroadcaster for RpcClient {
    async fn broadcast(&self, transaction: &VersionedTransaction) -> Result<String, ScannerError> {
        log::info!("Broadcasting transaction via RPC");
        let signature = self.send_transaction(transaction).await.map_err(|e| {
            let error = ScannerError::from(e);
            log::warn!("Broadcast failed: {error}");
            error
        })?;
        Ok(signature.to_string())
    }
}

/// Relays through the backend's `send_signed_tx` endpoint
pub struct BackendBroadcaster {
    client: Arc<BackendClient>,
}

impl BackendBroadcaster {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionBroadcaster for BackendBroadcaster {
    async fn broadcast(&self, transaction: &VersionedTransaction) -> Result<String, ScannerError> {
        log::info!("Broadcasting transaction via backend relay");
        let encoded = transaction.encode_b64_transaction()?;
        self.client.send_signed_transaction(&encoded).await
    }
}

/// Sends with preflight at `confirmed`
pub fn rpc_broadcaster(rpc_url: &str) -> Arc<RpcClient> {
    Arc::new(RpcClient::new_with_timeout_and_commitment(
        rpc_url.to_string(),
        Duration::from_secs(DEFAULT_RPC_TIMEOUT_SECS),
        CommitmentConfig::confirmed(),
    ))
}

/// Picks the broadcaster configured in `[network]`
pub fn broadcaster_from_config(
    config: &Config,
    backend: Arc<BackendClient>,
) -> Arc<dyn TransactionBroadcaster> {
    match config.network.broadcast {
        BroadcastMode::Rpc => rpc_broadcaster(&config.network.rpc_url),
        BroadcastMode::Backend => Arc::new(BackendBroadcaster::new(backend)),
    }
}
