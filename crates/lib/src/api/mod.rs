pub mod client;
pub mod types;

use async_trait::async_trait;
use mockall::automock;

use crate::error::ScannerError;

pub use client::BackendClient;
pub use types::{
    CloseRequest, CloseResponse, NftDescriptor, ScanResult, ScanSummary, TokenDescriptor,
};

/// The two backend calls the scan and recover flows depend on
#[automock]
#[async_trait]
pub trait ScannerApi: Send + Sync {
    async fn scan(&self, address: &str) -> Result<ScanResult, ScannerError>;

    async fn close(&self, request: &CloseRequest) -> Result<CloseResponse, ScannerError>;
}
