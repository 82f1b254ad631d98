use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{
    types::{SendSignedTxRequest, SendSignedTxResponse},
    CloseRequest, CloseResponse, ScanResult, ScannerApi,
};
use crate::{
    config::ApiConfig,
    constant::{CLOSE_PATH, SCAN_PATH, SEND_SIGNED_TX_PATH},
    error::ScannerError,
    sanitize_error,
};

/// HTTP client for the scanner backend
pub struct BackendClient {
    client: Client,
    base_url: Url,
}

impl BackendClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ScannerError> {
        let client = Client::builder().timeout(config.timeout()).build().map_err(|e| {
            ScannerError::ConfigError(format!("Failed to build HTTP client: {}", sanitize_error!(e)))
        })?;

        Ok(Self { client, base_url: config.parsed_base_url()? })
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` and an optional trailing segment to the base URL, each
    /// segment percent-encoded
    fn endpoint(&self, path: &str, trailing: Option<&str>) -> Result<Url, ScannerError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ScannerError::ConfigError(format!("Base URL {} cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(path.split('/'));
            if let Some(segment) = trailing {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    /// Relays an already signed transaction through the backend, returning its id
    pub async fn send_signed_transaction(&self, encoded: &str) -> Result<String, ScannerError> {
        let url = self.endpoint(SEND_SIGNED_TX_PATH, None)?;
        let body = SendSignedTxRequest { signed_tx: encoded.to_string() };

        let response = self.client.post(url).json(&body).send().await.map_err(|e| {
            ScannerError::BroadcastFailed(format!("Backend relay failed: {}", sanitize_error!(e)))
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<SendSignedTxResponse>()
                .await
                .ok()
                .and_then(|parsed| parsed.error)
                .map(value_message)
                .unwrap_or_else(|| status.to_string());
            log::warn!("Relay returned {status}");
            return Err(ScannerError::BroadcastFailed(sanitize_error!(detail)));
        }

        let parsed: SendSignedTxResponse = response.json().await.map_err(|e| {
            ScannerError::BroadcastFailed(format!(
                "Failed to parse relay response: {}",
                sanitize_error!(e)
            ))
        })?;

        parsed.txid.map(value_message).ok_or_else(|| {
            ScannerError::BroadcastFailed("Relay response did not include a txid".to_string())
        })
    }
}

#[async_trait]
impl ScannerApi for BackendClient {
    async fn scan(&self, address: &str) -> Result<ScanResult, ScannerError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(ScannerError::EmptyAddress);
        }

        let url = self.endpoint(SCAN_PATH, Some(address))?;
        log::info!("Requesting scan for {address}");

        let response = self.client.get(url).send().await.map_err(|e| {
            let detail = sanitize_error!(e);
            log::warn!("Scan request failed: {detail}");
            ScannerError::ScanFailed(detail)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Scan for {address} returned {status}");
            return Err(ScannerError::ScanFailed(format!("HTTP {status}")));
        }

        let result: ScanResult = response.json().await.map_err(|e| {
            let detail = sanitize_error!(e);
            log::warn!("Failed to parse scan response: {detail}");
            ScannerError::ScanFailed(detail)
        })?;

        log::debug!(
            "Scan of {address}: {} tokens, {} nfts, {} empty accounts",
            result.tokens.len(),
            result.nfts.len(),
            result.empty_accounts.len()
        );
        Ok(result)
    }

    async fn close(&self, request: &CloseRequest) -> Result<CloseResponse, ScannerError> {
        let url = self.endpoint(CLOSE_PATH, None)?;
        log::info!(
            "Requesting close transaction for {} ({} accounts, {} lamports)",
            request.user_pubkey,
            request.empty_accounts.len(),
            request.reclaimable_lamports
        );

        let response = self.client.post(url).json(request).send().await.map_err(|e| {
            let detail = sanitize_error!(e);
            log::warn!("Close request failed: {detail}");
            ScannerError::CloseFailed(detail)
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Close request returned {status}");
            return Err(ScannerError::CloseFailed(format!("HTTP {status}")));
        }

        response.json::<CloseResponse>().await.map_err(|e| {
            let detail = sanitize_error!(e);
            log::warn!("Failed to parse close response: {detail}");
            ScannerError::CloseFailed(detail)
        })
    }
}

fn value_message(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
