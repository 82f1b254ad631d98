use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{json, Value};
use wallet_scanner_lib::{config::BroadcastMode, Config};

use crate::common::constants::*;

/// mockito server standing in for the scanner backend
pub struct MockBackend {
    pub server: ServerGuard,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self { server: Server::new_async().await }
    }

    /// Fixture config pointed at this server
    pub fn config(&self, broadcast: BroadcastMode) -> Config {
        let mut config = Config::load_config(TEST_CONFIG_PATH).expect("Failed to load fixture");
        config.api.base_url = Some(self.server.url());
        config.network.broadcast = broadcast;
        config
    }

    pub fn scan_body(empty_accounts: &[&str]) -> Value {
        json!({
            "sol_balance": 1.5,
            "tokens": [{ "mint": EMPTY_ACCOUNT_1, "symbol": "USDC", "balance": 0 }],
            "nfts": [],
            "reclaimable_sol": 0.00407856,
            "empty_accounts": empty_accounts,
            "reclaimable_lamports": RENT_PER_ACCOUNT * empty_accounts.len() as u64
        })
    }

    pub async fn mock_scan(&mut self, address: &str, body: Value) -> Mock {
        self.server
            .mock("GET", format!("/api/scan/{address}").as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }

    pub async fn mock_close(&mut self, expected: Value, tx: Option<String>) -> Mock {
        let body = match tx {
            Some(tx) => json!({ "tx": tx }),
            None => json!({}),
        };
        self.server
            .mock("POST", "/api/close")
            .match_body(Matcher::Json(expected))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await
    }

    pub async fn mock_close_failure(&mut self) -> Mock {
        self.server
            .mock("POST", "/api/close")
            .with_status(400)
            .with_body(r#"{"error": "Missing parameters"}"#)
            .expect(1)
            .create_async()
            .await
    }

    pub async fn mock_send_signed_tx(&mut self, hits: usize) -> Mock {
        self.server
            .mock("POST", "/api/send_signed_tx")
            .match_body(Matcher::PartialJson(json!({})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "txid": RELAY_TXID }).to_string())
            .expect(hits)
            .create_async()
            .await
    }
}
