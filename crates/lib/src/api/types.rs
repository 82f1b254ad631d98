use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::constant::LAMPORTS_PER_SOL;

/// Backend scan of one wallet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub sol_balance: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tokens: Vec<TokenDescriptor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nfts: Vec<NftDescriptor>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reclaimable_sol: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub empty_accounts: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reclaimable_lamports: u64,
}

impl ScanResult {
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            empty_accounts: self.empty_accounts.clone(),
            reclaimable_lamports: self.reclaimable_lamports,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub balance: Option<Decimal>,
    #[serde(default)]
    pub price_usd: Option<Decimal>,
    #[serde(default)]
    pub value_usd: Option<Decimal>,
    #[serde(default)]
    pub decimals: Option<u8>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NftDescriptor {
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The part of a scan the recover flow needs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub empty_accounts: Vec<String>,
    pub reclaimable_lamports: u64,
}

impl ScanSummary {
    pub fn has_empty_accounts(&self) -> bool {
        !self.empty_accounts.is_empty()
    }

    pub fn reclaimable_sol(&self) -> Decimal {
        Decimal::from(self.reclaimable_lamports) / Decimal::from(LAMPORTS_PER_SOL)
    }

    /// Order-independent SHA-256 of the account list, hex encoded
    pub fn fingerprint(&self) -> String {
        let mut accounts: Vec<&str> = self.empty_accounts.iter().map(String::as_str).collect();
        accounts.sort_unstable();
        accounts.dedup();

        let mut hasher = Sha256::new();
        for account in accounts {
            hasher.update(account.as_bytes());
            hasher.update([0u8]);
        }
        hex::encode(hasher.finalize())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseRequest {
    pub user_pubkey: String,
    pub empty_accounts: Vec<String>,
    pub reclaimable_lamports: u64,
}

impl CloseRequest {
    pub fn new(user_pubkey: String, summary: &ScanSummary) -> Self {
        Self {
            user_pubkey,
            empty_accounts: summary.empty_accounts.clone(),
            reclaimable_lamports: summary.reclaimable_lamports,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseResponse {
    #[serde(default)]
    pub tx: Option<String>,
}

impl CloseResponse {
    /// The base64 payload, `None` when missing or blank
    pub fn transaction_payload(&self) -> Option<&str> {
        self.tx.as_deref().map(str::trim).filter(|tx| !tx.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendSignedTxRequest {
    pub signed_tx: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SendSignedTxResponse {
    #[serde(default)]
    pub txid: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
