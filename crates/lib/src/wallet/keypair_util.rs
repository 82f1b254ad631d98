use crate::{error::ScannerError, sanitize_error};
use solana_sdk::signature::Keypair;
use std::{fs, path::PathBuf};

/// Loads wallet keypairs from the formats the Solana tooling produces
pub struct KeypairUtil;

impl KeypairUtil {
    /// Accepts, in order:
    /// - a path to a `solana-keygen` JSON file (`~/` is expanded)
    /// - a U8Array string `"[0, 1, 2, ...]"`
    /// - a base58 encoded 64-byte secret key
    pub fn from_private_key_string(private_key: &str) -> Result<Keypair, ScannerError> {
        let private_key = private_key.trim();
        if private_key.is_empty() {
            return Err(ScannerError::KeypairError("Private key is empty".to_string()));
        }

        if let Ok(file_content) = fs::read_to_string(Self::expand_home(private_key)) {
            return Self::from_json_keypair(&file_content);
        }

        if private_key.starts_with('[') && private_key.ends_with(']') {
            return Self::from_u8_array_string(private_key);
        }

        Self::from_base58_safe(private_key)
    }

    pub fn from_base58_safe(private_key: &str) -> Result<Keypair, ScannerError> {
        let decoded = bs58::decode(private_key).into_vec().map_err(|e| {
            ScannerError::KeypairError(format!("Invalid base58 string: {}", sanitize_error!(e)))
        })?;

        Self::from_bytes(&decoded)
    }

    pub fn from_u8_array_string(array_str: &str) -> Result<Keypair, ScannerError> {
        let trimmed = array_str.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| {
                ScannerError::KeypairError(
                    "U8Array string must start with '[' and end with ']'".to_string(),
                )
            })?;

        if inner.trim().is_empty() {
            return Err(ScannerError::KeypairError("U8Array string cannot be empty".to_string()));
        }

        let bytes = inner
            .split(',')
            .map(|s| s.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|e| {
                ScannerError::KeypairError(format!("Failed to parse U8Array: {}", sanitize_error!(e)))
            })?;

        Self::from_bytes(&bytes)
    }

    pub fn from_json_keypair(json_content: &str) -> Result<Keypair, ScannerError> {
        let bytes = serde_json::from_str::<Vec<u8>>(json_content).map_err(|_| {
            ScannerError::KeypairError(
                "Invalid JSON keypair format. Expected a JSON array of 64 bytes".to_string(),
            )
        })?;

        Self::from_bytes(&bytes)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Keypair, ScannerError> {
        if bytes.len() != 64 {
            return Err(ScannerError::KeypairError(format!(
                "Private key must be exactly 64 bytes, got {}",
                bytes.len()
            )));
        }

        Keypair::try_from(bytes).map_err(|e| {
            ScannerError::KeypairError(format!("Invalid private key bytes: {}", sanitize_error!(e)))
        })
    }

    fn expand_home(path: &str) -> PathBuf {
        match (path.strip_prefix("~/"), std::env::var_os("HOME")) {
            (Some(rest), Some(home)) => PathBuf::from(home).join(rest),
            _ => PathBuf::from(path),
        }
    }
}
