#[cfg(not(feature = "unsafe-debug"))]
use crate::sanitize::sanitize_message;
use serde::{Deserialize, Serialize};
use solana_client::client_error::ClientError;
use solana_sdk::signature::SignerError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub enum ScannerError {
    #[error("Wallet address is empty")]
    EmptyAddress,

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("Scan error")]
    ScanFailed(String),

    #[error("Close error")]
    CloseFailed(String),

    #[error("Wallet not connected")]
    WalletNotConnected,

    #[error("Invalid keypair: {0}")]
    KeypairError(String),

    #[error("Transaction not generated by the server")]
    TransactionNotGenerated,

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("{0}")]
    SigningError(String),

    #[error("{0}")]
    BroadcastFailed(String),

    #[error("Recovery unavailable: {0}")]
    RecoveryUnavailable(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ScannerError {
    /// Localization key of the user-facing message, `None` when the underlying
    /// message is shown verbatim.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            ScannerError::EmptyAddress => Some("empty_address"),
            ScannerError::ScanFailed(_) => Some("scan_error"),
            ScannerError::CloseFailed(_) => Some("close_error"),
            ScannerError::WalletNotConnected => Some("wallet_not_connected"),
            ScannerError::TransactionNotGenerated => Some("tx_not_generated"),
            ScannerError::RecoveryUnavailable(_) => Some("recover_unavailable"),
            _ => None,
        }
    }
}

impl From<ClientError> for ScannerError {
    fn from(e: ClientError) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::BroadcastFailed(e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::BroadcastFailed(sanitize_message(&e.to_string()))
        }
    }
}

impl From<SignerError> for ScannerError {
    fn from(_e: SignerError) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::SigningError(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::SigningError(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<bincode::Error> for ScannerError {
    fn from(_e: bincode::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::SerializationError(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::SerializationError(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<bs58::decode::Error> for ScannerError {
    fn from(_e: bs58::decode::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::SerializationError(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::SerializationError(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<std::io::Error> for ScannerError {
    fn from(_e: std::io::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::InternalError(_e.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::InternalError(sanitize_message(&_e.to_string()))
        }
    }
}

impl From<anyhow::Error> for ScannerError {
    fn from(_err: anyhow::Error) -> Self {
        #[cfg(feature = "unsafe-debug")]
        {
            ScannerError::InternalError(_err.to_string())
        }
        #[cfg(not(feature = "unsafe-debug"))]
        {
            ScannerError::InternalError(sanitize_message(&_err.to_string()))
        }
    }
}
