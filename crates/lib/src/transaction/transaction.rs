use bincode::Options;
use solana_message::VersionedMessage;
use solana_sdk::{signature::Signature, transaction::VersionedTransaction};

use crate::{error::ScannerError, sanitize_error};
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub struct TransactionUtil {}

impl TransactionUtil {
    /// Decodes the backend's base64 payload.
    ///
    /// Accepts a serialized transaction (versioned or legacy). A bare serialized
    /// message is also accepted and wrapped with empty signature slots.
    pub fn decode_b64_transaction(encoded: &str) -> Result<VersionedTransaction, ScannerError> {
        let decoded = STANDARD.decode(encoded.trim()).map_err(|e| {
            ScannerError::InvalidTransaction(format!(
                "Failed to decode base64 transaction: {}",
                sanitize_error!(e)
            ))
        })?;

        if decoded.is_empty() {
            return Err(ScannerError::InvalidTransaction("Empty transaction payload".to_string()));
        }

        if let Ok(transaction) = Self::strict().deserialize::<VersionedTransaction>(&decoded) {
            let required = transaction.message.header().num_required_signatures as usize;
            if transaction.signatures.len() == required {
                return Ok(transaction);
            }
        }

        let message: VersionedMessage = Self::strict().deserialize(&decoded).map_err(|e| {
            ScannerError::InvalidTransaction(format!(
                "Failed to deserialize transaction: {}",
                sanitize_error!(e)
            ))
        })?;

        log::debug!("Close payload is a bare message, wrapping it as an unsigned transaction");
        Ok(Self::new_unsigned_versioned_transaction(message))
    }

    pub fn new_unsigned_versioned_transaction(message: VersionedMessage) -> VersionedTransaction {
        let num_required_signatures = message.header().num_required_signatures as usize;
        VersionedTransaction {
            signatures: vec![Signature::default(); num_required_signatures],
            message,
        }
    }

    pub fn encode_versioned_transaction(
        transaction: &VersionedTransaction,
    ) -> Result<String, ScannerError> {
        let serialized = bincode::serialize(transaction).map_err(|_| {
            ScannerError::SerializationError("Failed to serialize transaction.".to_string())
        })?;
        Ok(STANDARD.encode(serialized))
    }

    // Same wire format as `bincode::deserialize`, minus the tolerance for trailing bytes
    fn strict() -> impl Options {
        bincode::DefaultOptions::new().with_fixint_encoding().reject_trailing_bytes()
    }
}
