use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer as _,
    transaction::VersionedTransaction,
};

use crate::{error::ScannerError, transaction::TransactionUtil};

pub trait VersionedTransactionOps {
    fn encode_b64_transaction(&self) -> Result<String, ScannerError>;
    fn find_signer_position(&self, signer_pubkey: &Pubkey) -> Result<usize, ScannerError>;
    fn sign_with_keypair(&mut self, keypair: &Keypair) -> Result<Signature, ScannerError>;
    fn fee_payer(&self) -> Option<&Pubkey>;
}

impl VersionedTransactionOps for VersionedTransaction {
    fn encode_b64_transaction(&self) -> Result<String, ScannerError> {
        TransactionUtil::encode_versioned_transaction(self)
    }

    /// Position of `signer_pubkey` among the accounts that must sign
    fn find_signer_position(&self, signer_pubkey: &Pubkey) -> Result<usize, ScannerError> {
        let required = self.message.header().num_required_signatures as usize;
        self.message
            .static_account_keys()
            .iter()
            .take(required)
            .position(|key| key == signer_pubkey)
            .ok_or_else(|| {
                ScannerError::SigningError(format!(
                    "Signer {signer_pubkey} is not a required signer of this transaction"
                ))
            })
    }

    fn sign_with_keypair(&mut self, keypair: &Keypair) -> Result<Signature, ScannerError> {
        let position = self.find_signer_position(&keypair.pubkey())?;

        let required = self.message.header().num_required_signatures as usize;
        if self.signatures.len() < required {
            self.signatures.resize(required, Signature::default());
        }

        let message_bytes = self.message.serialize();
        let signature = keypair.try_sign_message(&message_bytes)?;
        self.signatures[position] = signature;

        Ok(signature)
    }

    fn fee_payer(&self) -> Option<&Pubkey> {
        self.message.static_account_keys().first()
    }
}
