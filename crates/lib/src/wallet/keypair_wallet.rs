use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey, signature::Keypair, signer::Signer as _, transaction::VersionedTransaction,
};

use crate::{
    error::ScannerError,
    transaction::VersionedTransactionOps,
    wallet::{KeypairUtil, WalletAdapter},
};

/// Local keypair standing in for a wallet extension
#[derive(Default)]
pub struct KeypairWallet {
    keypair: Option<Keypair>,
}

impl KeypairWallet {
    pub fn connected_with(keypair: Keypair) -> Self {
        Self { keypair: Some(keypair) }
    }

    pub fn from_private_key_string(private_key: &str) -> Result<Self, ScannerError> {
        Ok(Self::connected_with(KeypairUtil::from_private_key_string(private_key)?))
    }

    pub fn connect(&mut self, keypair: Keypair) -> Pubkey {
        let pubkey = keypair.pubkey();
        log::info!("Wallet connected: {pubkey}");
        self.keypair = Some(keypair);
        pubkey
    }

    pub fn disconnect(&mut self) {
        if let Some(keypair) = self.keypair.take() {
            log::info!("Wallet disconnected: {}", keypair.pubkey());
        }
    }
}

#[async_trait]
impl WalletAdapter for KeypairWallet {
    fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|k| k.pubkey())
    }

    fn connected(&self) -> bool {
        self.keypair.is_some()
    }

    fn can_sign(&self) -> bool {
        self.keypair.is_some()
    }

    async fn sign_transaction(
        &self,
        mut transaction: VersionedTransaction,
    ) -> Result<VersionedTransaction, ScannerError> {
        let keypair = self.keypair.as_ref().ok_or(ScannerError::WalletNotConnected)?;
        let signature = transaction.sign_with_keypair(keypair)?;
        log::debug!("Signed transaction {signature}");
        Ok(transaction)
    }
}
