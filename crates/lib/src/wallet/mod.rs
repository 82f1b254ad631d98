//! Wallet connection capability.
//!
//! The scan and recover flows never hold keys. They receive a [`WalletAdapter`]
//! and ask it for the connected address and for signatures, the same contract a
//! browser wallet extension offers.

pub mod keypair_util;
pub mod keypair_wallet;

use async_trait::async_trait;
use mockall::automock;
use solana_sdk::{pubkey::Pubkey, transaction::VersionedTransaction};

use crate::error::ScannerError;

pub use keypair_util::KeypairUtil;
pub use keypair_wallet::KeypairWallet;

#[automock]
#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Currently connected address, `None` when disconnected
    fn public_key(&self) -> Option<Pubkey>;

    fn connected(&self) -> bool;

    /// Whether a signing capability is available right now
    fn can_sign(&self) -> bool;

    async fn sign_transaction(
        &self,
        transaction: VersionedTransaction,
    ) -> Result<VersionedTransaction, ScannerError>;
}
