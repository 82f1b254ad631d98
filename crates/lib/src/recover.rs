//! Close, sign and broadcast of the empty accounts found by a scan.

use std::{collections::HashSet, fmt};

use crate::{
    api::{CloseRequest, ScanSummary, ScannerApi},
    broadcast::TransactionBroadcaster,
    config::RecoveryPolicy,
    error::ScannerError,
    transaction::TransactionUtil,
    wallet::WalletAdapter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryStep {
    #[default]
    Idle,
    Requesting,
    Signing,
    Broadcasting,
    Done,
    Error,
}

impl RecoveryStep {
    pub fn in_flight(&self) -> bool {
        matches!(self, Self::Requesting | Self::Signing | Self::Broadcasting)
    }
}

/// Why the recover action cannot be triggered right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    NoEmptyAccounts,
    WalletDisconnected,
    InFlight,
    AlreadyRecovered,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoEmptyAccounts => "no empty accounts to close",
            Self::WalletDisconnected => "wallet not connected",
            Self::InFlight => "a recovery is already in progress",
            Self::AlreadyRecovered => "already recovered",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Default)]
pub struct RecoverFlow {
    step: RecoveryStep,
    policy: RecoveryPolicy,
    completed: HashSet<String>,
    transaction_id: Option<String>,
    error: Option<ScannerError>,
}

impl RecoverFlow {
    pub fn new(policy: RecoveryPolicy) -> Self {
        Self { policy, ..Default::default() }
    }

    pub fn step(&self) -> RecoveryStep {
        self.step
    }

    pub fn policy(&self) -> RecoveryPolicy {
        self.policy
    }

    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    pub fn error(&self) -> Option<&ScannerError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.step.in_flight()
    }

    /// Whether a recovery already succeeded for `summary` under the active policy
    pub fn is_done(&self, summary: &ScanSummary) -> bool {
        match self.policy {
            RecoveryPolicy::OneShot => !self.completed.is_empty(),
            RecoveryPolicy::PerScan => self.completed.contains(&summary.fingerprint()),
        }
    }

    /// Enabled only with a connected wallet, no attempt in flight, nothing
    /// recovered yet and at least one empty account.
    pub fn check_enabled(
        &self,
        summary: &ScanSummary,
        wallet: &dyn WalletAdapter,
    ) -> Result<(), DisabledReason> {
        if self.is_done(summary) {
            return Err(DisabledReason::AlreadyRecovered);
        }
        if self.is_loading() {
            return Err(DisabledReason::InFlight);
        }
        if !wallet.connected() {
            return Err(DisabledReason::WalletDisconnected);
        }
        if !summary.has_empty_accounts() {
            return Err(DisabledReason::NoEmptyAccounts);
        }
        Ok(())
    }

    /// Runs one recovery attempt and returns the broadcast transaction id.
    ///
    /// A disabled action is refused without touching the flow state, except a
    /// missing wallet which is reported as the attempt's error. A completed
    /// recovery is never overwritten.
    pub async fn recover(
        &mut self,
        api: &dyn ScannerApi,
        wallet: &dyn WalletAdapter,
        broadcaster: &dyn TransactionBroadcaster,
        summary: &ScanSummary,
    ) -> Result<String, ScannerError> {
        if self.is_done(summary) {
            return Err(ScannerError::RecoveryUnavailable(
                DisabledReason::AlreadyRecovered.to_string(),
            ));
        }
        if wallet.public_key().is_none() || !wallet.can_sign() {
            self.step = RecoveryStep::Error;
            self.error = Some(ScannerError::WalletNotConnected);
            return Err(ScannerError::WalletNotConnected);
        }
        if let Err(reason) = self.check_enabled(summary, wallet) {
            return Err(ScannerError::RecoveryUnavailable(reason.to_string()));
        }

        self.error = None;
        self.transaction_id = None;

        match self.attempt(api, wallet, broadcaster, summary).await {
            Ok(transaction_id) => {
                log::info!("Recovered {} lamports in {transaction_id}", summary.reclaimable_lamports);
                self.completed.insert(summary.fingerprint());
                self.transaction_id = Some(transaction_id.clone());
                self.step = RecoveryStep::Done;
                Ok(transaction_id)
            }
            Err(e) => {
                log::error!("Recovery failed during {:?}: {e}", self.step);
                self.step = RecoveryStep::Error;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    async fn attempt(
        &mut self,
        api: &dyn ScannerApi,
        wallet: &dyn WalletAdapter,
        broadcaster: &dyn TransactionBroadcaster,
        summary: &ScanSummary,
    ) -> Result<String, ScannerError> {
        let owner = wallet.public_key().ok_or(ScannerError::WalletNotConnected)?;

        self.step = RecoveryStep::Requesting;
        let request = CloseRequest::new(owner.to_string(), summary);
        let response = api.close(&request).await?;
        let payload = response.transaction_payload().ok_or(ScannerError::TransactionNotGenerated)?;
        let transaction = TransactionUtil::decode_b64_transaction(payload)?;

        self.step = RecoveryStep::Signing;
        if !wallet.connected() || !wallet.can_sign() {
            return Err(ScannerError::WalletNotConnected);
        }
        let signed = wallet.sign_transaction(transaction).await?;

        self.step = RecoveryStep::Broadcasting;
        broadcaster.broadcast(&signed).await
    }
}
