use crate::{
    api::{ScanResult, ScanSummary, ScannerApi},
    error::ScannerError,
    wallet::WalletAdapter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanStatus {
    #[default]
    Idle,
    Scanning,
    Scanned,
    Error,
}

/// Address input plus the state of the latest scan
#[derive(Debug, Default)]
pub struct Scanner {
    address_input: String,
    status: ScanStatus,
    result: Option<ScanResult>,
    error: Option<ScannerError>,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ScanStatus {
        self.status
    }

    pub fn result(&self) -> Option<&ScanResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ScannerError> {
        self.error.as_ref()
    }

    pub fn is_scanning(&self) -> bool {
        self.status == ScanStatus::Scanning
    }

    /// Manual entry is only possible while no wallet is connected
    pub fn input_enabled(&self, wallet: &dyn WalletAdapter) -> bool {
        !wallet.connected()
    }

    pub fn set_address(
        &mut self,
        input: &str,
        wallet: &dyn WalletAdapter,
    ) -> Result<(), ScannerError> {
        if !self.input_enabled(wallet) {
            return Err(ScannerError::InvalidAddress(
                "the address is taken from the connected wallet".to_string(),
            ));
        }
        self.address_input = input.to_string();
        Ok(())
    }

    /// Address a submit would scan: the wallet's when connected, else the typed one
    pub fn effective_address(&self, wallet: &dyn WalletAdapter) -> String {
        match wallet.public_key() {
            Some(pubkey) if wallet.connected() => pubkey.to_string(),
            _ => self.address_input.trim().to_string(),
        }
    }

    /// Runs one scan and returns the summary for the recover flow.
    ///
    /// An empty address fails before any request is made.
    pub async fn submit(
        &mut self,
        api: &dyn ScannerApi,
        wallet: &dyn WalletAdapter,
    ) -> Result<ScanSummary, ScannerError> {
        let address = self.effective_address(wallet);
        if address.is_empty() {
            self.status = ScanStatus::Error;
            self.error = Some(ScannerError::EmptyAddress);
            self.result = None;
            return Err(ScannerError::EmptyAddress);
        }

        self.status = ScanStatus::Scanning;
        self.error = None;
        self.result = None;

        match api.scan(&address).await {
            Ok(result) => {
                let summary = result.summary();
                log::info!(
                    "Scan of {address} found {} empty accounts ({} lamports reclaimable)",
                    summary.empty_accounts.len(),
                    summary.reclaimable_lamports
                );
                self.result = Some(result);
                self.status = ScanStatus::Scanned;
                Ok(summary)
            }
            Err(e) => {
                log::warn!("Scan of {address} failed: {e}");
                self.status = ScanStatus::Error;
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }
}
