//! Root composition of the client: owns the localizer, the scanner, the recover
//! flow and the summary of the last successful scan, and renders them as text.

use std::sync::Arc;

use crate::{
    api::{ScanSummary, ScannerApi},
    broadcast::TransactionBroadcaster,
    config::{Config, NetworkConfig},
    error::ScannerError,
    i18n::{Language, Localizer},
    recover::RecoverFlow,
    scanner::Scanner,
    session::Session,
    wallet::WalletAdapter,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub enabled: bool,
}

pub struct App<W: WalletAdapter> {
    api: Arc<dyn ScannerApi>,
    broadcaster: Arc<dyn TransactionBroadcaster>,
    wallet: W,
    network: NetworkConfig,
    localizer: Localizer,
    scanner: Scanner,
    recover: RecoverFlow,
    summary: Option<ScanSummary>,
}

impl<W: WalletAdapter> App<W> {
    pub fn new(
        config: &Config,
        api: Arc<dyn ScannerApi>,
        broadcaster: Arc<dyn TransactionBroadcaster>,
        wallet: W,
    ) -> Self {
        Self {
            api,
            broadcaster,
            wallet,
            network: config.network.clone(),
            localizer: Localizer::new(config.ui.language),
            scanner: Scanner::new(),
            recover: RecoverFlow::new(config.ui.recovery_policy),
            summary: None,
        }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn set_language(&mut self, language: Language) {
        self.localizer.set_language(language);
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut W {
        &mut self.wallet
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn recover_flow(&self) -> &RecoverFlow {
        &self.recover
    }

    pub fn summary(&self) -> Option<&ScanSummary> {
        self.summary.as_ref()
    }

    pub fn set_address(&mut self, input: &str) -> Result<(), ScannerError> {
        self.scanner.set_address(input, &self.wallet)
    }

    /// A failed scan leaves the summary of an earlier successful one in place
    pub async fn scan(&mut self) -> Result<ScanSummary, ScannerError> {
        let summary = self.scanner.submit(self.api.as_ref(), &self.wallet).await?;
        self.summary = Some(summary.clone());
        Ok(summary)
    }

    /// The recover control only exists once a scan has succeeded
    pub fn recover_visible(&self) -> bool {
        self.summary.is_some()
    }

    pub fn recover_button(&self) -> Option<ButtonView> {
        let summary = self.summary.as_ref()?;
        let label = if self.recover.is_done(summary) {
            self.localizer.t("already_recovered").to_string()
        } else if self.recover.is_loading() {
            format!("{}...", self.localizer.t("recover"))
        } else {
            self.localizer.t("recover").to_string()
        };
        Some(ButtonView {
            label,
            enabled: self.recover.check_enabled(summary, &self.wallet).is_ok(),
        })
    }

    pub async fn recover(&mut self) -> Result<String, ScannerError> {
        let Some(summary) = self.summary.as_ref() else {
            return Err(ScannerError::RecoveryUnavailable("no scan result".to_string()));
        };
        self.recover
            .recover(self.api.as_ref(), &self.wallet, self.broadcaster.as_ref(), summary)
            .await
    }

    pub fn explorer_link(&self) -> Option<String> {
        self.recover.transaction_id().map(|id| self.network.explorer_link(id))
    }

    pub fn session(&self) -> Session {
        Session {
            connected_address: self
                .wallet
                .public_key()
                .filter(|_| self.wallet.connected())
                .map(|pubkey| pubkey.to_string()),
            scan_result: self.scanner.result().cloned(),
            recovery_status: self.recover.step().into(),
            transaction_id: self.recover.transaction_id().map(str::to_string),
        }
    }

    /// Every label is looked up at call time, so the output follows the
    /// current language.
    pub fn render(&self) -> Vec<String> {
        let t = |key| self.localizer.t(key);
        let mut lines = vec![t("title").to_string(), t("subtitle").to_string()];

        lines.push(
            Language::ALL
                .iter()
                .map(|language| {
                    let label = t(language.label_key());
                    if *language == self.localizer.language() {
                        format!("[{label}]")
                    } else {
                        label.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        );

        let session = self.session();
        match &session.connected_address {
            Some(address) => {
                lines.push(format!("{}: {address}", t("wallet_address")));
                lines.push(format!("[{}]", t("disconnect")));
            }
            None => lines.push(format!("[{}]", t("connect"))),
        }

        if self.scanner.is_scanning() {
            lines.push(format!("[{}...]", t("scan")));
        }
        if let Some(error) = self.scanner.error() {
            lines.push(self.localizer.error_message(error));
        }

        if let Some(result) = self.scanner.result() {
            lines.push(format!("{}: {}", t("sol_balance"), result.sol_balance.normalize()));
            lines.push(format!("{}: {}", t("tokens"), result.tokens.len()));
            lines.push(format!("{}: {}", t("nfts"), result.nfts.len()));
            lines.push(format!("{}: {}", t("reclaimable"), result.reclaimable_sol.normalize()));
            lines.push(format!("{}: {}", t("empty_accounts"), result.empty_accounts.len()));
        }

        if let Some(button) = self.recover_button() {
            if button.enabled {
                lines.push(format!("[{}]", button.label));
            } else {
                lines.push(format!("({})", button.label));
            }
        }
        if let Some(error) = self.recover.error() {
            lines.push(self.localizer.error_message(error));
        }
        if let (Some(id), Some(link)) = (self.recover.transaction_id(), self.explorer_link()) {
            lines.push(format!("{}! {}: {id}", t("success"), t("transaction")));
            lines.push(link);
        }

        lines
    }
}
