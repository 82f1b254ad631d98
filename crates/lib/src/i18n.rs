//! Static translations for the two supported languages.
//!
//! Lookups fall back to English and then to the key itself, so a missing
//! entry shows up as its key instead of an empty label.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt, str::FromStr};

use crate::error::ScannerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    It,
    En,
}

pub const FALLBACK_LANGUAGE: Language = Language::En;

impl Language {
    pub const ALL: [Language; 2] = [Language::It, Language::En];

    pub fn code(&self) -> &'static str {
        match self {
            Language::It => "it",
            Language::En => "en",
        }
    }

    /// Label key of the switcher button for this language
    pub fn label_key(&self) -> &'static str {
        match self {
            Language::It => "lang_it",
            Language::En => "lang_en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ScannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "it" => Ok(Language::It),
            "en" => Ok(Language::En),
            other => Err(ScannerError::ConfigError(format!("Unsupported language: {other}"))),
        }
    }
}

type Dictionary = HashMap<&'static str, &'static str>;

const IT: &[(&str, &str)] = &[
    ("title", "Solana Wallet Scanner"),
    ("subtitle", "Analizza il tuo wallet Solana: saldo, token, NFT, SOL recuperabili"),
    ("connect", "Connetti wallet"),
    ("disconnect", "Disconnetti"),
    ("wallet_address", "Indirizzo wallet"),
    ("scan", "Scansiona"),
    ("recover", "Recupera SOL"),
    ("sol_balance", "Saldo SOL"),
    ("tokens", "Token"),
    ("nfts", "NFT"),
    ("reclaimable", "SOL recuperabili"),
    ("empty_accounts", "Account vuoti"),
    ("already_recovered", "Hai già recuperato i SOL inutilizzati."),
    ("error", "Errore"),
    ("success", "Successo"),
    ("transaction", "Transazione"),
    ("lang_it", "Italiano"),
    ("lang_en", "English"),
    ("empty_address", "Inserisci un indirizzo wallet."),
    ("scan_error", "Errore durante la scansione."),
    ("close_error", "Errore durante la preparazione della transazione."),
    ("wallet_not_connected", "Wallet non connesso."),
    ("tx_not_generated", "Transazione non generata dal server."),
    ("recover_unavailable", "Recupero non disponibile."),
];

const EN: &[(&str, &str)] = &[
    ("title", "Solana Wallet Scanner"),
    ("subtitle", "Analyze your Solana wallet: balance, tokens, NFTs, reclaimable SOL"),
    ("connect", "Connect wallet"),
    ("disconnect", "Disconnect"),
    ("wallet_address", "Wallet address"),
    ("scan", "Scan"),
    ("recover", "Recover SOL"),
    ("sol_balance", "SOL Balance"),
    ("tokens", "Tokens"),
    ("nfts", "NFTs"),
    ("reclaimable", "Reclaimable SOL"),
    ("empty_accounts", "Empty accounts"),
    ("already_recovered", "You have already recovered unused SOL."),
    ("error", "Error"),
    ("success", "Success"),
    ("transaction", "Transaction"),
    ("lang_it", "Italiano"),
    ("lang_en", "English"),
    ("empty_address", "Enter a wallet address."),
    ("scan_error", "Scan error."),
    ("close_error", "Close error."),
    ("wallet_not_connected", "Wallet not connected."),
    ("tx_not_generated", "Transaction not generated by the server."),
    ("recover_unavailable", "Recovery not available."),
];

static RESOURCES: Lazy<HashMap<Language, Dictionary>> = Lazy::new(|| {
    HashMap::from([
        (Language::It, IT.iter().copied().collect()),
        (Language::En, EN.iter().copied().collect()),
    ])
});

/// Current-language state plus key lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct Localizer {
    language: Language,
}

impl Localizer {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            log::debug!("Switching language {} -> {}", self.language, language);
        }
        self.language = language;
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        lookup(self.language, key)
            .or_else(|| lookup(FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
    }

    /// `"<error label>: <message>"`, localized when the error has a key
    pub fn error_message(&self, error: &ScannerError) -> String {
        let detail = match error.message_key() {
            Some(key) => self.t(key).to_string(),
            None => error.to_string(),
        };
        format!("{}: {}", self.t("error"), detail)
    }
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    RESOURCES.get(&language).and_then(|dict| dict.get(key).copied())
}
