pub mod api;
pub mod app;
pub mod broadcast;
pub mod config;
pub mod constant;
pub mod error;
pub mod i18n;
pub mod recover;
pub mod sanitize;
pub mod scanner;
pub mod session;
pub mod transaction;
pub mod wallet;

pub use api::{BackendClient, ScannerApi};
pub use app::App;
pub use broadcast::{broadcaster_from_config, TransactionBroadcaster};
pub use config::Config;
pub use error::ScannerError;
pub use i18n::{Language, Localizer};
pub use wallet::{KeypairWallet, WalletAdapter};
