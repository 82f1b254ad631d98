use std::{io::Write, sync::Arc};

use wallet_scanner_lib::{
    api::ScanSummary, broadcaster_from_config, App, BackendClient, Config, KeypairWallet,
    ScannerError,
};

/// Builds the app against the configured backend and broadcaster
fn build_app(config: &Config, wallet: KeypairWallet) -> Result<App<KeypairWallet>, ScannerError> {
    let backend = Arc::new(BackendClient::new(&config.api)?);
    log::debug!("Using backend {}", backend.base_url());
    let broadcaster = broadcaster_from_config(config, backend.clone());
    Ok(App::new(config, backend, broadcaster, wallet))
}

fn load_wallet(keypair: Option<&str>) -> Result<KeypairWallet, ScannerError> {
    match keypair {
        Some(private_key) => KeypairWallet::from_private_key_string(private_key),
        None => Ok(KeypairWallet::default()),
    }
}

fn write_line(out: &mut impl Write, line: &str) -> Result<(), ScannerError> {
    writeln!(out, "{line}")
        .map_err(|e| ScannerError::InternalError(format!("Failed to write output: {e}")))
}

fn print_view(app: &App<KeypairWallet>, out: &mut impl Write) -> Result<(), ScannerError> {
    for line in app.render() {
        write_line(out, &line)?;
    }
    Ok(())
}

fn dry_run_message(summary: &ScanSummary) -> String {
    format!(
        "Dry run: {} accounts ({} SOL) would be closed. Re-run with --execute.",
        summary.empty_accounts.len(),
        summary.reclaimable_sol().normalize()
    )
}

pub async fn handle_scan(
    config: &Config,
    address: Option<String>,
    keypair: Option<String>,
    out: &mut impl Write,
) -> Result<(), ScannerError> {
    let wallet = load_wallet(keypair.as_deref())?;
    let mut app = build_app(config, wallet)?;

    if let Some(address) = address {
        app.set_address(&address)?;
    }

    let result = app.scan().await;
    print_view(&app, out)?;
    result.map(|_| ())
}

/// Scans the keypair's wallet, then closes its empty accounts when `execute` is set
pub async fn handle_recover(
    config: &Config,
    keypair: &str,
    execute: bool,
    out: &mut impl Write,
) -> Result<(), ScannerError> {
    let wallet = load_wallet(Some(keypair))?;
    let mut app = build_app(config, wallet)?;

    if let Err(e) = app.scan().await {
        print_view(&app, out)?;
        return Err(e);
    }

    if !execute {
        print_view(&app, out)?;
        if let Some(summary) = app.summary().filter(|s| s.has_empty_accounts()) {
            write_line(out, &dry_run_message(summary))?;
        }
        return Ok(());
    }

    let result = app.recover().await;
    print_view(&app, out)?;
    result.map(|transaction_id| log::info!("Recovery transaction: {transaction_id}"))
}

pub fn handle_config_show(config: &Config, out: &mut impl Write) -> Result<(), ScannerError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| ScannerError::SerializationError(format!("Failed to render config: {e}")))?;
    write_line(out, &rendered)?;
    write_line(out, &format!("# effective api base url: {}", config.api.resolved_base_url()))
}
