use crate::common::*;
use serde_json::json;
use solana_sdk::{signature::Keypair, signer::Signer};
use wallet_scanner_lib::{
    config::BroadcastMode, session::RecoveryStatus, KeypairWallet, ScannerError,
};

fn close_request(owner: &str) -> serde_json::Value {
    json!({
        "user_pubkey": owner,
        "empty_accounts": [EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2],
        "reclaimable_lamports": 2 * RENT_PER_ACCOUNT
    })
}

#[tokio::test]
async fn test_recover_through_rpc() {
    let keypair = Keypair::new();
    let owner = keypair.pubkey();

    let mut backend = MockBackend::start().await;
    let scan = backend
        .mock_scan(&owner.to_string(), MockBackend::scan_body(&[EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2]))
        .await;
    let close =
        backend.mock_close(close_request(&owner.to_string()), Some(close_payload(&owner))).await;
    let relay = backend.mock_send_signed_tx(0).await;

    let mut app =
        build_app(&backend.config(BroadcastMode::Rpc), KeypairWallet::connected_with(keypair));
    app.scan().await.unwrap();
    assert!(app.recover_button().unwrap().enabled);

    let txid = app.recover().await.unwrap();

    scan.assert_async().await;
    close.assert_async().await;
    relay.assert_async().await;

    assert_eq!(app.explorer_link(), Some(format!("https://solscan.io/tx/{txid}")));
    let button = app.recover_button().unwrap();
    assert_eq!(button.label, "You have already recovered unused SOL.");
    assert!(!button.enabled);
    assert_eq!(app.session().recovery_status, RecoveryStatus::Done);
}

#[tokio::test]
async fn test_recover_through_backend_relay() {
    let keypair = Keypair::new();
    let owner = keypair.pubkey();

    let mut backend = MockBackend::start().await;
    let _scan = backend
        .mock_scan(&owner.to_string(), MockBackend::scan_body(&[EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2]))
        .await;
    let _close =
        backend.mock_close(close_request(&owner.to_string()), Some(close_payload(&owner))).await;
    let relay = backend.mock_send_signed_tx(1).await;

    let mut app =
        build_app(&backend.config(BroadcastMode::Backend), KeypairWallet::connected_with(keypair));
    app.scan().await.unwrap();

    assert_eq!(app.recover().await.unwrap(), RELAY_TXID);
    relay.assert_async().await;
    assert!(app.render().contains(&format!("https://solscan.io/tx/{RELAY_TXID}")));
}

#[tokio::test]
async fn test_missing_transaction_is_reported() {
    let keypair = Keypair::new();
    let owner = keypair.pubkey().to_string();

    let mut backend = MockBackend::start().await;
    let _scan = backend
        .mock_scan(&owner, MockBackend::scan_body(&[EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2]))
        .await;
    let _close = backend.mock_close(close_request(&owner), None).await;
    let relay = backend.mock_send_signed_tx(0).await;

    let mut app =
        build_app(&backend.config(BroadcastMode::Backend), KeypairWallet::connected_with(keypair));
    app.scan().await.unwrap();

    assert_eq!(app.recover().await, Err(ScannerError::TransactionNotGenerated));
    relay.assert_async().await;
    assert!(app
        .render()
        .contains(&"Error: Transaction not generated by the server.".to_string()));
    assert!(app.recover_button().unwrap().enabled);
}

#[tokio::test]
async fn test_close_failure_is_generic() {
    let keypair = Keypair::new();
    let owner = keypair.pubkey().to_string();

    let mut backend = MockBackend::start().await;
    let _scan = backend.mock_scan(&owner, MockBackend::scan_body(&[EMPTY_ACCOUNT_1])).await;
    let close = backend.mock_close_failure().await;

    let mut app =
        build_app(&backend.config(BroadcastMode::Rpc), KeypairWallet::connected_with(keypair));
    app.scan().await.unwrap();

    let error = app.recover().await.unwrap_err();
    close.assert_async().await;
    assert_eq!(error.to_string(), "Close error");
    assert_eq!(app.session().recovery_status, RecoveryStatus::Error);
    assert!(app.render().contains(&"Error: Close error.".to_string()));
}
