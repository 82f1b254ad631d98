use crate::common::*;
use solana_sdk::{signature::Keypair, signer::Signer};
use wallet_scanner_lib::{config::BroadcastMode, KeypairWallet, Language, ScannerError};

#[tokio::test]
async fn test_manual_scan_renders_results() {
    let mut backend = MockBackend::start().await;
    let mock = backend
        .mock_scan(EMPTY_ACCOUNT_1, MockBackend::scan_body(&[EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2]))
        .await;

    let mut app = build_app(&backend.config(BroadcastMode::Rpc), KeypairWallet::default());
    app.set_address(EMPTY_ACCOUNT_1).unwrap();
    let summary = app.scan().await.unwrap();

    mock.assert_async().await;
    assert_eq!(summary.empty_accounts, [EMPTY_ACCOUNT_1, EMPTY_ACCOUNT_2]);
    assert_eq!(summary.reclaimable_lamports, 2 * RENT_PER_ACCOUNT);

    let rendered = app.render();
    assert!(rendered.contains(&"SOL Balance: 1.5".to_string()));
    assert!(rendered.contains(&"Tokens: 1".to_string()));
    assert!(rendered.contains(&"NFTs: 0".to_string()));
    assert!(rendered.contains(&"Empty accounts: 2".to_string()));

    // no wallet connected, so the control is shown but disabled
    let button = app.recover_button().unwrap();
    assert!(!button.enabled);
}

#[tokio::test]
async fn test_wallet_address_is_scanned() {
    let keypair = Keypair::new();
    let owner = keypair.pubkey().to_string();

    let mut backend = MockBackend::start().await;
    let mock = backend.mock_scan(&owner, MockBackend::scan_body(&[])).await;

    let mut app =
        build_app(&backend.config(BroadcastMode::Rpc), KeypairWallet::connected_with(keypair));
    assert!(app.set_address(EMPTY_ACCOUNT_1).is_err());
    app.scan().await.unwrap();

    mock.assert_async().await;
    assert_eq!(app.session().connected_address, Some(owner));
    assert!(!app.recover_button().unwrap().enabled);
}

#[tokio::test]
async fn test_scan_failure_is_localized() {
    let mut backend = MockBackend::start().await;
    let _m = backend
        .server
        .mock("GET", "/api/scan/unknown")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let mut app = build_app(&backend.config(BroadcastMode::Rpc), KeypairWallet::default());
    app.set_address("unknown").unwrap();

    let error = app.scan().await.unwrap_err();
    assert!(matches!(error, ScannerError::ScanFailed(_)));
    assert!(app.render().contains(&"Error: Scan error.".to_string()));
    assert!(!app.recover_visible());

    app.set_language(Language::It);
    assert!(app.render().contains(&"Errore: Errore durante la scansione.".to_string()));
}
