// ============================================================================
// Scan fixtures
// ============================================================================

/// First empty token account returned by the mock backend
pub const EMPTY_ACCOUNT_1: &str = "AVmDft8deQEo78bRKcGN5ZMf3hyjeLBK4Rd4xGB46yQM";

/// Second empty token account returned by the mock backend
pub const EMPTY_ACCOUNT_2: &str = "CWvWnVwqAb9HzqwCGkn4purGEUuu27aNsPQM252uLerV";

/// Rent held by one empty SPL token account
pub const RENT_PER_ACCOUNT: u64 = 2_039_280;

/// Relay transaction id returned by the mock `send_signed_tx` endpoint
pub const RELAY_TXID: &str = "4rELayTx1d";

// ============================================================================
// Configuration
// ============================================================================

pub const TEST_CONFIG_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/src/common/fixtures/wallet-scanner-test.toml");
