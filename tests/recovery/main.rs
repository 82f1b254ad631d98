// Recovery Integration Tests
//
// CONFIG: Uses tests/src/common/fixtures/wallet-scanner-test.toml with the
//         backend base URL pointed at a mockito server
// TESTS: Scan and recover flows through the real HTTP client
//        - Scan rendering and generic scan errors
//        - Close, sign and broadcast via mock RPC and via the backend relay
//        - Missing transaction and close failures

mod recover_flow;
mod scan_flow;

#[path = "../src/common/mod.rs"]
mod common;
