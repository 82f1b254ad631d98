mod transaction;
mod versioned_transaction;
pub use transaction::*;
pub use versioned_transaction::*;
