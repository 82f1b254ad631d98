pub mod backend;
pub mod constants;
pub mod setup;
pub mod transaction;

pub use backend::*;
pub use constants::*;
pub use setup::*;
pub use transaction::*;
