mod error;
#[allow(clippy::too_many_arguments)]
pub mod execute;
pub mod msg;
pub mod query;
pub mod state;
pub use error::ContractError;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod instantiate;
pub mod migrate;
pub mod orders;
pub mod payout;
pub mod reply;
