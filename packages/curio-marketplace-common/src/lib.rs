pub mod coin;
pub mod constants;
pub mod errors;
pub mod nft;
pub mod query;


pub use crate::errors::MarketplaceStdError;
