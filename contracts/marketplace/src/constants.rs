pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// 100% represented as parts per thousand
pub const FEE_RATE_DENOMINATOR: u64 = 1_000;
