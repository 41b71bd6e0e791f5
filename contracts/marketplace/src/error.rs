use cosmwasm_std::{Coin, OverflowError, StdError, Uint128};
use curio_marketplace_common::MarketplaceStdError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    MarketplaceStdError(#[from] MarketplaceStdError),

    #[error("InvalidInput: {0}")]
    InvalidInput(String),

    #[error("ListingNotFound")]
    ListingNotFound {},

    #[error("ListingNotLive")]
    ListingNotLive {},

    #[error("WrongListingKind")]
    WrongListingKind {},

    #[error("ListingNotStarted")]
    ListingNotStarted {},

    #[error("ListingExpired")]
    ListingExpired {},

    #[error("ListingNotExpired")]
    ListingNotExpired {},

    #[error("StaleListing collection: {collection} token_id: {token_id}")]
    StaleListing {
        collection: String,
        token_id: String,
    },

    #[error("TransferApprovalMissing")]
    TransferApprovalMissing {},

    #[error("BidExists collection: {collection} token_id: {token_id}")]
    BidExists {
        collection: String,
        token_id: String,
    },

    #[error("BidNotFound")]
    BidNotFound {},

    #[error("BidTooLow: {0}")]
    BidTooLow(Uint128),

    #[error("OwnerShouldNotBid")]
    OwnerShouldNotBid {},

    #[error("IncorrectPayment: expected {expected}")]
    IncorrectPayment { expected: Coin },

    #[error("MissingFeeRecipient: {0}")]
    MissingFeeRecipient(String),

    #[error("NothingToWithdraw")]
    NothingToWithdraw {},

    #[error("InternalError: {0}")]
    InternalError(String),
}
