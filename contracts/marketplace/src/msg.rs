use crate::{
    orders::{Bid, Listing, ListingDetails},
    state::{Config, TokenId},
};

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use curio_marketplace_common::query::QueryOptions;

#[cw_serde]
pub struct InstantiateMsg {
    /// The initial configuration for the contract
    pub config: Config<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    // Admin messages
    UpdateConfig {
        fee_manager: Option<String>,
        marketplace_fee_percent: Option<u64>,
        creator_fee_percent: Option<u64>,
        partner_fee_percent: Option<u64>,
        min_bid_increment_percent: Option<u64>,
        max_sale_price: Option<Uint128>,
    },
    SetPrimarySaleFeeOverride {
        collection: String,
        fee_percent: u64,
    },
    ForceCloseListing {
        collection: String,
        token_id: TokenId,
    },
    // Marketplace messages
    CreateFixedPriceListing {
        collection: String,
        token_id: TokenId,
        details: ListingDetails<String>,
    },
    CreateAuctionListing {
        collection: String,
        token_id: TokenId,
        details: ListingDetails<String>,
    },
    CancelListing {
        collection: String,
        token_id: TokenId,
    },
    Buy {
        collection: String,
        token_id: TokenId,
    },
    PlaceBid {
        collection: String,
        token_id: TokenId,
    },
    AcceptBid {
        collection: String,
        token_id: TokenId,
    },
    CancelBid {
        collection: String,
        token_id: TokenId,
    },
    Withdraw {
        payee: String,
    },
}

#[cw_serde]
#[derive(Default)]
pub struct ListingKeyOffset {
    pub collection: String,
    pub token_id: TokenId,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config<Addr>)]
    Config {},
    #[returns(Option<Listing>)]
    Listing {
        collection: String,
        token_id: TokenId,
    },
    #[returns(Vec<Listing>)]
    ListingsBySeller {
        seller: String,
        query_options: Option<QueryOptions<ListingKeyOffset>>,
    },
    #[returns(Option<Bid>)]
    Bid {
        collection: String,
        token_id: TokenId,
    },
    #[returns(Vec<Bid>)]
    BidsByBidder {
        bidder: String,
        query_options: Option<QueryOptions<ListingKeyOffset>>,
    },
    #[returns(bool)]
    HasSold {
        collection: String,
        token_id: TokenId,
    },
    #[returns(Uint128)]
    EscrowBalance { payee: String },
    #[returns(Option<u64>)]
    PrimarySaleFeeOverride { collection: String },
}
