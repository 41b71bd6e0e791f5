use crate::constants::FEE_RATE_DENOMINATOR;
use crate::orders::{Bid, Listing};
use crate::payout::PendingPayout;
use crate::ContractError;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{ensure, Addr, Api, Storage, Uint128};
use cw_address_like::AddressLike;
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};

pub type TokenId = String;
pub type Denom = String;

/// Storage key for listings and bids, `(collection, token_id)`
pub type ListingKey = (Addr, TokenId);

#[cw_serde]
pub struct Config<T: AddressLike> {
    /// The address that receives the marketplace fee share
    pub fee_manager: T,
    /// The denom used for listing and bid payments
    pub denom: Denom,
    /// Marketplace fee rate, in parts per thousand
    pub marketplace_fee_rate: u64,
    /// Creator fee rate, in parts per thousand
    pub creator_fee_rate: u64,
    /// Partner fee rate, in parts per thousand
    pub partner_fee_rate: u64,
    /// Minimum raise over the current bid, in parts per thousand
    pub min_bid_increment_rate: u64,
    /// Upper bound for listing and bid prices
    pub max_sale_price: Uint128,
}

impl Config<String> {
    pub fn str_to_addr(self, api: &dyn Api) -> Result<Config<Addr>, ContractError> {
        Ok(Config {
            fee_manager: api.addr_validate(&self.fee_manager)?,
            denom: self.denom,
            marketplace_fee_rate: self.marketplace_fee_rate,
            creator_fee_rate: self.creator_fee_rate,
            partner_fee_rate: self.partner_fee_rate,
            min_bid_increment_rate: self.min_bid_increment_rate,
            max_sale_price: self.max_sale_price,
        })
    }
}

impl Config<Addr> {
    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        self.validate()?;
        CONFIG.save(storage, self)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), ContractError> {
        ensure!(
            !self.denom.is_empty(),
            ContractError::InvalidInput("denom must not be empty".to_string())
        );
        ensure!(
            self.marketplace_fee_rate <= FEE_RATE_DENOMINATOR,
            ContractError::InvalidInput("marketplace_fee_rate must not exceed 1".to_string())
        );
        ensure!(
            self.creator_fee_rate <= FEE_RATE_DENOMINATOR,
            ContractError::InvalidInput("creator_fee_rate must not exceed 1".to_string())
        );
        ensure!(
            self.partner_fee_rate <= FEE_RATE_DENOMINATOR,
            ContractError::InvalidInput("partner_fee_rate must not exceed 1".to_string())
        );
        ensure!(
            (self.marketplace_fee_rate + self.creator_fee_rate + self.partner_fee_rate)
                <= FEE_RATE_DENOMINATOR,
            ContractError::InvalidInput(
                "marketplace, creator, and partner fee rates must not exceed 1 combined"
                    .to_string()
            )
        );
        ensure!(
            self.min_bid_increment_rate <= FEE_RATE_DENOMINATOR,
            ContractError::InvalidInput("min_bid_increment_rate must not exceed 1".to_string())
        );
        ensure!(
            !self.max_sale_price.is_zero(),
            ContractError::InvalidInput("max_sale_price must be greater than zero".to_string())
        );
        Ok(())
    }
}

pub const CONFIG: Item<Config<Addr>> = Item::new("config");

/// Marks keys that have completed a sale through this contract. Set once,
/// never cleared.
pub const SOLD: Map<ListingKey, bool> = Map::new("sold");

/// Funds owed to a recipient after a failed direct payment
pub const ESCROW_BALANCES: Map<Addr, Uint128> = Map::new("escrow_balances");

/// Outbound payments awaiting confirmation in the reply handler
pub const PENDING_PAYOUTS: Map<u64, PendingPayout> = Map::new("pending_payouts");

/// Id source for pending payouts, doubles as the submessage reply id
pub const PAYOUT_NONCE: Item<u64> = Item::new("payout_nonce");

/// Per-collection primary sale fee rate, in parts per thousand
pub const PRIMARY_SALE_FEE_OVERRIDES: Map<Addr, u64> = Map::new("primary_sale_fee_overrides");

/// Defines indices for accessing listings
pub struct ListingIndices<'a> {
    // Index listings by seller
    pub seller: MultiIndex<'a, Addr, Listing, ListingKey>,
}

impl<'a> IndexList<Listing> for ListingIndices<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Listing>> + '_> {
        let v: Vec<&dyn Index<Listing>> = vec![&self.seller];
        Box::new(v.into_iter())
    }
}

pub fn listings<'a>() -> IndexedMap<'a, ListingKey, Listing, ListingIndices<'a>> {
    let indexes = ListingIndices {
        seller: MultiIndex::new(
            |_pk: &[u8], l: &Listing| l.seller.clone(),
            "listings",
            "listings__seller",
        ),
    };
    IndexedMap::new("listings", indexes)
}

/// Defines indices for accessing bids
pub struct BidIndices<'a> {
    // Index bids by bidder
    pub bidder: MultiIndex<'a, Addr, Bid, ListingKey>,
}

impl<'a> IndexList<Bid> for BidIndices<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Bid>> + '_> {
        let v: Vec<&dyn Index<Bid>> = vec![&self.bidder];
        Box::new(v.into_iter())
    }
}

pub fn bids<'a>() -> IndexedMap<'a, ListingKey, Bid, BidIndices<'a>> {
    let indexes = BidIndices {
        bidder: MultiIndex::new(
            |_pk: &[u8], b: &Bid| b.bidder.clone(),
            "bids",
            "bids__bidder",
        ),
    };
    IndexedMap::new("bids", indexes)
}
