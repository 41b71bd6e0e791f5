use crate::{
    helpers::generate_id,
    state::{bids, listings, ListingKey, TokenId},
    ContractError,
};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{attr, coin, Addr, Api, Attribute, Coin, StdResult, Storage, Timestamp, Uint128};
use cw_address_like::AddressLike;
use cw_utils::maybe_addr;

#[cw_serde]
pub enum ListingKind {
    FixedPrice,
    Auction,
}

impl ListingKind {
    pub fn as_str(&self) -> &str {
        match self {
            ListingKind::FixedPrice => "fixed_price",
            ListingKind::Auction => "auction",
        }
    }
}

#[cw_serde]
pub enum ListingStatus {
    Live,
    Closed,
    Canceled,
}

impl ListingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ListingStatus::Live => "live",
            ListingStatus::Closed => "closed",
            ListingStatus::Canceled => "canceled",
        }
    }
}

#[cw_serde]
pub struct ListingDetails<T: AddressLike> {
    pub price: Coin,
    pub ending_price: Option<Uint128>,
    pub starting_at: Timestamp,
    pub expired_at: Timestamp,
    pub creator: Option<T>,
    pub partner: Option<T>,
}

impl ListingDetails<String> {
    pub fn str_to_addr(self, api: &dyn Api) -> StdResult<ListingDetails<Addr>> {
        Ok(ListingDetails {
            price: self.price,
            ending_price: self.ending_price,
            starting_at: self.starting_at,
            expired_at: self.expired_at,
            creator: maybe_addr(api, self.creator)?,
            partner: maybe_addr(api, self.partner)?,
        })
    }
}

#[cw_serde]
pub struct Listing {
    pub id: String,
    pub kind: ListingKind,
    pub collection: Addr,
    pub token_id: TokenId,
    pub seller: Addr,
    pub creator: Option<Addr>,
    pub partner: Option<Addr>,
    pub price: Coin,
    pub ending_price: Option<Uint128>,
    pub starting_at: Timestamp,
    pub expired_at: Timestamp,
    pub status: ListingStatus,
}

impl Listing {
    pub fn new(
        kind: ListingKind,
        seller: Addr,
        collection: Addr,
        token_id: TokenId,
        details: ListingDetails<Addr>,
        time: Timestamp,
    ) -> Self {
        Self {
            id: generate_id(vec![
                time.nanos().to_be_bytes().as_ref(),
                seller.as_bytes(),
                collection.as_bytes(),
                token_id.as_bytes(),
                details.price.amount.to_be_bytes().as_ref(),
            ]),
            kind,
            collection,
            token_id,
            seller,
            creator: details.creator,
            partner: details.partner,
            price: details.price,
            ending_price: details.ending_price,
            starting_at: details.starting_at,
            expired_at: details.expired_at,
            status: ListingStatus::Live,
        }
    }

    /// The record written back after a cancellation or forced closure. Key
    /// fields survive so the entry stays distinct from a never-listed key.
    pub fn reset(collection: Addr, token_id: TokenId) -> Self {
        Self {
            id: "".to_string(),
            kind: ListingKind::FixedPrice,
            collection,
            token_id,
            seller: Addr::unchecked(""),
            creator: None,
            partner: None,
            price: coin(0u128, ""),
            ending_price: None,
            starting_at: Timestamp::default(),
            expired_at: Timestamp::default(),
            status: ListingStatus::Closed,
        }
    }

    pub fn key(&self) -> ListingKey {
        (self.collection.clone(), self.token_id.clone())
    }

    pub fn is_live(&self) -> bool {
        self.status == ListingStatus::Live
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        listings().save(storage, self.key(), self)?;
        Ok(())
    }

    pub fn get_event_attrs(&self, attr_keys: Vec<&str>) -> Vec<Attribute> {
        let mut attributes = vec![];
        for attr_key in attr_keys {
            let attr = match attr_key {
                "id" => Some(attr("id", self.id.to_string())),
                "kind" => Some(attr("kind", self.kind.as_str())),
                "collection" => Some(attr("collection", self.collection.to_string())),
                "token_id" => Some(attr("token_id", self.token_id.to_string())),
                "seller" => Some(attr("seller", self.seller.to_string())),
                "creator" => self
                    .creator
                    .as_ref()
                    .map(|creator| attr("creator", creator.to_string())),
                "partner" => self
                    .partner
                    .as_ref()
                    .map(|partner| attr("partner", partner.to_string())),
                "price" => Some(attr("price", self.price.to_string())),
                "ending_price" => self
                    .ending_price
                    .as_ref()
                    .map(|ending_price| attr("ending_price", ending_price.to_string())),
                "starting_at" => Some(attr("starting_at", self.starting_at.to_string())),
                "expired_at" => Some(attr("expired_at", self.expired_at.to_string())),
                "status" => Some(attr("status", self.status.as_str())),
                &_ => {
                    unreachable!("Invalid attr_key: {}", attr_key)
                }
            };
            if let Some(value) = attr {
                attributes.push(value);
            }
        }
        attributes
    }
}

#[cw_serde]
pub struct Bid {
    pub id: String,
    pub listing_id: String,
    pub collection: Addr,
    pub token_id: TokenId,
    pub bidder: Addr,
    pub fee_rate_snapshot: u64,
    pub price: Coin,
    pub starting_at: Timestamp,
    pub expired_at: Timestamp,
}

impl Bid {
    pub fn new(
        listing: &Listing,
        bidder: Addr,
        price: Coin,
        fee_rate_snapshot: u64,
        time: Timestamp,
    ) -> Self {
        Self {
            id: generate_id(vec![
                time.nanos().to_be_bytes().as_ref(),
                bidder.as_bytes(),
                listing.id.as_bytes(),
                price.amount.to_be_bytes().as_ref(),
                listing.expired_at.nanos().to_be_bytes().as_ref(),
            ]),
            listing_id: listing.id.clone(),
            collection: listing.collection.clone(),
            token_id: listing.token_id.clone(),
            bidder,
            fee_rate_snapshot,
            price,
            starting_at: time,
            expired_at: listing.expired_at,
        }
    }

    pub fn key(&self) -> ListingKey {
        (self.collection.clone(), self.token_id.clone())
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        bids().save(storage, self.key(), self)?;
        Ok(())
    }

    pub fn remove(&self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        bids().remove(storage, self.key())?;
        Ok(())
    }

    pub fn get_event_attrs(&self, attr_keys: Vec<&str>) -> Vec<Attribute> {
        let mut attributes = vec![];
        for attr_key in attr_keys {
            let attr = match attr_key {
                "id" => Some(attr("id", self.id.to_string())),
                "listing_id" => Some(attr("listing_id", self.listing_id.to_string())),
                "collection" => Some(attr("collection", self.collection.to_string())),
                "token_id" => Some(attr("token_id", self.token_id.to_string())),
                "bidder" => Some(attr("bidder", self.bidder.to_string())),
                "fee_rate_snapshot" => Some(attr(
                    "fee_rate_snapshot",
                    self.fee_rate_snapshot.to_string(),
                )),
                "price" => Some(attr("price", self.price.to_string())),
                "starting_at" => Some(attr("starting_at", self.starting_at.to_string())),
                "expired_at" => Some(attr("expired_at", self.expired_at.to_string())),
                &_ => {
                    unreachable!("Invalid attr_key: {}", attr_key)
                }
            };
            if let Some(value) = attr {
                attributes.push(value);
            }
        }
        attributes
    }
}
