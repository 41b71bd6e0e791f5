use crate::{
    orders::{Bid, Listing},
    state::Config,
};

use cosmwasm_std::{attr, Addr, Event};
use std::vec;

pub struct ConfigEvent<'a> {
    pub ty: &'a str,
    pub config: &'a Config<Addr>,
}

impl<'a> From<ConfigEvent<'a>> for Event {
    fn from(ce: ConfigEvent) -> Self {
        Event::new(ce.ty.to_string()).add_attributes(vec![
            attr("fee_manager", ce.config.fee_manager.to_string()),
            attr("denom", ce.config.denom.to_string()),
            attr(
                "marketplace_fee_rate",
                ce.config.marketplace_fee_rate.to_string(),
            ),
            attr("creator_fee_rate", ce.config.creator_fee_rate.to_string()),
            attr("partner_fee_rate", ce.config.partner_fee_rate.to_string()),
            attr(
                "min_bid_increment_rate",
                ce.config.min_bid_increment_rate.to_string(),
            ),
            attr("max_sale_price", ce.config.max_sale_price.to_string()),
        ])
    }
}

pub struct PrimarySaleFeeOverrideEvent<'a> {
    pub ty: &'a str,
    pub collection: &'a str,
    pub fee_rate: u64,
}

impl<'a> From<PrimarySaleFeeOverrideEvent<'a>> for Event {
    fn from(pe: PrimarySaleFeeOverrideEvent) -> Self {
        Event::new(pe.ty.to_string()).add_attributes(vec![
            attr("collection", pe.collection.to_string()),
            attr("fee_rate", pe.fee_rate.to_string()),
        ])
    }
}

pub struct ListingEvent<'a> {
    pub ty: &'a str,
    pub listing: &'a Listing,
    pub attr_keys: Vec<&'a str>,
}

impl<'a> From<ListingEvent<'a>> for Event {
    fn from(le: ListingEvent) -> Self {
        Event::new(le.ty.to_string()).add_attributes(le.listing.get_event_attrs(le.attr_keys))
    }
}

pub struct BidEvent<'a> {
    pub ty: &'a str,
    pub bid: &'a Bid,
    pub attr_keys: Vec<&'a str>,
}

impl<'a> From<BidEvent<'a>> for Event {
    fn from(be: BidEvent) -> Self {
        Event::new(be.ty.to_string()).add_attributes(be.bid.get_event_attrs(be.attr_keys))
    }
}
