use crate::msg::{ListingKeyOffset, QueryMsg};
use crate::orders::{Bid, Listing};
use crate::state::{
    bids, listings, Config, TokenId, CONFIG, ESCROW_BALANCES, PRIMARY_SALE_FEE_OVERRIDES, SOLD,
};

use cosmwasm_std::{to_json_binary, Addr, Binary, Deps, Env, StdResult, Uint128};
use curio_marketplace_common::query::{QueryBounds, QueryOptions};

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Listing {
            collection,
            token_id,
        } => to_json_binary(&query_listing(
            deps,
            deps.api.addr_validate(&collection)?,
            token_id,
        )?),
        QueryMsg::ListingsBySeller {
            seller,
            query_options,
        } => to_json_binary(&query_listings_by_seller(
            deps,
            deps.api.addr_validate(&seller)?,
            query_options.unwrap_or_default(),
        )?),
        QueryMsg::Bid {
            collection,
            token_id,
        } => to_json_binary(&query_bid(
            deps,
            deps.api.addr_validate(&collection)?,
            token_id,
        )?),
        QueryMsg::BidsByBidder {
            bidder,
            query_options,
        } => to_json_binary(&query_bids_by_bidder(
            deps,
            deps.api.addr_validate(&bidder)?,
            query_options.unwrap_or_default(),
        )?),
        QueryMsg::HasSold {
            collection,
            token_id,
        } => to_json_binary(&query_has_sold(
            deps,
            deps.api.addr_validate(&collection)?,
            token_id,
        )?),
        QueryMsg::EscrowBalance { payee } => to_json_binary(&query_escrow_balance(
            deps,
            deps.api.addr_validate(&payee)?,
        )?),
        QueryMsg::PrimarySaleFeeOverride { collection } => to_json_binary(
            &query_primary_sale_fee_override(deps, deps.api.addr_validate(&collection)?)?,
        ),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Config<Addr>> {
    CONFIG.load(deps.storage)
}

pub fn query_listing(
    deps: Deps,
    collection: Addr,
    token_id: TokenId,
) -> StdResult<Option<Listing>> {
    listings().may_load(deps.storage, (collection, token_id))
}

pub fn query_listings_by_seller(
    deps: Deps,
    seller: Addr,
    query_options: QueryOptions<ListingKeyOffset>,
) -> StdResult<Vec<Listing>> {
    let QueryBounds {
        limit,
        order,
        min,
        max,
    } = query_options.resolve(|offset| (Addr::unchecked(offset.collection), offset.token_id));

    let results: Vec<Listing> = listings()
        .idx
        .seller
        .prefix(seller)
        .range(deps.storage, min, max, order)
        .take(limit)
        .map(|item| item.map(|(_, v)| v))
        .collect::<StdResult<_>>()?;

    Ok(results)
}

pub fn query_bid(deps: Deps, collection: Addr, token_id: TokenId) -> StdResult<Option<Bid>> {
    bids().may_load(deps.storage, (collection, token_id))
}

pub fn query_bids_by_bidder(
    deps: Deps,
    bidder: Addr,
    query_options: QueryOptions<ListingKeyOffset>,
) -> StdResult<Vec<Bid>> {
    let QueryBounds {
        limit,
        order,
        min,
        max,
    } = query_options.resolve(|offset| (Addr::unchecked(offset.collection), offset.token_id));

    let results: Vec<Bid> = bids()
        .idx
        .bidder
        .prefix(bidder)
        .range(deps.storage, min, max, order)
        .take(limit)
        .map(|item| item.map(|(_, v)| v))
        .collect::<StdResult<_>>()?;

    Ok(results)
}

pub fn query_has_sold(deps: Deps, collection: Addr, token_id: TokenId) -> StdResult<bool> {
    Ok(SOLD
        .may_load(deps.storage, (collection, token_id))?
        .unwrap_or(false))
}

pub fn query_escrow_balance(deps: Deps, payee: Addr) -> StdResult<Uint128> {
    Ok(ESCROW_BALANCES
        .may_load(deps.storage, payee)?
        .unwrap_or_default())
}

pub fn query_primary_sale_fee_override(deps: Deps, collection: Addr) -> StdResult<Option<u64>> {
    PRIMARY_SALE_FEE_OVERRIDES.may_load(deps.storage, collection)
}
