use crate::{
    constants::FEE_RATE_DENOMINATOR,
    error::ContractError,
    events::{BidEvent, ConfigEvent, ListingEvent, PrimarySaleFeeOverrideEvent},
    helpers::{only_contract_admin, only_no_active_bid, settle_sale},
    msg::ExecuteMsg,
    orders::{Bid, Listing, ListingDetails, ListingKind},
    payout::dispatch_payment,
    state::{
        bids, listings, ListingKey, TokenId, CONFIG, ESCROW_BALANCES, PRIMARY_SALE_FEE_OVERRIDES,
    },
};

use cosmwasm_std::{
    coin, ensure, ensure_eq, Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128,
};
use curio_marketplace_common::{
    coin::checked_transfer_coin,
    nft::{has_approval_for_all, only_owner, owner_of},
    MarketplaceStdError,
};
use cw_utils::{must_pay, nonpayable};
use std::cmp::max;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let api = deps.api;

    match msg {
        ExecuteMsg::UpdateConfig {
            fee_manager,
            marketplace_fee_percent,
            creator_fee_percent,
            partner_fee_percent,
            min_bid_increment_percent,
            max_sale_price,
        } => execute_update_config(
            deps,
            env,
            info,
            fee_manager,
            marketplace_fee_percent,
            creator_fee_percent,
            partner_fee_percent,
            min_bid_increment_percent,
            max_sale_price,
        ),
        ExecuteMsg::SetPrimarySaleFeeOverride {
            collection,
            fee_percent,
        } => execute_set_primary_sale_fee_override(
            deps,
            env,
            info,
            api.addr_validate(&collection)?,
            fee_percent,
        ),
        ExecuteMsg::ForceCloseListing {
            collection,
            token_id,
        } => execute_force_close_listing(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::CreateFixedPriceListing {
            collection,
            token_id,
            details,
        } => execute_create_listing(
            deps,
            env,
            info,
            ListingKind::FixedPrice,
            api.addr_validate(&collection)?,
            token_id,
            details.str_to_addr(api)?,
        ),
        ExecuteMsg::CreateAuctionListing {
            collection,
            token_id,
            details,
        } => execute_create_listing(
            deps,
            env,
            info,
            ListingKind::Auction,
            api.addr_validate(&collection)?,
            token_id,
            details.str_to_addr(api)?,
        ),
        ExecuteMsg::CancelListing {
            collection,
            token_id,
        } => execute_cancel_listing(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::Buy {
            collection,
            token_id,
        } => execute_buy(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::PlaceBid {
            collection,
            token_id,
        } => execute_place_bid(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::AcceptBid {
            collection,
            token_id,
        } => execute_accept_bid(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::CancelBid {
            collection,
            token_id,
        } => execute_cancel_bid(deps, env, info, api.addr_validate(&collection)?, token_id),
        ExecuteMsg::Withdraw { payee } => {
            execute_withdraw(deps, env, info, api.addr_validate(&payee)?)
        }
    }
}

fn percent_to_rate(percent: u64) -> Result<u64, ContractError> {
    ensure!(
        percent <= 100,
        ContractError::InvalidInput("percent must not exceed 100".to_string())
    );
    Ok(percent * 10)
}

/// Remove the active bid on a key, if any, and queue its refund through the
/// payment dispatcher.
fn refund_active_bid(
    storage: &mut dyn Storage,
    key: &ListingKey,
    response: Response,
) -> Result<Response, ContractError> {
    let mut response = response;

    if let Some(bid) = bids().may_load(storage, key.clone())? {
        bid.remove(storage)?;

        response = dispatch_payment(storage, bid.price.clone(), &bid.bidder, response)?;

        response = response.add_event(
            BidEvent {
                ty: "refund-bid",
                bid: &bid,
                attr_keys: vec!["id", "listing_id", "collection", "token_id", "bidder", "price"],
            }
            .into(),
        );
    }

    Ok(response)
}

#[allow(clippy::too_many_arguments)]
pub fn execute_update_config(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    fee_manager: Option<String>,
    marketplace_fee_percent: Option<u64>,
    creator_fee_percent: Option<u64>,
    partner_fee_percent: Option<u64>,
    min_bid_increment_percent: Option<u64>,
    max_sale_price: Option<Uint128>,
) -> Result<Response, ContractError> {
    only_contract_admin(&deps.querier, &env, &info)?;

    let mut config = CONFIG.load(deps.storage)?;

    if let Some(fee_manager) = fee_manager {
        config.fee_manager = deps.api.addr_validate(&fee_manager)?;
    }
    if let Some(marketplace_fee_percent) = marketplace_fee_percent {
        config.marketplace_fee_rate = percent_to_rate(marketplace_fee_percent)?;
    }
    if let Some(creator_fee_percent) = creator_fee_percent {
        config.creator_fee_rate = percent_to_rate(creator_fee_percent)?;
    }
    if let Some(partner_fee_percent) = partner_fee_percent {
        config.partner_fee_rate = percent_to_rate(partner_fee_percent)?;
    }
    if let Some(min_bid_increment_percent) = min_bid_increment_percent {
        config.min_bid_increment_rate = percent_to_rate(min_bid_increment_percent)?;
    }
    if let Some(max_sale_price) = max_sale_price {
        config.max_sale_price = max_sale_price;
    }

    config.save(deps.storage)?;

    let response = Response::new().add_event(
        ConfigEvent {
            ty: "set-config",
            config: &config,
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_set_primary_sale_fee_override(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    fee_percent: u64,
) -> Result<Response, ContractError> {
    only_contract_admin(&deps.querier, &env, &info)?;

    let fee_rate = percent_to_rate(fee_percent)?;
    PRIMARY_SALE_FEE_OVERRIDES.save(deps.storage, collection.clone(), &fee_rate)?;

    let response = Response::new().add_event(
        PrimarySaleFeeOverrideEvent {
            ty: "set-primary-sale-fee-override",
            collection: collection.as_ref(),
            fee_rate,
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_create_listing(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: ListingKind,
    collection: Addr,
    token_id: TokenId,
    details: ListingDetails<Addr>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;

    // Only the current owner can list an NFT
    only_owner(&deps.querier, &info, &collection, &token_id)?;

    // The owner must have granted this contract a blanket transfer approval
    ensure!(
        has_approval_for_all(
            &deps.querier,
            &info.sender,
            &env.contract.address,
            &collection
        ),
        ContractError::TransferApprovalMissing {}
    );

    // An active bid pins the current auction listing in place
    only_no_active_bid(deps.as_ref(), &(collection.clone(), token_id.clone()))?;

    ensure_eq!(
        details.price.denom,
        config.denom,
        ContractError::InvalidInput("invalid denom".to_string())
    );
    ensure!(
        !details.price.amount.is_zero(),
        ContractError::InvalidInput("price must be greater than zero".to_string())
    );
    ensure!(
        details.price.amount <= config.max_sale_price,
        ContractError::InvalidInput("price exceeds max sale price".to_string())
    );
    ensure!(
        details.starting_at < details.expired_at,
        ContractError::InvalidInput("starting_at must be before expired_at".to_string())
    );

    match kind {
        ListingKind::FixedPrice => {
            ensure!(
                details.ending_price.is_none(),
                ContractError::InvalidInput("ending_price is only valid for auctions".to_string())
            );
        }
        ListingKind::Auction => {
            if let Some(ending_price) = details.ending_price {
                ensure!(
                    ending_price >= details.price.amount && ending_price <= config.max_sale_price,
                    ContractError::InvalidInput("ending_price out of range".to_string())
                );
            }
        }
    }

    let listing = Listing::new(
        kind,
        info.sender.clone(),
        collection,
        token_id,
        details,
        env.block.time,
    );
    listing.save(deps.storage)?;

    let response = Response::new().add_event(
        ListingEvent {
            ty: "create-listing",
            listing: &listing,
            attr_keys: vec![
                "id",
                "kind",
                "collection",
                "token_id",
                "seller",
                "creator",
                "partner",
                "price",
                "ending_price",
                "starting_at",
                "expired_at",
                "status",
            ],
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_cancel_listing(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let listing = listings()
        .may_load(deps.storage, (collection, token_id))?
        .ok_or(ContractError::ListingNotFound {})?;

    ensure!(listing.is_live(), ContractError::ListingNotLive {});

    ensure_eq!(
        info.sender,
        listing.seller,
        MarketplaceStdError::Unauthorized(
            "only the seller of listing can perform this action".to_string()
        )
    );

    let mut response = refund_active_bid(deps.storage, &listing.key(), Response::new())?;

    Listing::reset(listing.collection.clone(), listing.token_id.clone()).save(deps.storage)?;

    response = response.add_event(
        ListingEvent {
            ty: "cancel-listing",
            listing: &listing,
            attr_keys: vec!["id", "kind", "collection", "token_id", "seller"],
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_force_close_listing(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    only_contract_admin(&deps.querier, &env, &info)?;

    let listing = listings()
        .may_load(deps.storage, (collection, token_id))?
        .ok_or(ContractError::ListingNotFound {})?;

    ensure!(listing.is_live(), ContractError::ListingNotLive {});

    let mut response = refund_active_bid(deps.storage, &listing.key(), Response::new())?;

    Listing::reset(listing.collection.clone(), listing.token_id.clone()).save(deps.storage)?;

    response = response.add_event(
        ListingEvent {
            ty: "force-close-listing",
            listing: &listing,
            attr_keys: vec!["id", "kind", "collection", "token_id", "seller"],
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_buy(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let listing = listings()
        .may_load(deps.storage, (collection.clone(), token_id.clone()))?
        .ok_or(ContractError::ListingNotFound {})?;

    ensure_eq!(
        listing.kind,
        ListingKind::FixedPrice,
        ContractError::WrongListingKind {}
    );
    ensure!(listing.is_live(), ContractError::ListingNotLive {});
    ensure!(
        listing.starting_at <= env.block.time,
        ContractError::ListingNotStarted {}
    );

    let paid = must_pay(&info, &config.denom)?;
    ensure_eq!(
        paid,
        listing.price.amount,
        ContractError::IncorrectPayment {
            expected: listing.price.clone(),
        }
    );

    // The listing only sets a price while the recorded seller still owns
    // the NFT
    let owner_of_response = owner_of(&deps.querier, &collection, &token_id)?;
    ensure_eq!(
        owner_of_response.owner,
        listing.seller,
        ContractError::StaleListing {
            collection: collection.to_string(),
            token_id: token_id.to_string(),
        }
    );
    ensure!(
        has_approval_for_all(
            &deps.querier,
            &listing.seller,
            &env.contract.address,
            &collection
        ),
        ContractError::TransferApprovalMissing {}
    );

    let sale_price = listing.price.clone();
    settle_sale(
        deps,
        listing,
        &info.sender,
        sale_price,
        "sale",
        None,
        Response::new(),
    )
}

pub fn execute_place_bid(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let listing = listings()
        .may_load(deps.storage, (collection.clone(), token_id.clone()))?
        .ok_or(ContractError::ListingNotFound {})?;

    ensure_eq!(
        listing.kind,
        ListingKind::Auction,
        ContractError::WrongListingKind {}
    );
    ensure!(listing.is_live(), ContractError::ListingNotLive {});

    let block_time = env.block.time;
    ensure!(
        listing.starting_at <= block_time,
        ContractError::ListingNotStarted {}
    );
    ensure!(
        block_time < listing.expired_at,
        ContractError::ListingExpired {}
    );

    let bid_amount = must_pay(&info, &config.denom)?;
    ensure!(
        bid_amount <= config.max_sale_price,
        ContractError::InvalidInput("bid exceeds max sale price".to_string())
    );
    if let Some(ending_price) = listing.ending_price {
        ensure!(
            bid_amount <= ending_price,
            ContractError::InvalidInput("bid exceeds ending price".to_string())
        );
    }

    let mut response = Response::new();

    // A bid at the ending price settles the sale in the same call
    if listing.ending_price == Some(bid_amount) {
        let owner_of_response = owner_of(&deps.querier, &collection, &token_id)?;
        ensure_eq!(
            owner_of_response.owner,
            listing.seller,
            ContractError::StaleListing {
                collection: collection.to_string(),
                token_id: token_id.to_string(),
            }
        );
        ensure!(
            has_approval_for_all(
                &deps.querier,
                &listing.seller,
                &env.contract.address,
                &collection
            ),
            ContractError::TransferApprovalMissing {}
        );

        response = refund_active_bid(deps.storage, &listing.key(), response)?;

        return settle_sale(
            deps,
            listing,
            &info.sender,
            coin(bid_amount.u128(), &config.denom),
            "accept-bid",
            None,
            response,
        );
    }

    // Competitive bid, the current owner cannot outbid their own auction
    let owner_of_response = owner_of(&deps.querier, &collection, &token_id)?;
    ensure!(
        owner_of_response.owner != info.sender,
        ContractError::OwnerShouldNotBid {}
    );

    if let Some(current_bid) = bids().may_load(deps.storage, listing.key())? {
        let increment = current_bid
            .price
            .amount
            .multiply_ratio(config.min_bid_increment_rate, FEE_RATE_DENOMINATOR);
        let min_bid = max(
            current_bid.price.amount.checked_add(increment)?,
            current_bid.price.amount.checked_add(Uint128::one())?,
        );
        ensure!(bid_amount >= min_bid, ContractError::BidTooLow(min_bid));

        current_bid.remove(deps.storage)?;

        response = dispatch_payment(
            deps.storage,
            current_bid.price.clone(),
            &current_bid.bidder,
            response,
        )?;

        response = response.add_event(
            BidEvent {
                ty: "refund-bid",
                bid: &current_bid,
                attr_keys: vec!["id", "listing_id", "collection", "token_id", "bidder", "price"],
            }
            .into(),
        );
    }

    let bid = Bid::new(
        &listing,
        info.sender.clone(),
        coin(bid_amount.u128(), &config.denom),
        config.marketplace_fee_rate,
        block_time,
    );
    bid.save(deps.storage)?;

    response = response.add_event(
        BidEvent {
            ty: "place-bid",
            bid: &bid,
            attr_keys: vec![
                "id",
                "listing_id",
                "collection",
                "token_id",
                "bidder",
                "fee_rate_snapshot",
                "price",
                "starting_at",
                "expired_at",
            ],
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_accept_bid(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let listing = listings()
        .may_load(deps.storage, (collection.clone(), token_id.clone()))?
        .ok_or(ContractError::ListingNotFound {})?;

    ensure_eq!(
        listing.kind,
        ListingKind::Auction,
        ContractError::WrongListingKind {}
    );
    ensure!(listing.is_live(), ContractError::ListingNotLive {});

    // Only the current owner of the NFT can accept a bid
    only_owner(&deps.querier, &info, &collection, &token_id)?;

    let bid = bids()
        .may_load(deps.storage, listing.key())?
        .ok_or(ContractError::BidNotFound {})?;

    ensure!(
        env.block.time >= listing.expired_at,
        ContractError::ListingNotExpired {}
    );

    ensure!(
        has_approval_for_all(
            &deps.querier,
            &info.sender,
            &env.contract.address,
            &collection
        ),
        ContractError::TransferApprovalMissing {}
    );

    bid.remove(deps.storage)?;

    let sale_price = bid.price.clone();
    settle_sale(
        deps,
        listing,
        &bid.bidder,
        sale_price,
        "accept-bid",
        Some(&bid.id),
        Response::new(),
    )
}

pub fn execute_cancel_bid(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    collection: Addr,
    token_id: TokenId,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let bid = bids()
        .may_load(deps.storage, (collection, token_id))?
        .ok_or(ContractError::BidNotFound {})?;

    ensure_eq!(
        info.sender,
        bid.bidder,
        MarketplaceStdError::Unauthorized("only the bidder can perform this action".to_string())
    );

    bid.remove(deps.storage)?;

    let mut response = dispatch_payment(
        deps.storage,
        bid.price.clone(),
        &bid.bidder,
        Response::new(),
    )?;

    response = response.add_event(
        BidEvent {
            ty: "cancel-bid",
            bid: &bid,
            attr_keys: vec!["id", "listing_id", "collection", "token_id", "bidder", "price"],
        }
        .into(),
    );

    Ok(response)
}

pub fn execute_withdraw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    payee: Addr,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;

    let balance = ESCROW_BALANCES
        .may_load(deps.storage, payee.clone())?
        .unwrap_or_default();
    ensure!(!balance.is_zero(), ContractError::NothingToWithdraw {});

    ESCROW_BALANCES.remove(deps.storage, payee.clone());

    let mut response =
        checked_transfer_coin(coin(balance.u128(), &config.denom), &payee, Response::new())?;

    response = response.add_event(
        Event::new("withdraw-escrow".to_string())
            .add_attribute("payee", payee.to_string())
            .add_attribute("amount", balance.to_string()),
    );

    Ok(response)
}
