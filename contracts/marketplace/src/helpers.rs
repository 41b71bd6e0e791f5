use crate::{
    orders::{Listing, ListingStatus},
    payout::{build_sale_payments, dispatch_payment},
    state::{bids, ListingKey, SOLD},
    ContractError,
};

use cosmwasm_std::{
    ensure_eq, Addr, Coin, Deps, DepsMut, Env, Event, MessageInfo, QuerierWrapper, Response,
};
use curio_marketplace_common::{nft::transfer_nft, MarketplaceStdError};
use sha3::{Digest, Keccak256};

pub fn generate_id(components: Vec<&[u8]>) -> String {
    let mut hasher = Keccak256::new();
    for component in components {
        hasher.update(component);
    }
    format!("{:x}", hasher.finalize())
}

pub fn only_contract_admin(
    querier: &QuerierWrapper,
    env: &Env,
    info: &MessageInfo,
) -> Result<(), ContractError> {
    let contract_info_resp = querier.query_wasm_contract_info(&env.contract.address)?;

    if contract_info_resp.admin.is_none() {
        Err(MarketplaceStdError::Unauthorized(
            "contract admin unset".to_string(),
        ))?;
    }

    ensure_eq!(
        info.sender,
        contract_info_resp.admin.unwrap(),
        MarketplaceStdError::Unauthorized(
            "only the admin of contract can perform this action".to_string(),
        )
    );

    Ok(())
}

pub fn only_no_active_bid(deps: Deps, key: &ListingKey) -> Result<(), ContractError> {
    if bids().may_load(deps.storage, key.clone())?.is_some() {
        return Err(ContractError::BidExists {
            collection: key.0.to_string(),
            token_id: key.1.to_string(),
        });
    }
    Ok(())
}

/// Close out a listing at the given sale price. The listing is marked closed
/// and the key marked sold before any payment or custodian messages are added,
/// so a reentrant call observes settled state.
pub fn settle_sale(
    deps: DepsMut,
    listing: Listing,
    buyer: &Addr,
    sale_price: Coin,
    event_ty: &str,
    bid_id: Option<&str>,
    response: Response,
) -> Result<Response, ContractError> {
    let mut listing = listing;
    listing.status = ListingStatus::Closed;
    listing.save(deps.storage)?;

    SOLD.save(deps.storage, listing.key(), &true)?;

    let payments = build_sale_payments(deps.storage, &listing, &sale_price)?;

    let mut response = response;
    for payment in payments.iter() {
        response = dispatch_payment(
            deps.storage,
            payment.coin.clone(),
            &payment.recipient,
            response,
        )?;
    }

    response = transfer_nft(&listing.collection, &listing.token_id, buyer, response);

    let mut sale_event = Event::new(event_ty.to_string())
        .add_attribute("listing_id", listing.id.to_string())
        .add_attribute("kind", listing.kind.as_str())
        .add_attribute("collection", listing.collection.to_string())
        .add_attribute("token_id", listing.token_id.to_string())
        .add_attribute("seller", listing.seller.to_string())
        .add_attribute("buyer", buyer.to_string())
        .add_attribute("denom", sale_price.denom.to_string())
        .add_attribute("price", sale_price.amount.to_string());

    if let Some(bid_id) = bid_id {
        sale_event = sale_event.add_attribute("bid_id", bid_id.to_string());
    }

    for payment in payments.iter() {
        sale_event = sale_event.add_attribute(&payment.label, payment.coin.amount.to_string());
    }

    response = response.add_event(sale_event);

    Ok(response)
}
