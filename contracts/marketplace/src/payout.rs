use crate::{
    constants::FEE_RATE_DENOMINATOR,
    orders::Listing,
    state::{CONFIG, PAYOUT_NONCE, PENDING_PAYOUTS},
    ContractError,
};

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coin, Addr, BankMsg, Coin, Response, Storage, SubMsg};
use curio_marketplace_common::MarketplaceStdError;

/// A labeled share of a sale owed to a recipient
#[cw_serde]
pub struct Payment {
    pub label: String,
    pub coin: Coin,
    pub recipient: Addr,
}

/// An outbound payment held until its bank send is confirmed in the reply
/// handler
#[cw_serde]
pub struct PendingPayout {
    pub recipient: Addr,
    pub coin: Coin,
}

/// Send funds to a recipient through a submessage so that a failed transfer
/// is absorbed into the escrow ledger instead of aborting the caller.
pub fn dispatch_payment(
    storage: &mut dyn Storage,
    send_coin: Coin,
    recipient: &Addr,
    response: Response,
) -> Result<Response, ContractError> {
    if send_coin.amount.is_zero() {
        Err(MarketplaceStdError::ZeroAmountBankSend)?;
    }

    let payout_id = PAYOUT_NONCE.load(storage)?.wrapping_add(1);
    PAYOUT_NONCE.save(storage, &payout_id)?;

    PENDING_PAYOUTS.save(
        storage,
        payout_id,
        &PendingPayout {
            recipient: recipient.clone(),
            coin: send_coin.clone(),
        },
    )?;

    Ok(response.add_submessage(SubMsg::reply_always(
        BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![send_coin],
        },
        payout_id,
    )))
}

/// Compute the marketplace, creator, and partner shares of a sale using the
/// rates in effect at settlement time. Shares truncate toward zero. The
/// remainder of the sale amount is not paid out here.
pub fn build_sale_payments(
    storage: &dyn Storage,
    listing: &Listing,
    sale_price: &Coin,
) -> Result<Vec<Payment>, ContractError> {
    let config = CONFIG.load(storage)?;

    let mut payments: Vec<Payment> = vec![];

    let marketplace_share = sale_price
        .amount
        .multiply_ratio(config.marketplace_fee_rate, FEE_RATE_DENOMINATOR);
    if !marketplace_share.is_zero() {
        payments.push(Payment {
            label: "marketplace".to_string(),
            coin: coin(marketplace_share.u128(), &sale_price.denom),
            recipient: config.fee_manager.clone(),
        });
    }

    let creator_share = sale_price
        .amount
        .multiply_ratio(config.creator_fee_rate, FEE_RATE_DENOMINATOR);
    if !creator_share.is_zero() {
        let creator = listing
            .creator
            .clone()
            .ok_or_else(|| ContractError::MissingFeeRecipient("creator".to_string()))?;
        payments.push(Payment {
            label: "creator".to_string(),
            coin: coin(creator_share.u128(), &sale_price.denom),
            recipient: creator,
        });
    }

    let partner_share = sale_price
        .amount
        .multiply_ratio(config.partner_fee_rate, FEE_RATE_DENOMINATOR);
    if !partner_share.is_zero() {
        let partner = listing
            .partner
            .clone()
            .ok_or_else(|| ContractError::MissingFeeRecipient("partner".to_string()))?;
        payments.push(Payment {
            label: "partner".to_string(),
            coin: coin(partner_share.u128(), &sale_price.denom),
            recipient: partner,
        });
    }

    Ok(payments)
}
