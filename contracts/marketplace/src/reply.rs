use crate::{
    error::ContractError,
    state::{ESCROW_BALANCES, PENDING_PAYOUTS},
};

use cosmwasm_std::{DepsMut, Env, Event, Reply, Response, SubMsgResult, Uint128};

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

/// Settle the outcome of a dispatched payment. A rejected bank send is
/// credited to the recipient's escrow balance instead of failing the
/// transaction that queued it.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_PAYOUTS
        .may_load(deps.storage, msg.id)?
        .ok_or_else(|| ContractError::InternalError(format!("unknown payout id {}", msg.id)))?;

    PENDING_PAYOUTS.remove(deps.storage, msg.id);

    let mut response = Response::new();

    if let SubMsgResult::Err(error) = msg.result {
        ESCROW_BALANCES.update(
            deps.storage,
            pending.recipient.clone(),
            |balance| -> Result<Uint128, ContractError> {
                Ok(balance.unwrap_or_default().checked_add(pending.coin.amount)?)
            },
        )?;

        response = response.add_event(
            Event::new("escrow-payment".to_string())
                .add_attribute("recipient", pending.recipient.to_string())
                .add_attribute("amount", pending.coin.amount.to_string())
                .add_attribute("error", error),
        );
    }

    Ok(response)
}
