use crate::{
    constants::{CONTRACT_NAME, CONTRACT_VERSION},
    error::ContractError,
    events::ConfigEvent,
    msg::InstantiateMsg,
    state::PAYOUT_NONCE,
};

use cosmwasm_std::{DepsMut, Env, Event, MessageInfo, Response};
use cw2::set_contract_version;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = msg.config.str_to_addr(deps.api)?;
    config.save(deps.storage)?;

    PAYOUT_NONCE.save(deps.storage, &0)?;

    let instantiate_event = Event::new("instantiate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION);

    Ok(Response::new().add_event(instantiate_event).add_event(
        ConfigEvent {
            ty: "set-config",
            config: &config,
        }
        .into(),
    ))
}
