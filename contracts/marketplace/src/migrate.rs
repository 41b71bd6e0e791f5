use cosmwasm_schema::cw_serde;
use cosmwasm_std::{DepsMut, Env, Response, StdError};
use cw2::set_contract_version;
use semver::Version;

use crate::{
    constants::{CONTRACT_NAME, CONTRACT_VERSION},
    ContractError,
};

#[cw_serde]
pub struct MigrateMsg {}

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let current_version = cw2::get_contract_version(deps.storage)?;
    if current_version.contract != CONTRACT_NAME {
        return Err(StdError::generic_err("Cannot upgrade to a different contract").into());
    }
    let version: Version = current_version
        .version
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;
    let new_version: Version = CONTRACT_VERSION
        .parse()
        .map_err(|_| StdError::generic_err("Invalid contract version"))?;

    if version >= new_version {
        return Err(StdError::generic_err("Must upgrade to a greater version").into());
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new())
}
