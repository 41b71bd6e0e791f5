use cosmwasm_std::{
    to_json_binary, Addr, Empty, MessageInfo, QuerierWrapper, Response, StdResult, WasmMsg,
};
use cw721::{Cw721ExecuteMsg, Cw721QueryMsg, OperatorResponse, OwnerOfResponse};
use cw721_base::helpers::Cw721Contract;
use std::marker::PhantomData;

pub use crate::errors::MarketplaceStdError;

pub fn transfer_nft(
    collection: &Addr,
    token_id: &str,
    recipient: &Addr,
    response: Response,
) -> Response {
    response.add_message(WasmMsg::Execute {
        contract_addr: collection.to_string(),
        msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
            token_id: token_id.to_string(),
            recipient: recipient.to_string(),
        })
        .unwrap(),
        funds: vec![],
    })
}

pub fn owner_of(
    querier: &QuerierWrapper,
    collection: &Addr,
    token_id: &str,
) -> StdResult<OwnerOfResponse> {
    Cw721Contract::<Empty, Empty>(collection.clone(), PhantomData, PhantomData)
        .owner_of(querier, token_id, false)
}

pub fn only_owner(
    querier: &QuerierWrapper,
    info: &MessageInfo,
    collection: &Addr,
    token_id: &str,
) -> Result<(), MarketplaceStdError> {
    let owner_of_response = owner_of(querier, collection, token_id)?;
    if owner_of_response.owner != info.sender {
        return Err(MarketplaceStdError::Unauthorized(
            "sender is not owner".to_string(),
        ));
    }
    Ok(())
}

/// Check whether `operator` holds a blanket transfer approval from `owner`
/// on the collection. A missing or expired approval reports `false`.
pub fn has_approval_for_all(
    querier: &QuerierWrapper,
    owner: &Addr,
    operator: &Addr,
    collection: &Addr,
) -> bool {
    let response: StdResult<OperatorResponse> = querier.query_wasm_smart(
        collection,
        &Cw721QueryMsg::Operator {
            owner: owner.to_string(),
            operator: operator.to_string(),
            include_expired: Some(false),
        },
    );
    response.is_ok()
}
