use cosmwasm_std::{Addr, BankMsg, Coin, Response};

pub use crate::errors::MarketplaceStdError;

pub fn transfer_coin(send_coin: Coin, recipient: &Addr, response: Response) -> Response {
    response.add_message(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![send_coin],
    })
}

pub fn checked_transfer_coin(
    send_coin: Coin,
    recipient: &Addr,
    response: Response,
) -> Result<Response, MarketplaceStdError> {
    if send_coin.amount.is_zero() {
        return Err(MarketplaceStdError::ZeroAmountBankSend);
    }
    Ok(transfer_coin(send_coin, recipient, response))
}
