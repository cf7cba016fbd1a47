use cosmwasm_std::{Coin, DepsMut, Response};

use crate::error::ContractError;
use crate::helpers::{check_not_blacklisted, check_not_paused, moves_denom};
use crate::state::load_minting_denom;

/// The before send hook is called by the bank before every movement of coins,
/// whatever caused it, and is the one check that cannot be bypassed.
///
/// Movements that carry none of the minting denom pass untouched. Otherwise
/// the movement is rejected while paused, when either party is blacklisted,
/// or when any of the transaction's delegating addresses is blacklisted.
pub fn beforesend_hook(
    deps: DepsMut,
    from: String,
    to: String,
    amount: Vec<Coin>,
    delegating: Vec<String>,
) -> Result<Response, ContractError> {
    let denom = load_minting_denom(deps.storage)?;
    if !moves_denom(&amount, &denom) {
        return Ok(Response::new().add_attribute("action", "before_send"));
    }

    check_not_paused(deps.storage, "cannot perform token transfers")?;

    check_not_blacklisted(deps.storage, &from, "sender")?;
    check_not_blacklisted(deps.storage, &to, "receiver")?;

    for address in &delegating {
        check_not_blacklisted(deps.storage, address, "delegating")?;
    }

    Ok(Response::new()
        .add_attribute("action", "before_send")
        .add_attribute("from", from)
        .add_attribute("to", to))
}
