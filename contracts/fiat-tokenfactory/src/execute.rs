use cosmwasm_std::{
    Addr, Api, BankMsg, Coin, CosmosMsg, DepsMut, Empty, Env, MessageInfo, Response, Storage,
};
use osmosis_std::types::osmosis::tokenfactory::v1beta1::{MsgBurn, MsgMint};

use crate::address::{decode_address, validate_address};
use crate::error::ContractError;
use crate::helpers::{
    check_not_blacklisted, check_not_paused, check_role, validate_privileges,
};
use crate::state::{
    is_blacklisted, load_minting_denom, Role, BLACKLISTED, MINTERS, MINTER_CONTROLLERS, OWNER,
    PAUSED, PENDING_OWNER,
};

/// Proposes `address` as the next owner. Ownership only moves once the
/// candidate accepts.
pub fn update_owner(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::Owner, &info.sender)?;
    let candidate = validate_privileges(deps.storage, deps.api, &address, None)?;

    PENDING_OWNER.save(deps.storage, &candidate)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("pending_owner", candidate))
}

pub fn accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let pending_owner = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or_else(|| ContractError::user_not_found("pending owner is not set"))?;

    if pending_owner != info.sender {
        return Err(ContractError::unauthorized("you are not the pending owner"));
    }

    // the candidate may have picked up another role while the transfer was pending
    validate_privileges(
        deps.storage,
        deps.api,
        pending_owner.as_str(),
        Some(Role::Owner),
    )?;

    OWNER.save(deps.storage, &pending_owner)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("owner", pending_owner))
}

/// Reassigns the master minter, pauser or blacklister role. Owner only.
pub fn update_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::Owner, &info.sender)?;
    let addr = validate_privileges(deps.storage, deps.api, &address, None)?;

    role.item().save(deps.storage, &addr)?;

    Ok(Response::new()
        .add_attribute("action", format!("update_{}", role.as_str().replace(' ', "_")))
        .add_attribute("address", addr))
}

pub fn configure_minter_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
    minter: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::MasterMinter, &info.sender)?;
    let (controller, _) = validate_address(deps.api, &controller)?;
    let (minter, _) = validate_address(deps.api, &minter)?;

    MINTER_CONTROLLERS.save(deps.storage, &controller, &minter)?;

    Ok(Response::new()
        .add_attribute("action", "configure_minter_controller")
        .add_attribute("controller", controller)
        .add_attribute("minter", minter))
}

pub fn remove_minter_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::MasterMinter, &info.sender)?;
    let (controller, _) = validate_address(deps.api, &controller)?;

    if !MINTER_CONTROLLERS.has(deps.storage, &controller) {
        return Err(ContractError::user_not_found(
            "minter controller with a given address doesn't exist",
        ));
    }
    MINTER_CONTROLLERS.remove(deps.storage, &controller);

    Ok(Response::new()
        .add_attribute("action", "remove_minter_controller")
        .add_attribute("controller", controller))
}

/// Returns the minter bound to the sender, failing unless it is `address`.
fn check_is_controller_of(
    storage: &dyn Storage,
    api: &dyn Api,
    sender: &Addr,
    address: &str,
) -> Result<Addr, ContractError> {
    let minter = MINTER_CONTROLLERS
        .may_load(storage, sender)?
        .ok_or_else(|| ContractError::unauthorized("minter controller not found"))?;

    let (addr, _) = validate_address(api, address)?;
    if addr != minter {
        return Err(ContractError::unauthorized(format!(
            "minter address ≠ minter controller's minter address, ({addr}≠{minter})"
        )));
    }
    Ok(minter)
}

pub fn configure_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    allowance: Coin,
) -> Result<Response, ContractError> {
    let minter = check_is_controller_of(deps.storage, deps.api, &info.sender, &address)?;

    if allowance.denom != load_minting_denom(deps.storage)? {
        return Err(ContractError::invalid_coins("minting denom is incorrect"));
    }

    check_not_paused(deps.storage, "minting is paused")?;

    MINTERS.save(deps.storage, &minter, &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "configure_minter")
        .add_attribute("controller", info.sender)
        .add_attribute("minter", minter)
        .add_attribute("allowance", allowance.to_string()))
}

/// Revokes a minter. Stays available while paused so minting capability can
/// be withdrawn during an incident.
pub fn remove_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let minter = check_is_controller_of(deps.storage, deps.api, &info.sender, &address)?;

    if !MINTERS.has(deps.storage, &minter) {
        return Err(ContractError::user_not_found(
            "a minter with a given address doesn't exist",
        ));
    }
    MINTERS.remove(deps.storage, &minter);

    Ok(Response::new()
        .add_attribute("action", "remove_minter")
        .add_attribute("controller", info.sender)
        .add_attribute("minter", minter))
}

/// Mints `amount` to `address`. The allowance is decremented before the
/// ledger messages are emitted; their failure reverts the whole transaction.
pub fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
    amount: Coin,
) -> Result<Response, ContractError> {
    let mut allowance = MINTERS
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::unauthorized("you are not a minter"))?;

    check_not_blacklisted(deps.storage, info.sender.as_str(), "minter")?;
    check_not_blacklisted(deps.storage, &address, "receiver")?;

    if amount.denom != load_minting_denom(deps.storage)? {
        return Err(ContractError::invalid_coins("minting denom is incorrect"));
    }

    if amount.amount.is_zero() {
        return Err(ContractError::invalid_coins("minting amount is invalid"));
    }

    allowance.amount = allowance.amount.checked_sub(amount.amount).map_err(|_| {
        ContractError::ExceedsAllowance {
            amount: amount.amount,
            allowance: allowance.amount,
        }
    })?;

    check_not_paused(deps.storage, "minting is paused")?;

    MINTERS.save(deps.storage, &info.sender, &allowance)?;

    let (receiver, _) = validate_address(deps.api, &address)?;

    // Mint to the contract, then hand the new supply to the receiver through
    // the bank so the send restriction sees the movement
    let mint_msg: CosmosMsg<Empty> = MsgMint {
        sender: env.contract.address.to_string(),
        amount: Some(amount.clone().into()),
        mint_to_address: env.contract.address.to_string(),
    }
    .into();
    let send_msg = BankMsg::Send {
        to_address: receiver.to_string(),
        amount: vec![amount.clone()],
    };

    Ok(Response::new()
        .add_message(mint_msg)
        .add_message(send_msg)
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender)
        .add_attribute("to", receiver)
        .add_attribute("amount", amount.to_string()))
}

/// Burns `amount` out of the sender's own balance. An insufficient balance is
/// reported by the ledger when the burn message executes.
pub fn burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Coin,
) -> Result<Response, ContractError> {
    if !MINTERS.has(deps.storage, &info.sender) {
        return Err(ContractError::unauthorized("you are not a minter"));
    }

    check_not_blacklisted(deps.storage, info.sender.as_str(), "minter")?;

    if amount.denom != load_minting_denom(deps.storage)? {
        return Err(ContractError::invalid_coins("burning denom is incorrect"));
    }

    if amount.amount.is_zero() {
        return Err(ContractError::invalid_coins("burning amount is invalid"));
    }

    check_not_paused(deps.storage, "burning is paused")?;

    let burn_msg: CosmosMsg<Empty> = MsgBurn {
        sender: env.contract.address.to_string(),
        amount: Some(amount.clone().into()),
        burn_from_address: info.sender.to_string(),
    }
    .into();

    Ok(Response::new()
        .add_message(burn_msg)
        .add_attribute("action", "burn")
        .add_attribute("minter", info.sender)
        .add_attribute("amount", amount.to_string()))
}

pub fn blacklist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::Blacklister, &info.sender)?;
    let address_bz = decode_address(&address)?;

    if is_blacklisted(deps.storage, &address_bz) {
        return Err(ContractError::UserBlacklisted {});
    }
    BLACKLISTED.save(deps.storage, &address_bz, &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "blacklist")
        .add_attribute("address", address))
}

pub fn unblacklist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::Blacklister, &info.sender)?;
    let address_bz = decode_address(&address)?;

    if !is_blacklisted(deps.storage, &address_bz) {
        return Err(ContractError::user_not_found("the specified address is not blacklisted"));
    }
    BLACKLISTED.remove(deps.storage, &address_bz);

    Ok(Response::new()
        .add_attribute("action", "unblacklist")
        .add_attribute("address", address))
}

/// Sets the paused flag. Setting it to the value it already has succeeds.
pub fn set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    check_role(deps.storage, Role::Pauser, &info.sender)?;

    PAUSED.save(deps.storage, &paused)?;

    Ok(Response::new()
        .add_attribute("action", if paused { "pause" } else { "unpause" })
        .add_attribute("pauser", info.sender))
}
