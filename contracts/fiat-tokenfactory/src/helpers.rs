use cosmwasm_std::{Addr, Api, Coin, Storage};

use crate::address::{decode_address, validate_address};
use crate::state::{is_blacklisted, load_paused, Role};
use crate::ContractError;

/// Loads the holder of a role, failing when the role was never assigned.
pub fn load_role(storage: &dyn Storage, role: Role) -> Result<Addr, ContractError> {
    role.item()
        .may_load(storage)?
        .ok_or_else(|| ContractError::user_not_found(format!("{} is not set", role.as_str())))
}

pub fn check_role(storage: &dyn Storage, role: Role, sender: &Addr) -> Result<(), ContractError> {
    let holder = load_role(storage, role)?;
    if holder != *sender {
        Err(ContractError::unauthorized(format!(
            "you are not the {}",
            role.as_str()
        )))
    } else {
        Ok(())
    }
}

/// Checks that `address` does not already hold one of the privileged roles,
/// comparing canonical bytes so either encoding of an account is caught.
/// `replacing` names the role being handed over, whose current holder is
/// not counted.
pub fn validate_privileges(
    storage: &dyn Storage,
    api: &dyn Api,
    address: &str,
    replacing: Option<Role>,
) -> Result<Addr, ContractError> {
    let (addr, address_bz) = validate_address(api, address)?;

    for role in Role::ALL {
        if Some(role) == replacing {
            continue;
        }
        if let Some(holder) = role.item().may_load(storage)? {
            if decode_address(holder.as_str())? == address_bz {
                return Err(ContractError::AlreadyPrivileged {
                    address: addr.to_string(),
                    role: role.as_str().to_string(),
                });
            }
        }
    }

    Ok(addr)
}

/// Fails when the account behind `address` is blacklisted. `role` names the
/// part the address plays, e.g. "sender", and ends up in the error.
pub fn check_not_blacklisted(
    storage: &dyn Storage,
    address: &str,
    role: &str,
) -> Result<(), ContractError> {
    let address_bz = decode_address(address)?;
    if is_blacklisted(storage, &address_bz) {
        return Err(ContractError::Blacklisted {
            role: role.to_string(),
            address: address.to_string(),
        });
    }
    Ok(())
}

pub fn check_not_paused(storage: &dyn Storage, reason: &str) -> Result<(), ContractError> {
    if load_paused(storage)? {
        return Err(ContractError::paused(reason));
    }
    Ok(())
}

/// Whether any of `coins` is a non-zero amount of `denom`.
pub fn moves_denom(coins: &[Coin], denom: &str) -> bool {
    coins
        .iter()
        .any(|coin| coin.denom == denom && !coin.amount.is_zero())
}
