use cosmwasm_std::{Addr, Api, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::address::{decode_address, validate_address};
use crate::msg::{
    BlacklistedAllResponse, BlacklistedResponse, MinterControllerInfo, MinterControllerResponse,
    MinterControllersResponse, MinterInfo, MinterResponse, MintersResponse, MintingDenomResponse,
    OwnerResponse, PausedResponse, RoleResponse,
};
use crate::state::{
    is_blacklisted, load_minting_denom, load_paused, Role, BLACKLISTED, MINTERS,
    MINTER_CONTROLLERS, OWNER, PENDING_OWNER,
};
use crate::ContractError;

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

/// Returns the owner and the pending owner. Response: OwnerResponse
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.may_load(deps.storage)?,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
    })
}

/// Returns the holder of a singleton role. Response: RoleResponse
pub fn query_role(deps: Deps, role: Role) -> StdResult<RoleResponse> {
    Ok(RoleResponse {
        address: role.item().may_load(deps.storage)?,
    })
}

pub fn query_paused(deps: Deps) -> Result<PausedResponse, ContractError> {
    Ok(PausedResponse {
        paused: load_paused(deps.storage)?,
    })
}

pub fn query_minting_denom(deps: Deps) -> Result<MintingDenomResponse, ContractError> {
    Ok(MintingDenomResponse {
        denom: load_minting_denom(deps.storage)?,
    })
}

/// Returns the remaining allowance of a minter. Response: MinterResponse
pub fn query_minter(deps: Deps, address: String) -> Result<MinterResponse, ContractError> {
    let (addr, _) = validate_address(deps.api, &address)?;
    let allowance = MINTERS
        .may_load(deps.storage, &addr)?
        .ok_or_else(|| ContractError::user_not_found("minter not found"))?;

    Ok(MinterResponse {
        minter: MinterInfo {
            address: addr.to_string(),
            allowance,
        },
    })
}

/// Parses a `start_after` address into the key it names.
fn start_addr(api: &dyn Api, start_after: Option<String>) -> Result<Option<Addr>, ContractError> {
    start_after
        .map(|address| validate_address(api, &address).map(|(addr, _)| addr))
        .transpose()
}

/// Enumerates over all minters. Response: MintersResponse
pub fn query_minters(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<MintersResponse, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_addr(deps.api, start_after)?;

    let minters = MINTERS
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (address, allowance) = item?;
            Ok(MinterInfo {
                address: address.to_string(),
                allowance,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MintersResponse { minters })
}

/// Returns the minter a controller may configure. Response: MinterControllerResponse
pub fn query_minter_controller(
    deps: Deps,
    controller: String,
) -> Result<MinterControllerResponse, ContractError> {
    let (controller, _) = validate_address(deps.api, &controller)?;
    let minter = MINTER_CONTROLLERS
        .may_load(deps.storage, &controller)?
        .ok_or_else(|| ContractError::user_not_found("minter controller not found"))?;

    Ok(MinterControllerResponse {
        minter_controller: MinterControllerInfo {
            controller: controller.to_string(),
            minter: minter.to_string(),
        },
    })
}

/// Enumerates over all controller bindings. Response: MinterControllersResponse
pub fn query_minter_controllers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<MinterControllersResponse, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_addr(deps.api, start_after)?;

    let minter_controllers = MINTER_CONTROLLERS
        .range(
            deps.storage,
            start.as_ref().map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|item| {
            let (controller, minter) = item?;
            Ok(MinterControllerInfo {
                controller: controller.to_string(),
                minter: minter.to_string(),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MinterControllersResponse { minter_controllers })
}

/// Returns whether the account behind `address` is blacklisted. Either
/// supported encoding of the account gives the same answer.
pub fn query_blacklisted(
    deps: Deps,
    address: String,
) -> Result<BlacklistedResponse, ContractError> {
    let address_bz = decode_address(&address)?;
    Ok(BlacklistedResponse {
        blacklisted: is_blacklisted(deps.storage, &address_bz),
    })
}

/// Enumerates over the raw bytes of all blacklisted accounts. Response: BlacklistedAllResponse
pub fn query_blacklisted_all(
    deps: Deps,
    start_after: Option<Binary>,
    limit: Option<u32>,
) -> StdResult<BlacklistedAllResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.as_ref().map(|address_bz| Bound::exclusive(address_bz.as_slice()));

    let blacklisted = BLACKLISTED
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|address_bz| address_bz.map(Binary::from))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BlacklistedAllResponse { blacklisted })
}
