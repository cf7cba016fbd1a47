#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use cw2::{get_contract_version, set_contract_version, ContractVersion};

use crate::ante;
use crate::error::ContractError;
use crate::execute;
use crate::genesis::{export_genesis, init_genesis};
use crate::hooks;
use crate::msg::{ExecuteMsg, InspectTxResponse, InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg};
use crate::queries;
use crate::registry::MsgRegistry;
use crate::state::Role;

// Version info for migration
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let minting_denom = msg.genesis.minting_denom.clone().unwrap_or_default();
    init_genesis(deps, msg.genesis)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender)
        .add_attribute("minting_denom", minting_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Role management
        ExecuteMsg::UpdateOwner { address } => execute::update_owner(deps, info, address),
        ExecuteMsg::AcceptOwner {} => execute::accept_owner(deps, info),
        ExecuteMsg::UpdateMasterMinter { address } => {
            execute::update_role(deps, info, Role::MasterMinter, address)
        }
        ExecuteMsg::UpdatePauser { address } => {
            execute::update_role(deps, info, Role::Pauser, address)
        }
        ExecuteMsg::UpdateBlacklister { address } => {
            execute::update_role(deps, info, Role::Blacklister, address)
        }
        ExecuteMsg::ConfigureMinterController { controller, minter } => {
            execute::configure_minter_controller(deps, info, controller, minter)
        }
        ExecuteMsg::RemoveMinterController { controller } => {
            execute::remove_minter_controller(deps, info, controller)
        }
        ExecuteMsg::ConfigureMinter { address, allowance } => {
            execute::configure_minter(deps, info, address, allowance)
        }
        ExecuteMsg::RemoveMinter { address } => execute::remove_minter(deps, info, address),

        // Minting
        ExecuteMsg::Mint { address, amount } => execute::mint(deps, env, info, address, amount),
        ExecuteMsg::Burn { amount } => execute::burn(deps, env, info, amount),

        // Compliance
        ExecuteMsg::Blacklist { address } => execute::blacklist(deps, info, address),
        ExecuteMsg::Unblacklist { address } => execute::unblacklist(deps, info, address),
        ExecuteMsg::Pause {} => execute::set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute::set_paused(deps, info, false),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::BlockBeforeSend {
            from,
            to,
            amount,
            delegating,
        } => hooks::beforesend_hook(deps, from, to, amount, delegating),
        SudoMsg::InspectTx { msgs } => {
            let registry = MsgRegistry::new();
            let delegating = ante::inspect_tx(deps.as_ref(), &registry, &msgs)?;

            Ok(Response::new()
                .set_data(to_json_binary(&InspectTxResponse { delegating })?)
                .add_attribute("action", "inspect_tx"))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    Ok(match msg {
        QueryMsg::Owner {} => to_json_binary(&queries::query_owner(deps)?)?,
        QueryMsg::MasterMinter {} => {
            to_json_binary(&queries::query_role(deps, Role::MasterMinter)?)?
        }
        QueryMsg::Pauser {} => to_json_binary(&queries::query_role(deps, Role::Pauser)?)?,
        QueryMsg::Blacklister {} => {
            to_json_binary(&queries::query_role(deps, Role::Blacklister)?)?
        }
        QueryMsg::Paused {} => to_json_binary(&queries::query_paused(deps)?)?,
        QueryMsg::MintingDenom {} => to_json_binary(&queries::query_minting_denom(deps)?)?,
        QueryMsg::Minter { address } => to_json_binary(&queries::query_minter(deps, address)?)?,
        QueryMsg::Minters { start_after, limit } => {
            to_json_binary(&queries::query_minters(deps, start_after, limit)?)?
        }
        QueryMsg::MinterController { controller } => {
            to_json_binary(&queries::query_minter_controller(deps, controller)?)?
        }
        QueryMsg::MinterControllers { start_after, limit } => {
            to_json_binary(&queries::query_minter_controllers(deps, start_after, limit)?)?
        }
        QueryMsg::Blacklisted { address } => {
            to_json_binary(&queries::query_blacklisted(deps, address)?)?
        }
        QueryMsg::BlacklistedAll { start_after, limit } => {
            to_json_binary(&queries::query_blacklisted_all(deps, start_after, limit)?)?
        }
        QueryMsg::ExportGenesis {} => to_json_binary(&export_genesis(deps)?)?,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let storage_version: ContractVersion = get_contract_version(deps.storage)?;

    // Only migrate if newer
    if storage_version.version.as_str() < CONTRACT_VERSION {
        // Set contract to version to latest
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::new().add_attribute("action", "migrate"))
}
