use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Api, Binary, Deps, DepsMut, Empty, Order, StdResult};

use crate::address::validate_address;
use crate::msg::{MinterControllerInfo, MinterInfo};
use crate::state::{
    bind_minting_denom, load_minting_denom, load_paused, Role, BLACKLISTED, MINTERS,
    MINTER_CONTROLLERS, PAUSED, PENDING_OWNER,
};
use crate::ContractError;

/// Complete contract state, imported at instantiation and exported through
/// `QueryMsg::ExportGenesis`.
#[cw_serde]
#[derive(Default)]
pub struct GenesisState {
    pub owner: Option<String>,
    pub pending_owner: Option<String>,
    pub master_minter: Option<String>,
    pub pauser: Option<String>,
    pub blacklister: Option<String>,
    pub paused: Option<bool>,
    pub minting_denom: Option<String>,
    /// Raw account bytes of blacklisted accounts
    #[serde(default)]
    pub blacklisted: Vec<Binary>,
    #[serde(default)]
    pub minters: Vec<MinterInfo>,
    #[serde(default)]
    pub minter_controllers: Vec<MinterControllerInfo>,
}

impl GenesisState {
    /// The singleton roles present in this state, in a fixed order.
    fn roles(&self) -> Vec<(Role, &str)> {
        [
            (Role::Owner, &self.owner),
            (Role::MasterMinter, &self.master_minter),
            (Role::Pauser, &self.pauser),
            (Role::Blacklister, &self.blacklister),
        ]
        .into_iter()
        .filter_map(|(role, address)| address.as_deref().map(|address| (role, address)))
        .collect()
    }

    /// Stateless validation of the whole dump. Nothing is written unless this
    /// passes.
    pub fn validate(&self, api: &dyn Api) -> Result<(), ContractError> {
        let mut blacklisted = HashSet::new();
        for address_bz in &self.blacklisted {
            if address_bz.is_empty() {
                return Err(ContractError::invalid_genesis(
                    "blacklisted address cannot be empty",
                ));
            }
            if !blacklisted.insert(address_bz.as_slice()) {
                return Err(ContractError::invalid_genesis(
                    "duplicated index for blacklisted",
                ));
            }
        }

        let mut minters = HashSet::new();
        for minter in &self.minters {
            if !minters.insert(validate_address(api, &minter.address)?.1) {
                return Err(ContractError::invalid_genesis(
                    "duplicated index for minters",
                ));
            }
            if minter.allowance.denom.is_empty() {
                return Err(ContractError::invalid_coins(
                    "minter allowance denom cannot be empty",
                ));
            }
            if let Some(denom) = &self.minting_denom {
                if minter.allowance.denom != *denom {
                    return Err(ContractError::invalid_coins(format!(
                        "minter allowance must be in {denom}"
                    )));
                }
            }
        }

        let mut controllers = HashSet::new();
        for binding in &self.minter_controllers {
            if !controllers.insert(validate_address(api, &binding.controller)?.1) {
                return Err(ContractError::invalid_genesis(
                    "duplicated index for minter controller",
                ));
            }
            validate_address(api, &binding.minter)?;
        }

        let roles = self
            .roles()
            .into_iter()
            .map(|(role, address)| Ok((role, address, validate_address(api, address)?.1)))
            .collect::<Result<Vec<_>, ContractError>>()?;
        for (i, (_, address, address_bz)) in roles.iter().enumerate() {
            if let Some((role, _, _)) = roles[i + 1..]
                .iter()
                .find(|(_, _, other_bz)| other_bz == address_bz)
            {
                return Err(ContractError::AlreadyPrivileged {
                    address: address.to_string(),
                    role: role.as_str().to_string(),
                });
            }
        }

        if let Some(pending_owner) = &self.pending_owner {
            validate_address(api, pending_owner)?;
        }

        if self.minting_denom.as_deref() == Some("") {
            return Err(ContractError::invalid_genesis(
                "minting denom cannot be an empty string",
            ));
        }

        Ok(())
    }
}

/// Validates and writes a genesis state into a fresh store. Fails with the
/// fatal `DenomNotRegistered` when the minting denom has no bank metadata.
pub fn init_genesis(deps: DepsMut, genesis: GenesisState) -> Result<(), ContractError> {
    genesis.validate(deps.api)?;

    for address_bz in &genesis.blacklisted {
        BLACKLISTED.save(deps.storage, address_bz.as_slice(), &Empty {})?;
    }

    if let Some(paused) = genesis.paused {
        PAUSED.save(deps.storage, &paused)?;
    }

    for (role, address) in genesis.roles() {
        let (addr, _) = validate_address(deps.api, address)?;
        role.item().save(deps.storage, &addr)?;
    }

    if let Some(pending_owner) = &genesis.pending_owner {
        let (addr, _) = validate_address(deps.api, pending_owner)?;
        PENDING_OWNER.save(deps.storage, &addr)?;
    }

    for minter in &genesis.minters {
        let (addr, _) = validate_address(deps.api, &minter.address)?;
        MINTERS.save(deps.storage, &addr, &minter.allowance)?;
    }

    for binding in &genesis.minter_controllers {
        let (controller, _) = validate_address(deps.api, &binding.controller)?;
        let (minter, _) = validate_address(deps.api, &binding.minter)?;
        MINTER_CONTROLLERS.save(deps.storage, &controller, &minter)?;
    }

    if let Some(denom) = &genesis.minting_denom {
        bind_minting_denom(deps.storage, &deps.querier, denom).map_err(|err| {
            if err.is_fatal() {
                deps.api
                    .debug(&format!("fiat-tokenfactory genesis aborted: {err}"));
            }
            err
        })?;
    }

    Ok(())
}

/// Dumps the complete state. The paused flag and minting denom are always
/// written, so exporting a store that never had them set fails.
pub fn export_genesis(deps: Deps) -> Result<GenesisState, ContractError> {
    let load = |role: Role| -> StdResult<Option<String>> {
        Ok(role.item().may_load(deps.storage)?.map(String::from))
    };

    let blacklisted = BLACKLISTED
        .keys(deps.storage, None, None, Order::Ascending)
        .map(|address_bz| address_bz.map(Binary::from))
        .collect::<StdResult<Vec<_>>>()?;

    let minters = MINTERS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (address, allowance) = item?;
            Ok(MinterInfo {
                address: address.to_string(),
                allowance,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let minter_controllers = MINTER_CONTROLLERS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| {
            let (controller, minter) = item?;
            Ok(MinterControllerInfo {
                controller: controller.to_string(),
                minter: minter.to_string(),
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(GenesisState {
        owner: load(Role::Owner)?,
        pending_owner: PENDING_OWNER
            .may_load(deps.storage)?
            .map(String::from),
        master_minter: load(Role::MasterMinter)?,
        pauser: load(Role::Pauser)?,
        blacklister: load(Role::Blacklister)?,
        paused: Some(load_paused(deps.storage)?),
        minting_denom: Some(load_minting_denom(deps.storage)?),
        blacklisted,
        minters,
        minter_controllers,
    })
}
