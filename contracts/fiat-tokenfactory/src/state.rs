use cosmwasm_std::{Addr, Coin, Empty, QuerierWrapper, Storage};
use cw_storage_plus::{Item, Map};

use crate::ContractError;

pub const OWNER: Item<Addr> = Item::new("owner");
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");
pub const MASTER_MINTER: Item<Addr> = Item::new("master_minter");
pub const PAUSER: Item<Addr> = Item::new("pauser");
pub const BLACKLISTER: Item<Addr> = Item::new("blacklister");

/// The one denom governed by this contract, bound exactly once
pub const MINTING_DENOM: Item<String> = Item::new("minting_denom");

/// Whether movements of the minting denom are halted
pub const PAUSED: Item<bool> = Item::new("paused");

/// Blacklisted accounts, keyed by canonical address bytes
pub const BLACKLISTED: Map<&[u8], Empty> = Map::new("blacklisted");

/// Remaining mint allowance of every configured minter
pub const MINTERS: Map<&Addr, Coin> = Map::new("minters");

/// Controller address to the single minter it may configure
pub const MINTER_CONTROLLERS: Map<&Addr, Addr> = Map::new("minter_controllers");

/// The four singleton privileged roles. No address may hold two of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Owner,
    MasterMinter,
    Pauser,
    Blacklister,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Owner,
        Role::MasterMinter,
        Role::Pauser,
        Role::Blacklister,
    ];

    pub fn item(&self) -> Item<'static, Addr> {
        match self {
            Role::Owner => OWNER,
            Role::MasterMinter => MASTER_MINTER,
            Role::Pauser => PAUSER,
            Role::Blacklister => BLACKLISTER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::MasterMinter => "master minter",
            Role::Pauser => "pauser",
            Role::Blacklister => "blacklister",
        }
    }
}

/// Reads the paused flag. A store that never had it written is misconfigured.
pub fn load_paused(storage: &dyn Storage) -> Result<bool, ContractError> {
    PAUSED
        .may_load(storage)?
        .ok_or(ContractError::PausedNotInitialized {})
}

pub fn load_minting_denom(storage: &dyn Storage) -> Result<String, ContractError> {
    MINTING_DENOM
        .may_load(storage)?
        .ok_or(ContractError::MintingDenomNotSet {})
}

/// Binds the minting denom. The bank must already hold metadata for it and
/// a denom that was bound once can never be rebound.
pub fn bind_minting_denom(
    storage: &mut dyn Storage,
    querier: &QuerierWrapper,
    denom: &str,
) -> Result<(), ContractError> {
    if MINTING_DENOM.may_load(storage)?.is_some() {
        return Err(ContractError::MintingDenomSet {});
    }

    querier
        .query_denom_metadata(denom)
        .map_err(|_| ContractError::DenomNotRegistered {
            denom: denom.to_string(),
        })?;

    MINTING_DENOM.save(storage, &denom.to_string())?;
    Ok(())
}

pub fn is_blacklisted(storage: &dyn Storage, address_bz: &[u8]) -> bool {
    BLACKLISTED.has(storage, address_bz)
}
