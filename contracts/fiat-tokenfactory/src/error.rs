use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("user not found: {reason}")]
    UserNotFound { reason: String },

    #[error("address ({address}) is already assigned to the {role} role")]
    AlreadyPrivileged { address: String, role: String },

    #[error("user is already blacklisted")]
    UserBlacklisted {},

    #[error("{role} address is blacklisted: {address}")]
    Blacklisted { role: String, address: String },

    #[error("the chain is paused: {reason}")]
    Paused { reason: String },

    #[error("invalid address ({address}): {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid coins: {reason}")]
    InvalidCoins { reason: String },

    #[error("minting amount exceeds allowance: attempted to mint {amount}, but remaining allowance is {allowance}")]
    ExceedsAllowance { amount: Uint128, allowance: Uint128 },

    #[error("invalid genesis: {reason}")]
    InvalidGenesis { reason: String },

    #[error("invalid type {type_url}: {reason}")]
    InvalidType { type_url: String, reason: String },

    #[error("delegated execution nested deeper than {max} levels")]
    ExecDepthExceeded { max: usize },

    #[error("the minting denom has already been set")]
    MintingDenomSet {},

    #[error("denom {denom} is not registered in bank module denom metadata")]
    DenomNotRegistered { denom: String },

    #[error("minting denom is not set")]
    MintingDenomNotSet {},

    #[error("paused state is not initialized")]
    PausedNotInitialized {},
}

impl ContractError {
    pub fn unauthorized(reason: impl Into<String>) -> ContractError {
        ContractError::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn user_not_found(reason: impl Into<String>) -> ContractError {
        ContractError::UserNotFound {
            reason: reason.into(),
        }
    }

    pub fn paused(reason: impl Into<String>) -> ContractError {
        ContractError::Paused {
            reason: reason.into(),
        }
    }

    pub fn invalid_coins(reason: impl Into<String>) -> ContractError {
        ContractError::InvalidCoins {
            reason: reason.into(),
        }
    }

    pub fn invalid_genesis(reason: impl Into<String>) -> ContractError {
        ContractError::InvalidGenesis {
            reason: reason.into(),
        }
    }

    /// Misconfiguration that must abort initialization instead of failing a
    /// single transaction.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ContractError::MintingDenomSet {}
                | ContractError::DenomNotRegistered { .. }
                | ContractError::MintingDenomNotSet {}
                | ContractError::PausedNotInitialized {}
        )
    }
}
