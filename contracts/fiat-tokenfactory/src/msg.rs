use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Coin};

use crate::genesis::GenesisState;

/// The message used to create a new instance of this smart contract.
///
/// The whole initial state is imported from `genesis`. The minting denom, if
/// given, must already have bank denom metadata.
#[cw_serde]
pub struct InstantiateMsg {
    pub genesis: GenesisState,
}

/// State changing methods available to this smart contract.
#[cw_serde]
pub enum ExecuteMsg {
    /// Proposes a new owner. The transfer completes once the candidate calls
    /// `AcceptOwner`. Owner only.
    UpdateOwner { address: String },

    /// Completes a pending ownership transfer. Pending owner only.
    AcceptOwner {},

    /// Owner only.
    UpdateMasterMinter { address: String },

    /// Owner only.
    UpdatePauser { address: String },

    /// Owner only.
    UpdateBlacklister { address: String },

    /// Binds `controller` to the one `minter` whose allowance it may set.
    /// An existing binding of the controller is overwritten. Master minter only.
    ConfigureMinterController { controller: String, minter: String },

    /// Master minter only.
    RemoveMinterController { controller: String },

    /// Sets the remaining mint allowance of a minter. Only the controller
    /// bound to `address` may call this, and not while the token is paused.
    ConfigureMinter { address: String, allowance: Coin },

    /// Revokes a minter. Only the controller bound to `address` may call
    /// this. Remains available while the token is paused.
    RemoveMinter { address: String },

    /// Mints `amount` to `address`, deducting it from the sender's allowance.
    Mint { address: String, amount: Coin },

    /// Burns `amount` from the sender's own balance. The sender must be a minter.
    Burn { amount: Coin },

    /// Blacklister only.
    Blacklist { address: String },

    /// Blacklister only.
    Unblacklist { address: String },

    /// Halts every movement of the minting denom. Pauser only.
    Pause {},

    /// Pauser only.
    Unpause {},
}

/// Used for smart contract migration.
#[cw_serde]
pub struct MigrateMsg {}

/// Queries supported by this smart contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the owner and the pending owner, if any. Response: OwnerResponse
    #[returns(OwnerResponse)]
    Owner {},

    #[returns(RoleResponse)]
    MasterMinter {},

    #[returns(RoleResponse)]
    Pauser {},

    #[returns(RoleResponse)]
    Blacklister {},

    /// Returns whether movements of the minting denom are halted. Response: PausedResponse
    #[returns(PausedResponse)]
    Paused {},

    #[returns(MintingDenomResponse)]
    MintingDenom {},

    /// Returns the remaining allowance of a minter. Response: MinterResponse
    #[returns(MinterResponse)]
    Minter { address: String },

    /// Enumerates over all minters. Response: MintersResponse
    #[returns(MintersResponse)]
    Minters {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the minter bound to a controller. Response: MinterControllerResponse
    #[returns(MinterControllerResponse)]
    MinterController { controller: String },

    /// Enumerates over all controller bindings. Response: MinterControllersResponse
    #[returns(MinterControllersResponse)]
    MinterControllers {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns whether the account behind `address` is blacklisted, whichever
    /// encoding it is given in. Response: BlacklistedResponse
    #[returns(BlacklistedResponse)]
    Blacklisted { address: String },

    /// Enumerates over the raw account bytes of all blacklisted accounts.
    /// Response: BlacklistedAllResponse
    #[returns(BlacklistedAllResponse)]
    BlacklistedAll {
        start_after: Option<Binary>,
        limit: Option<u32>,
    },

    /// Dumps the complete state in the form accepted by `InstantiateMsg`.
    #[returns(GenesisState)]
    ExportGenesis {},
}

/// SudoMsg is only exposed for internal Cosmos SDK modules to call.
#[cw_serde]
pub enum SudoMsg {
    /// Called by the bank on every movement of coins. Fails when a movement
    /// of the minting denom must not happen. `delegating` carries the
    /// delegating addresses the inspector reported for the enclosing
    /// transaction.
    BlockBeforeSend {
        from: String,
        to: String,
        amount: Vec<Coin>,
        #[serde(default)]
        delegating: Vec<String>,
    },

    /// Called by the transaction pipeline before any message handler runs.
    /// Response data: InspectTxResponse
    InspectTx { msgs: Vec<AnyMsg> },
}

/// A type tagged transaction message, as carried inside delegated execution.
/// `value` is the JSON encoded message body.
#[cw_serde]
pub struct AnyMsg {
    pub type_url: String,
    pub value: Binary,
}

/// Returned as data by `SudoMsg::InspectTx`. The pipeline hands `delegating`
/// to every `BlockBeforeSend` of the same transaction.
#[cw_serde]
pub struct InspectTxResponse {
    pub delegating: Vec<String>,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Option<Addr>,
    pub pending_owner: Option<Addr>,
}

/// Holder of a singleton role, `None` while the role is unassigned.
#[cw_serde]
pub struct RoleResponse {
    pub address: Option<Addr>,
}

#[cw_serde]
pub struct PausedResponse {
    pub paused: bool,
}

#[cw_serde]
pub struct MintingDenomResponse {
    pub denom: String,
}

/// A minter and its remaining allowance. Used in list queries and genesis.
#[cw_serde]
pub struct MinterInfo {
    pub address: String,
    pub allowance: Coin,
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: MinterInfo,
}

#[cw_serde]
pub struct MintersResponse {
    pub minters: Vec<MinterInfo>,
}

/// A controller and the minter it may configure. Used in list queries and genesis.
#[cw_serde]
pub struct MinterControllerInfo {
    pub controller: String,
    pub minter: String,
}

#[cw_serde]
pub struct MinterControllerResponse {
    pub minter_controller: MinterControllerInfo,
}

#[cw_serde]
pub struct MinterControllersResponse {
    pub minter_controllers: Vec<MinterControllerInfo>,
}

#[cw_serde]
pub struct BlacklistedResponse {
    pub blacklisted: bool,
}

#[cw_serde]
pub struct BlacklistedAllResponse {
    pub blacklisted: Vec<Binary>,
}
