#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Bech32 / Bech32m address decoding into canonical account bytes
pub mod address;
/// Pre-execution compliance inspection of transaction messages
pub mod ante;
/// The smart contract itself, including the execute, instantiate, query, sudo
/// and migrate entry points
pub mod contract;
/// Private error module, ContractError is re-exported in the public interface
mod error;
/// Contract methods that can be executed and alter state
pub mod execute;
/// Genesis import, validation and export
pub mod genesis;
/// Helper functions used for validation and checks
pub mod helpers;
/// The ledger send-restriction hook
pub mod hooks;
/// Cross-chain packet receive interceptor
pub mod ibc;
/// Contract messages describing the API of the contract as well as responses
/// from contract queries
pub mod msg;
/// Contract queries
pub mod queries;
/// Decoders for the transaction messages the inspector understands
pub mod registry;
/// The contract state
pub mod state;


/// Error messages used in this contract
pub use crate::error::ContractError;
