use std::collections::HashMap;

use cosmwasm_std::{from_json, Binary, Coin};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::msg::AnyMsg;
use crate::ContractError;

pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";
pub const MSG_MULTI_SEND: &str = "/cosmos.bank.v1beta1.MsgMultiSend";
pub const MSG_TRANSFER: &str = "/ibc.applications.transfer.v1.MsgTransfer";
pub const MSG_GRANT: &str = "/cosmos.authz.v1beta1.MsgGrant";
pub const MSG_EXEC: &str = "/cosmos.authz.v1beta1.MsgExec";
pub const SEND_AUTHORIZATION: &str = "/cosmos.bank.v1beta1.SendAuthorization";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

/// One side of a multi-party send.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Io {
    pub address: String,
    pub coins: Vec<Coin>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MsgMultiSend {
    pub inputs: Vec<Io>,
    pub outputs: Vec<Io>,
}

/// Outbound cross-chain transfer. `receiver` lives on the counterparty chain.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MsgTransfer {
    pub source_port: String,
    pub source_channel: String,
    pub token: Coin,
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub memo: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SendAuthorization {
    pub spend_limit: Vec<Coin>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Authorization {
    Send(SendAuthorization),
    Other { type_url: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Grant {
    pub authorization: AnyMsg,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MsgGrant {
    pub granter: String,
    pub grantee: String,
    pub grant: Grant,
}

/// Delegated execution: `grantee` runs `msgs` on behalf of their signers.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MsgExec {
    pub grantee: String,
    pub msgs: Vec<AnyMsg>,
}

/// A decoded transaction message.
#[derive(Clone, Debug, PartialEq)]
pub enum TxMsg {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    Transfer(MsgTransfer),
    Grant {
        granter: String,
        grantee: String,
        authorization: Authorization,
    },
    Exec(MsgExec),
    /// Any message type without a registered decoder. It cannot move coins
    /// on its own account, so the inspector leaves it to the ledger hook.
    Other { type_url: String },
}

pub type Decoder = fn(&str, &Binary) -> Result<TxMsg, ContractError>;

/// Maps message type URLs to their decoders. Built once per entry point call
/// and handed by reference to whatever needs to look inside messages.
pub struct MsgRegistry {
    decoders: HashMap<&'static str, Decoder>,
}

impl MsgRegistry {
    /// A registry that knows no message types.
    fn empty() -> Self {
        MsgRegistry {
            decoders: HashMap::new(),
        }
    }

    /// A registry with every message type that can move coins.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(MSG_SEND, |type_url, value| {
            decode_json(type_url, value).map(TxMsg::Send)
        });
        registry.register(MSG_MULTI_SEND, |type_url, value| {
            decode_json(type_url, value).map(TxMsg::MultiSend)
        });
        registry.register(MSG_TRANSFER, |type_url, value| {
            decode_json(type_url, value).map(TxMsg::Transfer)
        });
        registry.register(MSG_GRANT, decode_grant);
        registry.register(MSG_EXEC, |type_url, value| {
            decode_json(type_url, value).map(TxMsg::Exec)
        });
        registry
    }

    fn register(&mut self, type_url: &'static str, decoder: Decoder) {
        self.decoders.insert(type_url, decoder);
    }

    pub fn decode(&self, msg: &AnyMsg) -> Result<TxMsg, ContractError> {
        match self.decoders.get(msg.type_url.as_str()) {
            Some(decoder) => decoder(&msg.type_url, &msg.value),
            None => Ok(TxMsg::Other {
                type_url: msg.type_url.clone(),
            }),
        }
    }
}

impl Default for MsgRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_json<T: DeserializeOwned>(type_url: &str, value: &Binary) -> Result<T, ContractError> {
    from_json(value).map_err(|err| ContractError::InvalidType {
        type_url: type_url.to_string(),
        reason: err.to_string(),
    })
}

fn decode_grant(type_url: &str, value: &Binary) -> Result<TxMsg, ContractError> {
    let MsgGrant {
        granter,
        grantee,
        grant,
    } = decode_json(type_url, value)?;

    let authorization = match grant.authorization.type_url.as_str() {
        SEND_AUTHORIZATION => Authorization::Send(decode_json(
            SEND_AUTHORIZATION,
            &grant.authorization.value,
        )?),
        other => Authorization::Other {
            type_url: other.to_string(),
        },
    };

    Ok(TxMsg::Grant {
        granter,
        grantee,
        authorization,
    })
}
