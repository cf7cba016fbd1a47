use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Binary, Deps, DepsMut, Env, IbcBasicResponse, IbcChannelCloseMsg,
    IbcChannelConnectMsg, IbcChannelOpenMsg, IbcChannelOpenResponse, IbcPacketAckMsg,
    IbcPacketReceiveMsg, IbcPacketTimeoutMsg, IbcReceiveResponse, StdError, StdResult,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::decode_address;
use crate::state::{is_blacklisted, load_minting_denom, load_paused};
use crate::ContractError;

/// The callbacks of an IBC application, as driven by the IBC core.
pub trait IbcModule {
    fn on_channel_open(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelOpenMsg,
    ) -> StdResult<IbcChannelOpenResponse>;

    fn on_channel_connect(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelConnectMsg,
    ) -> StdResult<IbcBasicResponse>;

    fn on_channel_close(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelCloseMsg,
    ) -> StdResult<IbcBasicResponse>;

    fn on_recv_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketReceiveMsg,
    ) -> StdResult<IbcReceiveResponse>;

    fn on_acknowledgement_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketAckMsg,
    ) -> StdResult<IbcBasicResponse>;

    fn on_timeout_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketTimeoutMsg,
    ) -> StdResult<IbcBasicResponse>;
}

/// ICS-20 transfer packet payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FungibleTokenPacketData {
    pub denom: String,
    pub amount: String,
    pub sender: String,
    pub receiver: String,
    #[serde(default)]
    pub memo: String,
}

/// ICS-20 acknowledgement, `{"result": ...}` or `{"error": ...}` on the wire.
#[cw_serde]
pub enum Ics20Ack {
    Result(Binary),
    Error(String),
}

pub fn ack_success() -> StdResult<Binary> {
    to_json_binary(&Ics20Ack::Result(Binary::from(vec![1u8])))
}

pub fn ack_fail(err: impl ToString) -> StdResult<Binary> {
    to_json_binary(&Ics20Ack::Error(err.to_string()))
}

/// Why an inbound packet was refused. Only the message crosses the wire.
#[derive(Error, Debug, PartialEq)]
pub enum ReceiveError {
    #[error("cannot unmarshal ICS-20 transfer packet data: {0}")]
    Malformed(String),

    #[error("the chain is paused")]
    Paused,

    #[error("sender address is blacklisted")]
    SenderBlacklisted,

    #[error("receiver address is blacklisted")]
    ReceiverBlacklisted,

    #[error("invalid address ({address}): {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The contract itself is misconfigured. Never turned into an
    /// acknowledgement.
    #[error("{0}")]
    Fatal(ContractError),
}

impl ReceiveError {
    pub fn kind(&self) -> &'static str {
        match self {
            ReceiveError::Malformed(_) => "malformed",
            ReceiveError::Paused => "paused",
            ReceiveError::SenderBlacklisted => "sender_blacklisted",
            ReceiveError::ReceiverBlacklisted => "receiver_blacklisted",
            ReceiveError::InvalidAddress { .. } => "invalid_address",
            ReceiveError::Fatal(_) => "fatal",
        }
    }
}

impl From<ContractError> for ReceiveError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::InvalidAddress { address, reason } => {
                ReceiveError::InvalidAddress { address, reason }
            }
            err => ReceiveError::Fatal(err),
        }
    }
}

/// Returns the base denom of an ICS-20 denom trace such as
/// `transfer/channel-0/uusdc`. Leading `port/channel` hops are stripped as
/// long as the channel part is a channel identifier.
pub fn base_denom(denom: &str) -> &str {
    let parts: Vec<&str> = denom.split('/').collect();
    if parts.len() < 3 {
        return denom;
    }

    let mut offset = 0;
    let mut i = 0;
    while i + 1 < parts.len() && is_channel_id(parts[i + 1]) {
        offset += parts[i].len() + parts[i + 1].len() + 2;
        i += 2;
    }

    if i >= parts.len() {
        // nothing but hops, the last identifier stands in for the base
        return parts[parts.len() - 1];
    }
    &denom[offset..]
}

fn is_channel_id(id: &str) -> bool {
    id.strip_prefix("channel-")
        .map(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}

/// Screens an inbound transfer packet. Packets of other denoms pass.
pub fn check_packet(deps: Deps, data: &Binary) -> Result<(), ReceiveError> {
    let packet: FungibleTokenPacketData =
        from_json(data).map_err(|err| ReceiveError::Malformed(err.to_string()))?;

    let minting_denom = load_minting_denom(deps.storage)?;
    if base_denom(&packet.denom) != minting_denom {
        return Ok(());
    }

    if load_paused(deps.storage)? {
        return Err(ReceiveError::Paused);
    }

    if is_blacklisted(deps.storage, &decode_address(&packet.receiver)?) {
        return Err(ReceiveError::ReceiverBlacklisted);
    }
    if is_blacklisted(deps.storage, &decode_address(&packet.sender)?) {
        return Err(ReceiveError::SenderBlacklisted);
    }

    Ok(())
}

/// Wraps an ICS-20 transfer application. Packets of the minting denom that
/// fail the compliance checks are refused with an error acknowledgement
/// before the wrapped application sees them. Every other callback is handed
/// through unchanged.
pub struct BlockIbcMiddleware<A> {
    app: A,
}

impl<A: IbcModule> BlockIbcMiddleware<A> {
    pub fn new(app: A) -> Self {
        BlockIbcMiddleware { app }
    }

    #[cfg(test)]
    pub(crate) fn app(&self) -> &A {
        &self.app
    }
}

impl<A: IbcModule> IbcModule for BlockIbcMiddleware<A> {
    fn on_channel_open(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelOpenMsg,
    ) -> StdResult<IbcChannelOpenResponse> {
        self.app.on_channel_open(deps, env, msg)
    }

    fn on_channel_connect(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelConnectMsg,
    ) -> StdResult<IbcBasicResponse> {
        self.app.on_channel_connect(deps, env, msg)
    }

    fn on_channel_close(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcChannelCloseMsg,
    ) -> StdResult<IbcBasicResponse> {
        self.app.on_channel_close(deps, env, msg)
    }

    fn on_recv_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketReceiveMsg,
    ) -> StdResult<IbcReceiveResponse> {
        match check_packet(deps.as_ref(), &msg.packet.data) {
            Ok(()) => self.app.on_recv_packet(deps, env, msg),
            Err(ReceiveError::Fatal(err)) => Err(StdError::generic_err(err.to_string())),
            Err(err) => {
                deps.api.debug(&format!(
                    "rejected packet {} on {}: {err}",
                    msg.packet.sequence, msg.packet.dest.channel_id
                ));
                Ok(IbcReceiveResponse::new()
                    .set_ack(ack_fail(&err)?)
                    .add_attribute("action", "recv_packet_rejected")
                    .add_attribute("reason", err.kind()))
            }
        }
    }

    fn on_acknowledgement_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketAckMsg,
    ) -> StdResult<IbcBasicResponse> {
        self.app.on_acknowledgement_packet(deps, env, msg)
    }

    fn on_timeout_packet(
        &self,
        deps: DepsMut,
        env: Env,
        msg: IbcPacketTimeoutMsg,
    ) -> StdResult<IbcBasicResponse> {
        self.app.on_timeout_packet(deps, env, msg)
    }
}
