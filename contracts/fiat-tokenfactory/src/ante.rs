use cosmwasm_std::{Coin, Deps};

use crate::error::ContractError;
use crate::helpers::{check_not_blacklisted, moves_denom};
use crate::msg::AnyMsg;
use crate::registry::{Authorization, MsgRegistry, TxMsg};
use crate::state::{load_minting_denom, load_paused};

/// Deepest level of delegated execution that is unwrapped before the
/// transaction is rejected outright.
pub const MAX_NESTED_EXEC_DEPTH: usize = 8;

/// The coins a message moves and the addresses taking part in the movement,
/// each tagged with the part it plays.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferView {
    pub coins: Vec<Coin>,
    pub participants: Vec<(&'static str, String)>,
}

impl TxMsg {
    /// Reduces a transfer-like message to what it moves and who is involved.
    /// Messages that cannot move coins have no view.
    pub fn transfer_view(&self) -> Option<TransferView> {
        match self {
            TxMsg::Send(msg) => Some(TransferView {
                coins: msg.amount.clone(),
                participants: vec![
                    ("sender", msg.from_address.clone()),
                    ("receiver", msg.to_address.clone()),
                ],
            }),
            TxMsg::MultiSend(msg) => Some(TransferView {
                coins: msg
                    .inputs
                    .iter()
                    .chain(msg.outputs.iter())
                    .flat_map(|io| io.coins.iter().cloned())
                    .collect(),
                participants: msg
                    .inputs
                    .iter()
                    .map(|input| ("sender", input.address.clone()))
                    .chain(
                        msg.outputs
                            .iter()
                            .map(|output| ("receiver", output.address.clone())),
                    )
                    .collect(),
            }),
            // the receiver sits on another chain, so the ledger hook never sees it
            TxMsg::Transfer(msg) => Some(TransferView {
                coins: vec![msg.token.clone()],
                participants: vec![
                    ("sender", msg.sender.clone()),
                    ("receiver", msg.receiver.clone()),
                ],
            }),
            TxMsg::Grant {
                authorization: Authorization::Send(send),
                ..
            } => Some(TransferView {
                coins: send.spend_limit.clone(),
                participants: vec![],
            }),
            TxMsg::Grant { .. } | TxMsg::Exec(_) | TxMsg::Other { .. } => None,
        }
    }
}

/// A message with delegated execution unwrapped, and the grantees that
/// wrapped it, outermost first.
#[derive(Clone, Debug, PartialEq)]
pub struct Unwrapped {
    pub msg: TxMsg,
    pub delegators: Vec<String>,
}

/// Decodes `msgs` and unwraps every delegated execution, keeping submission
/// order. Returns the innermost messages and every grantee seen, deduplicated
/// in order of appearance.
pub fn unwrap_msgs(
    registry: &MsgRegistry,
    msgs: &[AnyMsg],
) -> Result<(Vec<Unwrapped>, Vec<String>), ContractError> {
    let mut unwrapped = vec![];
    let mut delegating: Vec<String> = vec![];

    // (message, nesting depth, delegator chain); the top is next in order
    let mut stack: Vec<(AnyMsg, usize, Vec<String>)> = msgs
        .iter()
        .rev()
        .map(|msg| (msg.clone(), 0, vec![]))
        .collect();

    while let Some((any, depth, delegators)) = stack.pop() {
        match registry.decode(&any)? {
            TxMsg::Exec(exec) => {
                if depth >= MAX_NESTED_EXEC_DEPTH {
                    return Err(ContractError::ExecDepthExceeded {
                        max: MAX_NESTED_EXEC_DEPTH,
                    });
                }
                if !delegating.contains(&exec.grantee) {
                    delegating.push(exec.grantee.clone());
                }

                let mut chain = delegators;
                chain.push(exec.grantee);
                stack.extend(
                    exec.msgs
                        .into_iter()
                        .rev()
                        .map(|inner| (inner, depth + 1, chain.clone())),
                );
            }
            msg => unwrapped.push(Unwrapped { msg, delegators }),
        }
    }

    Ok((unwrapped, delegating))
}

/// Screens a transaction before any handler runs. Rejects it when it would
/// move the minting denom while paused, or when a participant or delegator
/// of such a movement is blacklisted.
///
/// The ledger hook repeats every one of these checks on the movements that
/// actually happen; this only saves the work of running a doomed
/// transaction. Returns the delegating addresses the hook must also check.
pub fn inspect_tx(
    deps: Deps,
    registry: &MsgRegistry,
    msgs: &[AnyMsg],
) -> Result<Vec<String>, ContractError> {
    let (unwrapped, delegating) = unwrap_msgs(registry, msgs)?;

    let denom = load_minting_denom(deps.storage)?;
    let views = unwrapped
        .iter()
        .filter_map(|entry| {
            entry
                .msg
                .transfer_view()
                .filter(|view| moves_denom(&view.coins, &denom))
                .map(|view| (entry, view))
        })
        .collect::<Vec<_>>();

    if views.is_empty() {
        return Ok(delegating);
    }

    if load_paused(deps.storage)? {
        let reason = match views[0].0.msg {
            TxMsg::Grant { .. } => "can not perform token authorizations",
            _ => "can not perform token transfers",
        };
        return Err(ContractError::paused(reason));
    }

    for (entry, view) in &views {
        for (role, address) in &view.participants {
            check_not_blacklisted(deps.storage, address, role)?;
        }
        for delegator in &entry.delegators {
            check_not_blacklisted(deps.storage, delegator, "delegating")?;
        }
    }

    Ok(delegating)
}
