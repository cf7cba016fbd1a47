use cosmwasm_std::Coin;

use crate::msg::{AnyMsg, ExecuteMsg, MinterResponse, QueryMsg};
use crate::registry::{MsgSend, MSG_SEND};
use crate::ContractError;

use super::suite::{
    addr, addr_m, any_msg, blacklister, controller, exec_msg, master_minter, minter, owner,
    pauser, uusdc, SuiteBuilder,
};

fn send(from: &str, to: &str, amount: u128) -> AnyMsg {
    any_msg(
        MSG_SEND,
        &MsgSend {
            from_address: from.to_string(),
            to_address: to.to_string(),
            amount: vec![uusdc(amount)],
        },
    )
}

#[test]
fn blacklisting_a_holder_stops_new_supply() {
    let mut suite = SuiteBuilder::default().build();
    let holder = addr(70);

    suite
        .execute(
            &master_minter(),
            ExecuteMsg::ConfigureMinterController {
                controller: controller(),
                minter: minter(),
            },
        )
        .unwrap();
    suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: minter(),
                allowance: uusdc(1000),
            },
        )
        .unwrap();
    suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: holder.clone(),
                amount: uusdc(200),
            },
        )
        .unwrap();
    assert_eq!(suite.balance(&holder), 200);

    suite
        .execute(
            &blacklister(),
            ExecuteMsg::Blacklist {
                address: holder.clone(),
            },
        )
        .unwrap();

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: holder.clone(),
                amount: uusdc(100),
            },
        )
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("receiver address is blacklisted: {holder}")
    );

    assert_eq!(suite.balance(&holder), 200);
    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(800));
}

#[test]
fn blacklisted_holder_is_frozen_on_every_path() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();
    let holder = addr(70);
    let friend = addr(71);

    suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: holder.clone(),
                amount: uusdc(300),
            },
        )
        .unwrap();
    // presented in its other encoding
    suite
        .execute(
            &blacklister(),
            ExecuteMsg::Blacklist {
                address: addr_m(70),
            },
        )
        .unwrap();

    // direct send, caught by the inspector
    let err = suite
        .deliver_tx(vec![send(&holder, &friend, 10)])
        .unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { .. }));

    // same send with the inspector skipped, caught by the hook
    let err = suite
        .deliver_tx_uninspected(vec![send(&holder, &friend, 10)], vec![])
        .unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { .. }));

    // receiving is blocked too
    suite.fund(&friend, uusdc(50));
    let err = suite
        .deliver_tx_uninspected(vec![send(&friend, &holder, 10)], vec![])
        .unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { .. }));

    // acting as a grantee for somebody else
    let err = suite
        .deliver_tx(vec![exec_msg(&holder, vec![send(&friend, &addr(72), 10)])])
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Blacklisted {
            role: "delegating".to_string(),
            address: holder.clone(),
        }
    );

    assert_eq!(suite.balance(&holder), 300);
    assert_eq!(suite.balance(&friend), 50);

    // other tokens still move
    suite.fund(&holder, Coin::new(5, "uatom"));
    suite
        .deliver_tx(vec![any_msg(
            MSG_SEND,
            &MsgSend {
                from_address: holder.clone(),
                to_address: friend.clone(),
                amount: vec![Coin::new(5, "uatom")],
            },
        )])
        .unwrap();

    // lifting the blacklist restores the holder
    suite
        .execute(
            &blacklister(),
            ExecuteMsg::Unblacklist {
                address: holder.clone(),
            },
        )
        .unwrap();
    suite.deliver_tx(vec![send(&holder, &friend, 10)]).unwrap();
    assert_eq!(suite.balance(&holder), 290);
    assert_eq!(suite.balance(&friend), 60);
}

#[test]
fn pause_freezes_supply_and_transfers() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();
    let holder = addr(70);

    suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: holder.clone(),
                amount: uusdc(100),
            },
        )
        .unwrap();
    suite.execute(&pauser(), ExecuteMsg::Pause {}).unwrap();

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: holder.clone(),
                amount: uusdc(1),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::paused("minting is paused"));

    let err = suite
        .deliver_tx_uninspected(vec![send(&holder, &addr(71), 1)], vec![])
        .unwrap_err();
    assert_eq!(err, ContractError::paused("cannot perform token transfers"));

    // administration carries on
    suite
        .execute(&owner(), ExecuteMsg::UpdateBlacklister { address: addr(80) })
        .unwrap();
    suite
        .execute(&addr(80), ExecuteMsg::Blacklist { address: addr(71) })
        .unwrap();

    suite.execute(&pauser(), ExecuteMsg::Unpause {}).unwrap();
    suite.deliver_tx(vec![send(&holder, &addr(72), 40)]).unwrap();
    assert_eq!(suite.balance(&holder), 60);
}

#[test]
fn genesis_without_metadata_aborts() {
    let err = match SuiteBuilder::default().without_metadata().try_build() {
        Ok(_) => panic!("instantiation should abort"),
        Err(err) => err,
    };
    assert!(matches!(err, ContractError::DenomNotRegistered { .. }));
    assert!(err.is_fatal());
}
