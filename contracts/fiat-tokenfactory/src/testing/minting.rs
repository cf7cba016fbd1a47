use cosmwasm_std::{Coin, Uint128};

use crate::msg::{
    ExecuteMsg, MinterControllerResponse, MinterControllersResponse, MinterResponse,
    MintersResponse, QueryMsg,
};
use crate::ContractError;

use super::suite::{
    addr, addr_m, blacklister, controller, master_minter, minter, pauser, remote_addr, user,
    uusdc, SuiteBuilder,
};

#[test]
fn mint_deducts_allowance_and_credits_receiver() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();

    let res = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(200),
            },
        )
        .unwrap();
    assert_eq!(res.messages.len(), 2);

    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(800));
    assert_eq!(suite.balance(&user()), 200);

    // over the remaining allowance, nothing changes
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(801),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::ExceedsAllowance {
            amount: Uint128::new(801),
            allowance: Uint128::new(800),
        }
    );
    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(800));
    assert_eq!(suite.balance(&user()), 200);
}

#[test]
fn mint_can_use_up_allowance() {
    let mut suite = SuiteBuilder::default().with_minter(100).build();

    suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(100),
            },
        )
        .unwrap();

    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(0));
}

#[test]
fn mint_validation_order() {
    let mut suite = SuiteBuilder::default().with_minter(100).build();

    // not a minter comes first, even with everything else wrong
    let err = suite
        .execute(
            &user(),
            ExecuteMsg::Mint {
                address: user(),
                amount: Coin::new(0, "uatom"),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized("you are not a minter"));

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: Coin::new(10, "uatom"),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::invalid_coins("minting denom is incorrect"));

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(0),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::invalid_coins("minting amount is invalid"));

    // allowance is checked before pause
    suite.execute(&pauser(), ExecuteMsg::Pause {}).unwrap();
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(101),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::ExceedsAllowance { .. }));

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(10),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::paused("minting is paused"));
}

#[test]
fn mint_blacklist_checks() {
    let mut suite = SuiteBuilder::default().with_minter(100).build();

    suite
        .execute(&blacklister(), ExecuteMsg::Blacklist { address: user() })
        .unwrap();
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(10),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Blacklisted {
            role: "receiver".to_string(),
            address: user(),
        }
    );

    suite
        .execute(&blacklister(), ExecuteMsg::Blacklist { address: minter() })
        .unwrap();
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: addr(40),
                amount: uusdc(10),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::Blacklisted {
            role: "minter".to_string(),
            address: minter(),
        }
    );

    // the minter check comes before the receiver check
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(10),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { role, .. } if role == "minter"));
}

#[test]
fn burn_from_own_balance() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();

    suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: minter(),
                amount: uusdc(300),
            },
        )
        .unwrap();

    suite
        .execute(&minter(), ExecuteMsg::Burn { amount: uusdc(100) })
        .unwrap();
    assert_eq!(suite.balance(&minter()), 200);

    // burning leaves the allowance alone
    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(700));

    // an insufficient balance is the ledger's call, and reverts everything
    let err = suite
        .execute(&minter(), ExecuteMsg::Burn { amount: uusdc(201) })
        .unwrap_err();
    assert!(err.to_string().contains("insufficient funds"));
    assert_eq!(suite.balance(&minter()), 200);
}

#[test]
fn burn_validation_order() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();

    let err = suite
        .execute(&user(), ExecuteMsg::Burn { amount: uusdc(1) })
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized("you are not a minter"));

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Burn {
                amount: Coin::new(1, "uatom"),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::invalid_coins("burning denom is incorrect"));

    let err = suite
        .execute(&minter(), ExecuteMsg::Burn { amount: uusdc(0) })
        .unwrap_err();
    assert_eq!(err, ContractError::invalid_coins("burning amount is invalid"));

    suite.execute(&pauser(), ExecuteMsg::Pause {}).unwrap();
    let err = suite
        .execute(&minter(), ExecuteMsg::Burn { amount: uusdc(1) })
        .unwrap_err();
    assert_eq!(err, ContractError::paused("burning is paused"));

    suite.execute(&pauser(), ExecuteMsg::Unpause {}).unwrap();
    suite
        .execute(&blacklister(), ExecuteMsg::Blacklist { address: minter() })
        .unwrap();
    let err = suite
        .execute(&minter(), ExecuteMsg::Burn { amount: uusdc(1) })
        .unwrap_err();
    assert!(matches!(err, ContractError::Blacklisted { .. }));
}

#[test]
fn configure_minter_requires_bound_controller() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();

    let err = suite
        .execute(
            &user(),
            ExecuteMsg::ConfigureMinter {
                address: minter(),
                allowance: uusdc(5),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized("minter controller not found"));

    // the controller may only configure its own minter
    let err = suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: user(),
                allowance: uusdc(5),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Unauthorized { .. }));

    let err = suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: minter(),
                allowance: Coin::new(5, "uatom"),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::invalid_coins("minting denom is incorrect"));

    // a zero allowance is a valid allowance
    suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: minter(),
                allowance: uusdc(0),
            },
        )
        .unwrap();
    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(0));
}

#[test]
fn pause_blocks_value_movement_not_safety_ops() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();
    suite.execute(&pauser(), ExecuteMsg::Pause {}).unwrap();

    let err = suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: minter(),
                allowance: uusdc(5),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::paused("minting is paused"));

    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(5),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::Paused { .. }));

    suite
        .execute(&controller(), ExecuteMsg::RemoveMinter { address: minter() })
        .unwrap();
    suite
        .execute(
            &master_minter(),
            ExecuteMsg::RemoveMinterController {
                controller: controller(),
            },
        )
        .unwrap();

    let err = suite.query_err(QueryMsg::Minter { address: minter() });
    assert!(matches!(err, ContractError::UserNotFound { .. }));
}

#[test]
fn remove_minter_requires_existing_minter() {
    let mut suite = SuiteBuilder::default().with_minter(1000).build();

    suite
        .execute(&controller(), ExecuteMsg::RemoveMinter { address: minter() })
        .unwrap();
    let err = suite
        .execute(&controller(), ExecuteMsg::RemoveMinter { address: minter() })
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::user_not_found("a minter with a given address doesn't exist")
    );

    // a removed minter can no longer mint
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: user(),
                amount: uusdc(1),
            },
        )
        .unwrap_err();
    assert_eq!(err, ContractError::unauthorized("you are not a minter"));
}

#[test]
fn minter_controllers_lifecycle() {
    let mut suite = SuiteBuilder::default().build();

    let err = suite
        .execute(
            &user(),
            ExecuteMsg::ConfigureMinterController {
                controller: controller(),
                minter: minter(),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        ContractError::unauthorized("you are not the master minter")
    );

    suite
        .execute(
            &master_minter(),
            ExecuteMsg::ConfigureMinterController {
                controller: controller(),
                minter: minter(),
            },
        )
        .unwrap();
    // rebinding overwrites
    suite
        .execute(
            &master_minter(),
            ExecuteMsg::ConfigureMinterController {
                controller: controller(),
                minter: addr(40),
            },
        )
        .unwrap();
    // a second controller for the same minter is allowed
    suite
        .execute(
            &master_minter(),
            ExecuteMsg::ConfigureMinterController {
                controller: addr(41),
                minter: addr(40),
            },
        )
        .unwrap();

    let res: MinterControllerResponse = suite.query(QueryMsg::MinterController {
        controller: controller(),
    });
    assert_eq!(res.minter_controller.minter, addr(40));

    let res: MinterControllersResponse = suite.query(QueryMsg::MinterControllers {
        start_after: None,
        limit: None,
    });
    assert_eq!(res.minter_controllers.len(), 2);

    suite
        .execute(
            &master_minter(),
            ExecuteMsg::RemoveMinterController {
                controller: controller(),
            },
        )
        .unwrap();
    let err = suite
        .execute(
            &master_minter(),
            ExecuteMsg::RemoveMinterController {
                controller: controller(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::UserNotFound { .. }));

    let err = suite.query_err(QueryMsg::MinterController {
        controller: controller(),
    });
    assert!(matches!(err, ContractError::UserNotFound { .. }));
}

#[test]
fn minting_addresses_must_use_chain_encoding() {
    let mut suite = SuiteBuilder::default().with_minter(100).build();

    // the same accounts, in encodings the chain never uses for a sender
    for (controller_address, minter_address) in [
        (addr_m(41), addr(40)),
        (remote_addr(41), addr(40)),
        (addr(41), addr_m(40)),
        (addr(41), remote_addr(40)),
    ] {
        let err = suite
            .execute(
                &master_minter(),
                ExecuteMsg::ConfigureMinterController {
                    controller: controller_address,
                    minter: minter_address,
                },
            )
            .unwrap_err();
        match err {
            ContractError::InvalidAddress { .. } => {}
            err => panic!("should generate InvalidAddress but returns {err}"),
        }
    }
    let res: MinterControllersResponse = suite.query(QueryMsg::MinterControllers {
        start_after: None,
        limit: None,
    });
    assert_eq!(res.minter_controllers.len(), 1);

    let err = suite
        .execute(
            &controller(),
            ExecuteMsg::ConfigureMinter {
                address: addr_m(6),
                allowance: uusdc(500),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAddress { .. }));

    // a receiver in a foreign encoding is refused and the allowance is kept
    let err = suite
        .execute(
            &minter(),
            ExecuteMsg::Mint {
                address: remote_addr(70),
                amount: uusdc(10),
            },
        )
        .unwrap_err();
    assert!(matches!(err, ContractError::InvalidAddress { .. }));
    let res: MinterResponse = suite.query(QueryMsg::Minter { address: minter() });
    assert_eq!(res.minter.allowance, uusdc(100));
}

#[test]
fn list_minters_paginates() {
    let mut suite = SuiteBuilder::default().build();

    for seed in 60..75u8 {
        suite
            .execute(
                &master_minter(),
                ExecuteMsg::ConfigureMinterController {
                    controller: addr(seed + 100),
                    minter: addr(seed),
                },
            )
            .unwrap();
        suite
            .execute(
                &addr(seed + 100),
                ExecuteMsg::ConfigureMinter {
                    address: addr(seed),
                    allowance: uusdc(seed as u128),
                },
            )
            .unwrap();
    }

    let page: MintersResponse = suite.query(QueryMsg::Minters {
        start_after: None,
        limit: Some(50),
    });
    assert_eq!(page.minters.len(), 15);

    let page: MintersResponse = suite.query(QueryMsg::Minters {
        start_after: None,
        limit: None,
    });
    assert_eq!(page.minters.len(), 10);

    let rest: MintersResponse = suite.query(QueryMsg::Minters {
        start_after: Some(page.minters[9].address.clone()),
        limit: None,
    });
    assert_eq!(rest.minters.len(), 5);
}
