use crate::{
    msg::{ExecuteMsg, QueryMsg},
    state::Config,
    tests::{
        helpers::utils::{assert_error, find_attrs},
        setup::{
            setup_accounts::TestAccounts,
            setup_contracts::{
                CREATOR_FEE_RATE, MARKETPLACE_FEE_RATE, MAX_SALE_PRICE, MIN_BID_INCREMENT_RATE,
                NATIVE_DENOM, PARTNER_FEE_RATE,
            },
            templates::{test_context, TestContext, TestContracts},
        },
    },
    ContractError,
};

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::Executor;
use curio_marketplace_common::MarketplaceStdError;

#[test]
fn try_admin_update_config() {
    let TestContext {
        mut app,
        contracts:
            TestContracts {
                marketplace, ..
            },
        accounts:
            TestAccounts {
                creator,
                owner,
                fee_manager,
                ..
            },
    } = test_context();

    let config = app
        .wrap()
        .query_wasm_smart::<Config<Addr>>(&marketplace, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.fee_manager, fee_manager);
    assert_eq!(config.denom, NATIVE_DENOM.to_string());
    assert_eq!(config.marketplace_fee_rate, MARKETPLACE_FEE_RATE);
    assert_eq!(config.creator_fee_rate, CREATOR_FEE_RATE);
    assert_eq!(config.partner_fee_rate, PARTNER_FEE_RATE);
    assert_eq!(config.min_bid_increment_rate, MIN_BID_INCREMENT_RATE);
    assert_eq!(config.max_sale_price, Uint128::new(MAX_SALE_PRICE));

    // Update config by non admin fails
    let update_config = ExecuteMsg::UpdateConfig {
        fee_manager: None,
        marketplace_fee_percent: Some(5),
        creator_fee_percent: None,
        partner_fee_percent: None,
        min_bid_increment_percent: None,
        max_sale_price: None,
    };
    let response = app.execute_contract(owner.clone(), marketplace.clone(), &update_config, &[]);
    assert_error(
        response,
        MarketplaceStdError::Unauthorized(
            "only the admin of contract can perform this action".to_string(),
        )
        .to_string(),
    );

    // Percent above 100 fails
    let update_config = ExecuteMsg::UpdateConfig {
        fee_manager: None,
        marketplace_fee_percent: Some(101),
        creator_fee_percent: None,
        partner_fee_percent: None,
        min_bid_increment_percent: None,
        max_sale_price: None,
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &update_config, &[]);
    assert_error(
        response,
        ContractError::InvalidInput("percent must not exceed 100".to_string()).to_string(),
    );

    // Combined fee shares above the whole sale amount fail
    let update_config = ExecuteMsg::UpdateConfig {
        fee_manager: None,
        marketplace_fee_percent: Some(50),
        creator_fee_percent: Some(40),
        partner_fee_percent: Some(20),
        min_bid_increment_percent: None,
        max_sale_price: None,
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &update_config, &[]);
    assert_error(
        response,
        ContractError::InvalidInput(
            "marketplace, creator, and partner fee rates must not exceed 1 combined".to_string(),
        )
        .to_string(),
    );

    // Update config succeeds
    let update_config = ExecuteMsg::UpdateConfig {
        fee_manager: Some("fee_manager2".to_string()),
        marketplace_fee_percent: Some(5),
        creator_fee_percent: Some(10),
        partner_fee_percent: Some(2),
        min_bid_increment_percent: Some(3),
        max_sale_price: Some(Uint128::new(9_999_999)),
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &update_config, &[]);
    assert!(response.is_ok());

    let marketplace_fee_rate = find_attrs(response.unwrap(), "wasm-set-config", "marketplace_fee_rate")
        .pop()
        .unwrap();
    assert_eq!(marketplace_fee_rate, "50");

    let config = app
        .wrap()
        .query_wasm_smart::<Config<Addr>>(&marketplace, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.fee_manager, Addr::unchecked("fee_manager2"));
    assert_eq!(config.marketplace_fee_rate, 50);
    assert_eq!(config.creator_fee_rate, 100);
    assert_eq!(config.partner_fee_rate, 20);
    assert_eq!(config.min_bid_increment_rate, 30);
    assert_eq!(config.max_sale_price, Uint128::new(9_999_999));

    // Partial update leaves the other fields in place
    let update_config = ExecuteMsg::UpdateConfig {
        fee_manager: None,
        marketplace_fee_percent: None,
        creator_fee_percent: None,
        partner_fee_percent: None,
        min_bid_increment_percent: None,
        max_sale_price: Some(Uint128::new(1_234_567)),
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &update_config, &[]);
    assert!(response.is_ok());

    let config = app
        .wrap()
        .query_wasm_smart::<Config<Addr>>(&marketplace, &QueryMsg::Config {})
        .unwrap();
    assert_eq!(config.fee_manager, Addr::unchecked("fee_manager2"));
    assert_eq!(config.marketplace_fee_rate, 50);
    assert_eq!(config.creator_fee_rate, 100);
    assert_eq!(config.partner_fee_rate, 20);
    assert_eq!(config.min_bid_increment_rate, 30);
    assert_eq!(config.max_sale_price, Uint128::new(1_234_567));
}

#[test]
fn try_admin_set_primary_sale_fee_override() {
    let TestContext {
        mut app,
        contracts:
            TestContracts {
                marketplace,
                collection,
                ..
            },
        accounts:
            TestAccounts {
                creator, owner, ..
            },
    } = test_context();

    // Set primary sale fee override by non admin fails
    let set_override = ExecuteMsg::SetPrimarySaleFeeOverride {
        collection: collection.to_string(),
        fee_percent: 25,
    };
    let response = app.execute_contract(owner.clone(), marketplace.clone(), &set_override, &[]);
    assert_error(
        response,
        MarketplaceStdError::Unauthorized(
            "only the admin of contract can perform this action".to_string(),
        )
        .to_string(),
    );

    // Percent above 100 fails
    let set_override = ExecuteMsg::SetPrimarySaleFeeOverride {
        collection: collection.to_string(),
        fee_percent: 101,
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &set_override, &[]);
    assert_error(
        response,
        ContractError::InvalidInput("percent must not exceed 100".to_string()).to_string(),
    );

    // Set primary sale fee override succeeds
    let set_override = ExecuteMsg::SetPrimarySaleFeeOverride {
        collection: collection.to_string(),
        fee_percent: 25,
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &set_override, &[]);
    assert!(response.is_ok());

    let fee_rate = find_attrs(
        response.unwrap(),
        "wasm-set-primary-sale-fee-override",
        "fee_rate",
    )
    .pop()
    .unwrap();
    assert_eq!(fee_rate, "250");

    let fee_override = app
        .wrap()
        .query_wasm_smart::<Option<u64>>(
            &marketplace,
            &QueryMsg::PrimarySaleFeeOverride {
                collection: collection.to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee_override, Some(250));

    // A collection without an override returns none
    let fee_override = app
        .wrap()
        .query_wasm_smart::<Option<u64>>(
            &marketplace,
            &QueryMsg::PrimarySaleFeeOverride {
                collection: creator.to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee_override, None);

    // Setting again overwrites the stored rate
    let set_override = ExecuteMsg::SetPrimarySaleFeeOverride {
        collection: collection.to_string(),
        fee_percent: 40,
    };
    let response = app.execute_contract(creator.clone(), marketplace.clone(), &set_override, &[]);
    assert!(response.is_ok());

    let fee_override = app
        .wrap()
        .query_wasm_smart::<Option<u64>>(
            &marketplace,
            &QueryMsg::PrimarySaleFeeOverride {
                collection: collection.to_string(),
            },
        )
        .unwrap();
    assert_eq!(fee_override, Some(400));
}
