mod common;

use common::{setup_market, PROTOCOL_FEE};
use soroban_sdk::{testutils::Address as _, Address, Env};
use tideswap_market::{MarketContract, MarketContractClient};
use tideswap_math::{FeeTier, FixedPoint, MarketError};

// ============================================================
// STATE
// ============================================================

#[test]
fn test_create_state() {
    let env = Env::default();
    let market = setup_market(&env);

    let state = market.client.get_state();
    assert_eq!(state.admin, market.admin);
    assert_eq!(state.protocol_fee, PROTOCOL_FEE);
}

#[test]
fn test_create_state_twice() {
    let env = Env::default();
    let market = setup_market(&env);

    let result = market.client.try_create_state(&market.admin, &PROTOCOL_FEE);
    assert_eq!(result, Err(Ok(MarketError::StateAlreadyExists)));
}

#[test]
fn test_state_not_found() {
    let env = Env::default();
    env.mock_all_auths();
    let client = MarketContractClient::new(&env, &env.register(MarketContract, ()));

    assert_eq!(client.try_get_state(), Err(Ok(MarketError::StateNotFound)));
}

#[test]
fn test_invalid_protocol_fee() {
    let env = Env::default();
    env.mock_all_auths();
    let client = MarketContractClient::new(&env, &env.register(MarketContract, ()));
    let admin = Address::generate(&env);

    let too_high = FixedPoint::new(FixedPoint::ONE + 1);
    assert_eq!(
        client.try_create_state(&admin, &too_high),
        Err(Ok(MarketError::InvalidProtocolFee))
    );

    client.create_state(&admin, &FixedPoint::one());
    assert_eq!(client.get_state().protocol_fee, FixedPoint::one());
}

#[test]
fn test_change_protocol_fee() {
    let env = Env::default();
    let market = setup_market(&env);

    let new_fee = FixedPoint::from_scale(5, 2);
    market.client.change_protocol_fee(&market.admin, &new_fee);
    assert_eq!(market.client.get_state().protocol_fee, new_fee);
}

#[test]
fn test_change_protocol_fee_not_admin() {
    let env = Env::default();
    let market = setup_market(&env);
    let stranger = Address::generate(&env);

    let result = market
        .client
        .try_change_protocol_fee(&stranger, &FixedPoint::from_scale(5, 2));
    assert_eq!(result, Err(Ok(MarketError::Unauthorized)));
    assert_eq!(market.client.get_state().protocol_fee, PROTOCOL_FEE);
}

// ============================================================
// FEE TIERS
// ============================================================

#[test]
fn test_create_fee_tier() {
    let env = Env::default();
    let market = setup_market(&env);
    let fee_tier = FeeTier {
        fee: FixedPoint::from_scale(3, 3),
        tick_spacing: 60,
    };

    assert!(!market.client.fee_tier_exists(&fee_tier));
    assert_eq!(
        market.client.try_get_fee_tier(&fee_tier),
        Err(Ok(MarketError::FeeTierNotFound))
    );

    market.client.create_fee_tier(&market.admin, &fee_tier);
    assert!(market.client.fee_tier_exists(&fee_tier));
    assert_eq!(market.client.get_fee_tier(&fee_tier), fee_tier);

    let other_spacing = FeeTier {
        tick_spacing: 10,
        ..fee_tier
    };
    assert!(!market.client.fee_tier_exists(&other_spacing));
}

#[test]
fn test_create_fee_tier_twice() {
    let env = Env::default();
    let market = setup_market(&env);
    let fee_tier = FeeTier {
        fee: FixedPoint::from_scale(3, 3),
        tick_spacing: 60,
    };

    market.client.create_fee_tier(&market.admin, &fee_tier);
    assert_eq!(
        market.client.try_create_fee_tier(&market.admin, &fee_tier),
        Err(Ok(MarketError::FeeTierAlreadyExists))
    );
}

#[test]
fn test_create_fee_tier_invalid() {
    let env = Env::default();
    let market = setup_market(&env);

    let invalid = [
        FeeTier { fee: FixedPoint::zero(), tick_spacing: 10 },
        FeeTier { fee: FixedPoint::one(), tick_spacing: 10 },
        FeeTier { fee: FixedPoint::from_scale(3, 3), tick_spacing: 0 },
        FeeTier { fee: FixedPoint::from_scale(3, 3), tick_spacing: 101 },
    ];
    for fee_tier in invalid {
        assert_eq!(
            market.client.try_create_fee_tier(&market.admin, &fee_tier),
            Err(Ok(MarketError::InvalidFeeTier))
        );
    }
}

#[test]
fn test_create_fee_tier_not_admin() {
    let env = Env::default();
    let market = setup_market(&env);
    let stranger = Address::generate(&env);
    let fee_tier = FeeTier {
        fee: FixedPoint::from_scale(3, 3),
        tick_spacing: 60,
    };

    assert_eq!(
        market.client.try_create_fee_tier(&stranger, &fee_tier),
        Err(Ok(MarketError::Unauthorized))
    );
    assert!(!market.client.fee_tier_exists(&fee_tier));
}
