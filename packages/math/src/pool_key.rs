// Fee tiers and pool keys
//
// Pools are addressed by (token_x, token_y, fee tier) with the tokens in
// ascending address order, so either argument order resolves the same pool.

use soroban_sdk::{contracttype, Address};

use crate::constants::MAX_TICK_SPACING;
use crate::decimal::FixedPoint;
use crate::error::MarketError;

#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeeTier {
    pub fee: FixedPoint,
    pub tick_spacing: u32,
}

impl FeeTier {
    pub fn new(fee: FixedPoint, tick_spacing: u32) -> Result<Self, MarketError> {
        if fee.is_zero() || fee >= FixedPoint::one() {
            return Err(MarketError::InvalidFeeTier);
        }
        if tick_spacing == 0 || tick_spacing > MAX_TICK_SPACING {
            return Err(MarketError::InvalidFeeTier);
        }
        Ok(Self { fee, tick_spacing })
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolKey {
    pub token_x: Address,
    pub token_y: Address,
    pub fee_tier: FeeTier,
}

impl PoolKey {
    pub fn new(token_0: Address, token_1: Address, fee_tier: FeeTier) -> Result<Self, MarketError> {
        if token_0 == token_1 {
            return Err(MarketError::InvalidTokenPair);
        }

        let (token_x, token_y) = if token_0 < token_1 {
            (token_0, token_1)
        } else {
            (token_1, token_0)
        };

        Ok(Self {
            token_x,
            token_y,
            fee_tier,
        })
    }
}
