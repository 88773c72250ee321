// SPDX-License-Identifier: MIT
// Full-width multiply/divide helpers on top of the host's U256

use soroban_sdk::{Env, U256};
use crate::error::MarketError;

#[inline]
pub fn u256(env: &Env, value: u128) -> U256 {
    U256::from_u128(env, value)
}

/// Narrow a 256-bit intermediate back to u128.
#[inline]
pub fn to_u128(value: &U256) -> Result<u128, MarketError> {
    value.to_u128().ok_or(MarketError::ArithmeticOverflow)
}

/// `numerator / denominator`, rounded up when `round_up` is set.
pub fn div_u256(
    env: &Env,
    numerator: &U256,
    denominator: &U256,
    round_up: bool,
) -> Result<U256, MarketError> {
    let zero = U256::from_u32(env, 0);
    if *denominator == zero {
        return Err(MarketError::DivisionByZero);
    }

    let quotient = numerator.div(denominator);
    if round_up && numerator.rem_euclid(denominator) != zero {
        Ok(quotient.add(&U256::from_u32(env, 1)))
    } else {
        Ok(quotient)
    }
}

/// Calculates `a * b / denominator` rounding down.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MarketError> {
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&div_u256(env, &product, &u256(env, denominator), false)?)
}

/// Calculates `a * b / denominator` rounding up.
pub fn mul_div_up(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, MarketError> {
    let product = u256(env, a).mul(&u256(env, b));
    to_u128(&div_u256(env, &product, &u256(env, denominator), true)?)
}

/// Divide with rounding up on native integers.
#[inline]
pub fn div_round_up(numerator: u128, denominator: u128) -> Result<u128, MarketError> {
    if denominator == 0 {
        return Err(MarketError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if numerator % denominator != 0 {
        Ok(quotient + 1)
    } else {
        Ok(quotient)
    }
}
