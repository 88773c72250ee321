// SPDX-License-Identifier: MIT
// Token deltas between two sqrt prices

use soroban_sdk::Env;

use crate::decimal::{Liquidity, Price, TokenAmount};
use crate::error::MarketError;
use crate::full_math::{div_u256, to_u128, u256};
use crate::tick_math::tick_to_sqrt_price;

fn to_token_amount(value: u128) -> Result<TokenAmount, MarketError> {
    TokenAmount::try_from(value).map_err(|_| MarketError::ArithmeticOverflow)
}

/// Amount of X between two prices: `L * |a - b| / (a * b)`.
pub fn get_delta_x(
    env: &Env,
    sqrt_price_a: Price,
    sqrt_price_b: Price,
    liquidity: Liquidity,
    round_up: bool,
) -> Result<TokenAmount, MarketError> {
    if liquidity.is_zero() {
        return Ok(0);
    }

    let delta_price = sqrt_price_a.v.abs_diff(sqrt_price_b.v);
    let numerator = u256(env, delta_price)
        .mul(&u256(env, liquidity.v))
        .mul(&u256(env, Price::ONE));
    let denominator = u256(env, sqrt_price_a.v)
        .mul(&u256(env, sqrt_price_b.v))
        .mul(&u256(env, Liquidity::ONE));

    to_token_amount(to_u128(&div_u256(env, &numerator, &denominator, round_up)?)?)
}

/// Amount of Y between two prices: `L * |a - b|`.
pub fn get_delta_y(
    env: &Env,
    sqrt_price_a: Price,
    sqrt_price_b: Price,
    liquidity: Liquidity,
    round_up: bool,
) -> Result<TokenAmount, MarketError> {
    if liquidity.is_zero() {
        return Ok(0);
    }

    let delta_price = sqrt_price_a.v.abs_diff(sqrt_price_b.v);
    let numerator = u256(env, delta_price).mul(&u256(env, liquidity.v));
    let denominator = u256(env, Price::ONE * Liquidity::ONE);

    to_token_amount(to_u128(&div_u256(env, &numerator, &denominator, round_up)?)?)
}

/// Token amounts backing `liquidity` on `[lower_tick, upper_tick)`.
///
/// Deposits round up, withdrawals round down. The returned flag is set when
/// the range contains the current tick, i.e. when pool liquidity changes too.
pub fn get_amounts_for_liquidity(
    env: &Env,
    current_tick: i32,
    current_sqrt_price: Price,
    liquidity: Liquidity,
    lower_tick: i32,
    upper_tick: i32,
    round_up: bool,
) -> Result<(TokenAmount, TokenAmount, bool), MarketError> {
    let lower_sqrt_price = tick_to_sqrt_price(lower_tick)?;
    let upper_sqrt_price = tick_to_sqrt_price(upper_tick)?;

    if current_tick < lower_tick {
        let amount_x = get_delta_x(env, lower_sqrt_price, upper_sqrt_price, liquidity, round_up)?;
        return Ok((amount_x, 0, false));
    }

    if current_tick >= upper_tick {
        let amount_y = get_delta_y(env, lower_sqrt_price, upper_sqrt_price, liquidity, round_up)?;
        return Ok((0, amount_y, false));
    }

    let amount_x = get_delta_x(env, current_sqrt_price, upper_sqrt_price, liquidity, round_up)?;
    let amount_y = get_delta_y(env, lower_sqrt_price, current_sqrt_price, liquidity, round_up)?;
    Ok((amount_x, amount_y, true))
}
