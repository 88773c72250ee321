// SPDX-License-Identifier: MIT
// Next sqrt price after moving a token amount through liquidity

use soroban_sdk::Env;

use crate::decimal::{Liquidity, Price, TokenAmount};
use crate::error::MarketError;
use crate::full_math::{div_u256, to_u128, u256};

/// Sqrt price reached by adding `amount` of the input token.
///
/// X in (`x_to_y`) lowers the price and rounds up; Y in raises it and rounds
/// down. Both keep the pool on the conservative side.
pub fn get_next_sqrt_price_from_input(
    env: &Env,
    sqrt_price: Price,
    liquidity: Liquidity,
    amount: TokenAmount,
    x_to_y: bool,
) -> Result<Price, MarketError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }

    if x_to_y {
        next_sqrt_price_x_up(env, sqrt_price, liquidity, amount, true)
    } else {
        next_sqrt_price_y_down(env, sqrt_price, liquidity, amount, true)
    }
}

/// Sqrt price reached by removing `amount` of the output token.
pub fn get_next_sqrt_price_from_output(
    env: &Env,
    sqrt_price: Price,
    liquidity: Liquidity,
    amount: TokenAmount,
    x_to_y: bool,
) -> Result<Price, MarketError> {
    if amount == 0 {
        return Ok(sqrt_price);
    }

    if x_to_y {
        next_sqrt_price_y_down(env, sqrt_price, liquidity, amount, false)
    } else {
        next_sqrt_price_x_up(env, sqrt_price, liquidity, amount, false)
    }
}

/// `L * sqrt_price / (L ± amount * sqrt_price)`, rounded up.
fn next_sqrt_price_x_up(
    env: &Env,
    sqrt_price: Price,
    liquidity: Liquidity,
    amount: TokenAmount,
    add_x: bool,
) -> Result<Price, MarketError> {
    let price_one = u256(env, Price::ONE);
    let liquidity_scaled = u256(env, liquidity.v).mul(&price_one);
    let amount_scaled = u256(env, amount as u128)
        .mul(&u256(env, sqrt_price.v))
        .mul(&u256(env, Liquidity::ONE));

    let denominator = if add_x {
        liquidity_scaled.add(&amount_scaled)
    } else {
        if amount_scaled >= liquidity_scaled {
            return Err(MarketError::ArithmeticOverflow);
        }
        liquidity_scaled.sub(&amount_scaled)
    };

    let numerator = u256(env, sqrt_price.v)
        .mul(&u256(env, liquidity.v))
        .mul(&price_one);

    Ok(Price::new(to_u128(&div_u256(env, &numerator, &denominator, true)?)?))
}

/// `sqrt_price ± amount / L`: rounded down when adding Y, up when removing.
fn next_sqrt_price_y_down(
    env: &Env,
    sqrt_price: Price,
    liquidity: Liquidity,
    amount: TokenAmount,
    add_y: bool,
) -> Result<Price, MarketError> {
    let numerator = u256(env, amount as u128)
        .mul(&u256(env, Price::ONE))
        .mul(&u256(env, Liquidity::ONE));
    let quotient = to_u128(&div_u256(env, &numerator, &u256(env, liquidity.v), !add_y)?)?;

    if add_y {
        sqrt_price.checked_add(Price::new(quotient))
    } else {
        sqrt_price.checked_sub(Price::new(quotient))
    }
}
