// SPDX-License-Identifier: MIT
// Single swap step within one liquidity range

use soroban_sdk::Env;

use crate::decimal::{FixedPoint, Liquidity, Price, TokenAmount};
use crate::delta::{get_delta_x, get_delta_y};
use crate::error::MarketError;
use crate::sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwapStep {
    pub next_sqrt_price: Price,
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub fee_amount: TokenAmount,
}

// Amount needed to reach a far target may not fit a token amount; that only
// means the target is out of reach.
fn saturating(amount: Result<TokenAmount, MarketError>) -> Result<TokenAmount, MarketError> {
    match amount {
        Err(MarketError::ArithmeticOverflow) => Ok(TokenAmount::MAX),
        other => other,
    }
}

/// Move from `current` toward `target` using at most `amount`.
///
/// With `by_amount_in`, `amount` includes the fee. Input amounts round up,
/// output amounts round down.
pub fn compute_swap_step(
    env: &Env,
    current_sqrt_price: Price,
    target_sqrt_price: Price,
    liquidity: Liquidity,
    amount: TokenAmount,
    by_amount_in: bool,
    fee: FixedPoint,
) -> Result<SwapStep, MarketError> {
    if liquidity.is_zero() {
        return Ok(SwapStep {
            next_sqrt_price: target_sqrt_price,
            ..Default::default()
        });
    }

    let x_to_y = current_sqrt_price >= target_sqrt_price;
    let mut amount_in: TokenAmount = 0;
    let mut amount_out: TokenAmount = 0;

    let next_sqrt_price = if by_amount_in {
        let amount_after_fee = fee.complement().mul_amount(amount)?;
        amount_in = if x_to_y {
            saturating(get_delta_x(env, target_sqrt_price, current_sqrt_price, liquidity, true))?
        } else {
            saturating(get_delta_y(env, current_sqrt_price, target_sqrt_price, liquidity, true))?
        };

        if amount_after_fee >= amount_in {
            target_sqrt_price
        } else {
            get_next_sqrt_price_from_input(env, current_sqrt_price, liquidity, amount_after_fee, x_to_y)?
        }
    } else {
        amount_out = if x_to_y {
            saturating(get_delta_y(env, target_sqrt_price, current_sqrt_price, liquidity, false))?
        } else {
            saturating(get_delta_x(env, current_sqrt_price, target_sqrt_price, liquidity, false))?
        };

        if amount >= amount_out {
            target_sqrt_price
        } else {
            get_next_sqrt_price_from_output(env, current_sqrt_price, liquidity, amount, x_to_y)?
        }
    };

    let not_max = target_sqrt_price != next_sqrt_price;

    if x_to_y {
        if not_max || !by_amount_in {
            amount_in = get_delta_x(env, next_sqrt_price, current_sqrt_price, liquidity, true)?;
        }
        if not_max || by_amount_in {
            amount_out = get_delta_y(env, next_sqrt_price, current_sqrt_price, liquidity, false)?;
        }
    } else {
        if not_max || !by_amount_in {
            amount_in = get_delta_y(env, current_sqrt_price, next_sqrt_price, liquidity, true)?;
        }
        if not_max || by_amount_in {
            amount_out = get_delta_x(env, current_sqrt_price, next_sqrt_price, liquidity, false)?;
        }
    }

    if !by_amount_in && amount_out > amount {
        amount_out = amount;
    }

    let fee_amount = if by_amount_in && not_max {
        amount
            .checked_sub(amount_in)
            .ok_or(MarketError::ArithmeticOverflow)?
    } else {
        fee.mul_amount_up(amount_in)?
    };

    Ok(SwapStep {
        next_sqrt_price,
        amount_in,
        amount_out,
        fee_amount,
    })
}

/// Whether `amount` still moves the price away from `current_sqrt_price`.
///
/// Used before crossing a tick while selling X: if nothing would move, the
/// tick stays uncrossed and the remainder is kept as fee.
pub fn is_enough_amount_to_push_price(
    env: &Env,
    amount: TokenAmount,
    current_sqrt_price: Price,
    liquidity: Liquidity,
    fee: FixedPoint,
    by_amount_in: bool,
    x_to_y: bool,
) -> Result<bool, MarketError> {
    if liquidity.is_zero() {
        return Ok(true);
    }

    let next_sqrt_price = if by_amount_in {
        let amount_after_fee = fee.complement().mul_amount(amount)?;
        get_next_sqrt_price_from_input(env, current_sqrt_price, liquidity, amount_after_fee, x_to_y)
    } else {
        get_next_sqrt_price_from_output(env, current_sqrt_price, liquidity, amount, x_to_y)
    };

    match next_sqrt_price {
        Ok(next) => Ok(next != current_sqrt_price),
        // Output larger than the range can provide always moves the price
        Err(MarketError::ArithmeticOverflow) => Ok(true),
        Err(err) => Err(err),
    }
}
