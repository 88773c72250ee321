use soroban_sdk::{log, Env};
use tideswap_math::{
    align_tick_to_spacing, compute_swap_step, is_enough_amount_to_push_price, max_sqrt_price,
    min_sqrt_price, sqrt_price_to_tick, FeeGrowth, FixedPoint, Liquidity, MarketError, Price,
    SecondsPerLiquidity, TokenAmount,
};
use tideswap_tick::{TickLimit, TickStore, Tickmap};

use crate::fees::FeeSplit;
use crate::types::SwapResult;

// ============================================================
// SWAP STATE
// ============================================================

/// Pool fields a swap reads and moves. The contract copies them in before
/// the swap and back out after it succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapState {
    pub sqrt_price: Price,
    pub current_tick: i32,
    pub liquidity: Liquidity,
    pub tick_spacing: u32,
    pub fee: FixedPoint,
    pub fee_growth_global_x: FeeGrowth,
    pub fee_growth_global_y: FeeGrowth,
    /// Already advanced to the swap's timestamp; crossed ticks flip against it
    pub seconds_per_liquidity_global: SecondsPerLiquidity,
}

/// Swap direction, size and limits as seen by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapRequest {
    pub x_to_y: bool,
    pub amount: TokenAmount,
    pub by_amount_in: bool,
    pub sqrt_price_limit: Price,
    pub protocol_fee: FixedPoint,
    pub with_referral: bool,
}

// ============================================================
// PRICE LIMIT
// ============================================================

/// Worst acceptable post-swap sqrt price for an expected price and a
/// slippage tolerance, clamped to the representable range.
pub fn sqrt_price_limit(
    env: &Env,
    expected_sqrt_price: Price,
    slippage: FixedPoint,
    x_to_y: bool,
) -> Result<Price, MarketError> {
    let limit = if x_to_y {
        expected_sqrt_price.mul_fixed(env, slippage.complement(), false)?
    } else {
        let upper = FixedPoint::one().checked_add(slippage)?;
        expected_sqrt_price.mul_fixed(env, upper, true)?
    };

    Ok(limit.max(min_sqrt_price()).min(max_sqrt_price()))
}

// ============================================================
// SWAP
// ============================================================

/// Execute a swap against `state`, crossing ticks through `ticks`.
///
/// Crossed ticks are written back through the store as they are crossed;
/// on error the caller must discard both `state` and the store's writes.
pub fn engine_swap<S: TickStore>(
    env: &Env,
    state: &mut SwapState,
    tickmap: &Tickmap,
    ticks: &mut S,
    request: &SwapRequest,
) -> Result<SwapResult, MarketError> {
    if request.amount == 0 {
        return Err(MarketError::ZeroAmount);
    }

    let x_to_y = request.x_to_y;
    let limit = request.sqrt_price_limit;
    let limit_on_wrong_side = if x_to_y {
        limit >= state.sqrt_price || limit < min_sqrt_price()
    } else {
        limit <= state.sqrt_price || limit > max_sqrt_price()
    };
    if limit_on_wrong_side {
        return Err(MarketError::PriceSlippageExceeded);
    }

    let mut result = SwapResult {
        start_sqrt_price: state.sqrt_price,
        ..Default::default()
    };
    let mut remaining = request.amount;

    while remaining != 0 {
        let (target, tick_limit) =
            tickmap.get_closer_limit(limit, x_to_y, state.current_tick, state.tick_spacing)?;

        let step = compute_swap_step(
            env,
            state.sqrt_price,
            target,
            state.liquidity,
            remaining,
            request.by_amount_in,
            state.fee,
        )?;

        let step_in = add_amount(step.amount_in, step.fee_amount)?;
        let used = if request.by_amount_in {
            step_in
        } else {
            step.amount_out
        };
        remaining = remaining
            .checked_sub(used)
            .ok_or(MarketError::ArithmeticOverflow)?;

        accrue_fee(env, state, &mut result, request, step.fee_amount)?;
        state.sqrt_price = step.next_sqrt_price;
        result.amount_in = add_amount(result.amount_in, step_in)?;
        result.amount_out = add_amount(result.amount_out, step.amount_out)?;

        if state.sqrt_price == limit && remaining != 0 {
            return Err(MarketError::PriceSlippageExceeded);
        }

        match tick_limit {
            Some(TickLimit { index, initialized }) if state.sqrt_price == target => {
                let enough = !x_to_y
                    || is_enough_amount_to_push_price(
                        env,
                        remaining,
                        state.sqrt_price,
                        state.liquidity,
                        state.fee,
                        request.by_amount_in,
                        x_to_y,
                    )?;

                if initialized {
                    if enough {
                        cross(env, state, ticks, index, x_to_y)?;
                        result.ticks_crossed += 1;
                    } else if remaining != 0 {
                        // Too little left to move past the tick: keep it as fee
                        if request.by_amount_in {
                            accrue_fee(env, state, &mut result, request, remaining)?;
                            result.amount_in = add_amount(result.amount_in, remaining)?;
                        }
                        remaining = 0;
                    }
                }

                state.current_tick = if x_to_y && enough {
                    index - state.tick_spacing as i32
                } else {
                    index
                };
            }
            _ => {
                let tick = sqrt_price_to_tick(state.sqrt_price)?;
                state.current_tick = align_tick_to_spacing(tick, state.tick_spacing);
            }
        }
    }

    if result.amount_out == 0 {
        return Err(MarketError::NoGainSwap);
    }

    result.target_sqrt_price = state.sqrt_price;
    result.current_tick = state.current_tick;
    Ok(result)
}

fn add_amount(total: TokenAmount, amount: TokenAmount) -> Result<TokenAmount, MarketError> {
    total
        .checked_add(amount)
        .ok_or(MarketError::ArithmeticOverflow)
}

/// Split a step's fee and credit the pool's share to fee growth of the
/// input token. Without liquidity there is no one to credit, so the pool's
/// share goes to the protocol.
fn accrue_fee(
    env: &Env,
    state: &mut SwapState,
    result: &mut SwapResult,
    request: &SwapRequest,
    fee: TokenAmount,
) -> Result<(), MarketError> {
    if fee == 0 {
        return Ok(());
    }

    let mut split = FeeSplit::new(fee, request.protocol_fee, request.with_referral)?;

    if state.liquidity.is_zero() {
        split.protocol += split.pool;
        split.pool = 0;
    } else if split.pool != 0 {
        let growth = FeeGrowth::from_fee(env, state.liquidity, split.pool)?;
        if request.x_to_y {
            state.fee_growth_global_x = state.fee_growth_global_x.wrapping_add(growth);
        } else {
            state.fee_growth_global_y = state.fee_growth_global_y.wrapping_add(growth);
        }
    }

    result.fee = add_amount(result.fee, fee)?;
    result.protocol_fee = add_amount(result.protocol_fee, split.protocol)?;
    result.referral_fee = add_amount(result.referral_fee, split.referral)?;
    Ok(())
}

fn cross<S: TickStore>(
    env: &Env,
    state: &mut SwapState,
    ticks: &mut S,
    index: i32,
    x_to_y: bool,
) -> Result<(), MarketError> {
    let mut tick = ticks
        .read_tick(env, index)
        .ok_or(MarketError::TickNotFound)?;

    tick.cross(
        state.fee_growth_global_x,
        state.fee_growth_global_y,
        state.seconds_per_liquidity_global,
    );
    state.liquidity = tick.liquidity_after_cross(state.liquidity, x_to_y)?;
    ticks.write_tick(env, &tick);

    log!(env, "cross tick", index, state.liquidity.v);
    Ok(())
}
