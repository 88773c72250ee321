// TideSwap Math Package
//
// Fixed-point decimals, tick math and single-step swap math shared by the
// tick, position and swap packages and the market contract, plus the error
// codes and pool keys every layer shares.

#![no_std]

pub mod constants;
pub mod decimal;
pub mod delta;
pub mod error;
pub mod full_math;
pub mod pool_key;
pub mod sqrt_price;
pub mod swap_math;
pub mod tick_math;

pub use constants::*;
pub use decimal::{FeeGrowth, FixedPoint, Liquidity, Price, SecondsPerLiquidity, TokenAmount};
pub use delta::{get_amounts_for_liquidity, get_delta_x, get_delta_y};
pub use error::MarketError;
pub use full_math::{div_round_up, mul_div, mul_div_up};
pub use pool_key::{FeeTier, PoolKey};
pub use sqrt_price::{get_next_sqrt_price_from_input, get_next_sqrt_price_from_output};
pub use swap_math::{compute_swap_step, is_enough_amount_to_push_price, SwapStep};
pub use tick_math::{
    align_tick_to_spacing, get_max_tick, get_min_tick, is_aligned, max_sqrt_price,
    min_sqrt_price, sqrt_price_to_tick, tick_to_sqrt_price,
};
