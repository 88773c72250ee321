// Fee Growth Calculations

use tideswap_math::{FeeGrowth, SecondsPerLiquidity};
use crate::types::Tick;

/// Fee growth accrued inside `[lower, upper)` per unit of liquidity.
///
/// All arithmetic wraps: only differences between two readings are meaningful.
pub fn get_fee_growth_inside(
    lower: &Tick,
    upper: &Tick,
    current_tick: i32,
    fee_growth_global_x: FeeGrowth,
    fee_growth_global_y: FeeGrowth,
) -> (FeeGrowth, FeeGrowth) {
    let (fee_growth_below_x, fee_growth_below_y) = if current_tick >= lower.index {
        (lower.fee_growth_outside_x, lower.fee_growth_outside_y)
    } else {
        (
            fee_growth_global_x.wrapping_sub(lower.fee_growth_outside_x),
            fee_growth_global_y.wrapping_sub(lower.fee_growth_outside_y),
        )
    };

    let (fee_growth_above_x, fee_growth_above_y) = if current_tick < upper.index {
        (upper.fee_growth_outside_x, upper.fee_growth_outside_y)
    } else {
        (
            fee_growth_global_x.wrapping_sub(upper.fee_growth_outside_x),
            fee_growth_global_y.wrapping_sub(upper.fee_growth_outside_y),
        )
    };

    let fee_growth_inside_x = fee_growth_global_x
        .wrapping_sub(fee_growth_below_x)
        .wrapping_sub(fee_growth_above_x);

    let fee_growth_inside_y = fee_growth_global_y
        .wrapping_sub(fee_growth_below_y)
        .wrapping_sub(fee_growth_above_y);

    (fee_growth_inside_x, fee_growth_inside_y)
}

/// Seconds per unit of liquidity spent with the price inside `[lower, upper)`.
pub fn get_seconds_per_liquidity_inside(
    lower: &Tick,
    upper: &Tick,
    current_tick: i32,
    seconds_per_liquidity_global: SecondsPerLiquidity,
) -> SecondsPerLiquidity {
    let below = if current_tick >= lower.index {
        lower.seconds_per_liquidity_outside
    } else {
        seconds_per_liquidity_global.wrapping_sub(lower.seconds_per_liquidity_outside)
    };

    let above = if current_tick < upper.index {
        upper.seconds_per_liquidity_outside
    } else {
        seconds_per_liquidity_global.wrapping_sub(upper.seconds_per_liquidity_outside)
    };

    seconds_per_liquidity_global
        .wrapping_sub(below)
        .wrapping_sub(above)
}
