// SPDX-License-Identifier: MIT
// Tick <-> sqrt price conversion

use crate::constants::{MAX_SQRT_PRICE, MAX_TICK, MIN_SQRT_PRICE, MIN_TICK, TICK_LIMIT};
use crate::decimal::Price;
use crate::error::MarketError;

/// Precision of the factor table below.
const FACTOR_ONE: u128 = 1_000_000_000_000;

/// `floor(sqrt(1.0001)^(2^k) * 10^12)` for k = 0..17.
const TICK_FACTORS: [u128; 18] = [
    1_000_049_998_750,
    1_000_100_000_000,
    1_000_200_010_000,
    1_000_400_060_004,
    1_000_800_280_056,
    1_001_601_200_560,
    1_003_204_964_963,
    1_006_420_201_727,
    1_012_881_622_445,
    1_025_929_181_087,
    1_052_530_684_607,
    1_107_820_842_039,
    1_227_267_018_058,
    1_506_184_333_613,
    2_268_591_246_822,
    5_146_506_245_160,
    26_486_526_531_474,
    701_536_087_702_486,
];

/// Convert tick to sqrt price: `sqrt(1.0001^tick)` at 24 decimals.
pub fn tick_to_sqrt_price(tick: i32) -> Result<Price, MarketError> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MarketError::InvalidTick);
    }
    Ok(sqrt_price_at(tick))
}

// Caller guarantees |tick| <= MAX_TICK, which keeps every product below 2^128.
fn sqrt_price_at(tick: i32) -> Price {
    let abs_tick = tick.unsigned_abs();
    let mut sqrt_price = FACTOR_ONE;

    for (bit, factor) in TICK_FACTORS.iter().enumerate() {
        if abs_tick & (1 << bit) != 0 {
            sqrt_price = sqrt_price * factor / FACTOR_ONE;
        }
    }

    if tick < 0 {
        sqrt_price = FACTOR_ONE * FACTOR_ONE / sqrt_price;
    }

    Price::new(sqrt_price * FACTOR_ONE)
}

/// Greatest tick whose sqrt price is `<= sqrt_price`.
///
/// `tick_to_sqrt_price` is strictly increasing, so this is an exact left
/// inverse: `sqrt_price_to_tick(tick_to_sqrt_price(t)?) == t`.
pub fn sqrt_price_to_tick(sqrt_price: Price) -> Result<i32, MarketError> {
    if sqrt_price.v < MIN_SQRT_PRICE {
        return Err(MarketError::InvalidTick);
    }
    if sqrt_price.v >= MAX_SQRT_PRICE {
        return Ok(MAX_TICK);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;
    while low < high {
        // Upper midpoint so `low = mid` always makes progress
        let mid = low + (high - low + 1) / 2;
        if sqrt_price_at(mid) <= sqrt_price {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    Ok(low)
}

// ============================================================
// SPACING HELPERS
// ============================================================

/// Round `tick` down to a multiple of `tick_spacing`.
#[inline]
pub fn align_tick_to_spacing(tick: i32, tick_spacing: u32) -> i32 {
    let spacing = tick_spacing as i32;
    tick.div_euclid(spacing) * spacing
}

#[inline]
pub fn is_aligned(tick: i32, tick_spacing: u32) -> bool {
    tick % tick_spacing as i32 == 0
}

/// Lowest tick a pool with this spacing can initialize.
pub fn get_min_tick(tick_spacing: u32) -> i32 {
    -get_max_tick(tick_spacing)
}

/// Highest tick a pool with this spacing can initialize.
pub fn get_max_tick(tick_spacing: u32) -> i32 {
    let spacing = tick_spacing as i32;
    (MAX_TICK / spacing).min(TICK_LIMIT - 1) * spacing
}

pub fn min_sqrt_price() -> Price {
    Price::new(MIN_SQRT_PRICE)
}

pub fn max_sqrt_price() -> Price {
    Price::new(MAX_SQRT_PRICE)
}
