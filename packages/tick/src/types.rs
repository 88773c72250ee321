// Tick Types

use soroban_sdk::contracttype;
use tideswap_math::{FeeGrowth, Liquidity, Price, SecondsPerLiquidity};

/// Boundary record stored for every initialized tick of a pool
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub index: i32,
    /// Direction of `liquidity_change` when crossing upwards (true = add)
    pub sign: bool,
    /// Magnitude of the net liquidity delta applied on an upward cross
    pub liquidity_change: Liquidity,
    /// Total liquidity of positions bounded by this tick
    pub liquidity_gross: Liquidity,
    pub sqrt_price: Price,
    /// Fee growth on the side of this tick away from the current price
    pub fee_growth_outside_x: FeeGrowth,
    pub fee_growth_outside_y: FeeGrowth,
    /// Seconds per unit of liquidity spent on the far side of this tick
    pub seconds_per_liquidity_outside: SecondsPerLiquidity,
}
