use soroban_sdk::{contracttype, Address};
use tideswap_math::{FeeGrowth, Liquidity, PoolKey, SecondsPerLiquidity, TokenAmount};

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub owner: Address,
    pub pool_key: PoolKey,
    /// Unique within the pool, taken from the pool's position iterator
    pub id: u64,
    pub liquidity: Liquidity,
    pub lower_tick_index: i32,
    pub upper_tick_index: i32,
    /// Fee growth inside the range at the last settlement
    pub fee_growth_inside_x: FeeGrowth,
    pub fee_growth_inside_y: FeeGrowth,
    pub tokens_owed_x: TokenAmount,
    pub tokens_owed_y: TokenAmount,
    /// Seconds per liquidity inside the range at `last_timestamp`
    pub seconds_per_liquidity_inside: SecondsPerLiquidity,
    pub last_timestamp: u64,
}

/// Pool-wide accumulators read when a position settles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolGrowth {
    pub fee_growth_global_x: FeeGrowth,
    pub fee_growth_global_y: FeeGrowth,
    pub seconds_per_liquidity_global: SecondsPerLiquidity,
    pub timestamp: u64,
}

/// Per-owner arena header. Entries live at indices `0..head`.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PositionList {
    pub head: u32,
}
