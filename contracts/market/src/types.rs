// Market Types

use soroban_sdk::{contracttype, Address, Env};
use tideswap_math::{
    FeeGrowth, FixedPoint, Liquidity, MarketError, PoolKey, Price, SecondsPerLiquidity, TokenAmount,
};
use tideswap_position::PoolGrowth;
use tideswap_swap::SwapState;

pub use tideswap_math::FeeTier;
pub use tideswap_position::{Position, PositionList};
pub use tideswap_swap::SwapResult;
pub use tideswap_tick::Tick;

// ============================================================
// STATE
// ============================================================

/// Market-wide configuration, created once
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub admin: Address,
    /// Share of every swap fee kept by the protocol
    pub protocol_fee: FixedPoint,
}

// ============================================================
// POOL
// ============================================================

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    pub token_x: Address,
    pub token_y: Address,
    pub fee: FixedPoint,
    pub tick_spacing: u32,
    pub sqrt_price: Price,
    pub current_tick_index: i32,
    /// Liquidity active at the current price
    pub liquidity: Liquidity,
    pub fee_growth_global_x: FeeGrowth,
    pub fee_growth_global_y: FeeGrowth,
    /// Protocol fees held in the reserves until withdrawn
    pub fee_protocol_token_x: TokenAmount,
    pub fee_protocol_token_y: TokenAmount,
    /// Tokens this pool holds in the market contract
    pub reserve_x: TokenAmount,
    pub reserve_y: TokenAmount,
    /// Next position id
    pub position_iterator: u64,
    /// Seconds elapsed per unit of active liquidity, wrapping
    pub seconds_per_liquidity_global: SecondsPerLiquidity,
    pub start_timestamp: u64,
    /// Ledger time `seconds_per_liquidity_global` was last advanced to
    pub last_timestamp: u64,
}

impl Pool {
    /// Fresh pool at tick 0 and price 1.
    pub fn new(key: &PoolKey, now: u64) -> Self {
        Self {
            token_x: key.token_x.clone(),
            token_y: key.token_y.clone(),
            fee: key.fee_tier.fee,
            tick_spacing: key.fee_tier.tick_spacing,
            sqrt_price: Price::from_integer(1),
            current_tick_index: 0,
            liquidity: Liquidity::zero(),
            fee_growth_global_x: FeeGrowth::zero(),
            fee_growth_global_y: FeeGrowth::zero(),
            fee_protocol_token_x: 0,
            fee_protocol_token_y: 0,
            reserve_x: 0,
            reserve_y: 0,
            position_iterator: 0,
            seconds_per_liquidity_global: SecondsPerLiquidity::zero(),
            start_timestamp: now,
            last_timestamp: now,
        }
    }

    /// Advance the seconds-per-liquidity accumulator to `now`.
    ///
    /// Time spent without active liquidity is skipped.
    pub fn update_seconds_per_liquidity_global(
        &mut self,
        env: &Env,
        now: u64,
    ) -> Result<(), MarketError> {
        if !self.liquidity.is_zero() {
            let elapsed = now.saturating_sub(self.last_timestamp);
            let growth = SecondsPerLiquidity::from_elapsed(env, elapsed, self.liquidity)?;
            self.seconds_per_liquidity_global = self.seconds_per_liquidity_global.wrapping_add(growth);
        }
        self.last_timestamp = now;
        Ok(())
    }

    /// Global accumulators as positions see them.
    pub fn growth(&self) -> PoolGrowth {
        PoolGrowth {
            fee_growth_global_x: self.fee_growth_global_x,
            fee_growth_global_y: self.fee_growth_global_y,
            seconds_per_liquidity_global: self.seconds_per_liquidity_global,
            timestamp: self.last_timestamp,
        }
    }

    pub fn swap_state(&self) -> SwapState {
        SwapState {
            sqrt_price: self.sqrt_price,
            current_tick: self.current_tick_index,
            liquidity: self.liquidity,
            tick_spacing: self.tick_spacing,
            fee: self.fee,
            fee_growth_global_x: self.fee_growth_global_x,
            fee_growth_global_y: self.fee_growth_global_y,
            seconds_per_liquidity_global: self.seconds_per_liquidity_global,
        }
    }

    pub fn apply_swap_state(&mut self, state: &SwapState) {
        self.sqrt_price = state.sqrt_price;
        self.current_tick_index = state.current_tick;
        self.liquidity = state.liquidity;
        self.fee_growth_global_x = state.fee_growth_global_x;
        self.fee_growth_global_y = state.fee_growth_global_y;
    }
}

// ============================================================
// SWAP PARAMETERS
// ============================================================

#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapParams {
    pub x_to_y: bool,
    /// Input amount when `by_amount_in`, otherwise the exact output wanted
    pub amount: TokenAmount,
    pub by_amount_in: bool,
    /// Sqrt price the caller expects after the swap
    pub expected_sqrt_price: Price,
    /// Tolerated relative deviation from `expected_sqrt_price`
    pub slippage: FixedPoint,
}
