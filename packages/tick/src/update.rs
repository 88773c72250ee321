// Tick creation, liquidity updates and crossing

use soroban_sdk::Env;
use tideswap_math::{tick_to_sqrt_price, FeeGrowth, Liquidity, MarketError, SecondsPerLiquidity};
use crate::types::Tick;

/// Storage seam for tick records.
///
/// The market contract backs this with persistent storage; quotes and tests
/// back it with in-memory maps.
pub trait TickStore {
    fn read_tick(&self, env: &Env, index: i32) -> Option<Tick>;
    fn write_tick(&mut self, env: &Env, tick: &Tick);
}

impl Tick {
    /// New tick with no liquidity.
    ///
    /// Fee growth and seconds per liquidity below the current price count as
    /// already accrued outside, so ranges opened later only see what happens
    /// after creation.
    pub fn create(
        index: i32,
        current_tick: i32,
        fee_growth_global_x: FeeGrowth,
        fee_growth_global_y: FeeGrowth,
        seconds_per_liquidity_global: SecondsPerLiquidity,
    ) -> Result<Self, MarketError> {
        let below_current = index <= current_tick;
        Ok(Self {
            index,
            sign: true,
            liquidity_change: Liquidity::zero(),
            liquidity_gross: Liquidity::zero(),
            sqrt_price: tick_to_sqrt_price(index)?,
            fee_growth_outside_x: if below_current { fee_growth_global_x } else { FeeGrowth::zero() },
            fee_growth_outside_y: if below_current { fee_growth_global_y } else { FeeGrowth::zero() },
            seconds_per_liquidity_outside: if below_current {
                seconds_per_liquidity_global
            } else {
                SecondsPerLiquidity::zero()
            },
        })
    }

    /// Apply a position's liquidity delta to this boundary.
    ///
    /// Lower boundaries add on deposit, upper boundaries subtract; withdrawals
    /// do the reverse.
    pub fn update(
        &mut self,
        liquidity_delta: Liquidity,
        is_upper: bool,
        is_deposit: bool,
    ) -> Result<(), MarketError> {
        self.liquidity_gross = if is_deposit {
            self.liquidity_gross.checked_add(liquidity_delta)?
        } else {
            self.liquidity_gross
                .checked_sub(liquidity_delta)
                .map_err(|_| MarketError::InsufficientPositionLiquidity)?
        };

        self.apply_liquidity_change(liquidity_delta, is_deposit ^ is_upper)
    }

    fn apply_liquidity_change(&mut self, delta: Liquidity, add: bool) -> Result<(), MarketError> {
        if self.sign == add {
            self.liquidity_change = self.liquidity_change.checked_add(delta)?;
        } else if self.liquidity_change > delta {
            self.liquidity_change = self.liquidity_change.checked_sub(delta)?;
        } else {
            self.liquidity_change = delta.checked_sub(self.liquidity_change)?;
            self.sign = !self.sign;
        }
        Ok(())
    }

    /// Move the price across this tick: outside accumulators flip to the other side.
    pub fn cross(
        &mut self,
        fee_growth_global_x: FeeGrowth,
        fee_growth_global_y: FeeGrowth,
        seconds_per_liquidity_global: SecondsPerLiquidity,
    ) {
        self.fee_growth_outside_x = cross_fee_growth(fee_growth_global_x, self.fee_growth_outside_x);
        self.fee_growth_outside_y = cross_fee_growth(fee_growth_global_y, self.fee_growth_outside_y);
        self.seconds_per_liquidity_outside =
            seconds_per_liquidity_global.wrapping_sub(self.seconds_per_liquidity_outside);
    }

    /// Pool liquidity after crossing this tick in the given direction.
    pub fn liquidity_after_cross(
        &self,
        liquidity: Liquidity,
        x_to_y: bool,
    ) -> Result<Liquidity, MarketError> {
        // Moving down undoes what an upward cross applies
        if self.sign != x_to_y {
            liquidity.checked_add(self.liquidity_change)
        } else {
            liquidity.checked_sub(self.liquidity_change)
        }
    }
}

/// Fee growth outside a tick after the price crosses it.
#[inline]
pub fn cross_fee_growth(global: FeeGrowth, outside: FeeGrowth) -> FeeGrowth {
    global.wrapping_sub(outside)
}
