// Position Management Logic

use soroban_sdk::Env;
use tideswap_math::{FeeGrowth, Liquidity, MarketError, SecondsPerLiquidity, TokenAmount};
use tideswap_tick::{get_fee_growth_inside, get_seconds_per_liquidity_inside, Tick};

use crate::types::{PoolGrowth, Position};

impl Position {
    /// Settle fees earned since the last checkpoint into `tokens_owed_*`.
    ///
    /// Growth deltas use wrapping subtraction; the accumulators themselves
    /// may wrap between checkpoints.
    pub fn update_fees(
        &mut self,
        env: &Env,
        fee_growth_inside_x: FeeGrowth,
        fee_growth_inside_y: FeeGrowth,
    ) -> Result<(), MarketError> {
        if !self.liquidity.is_zero() {
            let fee_x = fee_growth_inside_x
                .wrapping_sub(self.fee_growth_inside_x)
                .to_fee(env, self.liquidity)?;
            let fee_y = fee_growth_inside_y
                .wrapping_sub(self.fee_growth_inside_y)
                .to_fee(env, self.liquidity)?;

            self.tokens_owed_x = self
                .tokens_owed_x
                .checked_add(fee_x)
                .ok_or(MarketError::ArithmeticOverflow)?;
            self.tokens_owed_y = self
                .tokens_owed_y
                .checked_add(fee_y)
                .ok_or(MarketError::ArithmeticOverflow)?;
        }

        self.fee_growth_inside_x = fee_growth_inside_x;
        self.fee_growth_inside_y = fee_growth_inside_y;
        Ok(())
    }

    /// Refresh the seconds-per-liquidity checkpoint for the range.
    pub fn update_seconds_per_liquidity(
        &mut self,
        lower: &Tick,
        upper: &Tick,
        current_tick: i32,
        seconds_per_liquidity_global: SecondsPerLiquidity,
        now: u64,
    ) {
        self.seconds_per_liquidity_inside =
            get_seconds_per_liquidity_inside(lower, upper, current_tick, seconds_per_liquidity_global);
        self.last_timestamp = now;
    }

    /// Add or remove liquidity, updating both boundary ticks and settling
    /// fees at the old liquidity first.
    ///
    /// `global` must already include time elapsed up to `global.timestamp`.
    pub fn modify(
        &mut self,
        env: &Env,
        lower: &mut Tick,
        upper: &mut Tick,
        current_tick: i32,
        global: &PoolGrowth,
        liquidity_delta: Liquidity,
        is_deposit: bool,
    ) -> Result<(), MarketError> {
        if liquidity_delta.is_zero() {
            return Err(MarketError::ZeroLiquidity);
        }

        lower.update(liquidity_delta, false, is_deposit)?;
        upper.update(liquidity_delta, true, is_deposit)?;

        let (inside_x, inside_y) = get_fee_growth_inside(
            lower,
            upper,
            current_tick,
            global.fee_growth_global_x,
            global.fee_growth_global_y,
        );
        self.update_fees(env, inside_x, inside_y)?;
        self.update_seconds_per_liquidity(
            lower,
            upper,
            current_tick,
            global.seconds_per_liquidity_global,
            global.timestamp,
        );

        self.liquidity = if is_deposit {
            self.liquidity.checked_add(liquidity_delta)?
        } else {
            self.liquidity
                .checked_sub(liquidity_delta)
                .map_err(|_| MarketError::InsufficientPositionLiquidity)?
        };
        Ok(())
    }

    /// Take everything owed, leaving the position with nothing to claim.
    pub fn take_owed(&mut self) -> (TokenAmount, TokenAmount) {
        let owed = (self.tokens_owed_x, self.tokens_owed_y);
        self.tokens_owed_x = 0;
        self.tokens_owed_y = 0;
        owed
    }
}
