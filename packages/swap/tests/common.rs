#![allow(dead_code)]

use std::collections::BTreeMap;

use soroban_sdk::Env;
use tideswap_math::{
    get_max_tick, get_min_tick, FeeGrowth, FixedPoint, Liquidity, Price, SecondsPerLiquidity,
    MAX_SQRT_PRICE, MIN_SQRT_PRICE,
};
use tideswap_swap::{SwapRequest, SwapState};
use tideswap_tick::{Tick, TickStore, Tickmap};

#[derive(Default)]
pub struct MemoryTicks(pub BTreeMap<i32, Tick>);

impl TickStore for MemoryTicks {
    fn read_tick(&self, _env: &Env, index: i32) -> Option<Tick> {
        self.0.get(&index).cloned()
    }

    fn write_tick(&mut self, _env: &Env, tick: &Tick) {
        self.0.insert(tick.index, tick.clone());
    }
}

/// In-memory pool at tick 0, price 1.
pub struct TestPool {
    pub state: SwapState,
    pub tickmap: Tickmap,
    pub ticks: MemoryTicks,
}

impl TestPool {
    pub fn new(fee: FixedPoint, tick_spacing: u32) -> Self {
        Self {
            state: SwapState {
                sqrt_price: Price::from_integer(1),
                current_tick: 0,
                liquidity: Liquidity::zero(),
                tick_spacing,
                fee,
                fee_growth_global_x: FeeGrowth::zero(),
                fee_growth_global_y: FeeGrowth::zero(),
                seconds_per_liquidity_global: SecondsPerLiquidity::zero(),
            },
            tickmap: Tickmap::default(),
            ticks: MemoryTicks::default(),
        }
    }

    pub fn create_tick(&mut self, index: i32) {
        let tick = Tick::create(
            index,
            self.state.current_tick,
            self.state.fee_growth_global_x,
            self.state.fee_growth_global_y,
            self.state.seconds_per_liquidity_global,
        )
        .unwrap();
        self.tickmap.flip(true, index, self.state.tick_spacing).unwrap();
        self.ticks.0.insert(index, tick);
    }

    pub fn add_liquidity(&mut self, lower: i32, upper: i32, liquidity: Liquidity) {
        for index in [lower, upper] {
            if !self.ticks.0.contains_key(&index) {
                self.create_tick(index);
            }
        }
        self.ticks.0.get_mut(&lower).unwrap().update(liquidity, false, true).unwrap();
        self.ticks.0.get_mut(&upper).unwrap().update(liquidity, true, true).unwrap();

        if (lower..upper).contains(&self.state.current_tick) {
            self.state.liquidity = self.state.liquidity.checked_add(liquidity).unwrap();
        }
    }

    pub fn min_tick(&self) -> i32 {
        get_min_tick(self.state.tick_spacing)
    }

    pub fn max_tick(&self) -> i32 {
        get_max_tick(self.state.tick_spacing)
    }
}

/// fee 0.5%, spacing 5, ticks 10 and -20, full range + [-20, 10) of 1M each.
pub fn referral_pool() -> TestPool {
    let mut pool = TestPool::new(FixedPoint::from_scale(5, 3), 5);
    pool.create_tick(10);
    pool.create_tick(-20);
    let full_range = (pool.min_tick(), pool.max_tick());
    pool.add_liquidity(full_range.0, full_range.1, Liquidity::from_integer(1_000_000));
    pool.add_liquidity(-20, 10, Liquidity::from_integer(1_000_000));
    pool
}

pub fn request(x_to_y: bool, amount: u64, by_amount_in: bool) -> SwapRequest {
    SwapRequest {
        x_to_y,
        amount,
        by_amount_in,
        sqrt_price_limit: Price::new(if x_to_y { MIN_SQRT_PRICE } else { MAX_SQRT_PRICE }),
        protocol_fee: FixedPoint::from_scale(1, 2),
        with_referral: false,
    }
}
