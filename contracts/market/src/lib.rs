#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Bytes, Env};

use tideswap_math::{
    get_amounts_for_liquidity, get_max_tick, get_min_tick, is_aligned, FeeTier, FixedPoint,
    Liquidity, MarketError, PoolKey, Price, TokenAmount,
};
use tideswap_swap::{engine_swap, sqrt_price_limit, SwapRequest};
use tideswap_tick::{get_fee_growth_inside, Tick, Tickmap};

mod events;
mod storage;
pub mod types;

use events::*;
use storage::{PoolTicks, QuoteTicks};
use types::{Pool, Position, PositionList, State, SwapParams, SwapResult};

#[contract]
pub struct MarketContract;

#[contractimpl]
impl MarketContract {
    // ========================================================
    // STATE
    // ========================================================

    /// Create the market singleton. Can only be called once.
    pub fn create_state(env: Env, admin: Address, protocol_fee: FixedPoint) -> Result<(), MarketError> {
        admin.require_auth();

        if storage::has_state(&env) {
            return Err(MarketError::StateAlreadyExists);
        }
        check_protocol_fee(protocol_fee)?;

        storage::write_state(
            &env,
            &State {
                admin: admin.clone(),
                protocol_fee,
            },
        );
        emit_state_created(&env, &admin, protocol_fee);
        Ok(())
    }

    pub fn get_state(env: Env) -> Result<State, MarketError> {
        storage::read_state(&env)
    }

    pub fn change_protocol_fee(
        env: Env,
        admin: Address,
        protocol_fee: FixedPoint,
    ) -> Result<(), MarketError> {
        let mut state = require_admin(&env, &admin)?;
        check_protocol_fee(protocol_fee)?;

        let old_fee = state.protocol_fee;
        state.protocol_fee = protocol_fee;
        storage::write_state(&env, &state);

        emit_protocol_fee_changed(&env, old_fee, protocol_fee);
        Ok(())
    }

    // ========================================================
    // FEE TIERS
    // ========================================================

    pub fn create_fee_tier(env: Env, admin: Address, fee_tier: FeeTier) -> Result<(), MarketError> {
        require_admin(&env, &admin)?;

        let fee_tier = FeeTier::new(fee_tier.fee, fee_tier.tick_spacing)?;
        if storage::fee_tier_exists(&env, &fee_tier) {
            return Err(MarketError::FeeTierAlreadyExists);
        }

        storage::write_fee_tier(&env, &fee_tier);
        emit_fee_tier_created(&env, &fee_tier);
        Ok(())
    }

    pub fn fee_tier_exists(env: Env, fee_tier: FeeTier) -> bool {
        storage::fee_tier_exists(&env, &fee_tier)
    }

    pub fn get_fee_tier(env: Env, fee_tier: FeeTier) -> Result<FeeTier, MarketError> {
        if !storage::fee_tier_exists(&env, &fee_tier) {
            return Err(MarketError::FeeTierNotFound);
        }
        Ok(fee_tier)
    }

    // ========================================================
    // POOLS
    // ========================================================

    /// Create the pool for a token pair and registered fee tier.
    ///
    /// The pool starts at tick 0 with a sqrt price of 1 and no liquidity.
    /// Returns the canonical key, with the tokens in ascending order.
    pub fn create_pool(
        env: Env,
        token_0: Address,
        token_1: Address,
        fee_tier: FeeTier,
    ) -> Result<PoolKey, MarketError> {
        let key = PoolKey::new(token_0, token_1, fee_tier)?;

        if !storage::fee_tier_exists(&env, &fee_tier) {
            return Err(MarketError::FeeTierNotFound);
        }
        if storage::has_pool(&env, &key) {
            return Err(MarketError::PoolAlreadyExists);
        }

        storage::write_pool(&env, &key, &Pool::new(&key, env.ledger().timestamp()));
        storage::write_tickmap(&env, &key, &Tickmap::default());

        emit_pool_created(&env, &key);
        Ok(key)
    }

    pub fn get_pool(env: Env, pool_key: PoolKey) -> Result<Pool, MarketError> {
        storage::read_pool(&env, &canonical(pool_key)?)
    }

    /// Raw tickmap bitmap, one bit per spacing-aligned tick.
    pub fn get_tickmap(env: Env, pool_key: PoolKey) -> Result<Bytes, MarketError> {
        let key = canonical(pool_key)?;
        Ok(storage::read_tickmap(&env, &key)?.to_bytes(&env))
    }

    /// Token balances held for the pool, protocol fees included.
    pub fn get_reserve_balances(
        env: Env,
        pool_key: PoolKey,
    ) -> Result<(TokenAmount, TokenAmount), MarketError> {
        let pool = storage::read_pool(&env, &canonical(pool_key)?)?;
        Ok((pool.reserve_x, pool.reserve_y))
    }

    // ========================================================
    // TICKS
    // ========================================================

    pub fn create_tick(env: Env, pool_key: PoolKey, index: i32) -> Result<Tick, MarketError> {
        let key = canonical(pool_key)?;
        let mut pool = storage::read_pool(&env, &key)?;
        check_tick(index, pool.tick_spacing)?;

        if storage::has_tick(&env, &key, index) {
            return Err(MarketError::TickAlreadyExists);
        }

        pool.update_seconds_per_liquidity_global(&env, env.ledger().timestamp())?;
        let mut tickmap = storage::read_tickmap(&env, &key)?;
        let tick = new_tick(&env, &key, &pool, &mut tickmap, index)?;
        storage::write_tick(&env, &key, &tick);
        storage::write_tickmap(&env, &key, &tickmap);
        storage::write_pool(&env, &key, &pool);
        Ok(tick)
    }

    pub fn get_tick(env: Env, pool_key: PoolKey, index: i32) -> Result<Tick, MarketError> {
        storage::read_tick(&env, &canonical(pool_key)?, index)
    }

    pub fn is_tick_initialized(env: Env, pool_key: PoolKey, index: i32) -> Result<bool, MarketError> {
        let key = canonical(pool_key)?;
        let pool = storage::read_pool(&env, &key)?;
        Ok(storage::read_tickmap(&env, &key)?.get(index, pool.tick_spacing))
    }

    // ========================================================
    // POSITIONS
    // ========================================================

    pub fn create_position_list(env: Env, owner: Address) -> Result<(), MarketError> {
        owner.require_auth();

        if storage::has_position_list(&env, &owner) {
            return Err(MarketError::PositionListAlreadyExists);
        }
        storage::write_position_list(&env, &owner, &PositionList::default());
        Ok(())
    }

    /// Open a position on `[lower_tick, upper_tick)` and pull the backing
    /// tokens from `owner`, rounded up.
    ///
    /// `i32::MIN` and `i32::MAX` select the pool's full range. When
    /// `known_sqrt_price` is given, the pool price must lie within
    /// `slippage` of it.
    pub fn init_position(
        env: Env,
        owner: Address,
        pool_key: PoolKey,
        lower_tick: i32,
        upper_tick: i32,
        liquidity_delta: Liquidity,
        known_sqrt_price: Option<Price>,
        slippage: FixedPoint,
    ) -> Result<Position, MarketError> {
        owner.require_auth();

        let key = canonical(pool_key)?;
        let mut pool = storage::read_pool(&env, &key)?;

        if liquidity_delta.is_zero() {
            return Err(MarketError::ZeroLiquidity);
        }

        let lower_tick = if lower_tick == i32::MIN {
            get_min_tick(pool.tick_spacing)
        } else {
            lower_tick
        };
        let upper_tick = if upper_tick == i32::MAX {
            get_max_tick(pool.tick_spacing)
        } else {
            upper_tick
        };
        if lower_tick >= upper_tick {
            return Err(MarketError::InvalidTickRange);
        }
        check_tick(lower_tick, pool.tick_spacing)?;
        check_tick(upper_tick, pool.tick_spacing)?;

        if let Some(known) = known_sqrt_price {
            check_price_tolerance(&env, pool.sqrt_price, known, slippage)?;
        }

        pool.update_seconds_per_liquidity_global(&env, env.ledger().timestamp())?;

        let mut tickmap = storage::read_tickmap(&env, &key)?;
        let tickmap_before = tickmap.clone();
        let mut lower = load_or_create_tick(&env, &key, &pool, &mut tickmap, lower_tick)?;
        let mut upper = load_or_create_tick(&env, &key, &pool, &mut tickmap, upper_tick)?;

        let mut position = Position {
            owner: owner.clone(),
            pool_key: key.clone(),
            id: pool.position_iterator,
            liquidity: Liquidity::zero(),
            lower_tick_index: lower_tick,
            upper_tick_index: upper_tick,
            fee_growth_inside_x: Default::default(),
            fee_growth_inside_y: Default::default(),
            tokens_owed_x: 0,
            tokens_owed_y: 0,
            seconds_per_liquidity_inside: Default::default(),
            last_timestamp: 0,
        };
        pool.position_iterator += 1;

        position.modify(
            &env,
            &mut lower,
            &mut upper,
            pool.current_tick_index,
            &pool.growth(),
            liquidity_delta,
            true,
        )?;

        let (amount_x, amount_y, in_range) = get_amounts_for_liquidity(
            &env,
            pool.current_tick_index,
            pool.sqrt_price,
            liquidity_delta,
            lower_tick,
            upper_tick,
            true,
        )?;
        if in_range {
            pool.liquidity = pool.liquidity.checked_add(liquidity_delta)?;
        }
        pool.reserve_x = add_amount(pool.reserve_x, amount_x)?;
        pool.reserve_y = add_amount(pool.reserve_y, amount_y)?;

        storage::write_tick(&env, &key, &lower);
        storage::write_tick(&env, &key, &upper);
        if tickmap != tickmap_before {
            storage::write_tickmap(&env, &key, &tickmap);
        }
        storage::write_pool(&env, &key, &pool);

        let mut list = storage::read_position_list(&env, &owner);
        let index = list.push();
        storage::write_position(&env, &owner, index, &position);
        storage::write_position_list(&env, &owner, &list);

        let market = env.current_contract_address();
        transfer(&env, &key.token_x, &owner, &market, amount_x)?;
        transfer(&env, &key.token_y, &owner, &market, amount_y)?;

        emit_position_created(
            &env,
            &owner,
            position.id,
            lower_tick,
            upper_tick,
            liquidity_delta,
            amount_x,
            amount_y,
        );
        Ok(position)
    }

    /// Close the position at `index`, paying out its liquidity (rounded
    /// down) together with any owed fees. Boundary ticks no longer referenced
    /// by any position are deleted.
    pub fn remove_position(env: Env, owner: Address, index: u32) -> Result<Position, MarketError> {
        owner.require_auth();

        let mut list = storage::read_position_list(&env, &owner);
        if !list.contains(index) {
            return Err(MarketError::PositionNotFound);
        }
        let mut position = storage::read_position(&env, &owner, index)?;
        let removed = position.clone();

        let key = position.pool_key.clone();
        let mut pool = storage::read_pool(&env, &key)?;
        let mut lower = storage::read_tick(&env, &key, position.lower_tick_index)?;
        let mut upper = storage::read_tick(&env, &key, position.upper_tick_index)?;
        pool.update_seconds_per_liquidity_global(&env, env.ledger().timestamp())?;

        let liquidity = position.liquidity;
        position.modify(
            &env,
            &mut lower,
            &mut upper,
            pool.current_tick_index,
            &pool.growth(),
            liquidity,
            false,
        )?;

        let (amount_x, amount_y, in_range) = get_amounts_for_liquidity(
            &env,
            pool.current_tick_index,
            pool.sqrt_price,
            liquidity,
            position.lower_tick_index,
            position.upper_tick_index,
            false,
        )?;
        if in_range {
            pool.liquidity = pool
                .liquidity
                .checked_sub(liquidity)
                .map_err(|_| MarketError::InsufficientPositionLiquidity)?;
        }

        let (owed_x, owed_y) = position.take_owed();
        let total_x = add_amount(amount_x, owed_x)?;
        let total_y = add_amount(amount_y, owed_y)?;
        pool.reserve_x = sub_amount(pool.reserve_x, total_x)?;
        pool.reserve_y = sub_amount(pool.reserve_y, total_y)?;

        let mut tickmap = storage::read_tickmap(&env, &key)?;
        let tickmap_before = tickmap.clone();
        for tick in [&lower, &upper] {
            if tick.liquidity_gross.is_zero() {
                tickmap.flip(false, tick.index, pool.tick_spacing)?;
                storage::remove_tick(&env, &key, tick.index);
                emit_tick_removed(&env, &key, tick.index);
            } else {
                storage::write_tick(&env, &key, tick);
            }
        }
        if tickmap != tickmap_before {
            storage::write_tickmap(&env, &key, &tickmap);
        }
        storage::write_pool(&env, &key, &pool);

        remove_from_list(&env, &owner, &mut list, index)?;

        let market = env.current_contract_address();
        transfer(&env, &key.token_x, &market, &owner, total_x)?;
        transfer(&env, &key.token_y, &market, &owner, total_y)?;

        emit_position_removed(&env, &owner, removed.id, liquidity, total_x, total_y);
        Ok(removed)
    }

    /// Settle the fees a position has earned and pay them to its owner.
    pub fn claim_fee(
        env: Env,
        owner: Address,
        index: u32,
    ) -> Result<(TokenAmount, TokenAmount), MarketError> {
        owner.require_auth();

        if !storage::read_position_list(&env, &owner).contains(index) {
            return Err(MarketError::PositionNotFound);
        }
        let mut position = storage::read_position(&env, &owner, index)?;

        let key = position.pool_key.clone();
        let mut pool = storage::read_pool(&env, &key)?;
        let lower = storage::read_tick(&env, &key, position.lower_tick_index)?;
        let upper = storage::read_tick(&env, &key, position.upper_tick_index)?;

        let (inside_x, inside_y) = get_fee_growth_inside(
            &lower,
            &upper,
            pool.current_tick_index,
            pool.fee_growth_global_x,
            pool.fee_growth_global_y,
        );
        position.update_fees(&env, inside_x, inside_y)?;

        let (amount_x, amount_y) = position.take_owed();
        pool.reserve_x = sub_amount(pool.reserve_x, amount_x)?;
        pool.reserve_y = sub_amount(pool.reserve_y, amount_y)?;

        storage::write_position(&env, &owner, index, &position);
        storage::write_pool(&env, &key, &pool);

        let market = env.current_contract_address();
        transfer(&env, &key.token_x, &market, &owner, amount_x)?;
        transfer(&env, &key.token_y, &market, &owner, amount_y)?;

        emit_fee_claimed(&env, &owner, position.id, amount_x, amount_y);
        Ok((amount_x, amount_y))
    }

    /// Advance the pool's seconds-per-liquidity accumulator to the current
    /// ledger time and checkpoint the position's range against it.
    pub fn update_position_seconds_per_liquidity(
        env: Env,
        owner: Address,
        index: u32,
    ) -> Result<Position, MarketError> {
        if !storage::read_position_list(&env, &owner).contains(index) {
            return Err(MarketError::PositionNotFound);
        }
        let mut position = storage::read_position(&env, &owner, index)?;

        let key = position.pool_key.clone();
        let mut pool = storage::read_pool(&env, &key)?;
        let lower = storage::read_tick(&env, &key, position.lower_tick_index)?;
        let upper = storage::read_tick(&env, &key, position.upper_tick_index)?;

        let now = env.ledger().timestamp();
        pool.update_seconds_per_liquidity_global(&env, now)?;
        position.update_seconds_per_liquidity(
            &lower,
            &upper,
            pool.current_tick_index,
            pool.seconds_per_liquidity_global,
            now,
        );

        storage::write_pool(&env, &key, &pool);
        storage::write_position(&env, &owner, index, &position);
        Ok(position)
    }

    /// Move a position from `owner`'s list to the end of `recipient`'s.
    pub fn transfer_position_ownership(
        env: Env,
        owner: Address,
        index: u32,
        recipient: Address,
    ) -> Result<(), MarketError> {
        owner.require_auth();

        let mut list = storage::read_position_list(&env, &owner);
        if !list.contains(index) {
            return Err(MarketError::PositionNotFound);
        }
        let mut position = storage::read_position(&env, &owner, index)?;
        remove_from_list(&env, &owner, &mut list, index)?;

        let mut recipient_list = storage::read_position_list(&env, &recipient);
        let new_index = recipient_list.push();
        position.owner = recipient.clone();
        storage::write_position(&env, &recipient, new_index, &position);
        storage::write_position_list(&env, &recipient, &recipient_list);

        emit_position_transferred(&env, &owner, &recipient, position.id);
        Ok(())
    }

    pub fn get_position(env: Env, owner: Address, index: u32) -> Result<Position, MarketError> {
        if !storage::read_position_list(&env, &owner).contains(index) {
            return Err(MarketError::PositionNotFound);
        }
        storage::read_position(&env, &owner, index)
    }

    /// Number of positions `owner` holds; valid indices are `0..head`.
    pub fn get_position_list_head(env: Env, owner: Address) -> u32 {
        storage::read_position_list(&env, &owner).head
    }

    // ========================================================
    // SWAP
    // ========================================================

    /// Swap against the pool.
    ///
    /// The worst acceptable post-swap price is derived from
    /// `params.expected_sqrt_price` and `params.slippage`. With a referral,
    /// its share of the fee is paid to it directly out of the swapper's input.
    pub fn swap(
        env: Env,
        swapper: Address,
        pool_key: PoolKey,
        params: SwapParams,
        referral: Option<Address>,
    ) -> Result<SwapResult, MarketError> {
        swapper.require_auth();

        let state = storage::read_state(&env)?;
        let key = canonical(pool_key)?;
        let mut pool = storage::read_pool(&env, &key)?;
        let tickmap = storage::read_tickmap(&env, &key)?;

        let request = swap_request(&env, &params, &state, referral.is_some())?;
        pool.update_seconds_per_liquidity_global(&env, env.ledger().timestamp())?;
        let mut swap_state = pool.swap_state();
        let result = engine_swap(
            &env,
            &mut swap_state,
            &tickmap,
            &mut PoolTicks { key: &key },
            &request,
        )?;
        pool.apply_swap_state(&swap_state);

        let to_reserve = sub_amount(result.amount_in, result.referral_fee)?;
        let (token_in, token_out) = if params.x_to_y {
            pool.reserve_x = add_amount(pool.reserve_x, to_reserve)?;
            pool.reserve_y = sub_amount(pool.reserve_y, result.amount_out)?;
            pool.fee_protocol_token_x = add_amount(pool.fee_protocol_token_x, result.protocol_fee)?;
            (&key.token_x, &key.token_y)
        } else {
            pool.reserve_y = add_amount(pool.reserve_y, to_reserve)?;
            pool.reserve_x = sub_amount(pool.reserve_x, result.amount_out)?;
            pool.fee_protocol_token_y = add_amount(pool.fee_protocol_token_y, result.protocol_fee)?;
            (&key.token_y, &key.token_x)
        };
        storage::write_pool(&env, &key, &pool);

        let market = env.current_contract_address();
        transfer(&env, token_in, &swapper, &market, to_reserve)?;
        if let Some(referral) = referral {
            if result.referral_fee != 0 {
                transfer(&env, token_in, &swapper, &referral, result.referral_fee)?;
                emit_referral_paid(&env, &referral, token_in, result.referral_fee);
            }
        }
        transfer(&env, token_out, &market, &swapper, result.amount_out)?;

        emit_swap(&env, &swapper, params.x_to_y, &result);
        emit_price_moved(&env, &key, pool.sqrt_price, pool.current_tick_index);
        Ok(result)
    }

    /// Simulate a swap without changing any state.
    pub fn quote(env: Env, pool_key: PoolKey, params: SwapParams) -> Result<SwapResult, MarketError> {
        let state = storage::read_state(&env)?;
        let key = canonical(pool_key)?;
        let mut pool = storage::read_pool(&env, &key)?;
        let tickmap = storage::read_tickmap(&env, &key)?;

        let request = swap_request(&env, &params, &state, false)?;
        pool.update_seconds_per_liquidity_global(&env, env.ledger().timestamp())?;
        let mut swap_state = pool.swap_state();
        engine_swap(
            &env,
            &mut swap_state,
            &tickmap,
            &mut QuoteTicks::new(&env, &key),
            &request,
        )
    }

    // ========================================================
    // PROTOCOL FEES
    // ========================================================

    /// Pay the pool's accumulated protocol fees to the admin.
    pub fn withdraw_protocol_fee(
        env: Env,
        admin: Address,
        pool_key: PoolKey,
    ) -> Result<(TokenAmount, TokenAmount), MarketError> {
        require_admin(&env, &admin)?;

        let key = canonical(pool_key)?;
        let mut pool = storage::read_pool(&env, &key)?;

        let amount_x = pool.fee_protocol_token_x;
        let amount_y = pool.fee_protocol_token_y;
        pool.fee_protocol_token_x = 0;
        pool.fee_protocol_token_y = 0;
        pool.reserve_x = sub_amount(pool.reserve_x, amount_x)?;
        pool.reserve_y = sub_amount(pool.reserve_y, amount_y)?;
        storage::write_pool(&env, &key, &pool);

        let market = env.current_contract_address();
        transfer(&env, &key.token_x, &market, &admin, amount_x)?;
        transfer(&env, &key.token_y, &market, &admin, amount_y)?;

        emit_protocol_fee_withdrawn(&env, &admin, amount_x, amount_y);
        Ok((amount_x, amount_y))
    }
}

// ============================================================
// HELPERS
// ============================================================

fn canonical(pool_key: PoolKey) -> Result<PoolKey, MarketError> {
    PoolKey::new(pool_key.token_x, pool_key.token_y, pool_key.fee_tier)
}

fn require_admin(env: &Env, admin: &Address) -> Result<State, MarketError> {
    admin.require_auth();

    let state = storage::read_state(env)?;
    if state.admin != *admin {
        return Err(MarketError::Unauthorized);
    }
    Ok(state)
}

fn check_protocol_fee(protocol_fee: FixedPoint) -> Result<(), MarketError> {
    if protocol_fee > FixedPoint::one() {
        return Err(MarketError::InvalidProtocolFee);
    }
    Ok(())
}

fn check_tick(index: i32, tick_spacing: u32) -> Result<(), MarketError> {
    if !is_aligned(index, tick_spacing) {
        return Err(MarketError::InvalidTickSpacing);
    }
    if index < get_min_tick(tick_spacing) || index > get_max_tick(tick_spacing) {
        return Err(MarketError::InvalidTick);
    }
    Ok(())
}

/// Pool price must lie in `[known * (1 - slippage), known * (1 + slippage)]`.
fn check_price_tolerance(
    env: &Env,
    sqrt_price: Price,
    known: Price,
    slippage: FixedPoint,
) -> Result<(), MarketError> {
    let low = known.mul_fixed(env, slippage.complement(), false)?;
    let high = known.mul_fixed(env, FixedPoint::one().checked_add(slippage)?, true)?;

    if sqrt_price < low || sqrt_price > high {
        return Err(MarketError::PriceSlippageExceeded);
    }
    Ok(())
}

fn swap_request(
    env: &Env,
    params: &SwapParams,
    state: &State,
    with_referral: bool,
) -> Result<SwapRequest, MarketError> {
    Ok(SwapRequest {
        x_to_y: params.x_to_y,
        amount: params.amount,
        by_amount_in: params.by_amount_in,
        sqrt_price_limit: sqrt_price_limit(
            env,
            params.expected_sqrt_price,
            params.slippage,
            params.x_to_y,
        )?,
        protocol_fee: state.protocol_fee,
        with_referral,
    })
}

/// Fresh tick record with its tickmap bit set. The caller writes both.
fn new_tick(
    env: &Env,
    key: &PoolKey,
    pool: &Pool,
    tickmap: &mut Tickmap,
    index: i32,
) -> Result<Tick, MarketError> {
    let tick = Tick::create(
        index,
        pool.current_tick_index,
        pool.fee_growth_global_x,
        pool.fee_growth_global_y,
        pool.seconds_per_liquidity_global,
    )?;
    tickmap.flip(true, index, pool.tick_spacing)?;

    emit_tick_created(env, key, index);
    Ok(tick)
}

fn load_or_create_tick(
    env: &Env,
    key: &PoolKey,
    pool: &Pool,
    tickmap: &mut Tickmap,
    index: i32,
) -> Result<Tick, MarketError> {
    match storage::read_tick(env, key, index) {
        Ok(tick) => Ok(tick),
        Err(MarketError::TickNotFound) => new_tick(env, key, pool, tickmap, index),
        Err(err) => Err(err),
    }
}

/// Swap-remove `index` from `owner`'s arena: the last entry moves into the
/// freed slot.
fn remove_from_list(
    env: &Env,
    owner: &Address,
    list: &mut PositionList,
    index: u32,
) -> Result<(), MarketError> {
    match list.swap_remove(index)? {
        Some(last) => {
            let moved = storage::read_position(env, owner, last)?;
            storage::write_position(env, owner, index, &moved);
            storage::remove_position(env, owner, last);
        }
        None => storage::remove_position(env, owner, index),
    }
    storage::write_position_list(env, owner, list);
    Ok(())
}

fn add_amount(a: TokenAmount, b: TokenAmount) -> Result<TokenAmount, MarketError> {
    a.checked_add(b).ok_or(MarketError::ArithmeticOverflow)
}

fn sub_amount(a: TokenAmount, b: TokenAmount) -> Result<TokenAmount, MarketError> {
    a.checked_sub(b).ok_or(MarketError::ArithmeticOverflow)
}

/// Token transfer that surfaces a rejection as `TransferFailed` instead of
/// trapping, so the whole call fails with a typed error.
fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: TokenAmount,
) -> Result<(), MarketError> {
    if amount == 0 {
        return Ok(());
    }

    match token::Client::new(env, token).try_transfer(from, to, &i128::from(amount)) {
        Ok(Ok(())) => Ok(()),
        _ => Err(MarketError::TransferFailed),
    }
}
