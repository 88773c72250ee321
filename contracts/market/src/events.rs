// Market events
//
// One event per state-changing operation. Topics carry only the event name;
// everything else goes in the data tuple.

use soroban_sdk::{Address, Env, Symbol};
use tideswap_math::{FeeTier, FixedPoint, Liquidity, PoolKey, Price, TokenAmount};

use crate::types::SwapResult;

/// Topics: ("StateCreated",)
/// Data: (admin, protocol_fee)
pub fn emit_state_created(env: &Env, admin: &Address, protocol_fee: FixedPoint) {
    env.events().publish(
        (Symbol::new(env, "StateCreated"),),
        (admin.clone(), protocol_fee),
    );
}

/// Topics: ("ProtocolFeeChanged",)
/// Data: (old_fee, new_fee)
pub fn emit_protocol_fee_changed(env: &Env, old_fee: FixedPoint, new_fee: FixedPoint) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeeChanged"),),
        (old_fee, new_fee),
    );
}

/// Topics: ("FeeTierCreated",)
/// Data: fee_tier
pub fn emit_fee_tier_created(env: &Env, fee_tier: &FeeTier) {
    env.events()
        .publish((Symbol::new(env, "FeeTierCreated"),), *fee_tier);
}

/// Topics: ("PoolCreated",)
/// Data: (token_x, token_y, fee_tier)
pub fn emit_pool_created(env: &Env, key: &PoolKey) {
    env.events().publish(
        (Symbol::new(env, "PoolCreated"),),
        (key.token_x.clone(), key.token_y.clone(), key.fee_tier),
    );
}

/// Topics: ("TickCreated",)
/// Data: (pool_key, index)
pub fn emit_tick_created(env: &Env, key: &PoolKey, index: i32) {
    env.events()
        .publish((Symbol::new(env, "TickCreated"),), (key.clone(), index));
}

/// Topics: ("TickRemoved",)
/// Data: (pool_key, index)
pub fn emit_tick_removed(env: &Env, key: &PoolKey, index: i32) {
    env.events()
        .publish((Symbol::new(env, "TickRemoved"),), (key.clone(), index));
}

/// Topics: ("PositionCreated",)
/// Data: (owner, id, lower, upper, liquidity, amount_x, amount_y)
pub fn emit_position_created(
    env: &Env,
    owner: &Address,
    id: u64,
    lower_tick: i32,
    upper_tick: i32,
    liquidity: Liquidity,
    amount_x: TokenAmount,
    amount_y: TokenAmount,
) {
    env.events().publish(
        (Symbol::new(env, "PositionCreated"),),
        (owner.clone(), id, lower_tick, upper_tick, liquidity, amount_x, amount_y),
    );
}

/// Topics: ("PositionRemoved",)
/// Data: (owner, id, liquidity, amount_x, amount_y)
pub fn emit_position_removed(
    env: &Env,
    owner: &Address,
    id: u64,
    liquidity: Liquidity,
    amount_x: TokenAmount,
    amount_y: TokenAmount,
) {
    env.events().publish(
        (Symbol::new(env, "PositionRemoved"),),
        (owner.clone(), id, liquidity, amount_x, amount_y),
    );
}

/// Topics: ("FeeClaimed",)
/// Data: (owner, id, amount_x, amount_y)
pub fn emit_fee_claimed(
    env: &Env,
    owner: &Address,
    id: u64,
    amount_x: TokenAmount,
    amount_y: TokenAmount,
) {
    env.events().publish(
        (Symbol::new(env, "FeeClaimed"),),
        (owner.clone(), id, amount_x, amount_y),
    );
}

/// Topics: ("PositionTransferred",)
/// Data: (from, to, id)
pub fn emit_position_transferred(env: &Env, from: &Address, to: &Address, id: u64) {
    env.events().publish(
        (Symbol::new(env, "PositionTransferred"),),
        (from.clone(), to.clone(), id),
    );
}

/// Topics: ("Swap",)
/// Data: (swapper, x_to_y, amount_in, amount_out, fee, start_price, target_price, current_tick)
pub fn emit_swap(env: &Env, swapper: &Address, x_to_y: bool, result: &SwapResult) {
    env.events().publish(
        (Symbol::new(env, "Swap"),),
        (
            swapper.clone(),
            x_to_y,
            result.amount_in,
            result.amount_out,
            result.fee,
            result.start_sqrt_price,
            result.target_sqrt_price,
            result.current_tick,
        ),
    );
}

/// Topics: ("ReferralPaid",)
/// Data: (referral, token, amount)
pub fn emit_referral_paid(env: &Env, referral: &Address, token: &Address, amount: TokenAmount) {
    env.events().publish(
        (Symbol::new(env, "ReferralPaid"),),
        (referral.clone(), token.clone(), amount),
    );
}

/// Topics: ("ProtocolFeeWithdrawn",)
/// Data: (admin, amount_x, amount_y)
pub fn emit_protocol_fee_withdrawn(
    env: &Env,
    admin: &Address,
    amount_x: TokenAmount,
    amount_y: TokenAmount,
) {
    env.events().publish(
        (Symbol::new(env, "ProtocolFeeWithdrawn"),),
        (admin.clone(), amount_x, amount_y),
    );
}

/// Topics: ("PriceMoved",)
/// Data: (pool_key, sqrt_price, current_tick)
pub fn emit_price_moved(env: &Env, key: &PoolKey, sqrt_price: Price, current_tick: i32) {
    env.events().publish(
        (Symbol::new(env, "PriceMoved"),),
        (key.clone(), sqrt_price, current_tick),
    );
}
