// Market storage
//
// State lives in instance storage; every other record is a persistent entry
// whose TTL is extended on each write and on reads that find it.

use soroban_sdk::{contracttype, Address, Env, Map};
use tideswap_math::{FeeTier, MarketError, PoolKey};
use tideswap_tick::{Tick, TickStore, Tickmap};

use crate::types::{Pool, Position, PositionList, State};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin and protocol fee
    State,
    /// Registered fee tier marker
    FeeTier(FeeTier),
    Pool(PoolKey),
    /// Tick record by (pool, index)
    Tick(PoolKey, i32),
    /// Raw tickmap bytes of a pool
    Tickmap(PoolKey),
    /// Arena header of an owner's positions
    PositionList(Address),
    /// Arena entry by (owner, index)
    Position(Address, u32),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Entries are bumped to this many ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// Bump once the remaining TTL falls below this
const PERSISTENT_THRESHOLD: u32 = PERSISTENT_LIFETIME - 120_960;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(PERSISTENT_THRESHOLD, PERSISTENT_LIFETIME);
}

fn read_persistent<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        extend_ttl(env, key);
    }
    value
}

fn write_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

// ============================================================
// STATE
// ============================================================

pub fn has_state(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::State)
}

pub fn read_state(env: &Env) -> Result<State, MarketError> {
    let state = env
        .storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(MarketError::StateNotFound)?;
    extend_instance_ttl(env);
    Ok(state)
}

pub fn write_state(env: &Env, state: &State) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn fee_tier_exists(env: &Env, fee_tier: &FeeTier) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::FeeTier(*fee_tier))
}

pub fn write_fee_tier(env: &Env, fee_tier: &FeeTier) {
    write_persistent(env, &DataKey::FeeTier(*fee_tier), &true);
}

// ============================================================
// POOLS
// ============================================================

pub fn has_pool(env: &Env, key: &PoolKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(key.clone()))
}

pub fn read_pool(env: &Env, key: &PoolKey) -> Result<Pool, MarketError> {
    read_persistent(env, &DataKey::Pool(key.clone())).ok_or(MarketError::PoolNotFound)
}

pub fn write_pool(env: &Env, key: &PoolKey, pool: &Pool) {
    write_persistent(env, &DataKey::Pool(key.clone()), pool);
}

pub fn read_tickmap(env: &Env, key: &PoolKey) -> Result<Tickmap, MarketError> {
    let bytes: soroban_sdk::Bytes =
        read_persistent(env, &DataKey::Tickmap(key.clone())).ok_or(MarketError::PoolNotFound)?;
    Ok(Tickmap::from_bytes(&bytes))
}

pub fn write_tickmap(env: &Env, key: &PoolKey, tickmap: &Tickmap) {
    write_persistent(env, &DataKey::Tickmap(key.clone()), &tickmap.to_bytes(env));
}

// ============================================================
// TICKS
// ============================================================

pub fn has_tick(env: &Env, key: &PoolKey, index: i32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Tick(key.clone(), index))
}

pub fn read_tick(env: &Env, key: &PoolKey, index: i32) -> Result<Tick, MarketError> {
    read_persistent(env, &DataKey::Tick(key.clone(), index)).ok_or(MarketError::TickNotFound)
}

pub fn write_tick(env: &Env, key: &PoolKey, tick: &Tick) {
    write_persistent(env, &DataKey::Tick(key.clone(), tick.index), tick);
}

pub fn remove_tick(env: &Env, key: &PoolKey, index: i32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Tick(key.clone(), index));
}

/// Tick records of one pool in persistent storage.
pub struct PoolTicks<'a> {
    pub key: &'a PoolKey,
}

impl TickStore for PoolTicks<'_> {
    fn read_tick(&self, env: &Env, index: i32) -> Option<Tick> {
        read_tick(env, self.key, index).ok()
    }

    fn write_tick(&mut self, env: &Env, tick: &Tick) {
        write_tick(env, self.key, tick);
    }
}

/// Reads through to storage but keeps writes in memory, so a quote can run
/// the swap engine without touching the ledger.
pub struct QuoteTicks<'a> {
    pub key: &'a PoolKey,
    pub overlay: Map<i32, Tick>,
}

impl<'a> QuoteTicks<'a> {
    pub fn new(env: &Env, key: &'a PoolKey) -> Self {
        Self {
            key,
            overlay: Map::new(env),
        }
    }
}

impl TickStore for QuoteTicks<'_> {
    fn read_tick(&self, env: &Env, index: i32) -> Option<Tick> {
        self.overlay
            .get(index)
            .or_else(|| env.storage().persistent().get(&DataKey::Tick(self.key.clone(), index)))
    }

    fn write_tick(&mut self, _env: &Env, tick: &Tick) {
        self.overlay.set(tick.index, tick.clone());
    }
}

// ============================================================
// POSITIONS
// ============================================================

pub fn has_position_list(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::PositionList(owner.clone()))
}

pub fn read_position_list(env: &Env, owner: &Address) -> PositionList {
    read_persistent(env, &DataKey::PositionList(owner.clone())).unwrap_or_default()
}

pub fn write_position_list(env: &Env, owner: &Address, list: &PositionList) {
    write_persistent(env, &DataKey::PositionList(owner.clone()), list);
}

pub fn read_position(env: &Env, owner: &Address, index: u32) -> Result<Position, MarketError> {
    read_persistent(env, &DataKey::Position(owner.clone(), index))
        .ok_or(MarketError::PositionNotFound)
}

pub fn write_position(env: &Env, owner: &Address, index: u32, position: &Position) {
    write_persistent(env, &DataKey::Position(owner.clone(), index), position);
}

pub fn remove_position(env: &Env, owner: &Address, index: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::Position(owner.clone(), index));
}
