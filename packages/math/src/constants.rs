// Protocol constants shared by every TideSwap package.
//
// These values are part of the on-ledger format: changing any of them changes
// tick prices, tickmap layout and stored fixed-point values.

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Largest tick magnitude. Price at MAX_TICK ≈ 4.29e9.
pub const MAX_TICK: i32 = 221_818;

/// Smallest valid tick.
pub const MIN_TICK: i32 = -MAX_TICK;

/// Number of tickmap slots on each side of zero, in units of tick spacing.
pub const TICK_LIMIT: i32 = 44_364;

/// Size of a pool's tickmap in bytes (one bit per slot).
pub const TICKMAP_SIZE: usize = (TICK_LIMIT / 4) as usize;

/// How many spacing units a single swap step may look for an initialized tick.
pub const TICK_SEARCH_RANGE: i32 = 256;

/// Largest tick spacing a fee tier may declare.
pub const MAX_TICK_SPACING: u32 = 100;

// ============================================================
// FIXED-POINT SCALES
// ============================================================

/// Decimal places of a square-root price.
pub const PRICE_SCALE: u8 = 24;

/// Decimal places of liquidity.
pub const LIQUIDITY_SCALE: u8 = 12;

/// Decimal places of fee growth accumulators.
pub const FEE_GROWTH_SCALE: u8 = 24;

/// Decimal places of seconds-per-liquidity accumulators.
pub const SECONDS_PER_LIQUIDITY_SCALE: u8 = 24;

/// Decimal places of fee rates and slippage tolerances.
pub const FIXED_POINT_SCALE: u8 = 12;

// ============================================================
// SQRT PRICE BOUNDS
// ============================================================

/// sqrt price at MIN_TICK.
pub const MIN_SQRT_PRICE: u128 = 15_258_932_000_000_000_000;

/// sqrt price at MAX_TICK.
pub const MAX_SQRT_PRICE: u128 = 65_535_384_161_378_255_000_000_000_000;
