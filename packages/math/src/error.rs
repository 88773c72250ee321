// Error codes shared by the math, tick, position and swap packages and
// returned unchanged from the market contract.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MarketError {
    // Registry errors (100-199)
    /// State singleton was already created
    StateAlreadyExists = 100,
    /// State singleton has not been created
    StateNotFound = 101,
    /// Caller is not the admin
    Unauthorized = 102,
    /// Protocol fee must lie in [0, 1]
    InvalidProtocolFee = 103,
    /// Fee tier already registered
    FeeTierAlreadyExists = 110,
    /// Fee tier is not registered
    FeeTierNotFound = 111,
    /// Fee must lie in (0, 1) and spacing in [1, MAX_TICK_SPACING]
    InvalidFeeTier = 112,

    // Pool errors (200-299)
    /// Pool already exists for this pair and fee tier
    PoolAlreadyExists = 200,
    /// No pool for this pair and fee tier
    PoolNotFound = 201,
    /// Both tokens of a pair are the same asset
    InvalidTokenPair = 202,

    // Tick errors (300-399)
    /// Tick outside the representable range
    InvalidTick = 300,
    /// Tick is not a multiple of the pool's spacing
    InvalidTickSpacing = 301,
    /// Lower tick must be strictly below upper tick
    InvalidTickRange = 302,
    /// Tick record already exists
    TickAlreadyExists = 303,
    /// Tick record does not exist
    TickNotFound = 304,

    // Position errors (400-499)
    /// Owner already has a position list
    PositionListAlreadyExists = 400,
    /// No position at this index
    PositionNotFound = 401,
    /// Liquidity delta must be non-zero
    ZeroLiquidity = 402,
    /// Removing more liquidity than the position or tick holds
    InsufficientPositionLiquidity = 403,

    // Swap errors (500-599)
    /// Price limit reached or pool price outside the caller's tolerance
    PriceSlippageExceeded = 500,
    /// No initialized liquidity left in the swap direction
    InsufficientLiquidity = 501,
    /// Swap amount must be non-zero
    ZeroAmount = 502,
    /// Swap would produce no output
    NoGainSwap = 503,

    // Settlement errors (600-699)
    /// Token transfer rejected by the token contract
    TransferFailed = 600,

    // Math errors (700-799)
    /// Result does not fit its type
    ArithmeticOverflow = 700,
    /// Division by zero
    DivisionByZero = 701,
}
