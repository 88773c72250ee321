// SPDX-License-Identifier: MIT
// Scaled-integer decimal types
//
// Every type stores `value * 10^SCALE` in a u128. Products across types go
// through `full_math` and round exactly once, in the direction named by the
// helper.

use soroban_sdk::{contracttype, Env, U256};

use crate::constants::{
    FEE_GROWTH_SCALE, FIXED_POINT_SCALE, LIQUIDITY_SCALE, PRICE_SCALE, SECONDS_PER_LIQUIDITY_SCALE,
};
use crate::error::MarketError;
use crate::full_math::{div_round_up, div_u256, mul_div, mul_div_up, to_u128, u256};

/// Token amounts are plain integers in the token's smallest unit.
pub type TokenAmount = u64;

macro_rules! decimal {
    ($(#[$doc:meta])* $name:ident, $scale:expr) => {
        $(#[$doc])*
        #[contracttype]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name {
            pub v: u128,
        }

        impl $name {
            pub const SCALE: u8 = $scale;
            pub const ONE: u128 = 10u128.pow($scale as u32);

            pub const fn new(v: u128) -> Self {
                Self { v }
            }

            pub const fn from_integer(integer: u128) -> Self {
                Self { v: integer * Self::ONE }
            }

            /// `value * 10^-scale`, for `scale <= SCALE`.
            pub const fn from_scale(value: u128, scale: u8) -> Self {
                Self { v: value * 10u128.pow((Self::SCALE - scale) as u32) }
            }

            pub const fn zero() -> Self {
                Self { v: 0 }
            }

            pub const fn one() -> Self {
                Self { v: Self::ONE }
            }

            pub fn is_zero(&self) -> bool {
                self.v == 0
            }

            pub fn checked_add(self, rhs: Self) -> Result<Self, MarketError> {
                self.v
                    .checked_add(rhs.v)
                    .map(Self::new)
                    .ok_or(MarketError::ArithmeticOverflow)
            }

            pub fn checked_sub(self, rhs: Self) -> Result<Self, MarketError> {
                self.v
                    .checked_sub(rhs.v)
                    .map(Self::new)
                    .ok_or(MarketError::ArithmeticOverflow)
            }
        }
    };
}

decimal!(
    /// Square root of the pool price (token Y per token X).
    Price,
    PRICE_SCALE
);
decimal!(
    /// Virtual liquidity `L = sqrt(x * y)`.
    Liquidity,
    LIQUIDITY_SCALE
);
decimal!(
    /// Fee collected per unit of liquidity. Accumulators wrap.
    FeeGrowth,
    FEE_GROWTH_SCALE
);
decimal!(
    /// Ledger seconds elapsed per unit of in-range liquidity. Accumulators wrap.
    SecondsPerLiquidity,
    SECONDS_PER_LIQUIDITY_SCALE
);
decimal!(
    /// Rates in [0, 1]: swap fees, protocol fee, slippage.
    FixedPoint,
    FIXED_POINT_SCALE
);

// ============================================================
// FIXED POINT
// ============================================================

impl FixedPoint {
    /// `1 - self`, saturating at zero.
    pub fn complement(self) -> Self {
        Self::new(Self::ONE.saturating_sub(self.v))
    }

    /// `amount * self`, rounded down.
    pub fn mul_amount(self, amount: TokenAmount) -> Result<TokenAmount, MarketError> {
        let product = (amount as u128)
            .checked_mul(self.v)
            .ok_or(MarketError::ArithmeticOverflow)?;
        TokenAmount::try_from(product / Self::ONE).map_err(|_| MarketError::ArithmeticOverflow)
    }

    /// `amount * self`, rounded up.
    pub fn mul_amount_up(self, amount: TokenAmount) -> Result<TokenAmount, MarketError> {
        let product = (amount as u128)
            .checked_mul(self.v)
            .ok_or(MarketError::ArithmeticOverflow)?;
        let rounded = div_round_up(product, Self::ONE)?;
        TokenAmount::try_from(rounded).map_err(|_| MarketError::ArithmeticOverflow)
    }
}

// ============================================================
// PRICE
// ============================================================

impl Price {
    /// `self * rate`, staying at price scale.
    pub fn mul_fixed(self, env: &Env, rate: FixedPoint, round_up: bool) -> Result<Self, MarketError> {
        let v = if round_up {
            mul_div_up(env, self.v, rate.v, FixedPoint::ONE)?
        } else {
            mul_div(env, self.v, rate.v, FixedPoint::ONE)?
        };
        Ok(Self::new(v))
    }
}

// ============================================================
// FEE GROWTH
// ============================================================

impl FeeGrowth {
    /// Fee growth produced by distributing `fee` over `liquidity`, rounded up.
    pub fn from_fee(env: &Env, liquidity: Liquidity, fee: TokenAmount) -> Result<Self, MarketError> {
        let numerator = u256(env, fee as u128)
            .mul(&u256(env, Self::ONE))
            .mul(&u256(env, Liquidity::ONE));
        let growth = div_u256(env, &numerator, &u256(env, liquidity.v), true)?;
        Ok(Self::new(to_u128(&growth)?))
    }

    /// Tokens owed to `liquidity` for this much growth, rounded down.
    pub fn to_fee(self, env: &Env, liquidity: Liquidity) -> Result<TokenAmount, MarketError> {
        let fee = mul_div(env, self.v, liquidity.v, Self::ONE * Liquidity::ONE)?;
        TokenAmount::try_from(fee).map_err(|_| MarketError::ArithmeticOverflow)
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::new(self.v.wrapping_add(rhs.v))
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::new(self.v.wrapping_sub(rhs.v))
    }
}

// ============================================================
// SECONDS PER LIQUIDITY
// ============================================================

impl SecondsPerLiquidity {
    /// `elapsed / liquidity`, rounded down and reduced modulo 2^128 so the
    /// accumulator keeps wrapping instead of failing on tiny liquidity.
    pub fn from_elapsed(env: &Env, elapsed: u64, liquidity: Liquidity) -> Result<Self, MarketError> {
        let numerator = u256(env, elapsed as u128)
            .mul(&u256(env, Self::ONE))
            .mul(&u256(env, Liquidity::ONE));
        let quotient = div_u256(env, &numerator, &u256(env, liquidity.v), false)?;
        let low = quotient.rem_euclid(&U256::from_parts(env, 0, 1, 0, 0));
        Ok(Self::new(to_u128(&low)?))
    }

    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::new(self.v.wrapping_add(rhs.v))
    }

    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::new(self.v.wrapping_sub(rhs.v))
    }
}
