use soroban_sdk::contracttype;
use tideswap_math::{Price, TokenAmount};

/// Totals of an executed or quoted swap. Fees are in the input token.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwapResult {
    /// Everything taken from the swapper, fees included
    pub amount_in: TokenAmount,
    pub amount_out: TokenAmount,
    pub fee: TokenAmount,
    pub protocol_fee: TokenAmount,
    pub referral_fee: TokenAmount,
    pub start_sqrt_price: Price,
    pub target_sqrt_price: Price,
    pub current_tick: i32,
    pub ticks_crossed: u32,
}
