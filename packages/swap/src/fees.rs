// Fee split between protocol, referral and liquidity providers

use tideswap_math::{FixedPoint, MarketError, TokenAmount};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeSplit {
    pub protocol: TokenAmount,
    pub referral: TokenAmount,
    pub pool: TokenAmount,
}

impl FeeSplit {
    /// Protocol share rounds up, referral share rounds down and the pool
    /// keeps the rest, so the three always add up to `fee`.
    ///
    /// The referral share is carved out of the pool's part, not the protocol's.
    pub fn new(
        fee: TokenAmount,
        protocol_fee: FixedPoint,
        with_referral: bool,
    ) -> Result<Self, MarketError> {
        let protocol = protocol_fee.mul_amount_up(fee)?;
        let rest = fee
            .checked_sub(protocol)
            .ok_or(MarketError::InvalidProtocolFee)?;

        let referral = if with_referral {
            protocol_fee.mul_amount(fee)?.min(rest)
        } else {
            0
        };
        let pool = rest - referral;

        Ok(Self {
            protocol,
            referral,
            pool,
        })
    }
}
