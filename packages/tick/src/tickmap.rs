// Tickmap: one bit per spacing-aligned tick
//
// Bit position of tick `t` is `t / spacing + TICK_LIMIT`, so the map covers
// `(-TICK_LIMIT, TICK_LIMIT)` spacing units regardless of the pool's spacing.

use soroban_sdk::{Bytes, Env};
use tideswap_math::{
    get_max_tick, tick_to_sqrt_price, MarketError, Price, MAX_TICK, TICKMAP_SIZE, TICK_LIMIT,
    TICK_SEARCH_RANGE,
};

const BITS: i32 = (TICKMAP_SIZE * 8) as i32;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tickmap {
    bitmap: [u8; TICKMAP_SIZE],
}

impl Default for Tickmap {
    fn default() -> Self {
        Self {
            bitmap: [0; TICKMAP_SIZE],
        }
    }
}

/// Tick the next step may stop at, and whether a record exists there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickLimit {
    pub index: i32,
    pub initialized: bool,
}

impl Tickmap {
    pub fn from_bytes(bytes: &Bytes) -> Self {
        let mut tickmap = Self::default();
        let len = (bytes.len() as usize).min(TICKMAP_SIZE);
        bytes
            .slice(0..len as u32)
            .copy_into_slice(&mut tickmap.bitmap[..len]);
        tickmap
    }

    pub fn to_bytes(&self, env: &Env) -> Bytes {
        Bytes::from_slice(env, &self.bitmap)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bitmap
    }

    pub fn get(&self, tick: i32, tick_spacing: u32) -> bool {
        match position(tick, tick_spacing) {
            Ok(pos) => self.bit(pos),
            Err(_) => false,
        }
    }

    /// Set or clear the bit for `tick`. Setting a set bit or clearing a clear
    /// one means the tick registry and the map disagree.
    pub fn flip(&mut self, value: bool, tick: i32, tick_spacing: u32) -> Result<(), MarketError> {
        let pos = position(tick, tick_spacing)?;
        match (self.bit(pos), value) {
            (true, true) => Err(MarketError::TickAlreadyExists),
            (false, false) => Err(MarketError::TickNotFound),
            _ => {
                self.bitmap[(pos / 8) as usize] ^= 1 << (pos % 8);
                Ok(())
            }
        }
    }

    /// First initialized tick strictly above `tick`, within the search range.
    pub fn next_initialized(&self, tick: i32, tick_spacing: u32) -> Option<i32> {
        let spacing = tick_spacing as i32;
        let limit = get_search_limit(tick, tick_spacing, true) / spacing + TICK_LIMIT;
        let mut pos = (tick.div_euclid(spacing) + 1 + TICK_LIMIT).max(0);

        while pos <= limit {
            // Whole empty bytes are skipped at once
            if pos % 8 == 0 && self.bitmap[(pos / 8) as usize] == 0 {
                pos += 8;
                continue;
            }
            if self.bit(pos) {
                return Some((pos - TICK_LIMIT) * spacing);
            }
            pos += 1;
        }
        None
    }

    /// First initialized tick at or below `tick`, within the search range.
    pub fn prev_initialized(&self, tick: i32, tick_spacing: u32) -> Option<i32> {
        let spacing = tick_spacing as i32;
        let limit = get_search_limit(tick, tick_spacing, false) / spacing + TICK_LIMIT;
        let mut pos = (tick.div_euclid(spacing) + TICK_LIMIT).min(BITS - 1);

        while pos >= limit {
            if pos % 8 == 7 && self.bitmap[(pos / 8) as usize] == 0 {
                pos -= 8;
                continue;
            }
            if self.bit(pos) {
                return Some((pos - TICK_LIMIT) * spacing);
            }
            pos -= 1;
        }
        None
    }

    /// Target of the next swap step: the nearer of the next tick boundary in
    /// the swap direction and the caller's price limit.
    ///
    /// Returns the target price and, when the boundary is nearer, the tick to
    /// stop at. Fails with `InsufficientLiquidity` once the range is exhausted.
    pub fn get_closer_limit(
        &self,
        sqrt_price_limit: Price,
        x_to_y: bool,
        current_tick: i32,
        tick_spacing: u32,
    ) -> Result<(Price, Option<TickLimit>), MarketError> {
        let closest = if x_to_y {
            self.prev_initialized(current_tick, tick_spacing)
        } else {
            self.next_initialized(current_tick, tick_spacing)
        };

        let limit = match closest {
            Some(index) => TickLimit { index, initialized: true },
            None => {
                let index = get_search_limit(current_tick, tick_spacing, !x_to_y);
                let no_progress = if x_to_y { index >= current_tick } else { index <= current_tick };
                if no_progress {
                    return Err(MarketError::InsufficientLiquidity);
                }
                TickLimit { index, initialized: false }
            }
        };

        let tick_price = tick_to_sqrt_price(limit.index)?;
        let tick_is_closer = if x_to_y {
            tick_price > sqrt_price_limit
        } else {
            tick_price < sqrt_price_limit
        };

        if tick_is_closer {
            Ok((tick_price, Some(limit)))
        } else {
            Ok((sqrt_price_limit, None))
        }
    }

    fn bit(&self, pos: i32) -> bool {
        self.bitmap[(pos / 8) as usize] & (1 << (pos % 8)) != 0
    }
}

/// Furthest tick a single step may look at from `tick`, clamped to the
/// representable range.
pub fn get_search_limit(tick: i32, tick_spacing: u32, up: bool) -> i32 {
    let spacing = tick_spacing as i32;
    let index = tick / spacing;
    let bound = get_max_tick(tick_spacing) / spacing;

    let limit = if up {
        (index + TICK_SEARCH_RANGE).min(bound)
    } else {
        (index - TICK_SEARCH_RANGE).max(-bound)
    };
    limit * spacing
}

fn position(tick: i32, tick_spacing: u32) -> Result<i32, MarketError> {
    let spacing = tick_spacing as i32;
    if tick_spacing == 0 || tick % spacing != 0 {
        return Err(MarketError::InvalidTickSpacing);
    }
    if tick.abs() > MAX_TICK || (tick / spacing).abs() >= TICK_LIMIT {
        return Err(MarketError::InvalidTick);
    }
    Ok(tick / spacing + TICK_LIMIT)
}
