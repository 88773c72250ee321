#![no_std]

pub mod types;
pub mod update;
pub mod fee_growth;
pub mod tickmap;

pub use types::Tick;
pub use update::{cross_fee_growth, TickStore};
pub use fee_growth::{get_fee_growth_inside, get_seconds_per_liquidity_inside};
pub use tickmap::{get_search_limit, TickLimit, Tickmap};
