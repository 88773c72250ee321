#![no_std]

pub mod types;
pub mod fees;
pub mod engine;

pub use types::SwapResult;
pub use fees::FeeSplit;
pub use engine::{engine_swap, sqrt_price_limit, SwapRequest, SwapState};
