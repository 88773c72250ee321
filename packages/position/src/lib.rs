#![no_std]

pub mod types;
pub mod manager;
pub mod list;

pub use types::{PoolGrowth, Position, PositionList};
