pub mod strategy;
pub use strategy::*;

pub mod ai;
pub use ai::{MemoizedStrategy, MinimaxStrategy, PruningStrategy, StrategyKind};
