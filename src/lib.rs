pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;

pub use agent::ai::{Score, ScoreMap, SearchStats};
pub use agent::Strategy;
pub use config::SolverConfig;
pub use error::{ErrorKind, SearchError, SearchResult};
