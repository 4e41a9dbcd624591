pub mod config;
pub mod error;
pub mod frames;
pub mod render;
pub mod replace;
pub mod sim;
pub mod trace;

pub use error::{Error, Result};
pub use replace::Policy;
pub use sim::{fifo, lru, simulate, SimulationResult, Snapshot, Status};

/// A page reference.
pub type Page = i64;
