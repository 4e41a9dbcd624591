use thiserror::Error;

use crate::Page;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid frame count {0}: expected 1 to {max}", max = crate::sim::MAX_FRAMES)]
    InvalidFrameCount(i64),

    #[error("invalid page reference {token:?} at position {position}")]
    InvalidReference { token: String, position: usize },

    #[error("unrecognized replacement policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    /// The recency order named a page that no frame holds.
    #[error("page {0} is in the recency order but not resident")]
    Desync(Page),

    /// Every frame is full yet no page is tracked as recently used.
    #[error("recency order is empty while all frames are full")]
    EmptyRecency,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("argument error: {0}")]
    Args(#[from] pico_args::Error),
}
