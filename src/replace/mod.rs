pub mod fifo;
pub mod lru;

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{error::Error, frames::Frames, Page, Result};

pub trait MakeR {
    fn new(n_frames: usize) -> Self;
}

pub trait Replace: MakeR {
    /// Processes one reference, updating `frames` in place.
    fn access(&mut self, frames: &mut Frames, page: Page) -> Result<AccessResult>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessResult {
    Hit,
    Miss { evicted: Option<Page> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Policy {
    Fifo,
    Lru,
}

impl Policy {
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Lru];
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => f.write_str("FIFO"),
            Policy::Lru => f.write_str("LRU"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_policy_names() {
        assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("LRU".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!(" Lru ".parse::<Policy>().unwrap(), Policy::Lru);
        assert!(matches!(
            "optimal".parse::<Policy>(),
            Err(Error::UnknownPolicy(name)) if name == "optimal"
        ));
    }

    #[test]
    fn displays_upper_case() {
        assert_eq!(Policy::Fifo.to_string(), "FIFO");
        assert_eq!(Policy::Lru.to_string(), "LRU");
        assert_eq!(serde_json::to_string(&Policy::Lru).unwrap(), "\"LRU\"");
    }
}
