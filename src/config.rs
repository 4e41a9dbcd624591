use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    error::Error,
    replace::Policy,
    sim::MAX_FRAMES,
    trace::{parse_references, random_references, read_trace},
    Page, Result,
};

pub const DEFAULT_RANDOM_PAGES: u32 = 10;

fn default_random_pages() -> u32 {
    DEFAULT_RANDOM_PAGES
}

/// Inline references: either a JSON array or a reference string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum References {
    List(Vec<Page>),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomConfig {
    pub length: usize,
    #[serde(default = "default_random_pages")]
    pub pages: u32,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub frames: i64,
    #[serde(default)]
    pub policies: Vec<String>,
    pub references: Option<References>,
    pub trace: Option<PathBuf>,
    pub random: Option<RandomConfig>,
}

/// A validated run: what to simulate and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub frames: usize,
    pub policies: Vec<Policy>,
    pub references: Vec<Page>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Config> {
        Config::from_json(&fs::read_to_string(path)?)
    }

    pub fn frame_count(&self) -> Result<usize> {
        match usize::try_from(self.frames) {
            Ok(n) if (1..=MAX_FRAMES).contains(&n) => Ok(n),
            _ => Err(Error::InvalidFrameCount(self.frames)),
        }
    }

    /// Requested policies in order, duplicates dropped; all of them when
    /// none are named.
    pub fn policies(&self) -> Result<Vec<Policy>> {
        if self.policies.is_empty() {
            return Ok(Policy::ALL.to_vec());
        }
        let mut policies = Vec::with_capacity(self.policies.len());
        for name in &self.policies {
            let policy: Policy = name.parse()?;
            if !policies.contains(&policy) {
                policies.push(policy);
            }
        }
        Ok(policies)
    }

    pub fn references(&self) -> Result<Vec<Page>> {
        match (&self.references, &self.trace, &self.random) {
            (Some(References::List(refs)), None, None) => Ok(refs.clone()),
            (Some(References::Text(text)), None, None) => parse_references(text),
            (None, Some(path), None) => read_trace(path),
            (None, None, Some(random)) => {
                random_references(random.length, random.pages, random.seed)
            }
            (None, None, None) => Err(Error::Config(
                "no page references given (use references, trace or random)".to_string(),
            )),
            _ => Err(Error::Config(
                "only one of references, trace or random may be given".to_string(),
            )),
        }
    }

    pub fn to_workload(&self) -> Result<Workload> {
        Ok(Workload {
            frames: self.frame_count()?,
            policies: self.policies()?,
            references: self.references()?,
        })
    }
}
