//! Simulation driver and the result structure handed to renderers.
//!
//! [`fifo`] and [`lru`] share one signature so a caller can pick either at
//! runtime, or go through [`simulate`] with a [`Policy`].

use std::{fmt, num::NonZeroUsize};

use serde::Serialize;
use tracing::info;

use crate::{
    error::Error,
    frames::{Frames, RunStats},
    replace::{fifo::Fifo, lru::Lru, AccessResult, Policy, Replace},
    Page, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Hit,
    Miss,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Hit => f.write_str("Hit"),
            Status::Miss => f.write_str("Miss"),
        }
    }
}

/// Frame contents right after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub frames: Vec<Option<Page>>,
    pub status: Status,
    pub current_page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<Page>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub result: Vec<Snapshot>,
    pub page_faults: usize,
}

impl SimulationResult {
    pub fn hits(&self) -> usize {
        self.result.len() - self.page_faults
    }

    pub fn stats(&self) -> RunStats {
        RunStats::new(self.hits(), self.page_faults)
    }
}

/// One entry of the machine-readable report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub policy: Policy,
    pub stats: RunStats,
    pub run: SimulationResult,
}

impl Report {
    pub fn new(policy: Policy, run: SimulationResult) -> Self {
        Report {
            policy,
            stats: run.stats(),
            run,
        }
    }
}

/// Largest frame count a run accepts. Frames are allocated up front.
pub const MAX_FRAMES: usize = 4096;

fn check_frames(n: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(n)
        .filter(|n| n.get() <= MAX_FRAMES)
        .ok_or_else(|| Error::InvalidFrameCount(i64::try_from(n).unwrap_or(i64::MAX)))
}

fn run<R: Replace>(refs: &[Page], n_frames: NonZeroUsize) -> Result<SimulationResult> {
    let mut frames = Frames::new(n_frames);
    let mut repl = R::new(n_frames.get());
    let mut result = Vec::with_capacity(refs.len());
    let mut page_faults = 0;

    for &page in refs {
        let (status, evicted) = match repl.access(&mut frames, page)? {
            AccessResult::Hit => (Status::Hit, None),
            AccessResult::Miss { evicted } => {
                page_faults += 1;
                (Status::Miss, evicted)
            }
        };
        result.push(Snapshot {
            frames: frames.snapshot(),
            status,
            current_page: page,
            evicted,
        });
    }

    Ok(SimulationResult {
        result,
        page_faults,
    })
}

/// Runs FIFO replacement over `refs` with `frame_count` frames.
pub fn fifo(refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    run::<Fifo>(refs, check_frames(frame_count)?)
}

/// Runs LRU replacement over `refs` with `frame_count` frames.
pub fn lru(refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    run::<Lru>(refs, check_frames(frame_count)?)
}

pub fn simulate(policy: Policy, refs: &[Page], frame_count: usize) -> Result<SimulationResult> {
    let outcome = match policy {
        Policy::Fifo => fifo(refs, frame_count)?,
        Policy::Lru => lru(refs, frame_count)?,
    };
    info!(
        %policy,
        frames = frame_count,
        references = refs.len(),
        page_faults = outcome.page_faults,
        "simulation finished"
    );
    Ok(outcome)
}
