use tracing::debug;

use crate::{frames::Frames, Page, Result};

use super::{AccessResult, MakeR, Replace};

/// First-in-first-out replacement.
///
/// Slots are overwritten in cyclic order, so the victim is always the page
/// written longest ago no matter how recently it was referenced.
#[derive(Debug)]
pub struct Fifo {
    pointer: usize,
}

impl MakeR for Fifo {
    fn new(_n_frames: usize) -> Self {
        Fifo { pointer: 0 }
    }
}

impl Replace for Fifo {
    fn access(&mut self, frames: &mut Frames, page: Page) -> Result<AccessResult> {
        if frames.contains(page) {
            return Ok(AccessResult::Hit);
        }

        let evicted = frames.place(self.pointer, page);
        if let Some(victim) = evicted {
            debug!(page, victim, slot = self.pointer, "fifo eviction");
        }
        self.pointer = (self.pointer + 1) % frames.len();
        Ok(AccessResult::Miss { evicted })
    }
}
