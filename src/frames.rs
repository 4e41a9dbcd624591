use std::{collections::HashMap, iter, num::NonZeroUsize};

use serde::Serialize;

use crate::Page;

/// Live frame state of one simulation run.
///
/// `index` maps every resident page to the slot holding it and is updated
/// together with `slots`, so membership checks do not scan the frames.
#[derive(Debug, Clone)]
pub struct Frames {
    slots: Vec<Option<Page>>,
    index: HashMap<Page, usize>,
}

impl Frames {
    pub fn new(n_frames: NonZeroUsize) -> Self {
        let n_frames = n_frames.get();
        Frames {
            slots: iter::repeat(None).take(n_frames).collect(),
            index: HashMap::with_capacity(n_frames),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn contains(&self, page: Page) -> bool {
        self.index.contains_key(&page)
    }

    pub fn slot_of(&self, page: Page) -> Option<usize> {
        self.index.get(&page).copied()
    }

    /// Lowest-numbered empty slot, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.index.len() == self.slots.len()
    }

    /// Writes `page` into `slot` and returns the page it displaced.
    pub fn place(&mut self, slot: usize, page: Page) -> Option<Page> {
        let evicted = self.slots[slot].replace(page);
        if let Some(old) = evicted {
            self.index.remove(&old);
        }
        self.index.insert(page, slot);
        evicted
    }

    pub fn snapshot(&self) -> Vec<Option<Page>> {
        self.slots.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    pub references: usize,
    pub hits: usize,
    pub misses: usize,
    pub hit_rate: f64,
    pub miss_rate: f64,
}

impl RunStats {
    pub fn new(hits: usize, misses: usize) -> Self {
        let references = hits + misses;
        let (hit_rate, miss_rate) = if references == 0 {
            (0.0, 0.0)
        } else {
            let total = references as f64;
            (hits as f64 / total, misses as f64 / total)
        };
        RunStats {
            references,
            hits,
            misses,
            hit_rate,
            miss_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(n: usize) -> Frames {
        Frames::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn starts_empty() {
        let f = frames(3);
        assert_eq!(f.len(), 3);
        assert_eq!(f.snapshot(), vec![None, None, None]);
        assert_eq!(f.first_empty(), Some(0));
        assert!(!f.is_full());
    }

    #[test]
    fn place_tracks_index_and_reports_eviction() {
        let mut f = frames(2);
        assert_eq!(f.place(0, 7), None);
        assert_eq!(f.place(1, 9), None);
        assert!(f.is_full());
        assert_eq!(f.first_empty(), None);

        assert_eq!(f.place(0, 4), Some(7));
        assert!(!f.contains(7));
        assert_eq!(f.slot_of(4), Some(0));
        assert_eq!(f.slot_of(9), Some(1));
        assert_eq!(f.snapshot(), vec![Some(4), Some(9)]);
    }

    #[test]
    fn first_empty_is_lowest_slot() {
        let mut f = frames(3);
        f.place(1, 5);
        assert_eq!(f.first_empty(), Some(0));
        f.place(0, 6);
        assert_eq!(f.first_empty(), Some(2));
    }

    #[test]
    fn stats_rates() {
        let stats = RunStats::new(1, 3);
        assert_eq!(stats.references, 4);
        assert_eq!(stats.hit_rate, 0.25);
        assert_eq!(stats.miss_rate, 0.75);

        let empty = RunStats::new(0, 0);
        assert_eq!(empty.hit_rate, 0.0);
        assert_eq!(empty.miss_rate, 0.0);
    }
}
