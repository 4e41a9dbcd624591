use std::collections::VecDeque;

use tracing::debug;

use crate::{error::Error, frames::Frames, Page, Result};

use super::{AccessResult, MakeR, Replace};

/// Least-recently-used replacement.
#[derive(Debug)]
pub struct Lru {
    // Resident pages, least recently used at the front.
    ru_order: VecDeque<Page>,
}

impl MakeR for Lru {
    fn new(n_frames: usize) -> Self {
        Lru {
            ru_order: VecDeque::with_capacity(n_frames),
        }
    }
}

impl Lru {
    fn touch(&mut self, page: Page) {
        if let Some(idx) = self.ru_order.iter().position(|&p| p == page) {
            self.ru_order.remove(idx);
        }
        self.ru_order.push_back(page);
    }
}

impl Replace for Lru {
    fn access(&mut self, frames: &mut Frames, page: Page) -> Result<AccessResult> {
        let result = if frames.contains(page) {
            AccessResult::Hit
        } else if let Some(slot) = frames.first_empty() {
            frames.place(slot, page);
            AccessResult::Miss { evicted: None }
        } else {
            // Frames are full, so the recency order holds every resident page
            let victim = self.ru_order.pop_front().ok_or(Error::EmptyRecency)?;
            let slot = frames.slot_of(victim).ok_or(Error::Desync(victim))?;
            debug!(page, victim, slot, "lru eviction");
            frames.place(slot, page);
            AccessResult::Miss {
                evicted: Some(victim),
            }
        };
        self.touch(page);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;

    #[test]
    fn hit_refreshes_recency() {
        let mut frames = Frames::new(NonZeroUsize::new(2).unwrap());
        let mut lru = Lru::new(2);

        lru.access(&mut frames, 1).unwrap();
        lru.access(&mut frames, 2).unwrap();
        assert_eq!(lru.access(&mut frames, 1).unwrap(), AccessResult::Hit);
        assert_eq!(lru.ru_order, VecDeque::from([2, 1]));

        assert_eq!(
            lru.access(&mut frames, 3).unwrap(),
            AccessResult::Miss { evicted: Some(2) }
        );
        // The new page takes the victim's slot.
        assert_eq!(frames.snapshot(), vec![Some(1), Some(3)]);
        assert_eq!(lru.ru_order, VecDeque::from([1, 3]));
    }

    #[test]
    fn fills_lowest_empty_slot_first() {
        let mut frames = Frames::new(NonZeroUsize::new(3).unwrap());
        let mut lru = Lru::new(3);
        for page in [5, 6] {
            lru.access(&mut frames, page).unwrap();
        }
        assert_eq!(frames.snapshot(), vec![Some(5), Some(6), None]);
    }

    #[test]
    fn empty_recency_with_full_frames_is_an_error() {
        let mut frames = Frames::new(NonZeroUsize::new(1).unwrap());
        frames.place(0, 4);
        let mut lru = Lru::new(1);
        assert!(matches!(
            lru.access(&mut frames, 5),
            Err(Error::EmptyRecency)
        ));
    }

    #[test]
    fn recency_naming_absent_page_is_an_error() {
        let mut frames = Frames::new(NonZeroUsize::new(1).unwrap());
        frames.place(0, 4);
        let mut lru = Lru::new(1);
        lru.ru_order.push_back(9);
        assert!(matches!(lru.access(&mut frames, 5), Err(Error::Desync(9))));
    }
}
