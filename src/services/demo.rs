use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Season;

struct DemoInner {
    previous: Option<Season>,
    rng: StdRng,
}

/// Shared state of the demo strategy: the last season handed out.
///
/// Each call to [`DemoState::next`] picks uniformly among the seasons other
/// than the previous one, so two consecutive results never repeat. The whole
/// read-pick-write happens under one lock.
pub struct DemoState {
    inner: Mutex<DemoInner>,
}

impl DemoState {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence, for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            inner: Mutex::new(DemoInner {
                previous: None,
                rng,
            }),
        }
    }

    pub fn next(&self) -> Season {
        // A poisoned lock means a panic mid-update; there is nothing to recover.
        let mut guard = self.inner.lock().expect("demo state lock poisoned");
        let DemoInner { previous, rng } = &mut *guard;

        let eligible: Vec<Season> = Season::ALL
            .into_iter()
            .filter(|s| Some(*s) != *previous)
            .collect();
        let season = eligible[rng.gen_range(0..eligible.len())];
        *previous = Some(season);
        season
    }

    pub fn previous(&self) -> Option<Season> {
        self.inner.lock().expect("demo state lock poisoned").previous
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DemoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoState")
            .field("previous", &self.previous())
            .finish_non_exhaustive()
    }
}
