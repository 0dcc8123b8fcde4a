//! Simulated engagement counters

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::storage::{Result, StorageAdapter};

/// Storage key of the metrics record
pub const METRICS_KEY: &str = "metrics";

/// Upper bound (exclusive) of a single visitor tick
pub const MAX_VISITOR_STEP: u64 = 3;

/// Site-wide visitor and like counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub visitors: u64,
    pub likes: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            visitors: 12453,
            likes: 8932,
        }
    }
}

/// Load/save access to the metrics record
#[derive(Debug, Clone)]
pub struct MetricsStore {
    storage: StorageAdapter,
}

impl MetricsStore {
    pub fn new(storage: StorageAdapter) -> Self {
        Self { storage }
    }

    /// Stored metrics, or the defaults when none are stored
    pub fn load(&self) -> Result<Metrics> {
        Ok(self.storage.load(METRICS_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, metrics: &Metrics) -> Result<()> {
        self.storage.save(METRICS_KEY, metrics)
    }

    /// Add a random amount in `[0, MAX_VISITOR_STEP)` to the visitor count
    pub fn tick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Metrics> {
        let mut metrics = self.load()?;
        let step = rng.gen_range(0..MAX_VISITOR_STEP);
        metrics.visitors = metrics.visitors.saturating_add(step);
        self.save(&metrics)?;
        tracing::debug!("Visitor tick +{} -> {}", step, metrics.visitors);
        Ok(metrics)
    }

    /// Record one like
    pub fn like(&self) -> Result<Metrics> {
        let mut metrics = self.load()?;
        metrics.likes = metrics.likes.saturating_add(1);
        self.save(&metrics)?;
        tracing::debug!("Like recorded -> {}", metrics.likes);
        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> MetricsStore {
        MetricsStore::new(StorageAdapter::in_memory())
    }

    #[test]
    fn test_defaults_on_empty_store() {
        assert_eq!(
            store().load().unwrap(),
            Metrics {
                visitors: 12453,
                likes: 8932
            }
        );
    }

    #[test]
    fn test_like_adds_exactly_one_and_persists() {
        let store = store();
        let liked = store.like().unwrap();
        assert_eq!(liked.likes, 8933);
        assert_eq!(store.load().unwrap(), liked);
    }

    #[test]
    fn test_n_likes_add_n() {
        let store = store();
        for _ in 0..25 {
            store.like().unwrap();
        }
        let metrics = store.load().unwrap();
        assert_eq!(metrics.likes, 8932 + 25);
        assert_eq!(metrics.visitors, 12453);
    }

    #[test]
    fn test_tick_is_monotonic_and_bounded() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = store.load().unwrap().visitors;

        for _ in 0..200 {
            let current = store.tick(&mut rng).unwrap().visitors;
            assert!(current >= previous);
            assert!(current - previous < MAX_VISITOR_STEP);
            previous = current;
        }
        assert_eq!(store.load().unwrap().visitors, previous);
    }

    #[test]
    fn test_tick_keeps_likes_recorded_in_between() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(7);
        store.tick(&mut rng).unwrap();
        store.like().unwrap();
        let after = store.tick(&mut rng).unwrap();
        assert_eq!(after.likes, 8933);
    }

    #[test]
    fn test_save_then_load() {
        let store = store();
        let metrics = Metrics {
            visitors: 1,
            likes: 2,
        };
        store.save(&metrics).unwrap();
        assert_eq!(store.load().unwrap(), metrics);
    }
}
