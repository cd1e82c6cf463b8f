//! Resolution counters

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::extractor::Strategy;

/// Metrics handle shared by every resolution
#[derive(Debug, Default)]
pub struct Metrics {
    resolutions_succeeded: AtomicU64,
    resolutions_failed: AtomicU64,
    keys_not_found: AtomicU64,
    keys_by_strategy: [AtomicU64; Strategy::PRIORITY.len()],
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolution_succeeded(&self) {
        self.resolutions_succeeded.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "resolutions_succeeded", "Metric incremented");
    }

    pub fn resolution_failed(&self) {
        self.resolutions_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "resolutions_failed", "Metric incremented");
    }

    pub fn key_found(&self, strategy: Strategy) {
        self.keys_by_strategy[strategy.index()].fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "keys_found", %strategy, "Metric incremented");
    }

    pub fn key_not_found(&self) {
        self.keys_not_found.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "keys_not_found", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let keys_by_strategy = Strategy::PRIORITY
            .iter()
            .map(|strategy| {
                (
                    strategy.as_str(),
                    self.keys_by_strategy[strategy.index()].load(Ordering::Relaxed),
                )
            })
            .collect();

        MetricsSnapshot {
            resolutions_succeeded: self.resolutions_succeeded.load(Ordering::Relaxed),
            resolutions_failed: self.resolutions_failed.load(Ordering::Relaxed),
            keys_not_found: self.keys_not_found.load(Ordering::Relaxed),
            keys_by_strategy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub resolutions_succeeded: u64,
    pub resolutions_failed: u64,
    pub keys_not_found: u64,
    pub keys_by_strategy: BTreeMap<&'static str, u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_counts() {
        let metrics = Metrics::new();
        metrics.key_found(Strategy::CommentMarker);
        metrics.key_found(Strategy::CommentMarker);
        metrics.key_found(Strategy::InlineScript);
        metrics.key_not_found();
        metrics.resolution_succeeded();
        metrics.resolution_failed();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.resolutions_succeeded, 1);
        assert_eq!(snapshot.resolutions_failed, 1);
        assert_eq!(snapshot.keys_not_found, 1);
        assert_eq!(snapshot.keys_by_strategy["comment_marker"], 2);
        assert_eq!(snapshot.keys_by_strategy["inline_script"], 1);
        assert_eq!(snapshot.keys_by_strategy["meta_tag"], 0);
        assert_eq!(snapshot.keys_by_strategy.len(), 4);
    }
}
