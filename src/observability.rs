//! Request and preload counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    pages_rendered: AtomicU64,
    not_found: AtomicU64,
    preloads_started: AtomicU64,
    preloads_failed: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "pages_rendered", "Metric incremented");
    }

    pub fn not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "not_found", "Metric incremented");
    }

    pub fn preload_started(&self) {
        self.preloads_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn preload_failed(&self) {
        self.preloads_failed.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(counter = "preloads_failed", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            pages_rendered: self.pages_rendered.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            preloads_started: self.preloads_started.load(Ordering::Relaxed),
            preloads_failed: self.preloads_failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSnapshot {
    pub pages_rendered: u64,
    pub not_found: u64,
    pub preloads_started: u64,
    pub preloads_failed: u64,
}
