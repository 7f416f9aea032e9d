// tagplay/src/poller/health.rs

//! Rolling device-health statistic.

use std::collections::VecDeque;

use crate::status::Status;

pub const DEFAULT_HEALTH_WINDOW: usize = 10;
pub const DEFAULT_HEALTH_THRESHOLD: f64 = 0.75;

/// Fixed-size window over the most recent poll cycles, each recorded as
/// healthy or unhealthy. Once full, every new record replaces the oldest.
#[derive(Debug, Clone)]
pub struct HealthWindow {
    slots: VecDeque<bool>,
    size: usize,
    threshold: f64,
}

impl HealthWindow {
    /// A window of `size` cycles (at least one) that asks for a reset when
    /// the unhealthy share is strictly above `threshold`.
    pub fn new(size: usize, threshold: f64) -> Self {
        let size = size.max(1);
        Self {
            slots: VecDeque::with_capacity(size),
            size,
            threshold,
        }
    }

    /// Record one cycle.
    pub fn record(&mut self, unhealthy: bool) {
        if self.slots.len() == self.size {
            self.slots.pop_front();
        }
        self.slots.push_back(unhealthy);
    }

    /// Record a cycle by its detection status. Plain timeouts ("no tag")
    /// count as healthy.
    pub fn record_status(&mut self, status: Status) {
        self.record(status.is_worse_than_timeout());
    }

    pub fn unhealthy_count(&self) -> usize {
        self.slots.iter().filter(|&&u| u).count()
    }

    /// True when more than `size * threshold` of the window is unhealthy.
    /// Slots never written count as healthy.
    pub fn should_reset(&self) -> bool {
        self.unhealthy_count() as f64 > self.size as f64 * self.threshold
    }

    /// Forget every recorded cycle.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of cycles recorded, up to the window size.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for HealthWindow {
    fn default() -> Self {
        Self::new(DEFAULT_HEALTH_WINDOW, DEFAULT_HEALTH_THRESHOLD)
    }
}
