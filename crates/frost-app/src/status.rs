use std::sync::atomic::{AtomicU64, Ordering};

/// Run counters, shared between the capture and click tasks.
#[derive(Default)]
pub struct BotStatus {
    iterations: AtomicU64,
    clicks: AtomicU64,
    errors: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusSnapshot {
    pub iterations: u64,
    pub clicks: u64,
    pub errors: u64,
}

impl BotStatus {
    pub fn record_iteration(&self) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_click(&self) {
        self.clicks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            iterations: self.iterations.load(Ordering::Relaxed),
            clicks: self.clicks.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}
