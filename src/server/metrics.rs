//! Process-level metrics backing the `/performance` endpoint.

use std::sync::atomic::{AtomicU64, Ordering};

/// Duration of the most recently completed request, shared between the
/// timing middleware and the `/performance` handler. Stored as f64 bits so
/// reads and writes stay lock-free.
#[derive(Debug, Default)]
pub(super) struct RequestClock(AtomicU64);

impl RequestClock {
    pub(super) fn record(&self, elapsed_ms: f64) {
        self.0.store(elapsed_ms.to_bits(), Ordering::Relaxed);
    }

    pub(super) fn last_ms(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }
}

/// Resident set size in MB, read from `/proc/self/status`. Zero when the
/// information is unavailable (non-Linux targets included).
pub(super) fn resident_memory_mb() -> f64 {
    #[cfg(target_os = "linux")]
    if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
        for line in status.lines() {
            if let Some(rest) = line.strip_prefix("VmRSS:") {
                if let Some(kb) = rest
                    .split_whitespace()
                    .next()
                    .and_then(|value| value.parse::<f64>().ok())
                {
                    return kb / 1024.0;
                }
            }
        }
    }
    0.0
}
