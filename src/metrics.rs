// ═══════════════════════════════════════════════════════════════
// MATCH STATS - what the matcher saw and what it threw away
// ═══════════════════════════════════════════════════════════════
//
// Atomic counters, bumped from whatever thread ran the match. No locks,
// so batch matching on the rayon pool never contends on bookkeeping.
// The binary logs a snapshot on shutdown.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// The stats snapshot - what gets serialized to JSON
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub texts_seen: u64,
    pub rejected_short: u64,
    pub rejected_promotional: u64,
    /// Texts whose vocabulary scan found nothing, so no market was scored.
    pub no_vocabulary_hits: u64,
    pub markets_scored: u64,
    pub matches_returned: u64,
    pub uptime_seconds: u64,
    pub texts_per_minute: f64,
}

/// Thread-safe matcher counters
#[derive(Debug)]
pub struct MatchStats {
    texts_seen: AtomicU64,
    rejected_short: AtomicU64,
    rejected_promotional: AtomicU64,
    no_vocabulary_hits: AtomicU64,
    markets_scored: AtomicU64,
    matches_returned: AtomicU64,
    start_time: Instant,
}

impl MatchStats {
    pub fn new() -> Self {
        Self {
            texts_seen: AtomicU64::new(0),
            rejected_short: AtomicU64::new(0),
            rejected_promotional: AtomicU64::new(0),
            no_vocabulary_hits: AtomicU64::new(0),
            markets_scored: AtomicU64::new(0),
            matches_returned: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn increment_seen(&self) {
        self.texts_seen.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected_short(&self) {
        self.rejected_short.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected_promotional(&self) {
        self.rejected_promotional.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_no_vocabulary_hits(&self) {
        self.no_vocabulary_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_markets_scored(&self, count: usize) {
        self.markets_scored.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn add_matches_returned(&self, count: usize) {
        self.matches_returned.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Take a snapshot of all counters (lock-free reads)
    pub fn snapshot(&self) -> StatsSnapshot {
        let uptime = self.start_time.elapsed().as_secs();
        let texts_seen = self.texts_seen.load(Ordering::Relaxed);
        let texts_per_minute = if uptime > 0 {
            (texts_seen as f64 / uptime as f64) * 60.0
        } else {
            0.0
        };

        StatsSnapshot {
            texts_seen,
            rejected_short: self.rejected_short.load(Ordering::Relaxed),
            rejected_promotional: self.rejected_promotional.load(Ordering::Relaxed),
            no_vocabulary_hits: self.no_vocabulary_hits.load(Ordering::Relaxed),
            markets_scored: self.markets_scored.load(Ordering::Relaxed),
            matches_returned: self.matches_returned.load(Ordering::Relaxed),
            uptime_seconds: uptime,
            texts_per_minute,
        }
    }
}

impl Default for MatchStats {
    fn default() -> Self {
        Self::new()
    }
}
