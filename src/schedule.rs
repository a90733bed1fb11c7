//! Timer queue for deferred effects
//!
//! Converts the relative delays returned by the puzzle and the screen
//! controller into absolute deadlines and hands them back in order as time
//! passes. Callers pass the current instant in, so the queue never reads the
//! clock itself.

use crate::puzzle::{Effect, Scheduled};
use log::trace;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending {
    due: Instant,
    seq: u64,
    effect: Effect,
}

/// Pending effects ordered by deadline, then by insertion
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue effects relative to `now`
    pub fn schedule(&mut self, now: Instant, effects: impl IntoIterator<Item = Scheduled>) {
        for Scheduled { delay, effect } in effects {
            trace!("scheduling {effect:?} in {delay:?}");
            self.pending.push(Pending {
                due: now + delay,
                seq: self.next_seq,
                effect,
            });
            self.next_seq += 1;
        }
        self.pending.sort_by_key(|p| (p.due, p.seq));
    }

    /// Remove and return every effect due at or before `now`, in order
    pub fn drain_due(&mut self, now: Instant) -> Vec<Effect> {
        let split = self.pending.partition_point(|p| p.due <= now);
        self.pending.drain(..split).map(|p| p.effect).collect()
    }

    /// Earliest pending deadline
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|p| p.due)
    }

    /// How long until the next effect, capped at `max`
    #[must_use]
    pub fn timeout(&self, now: Instant, max: Duration) -> Duration {
        self.next_deadline()
            .map_or(max, |due| due.saturating_duration_since(now).min(max))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
