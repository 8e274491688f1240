//! Deferred effect queue.
//!
//! Delayed effects are kept in due order against a virtual clock the
//! front end advances. Nothing is ever cancelled; each entry carries the
//! game generation it was emitted in so the driver can tell when the board
//! it targets has been replaced.

use std::time::Duration;

use crate::session::Effect;

#[derive(Clone, Debug)]
struct Pending {
    due: Duration,
    sequence: u64,
    generation: u64,
    effect: Effect,
}

/// Fire-and-forget timer queue for deferred effects.
#[derive(Clone, Debug, Default)]
pub struct DeferredQueue {
    now: Duration,
    next_sequence: u64,
    /// Sorted by `(due, sequence)`.
    pending: Vec<Pending>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queue `effect` to fire `delay` from now.
    ///
    /// Effects due at the same instant fire in scheduling order.
    pub fn schedule(&mut self, delay: Duration, generation: u64, effect: Effect) {
        let due = self.now + delay;
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let at = self
            .pending
            .partition_point(|p| (p.due, p.sequence) <= (due, sequence));
        self.pending.insert(
            at,
            Pending {
                due,
                sequence,
                generation,
                effect,
            },
        );
    }

    /// Time left until the earliest pending effect is due.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.pending
            .first()
            .map(|p| p.due.saturating_sub(self.now))
    }

    /// Move the clock forward and take every effect that has come due,
    /// paired with its generation, in firing order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(u64, Effect)> {
        self.now += elapsed;
        let ready = self.pending.partition_point(|p| p.due <= self.now);
        self.pending
            .drain(..ready)
            .map(|p| (p.generation, p.effect))
            .collect()
    }
}
