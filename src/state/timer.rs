//! Single-shot timer scheduling.
//!
//! Two small vocabularies live here:
//!
//! - [`TickToken`] / [`Schedule`] - what the pure state machines speak. A
//!   machine mints a fresh token for every tick it requests; when a tick is
//!   delivered back, a token that no longer matches the machine's pending
//!   one identifies a stale timer from a superseded generation and is
//!   ignored rather than allowed to mutate discarded state.
//! - [`Scheduler`] - the runtime's deadline queue. It never sleeps and never
//!   spawns; the owning loop passes `now` in, so tests drive it with a
//!   simulated clock and the main loop with `Instant::now()`.
//!
//! All timers are single-shot: firing removes them. Recurring behavior is
//! the owner re-scheduling from its tick handler.

use std::time::{Duration, Instant};

// =============================================================================
// Tick Tokens
// =============================================================================

/// Identity of one scheduled tick, minted by the requesting state machine.
///
/// Tokens are never reused within a machine, so equality against the
/// machine's pending token doubles as a generation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickToken(pub(crate) u64);

/// A request for exactly one future tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub token: TickToken,
    pub delay: Duration,
}

/// Monotonic token source embedded in each state machine.
#[derive(Debug, Default)]
pub(crate) struct TokenMint(u64);

impl TokenMint {
    pub(crate) fn next(&mut self) -> TickToken {
        self.0 += 1;
        TickToken(self.0)
    }
}

// =============================================================================
// Scheduler
// =============================================================================

/// Handle for cancelling a scheduled entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Entry<T> {
    id: TimerId,
    deadline: Instant,
    payload: T,
}

/// Deadline queue for single-shot timers.
///
/// Entries fire in deadline order; ties fire in scheduling order. The queue
/// holds an arbitrary payload per entry so the owning loop can route fired
/// timers without a side table.
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule a single-shot timer `delay` from `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.entries.push(Entry {
            id,
            deadline: now + delay,
            payload,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Remove and return the payloads of all entries due at `now`, in
    /// deadline order (ties in scheduling order).
    pub fn poll_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due.sort_by_key(|e| (e.deadline, e.id.0));
        due.into_iter().map(|e| e.payload).collect()
    }

    /// Earliest pending deadline, for sizing the input-poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_token_mint_never_repeats() {
        let mut mint = TokenMint::default();
        let a = mint.next();
        let b = mint.next();
        let c = mint.next();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn test_poll_due_in_deadline_order() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, ms(300), "late");
        sched.schedule(t0, ms(100), "early");
        sched.schedule(t0, ms(200), "middle");

        assert_eq!(sched.poll_due(t0), Vec::<&str>::new());
        assert_eq!(sched.poll_due(t0 + ms(150)), vec!["early"]);
        assert_eq!(sched.poll_due(t0 + ms(400)), vec!["middle", "late"]);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, ms(100), 1);
        sched.schedule(t0, ms(100), 2);
        sched.schedule(t0, ms(100), 3);
        assert_eq!(sched.poll_due(t0 + ms(100)), vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        let id = sched.schedule(t0, ms(100), "a");
        sched.schedule(t0, ms(100), "b");

        assert!(sched.cancel(id));
        assert!(!sched.cancel(id)); // Already gone
        assert_eq!(sched.poll_due(t0 + ms(100)), vec!["b"]);
    }

    #[test]
    fn test_timers_are_single_shot() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, ms(50), ());
        assert_eq!(sched.poll_due(t0 + ms(50)).len(), 1);
        assert_eq!(sched.poll_due(t0 + ms(500)).len(), 0);
    }

    #[test]
    fn test_next_deadline() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        assert_eq!(sched.next_deadline(), None);

        sched.schedule(t0, ms(200), ());
        sched.schedule(t0, ms(100), ());
        assert_eq!(sched.next_deadline(), Some(t0 + ms(100)));
    }

    #[test]
    fn test_clear() {
        let t0 = Instant::now();
        let mut sched = Scheduler::new();
        sched.schedule(t0, ms(10), ());
        sched.schedule(t0, ms(20), ());
        sched.clear();
        assert!(sched.is_empty());
        assert_eq!(sched.poll_due(t0 + ms(100)).len(), 0);
    }
}
