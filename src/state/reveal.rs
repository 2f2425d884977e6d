//! Scroll Reveal Tracker - staggered reveal of content blocks.
//!
//! Consumes `(BlockId, is_intersecting)` events from the viewport adapter
//! and marks blocks revealed after a stagger delay, so near-simultaneous
//! triggers cascade instead of appearing at once. Two policies cover the
//! two call sites:
//!
//! - [`Stagger::ordinal`] (timeline): `ordinal * step`, deterministic.
//! - [`Stagger::random`] (skills grid): uniform in `[0, max)`, drawn from an
//!   injectable sampler so tests can pin the delay.
//!
//! The revealed set is monotonic (a block never un-reveals) and idempotent
//! (repeat intersection events for revealed or already-pending blocks are
//! no-ops). Like the typewriter, the tracker is pure: it requests ticks via
//! [`Schedule`] and consumes them via [`RevealTracker::fire`]; teardown
//! invalidates every pending tick so a late timer cannot mutate state.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::time::Duration;

use crate::error::FolioError;
use crate::state::timer::{Schedule, TickToken, TokenMint};
use crate::types::BlockId;

// =============================================================================
// Stagger Policies
// =============================================================================

/// Default ordinal step between timeline reveals.
pub const ORDINAL_STEP: Duration = Duration::from_millis(300);

/// Default upper bound for randomized stagger.
pub const RANDOM_MAX: Duration = Duration::from_millis(500);

/// Delay policy applied when a block first triggers.
pub enum Stagger {
    /// `ordinal * step`, based on the block's fixed sequence position.
    Ordinal { step: Duration },
    /// Sampled per block; the runtime sampler is uniform in `[0, max)`.
    Random {
        max: Duration,
        sample: Box<dyn FnMut(Duration) -> Duration>,
    },
}

impl Stagger {
    /// Ordinal stagger at the default 300ms step.
    pub fn ordinal() -> Self {
        Self::Ordinal { step: ORDINAL_STEP }
    }

    pub fn ordinal_with(step: Duration) -> Self {
        Self::Ordinal { step }
    }

    /// Randomized stagger, uniform in `[0, max)`.
    pub fn random(max: Duration) -> Self {
        Self::Random {
            max,
            sample: Box::new(|max| {
                use rand::Rng;
                if max.is_zero() {
                    return Duration::ZERO;
                }
                Duration::from_nanos(rand::rng().random_range(0..max.as_nanos() as u64))
            }),
        }
    }

    /// Randomized stagger with an injected sampler (tests).
    pub fn random_with(
        max: Duration,
        sample: impl FnMut(Duration) -> Duration + 'static,
    ) -> Self {
        Self::Random {
            max,
            sample: Box::new(sample),
        }
    }

    fn delay(&mut self, ordinal: usize) -> Duration {
        match self {
            Self::Ordinal { step } => *step * ordinal as u32,
            Self::Random { max, sample } => sample(*max).min(*max),
        }
    }
}

// =============================================================================
// Reveal Tracker
// =============================================================================

/// Tracks which blocks have been revealed.
///
/// Invariants: `revealed` is a subset of the candidates, grows monotonically,
/// and keeps insertion order (= reveal order).
pub struct RevealTracker {
    ordinals: HashMap<BlockId, usize>,
    revealed: Vec<BlockId>,
    revealed_set: HashSet<BlockId>,
    pending: HashMap<TickToken, BlockId>,
    scheduled: HashSet<BlockId>,
    stagger: Stagger,
    mint: TokenMint,
    active: bool,
}

impl RevealTracker {
    /// Build a tracker over an ordered candidate list.
    ///
    /// The position of each block in `candidates` is its ordinal for
    /// stagger purposes. Duplicate ids fail fast.
    pub fn new(candidates: &[BlockId], stagger: Stagger) -> Result<Self, FolioError> {
        let mut ordinals = HashMap::with_capacity(candidates.len());
        for (ordinal, &id) in candidates.iter().enumerate() {
            if ordinals.insert(id, ordinal).is_some() {
                return Err(FolioError::DuplicateBlock(id));
            }
        }
        Ok(Self {
            ordinals,
            revealed: Vec::new(),
            revealed_set: HashSet::new(),
            pending: HashMap::new(),
            scheduled: HashSet::new(),
            stagger,
            mint: TokenMint::default(),
            active: true,
        })
    }

    /// Deliver a viewport intersection event.
    ///
    /// Returns a tick to schedule when the block should reveal after its
    /// stagger delay; `None` for exits, repeats, unknown ids, and events
    /// after teardown.
    pub fn on_visibility(&mut self, id: BlockId, is_intersecting: bool) -> Option<Schedule> {
        if !self.active || !is_intersecting {
            return None;
        }
        if self.revealed_set.contains(&id) || self.scheduled.contains(&id) {
            return None; // Idempotent: at most one pending reveal per block
        }
        let ordinal = *self.ordinals.get(&id)?;

        let token = self.mint.next();
        let delay = self.stagger.delay(ordinal);
        self.pending.insert(token, id);
        self.scheduled.insert(id);
        Some(Schedule { token, delay })
    }

    /// Deliver a fired reveal tick. Returns whether the revealed set changed.
    ///
    /// Stale tokens (superseded by teardown) are ignored without error.
    pub fn fire(&mut self, token: TickToken) -> bool {
        if !self.active {
            return false;
        }
        let Some(id) = self.pending.remove(&token) else {
            return false; // Stale tick
        };
        self.scheduled.remove(&id);
        self.revealed.push(id);
        self.revealed_set.insert(id);
        true
    }

    /// Stop listening and cancel every pending reveal.
    ///
    /// Ticks that fire afterwards hit the `active` guard and leave the
    /// revealed set untouched.
    pub fn teardown(&mut self) {
        self.active = false;
        self.pending.clear();
        self.scheduled.clear();
    }

    /// Revealed blocks in reveal order.
    pub fn revealed(&self) -> &[BlockId] {
        &self.revealed
    }

    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.revealed_set.contains(&id)
    }

    /// Number of blocks scheduled but not yet revealed.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

// Manual impl: the boxed stagger sampler has no Debug.
impl fmt::Debug for RevealTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealTracker")
            .field("revealed", &self.revealed)
            .field("pending", &self.pending.len())
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
