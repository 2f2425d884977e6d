//! Typewriter Cycler - the header's rotating role text.
//!
//! Types and deletes each entry of an ordered role list, cycling forever:
//!
//! ```text
//! Typing --full--> Holding --pause--> Deleting --empty--> Resting --pause-+
//!   ^                                                                    |
//!   +------------------- advance index, next role ----------------------+
//! ```
//!
//! The machine is pure: it never touches a clock, a thread, or a signal.
//! Every transition returns at most one [`Schedule`] - a request for a
//! single future tick - and the caller owns delivering that tick back via
//! [`Typewriter::step`]. A delivered token that no longer matches the
//! pending one belongs to a superseded generation (restart, teardown) and
//! is ignored.
//!
//! The blinking caret is the view layer's concern, not this machine's.

use std::time::Duration;

use crate::error::FolioError;
use crate::state::timer::{Schedule, TickToken, TokenMint};

// =============================================================================
// Configuration
// =============================================================================

/// Tick intervals for the typewriter. All must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay between appended characters.
    pub type_speed: Duration,
    /// Delay between removed characters.
    pub delete_speed: Duration,
    /// Hold after a role is fully typed.
    pub pause_after_type: Duration,
    /// Hold on the empty string before the next role starts typing.
    pub pause_after_delete: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(75),
            delete_speed: Duration::from_millis(40),
            pause_after_type: Duration::from_millis(1800),
            pause_after_delete: Duration::from_millis(300),
        }
    }
}

impl TypewriterConfig {
    fn validate(&self) -> Result<(), FolioError> {
        if self.type_speed.is_zero() {
            return Err(FolioError::ZeroInterval("type_speed"));
        }
        if self.delete_speed.is_zero() {
            return Err(FolioError::ZeroInterval("delete_speed"));
        }
        if self.pause_after_type.is_zero() {
            return Err(FolioError::ZeroInterval("pause_after_type"));
        }
        if self.pause_after_delete.is_zero() {
            return Err(FolioError::ZeroInterval("pause_after_delete"));
        }
        Ok(())
    }
}

// =============================================================================
// State Machine
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Appending one character per tick.
    Typing,
    /// Full role displayed, waiting out `pause_after_type`.
    Holding,
    /// Removing one character per tick.
    Deleting,
    /// Empty string displayed, waiting out `pause_after_delete`.
    Resting,
}

/// The role-cycling state machine.
///
/// Invariant: `displayed` is always a prefix of `roles[current]` - growing
/// while typing, shrinking while deleting, never anything else.
#[derive(Debug)]
pub struct Typewriter {
    roles: Vec<String>,
    config: TypewriterConfig,
    current: usize,
    displayed: String,
    phase: Phase,
    pending: Option<TickToken>,
    mint: TokenMint,
}

impl Typewriter {
    /// Build a typewriter over `roles`.
    ///
    /// Fails fast on an empty role list or a zero interval. A single
    /// empty-string role is accepted and degenerates to an idle caret.
    pub fn new(roles: Vec<String>, config: TypewriterConfig) -> Result<Self, FolioError> {
        if roles.is_empty() {
            return Err(FolioError::EmptyRoles);
        }
        config.validate()?;
        Ok(Self {
            roles,
            config,
            current: 0,
            displayed: String::new(),
            phase: Phase::Typing,
            pending: None,
            mint: TokenMint::default(),
        })
    }

    /// Begin (or restart) cycling from an empty string on the first role.
    ///
    /// Any previously pending tick is superseded: its token will no longer
    /// match and [`step`](Self::step) will ignore it when it fires.
    pub fn start(&mut self) -> Schedule {
        self.current = 0;
        self.displayed.clear();
        self.phase = Phase::Typing;
        self.request(self.config.type_speed)
    }

    /// Replace the role list and restart.
    pub fn set_roles(&mut self, roles: Vec<String>) -> Result<Schedule, FolioError> {
        if roles.is_empty() {
            return Err(FolioError::EmptyRoles);
        }
        self.roles = roles;
        Ok(self.start())
    }

    /// Stop cycling. Pending ticks become stale and are ignored on arrival.
    pub fn stop(&mut self) {
        self.pending = None;
    }

    /// Deliver a tick. Returns the next tick to schedule, or `None` if the
    /// token is stale or the machine is stopped.
    pub fn step(&mut self, token: TickToken) -> Option<Schedule> {
        if self.pending != Some(token) {
            return None; // Stale tick from a superseded generation
        }
        self.pending = None;

        let schedule = match self.phase {
            Phase::Typing => {
                let target = &self.roles[self.current];
                let shown = self.displayed.chars().count();
                if let Some(next) = target.chars().nth(shown) {
                    self.displayed.push(next);
                }
                if self.displayed == *target {
                    self.phase = Phase::Holding;
                    self.request(self.config.pause_after_type)
                } else {
                    self.request(self.config.type_speed)
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.request(self.config.delete_speed)
            }
            Phase::Deleting => {
                self.displayed.pop();
                if self.displayed.is_empty() {
                    self.phase = Phase::Resting;
                    self.request(self.config.pause_after_delete)
                } else {
                    self.request(self.config.delete_speed)
                }
            }
            Phase::Resting => {
                self.current = (self.current + 1) % self.roles.len();
                self.phase = Phase::Typing;
                self.request(self.config.type_speed)
            }
        };
        Some(schedule)
    }

    /// The text to display right now.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// Index of the role currently being typed or deleted.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The role currently being typed or deleted.
    pub fn current_role(&self) -> &str {
        &self.roles[self.current]
    }

    pub fn is_deleting(&self) -> bool {
        matches!(self.phase, Phase::Deleting | Phase::Resting)
    }

    fn request(&mut self, delay: Duration) -> Schedule {
        let token = self.mint.next();
        self.pending = Some(token);
        Schedule { token, delay }
    }
}

// =============================================================================
// Tests
// =============================================================================
