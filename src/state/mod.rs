//! Page state: the two behavioral state machines and their supporting
//! timer, hover, and blink primitives.
//!
//! `typewriter` and `reveal` are pure - they consume ticks and emit
//! [`timer::Schedule`] requests, nothing else. `timer` is the shared tick
//! vocabulary plus the runtime deadline queue. `hover` and `blink` are
//! small signal-backed presentational states.

pub mod blink;
pub mod hover;
pub mod reveal;
pub mod timer;
pub mod typewriter;

pub use blink::{
    advance as advance_blink, blink_phase, blink_signal, subscribe_to_blink, BLINK_HALF_PERIOD,
};
pub use hover::{clear_if as clear_hover_if, hovered, hovered_signal, set_hovered};
pub use reveal::{RevealTracker, Stagger, ORDINAL_STEP, RANDOM_MAX};
pub use timer::{Schedule, Scheduler, TickToken, TimerId};
pub use typewriter::{Typewriter, TypewriterConfig};
