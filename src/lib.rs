//! # folio-tui
//!
//! Animated single-page portfolio for the terminal, built on
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! Two pure state machines carry all the behavior: the typewriter cycler
//! that types and deletes the header role titles, and the reveal trackers
//! that stagger content blocks into view as they scroll past the
//! intersection threshold. Both speak only in tick tokens and
//! [`Schedule`](state::Schedule) requests; they never touch a clock or the
//! terminal.
//!
//! The rendering pipeline is derived-based, one effect at the end:
//! ```text
//! state machines → page signals → page derived → render effect → painter
//! ```
//!
//! The mount loop owns the deadline scheduler, polls crossterm input with a
//! timeout bounded by the next timer deadline, and syncs machine outputs
//! into the page signals.
//!
//! ## Modules
//!
//! - [`types`] - Block identity, colors, attributes, spans/lines
//! - [`content`] - The page's literal content
//! - [`state`] - Typewriter, reveal trackers, timers, hover, blink
//! - [`pipeline`] - Viewport visibility and the mount loop
//! - [`view`] - Declarative sections and page assembly
//! - [`renderer`] - Row-diffing terminal painter

pub mod content;
pub mod error;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;
pub mod view;

// Re-export commonly used items
pub use types::*;

pub use error::FolioError;

pub use state::{
    // Typewriter
    Typewriter, TypewriterConfig,
    // Reveal
    RevealTracker, Stagger, ORDINAL_STEP, RANDOM_MAX,
    // Timers
    Schedule, Scheduler, TickToken, TimerId,
    // Hover
    clear_hover_if, hovered, hovered_signal, set_hovered,
    // Blink
    blink_phase, blink_signal, subscribe_to_blink, BLINK_HALF_PERIOD,
};

pub use pipeline::{mount, App, BlockExtent, Viewport, INTERSECTION_THRESHOLD};

pub use view::{build_page, skills_blocks, timeline_blocks, Page, PageSignals};

pub use renderer::Painter;
