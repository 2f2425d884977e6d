//! Runtime wiring: viewport visibility and the mount loop.

pub mod mount;
pub mod viewport;

pub use mount::{mount, App};
pub use viewport::{BlockExtent, Viewport, INTERSECTION_THRESHOLD};
