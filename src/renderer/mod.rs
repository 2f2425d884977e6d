//! Terminal output.

pub mod paint;

pub use paint::Painter;
