//! Construction-time errors.
//!
//! The page has no I/O that can fail mid-animation, so the whole error
//! surface is fail-fast validation at setup: bad role lists, bad intervals,
//! duplicate block identifiers. Terminal I/O goes through `io::Result`
//! separately in the renderer and pipeline.

use thiserror::Error;

use crate::types::BlockId;

/// Errors raised while constructing the page's state machines.
///
/// None of these occur after setup; a machine that constructs successfully
/// never errors at runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolioError {
    /// The typewriter needs at least one role to cycle through.
    #[error("typewriter requires a non-empty role list")]
    EmptyRoles,

    /// Typewriter tick intervals must be positive.
    #[error("typewriter interval `{0}` must be positive")]
    ZeroInterval(&'static str),

    /// Reveal candidates must be unique.
    #[error("duplicate block identifier {0:?} in reveal candidates")]
    DuplicateBlock(BlockId),
}
