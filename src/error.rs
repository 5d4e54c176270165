use thiserror::Error;

use crate::types::{PackMode, Rect};

/// Errors that abort a packing run. None of them is recoverable within
/// the run: the caller reconfigures (larger container, rotation enabled,
/// fewer items) and packs again from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PackError {
    /// `pack()` was invoked before a container was configured.
    #[error("no container configured")]
    NotConfigured,

    /// The engine is configured for a mode with no split algorithm.
    #[error("no split algorithm for {0} packing")]
    UnsupportedMode(PackMode),

    /// No active space can hold the item, and the rotation fallback
    /// (when enabled) could not help either.
    #[error("no space for item {0}")]
    NoSpaceForItem(Rect),
}
