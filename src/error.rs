//! Error type for overlay operations.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors an overlay operation can return.
///
/// Every failure is local to the call that produced it; there is no retry
/// or partial-failure recovery. Text clipping is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlayError {
    /// Growing the entry storage failed. The overlay is unchanged: no
    /// entry was appended and the cursor did not advance.
    #[error("overlay storage exhausted: {0}")]
    StorageExhausted(#[from] TryReserveError),

    /// Lookup index was at or past the entry count.
    #[error("entry index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
}
