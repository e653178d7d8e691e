use thiserror::Error;

use crate::cart::MAX_CAPACITY;

/// Errors for cart construction and integrity checks.
///
/// A full cart, an empty cart and a missing item are ordinary outcomes,
/// not errors; the cart reports those through `bool` and `Option` returns.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("requested capacity {0} exceeds allowed maximum {max}", max = MAX_CAPACITY)]
    CapacityExceeded(usize),

    /// The occupied count exceeds the capacity. Unreachable through the
    /// public API; kept so a defensive audit has something to report.
    #[error("cart is corrupt: occupied count exceeds capacity")]
    CorruptState,
}
