//! Error kinds returned by every fallible index operation.

use std::collections::TryReserveError;
use thiserror::Error;

/// Failure kinds of the index. Success is `Ok(_)`; these three variants
/// complete the contract surface.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// A term entry, its doc-id array, or a bucket array could not be allocated.
    #[error("allocation failure")]
    AllocationFailure,

    /// The searched term (or prefix) is not stored in the index.
    #[error("term not found")]
    TermNotFound,

    /// An argument was rejected before any state was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl From<TryReserveError> for IndexError {
    fn from(_: TryReserveError) -> Self {
        IndexError::AllocationFailure
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IndexError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: a failed fallible reservation surfaces as `AllocationFailure`.
    #[test]
    fn try_reserve_error_maps_to_allocation_failure() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve_exact(usize::MAX).unwrap_err();
        assert_eq!(IndexError::from(err), IndexError::AllocationFailure);
    }

    /// Invariant: display text names the kind and, for invalid arguments, the reason.
    #[test]
    fn display_messages() {
        assert_eq!(IndexError::TermNotFound.to_string(), "term not found");
        assert_eq!(
            IndexError::InvalidArgument("prefix must not be empty").to_string(),
            "invalid argument: prefix must not be empty"
        );
    }
}
