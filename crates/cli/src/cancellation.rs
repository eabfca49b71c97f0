//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Re-export the token lifecycle operations race their HTTP call against.
//! - Recognize user-initiated cancellation (Ctrl+C/SIGINT) in an
//!   `anyhow::Error`, whether it came from a lifecycle operation or a command.
//! - Centralize cancellation message and Unix-standard SIGINT exit code (130).
//!
//! Does NOT handle:
//! - This module does not install signal handlers by itself.
//!
//! Invariants:
//! - Once cancelled, token remains cancelled forever.

use std::fmt;

use notebook_resource::ResourceError;

pub use notebook_resource::CancellationToken;

/// Standard Unix exit code for SIGINT: 128 + 2.
pub const SIGINT_EXIT_CODE: u8 = 130;

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
        || matches!(
            err.downcast_ref::<ResourceError>(),
            Some(ResourceError::Cancelled { .. })
        )
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use notebook_resource::Operation;

    #[test]
    fn test_marker_is_cancellation() {
        assert!(is_cancelled_error(&anyhow::Error::new(Cancelled)));
    }

    #[test]
    fn test_resource_cancellation_through_context() {
        let err: anyhow::Result<()> = Err(ResourceError::Cancelled {
            operation: Operation::Read,
        })
        .context("refresh failed");
        assert!(is_cancelled_error(&err.unwrap_err()));
    }

    #[test]
    fn test_other_errors_are_not_cancellation() {
        let err = anyhow::Error::new(ResourceError::InvalidId {
            id: "x".to_string(),
        });
        assert!(!is_cancelled_error(&err));
    }
}
