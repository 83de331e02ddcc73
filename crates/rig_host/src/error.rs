//! Host-side error types.

use crate::handle::ObjectId;

/// Errors returned by [`Host`](crate::Host) calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host has no live object with this handle.
    #[error("unknown host object: {0}")]
    UnknownObject(ObjectId),

    /// The host refused the request.
    #[error("host rejected request: {0}")]
    Rejected(String),
}
