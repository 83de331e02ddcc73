//! Rig error types.

use rig_host::{HostError, ObjectId};
use rig_math::MathError;

/// Errors raised while driving rig objects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RigError {
    /// Degenerate rotation input.
    #[error(transparent)]
    Math(#[from] MathError),

    /// The host call failed.
    #[error("host call failed: {0}")]
    Host(#[from] HostError),

    /// The scene does not manage this object.
    #[error("{0} is not managed by this scene")]
    UnknownObject(ObjectId),
}
