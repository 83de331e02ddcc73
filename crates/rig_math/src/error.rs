//! Math error types.

/// Degenerate inputs rejected by the quaternion helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// A quaternion with zero (or non-finite) norm cannot be normalised.
    #[error("the norm of the quaternion is zero")]
    ZeroNorm,

    /// A rotation axis with zero (or non-finite) length has no direction.
    #[error("a zero vector was specified for the rotation axis")]
    ZeroAxis,

    /// A translation or pivot with a NaN or infinite component.
    #[error("a non-finite vector was specified")]
    NonFinite,
}
