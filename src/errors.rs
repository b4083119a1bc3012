//! Validation and scene errors

use crate::float_types::Real;
use nalgebra::Point3;

/// Parameter problems caught before anything touches a scene
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositiveRadius) A radius must be finite and strictly positive
    #[error("(NonPositiveRadius) radius must be finite and > 0, got {0}")]
    NonPositiveRadius(Real),
    /// (NonPositiveStep) The angular step must be finite and strictly positive
    #[error("(NonPositiveStep) angular step must be finite and > 0 degrees, got {0}")]
    NonPositiveStep(Real),
    /// (InvalidAngle) The start angle is NaN or infinite
    #[error("(InvalidAngle) start angle must be finite, got {0}")]
    InvalidAngle(Real),
    /// (AngleOutOfRange) The start angle is so large a full turn past it is not representable
    #[error("(AngleOutOfRange) no full turn is representable after start angle {0}")]
    AngleOutOfRange(Real),
    /// (StepTooSmall) The step would take too many petals, or rounds away at the given start angle
    #[error("(StepTooSmall) angular step {step} cannot walk a full turn from {start}")]
    StepTooSmall { step: Real, start: Real },
    /// (TooFewVertices) A circle needs at least three vertices
    #[error("(TooFewVertices) a circle needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// (InvalidCoordinate) The coordinate has a NaN or infinite
    #[error("(InvalidCoordinate) the coordinate ({0}) has a NaN or infinite")]
    InvalidCoordinate(Point3<Real>),
}

/// Failures raised by a scene host while executing a call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// The host refused to create another object
    #[error("scene is full: capacity of {limit} objects reached")]
    CapacityExceeded { limit: usize },
    /// The host rejected the primitive it was asked to create
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(#[from] ValidationError),
    /// In general, anything else the host reports
    #[error("{0}")]
    Host(String),
}

/// Anything that can stop a flower from being built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowerError {
    #[error("invalid flower parameters: {0}")]
    Validation(#[from] ValidationError),
    #[error("scene call failed: {0}")]
    Scene(#[from] SceneError),
}
