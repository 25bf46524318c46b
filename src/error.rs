//! Error types for section analysis

use thiserror::Error;

/// Main error type for section analysis operations
#[derive(Error, Debug)]
pub enum SectionError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Homogenized properties are incomplete - need area, inertia about X and centroid Y")]
    MissingProperties,

    #[error("Homogenized area is practically zero")]
    DegenerateArea,

    #[error("Homogenized inertia about X is zero with an applied bending moment")]
    ZeroStiffnessWithMoment,

    #[error("Division by zero while locating the neutral axis (area or moment may be zero)")]
    NeutralAxisUndefined,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for section analysis operations
pub type SectionResult<T> = Result<T, SectionError>;
