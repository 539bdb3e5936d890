use thiserror::Error;

/// Top-level error type for the Ringforge model builder.
#[derive(Debug, Error)]
pub enum RingforgeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors raised while validating ring geometry parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "invalid geometry: inner radius {inner} must be strictly smaller than outer radius {outer}"
    )]
    RadiusOrder { inner: f64, outer: f64 },

    #[error("invalid geometry: radius {0} must be strictly positive")]
    NonPositiveRadius(f64),

    #[error("invalid geometry: aperture angle {value}° is outside ({min}°, {max}°]")]
    ApertureOutOfRange { value: f64, min: f64, max: f64 },
}

/// Errors raised while assigning mesh densities.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid mesh density: {count} elements on the {slot} curves (minimum is 1)")]
    InvalidMeshDensity { slot: &'static str, count: u32 },
}

/// Errors raised while decorating the model with non-geometric data.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("ring has no constitutive material attached")]
    MissingMaterial,

    #[error("ring has no contact property attached")]
    MissingContactProperty,

    #[error("invalid time integration: {0}")]
    InvalidTimeIntegration(String),
}

/// Convenience type alias for results using [`RingforgeError`].
pub type Result<T> = std::result::Result<T, RingforgeError>;
