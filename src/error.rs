//! Error types for stability analysis

use thiserror::Error;

use crate::catalog::Role;
use crate::geometry::GeometryError;

/// Main error type for stability analysis
#[derive(Error, Debug)]
pub enum StabilityError {
    #[error("Required component '{0}' missing from catalog")]
    MissingRole(Role),

    #[error("Component '{role}' requires '{dependency}' to be placed first")]
    MissingDependency { role: Role, dependency: Role },

    #[error("Component '{role}' has invalid {field}: {value}")]
    InvalidDimension {
        role: Role,
        field: &'static str,
        value: f64,
    },

    #[error("Archetype '{0}' requires at least one wall")]
    NoWalls(String),

    #[error("Property '{0}' missing from configuration")]
    MissingProperty(String),

    #[error("Property '{key}' has invalid value: {value}")]
    InvalidProperty { key: String, value: f64 },

    #[error("Unknown component tag '{0}'")]
    UnknownRole(String),

    #[error("Unknown archetype '{0}'")]
    UnknownArchetype(String),

    #[error("Geometry for '{component}' could not be resolved: {source}")]
    GeometryResolution {
        component: String,
        #[source]
        source: GeometryError,
    },

    #[error("Overturning moment is {overturning} - factor of safety is undefined")]
    DegenerateLoad { overturning: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl StabilityError {
    /// True for errors caused by the analysis input rather than the computation
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingRole(_)
                | Self::MissingDependency { .. }
                | Self::InvalidDimension { .. }
                | Self::NoWalls(_)
                | Self::MissingProperty(_)
                | Self::InvalidProperty { .. }
                | Self::UnknownRole(_)
                | Self::UnknownArchetype(_)
                | Self::SerializationError(_)
        )
    }
}

/// Result type for stability operations
pub type StabilityResult<T> = Result<T, StabilityError>;
