//! Geometry provider interface
//!
//! The stability engine never builds solids itself. It hands a parametric
//! [`SolidRequest`] to a [`GeometryProvider`] and receives the volume and
//! centroid back. Any CAD kernel can sit behind the trait; [`AnalyticGeometry`]
//! computes both values in closed form for boxes and right-triangular wedges.

mod analytic;

pub use analytic::AnalyticGeometry;

use nalgebra::{Point3, Rotation3, Unit};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to resolve a parametric solid
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate {field} = {value}")]
    DegenerateDimension { field: &'static str, value: f64 },

    #[error("non-finite position ({0}, {1}, {2})")]
    InvalidPosition(f64, f64, f64),

    #[error("rotation axis has zero length")]
    DegenerateAxis,

    #[error("invalid rotation angle {0}")]
    InvalidAngle(f64),

    #[error("solid has non-positive volume {0}")]
    NonPositiveVolume(f64),

    #[error("solid has non-finite volume {0}")]
    NonFiniteVolume(f64),

    #[error("{0}")]
    Provider(String),
}

/// Kind of primitive solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolidKind {
    /// Rectangular box
    Box,
    /// Right-triangular prism; the vertical face sits at `x - length / 2`
    Wedge,
}

/// Rotation of a solid about the line through `origin` and `through`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRotation {
    /// First point on the rotation axis
    pub origin: Point3<f64>,
    /// Second point on the rotation axis (sets the positive direction)
    pub through: Point3<f64>,
    /// Right-handed rotation angle in radians
    pub angle: f64,
}

impl AxisRotation {
    /// Create a rotation about an axis defined by two points
    pub fn new(origin: Point3<f64>, through: Point3<f64>, angle: f64) -> Self {
        Self {
            origin,
            through,
            angle,
        }
    }

    /// Rotate a point about the axis
    pub fn apply(&self, point: &Point3<f64>) -> Result<Point3<f64>, GeometryError> {
        if !self.angle.is_finite() {
            return Err(GeometryError::InvalidAngle(self.angle));
        }
        let axis = self.through - self.origin;
        if axis.norm() < 1e-12 {
            return Err(GeometryError::DegenerateAxis);
        }
        let rotation = Rotation3::from_axis_angle(&Unit::new_normalize(axis), self.angle);
        Ok(self.origin + rotation * (point - self.origin))
    }
}

/// A parametric solid to be resolved by a geometry provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidRequest {
    /// Box or wedge
    pub kind: SolidKind,
    /// Center of the solid's bounding box before rotation
    pub position: Point3<f64>,
    /// Extent along global X (may be negative for wedges)
    pub length: f64,
    /// Extent along global Y
    pub width: f64,
    /// Extent along global Z
    pub height: f64,
    /// Optional rigid rotation applied after placement
    pub rotation: Option<AxisRotation>,
}

impl SolidRequest {
    /// Create an unrotated box request
    pub fn boxed(position: Point3<f64>, length: f64, width: f64, height: f64) -> Self {
        Self {
            kind: SolidKind::Box,
            position,
            length,
            width,
            height,
            rotation: None,
        }
    }

    /// Create an unrotated wedge request
    pub fn wedge(position: Point3<f64>, length: f64, width: f64, height: f64) -> Self {
        Self {
            kind: SolidKind::Wedge,
            position,
            length,
            width,
            height,
            rotation: None,
        }
    }

    /// Attach a rotation
    pub fn with_rotation(mut self, rotation: AxisRotation) -> Self {
        self.rotation = Some(rotation);
        self
    }
}

/// Mass properties returned by a geometry provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidProperties {
    /// Volume in cubic length units
    pub volume: f64,
    /// Centroid in the global frame
    pub centroid: Point3<f64>,
}

/// Resolves parametric solids into volume and centroid.
///
/// Implementations must be pure: the same request always yields the same
/// properties. The engine does not retry a failed request.
pub trait GeometryProvider {
    fn create_solid(&self, request: &SolidRequest) -> Result<SolidProperties, GeometryError>;
}

impl<T: GeometryProvider + ?Sized> GeometryProvider for &T {
    fn create_solid(&self, request: &SolidRequest) -> Result<SolidProperties, GeometryError> {
        (**self).create_solid(request)
    }
}
