//! Closed-form volume and centroid for boxes and wedges

use nalgebra::Point3;

use super::{GeometryError, GeometryProvider, SolidKind, SolidProperties, SolidRequest};

/// Geometry provider computing mass properties analytically.
///
/// Box: `V = |L W H|`, centroid at the requested position.
/// Wedge: `V = ½ |L W H|`. The vertical face sits at `x0 = x - L/2` and the
/// slope falls to zero height at `x0 + L`, so the centroid is at
/// `(x - L/6, y, z - H/6)`. A negative length mirrors the wedge across its
/// center plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticGeometry;

impl AnalyticGeometry {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProvider for AnalyticGeometry {
    fn create_solid(&self, request: &SolidRequest) -> Result<SolidProperties, GeometryError> {
        for (field, value) in [
            ("length", request.length),
            ("width", request.width),
            ("height", request.height),
        ] {
            if !value.is_finite() || value == 0.0 {
                return Err(GeometryError::DegenerateDimension { field, value });
            }
        }

        let p = request.position;
        if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
            return Err(GeometryError::InvalidPosition(p.x, p.y, p.z));
        }

        let extent = (request.length * request.width * request.height).abs();
        let (volume, centroid) = match request.kind {
            SolidKind::Box => (extent, p),
            SolidKind::Wedge => (
                0.5 * extent,
                Point3::new(
                    p.x - request.length / 6.0,
                    p.y,
                    p.z - request.height / 6.0,
                ),
            ),
        };

        let centroid = match &request.rotation {
            Some(rotation) => rotation.apply(&centroid)?,
            None => centroid,
        };

        Ok(SolidProperties { volume, centroid })
    }
}
