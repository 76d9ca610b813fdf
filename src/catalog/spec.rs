//! Nominal component dimensions

use serde::{Deserialize, Serialize};

use super::Role;
use crate::error::{StabilityError, StabilityResult};

/// Nominal dimensions of one component as given in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Display identifier (defaults to the role name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Extent along global X
    pub length: f64,
    /// Extent along global Y
    pub width: f64,
    /// Extent along global Z
    pub height: f64,
    /// Slope rotation in radians (top slab only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl ComponentSpec {
    /// Create a spec from length (x), width (y) and height (z)
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            id: None,
            length,
            width,
            height,
            angle: None,
        }
    }

    /// Set the display identifier
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Set the slope rotation angle
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }

    /// Identifier for reports, falling back to the role name
    pub fn display_id(&self, role: Role) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| role.default_id().to_string())
    }

    /// Check every dimension is finite and strictly positive
    pub fn validate(&self, role: Role) -> StabilityResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(StabilityError::InvalidDimension { role, field, value });
            }
        }
        if let Some(angle) = self.angle {
            if !angle.is_finite() {
                return Err(StabilityError::InvalidDimension {
                    role,
                    field: "angle",
                    value: angle,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_spec() {
        assert!(ComponentSpec::new(15.0, 73.0, 0.5).validate(Role::BaseSlab).is_ok());
    }

    #[test]
    fn test_negative_height_rejected() {
        let err = ComponentSpec::new(1.0, 1.0, -2.0)
            .validate(Role::LeftWall)
            .unwrap_err();
        assert!(matches!(
            err,
            StabilityError::InvalidDimension { role: Role::LeftWall, field: "height", .. }
        ));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_nan_angle_rejected() {
        let spec = ComponentSpec::new(1.0, 1.0, 1.0).with_angle(f64::NAN);
        assert!(spec.validate(Role::TopSlab).is_err());
    }

    #[test]
    fn test_display_id_fallback() {
        assert_eq!(ComponentSpec::new(1.0, 1.0, 1.0).display_id(Role::BackWedge), "wedge back wall");
        assert_eq!(
            ComponentSpec::new(1.0, 1.0, 1.0).with_id("north wall").display_id(Role::BackWall),
            "north wall"
        );
    }
}
