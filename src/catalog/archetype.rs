//! Structure archetypes and their placement constants

use serde::{Deserialize, Serialize};

use super::Role;
use crate::error::{StabilityError, StabilityResult};

/// Fixed offsets that position components for one family of structures.
///
/// All values are in the structure's length unit (feet for the presets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    /// Archetype name
    pub name: String,
    /// Vertical gap between the top of the base slab and the underside of the top slab
    pub top_slab_clearance: f64,
    /// X offset of the interior beams from the pivot edge
    pub beam_origin_x: f64,
    /// Clear span the interior beams divide into thirds
    pub beam_bay_span: f64,
    /// Y offset of the interior beam bay
    pub beam_origin_y: f64,
    /// X offset of the first support leg
    pub leg_offset_x: f64,
    /// Clear gap between the two support legs
    pub leg_spacing: f64,
    /// Roles that must be present in the catalog
    pub required: Vec<Role>,
}

impl Archetype {
    /// Sloped-roof valve house founded on two support legs
    pub fn valve_house() -> Self {
        Self {
            name: "valve_house".to_string(),
            top_slab_clearance: 9.0,
            beam_origin_x: 2.0 + 16.0 / 12.0,
            beam_bay_span: 16.667 - 32.0 / 12.0,
            beam_origin_y: 16.0 / 12.0,
            leg_offset_x: 6.0,
            leg_spacing: 83.0 / 12.0,
            required: vec![Role::BaseSlab],
        }
    }

    /// Flat-roof monitoring vault with two interior beams
    pub fn monitoring_vault() -> Self {
        Self {
            name: "monitoring_vault".to_string(),
            ..Self::valve_house()
        }
    }

    /// Look up a preset by name
    pub fn by_name(name: &str) -> StabilityResult<Self> {
        match name {
            "valve_house" => Ok(Self::valve_house()),
            "monitoring_vault" => Ok(Self::monitoring_vault()),
            _ => Err(StabilityError::UnknownArchetype(name.to_string())),
        }
    }

    /// Check a set of roles satisfies this archetype: every required role and at least one wall
    pub fn check_roles<I>(&self, roles: I) -> StabilityResult<()>
    where
        I: IntoIterator<Item = Role> + Clone,
    {
        for required in &self.required {
            if !roles.clone().into_iter().any(|role| role == *required) {
                return Err(StabilityError::MissingRole(*required));
            }
        }
        if !roles.into_iter().any(|role| role.is_wall()) {
            return Err(StabilityError::NoWalls(self.name.clone()));
        }
        Ok(())
    }
}

impl Default for Archetype {
    fn default() -> Self {
        Self::valve_house()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_by_name() {
        assert_eq!(Archetype::by_name("valve_house").unwrap(), Archetype::valve_house());
        assert_eq!(Archetype::by_name("monitoring_vault").unwrap().name, "monitoring_vault");
        assert!(matches!(
            Archetype::by_name("silo"),
            Err(StabilityError::UnknownArchetype(_))
        ));
    }

    #[test]
    fn test_base_slab_required() {
        let err = Archetype::valve_house()
            .check_roles([Role::LeftWall, Role::TopSlab])
            .unwrap_err();
        assert!(matches!(err, StabilityError::MissingRole(Role::BaseSlab)));
    }

    #[test]
    fn test_wall_required() {
        let err = Archetype::valve_house()
            .check_roles([Role::BaseSlab, Role::TopSlab])
            .unwrap_err();
        assert!(matches!(err, StabilityError::NoWalls(_)));
        assert!(Archetype::valve_house()
            .check_roles([Role::BaseSlab, Role::RightWall])
            .is_ok());
    }

    #[test]
    fn test_leg_constants() {
        let arch = Archetype::valve_house();
        assert_eq!(arch.leg_offset_x, 6.0);
        assert!((arch.leg_spacing - 6.916666666666667).abs() < 1e-12);
    }
}
