//! Moments about the pivot axis
//!
//! The pivot is the horizontal edge through the origin parallel to global Y.
//! Gravity moments use the centroid's X coordinate as the arm; seismic
//! inertia and soil resultants act horizontally, so their arm is the height
//! Z above the pivot.

use serde::{Deserialize, Serialize};

use crate::loads::{ComponentLoad, LateralLoad};

/// A component's moments about the pivot (moment-accumulated stage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMoments {
    #[serde(flatten)]
    pub load: ComponentLoad,
    /// Horizontal distance from the pivot to the centroid
    pub weight_arm: f64,
    /// Resisting moment of the self-weight
    pub weight_moment: f64,
    /// Height of the centroid above the pivot
    pub inertia_arm: f64,
    /// Overturning moment of the seismic inertia (always negative or zero)
    pub inertia_moment: f64,
}

impl ComponentMoments {
    pub fn from_load(load: ComponentLoad) -> Self {
        let weight_arm = load.centroid.x;
        let inertia_arm = load.centroid.z;
        // Inertia may act in either direction; it is always taken as overturning
        let inertia_moment = load.inertia * inertia_arm * -1.0;
        Self {
            weight_moment: load.weight * weight_arm,
            weight_arm,
            inertia_arm,
            inertia_moment,
            load,
        }
    }
}

/// Sums of component moments plus the passive resistance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentTotals {
    /// Σ weight moments + passive moment
    pub resisting: f64,
    /// Σ inertia moments
    pub seismic_inertia: f64,
}

impl MomentTotals {
    pub fn accumulate(components: &[ComponentMoments], passive: &LateralLoad) -> Self {
        let (weight, inertia) = components.iter().fold((0.0, 0.0), |(w, i), c| {
            (w + c.weight_moment, i + c.inertia_moment)
        });
        Self {
            resisting: weight + passive.moment,
            seismic_inertia: inertia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Role;
    use crate::loads::PressureRegime;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn load(x: f64, z: f64, weight: f64, inertia: f64) -> ComponentLoad {
        ComponentLoad {
            id: "block".to_string(),
            role: Role::BaseSlab,
            volume: 1.0,
            centroid: Point3::new(x, 100.0, z),
            weight,
            inertia,
        }
    }

    #[test]
    fn test_arms_use_different_axes() {
        let m = ComponentMoments::from_load(load(6.0, 0.25, 1000.0, 200.0));
        assert_eq!(m.weight_arm, 6.0);
        assert_eq!(m.inertia_arm, 0.25);
        assert_relative_eq!(m.weight_moment, 6000.0);
        assert_relative_eq!(m.inertia_moment, -50.0);
    }

    #[test]
    fn test_inertia_overturns_below_pivot() {
        // Centroid below the pivot flips the sign
        let m = ComponentMoments::from_load(load(6.5, -2.0, 100.0, 10.0));
        assert_relative_eq!(m.inertia_moment, 20.0);
    }

    #[test]
    fn test_accumulate_includes_passive() {
        let components = vec![
            ComponentMoments::from_load(load(6.0, 0.25, 1000.0, 200.0)),
            ComponentMoments::from_load(load(11.75, 3.0, 500.0, 100.0)),
        ];
        let passive = LateralLoad::from_soil(PressureRegime::Passive, 350.0, 3.0, 5.0);
        let totals = MomentTotals::accumulate(&components, &passive);
        assert_relative_eq!(totals.resisting, 6000.0 + 5875.0 + passive.moment);
        assert_relative_eq!(totals.seismic_inertia, -50.0 - 300.0);
    }
}
