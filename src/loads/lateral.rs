//! Lateral soil pressure resultants

use serde::{Deserialize, Serialize};

use crate::properties::SiteProperties;

/// Pressure regime acting on the structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureRegime {
    /// Static active earth pressure, pushes the structure over
    Active,
    /// Seismic increment of earth pressure, pushes the structure over
    SeismicIncrement,
    /// Passive resistance of the embedment, holds the structure back
    Passive,
}

impl PressureRegime {
    pub fn id(&self) -> &'static str {
        match self {
            PressureRegime::Active => "active force",
            PressureRegime::SeismicIncrement => "eq force",
            PressureRegime::Passive => "passive force",
        }
    }

    /// +1 for resisting, -1 for overturning
    pub fn sign(&self) -> f64 {
        match self {
            PressureRegime::Active | PressureRegime::SeismicIncrement => -1.0,
            PressureRegime::Passive => 1.0,
        }
    }

    /// Height of the resultant above the pivot as a fraction of the retained height.
    ///
    /// Active is a triangle growing with depth (h/3). The seismic increment
    /// and passive resultants are taken at 2h/3.
    pub fn arm_fraction(&self) -> f64 {
        match self {
            PressureRegime::Active => 1.0 / 3.0,
            PressureRegime::SeismicIncrement | PressureRegime::Passive => 2.0 / 3.0,
        }
    }
}

/// Resultant of a triangular soil pressure distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralLoad {
    pub id: String,
    pub regime: PressureRegime,
    /// Signed resultant force
    pub force: f64,
    /// Height of the resultant above the pivot
    pub arm: f64,
    /// force x arm
    pub moment: f64,
}

impl LateralLoad {
    /// Resultant of `γ` acting over height `h` on a contact width `w`: `F = ½ γ h² w`
    pub fn from_soil(regime: PressureRegime, unit_weight: f64, height: f64, width: f64) -> Self {
        let force = 0.5 * unit_weight * height.powi(2) * width * regime.sign();
        let arm = regime.arm_fraction() * height;
        Self {
            id: regime.id().to_string(),
            regime,
            force,
            arm,
            moment: force * arm,
        }
    }
}

/// The three soil loads of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralLoads {
    pub active: LateralLoad,
    pub seismic_increment: LateralLoad,
    pub passive: LateralLoad,
}

impl LateralLoads {
    pub fn from_properties(props: &SiteProperties) -> Self {
        Self {
            active: LateralLoad::from_soil(
                PressureRegime::Active,
                props.g_active,
                props.g_active_height,
                props.soil_width,
            ),
            seismic_increment: LateralLoad::from_soil(
                PressureRegime::SeismicIncrement,
                props.g_eq,
                props.g_eq_height,
                props.soil_width,
            ),
            passive: LateralLoad::from_soil(
                PressureRegime::Passive,
                props.g_passive,
                props.g_passive_height,
                props.soil_width,
            ),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LateralLoad> {
        [&self.active, &self.seismic_increment, &self.passive].into_iter()
    }
}
