//! Result types for stability analysis

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::ResolvedComponent;
use crate::loads::LateralLoads;
use crate::moments::ComponentMoments;
use crate::stability::{Classification, StabilityEvaluation};

/// Complete record of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityReport {
    /// Archetype the catalog was placed with
    pub archetype: String,
    /// Components contributing to the moment sums
    pub components: Vec<ComponentMoments>,
    /// Components resolved but left out of the moment sums
    pub excluded: Vec<ResolvedComponent>,
    /// Active, seismic increment and passive soil loads
    pub lateral: LateralLoads,
    pub evaluation: StabilityEvaluation,
}

impl StabilityReport {
    pub fn factor_of_safety(&self) -> f64 {
        self.evaluation.factor_of_safety
    }

    pub fn is_stable(&self) -> bool {
        self.evaluation.is_stable()
    }

    /// Total self-weight of the contributing components
    pub fn total_weight(&self) -> f64 {
        self.components.iter().map(|c| c.load.weight).sum()
    }

    /// Component by display identifier
    pub fn component(&self, id: &str) -> Option<&ComponentMoments> {
        self.components.iter().find(|c| c.load.id == id)
    }

    /// Moments in kip-ft rounded for display
    pub fn summary(&self) -> ReportSummary {
        let e = &self.evaluation;
        ReportSummary {
            resisting_kip_ft: to_kip(e.resisting),
            seismic_inertia_kip_ft: to_kip(e.seismic_inertia),
            active_kip_ft: to_kip(self.lateral.active.moment),
            seismic_increment_kip_ft: to_kip(self.lateral.seismic_increment.moment),
            passive_kip_ft: to_kip(self.lateral.passive.moment),
            overturning_kip_ft: to_kip(e.overturning_magnitude()),
            factor_of_safety: e.factor_of_safety,
            classification: e.classification,
            num_components: self.components.len(),
        }
    }
}

/// Convert lb-ft to kip-ft, rounded to two decimals
fn to_kip(value: f64) -> f64 {
    (value / 1000.0 * 100.0).round() / 100.0
}

/// Human-readable moments in kilo-units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub resisting_kip_ft: f64,
    pub seismic_inertia_kip_ft: f64,
    pub active_kip_ft: f64,
    pub seismic_increment_kip_ft: f64,
    pub passive_kip_ft: f64,
    /// Magnitude of the overturning total
    pub overturning_kip_ft: f64,
    pub factor_of_safety: f64,
    pub classification: Classification,
    pub num_components: usize,
}

impl fmt::Display for StabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary();
        writeln!(f, "Archetype: {}", self.archetype)?;
        for c in &self.components {
            writeln!(
                f,
                "  {:<18} V={:>9.3} W={:>11.1} x={:>7.3} Mw={:>12.1} z={:>7.3} Mi={:>11.1}",
                c.load.id,
                c.load.volume,
                c.load.weight,
                c.weight_arm,
                c.weight_moment,
                c.inertia_arm,
                c.inertia_moment
            )?;
        }
        for c in &self.excluded {
            writeln!(f, "  {:<18} V={:>9.3} (excluded)", c.id, c.volume)?;
        }
        writeln!(f, "Resisting: {:.2} kip-ft", s.resisting_kip_ft)?;
        writeln!(f, "Seismic Inertia: {:.2} kip-ft", s.seismic_inertia_kip_ft)?;
        writeln!(f, "Active Force: {:.2} kip-ft", s.active_kip_ft)?;
        writeln!(f, "Eq Force: {:.2} kip-ft", s.seismic_increment_kip_ft)?;
        writeln!(f, "Passive Force: {:.2} kip-ft", s.passive_kip_ft)?;
        writeln!(f, "Overturning: {:.2} kip-ft", s.overturning_kip_ft)?;
        write!(
            f,
            "Factor of safety: {:.3} ({})",
            s.factor_of_safety, s.classification
        )
    }
}
