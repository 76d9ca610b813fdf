//! Overturning factor of safety

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{StabilityError, StabilityResult};
use crate::loads::LateralLoads;
use crate::moments::MomentTotals;

/// Outcome of the overturning check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Factor of safety at least 1.0
    Stable,
    /// Factor of safety below 1.0
    Unstable,
}

impl Classification {
    pub fn from_factor(factor_of_safety: f64) -> Self {
        if factor_of_safety >= 1.0 {
            Classification::Stable
        } else {
            Classification::Unstable
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, Classification::Stable)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Stable => f.write_str("stable"),
            Classification::Unstable => f.write_str("unstable"),
        }
    }
}

/// `|resisting / overturning|`, refusing a zero overturning moment
pub fn factor_of_safety(resisting: f64, overturning: f64) -> StabilityResult<f64> {
    if overturning == 0.0 {
        return Err(StabilityError::DegenerateLoad { overturning });
    }
    let ratio = (resisting / overturning).abs();
    if !ratio.is_finite() {
        return Err(StabilityError::DegenerateLoad { overturning });
    }
    Ok(ratio)
}

/// Final moments and safety factor (evaluated stage)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityEvaluation {
    /// Σ weight moments + passive moment
    pub resisting: f64,
    /// Σ component inertia moments
    pub seismic_inertia: f64,
    /// Active + seismic increment + seismic inertia
    pub overturning: f64,
    pub factor_of_safety: f64,
    pub classification: Classification,
}

impl StabilityEvaluation {
    /// Combine accumulated moments with the overturning soil loads
    pub fn evaluate(totals: &MomentTotals, lateral: &LateralLoads) -> StabilityResult<Self> {
        let overturning =
            lateral.active.moment + lateral.seismic_increment.moment + totals.seismic_inertia;
        Self::from_moments(totals.resisting, totals.seismic_inertia, overturning)
    }

    pub fn from_moments(
        resisting: f64,
        seismic_inertia: f64,
        overturning: f64,
    ) -> StabilityResult<Self> {
        let factor_of_safety = factor_of_safety(resisting, overturning)?;
        Ok(Self {
            resisting,
            seismic_inertia,
            overturning,
            factor_of_safety,
            classification: Classification::from_factor(factor_of_safety),
        })
    }

    pub fn is_stable(&self) -> bool {
        self.classification.is_stable()
    }

    /// Overturning total as a positive magnitude
    pub fn overturning_magnitude(&self) -> f64 {
        self.overturning.abs()
    }
}
