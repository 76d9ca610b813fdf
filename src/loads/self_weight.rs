//! Self-weight and pseudo-static seismic inertia of components

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::catalog::{ResolvedComponent, Role};
use crate::properties::SiteProperties;

/// Weight of a solid of the given volume
pub fn self_weight(volume: f64, unit_weight: f64) -> f64 {
    volume * unit_weight
}

/// Horizontal inertia force under an effective ground acceleration coefficient
pub fn seismic_inertia(weight: f64, pga_eff: f64) -> f64 {
    weight * pga_eff
}

/// A component with its gravity and inertia loads (load-resolved stage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentLoad {
    pub id: String,
    pub role: Role,
    pub volume: f64,
    pub centroid: Point3<f64>,
    /// Self-weight, acting down through the centroid
    pub weight: f64,
    /// Seismic inertia, acting horizontally through the centroid
    pub inertia: f64,
}

impl ComponentLoad {
    pub fn from_resolved(component: &ResolvedComponent, props: &SiteProperties) -> Self {
        let weight = self_weight(component.volume, props.g_conc);
        Self {
            id: component.id.clone(),
            role: component.role,
            volume: component.volume,
            centroid: component.centroid,
            weight,
            inertia: seismic_inertia(weight, props.pga_eff),
        }
    }
}
