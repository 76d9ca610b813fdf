//! Vault Stability - overturning analysis for buried gravity structures
//!
//! This library checks a rigid valve house or vault against overturning
//! about one horizontal base edge, combining:
//! - Self-weight of every slab, wall, wedge and beam
//! - Pseudo-static seismic inertia
//! - Active, seismic increment and passive soil pressure
//!
//! Volumes and centroids come from a [`geometry::GeometryProvider`]; the
//! bundled [`geometry::AnalyticGeometry`] handles boxes and wedges in closed
//! form.
//!
//! ## Example
//! ```rust
//! use vault_stability::prelude::*;
//!
//! let mut model = StabilityModel::new().with_properties(SiteProperties::camanche());
//!
//! model
//!     .add_component(Role::BaseSlab, ComponentSpec::new(15.0, 73.0, 0.5))
//!     .add_component(Role::LeftWall, ComponentSpec::new(0.5, 73.0, 8.0))
//!     .add_component(Role::RightWall, ComponentSpec::new(0.5, 73.0, 9.0));
//!
//! let report = model.analyze().unwrap();
//! println!("FS = {:.2}", report.factor_of_safety());
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod loads;
pub mod moments;
pub mod properties;
pub mod results;
pub mod stability;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisOptions, LegPolicy, StabilityModel};
    pub use crate::catalog::{Archetype, ComponentCatalog, ComponentSpec, Role};
    pub use crate::config::AnalysisInput;
    pub use crate::error::{StabilityError, StabilityResult};
    pub use crate::geometry::{AnalyticGeometry, GeometryProvider, SolidRequest};
    pub use crate::loads::{LateralLoad, LateralLoads, PressureRegime};
    pub use crate::properties::SiteProperties;
    pub use crate::results::{ReportSummary, StabilityReport};
    pub use crate::stability::{Classification, StabilityEvaluation};
}
