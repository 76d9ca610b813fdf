//! Analysis input loading
//!
//! Input files are JSON documents:
//!
//! ```json
//! {
//!   "archetype": "valve_house",
//!   "properties": { "g_conc": 150, "pga_eff": 0.2, "...": 0 },
//!   "components": { "bs": { "height": 0.5, "width": 73, "length": 15 } }
//! }
//! ```
//!
//! Parsing happens in two steps so that a missing property or unknown tag is
//! reported as a configuration error rather than a JSON error.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Archetype, ComponentCatalog, ComponentSpec, Role};
use crate::error::{StabilityError, StabilityResult};
use crate::properties::SiteProperties;

fn default_archetype() -> String {
    "valve_house".to_string()
}

/// Raw analysis input as it appears on disk or over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(default = "default_archetype")]
    pub archetype: String,
    pub properties: HashMap<String, f64>,
    pub components: BTreeMap<String, ComponentSpec>,
}

/// Validated analysis input
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisInput {
    pub archetype: Archetype,
    pub properties: SiteProperties,
    pub catalog: ComponentCatalog,
}

impl TryFrom<InputDocument> for AnalysisInput {
    type Error = StabilityError;

    fn try_from(doc: InputDocument) -> StabilityResult<Self> {
        let archetype = Archetype::by_name(&doc.archetype)?;
        let properties = SiteProperties::from_map(&doc.properties)?;
        let catalog = doc
            .components
            .into_iter()
            .map(|(tag, spec)| Ok((tag.parse::<Role>()?, spec)))
            .collect::<StabilityResult<ComponentCatalog>>()?;
        Ok(Self {
            archetype,
            properties,
            catalog,
        })
    }
}

impl From<&AnalysisInput> for InputDocument {
    fn from(input: &AnalysisInput) -> Self {
        Self {
            archetype: input.archetype.name.clone(),
            properties: input.properties.to_map(),
            components: input
                .catalog
                .iter()
                .map(|(role, spec)| (role.tag().to_string(), spec.clone()))
                .collect(),
        }
    }
}

impl AnalysisInput {
    pub fn new(archetype: Archetype, properties: SiteProperties, catalog: ComponentCatalog) -> Self {
        Self {
            archetype,
            properties,
            catalog,
        }
    }

    /// Parse a JSON document
    pub fn from_json_str(json: &str) -> StabilityResult<Self> {
        let doc: InputDocument = serde_json::from_str(json)?;
        doc.try_into()
    }

    /// Load a JSON document from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> StabilityResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> StabilityResult<String> {
        Ok(serde_json::to_string_pretty(&InputDocument::from(self))?)
    }

    /// Camanche valve house: sloped roof, end-wall wedges, two support legs
    pub fn camanche_valve_house() -> Self {
        let catalog = ComponentCatalog::new()
            .with(Role::BaseSlab, ComponentSpec::new(15.0, 73.0, 0.5))
            .with(
                Role::TopSlab,
                ComponentSpec::new(15.0, 73.0, 0.5).with_angle(-(1.0_f64 / 15.0).atan()),
            )
            .with(Role::FrontWall, ComponentSpec::new(14.0, 0.5, 8.0))
            .with(Role::BackWall, ComponentSpec::new(14.0, 0.5, 8.0))
            .with(Role::LeftWall, ComponentSpec::new(0.5, 73.0, 8.0))
            .with(Role::RightWall, ComponentSpec::new(0.5, 73.0, 9.0))
            .with(Role::FrontWedge, ComponentSpec::new(14.0, 0.5, 1.0))
            .with(Role::BackWedge, ComponentSpec::new(14.0, 0.5, 1.0))
            .with(Role::SupportLeg1, ComponentSpec::new(1.0, 73.0, 104.0 / 12.0))
            .with(Role::SupportLeg2, ComponentSpec::new(1.0, 73.0, 104.0 / 12.0));
        Self::new(Archetype::valve_house(), SiteProperties::camanche(), catalog)
    }

    /// Seepage monitoring vault: flat roof, thick walls, two interior beams
    pub fn seepage_monitoring_vault() -> Self {
        let wall = 16.0 / 12.0;
        let catalog = ComponentCatalog::new()
            .with(Role::BaseSlab, ComponentSpec::new(10.667, 16.667, 1.5))
            .with(Role::TopSlab, ComponentSpec::new(10.667, 16.667, 0.5))
            .with(Role::FrontWall, ComponentSpec::new(10.667 - 2.0 * wall, wall, 9.0))
            .with(Role::BackWall, ComponentSpec::new(10.667 - 2.0 * wall, wall, 9.0))
            .with(Role::LeftWall, ComponentSpec::new(wall, 16.667, 9.0))
            .with(Role::RightWall, ComponentSpec::new(wall, 16.667, 9.0))
            .with(Role::InteriorBeam1, ComponentSpec::new(10.667 - 2.0 - 2.0, 2.0, 2.0))
            .with(Role::InteriorBeam2, ComponentSpec::new(10.667 - 2.0 - 2.0, 2.0, 2.0));
        Self::new(Archetype::monitoring_vault(), SiteProperties::camanche(), catalog)
    }
}
