//! Analysis options and the stability pipeline
//!
//! The pipeline runs strictly forward:
//! catalog → geometry → loads → moments → evaluation.
//! Every stage produces a new record; nothing earlier is mutated.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    Archetype, ComponentCatalog, ComponentSpec, PlacementRegistry, ResolvedComponent, Role,
};
use crate::config::AnalysisInput;
use crate::error::StabilityResult;
use crate::geometry::{AnalyticGeometry, GeometryProvider};
use crate::loads::{ComponentLoad, LateralLoads};
use crate::moments::{ComponentMoments, MomentTotals};
use crate::properties::SiteProperties;
use crate::results::StabilityReport;
use crate::stability::StabilityEvaluation;

/// Whether support legs carry load in the moment sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegPolicy {
    /// Legs are resolved but left out of the moment sums
    #[default]
    Exclude,
    /// Legs contribute weight and inertia like any other component
    Include,
}

/// Options for a stability analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Support leg treatment
    #[serde(default)]
    pub leg_policy: LegPolicy,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let support legs contribute to the moment sums
    pub fn with_legs(mut self) -> Self {
        self.leg_policy = LegPolicy::Include;
        self
    }

    fn contributes(&self, role: Role) -> bool {
        !role.is_support_leg() || self.leg_policy == LegPolicy::Include
    }
}

/// Run the full pipeline for an analysis input
pub fn analyze<G: GeometryProvider + ?Sized>(
    input: &AnalysisInput,
    provider: &G,
    options: &AnalysisOptions,
) -> StabilityResult<StabilityReport> {
    run(
        &input.catalog,
        &input.archetype,
        &input.properties,
        &PlacementRegistry::standard(),
        provider,
        options,
    )
}

fn run<G: GeometryProvider + ?Sized>(
    catalog: &ComponentCatalog,
    archetype: &Archetype,
    props: &SiteProperties,
    registry: &PlacementRegistry,
    provider: &G,
    options: &AnalysisOptions,
) -> StabilityResult<StabilityReport> {
    props.validate()?;

    let planned = catalog.plan(archetype, registry)?;
    info!(
        "analyzing '{}' with {} components",
        archetype.name,
        planned.len()
    );

    let resolved = planned
        .iter()
        .map(|solid| solid.resolve(provider))
        .collect::<StabilityResult<Vec<_>>>()?;

    let (active, excluded): (Vec<ResolvedComponent>, Vec<ResolvedComponent>) = resolved
        .into_iter()
        .partition(|component| options.contributes(component.role));
    for component in &excluded {
        debug!("excluding '{}' from moment sums", component.id);
    }

    let components: Vec<ComponentMoments> = active
        .iter()
        .map(|component| ComponentMoments::from_load(ComponentLoad::from_resolved(component, props)))
        .collect();

    let lateral = LateralLoads::from_properties(props);
    for load in lateral.iter() {
        debug!(
            "{}: force={:.2}, arm={:.3}, moment={:.2}",
            load.id, load.force, load.arm, load.moment
        );
    }

    let totals = MomentTotals::accumulate(&components, &lateral.passive);
    let evaluation = StabilityEvaluation::evaluate(&totals, &lateral)?;
    info!(
        "resisting={:.2} kip-ft, overturning={:.2} kip-ft, FS={:.3} ({})",
        evaluation.resisting / 1000.0,
        evaluation.overturning / 1000.0,
        evaluation.factor_of_safety,
        evaluation.classification
    );

    Ok(StabilityReport {
        archetype: archetype.name.clone(),
        components,
        excluded,
        lateral,
        evaluation,
    })
}

/// Builder for a single structure's stability analysis
#[derive(Clone)]
pub struct StabilityModel {
    pub catalog: ComponentCatalog,
    pub archetype: Archetype,
    pub properties: SiteProperties,
    registry: PlacementRegistry,
}

impl Default for StabilityModel {
    fn default() -> Self {
        Self::new()
    }
}

impl StabilityModel {
    /// Empty valve-house model with reference site properties
    pub fn new() -> Self {
        Self {
            catalog: ComponentCatalog::new(),
            archetype: Archetype::valve_house(),
            properties: SiteProperties::reference(),
            registry: PlacementRegistry::standard(),
        }
    }

    pub fn from_input(input: AnalysisInput) -> Self {
        Self {
            catalog: input.catalog,
            archetype: input.archetype,
            properties: input.properties,
            registry: PlacementRegistry::standard(),
        }
    }

    pub fn with_properties(mut self, properties: SiteProperties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = archetype;
        self
    }

    /// Replace the placement rules (e.g. to register a custom rule)
    pub fn with_registry(mut self, registry: PlacementRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Add a component to the catalog
    pub fn add_component(&mut self, role: Role, spec: ComponentSpec) -> &mut Self {
        self.catalog.insert(role, spec);
        self
    }

    /// Analyze with analytic geometry and default options
    pub fn analyze(&self) -> StabilityResult<StabilityReport> {
        self.analyze_with(&AnalyticGeometry, &AnalysisOptions::default())
    }

    /// Analyze with a specific geometry provider and options
    pub fn analyze_with<G: GeometryProvider + ?Sized>(
        &self,
        provider: &G,
        options: &AnalysisOptions,
    ) -> StabilityResult<StabilityReport> {
        run(
            &self.catalog,
            &self.archetype,
            &self.properties,
            &self.registry,
            provider,
            options,
        )
    }
}
