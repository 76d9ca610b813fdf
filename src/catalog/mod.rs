//! Component catalog
//!
//! A [`ComponentCatalog`] holds the nominal dimensions of every rigid
//! sub-volume of a structure, keyed by [`Role`]. Planning validates the
//! catalog against an [`Archetype`] and derives one [`SolidRequest`] per
//! component; resolving sends those requests to a geometry provider.

mod archetype;
mod placement;
mod role;
mod spec;

pub use archetype::Archetype;
pub use placement::{PlaceFn, PlacementContext, PlacementRegistry, PlacementRule};
pub use role::Role;
pub use spec::ComponentSpec;

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::error::{StabilityError, StabilityResult};
use crate::geometry::{GeometryError, GeometryProvider, SolidRequest};

/// Named set of component dimensions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentCatalog {
    components: BTreeMap<Role, ComponentSpec>,
}

impl ComponentCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a component
    pub fn insert(&mut self, role: Role, spec: ComponentSpec) -> Option<ComponentSpec> {
        self.components.insert(role, spec)
    }

    /// Builder-style insert
    pub fn with(mut self, role: Role, spec: ComponentSpec) -> Self {
        self.insert(role, spec);
        self
    }

    pub fn get(&self, role: Role) -> Option<&ComponentSpec> {
        self.components.get(&role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.components.contains_key(&role)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + Clone + '_ {
        self.components.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &ComponentSpec)> {
        self.components.iter().map(|(role, spec)| (*role, spec))
    }

    /// Validate the catalog and derive a solid request for every component.
    ///
    /// Dimensions are checked before any placement so a bad catalog never
    /// reaches the geometry provider.
    pub fn plan(
        &self,
        archetype: &Archetype,
        registry: &PlacementRegistry,
    ) -> StabilityResult<Vec<PlannedSolid>> {
        archetype.check_roles(self.roles())?;
        for (role, spec) in self.iter() {
            spec.validate(role)?;
        }

        let roles: BTreeSet<Role> = self.roles().collect();
        let order = registry.order(&roles)?;

        let mut placed: BTreeMap<Role, &ComponentSpec> = BTreeMap::new();
        let mut planned = Vec::with_capacity(order.len());
        for role in order {
            let spec = self
                .get(role)
                .ok_or(StabilityError::MissingRole(role))?;
            let rule = registry
                .rule(role)
                .ok_or_else(|| StabilityError::UnknownRole(role.tag().to_string()))?;
            let request = {
                let ctx = PlacementContext::new(role, archetype, &placed);
                (rule.place)(&ctx, spec)?
            };
            debug!("placed {} at {:?}", role, request.position);
            planned.push(PlannedSolid {
                id: spec.display_id(role),
                role,
                spec: spec.clone(),
                request,
            });
            placed.insert(role, spec);
        }
        Ok(planned)
    }
}

impl FromIterator<(Role, ComponentSpec)> for ComponentCatalog {
    fn from_iter<T: IntoIterator<Item = (Role, ComponentSpec)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

/// A component with its derived solid request (catalog-defined stage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSolid {
    pub id: String,
    pub role: Role,
    pub spec: ComponentSpec,
    pub request: SolidRequest,
}

impl PlannedSolid {
    /// Resolve volume and centroid through a geometry provider
    pub fn resolve<G: GeometryProvider + ?Sized>(
        &self,
        provider: &G,
    ) -> StabilityResult<ResolvedComponent> {
        let props = provider
            .create_solid(&self.request)
            .and_then(|props| {
                if !props.volume.is_finite() {
                    Err(GeometryError::NonFiniteVolume(props.volume))
                } else if props.volume <= 0.0 {
                    Err(GeometryError::NonPositiveVolume(props.volume))
                } else {
                    Ok(props)
                }
            })
            .map_err(|source| StabilityError::GeometryResolution {
                component: self.id.clone(),
                source,
            })?;

        Ok(ResolvedComponent {
            id: self.id.clone(),
            role: self.role,
            volume: props.volume,
            centroid: props.centroid,
        })
    }
}

/// A component with known volume and centroid (geometry-resolved stage)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub id: String,
    pub role: Role,
    /// Volume, strictly positive
    pub volume: f64,
    /// Centroid in the global frame
    pub centroid: Point3<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{AnalyticGeometry, SolidProperties};
    use approx::assert_relative_eq;

    /// Five-component box with an end-wall wedge
    fn sample_catalog() -> ComponentCatalog {
        ComponentCatalog::new()
            .with(Role::BaseSlab, ComponentSpec::new(12.0, 6.0, 0.5))
            .with(Role::LeftWall, ComponentSpec::new(0.5, 6.0, 3.0))
            .with(Role::RightWall, ComponentSpec::new(0.5, 6.0, 5.0))
            .with(Role::FrontWall, ComponentSpec::new(11.0, 0.5, 3.0))
            .with(Role::FrontWedge, ComponentSpec::new(11.0, 0.5, 2.0))
    }

    #[test]
    fn test_plan_and_resolve_sample() {
        let planned = sample_catalog()
            .plan(&Archetype::valve_house(), &PlacementRegistry::standard())
            .unwrap();
        assert_eq!(planned.len(), 5);
        assert_eq!(planned[0].role, Role::BaseSlab);

        let resolved: Vec<_> = planned
            .iter()
            .map(|p| p.resolve(&AnalyticGeometry))
            .collect::<StabilityResult<_>>()
            .unwrap();

        let base = &resolved[0];
        assert_eq!(base.id, "base slab");
        assert_relative_eq!(base.volume, 36.0);
        assert_eq!(base.centroid, Point3::new(6.0, 3.0, 0.25));

        let wedge = resolved.iter().find(|c| c.role == Role::FrontWedge).unwrap();
        assert_relative_eq!(wedge.volume, 5.5, epsilon = 1e-12);
        assert_relative_eq!(wedge.centroid.x, 7.833333333333333, epsilon = 1e-9);
        assert_relative_eq!(wedge.centroid.z, 4.166666666666667, epsilon = 1e-9);
    }

    #[test]
    fn test_plan_rejects_bad_dimension_before_placement() {
        let catalog = sample_catalog().with(Role::RightWall, ComponentSpec::new(0.5, 0.0, 5.0));
        let err = catalog
            .plan(&Archetype::valve_house(), &PlacementRegistry::standard())
            .unwrap_err();
        assert!(matches!(
            err,
            StabilityError::InvalidDimension { role: Role::RightWall, field: "width", .. }
        ));
    }

    #[test]
    fn test_plan_requires_base_slab() {
        let catalog = ComponentCatalog::new().with(Role::LeftWall, ComponentSpec::new(0.5, 6.0, 3.0));
        let err = catalog
            .plan(&Archetype::valve_house(), &PlacementRegistry::standard())
            .unwrap_err();
        assert!(matches!(err, StabilityError::MissingRole(Role::BaseSlab)));
    }

    struct ZeroVolume;

    impl GeometryProvider for ZeroVolume {
        fn create_solid(&self, request: &SolidRequest) -> Result<SolidProperties, GeometryError> {
            Ok(SolidProperties {
                volume: 0.0,
                centroid: request.position,
            })
        }
    }

    #[test]
    fn test_zero_volume_is_geometry_error() {
        let planned = sample_catalog()
            .plan(&Archetype::valve_house(), &PlacementRegistry::standard())
            .unwrap();
        let err = planned[0].resolve(&ZeroVolume).unwrap_err();
        match err {
            StabilityError::GeometryResolution { component, source } => {
                assert_eq!(component, "base slab");
                assert_eq!(source, GeometryError::NonPositiveVolume(0.0));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    struct Unbounded;

    impl GeometryProvider for Unbounded {
        fn create_solid(&self, request: &SolidRequest) -> Result<SolidProperties, GeometryError> {
            Ok(SolidProperties {
                volume: f64::INFINITY,
                centroid: request.position,
            })
        }
    }

    #[test]
    fn test_infinite_volume_is_not_reported_as_non_positive() {
        let planned = sample_catalog()
            .plan(&Archetype::valve_house(), &PlacementRegistry::standard())
            .unwrap();
        match planned[0].resolve(&Unbounded).unwrap_err() {
            StabilityError::GeometryResolution { source, .. } => {
                assert_eq!(source, GeometryError::NonFiniteVolume(f64::INFINITY));
                assert!(source.to_string().contains("non-finite"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_catalog_serializes_by_tag() {
        let catalog = ComponentCatalog::new().with(Role::BaseSlab, ComponentSpec::new(15.0, 73.0, 0.5));
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["bs"]["length"], 15.0);
    }
}
