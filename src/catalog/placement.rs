//! Per-role placement rules
//!
//! Each role owns a rule that turns its nominal dimensions into a
//! [`SolidRequest`], reading only the dimensions of the roles it declares in
//! `depends_on`. [`PlacementRegistry::order`] sorts the catalog so every
//! dependency is placed before the roles that read it.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use nalgebra::Point3;

use super::{Archetype, ComponentSpec, Role};
use crate::error::{StabilityError, StabilityResult};
use crate::geometry::{AxisRotation, SolidRequest};

/// Dimensions already placed, visible to a placement rule
pub struct PlacementContext<'a> {
    role: Role,
    archetype: &'a Archetype,
    placed: &'a BTreeMap<Role, &'a ComponentSpec>,
}

impl<'a> PlacementContext<'a> {
    pub fn new(
        role: Role,
        archetype: &'a Archetype,
        placed: &'a BTreeMap<Role, &'a ComponentSpec>,
    ) -> Self {
        Self {
            role,
            archetype,
            placed,
        }
    }

    pub fn archetype(&self) -> &Archetype {
        self.archetype
    }

    /// Dimensions of a previously placed dependency
    pub fn dependency(&self, role: Role) -> StabilityResult<&ComponentSpec> {
        self.placed
            .get(&role)
            .copied()
            .ok_or(StabilityError::MissingDependency {
                role: self.role,
                dependency: role,
            })
    }
}

/// Position derivation for one role
pub type PlaceFn = fn(&PlacementContext<'_>, &ComponentSpec) -> StabilityResult<SolidRequest>;

/// A placement rule and the roles it reads
#[derive(Clone, Copy)]
pub struct PlacementRule {
    pub depends_on: &'static [Role],
    pub place: PlaceFn,
}

impl PlacementRule {
    pub fn new(depends_on: &'static [Role], place: PlaceFn) -> Self {
        Self { depends_on, place }
    }
}

/// Mapping from role to placement rule
#[derive(Clone)]
pub struct PlacementRegistry {
    rules: HashMap<Role, PlacementRule>,
}

impl Default for PlacementRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlacementRegistry {
    /// Registry with no rules
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Rules for every built-in role
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(Role::BaseSlab, PlacementRule::new(&[], place_base_slab));
        registry.register(
            Role::TopSlab,
            PlacementRule::new(&[Role::BaseSlab], place_top_slab),
        );
        registry.register(
            Role::LeftWall,
            PlacementRule::new(&[Role::BaseSlab], place_left_wall),
        );
        registry.register(
            Role::RightWall,
            PlacementRule::new(&[Role::BaseSlab], place_right_wall),
        );
        registry.register(
            Role::FrontWall,
            PlacementRule::new(&[Role::BaseSlab, Role::LeftWall], place_front_wall),
        );
        registry.register(
            Role::BackWall,
            PlacementRule::new(&[Role::BaseSlab, Role::LeftWall], place_back_wall),
        );
        registry.register(
            Role::FrontWedge,
            PlacementRule::new(
                &[Role::BaseSlab, Role::LeftWall, Role::FrontWall],
                place_front_wedge,
            ),
        );
        registry.register(
            Role::BackWedge,
            PlacementRule::new(
                &[Role::BaseSlab, Role::LeftWall, Role::BackWall],
                place_back_wedge,
            ),
        );
        registry.register(
            Role::InteriorBeam1,
            PlacementRule::new(&[Role::BaseSlab], place_interior_beam_1),
        );
        registry.register(
            Role::InteriorBeam2,
            PlacementRule::new(&[Role::BaseSlab], place_interior_beam_2),
        );
        registry.register(Role::SupportLeg1, PlacementRule::new(&[], place_support_leg_1));
        registry.register(
            Role::SupportLeg2,
            PlacementRule::new(&[Role::SupportLeg1], place_support_leg_2),
        );
        registry
    }

    /// Register or replace the rule for a role
    pub fn register(&mut self, role: Role, rule: PlacementRule) {
        self.rules.insert(role, rule);
    }

    pub fn rule(&self, role: Role) -> Option<&PlacementRule> {
        self.rules.get(&role)
    }

    /// Order roles so that every dependency precedes its dependents.
    ///
    /// Ties are broken by [`Role`] ordering so the result is deterministic.
    pub fn order(&self, roles: &BTreeSet<Role>) -> StabilityResult<Vec<Role>> {
        let mut pending: BTreeMap<Role, &'static [Role]> = BTreeMap::new();
        for &role in roles {
            let rule = self
                .rule(role)
                .ok_or_else(|| StabilityError::UnknownRole(role.tag().to_string()))?;
            if let Some(missing) = rule.depends_on.iter().copied().find(|dep| !roles.contains(dep)) {
                return Err(StabilityError::MissingDependency {
                    role,
                    dependency: missing,
                });
            }
            pending.insert(role, rule.depends_on);
        }

        let mut ordered = Vec::with_capacity(pending.len());
        let mut placed: BTreeSet<Role> = BTreeSet::new();
        while !pending.is_empty() {
            let ready = pending
                .iter()
                .find(|(_, deps)| deps.iter().all(|dep| placed.contains(dep)))
                .map(|(role, _)| *role);

            match ready {
                Some(role) => {
                    pending.remove(&role);
                    placed.insert(role);
                    ordered.push(role);
                }
                None => {
                    // Only reachable through a cyclic custom registration
                    let blocked = pending.iter().find_map(|(&role, deps)| {
                        deps.iter()
                            .copied()
                            .find(|dep| !placed.contains(dep))
                            .map(|dependency| StabilityError::MissingDependency { role, dependency })
                    });
                    if let Some(err) = blocked {
                        return Err(err);
                    }
                    break;
                }
            }
        }
        Ok(ordered)
    }
}

fn place_base_slab(_ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    Ok(SolidRequest::boxed(
        Point3::new(spec.length / 2.0, spec.width / 2.0, spec.height / 2.0),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_top_slab(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    let soffit = bs.height + ctx.archetype().top_slab_clearance;
    let request = SolidRequest::boxed(
        Point3::new(spec.length / 2.0, spec.width / 2.0, spec.height / 2.0 + soffit),
        spec.length,
        spec.width,
        spec.height,
    );
    // Hinged about the far upper edge to model a sloped roof
    Ok(match spec.angle {
        Some(angle) => request.with_rotation(AxisRotation::new(
            Point3::new(spec.length, spec.width, soffit),
            Point3::new(spec.length, spec.width + 2.0, soffit),
            angle,
        )),
        None => request,
    })
}

fn place_left_wall(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    Ok(SolidRequest::boxed(
        Point3::new(spec.length / 2.0, spec.width / 2.0, spec.height / 2.0 + bs.height),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_right_wall(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    Ok(SolidRequest::boxed(
        Point3::new(
            bs.length - spec.length / 2.0,
            spec.width / 2.0,
            spec.height / 2.0 + bs.height,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_front_wall(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    let lw = ctx.dependency(Role::LeftWall)?;
    Ok(SolidRequest::boxed(
        Point3::new(
            spec.length / 2.0 + lw.length,
            spec.width / 2.0,
            spec.height / 2.0 + bs.height,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_back_wall(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    let lw = ctx.dependency(Role::LeftWall)?;
    Ok(SolidRequest::boxed(
        Point3::new(
            spec.length / 2.0 + lw.length,
            bs.width - spec.width / 2.0,
            spec.height / 2.0 + bs.height,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}

/// Wedge capping an end wall; plan dimensions come from the wall, not the wedge
fn place_wedge(
    ctx: &PlacementContext<'_>,
    spec: &ComponentSpec,
    wall: Role,
    y: impl Fn(&ComponentSpec, &ComponentSpec) -> f64,
) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    let lw = ctx.dependency(Role::LeftWall)?;
    let parent = ctx.dependency(wall)?;
    Ok(SolidRequest::wedge(
        Point3::new(
            parent.length / 2.0 + lw.length,
            y(bs, parent),
            parent.height + bs.height + spec.height / 2.0,
        ),
        -parent.length,
        parent.width,
        spec.height,
    ))
}

fn place_front_wedge(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    place_wedge(ctx, spec, Role::FrontWall, |_, fw| fw.width / 2.0)
}

fn place_back_wedge(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    place_wedge(ctx, spec, Role::BackWall, |bs, bw| bs.width - bw.width / 2.0)
}

fn place_interior_beam(
    ctx: &PlacementContext<'_>,
    spec: &ComponentSpec,
    bay_fraction: f64,
) -> StabilityResult<SolidRequest> {
    let bs = ctx.dependency(Role::BaseSlab)?;
    let arch = ctx.archetype();
    Ok(SolidRequest::boxed(
        Point3::new(
            spec.length / 2.0 + arch.beam_origin_x,
            bay_fraction * arch.beam_bay_span + arch.beam_origin_y,
            spec.height / 2.0 + bs.height,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_interior_beam_1(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    place_interior_beam(ctx, spec, 2.0 / 3.0)
}

fn place_interior_beam_2(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    place_interior_beam(ctx, spec, 1.0 / 3.0)
}

fn place_support_leg_1(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    Ok(SolidRequest::boxed(
        Point3::new(
            spec.length / 2.0 + ctx.archetype().leg_offset_x,
            spec.width / 2.0,
            -spec.height / 2.0,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}

fn place_support_leg_2(ctx: &PlacementContext<'_>, spec: &ComponentSpec) -> StabilityResult<SolidRequest> {
    let leg1 = ctx.dependency(Role::SupportLeg1)?;
    let arch = ctx.archetype();
    Ok(SolidRequest::boxed(
        Point3::new(
            spec.length / 2.0 + leg1.length + arch.leg_spacing + arch.leg_offset_x,
            spec.width / 2.0,
            -spec.height / 2.0,
        ),
        spec.length,
        spec.width,
        spec.height,
    ))
}
