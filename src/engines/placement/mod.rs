//! Geometric placement of normalized mechanisms.
//!
//! Two passes over the graph: gear-train propagation walks mesh and mount
//! edges outward from the motor, then each linkage's coupler point is solved
//! by circle-circle intersection. The result is a [`MechanismLayout`] — the
//! decoded mechanism itself is never mutated, so a half-solved mechanism is
//! not representable.

pub mod circle;

pub use circle::Circle;

use crate::error::{GearworksError, Result};
use crate::mechanism::{EdgeKind, Mechanism, MechanismNode, PivotAnchor};
use crate::types::{NodeId, Point};
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedGear {
    pub center: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedPivot {
    pub position: Point,
}

/// A linkage realized in the plane: anchored at `position_a`, pointing at
/// the solved coupler, with `position_b` one bar length along the body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedLinkage {
    pub position_a: Point,
    pub position_b: Point,
    pub angle: f64,
}

impl PlacedLinkage {
    pub fn center(&self) -> Point {
        (self.position_a + self.position_b) / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    Gear(PlacedGear),
    Pivot(PlacedPivot),
    Linkage(PlacedLinkage),
}

/// Placed geometry per surviving node. Produced only by [`place`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MechanismLayout {
    placements: SecondaryMap<NodeId, Placement>,
}

impl MechanismLayout {
    pub fn get(&self, id: NodeId) -> Option<&Placement> {
        self.placements.get(id)
    }

    pub fn gear_center(&self, id: NodeId) -> Option<Point> {
        match self.placements.get(id) {
            Some(Placement::Gear(gear)) => Some(gear.center),
            _ => None,
        }
    }

    pub fn pivot_position(&self, id: NodeId) -> Option<Point> {
        match self.placements.get(id) {
            Some(Placement::Pivot(pivot)) => Some(pivot.position),
            _ => None,
        }
    }

    pub fn linkage(&self, id: NodeId) -> Option<&PlacedLinkage> {
        match self.placements.get(id) {
            Some(Placement::Linkage(linkage)) => Some(linkage),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Placement)> {
        self.placements.iter()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

/// Assign planar coordinates to every node of a normalized mechanism, with
/// the motor at `motor_position`.
///
/// Free pivots keep their decoded position; mounted pivots and downstream
/// gears follow the gear train; linkage couplers come from circle-circle
/// intersection, keeping the greater-y candidate (fixed convention). An
/// unreachable coupler is reported as [`GearworksError::InfeasibleLinkage`]
/// and a pivot that lost its carrier gear as
/// [`GearworksError::UnanchoredPivot`]; no substitute position is guessed
/// for either.
pub fn place(mechanism: &Mechanism, motor_position: Point) -> Result<MechanismLayout> {
    let mut layout = MechanismLayout::default();

    for &pivot_id in mechanism.pivots() {
        if let Some(MechanismNode::Pivot(pivot)) = mechanism.node(pivot_id) {
            if let PivotAnchor::Free { position } = pivot.anchor {
                layout
                    .placements
                    .insert(pivot_id, Placement::Pivot(PlacedPivot { position }));
            }
        }
    }

    if let Some(motor) = mechanism.motor() {
        propagate_gears(mechanism, motor, motor_position, &mut layout);
    }

    for &pivot_id in mechanism.pivots() {
        if layout.pivot_position(pivot_id).is_none() {
            return Err(GearworksError::UnanchoredPivot {
                pivot: mechanism.name(pivot_id).to_string(),
            });
        }
    }

    for &linkage_id in mechanism.linkages() {
        solve_linkage(mechanism, linkage_id, &mut layout)?;
    }

    Ok(layout)
}

/// Depth-first walk of the gear train, each gear visited once. Mesh edges
/// place the neighboring gear at the sum of pitch radii along the phase
/// angle; mount edges place the pivot on the gear's face.
fn propagate_gears(
    mechanism: &Mechanism,
    motor: NodeId,
    motor_position: Point,
    layout: &mut MechanismLayout,
) {
    let mut visited: HashSet<NodeId> = HashSet::from([motor]);
    let mut stack = vec![(motor, motor_position)];

    while let Some((gear_id, position)) = stack.pop() {
        let Some(gear) = mechanism.node(gear_id).and_then(MechanismNode::as_gear) else {
            unreachable!("gear walk reached non-gear node {:?}", gear_id);
        };
        let own_radius = gear.pitch_radius();
        layout
            .placements
            .insert(gear_id, Placement::Gear(PlacedGear { center: position }));

        for (next, edge) in mechanism.graph().neighbors(gear_id) {
            match *edge {
                EdgeKind::Mesh { angle } => {
                    let Some(other) = mechanism.node(*next).and_then(MechanismNode::as_gear)
                    else {
                        continue;
                    };
                    if !visited.insert(*next) {
                        continue;
                    }
                    let reach = own_radius + other.pitch_radius();
                    let center = position + reach * Point::new(angle.cos(), angle.sin());
                    stack.push((*next, center));
                }
                EdgeKind::Mount { angle, radius } => {
                    let offset = radius * own_radius * Point::new(angle.cos(), angle.sin());
                    layout.placements.insert(
                        *next,
                        Placement::Pivot(PlacedPivot {
                            position: position + offset,
                        }),
                    );
                }
                EdgeKind::Attachment => {}
            }
        }
    }
}

/// Solve one linkage's coupler point from its two endpoint pivots. Both
/// constraint circles carry the bar length, so the solved far endpoint lands
/// on the coupler.
fn solve_linkage(
    mechanism: &Mechanism,
    linkage_id: NodeId,
    layout: &mut MechanismLayout,
) -> Result<()> {
    let Some(linkage) = mechanism.node(linkage_id).and_then(MechanismNode::as_linkage) else {
        unreachable!("linkage collection held non-linkage node {:?}", linkage_id);
    };
    let Some(anchor_a) = layout.pivot_position(linkage.pivot_a) else {
        unreachable!("linkage {} endpoint pivot unplaced", linkage.name);
    };
    let Some(anchor_b) = layout.pivot_position(linkage.pivot_b) else {
        unreachable!("linkage {} endpoint pivot unplaced", linkage.name);
    };

    let circle_a = Circle::new(anchor_a, linkage.length);
    let circle_b = Circle::new(anchor_b, linkage.length);
    let Some((p1, p2)) = circle_a.intersect(&circle_b) else {
        let distance = (anchor_b - anchor_a).length();
        log::warn!(
            "linkage {} infeasible: pivots {:.4} apart, reach {:.4}",
            linkage.name,
            distance,
            2.0 * linkage.length
        );
        return Err(GearworksError::InfeasibleLinkage {
            linkage: linkage.name.clone(),
            distance,
            reach: 2.0 * linkage.length,
        });
    };
    let coupler = if p1.y > p2.y { p1 } else { p2 };

    let direction = coupler - anchor_a;
    let angle = direction.y.atan2(direction.x);
    let position_b = anchor_a + linkage.length * Point::new(angle.cos(), angle.sin());
    layout.placements.insert(
        linkage_id,
        Placement::Linkage(PlacedLinkage {
            position_a: anchor_a,
            position_b,
            angle,
        }),
    );
    Ok(())
}
