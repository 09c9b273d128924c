//! Mechanism entities and the decoded-mechanism container.
//!
//! A [`Mechanism`] is the phenotype a genome decodes into: an arena of typed
//! nodes (gears, pivots, linkages), a bidirected graph of typed edges over
//! those nodes, and the drivetrain root. Entities are structural only; all
//! realized geometry lives in the placement layout.

pub mod gear;
pub mod linkage;
pub mod pivot;

pub use gear::Gear;
pub use linkage::Linkage;
pub use pivot::{Pivot, PivotAnchor};

use crate::graph::BidiGraph;
use crate::types::{NodeId, Point};
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

/// A node of the mechanism graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MechanismNode {
    Gear(Gear),
    Pivot(Pivot),
    Linkage(Linkage),
}

impl MechanismNode {
    /// Stable human-readable name, unique within one mechanism.
    pub fn name(&self) -> &str {
        match self {
            MechanismNode::Gear(gear) => &gear.name,
            MechanismNode::Pivot(pivot) => &pivot.name,
            MechanismNode::Linkage(linkage) => &linkage.name,
        }
    }

    pub fn as_gear(&self) -> Option<&Gear> {
        match self {
            MechanismNode::Gear(gear) => Some(gear),
            _ => None,
        }
    }

    pub fn as_pivot(&self) -> Option<&Pivot> {
        match self {
            MechanismNode::Pivot(pivot) => Some(pivot),
            _ => None,
        }
    }

    pub fn as_linkage(&self) -> Option<&Linkage> {
        match self {
            MechanismNode::Linkage(linkage) => Some(linkage),
            _ => None,
        }
    }
}

/// Meaning of an edge between two mechanism nodes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Gear-to-gear teeth engagement at a phase angle (radians).
    Mesh { angle: f64 },
    /// Gear-to-pivot mounting at `angle` radians and `radius` as a fraction
    /// of the gear's pitch radius.
    Mount { angle: f64, radius: f64 },
    /// Pivot-to-linkage endpoint attachment.
    Attachment,
}

/// A decoded mechanism: entity arena, typed graph, creation-ordered entity
/// collections, and the drivetrain root.
///
/// Exclusively owned by whoever decoded or built it; entities are created by
/// the builder methods, removed only by [`remove_node`](Self::remove_node),
/// and never shared between mechanisms.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Mechanism {
    nodes: SlotMap<NodeId, MechanismNode>,
    graph: BidiGraph<EdgeKind>,
    gears: Vec<NodeId>,
    pivots: Vec<NodeId>,
    linkages: Vec<NodeId>,
    motor: Option<NodeId>,
}

impl Mechanism {
    pub fn new() -> Self {
        Self::default()
    }

    /// The drivetrain root: the first gear added, if any survives.
    pub fn motor(&self) -> Option<NodeId> {
        self.motor
    }

    pub fn graph(&self) -> &BidiGraph<EdgeKind> {
        &self.graph
    }

    pub fn node(&self, id: NodeId) -> Option<&MechanismNode> {
        self.nodes.get(id)
    }

    /// Name of a live node; empty for a dead handle.
    pub fn name(&self, id: NodeId) -> &str {
        self.nodes.get(id).map(MechanismNode::name).unwrap_or("")
    }

    pub fn gears(&self) -> &[NodeId] {
        &self.gears
    }

    pub fn pivots(&self) -> &[NodeId] {
        &self.pivots
    }

    pub fn linkages(&self) -> &[NodeId] {
        &self.linkages
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_gear(&self, id: NodeId) -> bool {
        matches!(self.nodes.get(id), Some(MechanismNode::Gear(_)))
    }

    /// Adds a gear. The first gear of a mechanism becomes the motor.
    pub fn add_gear(&mut self, number_of_teeth: u32, module: f64) -> NodeId {
        let name = format!("gear-{}", self.gears.len());
        let id = self.nodes.insert(MechanismNode::Gear(Gear {
            name,
            number_of_teeth,
            module,
        }));
        self.graph.add_node(id);
        self.gears.push(id);
        if self.motor.is_none() {
            self.motor = Some(id);
        }
        id
    }

    /// Adds a free-standing pivot at `position` in the normalized frame.
    pub fn add_free_pivot(&mut self, position: Point) -> NodeId {
        let name = format!("pivot-{}", self.pivots.len());
        let id = self.nodes.insert(MechanismNode::Pivot(Pivot {
            name,
            anchor: PivotAnchor::Free { position },
        }));
        self.graph.add_node(id);
        self.pivots.push(id);
        id
    }

    /// Adds a pivot mounted on `gear` and connects the mount edge.
    pub fn add_gear_pivot(&mut self, gear: NodeId, angle: f64, radius: f64) -> NodeId {
        let name = format!("gear-pivot-{}", self.pivots.len());
        let id = self.nodes.insert(MechanismNode::Pivot(Pivot {
            name,
            anchor: PivotAnchor::OnGear {
                gear,
                angle,
                radius,
            },
        }));
        self.pivots.push(id);
        self.graph.connect(gear, id, EdgeKind::Mount { angle, radius });
        id
    }

    /// Meshes two distinct gears at a phase angle. Self-meshing is ignored.
    pub fn link_gears(&mut self, gear_a: NodeId, gear_b: NodeId, angle: f64) {
        if gear_a == gear_b {
            return;
        }
        self.graph.connect(gear_a, gear_b, EdgeKind::Mesh { angle });
    }

    /// Creates a linkage of `length` between two distinct pivots and attaches
    /// it to both. Returns `None` when the pivots coincide.
    pub fn link_pivots(&mut self, pivot_a: NodeId, pivot_b: NodeId, length: f64) -> Option<NodeId> {
        if pivot_a == pivot_b {
            return None;
        }
        let name = format!("linkage-{}", self.linkages.len());
        let id = self.nodes.insert(MechanismNode::Linkage(Linkage {
            name,
            length,
            pivot_a,
            pivot_b,
        }));
        self.linkages.push(id);
        self.graph.connect(pivot_a, id, EdgeKind::Attachment);
        self.graph.connect(id, pivot_b, EdgeKind::Attachment);
        Some(id)
    }

    /// Removes a node from the graph, the arena, and its collection. The
    /// graph strips all incident edges; the handle goes dead. Removing the
    /// motor leaves the mechanism rootless.
    pub fn remove_node(&mut self, id: NodeId) {
        self.graph.remove_node(id);
        if self.nodes.remove(id).is_none() {
            return;
        }
        self.gears.retain(|n| *n != id);
        self.pivots.retain(|n| *n != id);
        self.linkages.retain(|n| *n != id);
        if self.motor == Some(id) {
            self.motor = None;
        }
    }
}
