//! Reachability pruning of decoded mechanisms.
//!
//! A random genome routinely produces parts nothing drives: gears that
//! never mesh with the drivetrain, pivots on those gears, linkages dangling
//! off pruned pivots. Normalization deletes them in two passes rooted at
//! the motor gear: first mesh-only reachability over gears, then full
//! reachability over whatever is left. Disconnected sub-mechanisms are
//! discarded, never repaired.

use crate::mechanism::Mechanism;
use crate::types::NodeId;
use std::collections::{HashSet, VecDeque};

/// Prune every node not reachable from the motor. Returns the removed
/// handles in removal order. Idempotent: normalizing a normalized mechanism
/// removes nothing.
///
/// A mechanism without a motor (no gear was ever decoded) normalizes to the
/// empty graph.
pub fn normalize(mechanism: &mut Mechanism) -> Vec<NodeId> {
    let mut removed = Vec::new();

    let Some(motor) = mechanism.motor() else {
        removed.extend(mechanism.graph().nodes());
        for id in &removed {
            mechanism.remove_node(*id);
        }
        if !removed.is_empty() {
            log::debug!("normalized rootless mechanism: removed all {} nodes", removed.len());
        }
        return removed;
    };

    // Pass 1: gears that the motor can actually drive, via mesh edges only.
    let driven = reachable(mechanism, motor, true);
    let stranded: Vec<NodeId> = mechanism
        .gears()
        .iter()
        .copied()
        .filter(|gear| !driven.contains(gear))
        .collect();
    for gear in stranded {
        mechanism.remove_node(gear);
        removed.push(gear);
    }

    // Pass 2: everything else that lost its path to the motor.
    let alive = reachable(mechanism, motor, false);
    let stranded: Vec<NodeId> = mechanism
        .graph()
        .nodes()
        .filter(|node| !alive.contains(node))
        .collect();
    for node in stranded {
        mechanism.remove_node(node);
        removed.push(node);
    }

    if !removed.is_empty() {
        log::debug!(
            "normalization removed {} nodes, {} remain",
            removed.len(),
            mechanism.len()
        );
    }
    removed
}

/// Breadth-first reachability from `root` over an explicit worklist. With
/// `gears_only`, traversal refuses to step onto non-gear nodes, which
/// restricts it to mesh edges.
fn reachable(mechanism: &Mechanism, root: NodeId, gears_only: bool) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    visited.insert(root);
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        for (next, _) in mechanism.graph().neighbors(node) {
            if gears_only && !mechanism.is_gear(*next) {
                continue;
            }
            if visited.insert(*next) {
                queue.push_back(*next);
            }
        }
    }
    visited
}
