//! Bidirected multigraph over arena handles.
//!
//! Carries no mechanical semantics: nodes are opaque [`NodeId`]s, edges carry
//! an arbitrary payload `E`. Both node iteration and neighbor iteration run
//! in insertion order, so identical operation sequences always reproduce the
//! same traversals.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use slotmap::SecondaryMap;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BidiGraph<E> {
    order: Vec<NodeId>,
    adjacency: SecondaryMap<NodeId, Vec<(NodeId, E)>>,
}

impl<E> Default for BidiGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> BidiGraph<E> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: SecondaryMap::new(),
        }
    }

    /// Inserts a node with an empty neighbor set. No-op if already present.
    pub fn add_node(&mut self, node: NodeId) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node, Vec::new());
            self.order.push(node);
        }
    }

    /// Deletes `node` and strips it from every neighbor's adjacency list.
    /// Silently does nothing if the node is absent.
    pub fn remove_node(&mut self, node: NodeId) {
        let Some(neighbors) = self.adjacency.remove(node) else {
            return;
        };
        for (other, _) in neighbors {
            if let Some(list) = self.adjacency.get_mut(other) {
                list.retain(|(n, _)| *n != node);
            }
        }
        self.order.retain(|n| *n != node);
    }

    /// Neighbors of `node` with their edge payloads, in the order the edges
    /// were created. Empty for an absent node.
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, E)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&E> {
        self.neighbors(a)
            .iter()
            .find(|(n, _)| *n == b)
            .map(|(_, payload)| payload)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied()
    }
}

impl<E: Clone> BidiGraph<E> {
    /// Adds or overwrites the symmetric edge `a` ↔ `b`. Both endpoints are
    /// inserted if missing. Self-loops are not rejected here; callers guard
    /// against self-links where they are meaningless.
    pub fn connect(&mut self, a: NodeId, b: NodeId, payload: E) {
        self.add_node(a);
        self.add_node(b);
        Self::set_edge(&mut self.adjacency[a], b, payload.clone());
        Self::set_edge(&mut self.adjacency[b], a, payload);
    }

    fn set_edge(list: &mut Vec<(NodeId, E)>, to: NodeId, payload: E) {
        match list.iter_mut().find(|(n, _)| *n == to) {
            Some(entry) => entry.1 = payload,
            None => list.push((to, payload)),
        }
    }
}
