use crate::types::NodeId;
use serde::{Deserialize, Serialize};

/// A rigid bar created implicitly when two pivots are linked. The linkage
/// owns the connection: it is a graph node with exactly two attachment
/// edges, one to each endpoint pivot.
///
/// Structural only — realized endpoint positions, body angle, and center are
/// computed by the placement pass into a layout, never stored here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Linkage {
    pub name: String,
    pub length: f64,
    pub pivot_a: NodeId,
    pub pivot_b: NodeId,
}
