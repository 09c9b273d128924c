use crate::types::{NodeId, Point};
use serde::{Deserialize, Serialize};

/// A revolute attachment point for linkages.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pivot {
    pub name: String,
    pub anchor: PivotAnchor,
}

/// Where a pivot gets its position from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PivotAnchor {
    /// Free-standing pivot at a fixed position in the decoder's normalized
    /// `[0,1]×[0,1]` frame.
    Free { position: Point },
    /// Pivot fixed to a gear's face at `angle` radians and `radius` as a
    /// fraction of the gear's pitch radius. Rotates with the gear's frame.
    OnGear {
        gear: NodeId,
        angle: f64,
        radius: f64,
    },
}

impl Pivot {
    /// The carrier gear, for mounted pivots.
    pub fn carrier(&self) -> Option<NodeId> {
        match self.anchor {
            PivotAnchor::Free { .. } => None,
            PivotAnchor::OnGear { gear, .. } => Some(gear),
        }
    }
}
