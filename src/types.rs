use slotmap::new_key_type;

new_key_type! {
    /// Stable handle for a node in a mechanism graph.
    ///
    /// Generational: a handle to a removed node never aliases a later one.
    /// Edges and entity cross-references store handles, never entities.
    pub struct NodeId;
}

/// Planar point/vector used throughout the geometric passes.
pub type Point = glam::DVec2;
