use super::edge::EdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a wire in the topology store.
    pub struct WireId;
}

/// An edge with orientation information within a wire.
#[derive(Debug, Clone, Copy)]
pub struct OrientedEdge {
    /// The edge identifier.
    pub edge: EdgeId,
    /// If `true`, the edge is traversed in its natural direction (start → end).
    /// If `false`, the edge is traversed in reverse (end → start).
    pub forward: bool,
}

impl OrientedEdge {
    /// Creates a new oriented edge.
    #[must_use]
    pub fn new(edge: EdgeId, forward: bool) -> Self {
        Self { edge, forward }
    }
}

/// Data associated with a topological wire.
///
/// A wire is an ordered sequence of oriented edges bounding a face
/// region. A circular cap boundary is a closed wire holding one
/// full-circle edge.
#[derive(Debug, Clone)]
pub struct WireData {
    /// The ordered sequence of oriented edges.
    pub edges: Vec<OrientedEdge>,
    /// Whether this wire forms a closed loop.
    pub is_closed: bool,
}

impl WireData {
    /// Creates a closed wire from a single edge (a full circle boundary).
    #[must_use]
    pub fn closed_single(edge: EdgeId) -> Self {
        Self {
            edges: vec![OrientedEdge::new(edge, true)],
            is_closed: true,
        }
    }
}
