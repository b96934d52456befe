use crate::geometry::curve::{Arc, Circle, Line};

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// The geometric curve backing an edge.
///
/// This is the tagged-variant classification point for curves: the cap
/// predicate asks [`EdgeCurve::as_circle`] and treats every other variant
/// as opaque.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A straight line segment.
    Line(Line),
    /// A circular arc (bounded, possibly a partial turn).
    Arc(Arc),
    /// A full circle.
    Circle(Circle),
}

impl EdgeCurve {
    /// Returns `true` if the curve is a full circle.
    #[must_use]
    pub fn is_circle(&self) -> bool {
        matches!(self, Self::Circle(_))
    }

    /// Returns the circle if this curve is one, `None` otherwise.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Self::Circle(circle) => Some(circle),
            Self::Line(_) | Self::Arc(_) => None,
        }
    }
}

/// Data associated with a topological edge.
///
/// An edge is a bounded portion of a curve between two vertices. A full
/// circle edge starts and ends at the same vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}
