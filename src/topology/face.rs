use crate::geometry::surface::{Cylinder, Plane};

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
///
/// This is the tagged-variant classification point for surfaces: the cap
/// predicate asks [`FaceSurface::as_plane`] and treats every other
/// variant as opaque.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A cylindrical surface.
    Cylinder(Cylinder),
}

impl FaceSurface {
    /// Returns `true` if the surface is a plane.
    #[must_use]
    pub fn is_plane(&self) -> bool {
        matches!(self, Self::Plane(_))
    }

    /// Returns the plane if this surface is one, `None` otherwise.
    #[must_use]
    pub fn as_plane(&self) -> Option<&Plane> {
        match self {
            Self::Plane(plane) => Some(plane),
            Self::Cylinder(_) => None,
        }
    }
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface, defined by an outer wire and
/// optionally inner wires (holes). An annular cap has exactly one inner
/// wire.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
}

impl FaceData {
    /// Total number of boundary wires (outer + inner).
    #[must_use]
    pub fn wire_count(&self) -> usize {
        1 + self.inner_wires.len()
    }
}
