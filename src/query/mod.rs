//! Topology/geometry query adapter.
//!
//! [`SolidQuery`] is the only surface the end-cap detector sees: it
//! enumerates a solid's faces, a face's wires, and a wire's edges, and
//! resolves the geometry behind faces and edges. [`TopologyStore`]
//! implements it directly; tests wrap it to instrument traversals, and a
//! different kernel could implement it to reuse the detector unchanged.

use crate::error::TopologyError;
use crate::topology::{EdgeCurve, EdgeId, FaceId, FaceSurface, SolidId, TopologyStore, WireId};

/// Read-only traversal queries over a B-rep solid.
///
/// All methods are side-effect free and restartable: calling a method
/// twice with the same ID yields the same sequence, and iteration order
/// is stable for the lifetime of the underlying model. Lookups fail only
/// for dangling IDs, never for geometric variety.
pub trait SolidQuery {
    /// Returns the faces of a solid, in the solid's construction order.
    ///
    /// # Errors
    ///
    /// Returns an error if the solid ID is not known to the kernel.
    fn faces(&self, solid: SolidId) -> Result<Vec<FaceId>, TopologyError>;

    /// Returns the boundary wires of a face. The order is kernel-defined
    /// but stable; callers must not assume the outer wire comes first.
    ///
    /// # Errors
    ///
    /// Returns an error if the face ID is not known to the kernel.
    fn wires(&self, face: FaceId) -> Result<Vec<WireId>, TopologyError>;

    /// Returns the edges of a wire, ordered along its closed path.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire ID is not known to the kernel.
    fn edges(&self, wire: WireId) -> Result<Vec<EdgeId>, TopologyError>;

    /// Returns the surface underlying a face. Total: every face has
    /// exactly one surface.
    ///
    /// # Errors
    ///
    /// Returns an error if the face ID is not known to the kernel.
    fn surface_of(&self, face: FaceId) -> Result<&FaceSurface, TopologyError>;

    /// Returns the curve underlying an edge. Total: every edge has
    /// exactly one curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge ID is not known to the kernel.
    fn curve_of(&self, edge: EdgeId) -> Result<&EdgeCurve, TopologyError>;
}

impl SolidQuery for TopologyStore {
    fn faces(&self, solid: SolidId) -> Result<Vec<FaceId>, TopologyError> {
        Ok(self.solid(solid)?.faces.clone())
    }

    fn wires(&self, face: FaceId) -> Result<Vec<WireId>, TopologyError> {
        let data = self.face(face)?;
        let mut wires = Vec::with_capacity(data.wire_count());
        wires.push(data.outer_wire);
        wires.extend_from_slice(&data.inner_wires);
        Ok(wires)
    }

    fn edges(&self, wire: WireId) -> Result<Vec<EdgeId>, TopologyError> {
        Ok(self.wire(wire)?.edges.iter().map(|oe| oe.edge).collect())
    }

    fn surface_of(&self, face: FaceId) -> Result<&FaceSurface, TopologyError> {
        Ok(&self.face(face)?.surface)
    }

    fn curve_of(&self, edge: EdgeId) -> Result<&EdgeCurve, TopologyError> {
        Ok(&self.edge(edge)?.curve)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::surface::Plane;
    use crate::geometry::Circle;
    use crate::math::{Point3, Vector3};
    use crate::topology::{EdgeData, FaceData, SolidData, VertexData, WireData};

    fn circle_wire(store: &mut TopologyStore, radius: f64) -> WireId {
        let circle = Circle::from_center_normal(Point3::origin(), radius, Vector3::z()).unwrap();
        let v = store.add_vertex(VertexData::new(Point3::new(radius, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData {
            start: v,
            end: v,
            curve: EdgeCurve::Circle(circle),
            t_start: 0.0,
            t_end: std::f64::consts::TAU,
        });
        store.add_wire(WireData::closed_single(edge))
    }

    #[test]
    fn wires_lists_outer_then_inner() {
        let mut store = TopologyStore::new();
        let outer = circle_wire(&mut store, 2.0);
        let inner = circle_wire(&mut store, 1.0);
        let face = store.add_face(FaceData {
            surface: FaceSurface::Plane(
                Plane::from_normal(Point3::origin(), Vector3::z()).unwrap(),
            ),
            outer_wire: outer,
            inner_wires: vec![inner],
            same_sense: true,
        });

        assert_eq!(store.wires(face).unwrap(), vec![outer, inner]);
    }

    #[test]
    fn faces_preserve_construction_order() {
        let mut store = TopologyStore::new();
        let plane = Plane::from_normal(Point3::origin(), Vector3::z()).unwrap();
        let w1 = circle_wire(&mut store, 2.0);
        let f1 = store.add_face(FaceData {
            surface: FaceSurface::Plane(plane.clone()),
            outer_wire: w1,
            inner_wires: vec![],
            same_sense: true,
        });
        let w2 = circle_wire(&mut store, 3.0);
        let f2 = store.add_face(FaceData {
            surface: FaceSurface::Plane(plane),
            outer_wire: w2,
            inner_wires: vec![],
            same_sense: true,
        });
        let solid = store.add_solid(SolidData::new(vec![f2, f1]));

        assert_eq!(store.faces(solid).unwrap(), vec![f2, f1]);
        // Restartable: a second call sees the same sequence.
        assert_eq!(store.faces(solid).unwrap(), vec![f2, f1]);
    }

    #[test]
    fn dangling_ids_fail() {
        let store = TopologyStore::new();
        assert!(store.faces(SolidId::default()).is_err());
        assert!(store.wires(FaceId::default()).is_err());
        assert!(store.edges(WireId::default()).is_err());
    }
}
