use tracing::debug;

use crate::error::Result;
use crate::geometry::Circle;
use crate::query::SolidQuery;
use crate::topology::{FaceId, SolidId, WireId};

/// A planar face capping a tubular feature, with its two bounding circles.
///
/// Immutable once created. `outer` is the larger-radius circle, `inner`
/// the smaller; wire order within the face carries no outer/inner
/// information, so the radii decide.
#[derive(Debug, Clone)]
pub struct EndFaceMatch {
    face: FaceId,
    outer: Circle,
    inner: Circle,
}

impl EndFaceMatch {
    fn new(face: FaceId, a: Circle, b: Circle) -> Self {
        if a.radius() >= b.radius() {
            Self {
                face,
                outer: a,
                inner: b,
            }
        } else {
            Self {
                face,
                outer: b,
                inner: a,
            }
        }
    }

    /// Returns the matched face.
    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    /// Returns the outer boundary circle (larger radius).
    #[must_use]
    pub fn outer(&self) -> &Circle {
        &self.outer
    }

    /// Returns the inner boundary circle (smaller radius).
    #[must_use]
    pub fn inner(&self) -> &Circle {
        &self.inner
    }
}

/// Locates the planar end caps of a tubular feature.
///
/// A face qualifies when its surface is a plane, it has exactly two
/// boundary wires, and the first edge of each wire is backed by a full
/// circle. The scan visits faces in traversal order and stops as soon as
/// `max_matches` faces (default 2, the two ends of a tube) have been
/// collected.
///
/// The first-edge test is a deliberate approximation: a circular boundary
/// split across several arc edges, or a wire whose first edge happens to
/// be a circle without the wire being one, is not detected. Faces that
/// fail the predicate are skipped silently, including faces with empty
/// wires; a short or empty result means "feature not present" and is the
/// caller's to interpret.
pub struct DetectEndFaces {
    solid: SolidId,
    max_matches: usize,
}

impl DetectEndFaces {
    /// Creates a new detection operation for the given solid, looking for
    /// at most two end faces.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self {
            solid,
            max_matches: 2,
        }
    }

    /// Overrides the number of matches to collect before stopping.
    #[must_use]
    pub fn with_max_matches(mut self, max_matches: usize) -> Self {
        self.max_matches = max_matches;
        self
    }

    /// Executes the scan against a query adapter.
    ///
    /// Returns between 0 and `max_matches` matches. The result is
    /// deterministic for a fixed face order and identical across repeated
    /// calls on an unmodified solid.
    ///
    /// # Errors
    ///
    /// Returns an error only if the adapter reports a dangling ID; no
    /// geometric configuration of valid entities can fail.
    pub fn execute<Q: SolidQuery>(&self, query: &Q) -> Result<Vec<EndFaceMatch>> {
        let mut matches = Vec::new();
        if self.max_matches == 0 {
            return Ok(matches);
        }

        for face in query.faces(self.solid)? {
            if !query.surface_of(face)?.is_plane() {
                continue;
            }

            // An annular cap has exactly two boundaries: outer and inner.
            let wires = query.wires(face)?;
            if wires.len() != 2 {
                continue;
            }

            let Some(first) = first_edge_circle(query, wires[0])? else {
                continue;
            };
            let Some(second) = first_edge_circle(query, wires[1])? else {
                continue;
            };

            debug!(
                ?face,
                radius1 = first.radius(),
                radius2 = second.radius(),
                "end cap matched"
            );
            matches.push(EndFaceMatch::new(face, first, second));
            if matches.len() == self.max_matches {
                break;
            }
        }

        debug!(found = matches.len(), "end face scan finished");
        Ok(matches)
    }
}

/// Returns the circle backing the wire's first edge, or `None` if the
/// wire is empty or the first edge is not a full circle.
fn first_edge_circle<Q: SolidQuery>(query: &Q, wire: WireId) -> Result<Option<Circle>> {
    let edges = query.edges(wire)?;
    let Some(&edge) = edges.first() else {
        return Ok(None);
    };
    Ok(query.curve_of(edge)?.as_circle().cloned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::result::Result as StdResult;

    use crate::error::TopologyError;
    use crate::geometry::curve::Line;
    use crate::geometry::surface::{Cylinder, Plane};
    use crate::math::{Point3, Vector3};
    use crate::operations::creation::MakeTube;
    use crate::topology::{
        EdgeCurve, EdgeData, EdgeId, FaceData, FaceSurface, OrientedEdge, SolidData,
        TopologyStore, VertexData, WireData,
    };

    fn xy_plane() -> FaceSurface {
        FaceSurface::Plane(Plane::from_normal(Point3::origin(), Vector3::z()).unwrap())
    }

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

    fn line_wire(store: &mut TopologyStore) -> WireId {
        let line = Line::new(Point3::origin(), Vector3::x()).unwrap();
        let a = store.add_vertex(VertexData::new(Point3::origin()));
        let b = store.add_vertex(VertexData::new(Point3::new(1.0, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData {
            start: a,
            end: b,
            curve: EdgeCurve::Line(line),
            t_start: 0.0,
            t_end: 1.0,
        });
        store.add_wire(WireData {
            edges: vec![OrientedEdge::new(edge, true)],
            is_closed: false,
        })
    }

    /// A planar face with two single-circle wires: the cap signature.
    fn annular_face(store: &mut TopologyStore, outer_r: f64, inner_r: f64) -> FaceId {
        let outer = circle_wire(store, outer_r);
        let inner = circle_wire(store, inner_r);
        store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: outer,
            inner_wires: vec![inner],
            same_sense: true,
        })
    }

    fn cylinder_face(store: &mut TopologyStore) -> FaceId {
        let wire = circle_wire(store, 1.0);
        store.add_face(FaceData {
            surface: FaceSurface::Cylinder(
                Cylinder::new(Point3::origin(), 1.0, Vector3::z(), Vector3::x()).unwrap(),
            ),
            outer_wire: wire,
            inner_wires: vec![],
            same_sense: true,
        })
    }

    /// Adapter wrapper that counts `surface_of` calls, for verifying that
    /// the scan stops early.
    struct CountingQuery<'a> {
        store: &'a TopologyStore,
        surface_calls: Cell<usize>,
    }

    impl<'a> CountingQuery<'a> {
        fn new(store: &'a TopologyStore) -> Self {
            Self {
                store,
                surface_calls: Cell::new(0),
            }
        }
    }

    // `Result` here is the std one; the crate alias from `super::*` only
    // takes the success type.
    impl SolidQuery for CountingQuery<'_> {
        fn faces(&self, solid: SolidId) -> StdResult<Vec<FaceId>, TopologyError> {
            self.store.faces(solid)
        }

        fn wires(&self, face: FaceId) -> StdResult<Vec<WireId>, TopologyError> {
            self.store.wires(face)
        }

        fn edges(&self, wire: WireId) -> StdResult<Vec<EdgeId>, TopologyError> {
            self.store.edges(wire)
        }

        fn surface_of(&self, face: FaceId) -> StdResult<&FaceSurface, TopologyError> {
            self.surface_calls.set(self.surface_calls.get() + 1);
            self.store.surface_of(face)
        }

        fn curve_of(&self, edge: EdgeId) -> StdResult<&EdgeCurve, TopologyError> {
            self.store.curve_of(edge)
        }
    }

    #[test]
    fn tube_yields_two_caps_with_correct_radii() {
        let mut store = TopologyStore::new();
        let solid = MakeTube::new(Point3::origin(), Vector3::z(), 5.0, 3.0, 10.0)
            .execute(&mut store)
            .unwrap();

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(matches.len(), 2);
        for m in &matches {
            assert!((m.outer().radius() - 5.0).abs() < 1e-9);
            assert!((m.inner().radius() - 3.0).abs() < 1e-9);
            // Cap circles share the tube axis direction.
            assert!(m.outer().axis().direction().dot(&Vector3::z()).abs() > 0.999);
        }
        assert_ne!(matches[0].face(), matches[1].face());
    }

    #[test]
    fn no_planar_faces_yields_empty() {
        let mut store = TopologyStore::new();
        let f1 = cylinder_face(&mut store);
        let f2 = cylinder_face(&mut store);
        let solid = store.add_solid(SolidData::new(vec![f1, f2]));

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn three_wire_face_is_excluded() {
        let mut store = TopologyStore::new();
        let good = annular_face(&mut store, 2.0, 1.0);

        // Plane with two holes: three wires, not a cap.
        let w1 = circle_wire(&mut store, 4.0);
        let w2 = circle_wire(&mut store, 1.0);
        let w3 = circle_wire(&mut store, 0.5);
        let bad = store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: w1,
            inner_wires: vec![w2, w3],
            same_sense: true,
        });

        let solid = store.add_solid(SolidData::new(vec![bad, good]));
        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].face(), good);
    }

    #[test]
    fn non_circular_first_edge_is_excluded() {
        let mut store = TopologyStore::new();
        let outer = circle_wire(&mut store, 2.0);
        let inner = line_wire(&mut store);
        let bad = store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: outer,
            inner_wires: vec![inner],
            same_sense: true,
        });
        let good = annular_face(&mut store, 3.0, 1.5);

        let solid = store.add_solid(SolidData::new(vec![bad, good]));
        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].face(), good);
    }

    #[test]
    fn full_turn_arc_is_not_a_circle() {
        let mut store = TopologyStore::new();
        let arc = crate::geometry::curve::Arc::new(
            Point3::origin(),
            1.0,
            Vector3::z(),
            Vector3::x(),
            0.0,
            std::f64::consts::TAU,
        )
        .unwrap();
        let v = store.add_vertex(VertexData::new(Point3::new(1.0, 0.0, 0.0)));
        let edge = store.add_edge(EdgeData {
            start: v,
            end: v,
            curve: EdgeCurve::Arc(arc),
            t_start: 0.0,
            t_end: std::f64::consts::TAU,
        });
        let arc_wire = store.add_wire(WireData::closed_single(edge));
        let outer = circle_wire(&mut store, 2.0);
        let face = store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: outer,
            inner_wires: vec![arc_wire],
            same_sense: true,
        });
        let solid = store.add_solid(SolidData::new(vec![face]));

        // Geometrically a full circle, but the curve variant is Arc;
        // classification is by variant, so the face does not match.
        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_wire_is_skipped_not_an_error() {
        let mut store = TopologyStore::new();
        let outer = circle_wire(&mut store, 2.0);
        let empty = store.add_wire(WireData {
            edges: vec![],
            is_closed: false,
        });
        let face = store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: outer,
            inner_wires: vec![empty],
            same_sense: true,
        });
        let solid = store.add_solid(SolidData::new(vec![face]));

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn result_is_bounded_by_max_matches() {
        let mut store = TopologyStore::new();
        let faces: Vec<_> = (0..4).map(|_| annular_face(&mut store, 2.0, 1.0)).collect();
        let solid = store.add_solid(SolidData::new(faces.clone()));

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].face(), faces[0]);
        assert_eq!(matches[1].face(), faces[1]);
    }

    #[test]
    fn scan_halts_after_max_matches() {
        let mut store = TopologyStore::new();
        let skipped = cylinder_face(&mut store);
        let first = annular_face(&mut store, 2.0, 1.0);
        let second = annular_face(&mut store, 2.0, 1.0);
        let solid = store.add_solid(SolidData::new(vec![skipped, first, second]));

        let query = CountingQuery::new(&store);
        let matches = DetectEndFaces::new(solid)
            .with_max_matches(1)
            .execute(&query)
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].face(), first);
        // One non-planar face inspected, then the match; the third face
        // is never looked at.
        assert_eq!(query.surface_calls.get(), 2);
    }

    #[test]
    fn zero_max_matches_inspects_nothing() {
        let mut store = TopologyStore::new();
        let face = annular_face(&mut store, 2.0, 1.0);
        let solid = store.add_solid(SolidData::new(vec![face]));

        let query = CountingQuery::new(&store);
        let matches = DetectEndFaces::new(solid)
            .with_max_matches(0)
            .execute(&query)
            .unwrap();

        assert!(matches.is_empty());
        assert_eq!(query.surface_calls.get(), 0);
    }

    #[test]
    fn repeated_detection_is_identical() {
        let mut store = TopologyStore::new();
        let mut faces = vec![cylinder_face(&mut store)];
        faces.push(annular_face(&mut store, 4.0, 2.0));
        faces.push(annular_face(&mut store, 3.0, 1.0));
        let solid = store.add_solid(SolidData::new(faces));

        let a = DetectEndFaces::new(solid).execute(&store).unwrap();
        let b = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.face(), y.face());
            assert!((x.outer().radius() - y.outer().radius()).abs() < 1e-12);
            assert!((x.inner().radius() - y.inner().radius()).abs() < 1e-12);
        }
    }

    #[test]
    fn outer_and_inner_are_distinct_and_radius_ordered() {
        let mut store = TopologyStore::new();
        // Deliberately record the small circle as the face's outer wire:
        // assignment must follow radius, not wire order.
        let small = circle_wire(&mut store, 1.0);
        let big = circle_wire(&mut store, 2.0);
        let face = store.add_face(FaceData {
            surface: xy_plane(),
            outer_wire: small,
            inner_wires: vec![big],
            same_sense: true,
        });
        let solid = store.add_solid(SolidData::new(vec![face]));

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert!((m.outer().radius() - 2.0).abs() < 1e-9);
        assert!((m.inner().radius() - 1.0).abs() < 1e-9);
        assert!(m.outer().radius() > m.inner().radius());
    }

    #[test]
    fn every_match_satisfies_the_predicate() {
        let mut store = TopologyStore::new();
        let mut faces = vec![cylinder_face(&mut store)];
        faces.push(annular_face(&mut store, 2.0, 1.0));
        faces.push(cylinder_face(&mut store));
        faces.push(annular_face(&mut store, 5.0, 4.0));
        let solid = store.add_solid(SolidData::new(faces));

        let matches = DetectEndFaces::new(solid).execute(&store).unwrap();
        for m in &matches {
            let data = store.face(m.face()).unwrap();
            assert!(data.surface.is_plane());
            assert_eq!(data.wire_count(), 2);
        }
    }
}
