use crate::error::{OperationError, Result};
use crate::geometry::curve::Circle;
use crate::geometry::surface::{Cylinder, Plane};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, EdgeId, FaceData, FaceId, FaceSurface, SolidData, SolidId,
    TopologyStore, VertexData, WireData,
};

/// Creates a straight tube solid: a hollow cylinder between two annular
/// planar caps.
///
/// The result has four faces, in order: bottom cap, top cap, outer
/// lateral cylinder, inner lateral cylinder. Each cap is a plane bounded
/// by two wires, each wire a single full-circle edge: the exact
/// signature [`crate::operations::query::DetectEndFaces`] scans for. The
/// lateral faces get their own wires but share the circle edges with the
/// caps.
pub struct MakeTube {
    center: Point3,
    axis: Vector3,
    outer_radius: f64,
    inner_radius: f64,
    height: f64,
}

impl MakeTube {
    /// Creates a new `MakeTube` operation. The tube extends from `center`
    /// along `axis` by `height`.
    #[must_use]
    pub fn new(
        center: Point3,
        axis: Vector3,
        outer_radius: f64,
        inner_radius: f64,
        height: f64,
    ) -> Self {
        Self {
            center,
            axis,
            outer_radius,
            inner_radius,
            height,
        }
    }

    /// Executes the operation, creating the tube in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is near zero, the inner radius
    /// is not strictly smaller than the outer, the height is near zero,
    /// or the axis direction is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.inner_radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("tube inner radius must be positive".into()).into(),
            );
        }
        if self.outer_radius - self.inner_radius < TOLERANCE {
            return Err(OperationError::InvalidInput(
                "tube outer radius must exceed inner radius".into(),
            )
            .into());
        }
        if self.height.abs() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("tube height must be non-zero".into()).into(),
            );
        }
        let axis_len = self.axis.norm();
        if axis_len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("tube axis must be non-zero".into()).into(),
            );
        }
        let axis = self.axis / axis_len;

        let bottom_center = self.center;
        let top_center = self.center + axis * self.height;

        // One circle edge per boundary; caps and laterals share them.
        let bottom_outer = circle_edge(store, bottom_center, self.outer_radius, axis)?;
        let bottom_inner = circle_edge(store, bottom_center, self.inner_radius, axis)?;
        let top_outer = circle_edge(store, top_center, self.outer_radius, axis)?;
        let top_inner = circle_edge(store, top_center, self.inner_radius, axis)?;

        let bottom_cap = cap_face(store, bottom_center, axis, bottom_outer, bottom_inner)?;
        let top_cap = cap_face(store, top_center, axis, top_outer, top_inner)?;

        let outer_lateral = lateral_face(
            store,
            bottom_center,
            self.outer_radius,
            axis,
            bottom_outer,
            top_outer,
        )?;
        let inner_lateral = lateral_face(
            store,
            bottom_center,
            self.inner_radius,
            axis,
            bottom_inner,
            top_inner,
        )?;

        Ok(store.add_solid(SolidData::new(vec![
            bottom_cap,
            top_cap,
            outer_lateral,
            inner_lateral,
        ])))
    }
}

/// Adds a full-circle edge (with its single vertex) around `axis` at
/// `center`, returning the edge ID.
fn circle_edge(
    store: &mut TopologyStore,
    center: Point3,
    radius: f64,
    axis: Vector3,
) -> Result<EdgeId> {
    let circle = Circle::from_center_normal(center, radius, axis)?;
    let seam = center + *circle.ref_dir() * radius;
    let vertex = store.add_vertex(VertexData::new(seam));
    Ok(store.add_edge(EdgeData {
        start: vertex,
        end: vertex,
        curve: EdgeCurve::Circle(circle),
        t_start: 0.0,
        t_end: std::f64::consts::TAU,
    }))
}

/// Builds an annular planar cap from its two circle edges.
fn cap_face(
    store: &mut TopologyStore,
    center: Point3,
    axis: Vector3,
    outer_edge: EdgeId,
    inner_edge: EdgeId,
) -> Result<FaceId> {
    let plane = Plane::from_normal(center, axis)?;
    let outer = store.add_wire(WireData::closed_single(outer_edge));
    let inner = store.add_wire(WireData::closed_single(inner_edge));
    Ok(store.add_face(FaceData {
        surface: FaceSurface::Plane(plane),
        outer_wire: outer,
        inner_wires: vec![inner],
        same_sense: true,
    }))
}

/// Builds a lateral cylinder face bounded by the bottom and top circle
/// edges. Wires are per-face; only the edges are shared with the caps.
fn lateral_face(
    store: &mut TopologyStore,
    bottom_center: Point3,
    radius: f64,
    axis: Vector3,
    bottom_edge: EdgeId,
    top_edge: EdgeId,
) -> Result<FaceId> {
    let ref_dir = perpendicular_dir(&axis);
    let cylinder = Cylinder::new(bottom_center, radius, axis, ref_dir)?;
    let bottom = store.add_wire(WireData::closed_single(bottom_edge));
    let top = store.add_wire(WireData::closed_single(top_edge));
    Ok(store.add_face(FaceData {
        surface: FaceSurface::Cylinder(cylinder),
        outer_wire: bottom,
        inner_wires: vec![top],
        same_sense: true,
    }))
}

/// Finds a direction perpendicular to the given unit vector.
fn perpendicular_dir(axis: &Vector3) -> Vector3 {
    let candidate = if axis.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let perp = axis.cross(&candidate);
    perp / perp.norm()
}
