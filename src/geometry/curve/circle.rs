use crate::error::{GeometryError, Result};
use crate::geometry::Axis;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full circle in 3D space.
///
/// Defined by an [`Axis`] (center + plane normal), a radius, and a
/// reference direction marking the zero angle. The parametric domain is
/// `[0, 2*pi)` and the curve is always closed.
///
/// `P(t) = center + radius * cos(t) * ref_dir + radius * sin(t) * binormal`
/// where `binormal = axis.direction x ref_dir`.
#[derive(Debug, Clone)]
pub struct Circle {
    axis: Axis,
    ref_dir: Vector3,
    radius: f64,
}

impl Circle {
    /// Creates a new circle around the given axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the reference
    /// direction is zero-length or not perpendicular to the axis.
    pub fn new(axis: Axis, radius: f64, ref_dir: Vector3) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if axis.direction().dot(&ref_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to the circle axis".into(),
            )
            .into());
        }

        Ok(Self {
            axis,
            ref_dir,
            radius,
        })
    }

    /// Creates a circle from a center point and a plane normal, choosing
    /// the reference direction automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or the normal is
    /// zero-length.
    pub fn from_center_normal(center: Point3, radius: f64, normal: Vector3) -> Result<Self> {
        let axis = Axis::new(center, normal)?;

        // Choose a reference vector not parallel to the axis
        let candidate = if axis.direction().x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let ref_dir = axis.direction().cross(&candidate);

        Self::new(axis, radius, ref_dir)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        self.axis.origin()
    }

    /// Returns the circle's axis (center + plane normal).
    #[must_use]
    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the reference direction (t=0 direction).
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.ref_dir
    }

    /// Computes the binormal direction (`axis.direction x ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.axis.direction().cross(&self.ref_dir)
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let binormal = self.binormal();
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Ok(*self.axis.origin() + self.ref_dir * x + binormal * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let binormal = self.binormal();
        let dx = -self.radius * t.sin();
        let dy = self.radius * t.cos();
        let tangent = self.ref_dir * dx + binormal * dy;
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(tangent / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    fn xy_circle(radius: f64) -> Circle {
        Circle::from_center_normal(Point3::origin(), radius, Vector3::z()).unwrap()
    }

    #[test]
    fn evaluate_stays_at_radius() {
        let c = xy_circle(2.0);
        for &t in &[0.0, FRAC_PI_2, 1.0, TAU * 0.75] {
            let p = c.evaluate(t).unwrap();
            assert_relative_eq!((p - Point3::origin()).norm(), 2.0, epsilon = 1e-9);
            assert!(p.z.abs() < 1e-9);
        }
    }

    #[test]
    fn tangent_perpendicular_to_axis() {
        let c = xy_circle(1.0);
        let t = c.tangent(0.3).unwrap();
        assert!(t.dot(&Vector3::z()).abs() < 1e-9);
    }

    #[test]
    fn axis_carries_center_and_normal() {
        let c = Circle::from_center_normal(Point3::new(1.0, 2.0, 3.0), 4.0, Vector3::x()).unwrap();
        assert_relative_eq!(c.center().x, 1.0);
        assert_relative_eq!(c.axis().direction().x, 1.0);
        assert_relative_eq!(c.radius(), 4.0);
    }

    #[test]
    fn is_always_closed() {
        assert!(xy_circle(1.0).is_closed());
    }

    #[test]
    fn domain_is_full_turn() {
        let d = xy_circle(1.0).domain();
        assert!(d.t_min.abs() < TOLERANCE);
        assert!((d.t_max - TAU).abs() < TOLERANCE);
    }

    #[test]
    fn invalid_radius() {
        let r = Circle::from_center_normal(Point3::origin(), 0.0, Vector3::z());
        assert!(r.is_err());
    }

    #[test]
    fn non_perpendicular_ref_dir() {
        let axis = Axis::new(Point3::origin(), Vector3::z()).unwrap();
        let r = Circle::new(axis, 1.0, Vector3::new(1.0, 0.0, 1.0));
        assert!(r.is_err());
    }
}
