use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

/// An oriented axis in 3D space: an origin point plus a unit direction.
///
/// Circles carry an `Axis` (center + plane normal); callers use it to
/// recover the direction a tubular feature was extruded along.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    origin: Point3,
    direction: Vector3,
}

impl Axis {
    /// Creates a new axis. The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length.
    pub fn new(origin: Point3, direction: Vector3) -> Result<Self> {
        let len = direction.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            origin,
            direction: direction / len,
        })
    }

    /// Returns the origin point of the axis.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// Returns the unit direction of the axis.
    #[must_use]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }
}
