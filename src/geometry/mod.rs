pub mod curve;
pub mod surface;

mod axis;

pub use axis::Axis;
pub use curve::{Arc, Circle, Curve, CurveDomain, Line};
pub use surface::{Cylinder, Plane, Surface, SurfaceDomain};
