pub mod curve;
pub mod point;

pub use curve::{Curve, CurveGeometry};
pub use point::Point;
