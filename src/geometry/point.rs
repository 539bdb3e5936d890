use crate::id::PointId;
use crate::math::Point2;

/// A 2D point of the model geometry.
///
/// Immutable once created; addressed by its numeric label.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    id: PointId,
    position: Point2,
}

impl Point {
    pub(crate) fn new(id: PointId, position: Point2) -> Self {
        Self { id, position }
    }

    /// Returns the numeric label of the point.
    #[must_use]
    pub fn id(&self) -> PointId {
        self.id
    }

    /// Returns the position of the point.
    #[must_use]
    pub fn position(&self) -> Point2 {
        self.position
    }

    /// Returns the x coordinate of the point.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Returns the y coordinate of the point.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }
}
