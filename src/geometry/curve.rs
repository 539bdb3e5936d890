use crate::id::{CurveId, PointId};

/// The shape of a curve, expressed through point references.
///
/// Curves reference points by id and never own them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveGeometry {
    /// A circular arc through three points; the mid point pins the
    /// curvature direction.
    Arc {
        start: PointId,
        mid: PointId,
        end: PointId,
    },
    /// A straight segment between two points.
    Line { start: PointId, end: PointId },
}

/// A boundary curve of the model geometry.
///
/// Immutable once created; addressed by its numeric label.
#[derive(Debug, Clone, Copy)]
pub struct Curve {
    id: CurveId,
    geometry: CurveGeometry,
}

impl Curve {
    pub(crate) fn new(id: CurveId, geometry: CurveGeometry) -> Self {
        Self { id, geometry }
    }

    /// Returns the numeric label of the curve.
    #[must_use]
    pub fn id(&self) -> CurveId {
        self.id
    }

    /// Returns the shape of the curve.
    #[must_use]
    pub fn geometry(&self) -> CurveGeometry {
        self.geometry
    }

    /// Returns the point the curve starts at in its natural direction.
    #[must_use]
    pub fn start_point(&self) -> PointId {
        match self.geometry {
            CurveGeometry::Arc { start, .. } | CurveGeometry::Line { start, .. } => start,
        }
    }

    /// Returns the point the curve ends at in its natural direction.
    #[must_use]
    pub fn end_point(&self) -> PointId {
        match self.geometry {
            CurveGeometry::Arc { end, .. } | CurveGeometry::Line { end, .. } => end,
        }
    }

    /// Returns `true` if the curve is a circular arc.
    #[must_use]
    pub fn is_arc(&self) -> bool {
        matches!(self.geometry, CurveGeometry::Arc { .. })
    }
}
