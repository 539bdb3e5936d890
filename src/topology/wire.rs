use crate::id::{CurveId, WireId};

/// Number of curves bounding each half-annulus loop.
pub const CURVES_PER_WIRE: usize = 4;

/// An ordered, directed cycle of curves bounding one half-annulus.
///
/// The order defines the loop traversal and thereby the orientation of
/// the bounded side. Each wire holds exactly two arcs and two lines.
#[derive(Debug, Clone, Copy)]
pub struct Wire {
    id: WireId,
    curves: [CurveId; CURVES_PER_WIRE],
}

impl Wire {
    pub(crate) fn new(id: WireId, curves: [CurveId; CURVES_PER_WIRE]) -> Self {
        Self { id, curves }
    }

    /// Returns the numeric label of the wire.
    #[must_use]
    pub fn id(&self) -> WireId {
        self.id
    }

    /// Returns the curves of the loop, in traversal order.
    #[must_use]
    pub fn curves(&self) -> &[CurveId; CURVES_PER_WIRE] {
        &self.curves
    }
}
