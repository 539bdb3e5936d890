use crate::id::{SideId, WireId};

/// A meshable 2D region bounded by exactly one wire.
#[derive(Debug, Clone, Copy)]
pub struct Side {
    id: SideId,
    wire: WireId,
}

impl Side {
    pub(crate) fn new(id: SideId, wire: WireId) -> Self {
        Self { id, wire }
    }

    /// Returns the numeric label of the side.
    #[must_use]
    pub fn id(&self) -> SideId {
        self.id
    }

    /// Returns the bounding wire.
    #[must_use]
    pub fn wire(&self) -> WireId {
        self.wire
    }
}
