//! Output-extractor registrations.
//!
//! Extraction itself happens in the external engine; the model records
//! which quantities should be archived and under which label.

use crate::id::CurveId;

use super::loading::Dof;
use super::Model;

/// The field a nodal extractor samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Displacement relative to the reference configuration.
    Displacement,
    /// Absolute nodal position.
    AbsolutePosition,
    /// Generalized velocity.
    Velocity,
}

/// What an extractor samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorKind {
    /// The simulation time of each archived state.
    SimulationTime,
    /// A nodal field along one curve, nodes ordered by their curvilinear
    /// coordinate.
    NodalField {
        curve: CurveId,
        dof: Dof,
        field: FieldKind,
    },
}

/// A registered output extractor.
#[derive(Debug, Clone)]
pub struct Extractor {
    slot: u32,
    kind: ExtractorKind,
    label: String,
}

impl Extractor {
    /// Returns the 1-based registration slot.
    #[must_use]
    pub fn slot(&self) -> u32 {
        self.slot
    }

    /// Returns what the extractor samples.
    #[must_use]
    pub fn kind(&self) -> ExtractorKind {
        self.kind
    }

    /// Returns the archive label of the extractor.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Model {
    /// Registers an output extractor and returns its slot.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_extractor(&mut self, kind: ExtractorKind, label: &str) -> u32 {
        let slot = self.extractors.len() as u32 + 1;
        self.extractors.push(Extractor {
            slot,
            kind,
            label: label.to_owned(),
        });
        slot
    }

    /// Iterates over the registered extractors in slot order.
    pub fn extractors(&self) -> impl Iterator<Item = &Extractor> {
        self.extractors.iter()
    }
}
