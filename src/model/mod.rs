pub mod archive;
pub mod integration;
pub mod interaction;
pub mod loading;
pub mod material;
pub mod mesh;

pub use archive::{Extractor, ExtractorKind, FieldKind};
pub use integration::TimeIntegration;
pub use interaction::{ContactInteraction, ContactPair, FieldApplicator, VolumeScheme};
pub use loading::{Dof, FieldTarget, Prescription};
pub use material::{CoulombContact, ElasticMaterial, Material, MaterialKind, MaterialProperty};
pub use mesh::MeshDensity;

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ModelError;
use crate::geometry::{Curve, Point};
use crate::id::{CurveId, IdAllocator, MaterialId, PointId, SideId, WireId};
use crate::topology::{Side, Wire};

/// In-memory description of one FE problem, built once and then handed
/// to the external solving engine.
///
/// The model is append-only: entities are created during construction
/// and never mutated or deleted. A failed builder call leaves the model
/// and its id counters untouched, so later steps never observe a
/// partially built ring.
#[derive(Debug)]
pub struct Model {
    allocator: IdAllocator,
    points: BTreeMap<PointId, Point>,
    curves: BTreeMap<CurveId, Curve>,
    wires: BTreeMap<WireId, Wire>,
    sides: BTreeMap<SideId, Side>,
    pub(crate) materials: BTreeMap<MaterialId, Material>,
    pub(crate) field_applicators: Vec<FieldApplicator>,
    pub(crate) contact_interactions: Vec<ContactInteraction>,
    pub(crate) curve_densities: BTreeMap<CurveId, u32>,
    pub(crate) transfinite_sides: BTreeSet<SideId>,
    pub(crate) loadings: Vec<Prescription>,
    pub(crate) initial_conditions: Vec<Prescription>,
    pub(crate) time_integration: Option<TimeIntegration>,
    pub(crate) extractors: Vec<Extractor>,
    plane_strain_thickness: f64,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// Creates a new, empty model with a fresh id allocator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            allocator: IdAllocator::new(),
            points: BTreeMap::new(),
            curves: BTreeMap::new(),
            wires: BTreeMap::new(),
            sides: BTreeMap::new(),
            materials: BTreeMap::new(),
            field_applicators: Vec::new(),
            contact_interactions: Vec::new(),
            curve_densities: BTreeMap::new(),
            transfinite_sides: BTreeSet::new(),
            loadings: Vec::new(),
            initial_conditions: Vec::new(),
            time_integration: None,
            extractors: Vec::new(),
            plane_strain_thickness: 1.0,
        }
    }

    /// Returns the id allocator of the model.
    #[must_use]
    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    pub(crate) fn allocator_mut(&mut self) -> &mut IdAllocator {
        &mut self.allocator
    }

    // --- Entity recording (append-only) ---

    pub(crate) fn record_point(&mut self, point: Point) {
        let prev = self.points.insert(point.id(), point);
        assert!(prev.is_none(), "duplicate point id");
    }

    pub(crate) fn record_curve(&mut self, curve: Curve) {
        let prev = self.curves.insert(curve.id(), curve);
        assert!(prev.is_none(), "duplicate curve id");
    }

    pub(crate) fn record_wire(&mut self, wire: Wire) {
        let prev = self.wires.insert(wire.id(), wire);
        assert!(prev.is_none(), "duplicate wire id");
    }

    pub(crate) fn record_side(&mut self, side: Side) {
        let prev = self.sides.insert(side.id(), side);
        assert!(prev.is_none(), "duplicate side id");
    }

    // --- Entity queries ---

    /// Returns the point with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not part of the model.
    pub fn point(&self, id: PointId) -> Result<&Point, ModelError> {
        self.points
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))
    }

    /// Returns the curve with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not part of the model.
    pub fn curve(&self, id: CurveId) -> Result<&Curve, ModelError> {
        self.curves
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))
    }

    /// Returns the wire with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not part of the model.
    pub fn wire(&self, id: WireId) -> Result<&Wire, ModelError> {
        self.wires
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))
    }

    /// Returns the side with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not part of the model.
    pub fn side(&self, id: SideId) -> Result<&Side, ModelError> {
        self.sides
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))
    }

    /// Number of points in the model.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of curves in the model.
    #[must_use]
    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    /// Number of wires in the model.
    #[must_use]
    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    /// Number of sides in the model.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.sides.len()
    }

    /// Iterates over all points in increasing id order.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// Iterates over all curves in increasing id order.
    pub fn curves(&self) -> impl Iterator<Item = &Curve> {
        self.curves.values()
    }

    /// Iterates over all wires in increasing id order.
    pub fn wires(&self) -> impl Iterator<Item = &Wire> {
        self.wires.values()
    }

    /// Iterates over all sides in increasing id order.
    pub fn sides(&self) -> impl Iterator<Item = &Side> {
        self.sides.values()
    }

    // --- Topological checks ---

    /// Verifies by graph traversal that a wire forms a closed cycle.
    ///
    /// Each curve may be traversed in either direction; the loop is
    /// closed when consecutive curves share an endpoint and the last
    /// curve returns to the starting point. Point identity is checked
    /// by id, so coincident coordinates (aperture 360°) do not fuse
    /// distinct points.
    ///
    /// # Errors
    ///
    /// Returns an error if the wire or one of its curves is not part
    /// of the model.
    pub fn wire_is_closed(&self, id: WireId) -> Result<bool, ModelError> {
        let wire = self.wire(id)?;
        let mut curves = Vec::with_capacity(wire.curves().len());
        for curve_id in wire.curves() {
            curves.push(self.curve(*curve_id)?);
        }

        let Some((first, rest)) = curves.split_first() else {
            return Ok(false);
        };

        'orientation: for forward in [true, false] {
            let (start, mut current) = if forward {
                (first.start_point(), first.end_point())
            } else {
                (first.end_point(), first.start_point())
            };
            for curve in rest {
                if curve.start_point() == current {
                    current = curve.end_point();
                } else if curve.end_point() == current {
                    current = curve.start_point();
                } else {
                    continue 'orientation;
                }
            }
            if current == start {
                return Ok(true);
            }
        }
        Ok(false)
    }

    // --- Problem-wide settings ---

    /// Declares the problem as plane strain with the given thickness.
    pub fn set_plane_strain_thickness(&mut self, thickness: f64) {
        self.plane_strain_thickness = thickness;
    }

    /// Returns the plane-strain thickness of the problem.
    #[must_use]
    pub fn plane_strain_thickness(&self) -> f64 {
        self.plane_strain_thickness
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::CurveGeometry;
    use crate::id::EntityId;
    use crate::math::Point2;

    fn line(id: u32, start: u32, end: u32) -> Curve {
        Curve::new(
            CurveId::from_raw(id),
            CurveGeometry::Line {
                start: PointId::from_raw(start),
                end: PointId::from_raw(end),
            },
        )
    }

    #[test]
    fn open_chain_is_not_a_closed_wire() {
        let mut model = Model::new();
        for raw in 1..=5 {
            model.record_point(Point::new(
                PointId::from_raw(raw),
                Point2::new(f64::from(raw), 0.0),
            ));
        }
        // 1-2-3-4 closes back to 1; the open variant ends at 5.
        model.record_curve(line(1, 1, 2));
        model.record_curve(line(2, 2, 3));
        model.record_curve(line(3, 3, 4));
        model.record_curve(line(4, 4, 1));
        model.record_curve(line(5, 4, 5));
        model.record_wire(Wire::new(
            WireId::from_raw(1),
            [1, 2, 3, 4].map(CurveId::from_raw),
        ));
        model.record_wire(Wire::new(
            WireId::from_raw(2),
            [1, 2, 3, 5].map(CurveId::from_raw),
        ));

        assert!(model.wire_is_closed(WireId::from_raw(1)).unwrap());
        assert!(!model.wire_is_closed(WireId::from_raw(2)).unwrap());
    }

    #[test]
    fn unknown_wire_is_an_error() {
        let model = Model::new();
        assert!(model.wire_is_closed(WireId::from_raw(7)).is_err());
    }

    #[test]
    fn plane_strain_defaults_to_unit_thickness() {
        let mut model = Model::new();
        assert!((model.plane_strain_thickness() - 1.0).abs() < f64::EPSILON);
        model.set_plane_strain_thickness(2.5);
        assert!((model.plane_strain_thickness() - 2.5).abs() < f64::EPSILON);
    }
}
