use crate::id::{CurveId, MaterialId, PointId, SideId, WireId};
use crate::math::Point2;

/// Aggregate produced by one ring-construction step.
///
/// A ring is an annular sector split into an upper and a lower
/// half-annulus. The two halves share the two radial cutting lines and
/// the arc-midpoint divisions, so one ring always owns 8 points,
/// 6 curves, 2 wires and 2 sides, all allocated together.
///
/// The 8 points decompose as 4 inner-circle and 4 outer-circle points,
/// each set holding 2 pole points (at ±aperture/2 from the sector's
/// local downward axis) and 2 axis points bisecting the half-arcs.
/// For an aperture of 360° the poles coincide with the axis points;
/// callers must not assume pole ≠ axis point.
#[derive(Debug, Clone)]
pub struct Ring {
    center: Point2,
    inner_radius: f64,
    outer_radius: f64,
    aperture_angle: f64,
    rotation_angle: f64,
    points: [PointId; 8],
    inner_arc_1: CurveId,
    inner_arc_2: CurveId,
    outer_arc_1: CurveId,
    outer_arc_2: CurveId,
    cut_line_1: CurveId,
    cut_line_2: CurveId,
    wires: [WireId; 2],
    sides: [SideId; 2],
    material: Option<MaterialId>,
    contact_property: Option<MaterialId>,
}

pub(crate) struct RingEntities {
    pub points: [PointId; 8],
    pub curves: [CurveId; 6],
    pub wires: [WireId; 2],
    pub sides: [SideId; 2],
}

impl Ring {
    pub(crate) fn new(
        center: Point2,
        inner_radius: f64,
        outer_radius: f64,
        aperture_angle: f64,
        rotation_angle: f64,
        entities: &RingEntities,
    ) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            aperture_angle,
            rotation_angle,
            points: entities.points,
            inner_arc_1: entities.curves[0],
            inner_arc_2: entities.curves[1],
            outer_arc_1: entities.curves[2],
            outer_arc_2: entities.curves[3],
            cut_line_1: entities.curves[4],
            cut_line_2: entities.curves[5],
            wires: entities.wires,
            sides: entities.sides,
            material: None,
            contact_property: None,
        }
    }

    /// Returns the center of the ring.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the inner radius of the ring.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Returns the outer radius of the ring.
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Returns the radial thickness of the ring.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }

    /// Returns the angular extent of the sector, in degrees.
    #[must_use]
    pub fn aperture_angle(&self) -> f64 {
        self.aperture_angle
    }

    /// Returns the rotation applied to the sector, in degrees.
    #[must_use]
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Returns the 8 boundary points: inner pole 1, inner axis top,
    /// inner pole 2, inner axis bottom, then the outer counterparts.
    #[must_use]
    pub fn points(&self) -> &[PointId; 8] {
        &self.points
    }

    /// First half of the inner boundary, from pole 1 through the top
    /// axis point to pole 2.
    #[must_use]
    pub fn inner_arc_1(&self) -> CurveId {
        self.inner_arc_1
    }

    /// Second half of the inner boundary, from pole 2 through the
    /// bottom axis point back to pole 1.
    #[must_use]
    pub fn inner_arc_2(&self) -> CurveId {
        self.inner_arc_2
    }

    /// First half of the outer boundary.
    #[must_use]
    pub fn outer_arc_1(&self) -> CurveId {
        self.outer_arc_1
    }

    /// Second half of the outer boundary.
    #[must_use]
    pub fn outer_arc_2(&self) -> CurveId {
        self.outer_arc_2
    }

    /// Radial cutting line joining the pole-1 points.
    #[must_use]
    pub fn cut_line_1(&self) -> CurveId {
        self.cut_line_1
    }

    /// Radial cutting line joining the pole-2 points.
    #[must_use]
    pub fn cut_line_2(&self) -> CurveId {
        self.cut_line_2
    }

    /// Returns the two wires: upper half-annulus first.
    #[must_use]
    pub fn wires(&self) -> &[WireId; 2] {
        &self.wires
    }

    /// Returns the two sides: upper half-annulus first.
    #[must_use]
    pub fn sides(&self) -> &[SideId; 2] {
        &self.sides
    }

    /// Returns the attached constitutive material, if any.
    #[must_use]
    pub fn material(&self) -> Option<MaterialId> {
        self.material
    }

    /// Returns the attached contact property, if any.
    #[must_use]
    pub fn contact_property(&self) -> Option<MaterialId> {
        self.contact_property
    }

    pub(crate) fn set_material(&mut self, id: MaterialId) {
        self.material = Some(id);
    }

    pub(crate) fn set_contact_property(&mut self, id: MaterialId) {
        self.contact_property = Some(id);
    }
}
