//! Per-curve element counts and the transfinite meshing directive.
//!
//! Mesh generation itself is the external engine's job; the model only
//! records how many 1D elements each boundary curve carries and which
//! sides are meshed with structured quadrilaterals.

use crate::error::MeshError;
use crate::id::{CurveId, SideId};
use crate::topology::Ring;

use super::Model;

/// Element counts for the six curves of a ring.
///
/// `coarse` applies to the first inner and outer half-arcs, `fine` to
/// the second halves, `radial` to the two cutting lines.
#[derive(Debug, Clone, Copy)]
pub struct MeshDensity {
    pub radial: u32,
    pub coarse: u32,
    pub fine: u32,
}

impl MeshDensity {
    /// Creates a density assignment from the three element counts.
    #[must_use]
    pub fn new(radial: u32, coarse: u32, fine: u32) -> Self {
        Self {
            radial,
            coarse,
            fine,
        }
    }

    /// Uniform density: the same contour count on all four arcs.
    #[must_use]
    pub fn uniform(radial: u32, contour: u32) -> Self {
        Self::new(radial, contour, contour)
    }

    fn validate(self) -> Result<(), MeshError> {
        for (slot, count) in [
            ("radial", self.radial),
            ("coarse contour", self.coarse),
            ("fine contour", self.fine),
        ] {
            if count < 1 {
                return Err(MeshError::InvalidMeshDensity { slot, count });
            }
        }
        Ok(())
    }
}

impl Model {
    /// Assigns 1D element counts to the six curves of a ring and marks
    /// both sides for structured (transfinite) quadrilateral meshing.
    ///
    /// Element counts on curves facing each other across a contact pair
    /// should be of similar magnitude; strongly mismatched counts make
    /// the engine's node-to-segment pairing ill-conditioned. This is a
    /// caller responsibility and is not enforced here.
    ///
    /// # Errors
    ///
    /// Fails without recording anything if any count is < 1.
    pub fn assign_mesh_density(&mut self, ring: &Ring, density: MeshDensity) -> Result<(), MeshError> {
        density.validate()?;

        self.curve_densities.insert(ring.inner_arc_1(), density.coarse);
        self.curve_densities.insert(ring.inner_arc_2(), density.fine);
        self.curve_densities.insert(ring.outer_arc_1(), density.coarse);
        self.curve_densities.insert(ring.outer_arc_2(), density.fine);
        self.curve_densities.insert(ring.cut_line_1(), density.radial);
        self.curve_densities.insert(ring.cut_line_2(), density.radial);

        for side in ring.sides() {
            self.transfinite_sides.insert(*side);
        }
        Ok(())
    }

    /// Returns the element count assigned to a curve, if any.
    #[must_use]
    pub fn curve_density(&self, curve: CurveId) -> Option<u32> {
        self.curve_densities.get(&curve).copied()
    }

    /// Returns `true` if the side is marked for transfinite meshing.
    #[must_use]
    pub fn is_transfinite(&self, side: SideId) -> bool {
        self.transfinite_sides.contains(&side)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::BuildRing;

    fn ring_in(model: &mut Model) -> Ring {
        BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(model)
            .unwrap()
    }

    #[test]
    fn maps_counts_onto_the_six_curves() {
        let mut model = Model::new();
        let ring = ring_in(&mut model);
        model
            .assign_mesh_density(&ring, MeshDensity::new(3, 30, 40))
            .unwrap();

        assert_eq!(model.curve_density(ring.inner_arc_1()), Some(30));
        assert_eq!(model.curve_density(ring.inner_arc_2()), Some(40));
        assert_eq!(model.curve_density(ring.outer_arc_1()), Some(30));
        assert_eq!(model.curve_density(ring.outer_arc_2()), Some(40));
        assert_eq!(model.curve_density(ring.cut_line_1()), Some(3));
        assert_eq!(model.curve_density(ring.cut_line_2()), Some(3));
        for side in ring.sides() {
            assert!(model.is_transfinite(*side));
        }
    }

    #[test]
    fn rejects_zero_counts_without_recording() {
        let mut model = Model::new();
        let ring = ring_in(&mut model);
        let result = model.assign_mesh_density(&ring, MeshDensity::new(0, 30, 40));
        assert!(matches!(
            result,
            Err(MeshError::InvalidMeshDensity { slot: "radial", .. })
        ));
        assert_eq!(model.curve_density(ring.inner_arc_1()), None);
        assert!(!model.is_transfinite(ring.sides()[0]));
    }

    #[test]
    fn uniform_density_uses_one_contour_count() {
        let density = MeshDensity::uniform(5, 80);
        assert_eq!(density.coarse, 80);
        assert_eq!(density.fine, 80);
        assert_eq!(density.radial, 5);
    }
}
