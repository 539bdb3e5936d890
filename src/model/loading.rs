//! Boundary and initial conditions, recorded as opaque field
//! prescriptions on curves and sides.

use crate::error::ModelError;
use crate::id::{CurveId, SideId};
use crate::topology::Ring;

use super::Model;

/// Translational degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dof {
    X,
    Y,
}

/// The entity a field prescription applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    Curve(CurveId),
    Side(SideId),
}

/// One prescribed field value on a curve or side.
#[derive(Debug, Clone, Copy)]
pub struct Prescription {
    pub target: FieldTarget,
    pub dof: Dof,
    pub value: f64,
}

impl Model {
    /// Prescribes a zero displacement on a curve for one degree of
    /// freedom (Dirichlet condition).
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not part of the model.
    pub fn fix_curve(&mut self, curve: CurveId, dof: Dof) -> Result<(), ModelError> {
        self.prescribe_displacement(FieldTarget::Curve(curve), dof, 0.0)
    }

    /// Prescribes a displacement value on a curve or side.
    ///
    /// # Errors
    ///
    /// Returns an error if the target entity is not part of the model.
    pub fn prescribe_displacement(
        &mut self,
        target: FieldTarget,
        dof: Dof,
        value: f64,
    ) -> Result<(), ModelError> {
        self.check_target(target)?;
        self.loadings.push(Prescription { target, dof, value });
        Ok(())
    }

    /// Gives both sides of a ring an initial velocity.
    pub fn set_initial_velocity(&mut self, ring: &Ring, vx: f64, vy: f64) {
        for side in ring.sides() {
            self.initial_conditions.push(Prescription {
                target: FieldTarget::Side(*side),
                dof: Dof::X,
                value: vx,
            });
            self.initial_conditions.push(Prescription {
                target: FieldTarget::Side(*side),
                dof: Dof::Y,
                value: vy,
            });
        }
    }

    /// Iterates over the recorded boundary-condition prescriptions.
    pub fn loadings(&self) -> impl Iterator<Item = &Prescription> {
        self.loadings.iter()
    }

    /// Iterates over the recorded initial-condition prescriptions.
    pub fn initial_conditions(&self) -> impl Iterator<Item = &Prescription> {
        self.initial_conditions.iter()
    }

    fn check_target(&self, target: FieldTarget) -> Result<(), ModelError> {
        match target {
            FieldTarget::Curve(id) => self.curve(id).map(|_| ()),
            FieldTarget::Side(id) => self.side(id).map(|_| ()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::BuildRing;

    #[test]
    fn fixing_a_curve_records_a_zero_displacement() {
        let mut model = Model::new();
        let ring = BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(&mut model)
            .unwrap();

        model.fix_curve(ring.outer_arc_1(), Dof::X).unwrap();
        model.fix_curve(ring.outer_arc_1(), Dof::Y).unwrap();

        let loadings: Vec<_> = model.loadings().collect();
        assert_eq!(loadings.len(), 2);
        assert_eq!(loadings[0].target, FieldTarget::Curve(ring.outer_arc_1()));
        assert_eq!(loadings[0].value, 0.0);
    }

    #[test]
    fn prescribing_on_an_unknown_entity_is_an_error() {
        let mut model = Model::new();
        let ring = BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(&mut model)
            .unwrap();
        let mut empty = Model::new();
        let result = empty.fix_curve(ring.outer_arc_1(), Dof::X);
        assert!(matches!(result, Err(ModelError::EntityNotFound(_))));
        assert_eq!(empty.loadings().count(), 0);
    }

    #[test]
    fn initial_velocity_covers_both_sides_and_both_dofs() {
        let mut model = Model::new();
        let ring = BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(&mut model)
            .unwrap();

        model.set_initial_velocity(&ring, 30e3, -30e3);
        let conditions: Vec<_> = model.initial_conditions().collect();
        assert_eq!(conditions.len(), 4);
        assert!(conditions
            .iter()
            .any(|p| p.target == FieldTarget::Side(ring.sides()[1]) && p.dof == Dof::Y));
        assert!(conditions.iter().all(|p| p.value.abs() == 30e3));
    }
}
