//! Interactions: volume-element field applicators and contact pairs.
//!
//! Both kinds consume labels from the same interaction counter, so a
//! model mixing element fields and contact definitions keeps one global
//! interaction numbering, as the external engine expects.

use crate::error::ModelError;
use crate::id::{CurveId, InteractionId, MaterialId, SideId};
use crate::topology::Ring;

use super::Model;

/// Volumetric integration scheme of the continuum elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeScheme {
    /// Standard integration; prone to volumetric locking for
    /// quasi-incompressible materials.
    Standard,
    /// Selective reduced integration of the pressure term.
    SelectiveReduced,
}

/// Registration of 2D volume elements over the two sides of a ring.
#[derive(Debug, Clone)]
pub struct FieldApplicator {
    id: InteractionId,
    material: MaterialId,
    scheme: VolumeScheme,
    sides: [SideId; 2],
}

impl FieldApplicator {
    /// Returns the numeric label of the field applicator.
    #[must_use]
    pub fn id(&self) -> InteractionId {
        self.id
    }

    /// Returns the constitutive material the elements reference.
    #[must_use]
    pub fn material(&self) -> MaterialId {
        self.material
    }

    /// Returns the volumetric integration scheme.
    #[must_use]
    pub fn scheme(&self) -> VolumeScheme {
        self.scheme
    }

    /// Returns the sides the elements cover.
    #[must_use]
    pub fn sides(&self) -> &[SideId; 2] {
        &self.sides
    }
}

/// One directed contact pair.
///
/// The tool is the presumed penetrating curve; the target is the curve
/// it may penetrate. The direction is a modeling convention the external
/// engine gives meaning to, so it is carried explicitly rather than by
/// argument position. A pair with `tool == target` models a curve in
/// contact with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub tool: CurveId,
    pub target: CurveId,
    pub interaction: InteractionId,
}

/// A recorded contact interaction: a directed pair plus the contact
/// property set that parameterizes its penalty law.
#[derive(Debug, Clone, Copy)]
pub struct ContactInteraction {
    pair: ContactPair,
    property: MaterialId,
}

impl ContactInteraction {
    /// Returns the directed pair.
    #[must_use]
    pub fn pair(&self) -> ContactPair {
        self.pair
    }

    /// Returns the contact property set of the interaction.
    #[must_use]
    pub fn property(&self) -> MaterialId {
        self.property
    }

    /// Returns `true` for a single-surface (self) contact interaction.
    #[must_use]
    pub fn is_self(&self) -> bool {
        self.pair.tool == self.pair.target
    }
}

impl Model {
    /// Registers 2D volume elements over both sides of a ring.
    ///
    /// Consumes one interaction id.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring has no constitutive material
    /// attached yet.
    pub fn assign_volume_elements(
        &mut self,
        ring: &Ring,
        scheme: VolumeScheme,
    ) -> Result<InteractionId, ModelError> {
        let material = ring.material().ok_or(ModelError::MissingMaterial)?;
        let id = self.allocator_mut().alloc_interactions(1).first();
        self.field_applicators.push(FieldApplicator {
            id,
            material,
            scheme,
            sides: *ring.sides(),
        });
        Ok(id)
    }

    /// Enumerates the contact pairs of a ring against itself.
    ///
    /// Returns exactly 3 pairs: each inner half-arc against itself, and
    /// the first inner arc (tool) against the second (target). Consumes
    /// 3 interaction ids, strictly increasing in the returned order.
    ///
    /// # Errors
    ///
    /// Returns an error if the ring has no contact property attached.
    pub fn enumerate_self_contact(&mut self, ring: &Ring) -> Result<Vec<ContactPair>, ModelError> {
        let property = ring
            .contact_property()
            .ok_or(ModelError::MissingContactProperty)?;
        let block = self.allocator_mut().alloc_interactions(3);
        let pairs = vec![
            ContactPair {
                tool: ring.inner_arc_1(),
                target: ring.inner_arc_1(),
                interaction: block.id(0),
            },
            ContactPair {
                tool: ring.inner_arc_2(),
                target: ring.inner_arc_2(),
                interaction: block.id(1),
            },
            ContactPair {
                tool: ring.inner_arc_1(),
                target: ring.inner_arc_2(),
                interaction: block.id(2),
            },
        ];
        self.record_contacts(&pairs, property);
        Ok(pairs)
    }

    /// Enumerates the contact pairs between the outer boundaries of two
    /// rings, `a` supplying the tools.
    ///
    /// Returns the 4 combinations of outer half-arcs in the order
    /// (1-1, 2-2, 1-2, 2-1). The contact property of the tool ring
    /// parameterizes every pair. Consumes 4 interaction ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool ring has no contact property
    /// attached.
    pub fn enumerate_outer_outer_contact(
        &mut self,
        a: &Ring,
        b: &Ring,
    ) -> Result<Vec<ContactPair>, ModelError> {
        let property = a
            .contact_property()
            .ok_or(ModelError::MissingContactProperty)?;
        let block = self.allocator_mut().alloc_interactions(4);
        let pairs = vec![
            ContactPair {
                tool: a.outer_arc_1(),
                target: b.outer_arc_1(),
                interaction: block.id(0),
            },
            ContactPair {
                tool: a.outer_arc_2(),
                target: b.outer_arc_2(),
                interaction: block.id(1),
            },
            ContactPair {
                tool: a.outer_arc_1(),
                target: b.outer_arc_2(),
                interaction: block.id(2),
            },
            ContactPair {
                tool: a.outer_arc_2(),
                target: b.outer_arc_1(),
                interaction: block.id(3),
            },
        ];
        self.record_contacts(&pairs, property);
        Ok(pairs)
    }

    /// Enumerates the contact pairs between the inner boundary of an
    /// enclosing ring and the outer boundary of the ring inside it.
    ///
    /// The enclosing ring's inner half-arcs are the tools; the enclosed
    /// ring's outer half-arcs are the targets, in the order
    /// (1-1, 2-2, 1-2, 2-1). The enclosed ring's contact property
    /// parameterizes every pair. Consumes 4 interaction ids.
    ///
    /// # Errors
    ///
    /// Returns an error if the enclosed ring has no contact property
    /// attached.
    pub fn enumerate_outer_inner_contact(
        &mut self,
        enclosing: &Ring,
        enclosed: &Ring,
    ) -> Result<Vec<ContactPair>, ModelError> {
        let property = enclosed
            .contact_property()
            .ok_or(ModelError::MissingContactProperty)?;
        let block = self.allocator_mut().alloc_interactions(4);
        let pairs = vec![
            ContactPair {
                tool: enclosing.inner_arc_1(),
                target: enclosed.outer_arc_1(),
                interaction: block.id(0),
            },
            ContactPair {
                tool: enclosing.inner_arc_2(),
                target: enclosed.outer_arc_2(),
                interaction: block.id(1),
            },
            ContactPair {
                tool: enclosing.inner_arc_1(),
                target: enclosed.outer_arc_2(),
                interaction: block.id(2),
            },
            ContactPair {
                tool: enclosing.inner_arc_2(),
                target: enclosed.outer_arc_1(),
                interaction: block.id(3),
            },
        ];
        self.record_contacts(&pairs, property);
        Ok(pairs)
    }

    fn record_contacts(&mut self, pairs: &[ContactPair], property: MaterialId) {
        for pair in pairs {
            self.contact_interactions.push(ContactInteraction {
                pair: *pair,
                property,
            });
        }
    }

    /// Iterates over the recorded field applicators.
    pub fn field_applicators(&self) -> impl Iterator<Item = &FieldApplicator> {
        self.field_applicators.iter()
    }

    /// Iterates over the recorded contact interactions.
    pub fn contact_interactions(&self) -> impl Iterator<Item = &ContactInteraction> {
        self.contact_interactions.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::id::EntityId;
    use crate::math::Point2;
    use crate::model::material::{CoulombContact, ElasticMaterial};
    use crate::operations::BuildRing;

    fn contact_law() -> CoulombContact {
        CoulombContact {
            normal_penalty: 1e6,
            tangent_penalty: 1e6,
            contact_depth: 0.5,
            static_friction: 0.3,
            dynamic_friction: 0.3,
        }
    }

    fn ring_with_contact(model: &mut Model, center: (f64, f64)) -> Ring {
        let mut ring = BuildRing::new(Point2::new(center.0, center.1), 1.0, 2.0)
            .execute(model)
            .unwrap();
        model.attach_coulomb_contact(&mut ring, contact_law());
        ring
    }

    fn interaction_ids(pairs: &[ContactPair]) -> Vec<u32> {
        pairs.iter().map(|pair| pair.interaction.raw()).collect()
    }

    #[test]
    fn self_contact_yields_three_increasing_pairs() {
        let mut model = Model::new();
        let ring = ring_with_contact(&mut model, (0.0, 0.0));
        let pairs = model.enumerate_self_contact(&ring).unwrap();

        assert_eq!(pairs.len(), 3);
        assert_eq!(interaction_ids(&pairs), vec![1, 2, 3]);
        assert_eq!(pairs[0].tool, pairs[0].target);
        assert_eq!(pairs[1].tool, pairs[1].target);
        assert_eq!(pairs[2].tool, ring.inner_arc_1());
        assert_eq!(pairs[2].target, ring.inner_arc_2());
    }

    #[test]
    fn outer_outer_contact_yields_four_pairs_with_tools_from_first_ring() {
        let mut model = Model::new();
        let a = ring_with_contact(&mut model, (0.0, 0.0));
        let b = ring_with_contact(&mut model, (5.0, 0.0));
        let pairs = model.enumerate_outer_outer_contact(&a, &b).unwrap();

        assert_eq!(pairs.len(), 4);
        assert_eq!(interaction_ids(&pairs), vec![1, 2, 3, 4]);
        for pair in &pairs {
            assert!(pair.tool == a.outer_arc_1() || pair.tool == a.outer_arc_2());
            assert!(pair.target == b.outer_arc_1() || pair.target == b.outer_arc_2());
        }
    }

    #[test]
    fn outer_inner_contact_pairs_enclosing_inner_arcs_as_tools() {
        let mut model = Model::new();
        let enclosed = ring_with_contact(&mut model, (0.0, 0.0));
        let enclosing = ring_with_contact(&mut model, (0.0, 0.0));
        let pairs = model
            .enumerate_outer_inner_contact(&enclosing, &enclosed)
            .unwrap();

        assert_eq!(pairs.len(), 4);
        assert_eq!(pairs[0].tool, enclosing.inner_arc_1());
        assert_eq!(pairs[0].target, enclosed.outer_arc_1());
        assert_eq!(pairs[3].tool, enclosing.inner_arc_2());
        assert_eq!(pairs[3].target, enclosed.outer_arc_1());

        // The enclosed ring supplies the contact law.
        let recorded: Vec<_> = model.contact_interactions().collect();
        assert!(recorded
            .iter()
            .all(|ci| ci.property() == enclosed.contact_property().unwrap()));
    }

    #[test]
    fn contact_requires_an_attached_property() {
        let mut model = Model::new();
        let ring = BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(&mut model)
            .unwrap();
        let result = model.enumerate_self_contact(&ring);
        assert!(matches!(result, Err(ModelError::MissingContactProperty)));
        // Nothing was consumed or recorded.
        assert_eq!(model.allocator().next_interaction().raw(), 1);
        assert_eq!(model.contact_interactions().count(), 0);
    }

    #[test]
    fn volume_elements_require_a_material_and_share_the_counter() {
        let mut model = Model::new();
        let mut ring = BuildRing::new(Point2::new(0.0, 0.0), 1.0, 2.0)
            .execute(&mut model)
            .unwrap();

        let missing = model.assign_volume_elements(&ring, VolumeScheme::Standard);
        assert!(matches!(missing, Err(ModelError::MissingMaterial)));

        model.attach_elastic_material(
            &mut ring,
            ElasticMaterial {
                mass_density: 1e-7,
                elastic_modulus: 10e3,
                poisson_ratio: 0.125,
            },
        );
        model.attach_coulomb_contact(&mut ring, contact_law());

        let field = model
            .assign_volume_elements(&ring, VolumeScheme::SelectiveReduced)
            .unwrap();
        let pairs = model.enumerate_self_contact(&ring).unwrap();
        assert_eq!(field.raw(), 1);
        assert_eq!(interaction_ids(&pairs), vec![2, 3, 4]);

        let applicator = model.field_applicators().next().unwrap();
        assert_eq!(applicator.scheme(), VolumeScheme::SelectiveReduced);
        assert_eq!(applicator.sides(), ring.sides());
    }
}
