//! Material definitions: opaque key/value property sets the external
//! engine interprets, plus convenience decorators for rings.

use std::collections::BTreeMap;

use crate::error::ModelError;
use crate::id::MaterialId;
use crate::topology::Ring;

use super::Model;

/// The material law a property set parameterizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Hypoelastic constitutive law for the ring bulk.
    ElasticHypo,
    /// Coulomb friction penalty law for contact elements.
    CoulombContact,
    /// Penalty contact law without friction.
    FrictionlessContact,
}

/// Property keys the external engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MaterialProperty {
    MassDensity,
    ElasticModulus,
    PoissonRatio,
    NormalPenalty,
    TangentPenalty,
    ContactDepth,
    StaticFriction,
    DynamicFriction,
}

/// A material: a law kind plus the key/value properties written into it.
///
/// The builder records properties without interpreting them.
#[derive(Debug, Clone)]
pub struct Material {
    id: MaterialId,
    kind: MaterialKind,
    properties: BTreeMap<MaterialProperty, f64>,
}

impl Material {
    fn new(id: MaterialId, kind: MaterialKind) -> Self {
        Self {
            id,
            kind,
            properties: BTreeMap::new(),
        }
    }

    /// Returns the numeric label of the material.
    #[must_use]
    pub fn id(&self) -> MaterialId {
        self.id
    }

    /// Returns the law kind of the material.
    #[must_use]
    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    /// Returns a recorded property value, if present.
    #[must_use]
    pub fn get(&self, key: MaterialProperty) -> Option<f64> {
        self.properties.get(&key).copied()
    }
}

/// Parameters of a hypoelastic bulk material.
#[derive(Debug, Clone, Copy)]
pub struct ElasticMaterial {
    pub mass_density: f64,
    pub elastic_modulus: f64,
    pub poisson_ratio: f64,
}

/// Parameters of a Coulomb penalty contact law.
#[derive(Debug, Clone, Copy)]
pub struct CoulombContact {
    pub normal_penalty: f64,
    pub tangent_penalty: f64,
    /// Maximum penetration depth the contact search considers.
    pub contact_depth: f64,
    pub static_friction: f64,
    pub dynamic_friction: f64,
}

impl Model {
    fn define_material_with(
        &mut self,
        kind: MaterialKind,
        entries: &[(MaterialProperty, f64)],
    ) -> MaterialId {
        let id = self.allocator_mut().alloc_material();
        let mut material = Material::new(id, kind);
        material.properties.extend(entries.iter().copied());
        let prev = self.materials.insert(id, material);
        assert!(prev.is_none(), "duplicate material id");
        id
    }

    /// Defines a new material of the given kind and returns its id.
    pub fn define_material(&mut self, kind: MaterialKind) -> MaterialId {
        self.define_material_with(kind, &[])
    }

    /// Writes one key/value property into a material.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not part of the model.
    pub fn put_material_property(
        &mut self,
        id: MaterialId,
        key: MaterialProperty,
        value: f64,
    ) -> Result<(), ModelError> {
        let material = self
            .materials
            .get_mut(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))?;
        material.properties.insert(key, value);
        Ok(())
    }

    /// Returns the material with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the material is not part of the model.
    pub fn material(&self, id: MaterialId) -> Result<&Material, ModelError> {
        self.materials
            .get(&id)
            .ok_or_else(|| ModelError::EntityNotFound(id.to_string()))
    }

    /// Number of materials in the model.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Defines the constitutive material of a ring and attaches it.
    ///
    /// Consumes one material id.
    pub fn attach_elastic_material(
        &mut self,
        ring: &mut Ring,
        params: ElasticMaterial,
    ) -> MaterialId {
        let id = self.define_material_with(
            MaterialKind::ElasticHypo,
            &[
                (MaterialProperty::MassDensity, params.mass_density),
                (MaterialProperty::ElasticModulus, params.elastic_modulus),
                (MaterialProperty::PoissonRatio, params.poisson_ratio),
            ],
        );
        ring.set_material(id);
        id
    }

    /// Defines the Coulomb contact law of a ring and attaches it.
    ///
    /// The same property set is shared by every contact interaction the
    /// ring takes part in. Consumes one material id.
    pub fn attach_coulomb_contact(
        &mut self,
        ring: &mut Ring,
        params: CoulombContact,
    ) -> MaterialId {
        let id = self.define_material_with(
            MaterialKind::CoulombContact,
            &[
                (MaterialProperty::NormalPenalty, params.normal_penalty),
                (MaterialProperty::TangentPenalty, params.tangent_penalty),
                (MaterialProperty::ContactDepth, params.contact_depth),
                (MaterialProperty::StaticFriction, params.static_friction),
                (MaterialProperty::DynamicFriction, params.dynamic_friction),
            ],
        );
        ring.set_contact_property(id);
        id
    }

    /// Defines a frictionless penalty contact law and attaches it.
    ///
    /// Consumes one material id.
    pub fn attach_frictionless_contact(
        &mut self,
        ring: &mut Ring,
        normal_penalty: f64,
        contact_depth: f64,
    ) -> MaterialId {
        let id = self.define_material_with(
            MaterialKind::FrictionlessContact,
            &[
                (MaterialProperty::NormalPenalty, normal_penalty),
                (MaterialProperty::ContactDepth, contact_depth),
            ],
        );
        ring.set_contact_property(id);
        id
    }
}
