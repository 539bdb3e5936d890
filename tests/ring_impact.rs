//! End-to-end construction of the three-ring impact problem: two small
//! rings flying inside a large fixed ring, with Coulomb contact between
//! every boundary that can touch.

#![allow(clippy::unwrap_used)]

use ringforge::id::EntityId;
use ringforge::math::Point2;
use ringforge::model::{
    CoulombContact, Dof, ElasticMaterial, ExtractorKind, FieldKind, MeshDensity, Model,
    TimeIntegration, VolumeScheme,
};
use ringforge::operations::BuildRing;
use ringforge::topology::Ring;

struct Scenario {
    model: Model,
    rings: [Ring; 3],
}

fn build_scenario() -> Scenario {
    let mut model = Model::new();

    let mut ring_1 = BuildRing::new(Point2::new(-7.9, 8.5), 8.0, 10.0)
        .execute(&mut model)
        .unwrap();
    let mut ring_2 = BuildRing::new(Point2::new(7.9, -8.5), 10.0, 12.0)
        .execute(&mut model)
        .unwrap();
    let mut ring_3 = BuildRing::new(Point2::new(0.0, 0.0), 26.0, 30.0)
        .execute(&mut model)
        .unwrap();

    model
        .assign_mesh_density(&ring_1, MeshDensity::uniform(3, 30))
        .unwrap();
    model
        .assign_mesh_density(&ring_2, MeshDensity::uniform(3, 30))
        .unwrap();
    model
        .assign_mesh_density(&ring_3, MeshDensity::uniform(3, 80))
        .unwrap();

    for (ring, density, modulus) in [
        (&mut ring_1, 1e-7, 10e3),
        (&mut ring_2, 1e-8, 2250.0),
        (&mut ring_3, 1e-6, 288e3),
    ] {
        model.attach_elastic_material(
            ring,
            ElasticMaterial {
                mass_density: density,
                elastic_modulus: modulus,
                poisson_ratio: 0.125,
            },
        );
    }

    for ring in [&ring_1, &ring_2, &ring_3] {
        model
            .assign_volume_elements(ring, VolumeScheme::SelectiveReduced)
            .unwrap();
    }

    for ring in [&mut ring_1, &mut ring_2, &mut ring_3] {
        let depth = ring.thickness() / 4.0;
        model.attach_coulomb_contact(
            ring,
            CoulombContact {
                normal_penalty: 1e6,
                tangent_penalty: 1e6,
                contact_depth: depth,
                static_friction: 0.3,
                dynamic_friction: 0.3,
            },
        );
    }

    model.enumerate_outer_inner_contact(&ring_3, &ring_1).unwrap();
    model.enumerate_outer_inner_contact(&ring_3, &ring_2).unwrap();
    model.enumerate_outer_outer_contact(&ring_1, &ring_2).unwrap();
    model.enumerate_self_contact(&ring_1).unwrap();
    model.enumerate_self_contact(&ring_2).unwrap();
    model.enumerate_self_contact(&ring_3).unwrap();

    // The outer ring is clamped on its outer boundary.
    for curve in [ring_3.outer_arc_1(), ring_3.outer_arc_2()] {
        model.fix_curve(curve, Dof::X).unwrap();
        model.fix_curve(curve, Dof::Y).unwrap();
    }

    model.set_initial_velocity(&ring_1, 30e3, -30e3);

    model
        .set_time_integration(TimeIntegration {
            initial_time: 0.0,
            initial_step: 1e-5,
            max_step: 1e-4,
            final_time: 5e-4,
            archive_count: 5,
            residual_tolerance: 1e-4,
        })
        .unwrap();

    model.add_extractor(ExtractorKind::SimulationTime, "time");
    model.add_extractor(
        ExtractorKind::NodalField {
            curve: ring_1.inner_arc_1(),
            dof: Dof::X,
            field: FieldKind::Displacement,
        },
        "TX_r1_inner1",
    );

    Scenario {
        model,
        rings: [ring_1, ring_2, ring_3],
    }
}

#[test]
fn entity_counts_match_three_rings() {
    let scenario = build_scenario();
    let model = &scenario.model;

    assert_eq!(model.point_count(), 24);
    assert_eq!(model.curve_count(), 18);
    assert_eq!(model.wire_count(), 6);
    assert_eq!(model.side_count(), 6);
    assert_eq!(model.material_count(), 6);

    assert_eq!(model.allocator().next_point().raw(), 25);
    assert_eq!(model.allocator().next_curve().raw(), 19);
    assert_eq!(model.allocator().next_wire().raw(), 7);
    assert_eq!(model.allocator().next_side().raw(), 7);
    assert_eq!(model.allocator().next_material().raw(), 7);
}

#[test]
fn interaction_counter_is_shared_by_elements_and_contacts() {
    let scenario = build_scenario();
    let model = &scenario.model;

    // 3 field applicators + 2x4 outer-inner + 4 outer-outer + 3x3 self.
    assert_eq!(model.field_applicators().count(), 3);
    assert_eq!(model.contact_interactions().count(), 21);
    assert_eq!(model.allocator().next_interaction().raw(), 25);

    let ids: Vec<u32> = model
        .field_applicators()
        .map(|fa| fa.id().raw())
        .chain(model.contact_interactions().map(|ci| ci.pair().interaction.raw()))
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len(), "interaction ids must be unique");
    assert_eq!(sorted, (1..=24).collect::<Vec<_>>());
}

#[test]
fn contact_pairs_preserve_tool_target_direction() {
    let scenario = build_scenario();
    let [ring_1, ring_2, ring_3] = &scenario.rings;

    let pairs: Vec<_> = scenario
        .model
        .contact_interactions()
        .map(ringforge::model::ContactInteraction::pair)
        .collect();

    // First recorded pair: enclosing ring_3's inner arc is the tool.
    assert_eq!(pairs[0].tool, ring_3.inner_arc_1());
    assert_eq!(pairs[0].target, ring_1.outer_arc_1());

    // Outer-outer block: ring_1 supplies the tools.
    assert_eq!(pairs[8].tool, ring_1.outer_arc_1());
    assert_eq!(pairs[8].target, ring_2.outer_arc_1());

    // Self-contact blocks end with the cross pair of inner arcs.
    assert_eq!(pairs[14].tool, ring_1.inner_arc_1());
    assert_eq!(pairs[14].target, ring_1.inner_arc_2());
    assert!(pairs[12].tool == pairs[12].target);
}

#[test]
fn contact_properties_follow_the_modeling_convention() {
    let scenario = build_scenario();
    let model = &scenario.model;
    let [ring_1, _, _] = &scenario.rings;

    let interactions: Vec<_> = model.contact_interactions().collect();
    // Outer-inner pairs carry the enclosed ring's contact law.
    assert_eq!(interactions[0].property(), ring_1.contact_property().unwrap());
    // Outer-outer pairs carry the tool ring's contact law.
    assert_eq!(interactions[8].property(), ring_1.contact_property().unwrap());
    // Single-surface interactions start with the self-contact blocks.
    assert!(!interactions[0].is_self());
    assert!(interactions[12].is_self());
}

#[test]
fn every_wire_closes_and_every_curve_is_meshed() {
    let scenario = build_scenario();
    let model = &scenario.model;

    for wire in model.wires() {
        assert!(model.wire_is_closed(wire.id()).unwrap());
    }
    for curve in model.curves() {
        assert!(model.curve_density(curve.id()).is_some());
    }
    for side in model.sides() {
        assert!(model.is_transfinite(side.id()));
    }
}

#[test]
fn conditions_and_outputs_are_recorded() {
    let scenario = build_scenario();
    let model = &scenario.model;

    assert_eq!(model.loadings().count(), 4);
    assert_eq!(model.initial_conditions().count(), 4);
    assert!(model.time_integration().is_some());

    let labels: Vec<&str> = model.extractors().map(|e| e.label()).collect();
    assert_eq!(labels, ["time", "TX_r1_inner1"]);
    assert_eq!(model.extractors().next().unwrap().slot(), 1);
}
