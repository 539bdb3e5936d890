//! Three-ring impact problem: two small rings flying inside a large
//! clamped ring, all boundaries in frictional contact.
//!
//! Units: mm, N, t, s, MPa (consistent set; densities in t/mm³).

use ringforge::math::Point2;
use ringforge::model::{
    CoulombContact, Dof, ElasticMaterial, ExtractorKind, FieldKind, MeshDensity, Model,
    TimeIntegration, VolumeScheme,
};
use ringforge::operations::BuildRing;
use ringforge::Result;

fn main() -> Result<()> {
    let mut model = Model::new();

    let mut ring_1 = BuildRing::new(Point2::new(-7.9, 8.5), 8.0, 10.0).execute(&mut model)?;
    let mut ring_2 = BuildRing::new(Point2::new(7.9, -8.5), 10.0, 12.0).execute(&mut model)?;
    let mut ring_3 = BuildRing::new(Point2::new(0.0, 0.0), 26.0, 30.0).execute(&mut model)?;

    model.assign_mesh_density(&ring_1, MeshDensity::uniform(3, 30))?;
    model.assign_mesh_density(&ring_2, MeshDensity::uniform(3, 30))?;
    model.assign_mesh_density(&ring_3, MeshDensity::uniform(3, 80))?;

    for (ring, mass_density, elastic_modulus) in [
        (&mut ring_1, 1e-7, 10e3),
        (&mut ring_2, 1e-8, 2250.0),
        (&mut ring_3, 1e-6, 288e3),
    ] {
        model.attach_elastic_material(
            ring,
            ElasticMaterial {
                mass_density,
                elastic_modulus,
                poisson_ratio: 0.125,
            },
        );
    }

    for ring in [&ring_1, &ring_2, &ring_3] {
        model.assign_volume_elements(ring, VolumeScheme::SelectiveReduced)?;
    }

    for ring in [&mut ring_1, &mut ring_2, &mut ring_3] {
        let contact_depth = ring.thickness() / 4.0;
        model.attach_coulomb_contact(
            ring,
            CoulombContact {
                normal_penalty: 1e6,
                tangent_penalty: 1e6,
                contact_depth,
                static_friction: 0.3,
                dynamic_friction: 0.3,
            },
        );
    }

    model.enumerate_outer_inner_contact(&ring_3, &ring_1)?;
    model.enumerate_outer_inner_contact(&ring_3, &ring_2)?;
    model.enumerate_outer_outer_contact(&ring_1, &ring_2)?;
    model.enumerate_self_contact(&ring_1)?;
    model.enumerate_self_contact(&ring_2)?;
    model.enumerate_self_contact(&ring_3)?;

    // Clamp the outer boundary of the enclosing ring.
    for curve in [ring_3.outer_arc_1(), ring_3.outer_arc_2()] {
        model.fix_curve(curve, Dof::X)?;
        model.fix_curve(curve, Dof::Y)?;
    }

    // 30 mm/ms impact speed for the first ring.
    model.set_initial_velocity(&ring_1, 30e3, -30e3);

    model.set_time_integration(TimeIntegration {
        initial_time: 0.0,
        initial_step: 1e-5,
        max_step: 1e-4,
        final_time: 5e-4,
        archive_count: 5,
        residual_tolerance: 1e-4,
    })?;

    model.add_extractor(ExtractorKind::SimulationTime, "time");
    model.add_extractor(
        ExtractorKind::NodalField {
            curve: ring_1.inner_arc_1(),
            dof: Dof::X,
            field: FieldKind::Displacement,
        },
        "TX_r1_inner1",
    );

    println!(
        "model: {} points, {} curves, {} wires, {} sides",
        model.point_count(),
        model.curve_count(),
        model.wire_count(),
        model.side_count()
    );
    println!(
        "interactions: {} element fields, {} contact pairs",
        model.field_applicators().count(),
        model.contact_interactions().count()
    );
    for wire in model.wires() {
        println!("wire {} closed: {}", wire.id(), model.wire_is_closed(wire.id())?);
    }
    Ok(())
}
