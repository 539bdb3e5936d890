//! Lock-in study variant: quasi-incompressible rings with standard
//! volumetric integration, built from arbitrary-aperture sectors.
//!
//! Units: mm, N, t, s, MPa (consistent set; densities in t/mm³).

use ringforge::math::Point2;
use ringforge::model::{
    CoulombContact, Dof, ElasticMaterial, ExtractorKind, FieldKind, MeshDensity, Model,
    TimeIntegration, VolumeScheme,
};
use ringforge::operations::BuildRing;
use ringforge::Result;

/// Global mesh refinement multiplier.
const MESH_MULT: u32 = 3;

fn main() -> Result<()> {
    let mut model = Model::new();

    let mut ring_1 = BuildRing::new(Point2::new(-7.9, 8.5), 8.0, 10.0)
        .aperture_angle(180.0)
        .rotation_angle(45.0)
        .execute(&mut model)?;
    let mut ring_2 = BuildRing::new(Point2::new(7.9, -8.5), 10.0, 12.0).execute(&mut model)?;
    let mut ring_3 = BuildRing::new(Point2::new(0.0, 0.0), 26.0, 30.0)
        .aperture_angle(90.0)
        .rotation_angle(45.0)
        .execute(&mut model)?;

    model.assign_mesh_density(&ring_1, MeshDensity::new(MESH_MULT, 4 * MESH_MULT, 12 * MESH_MULT))?;
    model.assign_mesh_density(&ring_2, MeshDensity::new(MESH_MULT, 12 * MESH_MULT, 12 * MESH_MULT))?;
    model.assign_mesh_density(&ring_3, MeshDensity::new(MESH_MULT, 10 * MESH_MULT, 12 * MESH_MULT))?;

    for (ring, mass_density, elastic_modulus) in [
        (&mut ring_1, 1e-7, 288e3),
        (&mut ring_2, 1e-8, 2250.0),
        (&mut ring_3, 1e-6, 288e3),
    ] {
        model.attach_elastic_material(
            ring,
            ElasticMaterial {
                mass_density,
                elastic_modulus,
                poisson_ratio: 0.4995,
            },
        );
    }

    // Standard integration on purpose: this is the configuration that
    // exhibits volumetric locking.
    for ring in [&ring_1, &ring_2, &ring_3] {
        model.assign_volume_elements(ring, VolumeScheme::Standard)?;
    }

    let depth_fraction = 0.25;
    let mut min_depth = f64::INFINITY;
    for ring in [&mut ring_1, &mut ring_2, &mut ring_3] {
        let contact_depth = ring.thickness() * depth_fraction;
        min_depth = min_depth.min(contact_depth);
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

    for curve in [ring_3.outer_arc_1(), ring_3.outer_arc_2()] {
        model.fix_curve(curve, Dof::X)?;
        model.fix_curve(curve, Dof::Y)?;
    }

    let init_speed = (30e3_f64, -30e3_f64);
    let speed_magnitude = init_speed.0.hypot(init_speed.1);
    model.set_initial_velocity(&ring_1, init_speed.0, init_speed.1);

    // Step bound: nodes must not jump over the contact detection area
    // between two steps.
    let step = min_depth / speed_magnitude;
    model.set_time_integration(TimeIntegration {
        initial_time: 0.0,
        initial_step: step,
        max_step: step,
        final_time: 8e-4,
        archive_count: 149,
        residual_tolerance: 1e-4,
    })?;

    model.add_extractor(ExtractorKind::SimulationTime, "tSample");
    for (ring_index, ring) in [&ring_1, &ring_2, &ring_3].iter().enumerate() {
        for (curve_index, curve) in [
            ring.inner_arc_1(),
            ring.inner_arc_2(),
            ring.outer_arc_1(),
            ring.outer_arc_2(),
        ]
        .into_iter()
        .enumerate()
        {
            for dof in [Dof::X, Dof::Y] {
                let axis = match dof {
                    Dof::X => "TX",
                    Dof::Y => "TY",
                };
                let label =
                    format!("AB_{axis}_curve{}_ring{}", curve_index + 1, ring_index + 1);
                model.add_extractor(
                    ExtractorKind::NodalField {
                        curve,
                        dof,
                        field: FieldKind::AbsolutePosition,
                    },
                    &label,
                );
            }
        }
    }

    println!(
        "lock-in model: {} points, {} curves, {} contact pairs, {} extractors",
        model.point_count(),
        model.curve_count(),
        model.contact_interactions().count(),
        model.extractors().count()
    );
    Ok(())
}
