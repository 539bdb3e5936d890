use crate::error::{GeometryError, Result};
use crate::geometry::{Curve, CurveGeometry, Point};
use crate::math::{Point2, Rotation2};
use crate::model::Model;
use crate::topology::ring::RingEntities;
use crate::topology::{Ring, Side, Wire};

/// Creates an annular-sector ring in a model.
///
/// The sector is laid out in a local frame symmetric about its vertical
/// axis: the two pole points sit at ±aperture/2 from the local downward
/// axis, and each half-arc is bisected by an axis point. The whole
/// layout is then rotated and translated into place. One execution
/// produces 8 points, 6 curves, 2 wires and 2 sides, with ids allocated
/// as contiguous blocks.
///
/// Output is deterministic: identical inputs give identical coordinates,
/// up to the id offsets implied by earlier allocations.
pub struct BuildRing {
    center: Point2,
    inner_radius: f64,
    outer_radius: f64,
    aperture_angle: f64,
    rotation_angle: f64,
}

impl BuildRing {
    /// Creates a new `BuildRing` operation for a half ring (aperture
    /// 180°, no rotation).
    #[must_use]
    pub fn new(center: Point2, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
            aperture_angle: 180.0,
            rotation_angle: 0.0,
        }
    }

    /// Sets the angular extent of the sector, in degrees. 360° is a
    /// valid full ring whose poles coincide with the axis points.
    #[must_use]
    pub fn aperture_angle(mut self, degrees: f64) -> Self {
        self.aperture_angle = degrees;
        self
    }

    /// Sets the rotation of the sector about its center, in degrees.
    #[must_use]
    pub fn rotation_angle(mut self, degrees: f64) -> Self {
        self.rotation_angle = degrees;
        self
    }

    /// Executes the operation, creating the ring in the model.
    ///
    /// # Errors
    ///
    /// Fails with an `InvalidGeometry`-class error when the inner radius
    /// is not strictly positive, not strictly smaller than the outer
    /// radius, or the aperture angle lies outside (0°, 360°]. Nothing is
    /// allocated or recorded on failure.
    pub fn execute(&self, model: &mut Model) -> Result<Ring> {
        self.validate()?;

        let positions = self.boundary_points();

        let points = model.allocator_mut().alloc_points(8);
        let curves = model.allocator_mut().alloc_curves(6);
        let wires = model.allocator_mut().alloc_wires(2);
        let sides = model.allocator_mut().alloc_sides(2);

        let p: Vec<_> = points.iter().collect();
        for (id, position) in p.iter().zip(positions) {
            model.record_point(Point::new(*id, position));
        }

        // Half inner boundary, split at the axis points.
        model.record_curve(Curve::new(
            curves.id(0),
            CurveGeometry::Arc {
                start: p[0],
                mid: p[1],
                end: p[2],
            },
        ));
        model.record_curve(Curve::new(
            curves.id(1),
            CurveGeometry::Arc {
                start: p[2],
                mid: p[3],
                end: p[0],
            },
        ));
        // Half outer boundary.
        model.record_curve(Curve::new(
            curves.id(2),
            CurveGeometry::Arc {
                start: p[4],
                mid: p[5],
                end: p[6],
            },
        ));
        model.record_curve(Curve::new(
            curves.id(3),
            CurveGeometry::Arc {
                start: p[6],
                mid: p[7],
                end: p[4],
            },
        ));
        // Radial cutting lines between matching poles.
        model.record_curve(Curve::new(
            curves.id(4),
            CurveGeometry::Line {
                start: p[4],
                end: p[0],
            },
        ));
        model.record_curve(Curve::new(
            curves.id(5),
            CurveGeometry::Line {
                start: p[2],
                end: p[6],
            },
        ));

        // Upper half-annulus loop.
        model.record_wire(Wire::new(
            wires.id(0),
            [curves.id(4), curves.id(0), curves.id(5), curves.id(2)],
        ));
        // Lower half-annulus loop, wound with the same handedness.
        model.record_wire(Wire::new(
            wires.id(1),
            [curves.id(4), curves.id(3), curves.id(5), curves.id(1)],
        ));

        model.record_side(Side::new(sides.id(0), wires.id(0)));
        model.record_side(Side::new(sides.id(1), wires.id(1)));

        let entities = RingEntities {
            points: [p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]],
            curves: [
                curves.id(0),
                curves.id(1),
                curves.id(2),
                curves.id(3),
                curves.id(4),
                curves.id(5),
            ],
            wires: [wires.id(0), wires.id(1)],
            sides: [sides.id(0), sides.id(1)],
        };
        Ok(Ring::new(
            self.center,
            self.inner_radius,
            self.outer_radius,
            self.aperture_angle,
            self.rotation_angle,
            &entities,
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.inner_radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(self.inner_radius).into());
        }
        if self.inner_radius >= self.outer_radius {
            return Err(GeometryError::RadiusOrder {
                inner: self.inner_radius,
                outer: self.outer_radius,
            }
            .into());
        }
        if self.aperture_angle <= 0.0 || self.aperture_angle > 360.0 {
            return Err(GeometryError::ApertureOutOfRange {
                value: self.aperture_angle,
                min: 0.0,
                max: 360.0,
            }
            .into());
        }
        Ok(())
    }

    /// Computes the 8 boundary points: inner pole 1, inner axis top,
    /// inner pole 2, inner axis bottom, then the outer counterparts.
    fn boundary_points(&self) -> [Point2; 8] {
        let (sin_a, cos_a) = (self.aperture_angle / 2.0).to_radians().sin_cos();
        let ri = self.inner_radius;
        let ro = self.outer_radius;

        // Poles at ±aperture/2 from the local downward axis, axis
        // points at the half-arc bisections.
        let local = [
            Point2::new(-ri * sin_a, -ri * cos_a),
            Point2::new(0.0, ri),
            Point2::new(ri * sin_a, -ri * cos_a),
            Point2::new(0.0, -ri),
            Point2::new(-ro * sin_a, -ro * cos_a),
            Point2::new(0.0, ro),
            Point2::new(ro * sin_a, -ro * cos_a),
            Point2::new(0.0, -ro),
        ];

        let rotation = Rotation2::new(self.rotation_angle.to_radians());
        local.map(|point| rotation * point + self.center.coords)
    }
}
