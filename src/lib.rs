//! Parametric builder for 2D axisymmetric ring-contact FE models.
//!
//! The crate constructs annular-sector ring geometries (points, arcs,
//! wires, sides) with deterministic numeric labels, assigns structured
//! mesh densities, attaches material and contact laws, enumerates
//! directed contact pairs, and records boundary/initial conditions and
//! integrator settings. All numerical work (meshing, contact search,
//! time integration) belongs to the external solving engine that
//! consumes the finished [`model::Model`].

pub mod error;
pub mod geometry;
pub mod id;
pub mod math;
pub mod model;
pub mod operations;
pub mod topology;

pub use error::{Result, RingforgeError};
