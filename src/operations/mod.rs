mod build_ring;

pub use build_ring::BuildRing;
