//! Gravlens - Schwarzschild Gravitational Lensing Core
//!
//! Simulates how light rays (null geodesics) bend around a non-rotating
//! massive body and maintains the per-ray trail history a renderer
//! consumes. The presentation layer (windowing, shaders, vertex upload,
//! camera) is an external collaborator that reads each photon's position,
//! direction, and trail every frame; none of it lives in this crate.

pub mod mass_source;
pub mod photon;
pub mod physics;
pub mod scaling;
pub mod scenarios;
pub mod types;

#[cfg(test)]
pub mod test_utils;
