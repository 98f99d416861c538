//! Galaxy Particles - point cloud generation
//!
//! Builds the flat `f32` buffers the renderer uploads:
//! - a scattered cube of points
//! - a "string" layout that arranges points along curled filaments
//! - a parallel color buffer interpolated between two colors
//!
//! Every buffer stores three floats per particle, particle `i` at offset `i * 3`.

pub mod buffers;
pub mod curves;
pub mod generator;
pub mod rng;

pub use buffers::{ColorBuffer, PositionBuffer};
pub use generator::{string_angle, GalaxyBuffers, GalaxyGenerator, SCATTER_EXTENT};
pub use rng::GalaxyRng;
