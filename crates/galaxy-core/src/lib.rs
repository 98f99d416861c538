//! Galaxy Core - Foundational types for the galaxy visualizer
//!
//! This crate provides the types every other galaxy crate depends on:
//! - `GalaxyParams` - Generation parameters and their control bounds
//! - `Vec3`, `Color` - Spatial and color types
//! - `DrawableId` - Identifiers for drawables attached to a scene
//! - Error types and Result alias

mod error;
mod id;
mod params;
mod types;

pub use error::{GalaxyError, Result};
pub use id::{DrawableId, DrawableIds};
pub use params::{GalaxyParams, ParamRange, PointBlending};
pub use types::{Color, Vec3};
