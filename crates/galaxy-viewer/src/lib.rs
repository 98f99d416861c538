//! Galaxy Viewer - window, render loop and debug panel
//!
//! Combines the wgpu point renderer with an egui overlay for live-tuning the
//! generation parameters and triggering the two shape transitions.

pub mod app;
pub mod config;
pub mod panels;

pub use app::GalaxyApp;
pub use config::ViewerConfig;
