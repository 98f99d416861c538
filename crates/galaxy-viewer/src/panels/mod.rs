//! GUI panels for the viewer

mod debug_panel;
mod render_stats;

pub use debug_panel::DebugPanel;
pub use render_stats::RenderStats;
