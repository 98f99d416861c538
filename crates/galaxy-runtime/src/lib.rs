//! Galaxy Runtime - render loop plumbing
//!
//! The pieces the viewer loop is built from:
//! - `FrameClock`: per-frame delta time with lag smoothing
//! - `GalaxyEvent` / `EventBus`: ordered queue from the panel to the state owner
//! - `RedrawScheduler`: the one place that decides whether a frame is drawn
//! - `RuntimeSystem`: trait for anything ticked by the loop

mod clock;
mod event;
mod event_bus;
mod redraw;
mod system;

pub use clock::FrameClock;
pub use event::GalaxyEvent;
pub use event_bus::EventBus;
pub use redraw::{RedrawMode, RedrawScheduler};
pub use system::RuntimeSystem;
