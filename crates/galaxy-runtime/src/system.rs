//! Runtime system trait

use galaxy_core::Result;

/// Something the frame loop ticks, generic over the scene it writes into.
///
/// Systems run in registration order, once per frame.
pub trait RuntimeSystem<S: ?Sized> {
    /// Called once before the first frame
    fn initialize(&mut self, scene: &mut S) -> Result<()>;

    /// Called once per frame with the smoothed delta time
    fn update(&mut self, scene: &mut S, dt: f64) -> Result<()>;

    /// Called when the loop exits; release anything held in `scene`
    fn shutdown(&mut self, scene: &mut S) -> Result<()>;

    /// Human-readable name for logs
    fn name(&self) -> &str;
}
