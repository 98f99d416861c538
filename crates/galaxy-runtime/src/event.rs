//! Events flowing from the UI into the state owner

use galaxy_animation::TransitionKind;
use galaxy_core::GalaxyParams;

#[derive(Debug, Clone, PartialEq)]
pub enum GalaxyEvent {
    /// A finished parameter edit; triggers regeneration
    ParamsCommitted(GalaxyParams),
    TransitionRequested(TransitionKind),
    /// Surface size in physical pixels
    Resized { width: u32, height: u32 },
}
