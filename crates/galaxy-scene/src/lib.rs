//! Galaxy Scene - the state that owns what is on screen
//!
//! - `Drawable`: one particle cloud with its render settings
//! - `SceneBinding`: seam to whatever displays drawables
//! - `GalaxyState`: regeneration and the two shape transitions
//! - `GalaxyPreset`: TOML preset files

mod binding;
mod drawable;
mod preset;
mod state;

pub use binding::SceneBinding;
pub use drawable::{Drawable, DrawableProperty};
pub use preset::{GalaxyPreset, TransitionSettings, ViewSettings};
pub use state::{GalaxyState, DEFAULT_OFFSET_X};
