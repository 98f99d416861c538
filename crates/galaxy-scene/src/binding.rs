//! Seam between the state owner and the display

use crate::drawable::Drawable;
use galaxy_core::{DrawableId, Result};

/// Something that can display drawables.
///
/// The renderer implements this against the GPU; tests use a recording double.
pub trait SceneBinding {
    /// Upload `drawable` and add it to the scene
    fn attach(&mut self, drawable: &Drawable) -> Result<DrawableId>;

    /// Remove a drawable and release everything it holds
    fn detach(&mut self, id: DrawableId);

    /// Re-upload whatever `drawable` has marked dirty
    fn update(&mut self, id: DrawableId, drawable: &Drawable) -> Result<()>;
}
