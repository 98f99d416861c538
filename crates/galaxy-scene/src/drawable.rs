//! The drawable particle cloud

use galaxy_animation::TweenTargets;
use galaxy_core::{PointBlending, Vec3};
use galaxy_particles::{ColorBuffer, PositionBuffer};

/// Animatable properties of a [`Drawable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawableProperty {
    OffsetX,
    Positions,
}

/// One position buffer and one color buffer, plus how to draw them.
///
/// Mutations through [`TweenTargets`] set the matching dirty flag. The flags
/// are cleared once the data has gone through a scene binding.
#[derive(Debug, Clone)]
pub struct Drawable {
    pub positions: PositionBuffer,
    pub colors: ColorBuffer,
    pub size: f32,
    pub blending: PointBlending,
    pub offset: Vec3,
    positions_dirty: bool,
    transform_dirty: bool,
}

impl Drawable {
    pub fn new(
        positions: PositionBuffer,
        colors: ColorBuffer,
        size: f32,
        blending: PointBlending,
        offset: Vec3,
    ) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self {
            positions,
            colors,
            size,
            blending,
            offset,
            positions_dirty: false,
            transform_dirty: false,
        }
    }

    pub fn particle_count(&self) -> usize {
        self.positions.particle_count()
    }

    pub fn positions_dirty(&self) -> bool {
        self.positions_dirty
    }

    pub fn transform_dirty(&self) -> bool {
        self.transform_dirty
    }

    pub fn is_dirty(&self) -> bool {
        self.positions_dirty || self.transform_dirty
    }

    pub fn clear_dirty(&mut self) {
        self.positions_dirty = false;
        self.transform_dirty = false;
    }
}

impl TweenTargets<DrawableProperty> for Drawable {
    fn values_mut(&mut self, key: &DrawableProperty) -> Option<&mut [f32]> {
        match key {
            DrawableProperty::OffsetX => {
                self.transform_dirty = true;
                Some(std::slice::from_mut(&mut self.offset.x))
            }
            DrawableProperty::Positions => {
                self.positions_dirty = true;
                Some(self.positions.as_mut_slice())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawable() -> Drawable {
        Drawable::new(
            PositionBuffer::zeroed(2),
            ColorBuffer::zeroed(2),
            0.02,
            PointBlending::Custom,
            Vec3::new(15.0, 0.0, 0.0),
        )
    }

    #[test]
    fn starts_clean() {
        let d = drawable();
        assert_eq!(d.particle_count(), 2);
        assert!(!d.is_dirty());
    }

    #[test]
    fn offset_target_is_the_x_component() {
        let mut d = drawable();
        let values = d.values_mut(&DrawableProperty::OffsetX).unwrap();
        assert_eq!(values, &[15.0]);
        values[0] = 4.0;
        assert_eq!(d.offset.x, 4.0);
        assert!(d.transform_dirty());
        assert!(!d.positions_dirty());
    }

    #[test]
    fn positions_target_marks_dirty() {
        let mut d = drawable();
        let values = d.values_mut(&DrawableProperty::Positions).unwrap();
        assert_eq!(values.len(), 6);
        values[5] = 1.0;
        assert!(d.positions_dirty());
        assert_eq!(d.positions.particle(1), [0.0, 0.0, 1.0]);

        d.clear_dirty();
        assert!(!d.is_dirty());
    }
}
