//! Linear interpolation helpers

use galaxy_core::Color;

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linear interpolation between two RGB colors
pub fn lerp_rgb(a: Color, b: Color, t: f32) -> [f32; 3] {
    [
        lerp_f32(a.r, b.r, t),
        lerp_f32(a.g, b.g, t),
        lerp_f32(a.b, b.b, t),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_f32_endpoints() {
        assert!((lerp_f32(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_rgb_midpoint() {
        let mid = lerp_rgb(Color::WHITE, Color::BLACK, 0.5);
        for c in &mid {
            assert!((*c - 0.5).abs() < 1e-6);
        }
    }
}
