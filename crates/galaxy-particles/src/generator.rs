//! Scattered, string-shaped and color buffer generation

use crate::buffers::{ColorBuffer, PositionBuffer};
use crate::curves::lerp_rgb;
use crate::rng::GalaxyRng;
use galaxy_core::GalaxyParams;
use std::f32::consts::TAU;
use std::time::Instant;

/// Edge length of the cube the scattered layout fills (centered on the origin)
pub const SCATTER_EXTENT: f32 = 10.0;

/// One full generation pass. All three buffers hold `count * 3` floats.
#[derive(Debug, Clone)]
pub struct GalaxyBuffers {
    pub scattered: PositionBuffer,
    pub string_shaped: PositionBuffer,
    pub colors: ColorBuffer,
}

/// Angle of the filament particle `index` belongs to.
///
/// Particles are dealt round-robin onto `strings` evenly spaced filaments.
pub fn string_angle(index: u32, strings: u32) -> f32 {
    ((index % strings) as f32 / strings as f32) * TAU
}

/// Produces particle buffers from [`GalaxyParams`]. Owns its random source,
/// so repeated calls give fresh layouts.
pub struct GalaxyGenerator {
    rng: GalaxyRng,
}

impl GalaxyGenerator {
    pub fn new(rng: GalaxyRng) -> Self {
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(GalaxyRng::new(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(GalaxyRng::from_entropy())
    }

    /// Build the scattered, string-shaped and color buffers together
    pub fn generate(&mut self, params: &GalaxyParams) -> GalaxyBuffers {
        let start = Instant::now();

        let scattered = self.scattered(params.count);
        let string_shaped = self.string_shaped(params);
        let colors = self.colors(params);

        log::debug!(
            "Generated {} particles ({} strings) in {:.1?}",
            params.count,
            params.strings,
            start.elapsed()
        );

        GalaxyBuffers {
            scattered,
            string_shaped,
            colors,
        }
    }

    /// Every component drawn independently from [-5, 5)
    pub fn scattered(&mut self, count: u32) -> PositionBuffer {
        let len = count as usize * 3;
        let data = (0..len)
            .map(|_| (self.rng.unit() - 0.5) * SCATTER_EXTENT)
            .collect();
        PositionBuffer::from_vec(data)
    }

    /// Particles spread along `strings` curled filaments in the z = 0 plane.
    ///
    /// Each particle gets its own random radius, so filaments come out as
    /// noisy arcs rather than clean lines.
    pub fn string_shaped(&mut self, params: &GalaxyParams) -> PositionBuffer {
        let mut buffer = PositionBuffer::zeroed(params.count as usize);

        for i in 0..params.count {
            let radius = self.rng.unit() * params.radius;
            let curl_angle = radius * params.curl;
            let angle = string_angle(i, params.strings);

            buffer.set_particle(
                i as usize,
                [
                    params.length * radius,
                    (angle + curl_angle).sin() * radius,
                    0.0,
                ],
            );
        }

        buffer
    }

    /// Per-particle mix of the inside and outside colors.
    ///
    /// The mix factor comes from a fresh radius sample, not from the
    /// particle's own position.
    pub fn colors(&mut self, params: &GalaxyParams) -> ColorBuffer {
        let inside = params.inside_color.to_linear();
        let outside = params.outside_color.to_linear();
        let mut buffer = ColorBuffer::zeroed(params.count as usize);

        for i in 0..params.count as usize {
            let radius = self.rng.unit() * params.radius;
            buffer.set_particle(i, lerp_rgb(inside, outside, radius / params.radius));
        }

        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::Color;
    use std::f32::consts::PI;

    fn small_params() -> GalaxyParams {
        GalaxyParams {
            count: 500,
            ..Default::default()
        }
    }

    #[test]
    fn buffers_have_count_times_three_floats() {
        let mut generator = GalaxyGenerator::from_seed(1);
        for count in [100, 500, 1300] {
            let params = GalaxyParams {
                count,
                ..Default::default()
            };
            let buffers = generator.generate(&params);
            assert_eq!(buffers.scattered.len(), count as usize * 3);
            assert_eq!(buffers.string_shaped.len(), count as usize * 3);
            assert_eq!(buffers.colors.len(), count as usize * 3);
        }
    }

    #[test]
    fn scattered_components_stay_in_cube() {
        let mut generator = GalaxyGenerator::from_seed(2);
        let buffer = generator.scattered(2000);
        for v in buffer.as_slice() {
            assert!((-5.0..=5.0).contains(v), "component {v} out of range");
        }
    }

    #[test]
    fn string_shaped_respects_radius_and_length() {
        let params = GalaxyParams {
            count: 2000,
            radius: 3.5,
            length: 2.0,
            curl: -1.7,
            strings: 5,
            ..Default::default()
        };
        let mut generator = GalaxyGenerator::from_seed(3);
        let buffer = generator.string_shaped(&params);
        let max_x = params.length * params.radius;
        for [x, y, z] in buffer.particles() {
            assert!(x >= 0.0 && x <= max_x + 1e-5, "x = {x}");
            assert!(y.abs() <= params.radius + 1e-5, "y = {y}");
            assert_eq!(z, 0.0);
        }
    }

    #[test]
    fn four_particles_on_two_strings() {
        let params = GalaxyParams {
            count: 4,
            strings: 2,
            radius: 1.0,
            length: 1.0,
            curl: 0.0,
            ..Default::default()
        };
        assert_eq!(string_angle(0, 2), 0.0);
        assert!((string_angle(1, 2) - PI).abs() < 1e-6);
        assert_eq!(string_angle(2, 2), 0.0);
        assert!((string_angle(3, 2) - PI).abs() < 1e-6);

        let mut generator = GalaxyGenerator::from_seed(4);
        let buffer = generator.string_shaped(&params);
        assert_eq!(buffer.particle_count(), 4);
        for (i, [x, y, _]) in buffer.particles().enumerate() {
            // x carries the radius directly when length is 1
            let radius = x;
            assert!((0.0..=1.0).contains(&radius));
            let expected_y = string_angle(i as u32, 2).sin() * radius;
            assert!((y - expected_y).abs() < 1e-6);
            assert!(y.abs() < 1e-6);
        }
    }

    #[test]
    fn curl_bends_filaments() {
        let params = GalaxyParams {
            count: 3,
            strings: 3,
            radius: 2.0,
            length: 1.0,
            curl: 0.5,
            ..Default::default()
        };
        let mut generator = GalaxyGenerator::from_seed(5);
        let buffer = generator.string_shaped(&params);
        for (i, [x, y, _]) in buffer.particles().enumerate() {
            let radius = x;
            let expected = (string_angle(i as u32, 3) + radius * params.curl).sin() * radius;
            assert!((y - expected).abs() < 1e-5);
        }
    }

    #[test]
    fn colors_lie_between_endpoints() {
        let params = GalaxyParams {
            count: 1000,
            inside_color: Color::parse_hex("#ff6030").unwrap(),
            outside_color: Color::parse_hex("#1b3984").unwrap(),
            ..Default::default()
        };
        let inside = params.inside_color.to_linear().to_array();
        let outside = params.outside_color.to_linear().to_array();

        let mut generator = GalaxyGenerator::from_seed(6);
        let colors = generator.colors(&params);
        for rgb in colors.particles() {
            for c in 0..3 {
                let lo = inside[c].min(outside[c]) - 1e-6;
                let hi = inside[c].max(outside[c]) + 1e-6;
                assert!(rgb[c] >= lo && rgb[c] <= hi, "channel {c} = {}", rgb[c]);
            }
        }
    }

    #[test]
    fn regeneration_keeps_lengths_but_not_values() {
        let params = small_params();
        let mut generator = GalaxyGenerator::from_seed(7);
        let a = generator.generate(&params);
        let b = generator.generate(&params);
        assert_eq!(a.scattered.len(), b.scattered.len());
        assert_eq!(a.string_shaped.len(), b.string_shaped.len());
        assert_ne!(a.scattered, b.scattered);
    }

    #[test]
    fn seeded_generators_agree() {
        let params = small_params();
        let a = GalaxyGenerator::from_seed(99).generate(&params);
        let b = GalaxyGenerator::from_seed(99).generate(&params);
        assert_eq!(a.string_shaped, b.string_shaped);
        assert_eq!(a.colors, b.colors);
    }
}
