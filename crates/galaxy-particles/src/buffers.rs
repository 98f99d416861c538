//! Flat per-particle float buffers (three floats per particle)

macro_rules! particle_buffer {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name(Vec<f32>);

        impl $name {
            /// Buffer of `count` particles, all components zero
            pub fn zeroed(count: usize) -> Self {
                Self(vec![0.0; count * 3])
            }

            /// Wrap an existing vector. Its length must be a multiple of 3.
            pub fn from_vec(data: Vec<f32>) -> Self {
                debug_assert!(data.len() % 3 == 0, "buffer length must be a multiple of 3");
                Self(data)
            }

            pub fn particle_count(&self) -> usize {
                self.0.len() / 3
            }

            /// Number of floats
            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// The three components of particle `index`
            pub fn particle(&self, index: usize) -> [f32; 3] {
                let i3 = index * 3;
                [self.0[i3], self.0[i3 + 1], self.0[i3 + 2]]
            }

            pub fn set_particle(&mut self, index: usize, value: [f32; 3]) {
                let i3 = index * 3;
                self.0[i3..i3 + 3].copy_from_slice(&value);
            }

            pub fn particles(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
                self.0.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
            }

            pub fn as_slice(&self) -> &[f32] {
                &self.0
            }

            pub fn as_mut_slice(&mut self) -> &mut [f32] {
                &mut self.0
            }

            pub fn into_vec(self) -> Vec<f32> {
                self.0
            }
        }
    };
}

particle_buffer!(
    /// x, y, z per particle
    PositionBuffer
);

particle_buffer!(
    /// r, g, b per particle, linear light
    ColorBuffer
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_has_three_floats_per_particle() {
        let buf = PositionBuffer::zeroed(4);
        assert_eq!(buf.len(), 12);
        assert_eq!(buf.particle_count(), 4);
        assert!(buf.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn particle_indexing_uses_stride_three() {
        let mut buf = ColorBuffer::zeroed(3);
        buf.set_particle(1, [0.1, 0.2, 0.3]);
        assert_eq!(buf.as_slice()[3..6], [0.1, 0.2, 0.3]);
        assert_eq!(buf.particle(1), [0.1, 0.2, 0.3]);
        assert_eq!(buf.particles().count(), 3);
    }
}
