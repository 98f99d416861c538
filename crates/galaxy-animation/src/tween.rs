//! Start-to-end interpolation of a float slice

use crate::easing::Ease;

/// Resolves the property a tween drives.
///
/// Implemented by whatever owns the animated values. Returning `None` means
/// the property no longer exists; the tween is then dropped.
pub trait TweenTargets<K> {
    fn values_mut(&mut self, key: &K) -> Option<&mut [f32]>;
}

/// Interpolates a slice of floats towards `to` over `duration` seconds.
///
/// The start values are captured from the target on the first advance, so a
/// tween always departs from whatever the property holds when it begins
/// running. If the target and `to` differ in length only the overlapping
/// prefix is animated.
#[derive(Debug, Clone)]
pub struct Tween {
    from: Option<Vec<f32>>,
    to: Vec<f32>,
    duration: f64,
    elapsed: f64,
    ease: Ease,
}

impl Tween {
    pub fn new(to: Vec<f32>, duration: f64, ease: Ease) -> Self {
        Self {
            from: None,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Tween of a single scalar
    pub fn scalar(to: f32, duration: f64, ease: Ease) -> Self {
        Self::new(vec![to], duration, ease)
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0) as f32
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and write the interpolated values into `values`.
    ///
    /// Returns `true` once the tween has reached its end values.
    pub fn advance(&mut self, dt: f64, values: &mut [f32]) -> bool {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        let finished = self.is_finished();
        let t = self.ease.apply(self.progress());

        let from = self.from.get_or_insert_with(|| values.to_vec());
        let n = values.len().min(self.to.len()).min(from.len());

        if finished {
            values[..n].copy_from_slice(&self.to[..n]);
        } else {
            for ((v, a), b) in values[..n].iter_mut().zip(&from[..n]).zip(&self.to[..n]) {
                *v = a + (b - a) * t;
            }
        }

        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_midpoint() {
        let mut values = [0.0, 10.0];
        let mut tween = Tween::new(vec![10.0, 20.0], 2.0, Ease::Linear);
        assert!(!tween.advance(1.0, &mut values));
        assert!((values[0] - 5.0).abs() < 1e-5);
        assert!((values[1] - 15.0).abs() < 1e-5);
    }

    #[test]
    fn start_is_captured_on_first_advance() {
        let mut values = [0.0];
        let mut tween = Tween::scalar(10.0, 1.0, Ease::Linear);
        // Something else moves the value before the tween runs
        values[0] = 5.0;
        tween.advance(0.5, &mut values);
        assert!((values[0] - 7.5).abs() < 1e-5);
    }

    #[test]
    fn lands_exactly_on_end_values() {
        let mut values = [15.0];
        let mut tween = Tween::scalar(0.0, 3.0, Ease::POWER3);
        let mut steps = 0;
        while !tween.advance(1.0 / 60.0, &mut values) {
            steps += 1;
            assert!(steps < 1000);
        }
        assert_eq!(values[0], 0.0);
        assert!(tween.is_finished());
        assert_eq!(tween.progress(), 1.0);
    }

    #[test]
    fn overshooting_dt_clamps() {
        let mut values = [1.0, 2.0, 3.0];
        let mut tween = Tween::new(vec![4.0, 5.0, 6.0], 0.5, Ease::POWER1);
        assert!(tween.advance(10.0, &mut values));
        assert_eq!(values, [4.0, 5.0, 6.0]);
        assert_eq!(tween.elapsed(), 0.5);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut values = [1.0];
        let mut tween = Tween::scalar(2.0, 0.0, Ease::Linear);
        assert!(tween.advance(0.0, &mut values));
        assert_eq!(values[0], 2.0);
    }

    #[test]
    fn mismatched_lengths_animate_overlap_only() {
        let mut values = [0.0, 0.0, 0.0];
        let mut tween = Tween::new(vec![1.0, 1.0], 1.0, Ease::Linear);
        tween.advance(1.0, &mut values);
        assert_eq!(values, [1.0, 1.0, 0.0]);
    }
}
