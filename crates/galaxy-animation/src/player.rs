//! Running tweens and their per-step playback

use crate::tween::{Tween, TweenTargets};

/// Tag shared by tweens started together (e.g. one transition)
pub type TweenGroup = u64;

struct ActiveTween<K> {
    group: TweenGroup,
    key: K,
    tween: Tween,
}

/// Ordered collection of running tweens.
///
/// Tweens advance in the order they were added. Two tweens driving the same
/// property both write every step, the newer one last.
pub struct TweenPlayer<K> {
    active: Vec<ActiveTween<K>>,
    next_group: TweenGroup,
}

impl<K> TweenPlayer<K> {
    pub fn new() -> Self {
        Self {
            active: Vec::new(),
            next_group: 1,
        }
    }

    /// Allocate a fresh group tag
    pub fn next_group(&mut self) -> TweenGroup {
        let group = self.next_group;
        self.next_group += 1;
        group
    }

    pub fn add(&mut self, group: TweenGroup, key: K, tween: Tween) {
        self.active.push(ActiveTween { group, key, tween });
    }

    /// Advance every tween by `dt`, writing into `targets`.
    ///
    /// Returns the groups whose last tween finished during this step.
    pub fn advance<T: TweenTargets<K>>(&mut self, dt: f64, targets: &mut T) -> Vec<TweenGroup> {
        let mut touched = Vec::new();
        let mut done_flags = Vec::with_capacity(self.active.len());

        for active in &mut self.active {
            let done = match targets.values_mut(&active.key) {
                Some(values) => active.tween.advance(dt, values),
                None => {
                    log::debug!("Tween target for group {} is gone, dropping", active.group);
                    true
                }
            };
            if done && !touched.contains(&active.group) {
                touched.push(active.group);
            }
            done_flags.push(done);
        }

        let mut flags = done_flags.into_iter();
        self.active.retain(|_| !flags.next().unwrap_or(true));
        touched.retain(|g| !self.has_group(*g));
        touched
    }

    pub fn has_group(&self, group: TweenGroup) -> bool {
        self.active.iter().any(|a| a.group == group)
    }

    /// Stop every tween of `group` where it stands. Returns how many were removed.
    pub fn cancel_group(&mut self, group: TweenGroup) -> usize {
        let before = self.active.len();
        self.active.retain(|a| a.group != group);
        before - self.active.len()
    }

    /// Stop everything. Returns how many tweens were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.active.len();
        self.active.clear();
        count
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Elapsed and total time of the longest-running tween in `group`
    pub fn group_timing(&self, group: TweenGroup) -> Option<(f64, f64)> {
        self.active
            .iter()
            .filter(|a| a.group == group)
            .map(|a| (a.tween.elapsed(), a.tween.duration()))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl<K> Default for TweenPlayer<K> {
    fn default() -> Self {
        Self::new()
    }
}
