//! The two scripted shape transitions
//!
//! Each transition is a two-state machine, `Idle -> Animating -> Idle`. It
//! drives two properties at once: the horizontal offset of the drawable and
//! every component of its position buffer. Starting a transition while one is
//! already animating layers the new tweens on top; nothing is queued.

use crate::easing::Ease;
use crate::player::{TweenGroup, TweenPlayer};
use crate::tween::{Tween, TweenTargets};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which scripted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Pull the cloud onto the string layout and slide it to x = 0
    Collapse,
    /// Scatter onto a freshly drawn cube and slide back out
    Scatter,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Collapse => write!(f, "collapse"),
            TransitionKind::Scatter => write!(f, "scatter"),
        }
    }
}

/// Timing and destination of one transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    /// Seconds
    pub duration: f64,
    pub ease: Ease,
    /// Offset x the drawable slides to
    pub offset_x: f32,
}

impl TransitionSpec {
    pub fn collapse() -> Self {
        Self {
            duration: 3.0,
            ease: Ease::POWER3,
            offset_x: 0.0,
        }
    }

    pub fn scatter() -> Self {
        Self {
            duration: 4.0,
            ease: Ease::POWER1,
            offset_x: 15.0,
        }
    }

    pub fn default_for(kind: TransitionKind) -> Self {
        match kind {
            TransitionKind::Collapse => Self::collapse(),
            TransitionKind::Scatter => Self::scatter(),
        }
    }
}

/// Observable state of one transition kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Idle,
    Animating { elapsed: f64, duration: f64 },
}

struct Running {
    kind: TransitionKind,
    group: TweenGroup,
}

/// Runs transitions against any [`TweenTargets`] owner keyed by `K`
pub struct TransitionController<K> {
    player: TweenPlayer<K>,
    running: Vec<Running>,
}

impl<K: Clone> TransitionController<K> {
    pub fn new() -> Self {
        Self {
            player: TweenPlayer::new(),
            running: Vec::new(),
        }
    }

    /// Begin `kind`: tween `offset_key` to `spec.offset_x` and `positions_key`
    /// to `target`, both over `spec.duration` with `spec.ease`.
    pub fn start(
        &mut self,
        kind: TransitionKind,
        spec: &TransitionSpec,
        offset_key: K,
        positions_key: K,
        target: Vec<f32>,
    ) {
        if self.running.iter().any(|r| r.kind == kind) {
            log::debug!("Transition '{kind}' restarted while animating, layering");
        }

        let group = self.player.next_group();
        self.player.add(
            group,
            offset_key,
            Tween::scalar(spec.offset_x, spec.duration, spec.ease),
        );
        self.player.add(
            group,
            positions_key,
            Tween::new(target, spec.duration, spec.ease),
        );
        self.running.push(Running { kind, group });

        log::info!(
            "Transition '{kind}' started ({:.1}s, {})",
            spec.duration,
            spec.ease
        );
    }

    /// Step every running transition. Returns the kinds that completed.
    pub fn advance<T: TweenTargets<K>>(&mut self, dt: f64, targets: &mut T) -> Vec<TransitionKind> {
        if self.running.is_empty() {
            return Vec::new();
        }

        let finished_groups = self.player.advance(dt, targets);
        let mut finished = Vec::new();
        self.running.retain(|r| {
            if finished_groups.contains(&r.group) {
                finished.push(r.kind);
                false
            } else {
                true
            }
        });
        finished
    }

    /// State of the most recently started transition of `kind`
    pub fn state(&self, kind: TransitionKind) -> TransitionState {
        self.running
            .iter()
            .rev()
            .find(|r| r.kind == kind)
            .and_then(|r| self.player.group_timing(r.group))
            .map(|(elapsed, duration)| TransitionState::Animating { elapsed, duration })
            .unwrap_or(TransitionState::Idle)
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Stop all transitions where they stand. Returns how many were running.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.running.len();
        self.player.clear();
        self.running.clear();
        count
    }
}

impl<K: Clone> Default for TransitionController<K> {
    fn default() -> Self {
        Self::new()
    }
}
