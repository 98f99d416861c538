//! Animation for the galaxy visualizer
//!
//! Tweens here are plain data: a tween names the property it drives with a
//! key, and whoever owns the property resolves that key through
//! [`TweenTargets`] when the tween advances. Nothing holds a reference to the
//! animated buffers between steps.
//!
//! - [`Ease`] - named easing curves (`power1`, `power3.inOut`, ...)
//! - [`Tween`] - start-to-end interpolation of a float slice
//! - [`TweenPlayer`] - ordered set of running tweens, grouped
//! - [`TransitionController`] - the two scripted shape transitions

pub mod easing;
pub mod player;
pub mod transition;
pub mod tween;

pub use easing::{Ease, EaseDirection};
pub use player::{TweenGroup, TweenPlayer};
pub use transition::{TransitionController, TransitionKind, TransitionSpec, TransitionState};
pub use tween::{Tween, TweenTargets};
