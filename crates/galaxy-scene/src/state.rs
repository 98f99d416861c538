//! Single owner of the live drawable

use crate::binding::SceneBinding;
use crate::drawable::{Drawable, DrawableProperty};
use crate::preset::GalaxyPreset;
use galaxy_animation::{TransitionController, TransitionKind, TransitionSpec, TransitionState};
use galaxy_core::{DrawableId, GalaxyParams, Result, Vec3};
use galaxy_particles::{GalaxyGenerator, PositionBuffer};
use galaxy_runtime::{GalaxyEvent, RuntimeSystem};

/// Offset x a freshly generated drawable is attached at
pub const DEFAULT_OFFSET_X: f32 = 15.0;

struct Current {
    id: DrawableId,
    drawable: Drawable,
    /// Target of the collapse transition, generated alongside the drawable
    string_shaped: PositionBuffer,
}

/// Owns the parameters, the generator and the one drawable on screen.
///
/// Every mutation of the drawable goes through this type: regeneration
/// replaces it wholesale, transitions tween it in place. After any change a
/// redraw request is left pending for the loop to pick up.
pub struct GalaxyState {
    params: GalaxyParams,
    generator: GalaxyGenerator,
    transitions: TransitionController<DrawableProperty>,
    collapse: TransitionSpec,
    scatter: TransitionSpec,
    offset_x: f32,
    current: Option<Current>,
    redraw_pending: bool,
}

impl GalaxyState {
    /// State with default transitions. `seed` fixes the random source; `None`
    /// seeds from the OS.
    pub fn new(params: GalaxyParams, seed: Option<u64>) -> Self {
        let generator = match seed {
            Some(seed) => GalaxyGenerator::from_seed(seed),
            None => GalaxyGenerator::from_entropy(),
        };
        Self {
            params: params.clamped(),
            generator,
            transitions: TransitionController::new(),
            collapse: TransitionSpec::collapse(),
            scatter: TransitionSpec::scatter(),
            offset_x: DEFAULT_OFFSET_X,
            current: None,
            redraw_pending: false,
        }
    }

    pub fn from_preset(preset: &GalaxyPreset, seed: Option<u64>) -> Self {
        let mut state = Self::new(preset.galaxy.clone(), seed);
        state.collapse = preset.transitions.collapse;
        state.scatter = preset.transitions.scatter;
        state.offset_x = preset.view.offset_x;
        state
    }

    pub fn params(&self) -> &GalaxyParams {
        &self.params
    }

    pub fn drawable(&self) -> Option<&Drawable> {
        self.current.as_ref().map(|c| &c.drawable)
    }

    pub fn drawable_id(&self) -> Option<DrawableId> {
        self.current.as_ref().map(|c| c.id)
    }

    pub fn string_shaped(&self) -> Option<&PositionBuffer> {
        self.current.as_ref().map(|c| &c.string_shaped)
    }

    pub fn transition_spec(&self, kind: TransitionKind) -> &TransitionSpec {
        match kind {
            TransitionKind::Collapse => &self.collapse,
            TransitionKind::Scatter => &self.scatter,
        }
    }

    pub fn transition_state(&self, kind: TransitionKind) -> TransitionState {
        self.transitions.state(kind)
    }

    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    /// Drop the current drawable (if any) and build a new one from the
    /// current parameters.
    ///
    /// Running transitions are cancelled first so no tween outlives the
    /// buffers it was started against.
    pub fn regenerate<S: SceneBinding + ?Sized>(&mut self, scene: &mut S) -> Result<DrawableId> {
        let cancelled = self.transitions.cancel_all();
        if cancelled > 0 {
            log::info!("Cancelled {cancelled} running transition(s) for regeneration");
        }

        if let Some(previous) = self.current.take() {
            scene.detach(previous.id);
            log::debug!("Detached drawable {}", previous.id);
        }

        let buffers = self.generator.generate(&self.params);
        let drawable = Drawable::new(
            buffers.scattered,
            buffers.colors,
            self.params.size,
            self.params.blending,
            Vec3::new(self.offset_x, 0.0, 0.0),
        );
        let id = scene.attach(&drawable)?;
        log::info!(
            "Attached drawable {id} ({} particles)",
            drawable.particle_count()
        );

        self.current = Some(Current {
            id,
            drawable,
            string_shaped: buffers.string_shaped,
        });
        self.redraw_pending = true;
        Ok(id)
    }

    /// Commit edited parameters and regenerate. Values are clamped to the
    /// control bounds first.
    pub fn apply_params<S: SceneBinding + ?Sized>(
        &mut self,
        params: GalaxyParams,
        scene: &mut S,
    ) -> Result<DrawableId> {
        let params = params.clamped();
        if params.count != self.params.count {
            log::debug!("Particle count {} -> {}", self.params.count, params.count);
        }
        self.params = params;
        self.regenerate(scene)
    }

    /// Collapse onto the string layout. Returns `false` when there is nothing
    /// to animate yet.
    pub fn transition_to_string(&mut self) -> bool {
        let Some(current) = self.current.as_ref() else {
            log::debug!("Collapse requested before the first drawable, ignoring");
            return false;
        };

        let target = current.string_shaped.as_slice().to_vec();
        self.transitions.start(
            TransitionKind::Collapse,
            &self.collapse,
            DrawableProperty::OffsetX,
            DrawableProperty::Positions,
            target,
        );
        self.redraw_pending = true;
        true
    }

    /// Draw a fresh scattered layout and animate onto it. Returns `false`
    /// when there is nothing to animate yet.
    pub fn transition_to_scattered(&mut self) -> bool {
        let Some(current) = self.current.as_ref() else {
            log::debug!("Scatter requested before the first drawable, ignoring");
            return false;
        };

        let count = current.drawable.particle_count() as u32;
        let target = self.generator.scattered(count).into_vec();
        self.transitions.start(
            TransitionKind::Scatter,
            &self.scatter,
            DrawableProperty::OffsetX,
            DrawableProperty::Positions,
            target,
        );
        self.redraw_pending = true;
        true
    }

    pub fn transition(&mut self, kind: TransitionKind) -> bool {
        match kind {
            TransitionKind::Collapse => self.transition_to_string(),
            TransitionKind::Scatter => self.transition_to_scattered(),
        }
    }

    /// Step running transitions by `dt` seconds. Every step dirties the
    /// drawable and leaves a redraw pending. Returns the transitions that
    /// finished.
    pub fn advance(&mut self, dt: f64) -> Vec<TransitionKind> {
        let Some(current) = self.current.as_mut() else {
            return Vec::new();
        };
        if !self.transitions.is_animating() {
            return Vec::new();
        }

        let finished = self.transitions.advance(dt, &mut current.drawable);
        self.redraw_pending = true;
        for kind in &finished {
            log::info!("Transition '{kind}' finished");
        }
        finished
    }

    /// Push dirty drawable data through `scene`
    pub fn sync<S: SceneBinding + ?Sized>(&mut self, scene: &mut S) -> Result<()> {
        if let Some(current) = self.current.as_mut() {
            if current.drawable.is_dirty() {
                scene.update(current.id, &current.drawable)?;
                current.drawable.clear_dirty();
            }
        }
        Ok(())
    }

    /// Apply one UI event
    pub fn handle_event<S: SceneBinding + ?Sized>(
        &mut self,
        event: GalaxyEvent,
        scene: &mut S,
    ) -> Result<()> {
        match event {
            GalaxyEvent::ParamsCommitted(params) => {
                self.apply_params(params, scene)?;
            }
            GalaxyEvent::TransitionRequested(kind) => {
                self.transition(kind);
            }
            GalaxyEvent::Resized { .. } => {
                self.redraw_pending = true;
            }
        }
        Ok(())
    }

    /// Consume the pending redraw request
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}

impl<S: SceneBinding + ?Sized> RuntimeSystem<S> for GalaxyState {
    fn initialize(&mut self, scene: &mut S) -> Result<()> {
        if self.current.is_none() {
            self.regenerate(scene)?;
        }
        Ok(())
    }

    fn update(&mut self, scene: &mut S, dt: f64) -> Result<()> {
        self.advance(dt);
        self.sync(scene)
    }

    fn shutdown(&mut self, scene: &mut S) -> Result<()> {
        self.transitions.cancel_all();
        if let Some(current) = self.current.take() {
            scene.detach(current.id);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "galaxy_state"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galaxy_core::{DrawableIds, GalaxyError};

    #[derive(Default)]
    struct RecordingScene {
        attached: Vec<DrawableId>,
        detached: Vec<DrawableId>,
        updates: Vec<(DrawableId, bool, bool)>,
        fail_attach: bool,
        ids: DrawableIds,
    }

    impl RecordingScene {
        fn live(&self) -> Vec<DrawableId> {
            self.attached
                .iter()
                .copied()
                .filter(|id| !self.detached.contains(id))
                .collect()
        }
    }

    impl SceneBinding for RecordingScene {
        fn attach(&mut self, _drawable: &Drawable) -> Result<DrawableId> {
            if self.fail_attach {
                return Err(GalaxyError::SceneError("attach refused".into()));
            }
            let id = self.ids.next_id();
            self.attached.push(id);
            Ok(id)
        }

        fn detach(&mut self, id: DrawableId) {
            self.detached.push(id);
        }

        fn update(&mut self, id: DrawableId, drawable: &Drawable) -> Result<()> {
            self.updates
                .push((id, drawable.positions_dirty(), drawable.transform_dirty()));
            Ok(())
        }
    }

    fn params(count: u32) -> GalaxyParams {
        GalaxyParams {
            count,
            ..Default::default()
        }
    }

    fn run_until_idle(state: &mut GalaxyState, scene: &mut RecordingScene) -> Vec<TransitionKind> {
        let mut finished = Vec::new();
        for _ in 0..10_000 {
            finished.extend(state.advance(1.0 / 60.0));
            state.sync(scene).unwrap();
            if !state.is_animating() {
                break;
            }
        }
        finished
    }

    #[test]
    fn first_regenerate_does_not_detach() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(200), Some(1));
        assert!(state.drawable().is_none());

        let id = state.regenerate(&mut scene).unwrap();
        assert!(scene.detached.is_empty());
        assert_eq!(scene.live(), vec![id]);

        let drawable = state.drawable().unwrap();
        assert_eq!(drawable.particle_count(), 200);
        assert_eq!(drawable.offset, Vec3::new(15.0, 0.0, 0.0));
        assert!(state.take_redraw_request());
        assert!(!state.take_redraw_request());
    }

    #[test]
    fn regenerate_replaces_previous_drawable() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(200), Some(2));
        let first = state.regenerate(&mut scene).unwrap();
        let second = state.apply_params(params(300), &mut scene).unwrap();

        assert_eq!(scene.detached, vec![first]);
        assert_eq!(scene.live(), vec![second]);
        assert_eq!(state.drawable().unwrap().particle_count(), 300);
        assert_eq!(state.string_shaped().unwrap().particle_count(), 300);
    }

    #[test]
    fn apply_params_clamps() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(200), Some(3));
        let wild = GalaxyParams {
            count: 5,
            strings: 1,
            ..params(200)
        };
        state.apply_params(wild, &mut scene).unwrap();
        assert_eq!(state.params().count, 100);
        assert_eq!(state.params().strings, 2);
        assert_eq!(state.drawable().unwrap().particle_count(), 100);
    }

    #[test]
    fn collapse_ends_on_string_shape_at_origin() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(500), Some(4));
        state.regenerate(&mut scene).unwrap();
        let target = state.string_shaped().unwrap().clone();

        assert!(state.transition_to_string());
        assert!(matches!(
            state.transition_state(TransitionKind::Collapse),
            TransitionState::Animating { .. }
        ));

        let finished = run_until_idle(&mut state, &mut scene);
        assert_eq!(finished, vec![TransitionKind::Collapse]);

        let drawable = state.drawable().unwrap();
        assert_eq!(drawable.offset.x, 0.0);
        for (a, b) in drawable
            .positions
            .as_slice()
            .iter()
            .zip(target.as_slice())
        {
            assert!((a - b).abs() < 1e-6);
        }
        assert_eq!(
            state.transition_state(TransitionKind::Collapse),
            TransitionState::Idle
        );
    }

    #[test]
    fn every_step_dirties_and_syncs() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(100), Some(5));
        let id = state.regenerate(&mut scene).unwrap();
        state.take_redraw_request();

        state.transition_to_string();
        state.take_redraw_request();
        state.advance(0.1);
        assert!(state.take_redraw_request());
        assert!(state.drawable().unwrap().positions_dirty());

        state.sync(&mut scene).unwrap();
        assert_eq!(scene.updates, vec![(id, true, true)]);
        assert!(!state.drawable().unwrap().is_dirty());

        // Nothing dirty, nothing uploaded
        state.sync(&mut scene).unwrap();
        assert_eq!(scene.updates.len(), 1);
    }

    #[test]
    fn scatter_draws_fresh_layout_and_returns_to_fifteen() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(500), Some(6));
        state.regenerate(&mut scene).unwrap();
        let original = state.drawable().unwrap().positions.clone();

        state.transition_to_string();
        run_until_idle(&mut state, &mut scene);
        assert!(state.transition_to_scattered());
        let finished = run_until_idle(&mut state, &mut scene);
        assert_eq!(finished, vec![TransitionKind::Scatter]);

        let drawable = state.drawable().unwrap();
        assert_eq!(drawable.offset.x, 15.0);
        assert_ne!(drawable.positions, original);
        for v in drawable.positions.as_slice() {
            assert!((-5.0..=5.0).contains(v));
        }
    }

    #[test]
    fn transitions_without_drawable_are_noops() {
        let mut state = GalaxyState::new(params(100), Some(7));
        assert!(!state.transition_to_string());
        assert!(!state.transition_to_scattered());
        assert!(!state.is_animating());
        assert!(state.advance(1.0).is_empty());
        assert!(!state.take_redraw_request());
    }

    #[test]
    fn regenerate_cancels_running_transitions() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(100), Some(8));
        state.regenerate(&mut scene).unwrap();
        state.transition_to_string();
        state.advance(0.5);
        assert!(state.is_animating());

        state.regenerate(&mut scene).unwrap();
        assert!(!state.is_animating());
        let drawable = state.drawable().unwrap();
        assert_eq!(drawable.offset.x, 15.0);
        // Further steps leave the new drawable untouched
        let before = drawable.positions.clone();
        state.advance(1.0);
        assert_eq!(state.drawable().unwrap().positions, before);
    }

    #[test]
    fn events_drive_the_state() {
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::new(params(100), Some(9));
        RuntimeSystem::initialize(&mut state, &mut scene).unwrap();
        assert_eq!(scene.attached.len(), 1);

        state
            .handle_event(GalaxyEvent::TransitionRequested(TransitionKind::Collapse), &mut scene)
            .unwrap();
        assert!(state.is_animating());

        state
            .handle_event(GalaxyEvent::ParamsCommitted(params(400)), &mut scene)
            .unwrap();
        assert!(!state.is_animating());
        assert_eq!(state.drawable().unwrap().particle_count(), 400);

        RuntimeSystem::shutdown(&mut state, &mut scene).unwrap();
        assert!(scene.live().is_empty());
        assert!(state.drawable().is_none());
    }

    #[test]
    fn failed_attach_leaves_no_drawable() {
        let mut scene = RecordingScene {
            fail_attach: true,
            ..Default::default()
        };
        let mut state = GalaxyState::new(params(100), Some(10));
        assert!(state.regenerate(&mut scene).is_err());
        assert!(state.drawable().is_none());
        assert!(!state.transition_to_string());
    }

    #[test]
    fn preset_settings_are_used() {
        let preset = GalaxyPreset::from_toml_str(
            r#"
            [galaxy]
            count = 300

            [transitions.collapse]
            duration = 1.0
            ease = "none"
            offset_x = -2.0

            [view]
            offset_x = 8.0
            "#,
        )
        .unwrap();
        let mut scene = RecordingScene::default();
        let mut state = GalaxyState::from_preset(&preset, Some(11));
        state.regenerate(&mut scene).unwrap();
        assert_eq!(state.drawable().unwrap().offset.x, 8.0);

        state.transition_to_string();
        state.advance(0.5);
        // Linear ease, halfway from 8 to -2
        assert!((state.drawable().unwrap().offset.x - 3.0).abs() < 1e-5);
        assert_eq!(state.transition_spec(TransitionKind::Scatter).duration, 4.0);
    }
}
