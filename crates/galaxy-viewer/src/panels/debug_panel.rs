//! Parameter controls and transition buttons

use egui::emath::Numeric;
use galaxy_animation::TransitionKind;
use galaxy_core::{Color, GalaxyParams, ParamRange, PointBlending};
use galaxy_runtime::{EventBus, GalaxyEvent};

/// Edits a draft copy of the parameters.
///
/// Nothing is committed while a control is being dragged or a key is held:
/// the draft goes out as one `ParamsCommitted` event on the first frame with
/// no pointer button and no key down after a change. Slider text fields only
/// write their value back when editing ends, so typing a number is one edit.
pub struct DebugPanel {
    draft: GalaxyParams,
    pending: bool,
    pub open: bool,
}

impl DebugPanel {
    pub fn new(params: &GalaxyParams) -> Self {
        Self {
            draft: params.clone(),
            pending: false,
            open: true,
        }
    }

    pub fn draft(&self) -> &GalaxyParams {
        &self.draft
    }

    pub fn has_pending_change(&self) -> bool {
        self.pending
    }

    /// Replace the draft with what the state actually holds, unless an edit
    /// is still in progress
    pub fn sync(&mut self, params: &GalaxyParams) {
        if !self.pending {
            self.draft = params.clone();
        }
    }

    /// Apply an edit to the draft and mark it for commit
    pub fn edit(&mut self, f: impl FnOnce(&mut GalaxyParams)) {
        f(&mut self.draft);
        self.pending = true;
    }

    /// Commit the draft if an edit is pending and no input is held
    pub fn finish_change(&mut self, input_held: bool, events: &mut EventBus) -> bool {
        if !self.pending || input_held {
            return false;
        }
        self.pending = false;
        self.draft = self.draft.clamped();
        log::debug!("Committing parameters: {:?}", self.draft);
        events.push(GalaxyEvent::ParamsCommitted(self.draft.clone()));
        true
    }

    pub fn ui(&mut self, ctx: &egui::Context, events: &mut EventBus) {
        let mut open = self.open;
        egui::Window::new("Galaxy")
            .open(&mut open)
            .default_width(280.0)
            .resizable(false)
            .show(ctx, |ui| {
                self.controls(ui, events);
            });
        self.open = open;

        let input_held = ctx.input(|i| i.pointer.any_down() || !i.keys_down.is_empty());
        self.finish_change(input_held, events);
    }

    fn controls(&mut self, ui: &mut egui::Ui, events: &mut EventBus) {
        let mut changed = false;
        let d = &mut self.draft;

        egui::Grid::new("galaxy_params")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                changed |= slider(ui, "count", &mut d.count, GalaxyParams::COUNT);
                changed |= slider(ui, "size", &mut d.size, GalaxyParams::SIZE);
                changed |= slider(ui, "radius", &mut d.radius, GalaxyParams::RADIUS);
                changed |= slider(ui, "length", &mut d.length, GalaxyParams::LENGTH);
                changed |= slider(ui, "strings", &mut d.strings, GalaxyParams::STRINGS);
                changed |= slider(ui, "curl", &mut d.curl, GalaxyParams::CURL);
                changed |= slider(ui, "randomness", &mut d.randomness, GalaxyParams::RANDOMNESS);
                changed |= slider(
                    ui,
                    "randomnessPower",
                    &mut d.randomness_power,
                    GalaxyParams::RANDOMNESS_POWER,
                );
                changed |= color(ui, "insideColor", &mut d.inside_color);
                changed |= color(ui, "outsideColor", &mut d.outside_color);

                ui.label("blending");
                egui::ComboBox::from_id_salt("blending")
                    .selected_text(d.blending.label())
                    .show_ui(ui, |ui| {
                        for blending in PointBlending::ALL {
                            changed |= ui
                                .selectable_value(&mut d.blending, blending, blending.label())
                                .changed();
                        }
                    });
                ui.end_row();
            });

        if changed {
            self.pending = true;
        }

        ui.separator();
        ui.horizontal(|ui| {
            if ui.button("Collapse to strings").clicked() {
                events.push(GalaxyEvent::TransitionRequested(TransitionKind::Collapse));
            }
            if ui.button("Scatter").clicked() {
                events.push(GalaxyEvent::TransitionRequested(TransitionKind::Scatter));
            }
        });
        if ui.small_button("Reset parameters").clicked() {
            self.edit(|d| *d = GalaxyParams::default());
        }
    }
}

fn slider<N: Numeric>(ui: &mut egui::Ui, label: &str, value: &mut N, range: ParamRange) -> bool {
    ui.label(label);
    let changed = ui
        .add(
            egui::Slider::new(value, N::from_f64(range.min)..=N::from_f64(range.max))
                .step_by(range.step)
                .update_while_editing(false),
        )
        .changed();
    ui.end_row();
    changed
}

fn color(ui: &mut egui::Ui, label: &str, value: &mut Color) -> bool {
    ui.label(label);
    let mut rgb = value.to_rgb8();
    let changed = egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed();
    if changed {
        *value = Color::from_rgb8(rgb);
    }
    ui.end_row();
    changed
}
