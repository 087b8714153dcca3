use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Slider, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – pigment controls
// ---------------------------------------------------------------------------

/// Render the left pigment panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Pigments");
    ui.separator();

    let mut changed = false;
    let mut remove: Option<usize> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (idx, spec) in state.specs.iter_mut().enumerate() {
                ui.push_id(idx, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        ui.strong(format!("#{}", idx + 1));
                        if ui.small_button("✕").clicked() {
                            remove = Some(idx);
                        }
                    });

                    ui.horizontal(|ui: &mut Ui| {
                        ui.label("λmax");
                        changed |= ui
                            .add(
                                DragValue::new(&mut spec.lambda_max)
                                    .range(300.0..=800.0)
                                    .speed(1.0)
                                    .suffix(" nm"),
                            )
                            .changed();
                    });

                    changed |= ui
                        .add(Slider::new(&mut spec.a1_percent, 0.0..=100.0).text("A1 %"))
                        .changed();
                });
                ui.separator();
            }

            if ui.button("Add pigment").clicked() {
                state.add_spec();
            }

            ui.add_space(8.0);
            ui.strong("Wavelength range");
            ui.horizontal(|ui: &mut Ui| {
                changed |= ui
                    .add(DragValue::new(&mut state.range.min_nm).speed(5.0).suffix(" nm"))
                    .changed();
                ui.label("to");
                changed |= ui
                    .add(DragValue::new(&mut state.range.max_nm).speed(5.0).suffix(" nm"))
                    .changed();
            });
            ui.horizontal(|ui: &mut Ui| {
                ui.label("step");
                changed |= ui
                    .add(
                        DragValue::new(&mut state.range.step_nm)
                            .range(0.1..=50.0)
                            .speed(0.1)
                            .suffix(" nm"),
                    )
                    .changed();
            });
        });

    if let Some(idx) = remove {
        state.remove_spec(idx);
    } else if changed {
        state.rebuild_curves();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(format!("{} pigment templates", state.specs.len()));

        ui.separator();

        if ui.button("Reset demo").clicked() {
            state.reset_demo();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}
