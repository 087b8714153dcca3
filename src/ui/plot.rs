use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use opsin_viewer::color::curve_color;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Template plot (central panel)
// ---------------------------------------------------------------------------

/// Render the pigment template curves in the central panel.
pub fn template_plot(ui: &mut Ui, state: &AppState) {
    if state.curves.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Add a pigment to plot its template");
        });
        return;
    }

    Plot::new("template_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Wavelength (nm)")
        .y_axis_label("Relative sensitivity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (spec, curve) in state.specs.iter().zip(&state.curves) {
                let points: PlotPoints = curve
                    .wavelengths
                    .iter()
                    .zip(curve.values.iter())
                    .map(|(&w, &v)| [w, v])
                    .collect();

                let line = Line::new(points)
                    .name(spec.label())
                    .color(curve_color(spec))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
