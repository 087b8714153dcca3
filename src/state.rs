use anyhow::{Context, Result};

use opsin_viewer::template::{PigmentSpec, SensitivityCurve, WavelengthRange};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Pigments to plot, in draw order.
    pub specs: Vec<PigmentSpec>,

    /// Wavelength sample grid shared by all curves.
    pub range: WavelengthRange,

    /// Evaluated curves, parallel to `specs` (cached; empty after an error).
    pub curves: Vec<SensitivityCurve>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = AppState {
            specs: demo_specs(),
            range: WavelengthRange::default(),
            curves: Vec::new(),
            status_message: None,
        };
        state.rebuild_curves();
        state
    }
}

/// The stock comparison: λmax ∈ {400, 525, 650} crossed with
/// A1 ∈ {100, 50, 0} %.
pub fn demo_specs() -> Vec<PigmentSpec> {
    let mut specs = Vec::with_capacity(9);
    for lambda_max in [400.0, 525.0, 650.0] {
        for a1_percent in [100.0, 50.0, 0.0] {
            specs.push(PigmentSpec::new(lambda_max).with_a1_percent(a1_percent));
        }
    }
    specs
}

impl AppState {
    /// Re-evaluate every pigment over the current range.
    ///
    /// On any evaluator failure the whole curve cache is cleared (no partial
    /// rendering) and the error is surfaced in the status bar.
    pub fn rebuild_curves(&mut self) {
        match self.evaluate_all() {
            Ok(curves) => {
                self.curves = curves;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to evaluate templates: {e:#}");
                self.curves.clear();
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn evaluate_all(&self) -> Result<Vec<SensitivityCurve>> {
        let samples = self.range.samples();
        self.specs
            .iter()
            .map(|spec| {
                spec.evaluate(&samples)
                    .with_context(|| format!("evaluating {}", spec.label()))
            })
            .collect()
    }

    /// Append a fresh pigment and recompute.
    pub fn add_spec(&mut self) {
        self.specs.push(PigmentSpec::new(500.0));
        self.rebuild_curves();
    }

    /// Remove the pigment at `index` and recompute.
    pub fn remove_spec(&mut self, index: usize) {
        if index < self.specs.len() {
            self.specs.remove(index);
            self.rebuild_curves();
        }
    }

    /// Restore the stock nine-curve comparison.
    pub fn reset_demo(&mut self) {
        self.specs = demo_specs();
        self.range = WavelengthRange::default();
        self.rebuild_curves();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_nine_curves() {
        let state = AppState::default();
        assert_eq!(state.specs.len(), 9);
        assert_eq!(state.curves.len(), 9);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn invalid_range_clears_all_curves() {
        let mut state = AppState::default();
        state.range.step_nm = 0.0;
        state.rebuild_curves();

        assert!(state.curves.is_empty());
        assert!(state.status_message.is_some());

        state.reset_demo();
        assert_eq!(state.curves.len(), 9);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn add_and_remove_keep_curves_in_sync() {
        let mut state = AppState::default();
        state.add_spec();
        assert_eq!(state.specs.len(), 10);
        assert_eq!(state.curves.len(), 10);

        state.remove_spec(0);
        assert_eq!(state.specs.len(), 9);
        assert_eq!(state.curves.len(), 9);
    }
}
