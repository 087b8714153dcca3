use super::govardovskii::{govardovskii_template, TemplateError};

// ---------------------------------------------------------------------------
// PigmentSpec – one pigment to evaluate and plot
// ---------------------------------------------------------------------------

/// A visual pigment: peak wavelength plus chromophore mixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PigmentSpec {
    /// Wavelength of peak absorbance, in nanometers.
    pub lambda_max: f64,
    /// A1 chromophore proportion in percent (0 = pure A2, 100 = pure A1).
    pub a1_percent: f64,
}

impl PigmentSpec {
    /// A pure-A1 pigment at the given peak wavelength.
    pub fn new(lambda_max: f64) -> Self {
        PigmentSpec {
            lambda_max,
            a1_percent: 100.0,
        }
    }

    /// Same pigment with a different A1 proportion.
    pub fn with_a1_percent(self, a1_percent: f64) -> Self {
        PigmentSpec { a1_percent, ..self }
    }

    /// Evaluate this pigment's normalized template over the given wavelengths.
    pub fn evaluate(&self, wavelengths: &[f64]) -> Result<SensitivityCurve, TemplateError> {
        govardovskii_template(wavelengths, self.lambda_max, self.a1_percent)
    }

    /// Label used in plot legends, e.g. `λmax 525 nm, A1 50%`.
    pub fn label(&self) -> String {
        format!(
            "λmax {:.0} nm, A1 {:.0}%",
            self.lambda_max, self.a1_percent
        )
    }
}

// ---------------------------------------------------------------------------
// SensitivityCurve – one evaluated template
// ---------------------------------------------------------------------------

/// A normalized sensitivity curve: one value per wavelength, peak at 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityCurve {
    /// Wavelength axis (nm).
    pub wavelengths: Vec<f64>,
    /// Relative sensitivity – same length as `wavelengths`, max is 1.0.
    pub values: Vec<f64>,
}

impl SensitivityCurve {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    /// Whether the curve holds no samples.
    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Wavelength of the largest sensitivity value.
    pub fn peak_wavelength(&self) -> Option<f64> {
        self.values
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| self.wavelengths[i])
    }
}

// ---------------------------------------------------------------------------
// WavelengthRange – evenly spaced sample grid
// ---------------------------------------------------------------------------

/// An inclusive wavelength range sampled at a fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthRange {
    pub min_nm: f64,
    pub max_nm: f64,
    pub step_nm: f64,
}

impl Default for WavelengthRange {
    fn default() -> Self {
        WavelengthRange {
            min_nm: 300.0,
            max_nm: 800.0,
            step_nm: 1.0,
        }
    }
}

impl WavelengthRange {
    /// Generate the sample grid.  An inverted range or a non-positive step
    /// yields an empty grid, which the evaluator rejects as invalid input.
    pub fn samples(&self) -> Vec<f64> {
        if self.step_nm <= 0.0 || self.min_nm > self.max_nm {
            return Vec::new();
        }
        // Nudge the quotient before flooring so fractional steps that land
        // a hair under the endpoint (500/0.1 = 4999.999…) still include it.
        let steps = (self.max_nm - self.min_nm) / self.step_nm;
        let n = (steps + 1e-9).floor() as usize + 1;
        (0..n).map(|i| self.min_nm + i as f64 * self.step_nm).collect()
    }
}
