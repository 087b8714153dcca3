use thiserror::Error;

use super::model::SensitivityCurve;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a template evaluation can be rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TemplateError {
    #[error("wavelength set is empty")]
    EmptyWavelengths,

    #[error("wavelength {0} nm is not a positive finite number")]
    InvalidWavelength(f64),

    #[error("lambda_max must be positive and finite, got {0}")]
    InvalidLambdaMax(f64),

    #[error("A1 proportion must be within 0–100%, got {0}")]
    InvalidA1Proportion(f64),

    #[error("combined template maximum is {0}, normalization undefined")]
    DegenerateNormalization(f64),
}

// ---------------------------------------------------------------------------
// Govardovskii et al. (2000) pigment templates
// ---------------------------------------------------------------------------

/// Raw (un-normalized) A1 chromophore template at one wavelength.
///
/// Alpha band per eqs. 1–2 of Govardovskii et al. (2000), beta band per
/// eqs. 3–5b.  The beta band is a Gaussian in wavelength, not in λmax/λ.
pub fn a1_template(wavelength: f64, lambda_max: f64) -> f64 {
    let x = lambda_max / wavelength;

    let a = 0.8795 + 0.0459 * (-(lambda_max - 300.0).powi(2) / 11940.0).exp();
    let alpha = 1.0
        / ((69.7 * (a - x)).exp()
            + (28.0 * (0.922 - x)).exp()
            + (-14.9 * (1.104 - x)).exp()
            + 0.674);

    let beta_peak = 189.0 + 0.315 * lambda_max;
    let beta_width = -40.5 + 0.195 * lambda_max;
    let beta = 0.26 * (-((wavelength - beta_peak) / beta_width).powi(2)).exp();

    alpha + beta
}

/// Raw (un-normalized) A2 chromophore template at one wavelength.
///
/// Same shape as [`a1_template`] but with the independently fitted A2
/// coefficients: both the `a` parameter and the leading exponent steepness
/// depend on λmax, and the beta-band width is quadratic in λmax.  The
/// beta-band amplitude 0.26 is shared with the A1 template.
pub fn a2_template(wavelength: f64, lambda_max: f64) -> f64 {
    let x = lambda_max / wavelength;

    let a = 0.875 + 0.0268 * ((lambda_max - 665.0) / 40.7).exp();
    let steepness = 62.7 + 1.834 * ((lambda_max - 625.0) / 54.2).exp();
    let alpha = 1.0
        / ((steepness * (a - x)).exp()
            + (20.85 * (0.9101 - x)).exp()
            + (-10.37 * (1.1123 - x)).exp()
            + 0.5343);

    let beta_peak = 216.7 + 0.287 * lambda_max;
    let beta_width = 317.0 - 1.149 * lambda_max + 0.00124 * lambda_max * lambda_max;
    let beta = 0.26 * (-((wavelength - beta_peak) / beta_width).powi(2)).exp();

    alpha + beta
}

/// Evaluate the blended, normalized pigment template.
///
/// Blends the A1 and A2 templates as `(p/100)·A1 + (1-p/100)·A2` at every
/// wavelength, then scales the result so its maximum is exactly 1.0.
///
/// # Errors
///
/// * [`TemplateError::EmptyWavelengths`] – `wavelengths` is empty
/// * [`TemplateError::InvalidWavelength`] – a wavelength is non-finite or ≤ 0
/// * [`TemplateError::InvalidLambdaMax`] – `lambda_max` is non-finite or ≤ 0
/// * [`TemplateError::InvalidA1Proportion`] – `a1_percent` outside [0, 100]
/// * [`TemplateError::DegenerateNormalization`] – the combined curve contains
///   a non-finite value or its maximum is ≤ 0 (λmax far outside the
///   physically plausible range)
pub fn govardovskii_template(
    wavelengths: &[f64],
    lambda_max: f64,
    a1_percent: f64,
) -> Result<SensitivityCurve, TemplateError> {
    if wavelengths.is_empty() {
        return Err(TemplateError::EmptyWavelengths);
    }
    if !lambda_max.is_finite() || lambda_max <= 0.0 {
        return Err(TemplateError::InvalidLambdaMax(lambda_max));
    }
    if !a1_percent.is_finite() || !(0.0..=100.0).contains(&a1_percent) {
        return Err(TemplateError::InvalidA1Proportion(a1_percent));
    }
    if let Some(&bad) = wavelengths.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        return Err(TemplateError::InvalidWavelength(bad));
    }

    let weight = a1_percent / 100.0;
    let mut values: Vec<f64> = wavelengths
        .iter()
        .map(|&w| weight * a1_template(w, lambda_max) + (1.0 - weight) * a2_template(w, lambda_max))
        .collect();

    // `f64::max` skips NaN, so scan for non-finite values before taking the
    // maximum; a NaN anywhere makes normalization undefined.
    if values.iter().any(|v| !v.is_finite()) {
        return Err(TemplateError::DegenerateNormalization(f64::NAN));
    }
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return Err(TemplateError::DegenerateNormalization(max));
    }
    for v in &mut values {
        *v /= max;
    }

    Ok(SensitivityCurve {
        wavelengths: wavelengths.to_vec(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn visible_grid() -> Vec<f64> {
        (300..=800).map(f64::from).collect()
    }

    #[test]
    fn peak_is_one_at_lambda_max_for_pure_a1() {
        let grid = visible_grid();
        for lambda_max in [420.0, 500.0, 560.0] {
            let curve = govardovskii_template(&grid, lambda_max, 100.0).unwrap();

            let max = curve.values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert_relative_eq!(max, 1.0, epsilon = 1e-12);

            let peak = curve.peak_wavelength().unwrap();
            assert!(
                (peak - lambda_max).abs() <= 1.0,
                "peak {peak} nm too far from λmax {lambda_max} nm"
            );
        }
    }

    #[test]
    fn all_values_at_most_one() {
        let grid = visible_grid();
        for lambda_max in [400.0, 525.0, 650.0] {
            for a1 in [0.0, 50.0, 100.0] {
                let curve = govardovskii_template(&grid, lambda_max, a1).unwrap();
                for &v in &curve.values {
                    assert!(v <= 1.0 + 1e-12, "value {v} exceeds 1.0");
                }
            }
        }
    }

    #[test]
    fn three_point_example_peaks_exactly_at_500() {
        let curve = govardovskii_template(&[400.0, 500.0, 600.0], 500.0, 100.0).unwrap();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.values[1], 1.0);
        assert_eq!(curve.peak_wavelength(), Some(500.0));
    }

    #[test]
    fn boundary_proportions_reduce_to_single_chromophore() {
        let grid = visible_grid();
        let pure_a1 = govardovskii_template(&grid, 525.0, 100.0).unwrap();
        let pure_a2 = govardovskii_template(&grid, 525.0, 0.0).unwrap();

        // Normalizing the raw single-chromophore band must reproduce each
        // boundary evaluation with no residual from the other template.
        let raw_a1: Vec<f64> = grid.iter().map(|&w| a1_template(w, 525.0)).collect();
        let raw_a2: Vec<f64> = grid.iter().map(|&w| a2_template(w, 525.0)).collect();
        let max_a1 = raw_a1.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let max_a2 = raw_a2.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for i in 0..grid.len() {
            assert_relative_eq!(pure_a1.values[i], raw_a1[i] / max_a1, epsilon = 1e-12);
            assert_relative_eq!(pure_a2.values[i], raw_a2[i] / max_a2, epsilon = 1e-12);
        }
    }

    #[test]
    fn blend_is_convex_combination_of_raw_templates() {
        let grid = visible_grid();
        let lambda_max = 525.0;
        let weight = 0.37;

        // Manually blend the raw bands, normalize, and compare against a
        // direct evaluation at the blended proportion.
        let blended: Vec<f64> = grid
            .iter()
            .map(|&w| {
                weight * a1_template(w, lambda_max)
                    + (1.0 - weight) * a2_template(w, lambda_max)
            })
            .collect();
        let max = blended.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let direct = govardovskii_template(&grid, lambda_max, weight * 100.0).unwrap();
        for i in 0..grid.len() {
            assert_relative_eq!(direct.values[i], blended[i] / max, epsilon = 1e-12);
        }
    }

    #[test]
    fn pure_a2_matches_reference_values() {
        let grid = visible_grid();
        let curve = govardovskii_template(&grid, 500.0, 0.0).unwrap();

        // Reference values from the numpy rendition of the template.  The
        // 360 nm sample sits on the A2 beta shoulder, so it is sensitive to
        // the beta-band amplitude (0.26, shared with A1).
        assert_eq!(curve.peak_wavelength(), Some(500.0));
        assert_relative_eq!(curve.values[60], 0.315118907948183, epsilon = 1e-12);
    }

    #[test]
    fn nan_in_combined_curve_is_rejected() {
        // λmax chosen so the A1 beta width -40.5 + 0.195·λmax is exactly
        // zero; sampling precisely at the beta peak then evaluates 0/0.
        let lambda_max = 40.5 / 0.195;
        let beta_peak = 189.0 + 0.315 * lambda_max;

        let result = govardovskii_template(&[beta_peak, 400.0, 500.0], lambda_max, 100.0);
        assert!(matches!(
            result,
            Err(TemplateError::DegenerateNormalization(_))
        ));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let grid = visible_grid();
        let first = govardovskii_template(&grid, 500.0, 50.0).unwrap();
        let second = govardovskii_template(&grid, 500.0, 50.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_wavelengths_rejected() {
        let result = govardovskii_template(&[], 500.0, 100.0);
        assert_eq!(result, Err(TemplateError::EmptyWavelengths));
    }

    #[test]
    fn invalid_scalar_inputs_rejected() {
        let grid = [400.0, 500.0];

        assert_eq!(
            govardovskii_template(&grid, -500.0, 100.0),
            Err(TemplateError::InvalidLambdaMax(-500.0))
        );
        assert_eq!(
            govardovskii_template(&grid, 500.0, 120.0),
            Err(TemplateError::InvalidA1Proportion(120.0))
        );
        assert_eq!(
            govardovskii_template(&grid, 500.0, -1.0),
            Err(TemplateError::InvalidA1Proportion(-1.0))
        );
        assert!(matches!(
            govardovskii_template(&grid, f64::NAN, 100.0),
            Err(TemplateError::InvalidLambdaMax(_))
        ));
    }

    #[test]
    fn non_finite_wavelength_rejected() {
        assert!(matches!(
            govardovskii_template(&[400.0, f64::NAN], 500.0, 100.0),
            Err(TemplateError::InvalidWavelength(_))
        ));
        assert_eq!(
            govardovskii_template(&[400.0, 0.0], 500.0, 100.0),
            Err(TemplateError::InvalidWavelength(0.0))
        );
    }
}
