use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::template::PigmentSpec;

// ---------------------------------------------------------------------------
// Curve colors: pigment spec → Color32
// ---------------------------------------------------------------------------

/// Hue anchors: 380 nm renders violet, 700 nm renders red.
const HUE_MIN_NM: f64 = 380.0;
const HUE_MAX_NM: f64 = 700.0;

/// Pick a plot color for a pigment.
///
/// The hue follows λmax across the visible spectrum (clamped outside
/// 380–700 nm) so short-wave pigments draw blue-ish and long-wave pigments
/// red-ish.  The lightness follows the A1 proportion, so curves sharing a
/// λmax but differing in chromophore mix stay distinguishable.
pub fn curve_color(spec: &PigmentSpec) -> Color32 {
    let t = ((spec.lambda_max - HUE_MIN_NM) / (HUE_MAX_NM - HUE_MIN_NM)).clamp(0.0, 1.0);
    // 270° (violet) down to 0° (red).
    let hue = (270.0 * (1.0 - t)) as f32;

    let lightness = 0.35 + 0.25 * (spec.a1_percent / 100.0) as f32;
    let hsl = Hsl::new(hue, 0.75, lightness);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
