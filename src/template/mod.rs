/// Template layer: core types and the Govardovskii evaluator.
///
/// Architecture:
/// ```text
///  WavelengthRange
///        │  samples()
///        ▼
///   ┌──────────────┐
///   │ govardovskii  │  blend A1/A2 bands, normalize → SensitivityCurve
///   └──────────────┘
///        ▲
///        │
///   PigmentSpec (λmax, A1 %)
/// ```

pub mod govardovskii;
pub mod model;

pub use govardovskii::{a1_template, a2_template, govardovskii_template, TemplateError};
pub use model::{PigmentSpec, SensitivityCurve, WavelengthRange};
