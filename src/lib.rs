//! Visual pigment absorbance templates (Govardovskii et al. 2000) and the
//! color helpers used by the viewer.
//!
//! The library layer is pure: evaluating a template has no side effects and
//! no shared state, so it can be called from any thread.

pub mod color;
pub mod template;
