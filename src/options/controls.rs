use serde::{Deserialize, Serialize};

/// Which reading decides whether the device angles are used at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleGating {
    /// Alpha, beta and gamma are all zeroed unless gamma is present and
    /// non-zero. Matches the long-standing behavior of web controls built
    /// on this transform.
    #[default]
    GammaGated,
    /// Each angle is zeroed only when its own field is absent or zero.
    PerAngle,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Tuning for how device readings become an object orientation.
pub struct ControlsOptions {
    /// Angle gating policy.
    pub gating: AngleGating,
    /// Degrees added to alpha when alpha is in use; re-zeroes the heading.
    pub alpha_offset: f64,
    /// Compensate for the current screen rotation.
    pub screen_compensation: bool,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            gating: AngleGating::GammaGated,
            alpha_offset: 0.0,
            screen_compensation: true,
        }
    }
}
