use serde::{Deserialize, Serialize};

use crate::options::{AngleGating, ControlsOptions};
use crate::rotation::DeviceAngles;

/// Last device-orientation event payload, in degrees.
///
/// Replaced wholesale on every event; fields are never merged across
/// events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceOrientationReading {
    /// Compass heading around Z, 0 to 360.
    pub alpha: Option<f64>,
    /// Front-back tilt around X, -180 to 180.
    pub beta: Option<f64>,
    /// Left-right tilt around Y, -90 to 90.
    pub gamma: Option<f64>,
}

/// Last known screen rotation, in degrees (0 when the platform reports
/// nothing).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenOrientationReading {
    /// Screen angle in degrees, typically one of 0, 90, -90 or 180.
    pub angle: f64,
}

impl ScreenOrientationReading {
    /// Reading from a possibly missing platform value.
    #[must_use]
    pub fn from_platform(angle: Option<f64>) -> Self {
        Self {
            angle: angle.unwrap_or(0.0),
        }
    }
}

/// Present, non-zero and not NaN.
fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn radians(degrees: f64) -> f32 {
    degrees.to_radians() as f32
}

impl DeviceOrientationReading {
    /// Reading with all three angles present.
    #[must_use]
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            alpha: Some(alpha),
            beta: Some(beta),
            gamma: Some(gamma),
        }
    }

    /// Convert to radians, zeroing unusable angles per the gating policy.
    #[must_use]
    pub fn to_angles(
        self,
        screen: ScreenOrientationReading,
        options: &ControlsOptions,
    ) -> DeviceAngles {
        let (alpha, beta, gamma) = match options.gating {
            AngleGating::GammaGated => {
                usable(self.gamma).map_or((None, None, None), |gamma| {
                    (usable(self.alpha), usable(self.beta), Some(gamma))
                })
            }
            AngleGating::PerAngle => (
                usable(self.alpha),
                usable(self.beta),
                usable(self.gamma),
            ),
        };

        let orient = if options.screen_compensation {
            usable(Some(screen.angle)).map_or(0.0, radians)
        } else {
            0.0
        };

        DeviceAngles {
            alpha: alpha.map_or(0.0, |a| radians(a + options.alpha_offset)),
            beta: beta.map_or(0.0, radians),
            gamma: gamma.map_or(0.0, radians),
            orient,
        }
    }
}
