//! Device-orientation angles to quaternion.
//!
//! The W3C device-orientation event reports alpha, beta and gamma as a set
//! of intrinsic Tait-Bryan angles of type Z-X'-Y''. Scene objects use the
//! Y-X-Z convention with the camera looking out the back of the device, so
//! the angles are re-expressed and two corrections are applied on the
//! right: a fixed -90 degree turn about X, then the inverse of the current
//! screen rotation about Z.

use glam::{EulerRot, Quat, Vec3};

/// Rotation order the target object must use for the composed quaternion
/// to read back as sensible Euler angles.
pub const ROTATION_ORDER: EulerRot = EulerRot::YXZ;

/// Device angles and screen rotation, all in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeviceAngles {
    /// Rotation around Z (compass heading).
    pub alpha: f32,
    /// Rotation around X' (front-back tilt).
    pub beta: f32,
    /// Rotation around Y'' (left-right tilt).
    pub gamma: f32,
    /// Screen rotation relative to the device's natural orientation.
    pub orient: f32,
}

/// Composes device angles into an object quaternion.
///
/// Holds the constant sensor-to-camera correction so it is built once per
/// controller rather than per frame.
#[derive(Debug, Clone, Copy)]
pub struct QuaternionSetter {
    /// -PI/2 around the x-axis.
    back_facing: Quat,
}

impl Default for QuaternionSetter {
    fn default() -> Self {
        Self::new()
    }
}

impl QuaternionSetter {
    /// Create a setter with the camera-out-the-back correction.
    #[must_use]
    pub fn new() -> Self {
        let half = 0.5_f32.sqrt();
        Self {
            back_facing: Quat::from_xyzw(-half, 0.0, 0.0, half),
        }
    }

    /// Compute the object orientation for the given angles.
    #[must_use]
    pub fn compose(&self, angles: DeviceAngles) -> Quat {
        // 'ZXY' for the device, 'YXZ' for us
        let device = Quat::from_rotation_y(angles.alpha)
            * Quat::from_rotation_x(angles.beta)
            * Quat::from_rotation_z(-angles.gamma);
        let screen = Quat::from_axis_angle(Vec3::Z, -angles.orient);
        device * self.back_facing * screen
    }
}
