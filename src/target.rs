//! Objects the orientation controls can rotate.

use glam::{EulerRot, Quat};

/// A scene object with a writable orientation.
///
/// The controls set the rotation order once, at construction, and after
/// that only write the quaternion.
pub trait Rotatable {
    /// Change the Euler order used when the orientation is read back as
    /// angles.
    fn set_rotation_order(&mut self, order: EulerRot);

    /// Replace the object's orientation.
    fn set_quaternion(&mut self, quaternion: Quat);
}

impl<R: Rotatable + ?Sized> Rotatable for &mut R {
    fn set_rotation_order(&mut self, order: EulerRot) {
        (**self).set_rotation_order(order);
    }

    fn set_quaternion(&mut self, quaternion: Quat) {
        (**self).set_quaternion(quaternion);
    }
}

/// Minimal scene object: an orientation plus its Euler order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Object3D {
    /// Current orientation.
    pub quaternion: Quat,
    /// Euler order for [`Object3D::euler`].
    pub rotation_order: EulerRot,
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
            rotation_order: EulerRot::XYZ,
        }
    }
}

impl Object3D {
    /// Orientation as Euler angles (radians) in the object's rotation order.
    #[must_use]
    pub fn euler(&self) -> (f32, f32, f32) {
        self.quaternion.to_euler(self.rotation_order)
    }
}

impl Rotatable for Object3D {
    fn set_rotation_order(&mut self, order: EulerRot) {
        self.rotation_order = order;
    }

    fn set_quaternion(&mut self, quaternion: Quat) {
        self.quaternion = quaternion;
    }
}
