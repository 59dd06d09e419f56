//! Device-orientation controls.
//!
//! [`OrientationControls`] listens to a platform's device-orientation and
//! screen-orientation events, keeps the latest reading of each, and on every
//! [`update`](OrientationControls::update) writes the resulting quaternion
//! into its target object.
//!
//! # Usage
//!
//! ```
//! use devorient::controls::{DeviceOrientationReading, OrientationControls};
//! use devorient::platform::{ManualPlatform, PlatformEvent};
//! use devorient::target::Object3D;
//!
//! let platform = ManualPlatform::new();
//! let mut camera = Object3D::default();
//! let mut controls = OrientationControls::new(&mut camera, platform.clone());
//! controls.connect();
//!
//! let _ = platform.fire(&PlatformEvent::DeviceOrientation(
//!     DeviceOrientationReading::new(90.0, 0.0, 45.0),
//! ));
//! controls.update();
//! ```

mod readings;

use std::cell::RefCell;
use std::rc::Rc;

pub use readings::{DeviceOrientationReading, ScreenOrientationReading};

use crate::options::ControlsOptions;
use crate::platform::{
    EventKind, OrientationPlatform, PlatformEvent, SubscriptionHandle,
};
use crate::rotation::{QuaternionSetter, ROTATION_ORDER};
use crate::target::Rotatable;

/// Readings written by event handlers and read by `update`.
#[derive(Debug, Default)]
struct SensorState {
    device: DeviceOrientationReading,
    screen: ScreenOrientationReading,
}

/// Drives a target's orientation from device-orientation events.
///
/// Starts frozen: `update` does nothing until `connect` is called.
/// Readings survive a `disconnect`/`connect` cycle, so after reconnecting
/// the last device reading received before the disconnect is used until a
/// new event arrives. Dropping the controls disconnects them.
pub struct OrientationControls<T: Rotatable, P: OrientationPlatform> {
    target: T,
    platform: P,
    options: ControlsOptions,
    state: Rc<RefCell<SensorState>>,
    subscriptions: Vec<SubscriptionHandle>,
    freeze: bool,
    setter: QuaternionSetter,
}

impl<T: Rotatable, P: OrientationPlatform> OrientationControls<T, P> {
    /// Wrap `target` with default options.
    pub fn new(target: T, platform: P) -> Self {
        Self::with_options(target, platform, ControlsOptions::default())
    }

    /// Wrap `target` with the given options. Sets the target's rotation
    /// order to Y-X-Z.
    pub fn with_options(
        mut target: T,
        platform: P,
        options: ControlsOptions,
    ) -> Self {
        target.set_rotation_order(ROTATION_ORDER);
        Self {
            target,
            platform,
            options,
            state: Rc::new(RefCell::new(SensorState::default())),
            subscriptions: Vec::new(),
            freeze: true,
            setter: QuaternionSetter::new(),
        }
    }

    /// Read the current screen orientation, start listening for events,
    /// and unfreeze.
    ///
    /// Calling this twice without a `disconnect` registers every listener
    /// twice.
    pub fn connect(&mut self) {
        if !self.subscriptions.is_empty() {
            log::debug!(
                "connect() while already connected ({} subscriptions held)",
                self.subscriptions.len()
            );
        }

        self.state.borrow_mut().screen = ScreenOrientationReading::from_platform(
            self.platform.screen_orientation(),
        );

        let state = Rc::clone(&self.state);
        let screen = self.platform.subscribe(
            EventKind::ScreenOrientation,
            Box::new(move |event| {
                if let PlatformEvent::ScreenOrientation { angle } = *event {
                    state.borrow_mut().screen =
                        ScreenOrientationReading::from_platform(angle);
                }
            }),
        );

        let state = Rc::clone(&self.state);
        let device = self.platform.subscribe(
            EventKind::DeviceOrientation,
            Box::new(move |event| {
                if let PlatformEvent::DeviceOrientation(reading) = *event {
                    state.borrow_mut().device = reading;
                }
            }),
        );

        self.subscriptions.extend([screen, device]);
        self.freeze = false;
        log::debug!("orientation controls connected");
    }

    /// Freeze and stop listening. Safe to call when not connected.
    pub fn disconnect(&mut self) {
        self.freeze = true;
        for handle in self.subscriptions.drain(..) {
            self.platform.unsubscribe(handle);
        }
        log::debug!("orientation controls disconnected");
    }

    /// Write the orientation for the latest readings into the target.
    ///
    /// No-op while frozen; the target is not touched.
    pub fn update(&mut self) {
        if self.freeze {
            return;
        }

        let angles = {
            let state = self.state.borrow();
            state.device.to_angles(state.screen, &self.options)
        };
        let quaternion = self.setter.compose(angles);
        log::trace!("{angles:?} -> {quaternion:?}");
        self.target.set_quaternion(quaternion);
    }

    /// Whether `update` currently writes to the target.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        !self.freeze
    }

    /// The rotated object.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The event source.
    #[must_use]
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &ControlsOptions {
        &self.options
    }

    /// Replace the options; takes effect on the next `update`.
    pub fn set_options(&mut self, options: ControlsOptions) {
        self.options = options;
    }

    /// Most recent device reading.
    #[must_use]
    pub fn device_reading(&self) -> DeviceOrientationReading {
        self.state.borrow().device
    }

    /// Most recent screen reading.
    #[must_use]
    pub fn screen_reading(&self) -> ScreenOrientationReading {
        self.state.borrow().screen
    }
}

impl<T: Rotatable, P: OrientationPlatform> Drop for OrientationControls<T, P> {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            self.disconnect();
        }
    }
}
