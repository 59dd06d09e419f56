//! Host platform event sources.
//!
//! The controls never talk to a browser or OS directly. They subscribe to
//! an [`OrientationPlatform`], which hands back a [`SubscriptionHandle`]
//! per registered handler and delivers [`PlatformEvent`]s to it.

/// Deterministic in-process dispatcher for headless use and tests.
pub mod manual;
/// Browser `window` event source.
#[cfg(feature = "web")]
pub mod web;

pub use manual::ManualPlatform;
#[cfg(feature = "web")]
pub use web::WebPlatform;

use crate::controls::DeviceOrientationReading;

/// Kinds of platform notification the controls listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Device attitude changed (`deviceorientation`).
    DeviceOrientation,
    /// Screen rotated between portrait and landscape (`orientationchange`).
    ScreenOrientation,
}

/// A notification delivered to subscribed handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformEvent {
    /// New sensor reading.
    DeviceOrientation(DeviceOrientationReading),
    /// Screen rotation changed; carries the new angle in degrees, if the
    /// platform reports one.
    ScreenOrientation {
        /// Screen angle in degrees.
        angle: Option<f64>,
    },
}

impl PlatformEvent {
    /// The kind a handler must be subscribed to in order to receive this
    /// event.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::DeviceOrientation(_) => EventKind::DeviceOrientation,
            Self::ScreenOrientation { .. } => EventKind::ScreenOrientation,
        }
    }
}

/// Callback invoked for each delivered event.
pub type EventHandler = Box<dyn FnMut(&PlatformEvent)>;

/// Opaque token identifying one registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub(crate) u64);

/// Source of orientation events.
pub trait OrientationPlatform {
    /// Register `handler` for events of `kind`.
    fn subscribe(
        &mut self,
        kind: EventKind,
        handler: EventHandler,
    ) -> SubscriptionHandle;

    /// Remove a handler. Unknown or already removed handles are ignored.
    fn unsubscribe(&mut self, handle: SubscriptionHandle);

    /// Current screen angle in degrees, if the platform knows it.
    fn screen_orientation(&self) -> Option<f64>;
}

impl<P: OrientationPlatform + ?Sized> OrientationPlatform for &mut P {
    fn subscribe(
        &mut self,
        kind: EventKind,
        handler: EventHandler,
    ) -> SubscriptionHandle {
        (**self).subscribe(kind, handler)
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        (**self).unsubscribe(handle);
    }

    fn screen_orientation(&self) -> Option<f64> {
        (**self).screen_orientation()
    }
}
