use std::collections::HashMap;

use wasm_bindgen::prelude::*;

use super::{
    EventHandler, EventKind, OrientationPlatform, PlatformEvent,
    SubscriptionHandle,
};
use crate::controls::DeviceOrientationReading;
use crate::error::DevorientError;

/// Route `log` output to the browser console and install the panic hook.
/// Call once at startup.
///
/// # Errors
///
/// Fails if a logger is already installed.
pub fn init_logging(level: log::Level) -> Result<(), DevorientError> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(level)
        .map_err(|e| DevorientError::Platform(e.to_string()))
}

struct Listener {
    event_name: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

/// Event source backed by the browser `window`.
///
/// Listens to `deviceorientation` and `orientationchange`; the screen
/// angle comes from `window.orientation`.
pub struct WebPlatform {
    window: web_sys::Window,
    next_id: u64,
    listeners: HashMap<SubscriptionHandle, Listener>,
}

impl WebPlatform {
    /// Bind to the global `window`.
    ///
    /// # Errors
    ///
    /// Fails outside a browser main thread, where there is no `window`.
    pub fn new() -> Result<Self, DevorientError> {
        let window = web_sys::window().ok_or_else(|| {
            DevorientError::Platform("no global window".into())
        })?;
        Ok(Self {
            window,
            next_id: 0,
            listeners: HashMap::new(),
        })
    }

    fn event_name(kind: EventKind) -> &'static str {
        match kind {
            EventKind::DeviceOrientation => "deviceorientation",
            EventKind::ScreenOrientation => "orientationchange",
        }
    }
}

fn screen_angle(window: &web_sys::Window) -> Option<f64> {
    Some(f64::from(window.orientation()))
}

fn translate(
    kind: EventKind,
    window: &web_sys::Window,
    event: &web_sys::Event,
) -> Option<PlatformEvent> {
    match kind {
        EventKind::DeviceOrientation => {
            let event = event.dyn_ref::<web_sys::DeviceOrientationEvent>()?;
            Some(PlatformEvent::DeviceOrientation(DeviceOrientationReading {
                alpha: event.alpha(),
                beta: event.beta(),
                gamma: event.gamma(),
            }))
        }
        EventKind::ScreenOrientation => Some(PlatformEvent::ScreenOrientation {
            angle: screen_angle(window),
        }),
    }
}

impl OrientationPlatform for WebPlatform {
    fn subscribe(
        &mut self,
        kind: EventKind,
        mut handler: EventHandler,
    ) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_id);
        self.next_id += 1;

        let window = self.window.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(
            move |evt: web_sys::Event| {
                if let Some(event) = translate(kind, &window, &evt) {
                    handler(&event);
                }
            },
        );
        let event_name = Self::event_name(kind);
        if let Err(e) = self.window.add_event_listener_with_callback(
            event_name,
            callback.as_ref().unchecked_ref(),
        ) {
            log::error!("Failed to add {event_name} listener: {e:?}");
        }
        let _ = self.listeners.insert(
            handle,
            Listener {
                event_name,
                callback,
            },
        );
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        let Some(listener) = self.listeners.remove(&handle) else {
            return;
        };
        if let Err(e) = self.window.remove_event_listener_with_callback(
            listener.event_name,
            listener.callback.as_ref().unchecked_ref(),
        ) {
            log::warn!(
                "Failed to remove {} listener: {e:?}",
                listener.event_name
            );
        }
    }

    fn screen_orientation(&self) -> Option<f64> {
        screen_angle(&self.window)
    }
}

impl Drop for WebPlatform {
    fn drop(&mut self) {
        let handles: Vec<_> = self.listeners.keys().copied().collect();
        for handle in handles {
            self.unsubscribe(handle);
        }
    }
}
