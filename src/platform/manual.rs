use std::cell::RefCell;
use std::rc::Rc;

use super::{
    EventHandler, EventKind, OrientationPlatform, PlatformEvent,
    SubscriptionHandle,
};

struct Subscriber {
    handle: SubscriptionHandle,
    kind: EventKind,
    handler: EventHandler,
}

#[derive(Default)]
struct Inner {
    next_id: u64,
    screen_angle: Option<f64>,
    subscribers: Vec<Subscriber>,
    /// Nesting level of `fire` calls currently running handlers.
    dispatch_depth: usize,
    /// Handles unsubscribed while their subscriber was taken out for
    /// dispatch.
    pending_removals: Vec<SubscriptionHandle>,
}

/// Single-threaded event dispatcher driven by explicit [`fire`] calls.
///
/// Cloning yields another handle to the same dispatcher, so a caller can
/// keep one clone for firing events while the controls own another.
///
/// [`fire`]: ManualPlatform::fire
#[derive(Clone, Default)]
pub struct ManualPlatform {
    inner: Rc<RefCell<Inner>>,
}

impl ManualPlatform {
    /// Create a dispatcher with no subscribers and no screen angle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value returned by synchronous screen-orientation reads.
    ///
    /// Does not notify subscribers; use [`ManualPlatform::rotate_screen`]
    /// for that.
    pub fn set_screen_orientation(&self, angle: Option<f64>) {
        self.inner.borrow_mut().screen_angle = angle;
    }

    /// Set the screen angle and notify screen-orientation subscribers.
    pub fn rotate_screen(&self, angle: Option<f64>) -> usize {
        self.set_screen_orientation(angle);
        self.fire(&PlatformEvent::ScreenOrientation { angle })
    }

    /// Deliver `event` to every subscriber of its kind, in subscription
    /// order. Returns the number of handlers invoked.
    ///
    /// Handlers may subscribe and unsubscribe while running. A handler
    /// removed mid-dispatch is not invoked for the rest of that dispatch.
    pub fn fire(&self, event: &PlatformEvent) -> usize {
        let kind = event.kind();
        // Handlers run without the dispatcher borrowed so they may call
        // back into it.
        let mut taken = {
            let mut inner = self.inner.borrow_mut();
            inner.dispatch_depth += 1;
            std::mem::take(&mut inner.subscribers)
        };
        let mut delivered = 0;
        for sub in taken.iter_mut().filter(|s| s.kind == kind) {
            if self.inner.borrow().pending_removals.contains(&sub.handle) {
                continue;
            }
            (sub.handler)(event);
            delivered += 1;
        }
        let mut inner = self.inner.borrow_mut();
        inner.dispatch_depth -= 1;
        taken.retain(|s| !inner.pending_removals.contains(&s.handle));
        taken.append(&mut inner.subscribers);
        inner.subscribers = taken;
        if inner.dispatch_depth == 0 {
            inner.pending_removals.clear();
        }
        log::trace!("delivered {kind:?} to {delivered} handler(s)");
        delivered
    }

    /// Number of live subscriptions for `kind`.
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    }
}

impl OrientationPlatform for ManualPlatform {
    fn subscribe(
        &mut self,
        kind: EventKind,
        handler: EventHandler,
    ) -> SubscriptionHandle {
        let mut inner = self.inner.borrow_mut();
        let handle = SubscriptionHandle(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push(Subscriber {
            handle,
            kind,
            handler,
        });
        handle
    }

    fn unsubscribe(&mut self, handle: SubscriptionHandle) {
        let mut inner = self.inner.borrow_mut();
        inner.subscribers.retain(|s| s.handle != handle);
        if inner.dispatch_depth > 0 {
            inner.pending_removals.push(handle);
        }
    }

    fn screen_orientation(&self) -> Option<f64> {
        self.inner.borrow().screen_angle
    }
}
