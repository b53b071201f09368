//! System dark-mode signal
//!
//! The runtime queries [`SystemSignal::is_dark_preferred`] when resolving the
//! `system` preference and subscribes for changes only while that preference
//! is active.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a signal listener
    struct ListenerId;
}

/// Callback invoked with the new "prefers dark" value
pub type SignalCallback = Box<dyn Fn(bool)>;

/// Source of the OS/browser dark-mode preference
pub trait SystemSignal {
    /// Current value of the signal
    fn is_dark_preferred(&self) -> bool;

    /// Register `callback` for change notifications until the returned
    /// subscription is dropped
    fn subscribe(&self, callback: SignalCallback) -> SignalSubscription;
}

/// Keeps a signal listener registered; dropping it unsubscribes synchronously
#[must_use = "dropping a SignalSubscription unsubscribes immediately"]
pub struct SignalSubscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl SignalSubscription {
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription with nothing to tear down
    pub fn detached() -> Self {
        Self { unsubscribe: None }
    }

    pub fn unsubscribe(mut self) {
        self.run();
    }

    fn run(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        self.run();
    }
}

impl fmt::Debug for SignalSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalSubscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[derive(Default)]
struct ListenerSet {
    dark: Cell<bool>,
    listeners: RefCell<SlotMap<ListenerId, Rc<dyn Fn(bool)>>>,
}

impl ListenerSet {
    fn notify(&self) {
        let dark = self.dark.get();
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<_> = self.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(dark);
        }
    }

    fn subscribe(self: &Rc<Self>, callback: SignalCallback) -> SignalSubscription {
        let id = self.listeners.borrow_mut().insert(Rc::from(callback));
        let weak: Weak<Self> = Rc::downgrade(self);
        SignalSubscription::new(move || {
            if let Some(set) = weak.upgrade() {
                set.listeners.borrow_mut().remove(id);
            }
        })
    }
}

/// Host-driven signal
///
/// The host reports changes with [`ManualSignal::set_dark_preferred`] (for
/// example from a platform appearance-changed event). Clones share state.
#[derive(Clone, Default)]
pub struct ManualSignal {
    inner: Rc<ListenerSet>,
}

impl ManualSignal {
    pub fn new(dark_preferred: bool) -> Self {
        let signal = Self::default();
        signal.inner.dark.set(dark_preferred);
        signal
    }

    /// Update the value; listeners are notified only when it changes.
    /// Returns whether it changed.
    pub fn set_dark_preferred(&self, dark: bool) -> bool {
        if self.inner.dark.replace(dark) == dark {
            return false;
        }
        tracing::trace!("ManualSignal: dark preferred -> {}", dark);
        self.inner.notify();
        true
    }

    /// Notify listeners with the current value, changed or not
    pub fn notify(&self) {
        self.inner.notify();
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl SystemSignal for ManualSignal {
    fn is_dark_preferred(&self) -> bool {
        self.inner.dark.get()
    }

    fn subscribe(&self, callback: SignalCallback) -> SignalSubscription {
        self.inner.subscribe(callback)
    }
}

impl fmt::Debug for ManualSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualSignal")
            .field("dark", &self.inner.dark.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Signal backed by a probe function, for hosts without change events
///
/// [`PollingSignal::poll`] re-runs the probe (typically from the host's event
/// loop or a timer) and notifies listeners when the answer changed. Queries
/// always run the probe, so resolution never sees a stale value.
#[derive(Clone)]
pub struct PollingSignal {
    probe: Rc<dyn Fn() -> bool>,
    last: ManualSignal,
}

impl PollingSignal {
    pub fn new(probe: impl Fn() -> bool + 'static) -> Self {
        let initial = probe();
        Self {
            probe: Rc::new(probe),
            last: ManualSignal::new(initial),
        }
    }

    /// Re-run the probe; returns whether the value changed
    pub fn poll(&self) -> bool {
        self.last.set_dark_preferred((self.probe)())
    }

    pub fn listener_count(&self) -> usize {
        self.last.listener_count()
    }
}

impl SystemSignal for PollingSignal {
    fn is_dark_preferred(&self) -> bool {
        (self.probe)()
    }

    fn subscribe(&self, callback: SignalCallback) -> SignalSubscription {
        self.last.subscribe(callback)
    }
}

impl fmt::Debug for PollingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollingSignal")
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// Signal that never changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedSignal {
    dark: bool,
}

impl FixedSignal {
    pub const LIGHT: FixedSignal = FixedSignal { dark: false };
    pub const DARK: FixedSignal = FixedSignal { dark: true };

    pub fn new(dark: bool) -> Self {
        Self { dark }
    }
}

impl SystemSignal for FixedSignal {
    fn is_dark_preferred(&self) -> bool {
        self.dark
    }

    fn subscribe(&self, _callback: SignalCallback) -> SignalSubscription {
        SignalSubscription::detached()
    }
}
