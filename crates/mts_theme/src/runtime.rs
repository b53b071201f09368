//! Theme preference runtime
//!
//! Owns the current `(preference, resolved theme)` pair. Every resolution is
//! applied to the presentation sink and then delivered to observers.
//!
//! The runtime is single-threaded: state lives behind `Rc<RefCell<..>>`, and
//! no borrow is held while the sink, observers or the system signal run, so
//! any of them may read the runtime or change the preference. Changes made
//! from inside a notification are queued and delivered, in order, after the
//! current one completes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use mts_tokens::{ResolvedTheme, Theme, ThemeBundle};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::signal::{FixedSignal, SignalSubscription, SystemSignal};
use crate::sink::{NoopSink, PresentationSink};
use crate::store::{MemoryStore, PreferenceStore};
use crate::{ThemeConfig, ThemePreference};

new_key_type! {
    /// Identifier of a runtime observer
    struct ObserverId;
}

type Observer = Rc<dyn Fn(&ThemeChange)>;
type Shared = Rc<RefCell<RuntimeInner>>;

/// Snapshot delivered to observers after every resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ThemeChange {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

struct RuntimeInner {
    config: ThemeConfig,
    bundle: ThemeBundle,

    preference: ThemePreference,
    resolved: ResolvedTheme,

    store: Rc<RefCell<dyn PreferenceStore>>,
    signal: Rc<dyn SystemSignal>,
    sink: Rc<RefCell<dyn PresentationSink>>,

    /// Present exactly while `preference` is `System`
    system_subscription: Option<SignalSubscription>,

    observers: SlotMap<ObserverId, Observer>,

    /// Changes waiting to be delivered
    outbox: VecDeque<ThemeChange>,
    publishing: bool,
}

impl RuntimeInner {
    fn snapshot(&self) -> ThemeChange {
        ThemeChange {
            preference: self.preference,
            resolved: self.resolved,
        }
    }

}

impl Drop for RuntimeInner {
    fn drop(&mut self) {
        trace!(
            "ThemeRuntime disposed (following system: {})",
            self.system_subscription.is_some()
        );
    }
}

/// The default is never stored, so a fresh start falls back to it
fn persist(
    store: &RefCell<dyn PreferenceStore>,
    config: &ThemeConfig,
    preference: ThemePreference,
) {
    let Ok(mut store) = store.try_borrow_mut() else {
        warn!("ThemeRuntime: preference store busy, {} not persisted", preference);
        return;
    };

    let key = config.storage_key.as_str();
    let result = if preference == config.default_preference {
        trace!("ThemeRuntime: removing {} (matches default)", key);
        store.remove(key)
    } else {
        trace!("ThemeRuntime: storing {} = {}", key, preference);
        store.set(key, preference.as_str())
    };

    if let Err(e) = result {
        warn!("ThemeRuntime: failed to persist theme preference: {}", e);
    }
}

/// Read the stored preference; anything but an exact preference string is
/// treated as "nothing stored"
fn load_preference(store: &dyn PreferenceStore, config: &ThemeConfig) -> ThemePreference {
    match store.get(&config.storage_key) {
        Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
            warn!(
                "ThemeRuntime: ignoring invalid stored preference {:?} under {}",
                raw, config.storage_key
            );
            config.default_preference
        }),
        Ok(None) => config.default_preference,
        Err(e) => {
            warn!("ThemeRuntime: failed to read theme preference: {}", e);
            config.default_preference
        }
    }
}

fn subscribe_system(shared: &Shared) -> SignalSubscription {
    let signal = Rc::clone(&shared.borrow().signal);
    let weak: Weak<RefCell<RuntimeInner>> = Rc::downgrade(shared);
    signal.subscribe(Box::new(move |dark| match weak.upgrade() {
        Some(shared) => on_system_change(&shared, dark),
        None => trace!("ThemeRuntime: system change after dispose ignored"),
    }))
}

fn on_system_change(shared: &Shared, dark: bool) {
    let change = {
        let mut inner = shared.borrow_mut();
        if !inner.preference.is_system() {
            trace!("ThemeRuntime: system change ignored, preference is {}", inner.preference);
            return;
        }
        inner.resolved = ResolvedTheme::from_dark(dark);
        debug!("ThemeRuntime: system preference changed, resolved {}", inner.resolved);
        inner.snapshot()
    };
    publish(shared, change);
}

fn set_preference(shared: &Shared, preference: ThemePreference) {
    // The store and signal are host code and may read the runtime, so they
    // run with no borrow held.
    let (stale, store, signal, config) = {
        let mut inner = shared.borrow_mut();
        let previous = std::mem::replace(&mut inner.preference, preference);
        debug!(
            "ThemeRuntime::set_preference - switching from {} to {}",
            previous, preference
        );

        let stale = if previous.is_system() {
            inner.system_subscription.take()
        } else {
            None
        };
        (
            stale,
            Rc::clone(&inner.store),
            Rc::clone(&inner.signal),
            inner.config.clone(),
        )
    };

    // Unsubscribe before a fresh subscription can exist.
    drop(stale);

    persist(&store, &config, preference);
    let resolved = preference.resolve(|| signal.is_dark_preferred());

    let change = {
        let mut inner = shared.borrow_mut();
        if inner.preference != preference {
            trace!(
                "ThemeRuntime: switch to {} superseded by {}",
                preference, inner.preference
            );
            return;
        }
        inner.resolved = resolved;
        inner.snapshot()
    };

    if preference.is_system() {
        let subscription = subscribe_system(shared);
        let replaced = shared
            .borrow_mut()
            .system_subscription
            .replace(subscription);
        drop(replaced);
    }

    publish(shared, change);
}

/// Clears the delivery flag even when a sink or observer panics
struct PublishGuard<'a> {
    shared: &'a Shared,
}

impl Drop for PublishGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.shared.try_borrow_mut() {
            inner.publishing = false;
            if std::thread::panicking() {
                inner.outbox.clear();
            }
        }
    }
}

/// Queue `change`, and deliver the queue unless a delivery is already running
fn publish(shared: &Shared, change: ThemeChange) {
    {
        let mut inner = shared.borrow_mut();
        inner.outbox.push_back(change);
        if inner.publishing {
            return;
        }
        inner.publishing = true;
    }
    let _guard = PublishGuard { shared };

    loop {
        let (change, sink, observers) = {
            let mut inner = shared.borrow_mut();
            let Some(change) = inner.outbox.pop_front() else {
                return;
            };
            let observers: Vec<Observer> = inner.observers.values().cloned().collect();
            (change, Rc::clone(&inner.sink), observers)
        };

        trace!("ThemeRuntime: applying {}", change.resolved);
        sink.borrow_mut().apply_resolved_theme(change.resolved);

        for observer in observers {
            observer(&change);
        }
    }
}

/// Builder for [`ThemeRuntime`]
///
/// Unset collaborators default to an in-memory store, a signal that always
/// reports light, a sink that does nothing and the built-in theme bundle.
pub struct ThemeRuntimeBuilder {
    config: ThemeConfig,
    bundle: Option<ThemeBundle>,
    store: Rc<RefCell<dyn PreferenceStore>>,
    signal: Rc<dyn SystemSignal>,
    sink: Rc<RefCell<dyn PresentationSink>>,
}

impl ThemeRuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: ThemeConfig::default(),
            bundle: None,
            store: Rc::new(RefCell::new(MemoryStore::new())),
            signal: Rc::new(FixedSignal::LIGHT),
            sink: Rc::new(RefCell::new(NoopSink)),
        }
    }

    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.config.storage_key = key.into();
        self
    }

    pub fn default_preference(mut self, preference: ThemePreference) -> Self {
        self.config.default_preference = preference;
        self
    }

    pub fn bundle(mut self, bundle: ThemeBundle) -> Self {
        self.bundle = Some(bundle);
        self
    }

    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Rc::new(RefCell::new(store));
        self
    }

    pub fn signal(mut self, signal: impl SystemSignal + 'static) -> Self {
        self.signal = Rc::new(signal);
        self
    }

    pub fn sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.sink = Rc::new(RefCell::new(sink));
        self
    }

    /// Load the stored preference, resolve it and apply it to the sink
    pub fn build(self) -> ThemeRuntime {
        let preference = load_preference(&*self.store.borrow(), &self.config);
        let resolved = preference.resolve(|| self.signal.is_dark_preferred());
        debug!(
            "ThemeRuntime::init - key={} preference={} resolved={}",
            self.config.storage_key, preference, resolved
        );

        let shared: Shared = Rc::new(RefCell::new(RuntimeInner {
            config: self.config,
            bundle: self.bundle.unwrap_or_default(),
            preference,
            resolved,
            store: self.store,
            signal: self.signal,
            sink: self.sink,
            system_subscription: None,
            observers: SlotMap::with_key(),
            outbox: VecDeque::new(),
            publishing: false,
        }));

        if preference.is_system() {
            let subscription = subscribe_system(&shared);
            shared.borrow_mut().system_subscription = Some(subscription);
        }

        let change = shared.borrow().snapshot();
        publish(&shared, change);

        let handle = ThemeHandle {
            inner: Rc::downgrade(&shared),
        };
        ThemeRuntime { shared, handle }
    }
}

impl Default for ThemeRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the theme state
///
/// Dropping the runtime unsubscribes from the system signal and invalidates
/// every [`ThemeHandle`] obtained from it.
pub struct ThemeRuntime {
    shared: Shared,
    handle: ThemeHandle,
}

impl ThemeRuntime {
    /// Construct and initialize a runtime
    pub fn new(
        config: ThemeConfig,
        store: impl PreferenceStore + 'static,
        signal: impl SystemSignal + 'static,
        sink: impl PresentationSink + 'static,
    ) -> Self {
        Self::builder()
            .config(config)
            .store(store)
            .signal(signal)
            .sink(sink)
            .build()
    }

    pub fn builder() -> ThemeRuntimeBuilder {
        ThemeRuntimeBuilder::new()
    }

    /// A handle for presentation code
    pub fn handle(&self) -> ThemeHandle {
        self.handle.clone()
    }

    pub fn preference(&self) -> ThemePreference {
        self.shared.borrow().preference
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.shared.borrow().resolved
    }

    pub fn snapshot(&self) -> ThemeChange {
        self.shared.borrow().snapshot()
    }

    pub fn config(&self) -> ThemeConfig {
        self.shared.borrow().config.clone()
    }

    pub fn set_preference(&self, preference: ThemePreference) {
        set_preference(&self.shared, preference);
    }

    pub fn toggle(&self) {
        self.handle.toggle();
    }

    pub fn theme(&self) -> Arc<Theme> {
        self.handle.theme()
    }

    pub fn subscribe(&self, observer: impl Fn(&ThemeChange) + 'static) -> Subscription {
        self.handle.subscribe(observer)
    }

    /// Whether a system-signal subscription is currently held
    pub fn is_following_system(&self) -> bool {
        self.shared.borrow().system_subscription.is_some()
    }

    /// Tear down now: unsubscribe from the system signal and drop observers
    pub fn dispose(self) {
        let (subscription, observers) = {
            let mut inner = self.shared.borrow_mut();
            debug!("ThemeRuntime::dispose - preference={}", inner.preference);
            (
                inner.system_subscription.take(),
                std::mem::take(&mut inner.observers),
            )
        };
        drop(subscription);
        drop(observers);
    }
}

impl fmt::Debug for ThemeRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.borrow();
        f.debug_struct("ThemeRuntime")
            .field("config", &inner.config)
            .field("preference", &inner.preference)
            .field("resolved", &inner.resolved)
            .field("following_system", &inner.system_subscription.is_some())
            .field("observers", &inner.observers.len())
            .finish()
    }
}

/// Cloneable read/write access to a [`ThemeRuntime`]
///
/// Handles do not keep the runtime alive. Using a handle after its runtime
/// was dropped is a programming error and panics.
#[derive(Clone)]
pub struct ThemeHandle {
    inner: Weak<RefCell<RuntimeInner>>,
}

impl ThemeHandle {
    fn shared(&self) -> Shared {
        match self.inner.upgrade() {
            Some(shared) => shared,
            None => panic!("ThemeHandle used after its ThemeRuntime was dropped"),
        }
    }

    /// Whether the runtime behind this handle still exists
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    pub fn preference(&self) -> ThemePreference {
        self.shared().borrow().preference
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.shared().borrow().resolved
    }

    pub fn snapshot(&self) -> ThemeChange {
        self.shared().borrow().snapshot()
    }

    pub fn config(&self) -> ThemeConfig {
        self.shared().borrow().config.clone()
    }

    /// Persist `preference`, re-resolve and notify
    pub fn set_preference(&self, preference: ThemePreference) {
        set_preference(&self.shared(), preference);
    }

    /// Switch to the explicit opposite of the current resolved theme
    pub fn toggle(&self) {
        let next = self.resolved_theme().toggle();
        self.set_preference(next.into());
    }

    /// Token tree for the current resolved theme
    pub fn theme(&self) -> Arc<Theme> {
        let shared = self.shared();
        let inner = shared.borrow();
        inner.bundle.shared(inner.resolved)
    }

    /// Call `observer` after every resolution until the subscription is dropped
    pub fn subscribe(&self, observer: impl Fn(&ThemeChange) + 'static) -> Subscription {
        let shared = self.shared();
        let id = shared.borrow_mut().observers.insert(Rc::new(observer));
        Subscription {
            inner: self.inner.clone(),
            id,
        }
    }
}

impl fmt::Debug for ThemeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.upgrade() {
            Some(shared) => {
                let inner = shared.borrow();
                f.debug_struct("ThemeHandle")
                    .field("preference", &inner.preference)
                    .field("resolved", &inner.resolved)
                    .finish()
            }
            None => f.write_str("ThemeHandle(<disposed>)"),
        }
    }
}

/// Observer registration; dropping it unsubscribes
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    inner: Weak<RefCell<RuntimeInner>>,
    id: ObserverId,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.inner.upgrade() {
            if let Ok(mut inner) = shared.try_borrow_mut() {
                inner.observers.remove(self.id);
            }
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &(self.inner.strong_count() > 0))
            .finish()
    }
}
