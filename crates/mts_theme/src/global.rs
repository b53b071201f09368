//! Thread-local access to the active theme
//!
//! Hosts that cannot thread a [`ThemeHandle`] through their presentation code
//! install one per UI thread at startup:
//!
//! ```rust
//! use mts_theme::{global, ThemePreference, ThemeRuntime};
//!
//! let runtime = ThemeRuntime::builder().build();
//! global::install(runtime.handle());
//!
//! global::current().set_preference(ThemePreference::Dark);
//! assert_eq!(runtime.preference(), ThemePreference::Dark);
//! ```

use std::cell::RefCell;

use crate::ThemeHandle;

thread_local! {
    static CURRENT: RefCell<Option<ThemeHandle>> = const { RefCell::new(None) };
}

/// Install `handle` for the current thread, returning the one it replaces
pub fn install(handle: ThemeHandle) -> Option<ThemeHandle> {
    tracing::debug!("global::install - {:?}", handle);
    CURRENT.with(|current| current.borrow_mut().replace(handle))
}

/// Remove the installed handle
pub fn uninstall() -> Option<ThemeHandle> {
    CURRENT.with(|current| current.borrow_mut().take())
}

/// The installed handle, if any and if its runtime is still alive
pub fn try_current() -> Option<ThemeHandle> {
    CURRENT.with(|current| current.borrow().as_ref().filter(|h| h.is_alive()).cloned())
}

/// The installed handle
///
/// # Panics
///
/// Panics when no handle is installed on this thread or its runtime was
/// dropped. Reading the theme outside a configured application is a
/// programming error.
pub fn current() -> ThemeHandle {
    match try_current() {
        Some(handle) => handle,
        None => panic!(
            "no ThemeHandle installed on this thread. Call mts_theme::global::install() at app startup."
        ),
    }
}
