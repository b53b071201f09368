//! MTS Theme Runtime
//!
//! Resolves a user's theme preference (`system`, `light` or `dark`) to the
//! effective light/dark theme, persists explicit choices, and follows the
//! operating system's dark-mode setting while the preference is `system`.
//!
//! # Overview
//!
//! The runtime talks to three host-provided collaborators:
//!
//! - a [`PreferenceStore`] holding the persisted preference
//!   ([`MemoryStore`], [`FileStore`])
//! - a [`SystemSignal`] reporting whether dark mode is preferred and when
//!   that changes ([`ManualSignal`], [`PollingSignal`], [`FixedSignal`])
//! - a [`PresentationSink`] that applies the resolved theme to whatever does
//!   the styling ([`RootAttributes`], or any `FnMut(ResolvedTheme)`)
//!
//! # Quick Start
//!
//! ```rust
//! use mts_theme::{
//!     ManualSignal, MemoryStore, ResolvedTheme, RootAttributes, ThemeConfig, ThemePreference,
//!     ThemeRuntime,
//! };
//!
//! let store = MemoryStore::new();
//! let signal = ManualSignal::new(true);
//! let root = RootAttributes::new();
//!
//! let runtime = ThemeRuntime::new(ThemeConfig::default(), store.clone(), signal.clone(), root.clone());
//! assert_eq!(runtime.preference(), ThemePreference::System);
//! assert_eq!(runtime.resolved_theme(), ResolvedTheme::Dark);
//! assert_eq!(root.attribute("data-mts-theme").as_deref(), Some("dark"));
//!
//! runtime.set_preference(ThemePreference::Light);
//! assert_eq!(store.value("mts-theme").as_deref(), Some("light"));
//! assert_eq!(root.attribute("data-mts-theme"), None);
//!
//! // No longer following the system setting.
//! signal.set_dark_preferred(false);
//! signal.set_dark_preferred(true);
//! assert_eq!(runtime.resolved_theme(), ResolvedTheme::Light);
//! ```
//!
//! # Consumers
//!
//! Presentation code receives a [`ThemeHandle`] and either reads it on demand
//! or subscribes for [`ThemeChange`] notifications. A handle can also be
//! installed for the current thread with [`global::install`] and fetched with
//! [`global::current`], which panics if nothing was installed.

mod config;
mod error;
pub mod global;
mod preference;
mod runtime;
mod signal;
mod sink;
mod store;

// Re-export commonly used types
pub use config::{ThemeConfig, DEFAULT_STORAGE_KEY};
pub use error::{ConfigError, ParsePreferenceError, StoreError};
pub use preference::ThemePreference;
pub use runtime::{Subscription, ThemeChange, ThemeHandle, ThemeRuntime, ThemeRuntimeBuilder};
pub use signal::{FixedSignal, ManualSignal, PollingSignal, SignalSubscription, SystemSignal};
pub use sink::{NoopSink, PresentationSink, RootAttributes, THEME_ATTRIBUTE};
pub use store::{FileStore, MemoryStore, PreferenceStore};

pub use mts_tokens::{ResolvedTheme, Theme, ThemeBundle};
