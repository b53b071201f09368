//! Presentation sinks
//!
//! A sink receives every resolved theme the runtime computes. Applying the
//! same theme twice must have no further observable effect.

use std::cell::RefCell;
use std::rc::Rc;

use mts_tokens::ResolvedTheme;
use rustc_hash::FxHashMap;

/// Attribute that marks the document root as dark
pub const THEME_ATTRIBUTE: &str = "data-mts-theme";

/// Receiver of resolved themes
pub trait PresentationSink {
    fn apply_resolved_theme(&mut self, theme: ResolvedTheme);
}

impl<F> PresentationSink for F
where
    F: FnMut(ResolvedTheme),
{
    fn apply_resolved_theme(&mut self, theme: ResolvedTheme) {
        self(theme)
    }
}

/// Sink that ignores every theme
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl PresentationSink for NoopSink {
    fn apply_resolved_theme(&mut self, _theme: ResolvedTheme) {}
}

/// Attribute set of a document root element
///
/// Dark sets `data-mts-theme="dark"` so dark overrides apply; light removes
/// the attribute so the base (light) styles apply. Clones share the same
/// attributes, so a host can hand one clone to the runtime and read the other.
#[derive(Clone, Debug, Default)]
pub struct RootAttributes {
    attrs: Rc<RefCell<FxHashMap<String, String>>>,
}

impl RootAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.borrow_mut().insert(name.into(), value.into());
    }

    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.attrs.borrow_mut().remove(name)
    }

    /// Theme currently marked on the root; anything but `dark` reads as light
    pub fn resolved_theme(&self) -> ResolvedTheme {
        match self.attribute(THEME_ATTRIBUTE).as_deref() {
            Some("dark") => ResolvedTheme::Dark,
            _ => ResolvedTheme::Light,
        }
    }
}

impl PresentationSink for RootAttributes {
    fn apply_resolved_theme(&mut self, theme: ResolvedTheme) {
        tracing::trace!("RootAttributes: applying {}", theme);
        match theme {
            ResolvedTheme::Dark => self.set_attribute(THEME_ATTRIBUTE, "dark"),
            ResolvedTheme::Light => {
                self.remove_attribute(THEME_ATTRIBUTE);
            }
        }
    }
}
