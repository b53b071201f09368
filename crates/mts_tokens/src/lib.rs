//! MTS Design Tokens
//!
//! The typed token tree shared by every MTS surface, plus the overlay
//! machinery used to derive one theme from another.
//!
//! # Overview
//!
//! - **Tokens**: colors, typography, spacing, shadows, border radii,
//!   z-index layers and breakpoints
//! - **Overlays**: every token type has a `Partial*` counterpart where each
//!   field is optional; [`merge_theme`] applies one onto a base tree
//! - **Themes**: the built-in light base, the dark overrides, and
//!   [`ThemeBundle`] pairing the two
//!
//! # Quick Start
//!
//! ```rust
//! use mts_tokens::{merge_theme, ColorRole, ResolvedTheme, Shade, Theme, ThemeBundle, ThemeOverrides};
//!
//! let light = Theme::light();
//! let dark = merge_theme(&light, ThemeOverrides::dark());
//!
//! // Only the colors differ; everything else is inherited.
//! assert_eq!(light.spacing, dark.spacing);
//! assert_ne!(
//!     light.colors.get(ColorRole::Primary).get(Shade::S50),
//!     dark.colors.get(ColorRole::Primary).get(Shade::S50),
//! );
//!
//! let bundle = ThemeBundle::default();
//! assert_eq!(*bundle.for_resolved(ResolvedTheme::Dark), dark);
//! ```
//!
//! # Loading overrides
//!
//! Partial trees deserialize from TOML or JSON using the same key names as
//! the token source files (`"50"`, `"2xl"`, `"DEFAULT"`, `"modalBackdrop"`):
//!
//! ```rust
//! use mts_tokens::{merge_theme, Theme, ThemeOverrides};
//!
//! let overrides = ThemeOverrides::from_toml_str(
//!     r##"
//!     [colors.primary]
//!     500 = "#ff5500"
//!     "##,
//! )
//! .unwrap();
//!
//! let branded = merge_theme(&Theme::light(), &overrides);
//! assert_eq!(branded.colors.primary.shade_500.to_hex(), "#ff5500");
//! ```

#[macro_use]
pub mod overlay;

pub mod color;
pub mod error;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use color::Color;
pub use error::TokenError;
pub use overlay::Overlay;
pub use theme::{dark_theme, merge_theme, ResolvedTheme, Theme, ThemeBundle, ThemeOverrides};
pub use tokens::*;
