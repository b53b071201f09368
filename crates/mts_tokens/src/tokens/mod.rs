//! Design tokens for theming
//!
//! Tokens are the atomic values that make up the design system:
//! - Colors (six semantic scales)
//! - Typography (font stack, sizes, weights)
//! - Spacing (4px-based scale)
//! - Shadows (web and native definitions)
//! - Border radii
//! - Z-index layers
//! - Breakpoints

mod breakpoints;
mod color;
mod radius;
mod shadow;
mod spacing;
mod typography;
mod z_index;

pub use breakpoints::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
pub use z_index::*;
