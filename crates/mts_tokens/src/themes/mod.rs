//! Built-in MTS themes
//!
//! The light theme is the canonical token set; dark mode is expressed only as
//! the overrides that differ from it (inverted color scales).

mod dark;
mod light;

pub use dark::DARK_SCALES;
pub use light::LIGHT_SCALES;
