//! Dark theme overrides
//!
//! Only the color scales differ from the light theme. Each dark scale runs
//! the opposite way so that "50" stays the background-end of the ramp.

use std::sync::OnceLock;

use crate::theme::{PartialTheme, ThemeOverrides};
use crate::tokens::*;

/// Dark color scales, shades ordered 50 through 900
pub const DARK_SCALES: [(ColorRole, [u32; 8]); 6] = [
    (
        ColorRole::Primary,
        [0x001429, 0x003d7a, 0x0052a3, 0x0066cc, 0x66b2ff, 0x99ccff, 0xcce5ff, 0xe6f2ff],
    ),
    (
        ColorRole::Secondary,
        [0x111827, 0x374151, 0x4b5563, 0x6b7280, 0xd1d5db, 0xe5e7eb, 0xf3f4f6, 0xf9fafb],
    ),
    (
        ColorRole::Success,
        [0x064e3b, 0x047857, 0x059669, 0x10b981, 0x6ee7b7, 0xa7f3d0, 0xd1fae5, 0xecfdf5],
    ),
    (
        ColorRole::Warning,
        [0x78350f, 0xb45309, 0xd97706, 0xf59e0b, 0xfcd34d, 0xfde68a, 0xfef3c7, 0xfffbeb],
    ),
    (
        ColorRole::Danger,
        [0x7f1d1d, 0xb91c1c, 0xdc2626, 0xef4444, 0xfca5a5, 0xfecaca, 0xfee2e2, 0xfef2f2],
    ),
    (
        ColorRole::Info,
        [0x0c2340, 0x1e40af, 0x2563eb, 0x3b82f6, 0x93c5fd, 0xbfdbfe, 0xdbeafe, 0xeff6ff],
    ),
];

static DARK_OVERRIDES: OnceLock<ThemeOverrides> = OnceLock::new();

fn build_dark_overrides() -> ThemeOverrides {
    let mut colors = PartialColorPalette::default();
    for (role, shades) in DARK_SCALES {
        let scale = Some(PartialColorScale::full(&ColorScale::from_hex(shades)));
        match role {
            ColorRole::Primary => colors.primary = scale,
            ColorRole::Secondary => colors.secondary = scale,
            ColorRole::Success => colors.success = scale,
            ColorRole::Warning => colors.warning = scale,
            ColorRole::Danger => colors.danger = scale,
            ColorRole::Info => colors.info = scale,
        }
    }

    PartialTheme {
        colors: Some(colors),
        ..Default::default()
    }
}

impl PartialTheme {
    /// The built-in dark overrides, built on first use and shared afterwards
    pub fn dark() -> &'static ThemeOverrides {
        DARK_OVERRIDES.get_or_init(build_dark_overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{merge_theme, Theme};

    #[test]
    fn test_dark_overrides_touch_colors_only() {
        let dark = ThemeOverrides::dark();
        assert!(dark.colors.is_some());
        assert!(dark.typography.is_none());
        assert!(dark.spacing.is_none());
        assert!(dark.shadows.is_none());
        assert!(dark.border_radius.is_none());
        assert!(dark.z_index.is_none());
        assert!(dark.breakpoints.is_none());
    }

    #[test]
    fn test_dark_scales_invert_light_scales() {
        let light = Theme::light();
        let dark = merge_theme(&light, ThemeOverrides::dark());
        for role in ColorRole::ALL {
            assert_eq!(
                *dark.colors.get(role),
                light.colors.get(role).inverted(),
                "role={role:?}"
            );
        }
    }
}
