//! Light theme (base)

use crate::theme::Theme;
use crate::tokens::*;

/// Light color scales, shades ordered 50 through 900
pub const LIGHT_SCALES: [(ColorRole, [u32; 8]); 6] = [
    (
        ColorRole::Primary,
        [0xe6f2ff, 0xcce5ff, 0x99ccff, 0x66b2ff, 0x0066cc, 0x0052a3, 0x003d7a, 0x001429],
    ),
    (
        ColorRole::Secondary,
        [0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x6b7280, 0x4b5563, 0x374151, 0x111827],
    ),
    (
        ColorRole::Success,
        [0xecfdf5, 0xd1fae5, 0xa7f3d0, 0x6ee7b7, 0x10b981, 0x059669, 0x047857, 0x064e3b],
    ),
    (
        ColorRole::Warning,
        [0xfffbeb, 0xfef3c7, 0xfde68a, 0xfcd34d, 0xf59e0b, 0xd97706, 0xb45309, 0x78350f],
    ),
    (
        ColorRole::Danger,
        [0xfef2f2, 0xfee2e2, 0xfecaca, 0xfca5a5, 0xef4444, 0xdc2626, 0xb91c1c, 0x7f1d1d],
    ),
    (
        ColorRole::Info,
        [0xeff6ff, 0xdbeafe, 0xbfdbfe, 0x93c5fd, 0x3b82f6, 0x2563eb, 0x1e40af, 0x0c2340],
    ),
];

fn scale(role: ColorRole) -> ColorScale {
    LIGHT_SCALES
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, shades)| ColorScale::from_hex(*shades))
        .unwrap_or_else(|| ColorScale::from_hex([0; 8]))
}

impl Theme {
    /// The canonical light theme
    pub fn light() -> Self {
        Self {
            colors: ColorPalette {
                primary: scale(ColorRole::Primary),
                secondary: scale(ColorRole::Secondary),
                success: scale(ColorRole::Success),
                warning: scale(ColorRole::Warning),
                danger: scale(ColorRole::Danger),
                info: scale(ColorRole::Info),
            },
            typography: Typography::default(),
            spacing: SpacingScale::default(),
            shadows: Shadows::default(),
            border_radius: BorderRadius::default(),
            z_index: ZIndex::default(),
            breakpoints: Breakpoints::default(),
        }
    }
}
