// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for the user-inputs sidebar.
///
/// Derived from the active `Theme` background with a slight luminance shift
/// so the sidebar reads as a distinct region in both light and dark modes
/// without hard-coding colors.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;
    let luminance = base.r + base.g + base.b;
    let (r, g, b) = if luminance < 1.5 {
        (
            (base.r + 0.08).min(1.0),
            (base.g + 0.08).min(1.0),
            (base.b + 0.08).min(1.0),
        )
    } else {
        (
            (base.r - 0.05).max(0.0),
            (base.g - 0.05).max(0.0),
            (base.b - 0.05).max(0.0),
        )
    };

    container::Style {
        background: Some(Background::Color(Color::from_rgba(r, g, b, opacity::SURFACE))),
        border: Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Generic panel surface, used for the per-section error placeholders.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let weak = palette.background.weak.color;
    let strong = palette.background.strong.color;

    container::Style {
        background: Some(Background::Color(weak)),
        border: Border {
            color: strong,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
