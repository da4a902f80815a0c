// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color};

/// Full-screen dimmed backdrop behind the open drawer. `alpha` is animated
/// by the drawer state, so it is taken per call instead of from a token.
#[must_use]
pub fn scrim(base: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..base })),
        ..Default::default()
    }
}

/// The drawer panel surface.
#[must_use]
pub fn panel(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// The animated underline bar under a hovered drawer item.
#[must_use]
pub fn underline(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Neutral tile shown while a gallery image downloads or after it failed.
#[must_use]
pub fn tile_placeholder(background: Color, text: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Page background surface.
#[must_use]
pub fn page(background: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}
