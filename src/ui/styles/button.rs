// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use iced::widget::button;
use iced::{Border, Color, Theme};

/// Chrome-less button wrapping an icon (cart, menu toggle, close).
///
/// The hover affordance is a color shift toward `hover`; the icons
/// themselves are canvas drawings, so there is no background to tint.
pub fn icon(base: Color, hover: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Active | button::Status::Disabled => base,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}
