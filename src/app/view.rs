// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.
//!
//! The page content scrolls underneath the fixed top bar; the drawer layer
//! (scrim + panel) joins the stack only while it is open or animating shut.

use super::{App, Message};
use crate::ui::{landing, navbar};
use iced::widget::Stack;
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let ctx = navbar::ViewContext {
        items: &app.config.drawer.items,
        state: &app.navbar,
        colors: &app.colors,
        now: app.now,
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(landing::view(&app.landing, &app.colors, app.now).map(Message::Landing))
        .push(navbar::view_top_bar(&ctx).map(Message::Navbar));

    if let Some(drawer) = navbar::overlay(&ctx) {
        layers = layers.push(drawer.map(Message::Navbar));
    }

    layers.into()
}
