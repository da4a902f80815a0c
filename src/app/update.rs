// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{App, Message};
use crate::ui::{landing, navbar};
use iced::Task;

pub fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(&mut app.navbar, message, &app.config.drawer.items, app.now) {
        navbar::Event::None => Task::none(),
        navbar::Event::OpenLink(href) => open_link(&href),
    }
}

pub fn handle_landing_message(app: &mut App, message: landing::Message) -> Task<Message> {
    match landing::update(&mut app.landing, message, app.now) {
        landing::Event::None => Task::none(),
        landing::Event::OpenLink(href) => open_link(&href),
    }
}

/// Opens an outbound link in the system browser. Menu entries carry `/`
/// placeholders (the page has no routing), so only absolute URLs leave
/// the application.
fn open_link(href: &str) -> Task<Message> {
    if href.starts_with("http://") || href.starts_with("https://") {
        if let Err(err) = open::that_detached(href) {
            eprintln!("Warning: failed to open {href}: {err}");
        }
    }
    Task::none()
}
