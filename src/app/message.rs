// SPDX-License-Identifier: MPL-2.0
//! Top-level message and launch flag types.

use crate::ui::{landing, navbar};
use iced::time::Instant;
use iced::Size;

/// Launch options parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Overrides the config directory for this run.
    pub config_dir: Option<String>,
    /// Overrides the configured marquee velocity.
    pub marquee_velocity: Option<f32>,
}

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Landing(landing::Message),
    /// Animation clock, one per rendered frame while subscribed.
    Tick(Instant),
    WindowResized(Size),
}
