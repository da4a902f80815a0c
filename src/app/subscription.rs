// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{window, Subscription};

/// The animation clock. The marquee drifts and the scroll cue bobs for as
/// long as the window is open, so frames are requested unconditionally.
pub fn create_frame_subscription() -> Subscription<Message> {
    window::frames().map(Message::Tick)
}

/// Window resizes feed the landing page's viewport (hero sizing, masonry
/// column count, reveal geometry).
pub fn create_resize_subscription() -> Subscription<Message> {
    window::resize_events().map(|(_id, size)| Message::WindowResized(size))
}
