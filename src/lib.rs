// SPDX-License-Identifier: MPL-2.0
//! `kefka` is the animated marketing landing page for the Kefka brand,
//! built with the Iced GUI framework.
//!
//! The page is composed of a fixed top bar with a slide-in navigation
//! drawer and three scroll-driven sections: an animated hero heading, a
//! continuously scrolling marquee, and a masonry image gallery with
//! staggered reveals. All transitions are declarative `iced::Animation`
//! targets re-computed from UI state, so rapid interaction simply
//! re-targets in-flight animations.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod random;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
