// SPDX-License-Identifier: MPL-2.0
//! Default configuration values.
//!
//! The numeric literals here govern every animation on the page; they are
//! grouped in one place so timing tweaks never require hunting through view
//! code. Functions (rather than consts) exist where serde needs a `default`
//! callable.

use super::MenuItem;

// Drawer motion
pub const DEFAULT_DRAWER_SLIDE_SECS: f32 = 0.75;
pub const DEFAULT_DRAWER_SCRIM_SECS: f32 = 0.5;
pub const DEFAULT_ITEM_ENTRANCE_SECS: f32 = 0.65;
pub const DEFAULT_ITEM_BASE_DELAY_SECS: f32 = 0.5;
pub const DEFAULT_ITEM_STAGGER_SECS: f32 = 0.1;
pub const DEFAULT_UNDERLINE_SECS: f32 = 0.3;

// Hero motion
pub const DEFAULT_HERO_CHAR_STAGGER_SECS: f32 = 0.05;
pub const DEFAULT_HERO_CHAR_ENTRANCE_SECS: f32 = 0.6;
pub const DEFAULT_CUE_DELAY_SECS: f32 = 0.5;
pub const DEFAULT_CUE_FADE_SECS: f32 = 0.5;

// Marquee
pub const DEFAULT_MARQUEE_VELOCITY: f32 = 3.0;

// Gallery reveal
pub const DEFAULT_GALLERY_BASE_DELAY_SECS: f32 = 0.25;
pub const DEFAULT_GALLERY_STAGGER_SECS: f32 = 0.05;
pub const DEFAULT_GALLERY_FADE_SECS: f32 = 0.4;

pub const DEFAULT_HERO_HEADING: &str = "What's up";
pub const DEFAULT_MARQUEE_TEXT: &str = "Welcome";

pub(super) fn default_drawer_slide_secs() -> f32 {
    DEFAULT_DRAWER_SLIDE_SECS
}

pub(super) fn default_drawer_scrim_secs() -> f32 {
    DEFAULT_DRAWER_SCRIM_SECS
}

pub(super) fn default_item_entrance_secs() -> f32 {
    DEFAULT_ITEM_ENTRANCE_SECS
}

pub(super) fn default_item_base_delay_secs() -> f32 {
    DEFAULT_ITEM_BASE_DELAY_SECS
}

pub(super) fn default_item_stagger_secs() -> f32 {
    DEFAULT_ITEM_STAGGER_SECS
}

pub(super) fn default_underline_secs() -> f32 {
    DEFAULT_UNDERLINE_SECS
}

pub(super) fn default_hero_heading() -> String {
    DEFAULT_HERO_HEADING.to_string()
}

pub(super) fn default_hero_char_stagger_secs() -> f32 {
    DEFAULT_HERO_CHAR_STAGGER_SECS
}

pub(super) fn default_hero_char_entrance_secs() -> f32 {
    DEFAULT_HERO_CHAR_ENTRANCE_SECS
}

pub(super) fn default_cue_delay_secs() -> f32 {
    DEFAULT_CUE_DELAY_SECS
}

pub(super) fn default_cue_fade_secs() -> f32 {
    DEFAULT_CUE_FADE_SECS
}

pub(super) fn default_marquee_text() -> String {
    DEFAULT_MARQUEE_TEXT.to_string()
}

pub(super) fn default_marquee_velocity() -> f32 {
    DEFAULT_MARQUEE_VELOCITY
}

pub(super) fn default_gallery_base_delay_secs() -> f32 {
    DEFAULT_GALLERY_BASE_DELAY_SECS
}

pub(super) fn default_gallery_stagger_secs() -> f32 {
    DEFAULT_GALLERY_STAGGER_SECS
}

pub(super) fn default_gallery_fade_secs() -> f32 {
    DEFAULT_GALLERY_FADE_SECS
}

/// The five navigation entries. Titles double as rendering keys, so they
/// must stay unique.
#[must_use]
pub fn menu_items() -> Vec<MenuItem> {
    ["Home", "Shop", "About", "Lookbook", "Contact"]
        .into_iter()
        .map(|title| MenuItem {
            title: title.to_string(),
            href: "/".to_string(),
        })
        .collect()
}

/// The nine outbound gallery links, position-matched to the image list.
#[must_use]
pub fn gallery_links() -> Vec<String> {
    [
        "https://www.whatsupmoms.com",
        "https://www.whatsupmedia.com",
        "https://www.reddit.com/r/whatsup",
        "https://www.whatsupgold.com",
        "https://www.whatsupmag.com",
        "https://www.whatsapp.com",
        "https://www.popbuzz.com",
        "https://www.whatsupin.io",
        "https://www.hellomagazine.com",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
