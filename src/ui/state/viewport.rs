// SPDX-License-Identifier: MPL-2.0
//! Viewport dimension tracking.
//!
//! The window size is recomputed on every resize event and once at startup.
//! Layout decisions that depend on it (hero heading size, masonry column
//! count) read from this struct instead of ambient window state so they stay
//! testable.

use crate::app::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use iced::Size;

/// Current window dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportDimensions {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportDimensions {
    fn default() -> Self {
        Self {
            width: WINDOW_DEFAULT_WIDTH as f32,
            height: WINDOW_DEFAULT_HEIGHT as f32,
        }
    }
}

impl ViewportDimensions {
    /// Records a resize. Dimensions are clamped to non-negative; the window
    /// system should never report less, but the invariant is cheap to keep.
    pub fn update(&mut self, size: Size) {
        self.width = size.width.max(0.0);
        self.height = size.height.max(0.0);
    }

    /// Hero heading size: 15% of the viewport width, clamped to the display
    /// scale (the original's `clamp(4rem, 15vw, 512px)`).
    #[must_use]
    pub fn hero_text_size(&self) -> f32 {
        use crate::ui::design_tokens::typography;
        (self.width * 0.15).clamp(typography::DISPLAY, typography::DISPLAY_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_records_dimensions() {
        let mut viewport = ViewportDimensions::default();
        viewport.update(Size::new(1920.0, 1080.0));
        assert_eq!(viewport.width, 1920.0);
        assert_eq!(viewport.height, 1080.0);
    }

    #[test]
    fn update_clamps_negative_values() {
        let mut viewport = ViewportDimensions::default();
        viewport.update(Size::new(-5.0, -1.0));
        assert_eq!(viewport.width, 0.0);
        assert_eq!(viewport.height, 0.0);
    }

    #[test]
    fn hero_text_size_tracks_width_between_bounds() {
        let mut viewport = ViewportDimensions::default();

        viewport.update(Size::new(300.0, 600.0));
        assert_eq!(viewport.hero_text_size(), 64.0); // clamped to minimum

        viewport.update(Size::new(1000.0, 600.0));
        assert_eq!(viewport.hero_text_size(), 150.0);

        viewport.update(Size::new(10000.0, 600.0));
        assert_eq!(viewport.hero_text_size(), 512.0); // clamped to maximum
    }
}
