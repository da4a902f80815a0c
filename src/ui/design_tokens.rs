// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

Motion timings are configuration, not tokens; see `config::defaults`.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Scrim behind the open drawer.
    pub const SCRIM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 40.0; // 5 units
    pub const SECTION: f32 = 96.0; // vertical rhythm between page sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Fixed header bar height.
    pub const TOP_BAR_HEIGHT: f32 = 72.0;

    /// Drawer panel width; matches the original's `md:w-[480px]`.
    pub const DRAWER_WIDTH: f32 = 480.0;

    /// Hover underline thickness under drawer items.
    pub const UNDERLINE_HEIGHT: f32 = 2.0;

    /// Vertical shift drawer items travel during their entrance.
    pub const ITEM_ENTRANCE_RISE: f32 = 80.0;

    /// Vertical shift gallery tiles travel while fading in.
    pub const TILE_ENTRANCE_RISE: f32 = 16.0;

    /// Inset released while a gallery tile is hovered, producing a slight
    /// zoom of the image inside its slot.
    pub const TILE_HOVER_INSET: f32 = 6.0;

    /// Bob distance of the scroll cue.
    pub const CUE_TRAVEL: f32 = 12.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale. The landing page leans display-heavy: the hero
    //! heading scales with the viewport and only bottoms out at `DISPLAY`.

    /// Minimum hero heading size (the heading otherwise tracks 15% of the
    /// viewport width, capped at `DISPLAY_MAX`).
    pub const DISPLAY: f32 = 64.0;

    /// Upper bound for the viewport-scaled hero heading.
    pub const DISPLAY_MAX: f32 = 512.0;

    /// Marquee band text.
    pub const MARQUEE: f32 = 96.0;

    /// Drawer menu items.
    pub const MENU_ITEM: f32 = 56.0;

    /// Brand mark in the top bar.
    pub const TITLE_MD: f32 = 24.0;

    /// Standard body - labels, fallback tiles.
    pub const BODY: f32 = 14.0;

    /// Caption - drawer footer, scroll cue label.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SCRIM > 0.0 && opacity::SCRIM < 1.0);

    // Typography validation
    assert!(typography::DISPLAY_MAX > typography::DISPLAY);
    assert!(typography::DISPLAY > typography::MENU_ITEM);
    assert!(typography::MENU_ITEM > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);

    // Sizing validation
    assert!(sizing::DRAWER_WIDTH > sizing::TOP_BAR_HEIGHT);
    assert!(sizing::ICON_MD > sizing::ICON_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn grayscale_is_ordered() {
        assert!(palette::GRAY_100.r > palette::GRAY_200.r);
        assert!(palette::GRAY_200.r > palette::GRAY_500.r);
        assert!(palette::GRAY_500.r > palette::GRAY_700.r);
    }
}
