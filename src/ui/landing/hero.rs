// SPDX-License-Identifier: MPL-2.0
//! Hero section: the per-character heading reveal and the scroll cue.
//!
//! Each character of the heading gets its own entrance animation plus a
//! randomized tilt, rise and accent color drawn once at startup. The glyphs
//! settle into a straight line; the randomness only shapes the way in. The
//! section is art-directed on a dark surface in both themes so the accent
//! palette (bright hex digits only) always reads.

use crate::config::HeroConfig;
use crate::random::{self, RandomSource};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::animation::Easing;
use iced::time::{Duration, Instant};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::widget::{container, Column};
use iced::{
    alignment, mouse, Animation, Color, Element, Length, Padding, Pixels, Point, Radians,
    Rectangle, Renderer, Theme,
};

/// Fixed hero surface; accent colors are tuned for it.
const BACKGROUND: Color = palette::GRAY_900;

/// Tilt range a character may enter with, in degrees.
const TILT_RANGE: f32 = 30.0;

/// Vertical travel range of a character entrance, in pixels.
const RISE_MIN: f32 = 24.0;
const RISE_MAX: f32 = 96.0;

/// Advance per glyph as a fraction of the heading size. Canvas text cannot
/// be measured before drawing; the estimate only affects letter spacing.
const CHAR_ADVANCE: f32 = 0.58;

/// Bob cycle of the scroll cue (one direction; the cycle auto-reverses).
const CUE_BOB_SECS: f32 = 0.75;

/// One heading character with its entrance flourish.
struct RevealChar {
    glyph: char,
    color: Color,
    tilt_degrees: f32,
    rise: f32,
    entrance: Animation<bool>,
}

/// Hero state: the revealed characters and the scroll cue animations.
pub struct State {
    chars: Vec<RevealChar>,
    cue_fade: Animation<bool>,
    cue_bob: Animation<bool>,
}

impl State {
    /// Rolls the per-character flourishes and starts every entrance. The
    /// reveal begins at mount, like the original page load.
    #[must_use]
    pub fn new<R: RandomSource>(config: &HeroConfig, rng: &mut R, now: Instant) -> Self {
        let chars = config
            .heading
            .chars()
            .enumerate()
            .map(|(i, glyph)| {
                let mut entrance = Animation::new(false)
                    .duration(Duration::from_secs_f32(config.char_entrance_secs))
                    .delay(Duration::from_secs_f32(i as f32 * config.char_stagger_secs))
                    .easing(Easing::EaseOutBack);
                entrance.go_mut(true, now);

                RevealChar {
                    glyph,
                    color: random::accent_color(rng),
                    tilt_degrees: random::uniform_range(rng, -TILT_RANGE, TILT_RANGE),
                    rise: random::uniform_range(rng, RISE_MIN, RISE_MAX),
                    entrance,
                }
            })
            .collect();

        let mut cue_fade = Animation::new(false)
            .duration(Duration::from_secs_f32(config.cue_fade_secs))
            .delay(Duration::from_secs_f32(config.cue_delay_secs))
            .easing(Easing::EaseOutCubic);
        cue_fade.go_mut(true, now);

        let mut cue_bob = Animation::new(false)
            .duration(Duration::from_secs_f32(CUE_BOB_SECS))
            .easing(Easing::EaseInOut)
            .auto_reverse()
            .repeat_forever();
        cue_bob.go_mut(true, now);

        Self {
            chars,
            cue_fade,
            cue_bob,
        }
    }

    /// Whether the one-shot reveal (characters plus cue fade) has settled.
    /// The cue bob repeats forever and is deliberately not counted.
    #[must_use]
    pub fn reveal_settled(&self, now: Instant) -> bool {
        !self.cue_fade.is_animating(now)
            && self.chars.iter().all(|c| !c.entrance.is_animating(now))
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }
}

/// Renders the full-viewport hero section.
pub fn view<'a, Message: 'a>(
    state: &'a State,
    text_size: f32,
    section_height: f32,
    now: Instant,
) -> Element<'a, Message> {
    let heading = Canvas::new(Heading {
        chars: &state.chars,
        text_size,
        now,
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let cue_alpha = state.cue_fade.interpolate(0.0, 1.0, now);
    let cue_drop = state
        .cue_bob
        .interpolate(0.0, sizing::CUE_TRAVEL, now)
        .max(0.0);
    let cue_color = Color {
        a: cue_alpha,
        ..palette::WHITE
    };

    let cue = Column::new()
        .push(iced::widget::text("Scroll").size(typography::CAPTION).color(cue_color))
        .push(icons::chevron_down(cue_color, sizing::ICON_MD))
        .align_x(Horizontal::Center)
        .spacing(spacing::XXS);

    let cue = container(cue)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            top: cue_drop,
            bottom: spacing::XL + (sizing::CUE_TRAVEL - cue_drop),
            left: 0.0,
            right: 0.0,
        });

    container(Column::new().push(heading).push(cue))
        .width(Length::Fill)
        .height(Length::Fixed(section_height))
        .style(|_theme| styles::container::page(BACKGROUND))
        .into()
}

struct Heading<'a> {
    chars: &'a [RevealChar],
    text_size: f32,
    now: Instant,
}

impl<Message> canvas::Program<Message> for Heading<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let advance = self.text_size * CHAR_ADVANCE;
        let total_width = self.chars.len() as f32 * advance;
        let baseline = Point::new(
            (frame.width() - total_width) / 2.0 + advance / 2.0,
            frame.height() / 2.0,
        );

        for (i, reveal) in self.chars.iter().enumerate() {
            if reveal.glyph.is_whitespace() {
                continue;
            }

            // EaseOutBack overshoots past 1, so the glyph pops slightly
            // larger before settling.
            let progress = reveal.entrance.interpolate(0.0, 1.0, self.now);
            let remaining = 1.0 - progress;

            let center = Point::new(baseline.x + i as f32 * advance, baseline.y);

            frame.with_save(|frame| {
                frame.translate(iced::Vector::new(
                    center.x,
                    center.y + reveal.rise * remaining,
                ));
                frame.rotate(Radians(reveal.tilt_degrees.to_radians() * remaining));
                frame.scale(progress.max(0.0));

                frame.fill_text(Text {
                    content: reveal.glyph.to_string(),
                    position: Point::ORIGIN,
                    color: Color {
                        a: progress.clamp(0.0, 1.0),
                        ..reveal.color
                    },
                    size: Pixels(self.text_size),
                    align_x: alignment::Horizontal::Center.into(),
                    align_y: alignment::Vertical::Center.into(),
                    ..Text::default()
                });
            });
        }

        vec![frame.into_geometry()]
    }
}
