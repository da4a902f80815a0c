// SPDX-License-Identifier: MPL-2.0
//! Line icons drawn on a canvas.
//!
//! The app ships no bitmap assets; the handful of icons it needs (menu
//! toggle, close, cart, scroll chevron) are simple strokes, so they are
//! drawn directly with `canvas` and tint with whatever color the caller
//! passes in.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};

const STROKE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconKind {
    Menu,
    Close,
    Cart,
    ChevronDown,
}

/// A single stroked icon.
#[derive(Debug, Clone, Copy)]
struct LineIcon {
    kind: IconKind,
    color: Color,
}

/// Hamburger menu icon (three horizontal bars).
pub fn menu<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    icon(IconKind::Menu, color, size)
}

/// Close icon (diagonal cross).
pub fn close<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    icon(IconKind::Close, color, size)
}

/// Shopping cart icon.
pub fn cart<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    icon(IconKind::Cart, color, size)
}

/// Downward chevron used by the scroll cue.
pub fn chevron_down<'a, Message: 'a>(color: Color, size: f32) -> Element<'a, Message> {
    icon(IconKind::ChevronDown, color, size)
}

fn icon<'a, Message: 'a>(kind: IconKind, color: Color, size: f32) -> Element<'a, Message> {
    Canvas::new(LineIcon { kind, color })
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .into()
}

impl<Message> canvas::Program<Message> for LineIcon {
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
        let s = frame.width().min(frame.height());
        let stroke = Stroke::default()
            .with_width(STROKE_WIDTH)
            .with_color(self.color)
            .with_line_cap(canvas::LineCap::Round);

        // All coordinates are fractions of the icon box.
        let p = |x: f32, y: f32| Point::new(x * s, y * s);

        match self.kind {
            IconKind::Menu => {
                for y in [0.3, 0.5, 0.7] {
                    frame.stroke(&Path::line(p(0.2, y), p(0.8, y)), stroke);
                }
            }
            IconKind::Close => {
                frame.stroke(&Path::line(p(0.25, 0.25), p(0.75, 0.75)), stroke);
                frame.stroke(&Path::line(p(0.75, 0.25), p(0.25, 0.75)), stroke);
            }
            IconKind::Cart => {
                let basket = Path::new(|path| {
                    path.move_to(p(0.15, 0.25));
                    path.line_to(p(0.3, 0.25));
                    path.line_to(p(0.4, 0.62));
                    path.line_to(p(0.75, 0.62));
                    path.line_to(p(0.85, 0.35));
                    path.line_to(p(0.35, 0.35));
                });
                frame.stroke(&basket, stroke);

                frame.fill(&Path::circle(p(0.47, 0.78), 0.05 * s), self.color);
                frame.fill(&Path::circle(p(0.7, 0.78), 0.05 * s), self.color);
            }
            IconKind::ChevronDown => {
                let chevron = Path::new(|path| {
                    path.move_to(p(0.25, 0.38));
                    path.line_to(p(0.5, 0.62));
                    path.line_to(p(0.75, 0.38));
                });
                frame.stroke(&chevron, stroke);
            }
        }

        vec![frame.into_geometry()]
    }
}
