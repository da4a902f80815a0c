// SPDX-License-Identifier: MPL-2.0
//! Navigation drawer: fixed top bar plus the slide-in overlay panel.
//!
//! The drawer owns two pieces of UI state (open flag, hovered item index)
//! and a set of animation targets derived from them. Toggling mid-slide
//! re-targets the in-flight animations from their current visual position,
//! so rapid clicking never blocks or snaps.

use crate::config::{DrawerConfig, MenuItem};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::animation::Easing;
use iced::time::{Duration, Instant};
use iced::widget::{button, container, mouse_area, row, text, Column, Row, Space, Stack};
use iced::{mouse, Animation, Color, Element, Length, Padding};

/// Horizontal room available to a drawer item (and thus to its underline).
const ITEM_CONTENT_WIDTH: f32 = sizing::DRAWER_WIDTH - 2.0 * spacing::XL;

/// Linear blend from a resting color toward its hover tint.
fn hover_tint(base: Color, hover: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    Color {
        r: base.r + (hover.r - base.r) * t,
        g: base.g + (hover.g - base.g) * t,
        b: base.b + (hover.b - base.b) * t,
        a: base.a + (hover.a - base.a) * t,
    }
}

/// Drawer state: the open/hover booleans plus their animation targets.
pub struct State {
    is_open: bool,
    hovered: Option<usize>,
    /// Panel slide progress, 0 = parked off-screen.
    slide: Animation<bool>,
    /// Scrim fade progress.
    scrim: Animation<bool>,
    /// Brand mark fade-in, started once at mount.
    brand_intro: Animation<bool>,
    /// Footer fade, delayed behind the item entrances.
    footer: Animation<bool>,
    items: Vec<ItemState>,
}

/// Per-item animation targets.
struct ItemState {
    entrance: Animation<bool>,
    underline: Animation<bool>,
}

/// Messages emitted by the drawer.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleDrawer,
    CloseDrawer,
    ItemHovered(usize),
    ItemUnhovered(usize),
    ItemPressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenLink(String),
}

impl State {
    /// Builds the drawer state for the configured menu, closed by default.
    #[must_use]
    pub fn new(config: &DrawerConfig, now: Instant) -> Self {
        let items = (0..config.items.len())
            .map(|i| ItemState {
                entrance: Animation::new(false)
                    .duration(Duration::from_secs_f32(config.item_entrance_secs))
                    .delay(Duration::from_secs_f32(
                        config.item_base_delay_secs + i as f32 * config.item_stagger_secs,
                    ))
                    .easing(Easing::EaseOutCubic),
                underline: Animation::new(false)
                    .duration(Duration::from_secs_f32(config.underline_secs))
                    .easing(Easing::EaseInOut),
            })
            .collect();

        let mut brand_intro = Animation::new(false)
            .duration(Duration::from_millis(500))
            .easing(Easing::EaseOutCubic);
        brand_intro.go_mut(true, now);

        Self {
            is_open: false,
            hovered: None,
            slide: Animation::new(false)
                .duration(Duration::from_secs_f32(config.slide_secs))
                .easing(Easing::EaseInOutQuart),
            scrim: Animation::new(false)
                .duration(Duration::from_secs_f32(config.scrim_secs))
                .easing(Easing::EaseInOutQuart),
            brand_intro,
            footer: Animation::new(false)
                .duration(Duration::from_millis(500))
                .delay(Duration::from_millis(500))
                .easing(Easing::EaseOutCubic),
            items,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Re-targets every open/close animation toward `open`.
    fn retarget(&mut self, open: bool, now: Instant) {
        self.is_open = open;
        self.slide.go_mut(open, now);
        self.scrim.go_mut(open, now);
        self.footer.go_mut(open, now);
        for item in &mut self.items {
            item.entrance.go_mut(open, now);
        }
    }
}

/// Processes a drawer message and returns the event for the parent.
pub fn update(state: &mut State, message: Message, items: &[MenuItem], now: Instant) -> Event {
    match message {
        Message::ToggleDrawer => {
            let open = !state.is_open;
            state.retarget(open, now);
            Event::None
        }
        Message::CloseDrawer => {
            // Scrim and close-button clicks; already-closed is a no-op.
            if state.is_open {
                state.retarget(false, now);
            }
            Event::None
        }
        Message::ItemHovered(index) => {
            debug_assert!(index < items.len());
            if index < state.items.len() {
                state.hovered = Some(index);
                state.items[index].underline.go_mut(true, now);
            }
            Event::None
        }
        Message::ItemUnhovered(index) => {
            if state.hovered == Some(index) {
                state.hovered = None;
            }
            if let Some(item) = state.items.get_mut(index) {
                item.underline.go_mut(false, now);
            }
            Event::None
        }
        Message::ItemPressed(index) => match items.get(index) {
            Some(item) => Event::OpenLink(item.href.clone()),
            None => Event::None,
        },
    }
}

/// Contextual data needed to render the drawer.
pub struct ViewContext<'a> {
    pub items: &'a [MenuItem],
    pub state: &'a State,
    pub colors: &'a ColorScheme,
    pub now: Instant,
}

/// Renders the fixed top bar: brand mark, cart icon, drawer toggle.
pub fn view_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let brand_alpha = ctx.state.brand_intro.interpolate(0.0, 1.0, ctx.now);
    let brand = text("Kefka").size(typography::TITLE_MD).color(Color {
        a: brand_alpha,
        ..colors.text_primary
    });

    // Decorative in this build; the shop itself is out of scope.
    let cart = mouse_area(icons::cart(colors.text_primary, sizing::ICON_MD))
        .interaction(mouse::Interaction::Pointer);

    let toggle_icon = if ctx.state.is_open {
        icons::close(colors.text_primary, sizing::ICON_MD)
    } else {
        icons::menu(colors.text_primary, sizing::ICON_MD)
    };
    let toggle = button(toggle_icon)
        .on_press(Message::ToggleDrawer)
        .padding(spacing::XXS)
        .style(styles::button::icon(
            colors.text_primary,
            colors.text_secondary,
        ));

    let bar = row![
        brand,
        Space::new().width(Length::Fill),
        cart,
        toggle,
    ]
    .spacing(spacing::LG)
    .align_y(iced::alignment::Vertical::Center)
    .padding(Padding {
        top: spacing::MD,
        bottom: spacing::MD,
        left: spacing::LG,
        right: spacing::LG,
    });

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .into()
}

/// Renders the scrim + panel layer, or `None` while the drawer is closed
/// and fully settled (absent from the widget tree, like the original's
/// conditional mount).
pub fn overlay<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.is_open && !ctx.state.slide.is_animating(ctx.now) {
        return None;
    }

    let colors = ctx.colors;

    let scrim_alpha = ctx.state.scrim.interpolate(0.0, colors.scrim.a, ctx.now);
    let scrim = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| styles::container::scrim(colors.scrim, scrim_alpha)),
    )
    .on_press(Message::CloseDrawer);

    let revealed = ctx
        .state
        .slide
        .interpolate(0.0, sizing::DRAWER_WIDTH, ctx.now)
        .max(0.0);

    // The panel is laid out at full width inside a clipping container whose
    // width is animated, so it slides in from the right edge.
    let panel = container(
        container(panel_content(ctx))
            .width(Length::Fixed(sizing::DRAWER_WIDTH))
            .height(Length::Fill)
            .style(move |_theme| styles::container::panel(colors.panel_background)),
    )
    .width(Length::Fixed(revealed))
    .height(Length::Fill)
    .clip(true);

    // Scrim fills whatever the panel does not cover, so clicks on the panel
    // surface never reach the close handler.
    let layer = Row::new().push(scrim).push(panel);

    Some(iced::widget::opaque(layer))
}

/// Renders the drawer as a single stacked element. Convenience for tests
/// and for callers that do not manage their own stack.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_top_bar(ctx));

    if let Some(drawer) = overlay(ctx) {
        layers = layers.push(drawer);
    }

    layers.into()
}

/// Panel interior: close button, staggered menu items, footer.
fn panel_content<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let close = button(icons::close(colors.text_primary, sizing::ICON_MD))
        .on_press(Message::CloseDrawer)
        .padding(spacing::XXS)
        .style(styles::button::icon(
            colors.text_primary,
            colors.text_secondary,
        ));

    let mut items = Column::new().width(Length::Fill);
    for (index, item) in ctx.items.iter().enumerate() {
        items = items.push(menu_item(ctx, index, item));
    }

    let footer_alpha = ctx.state.footer.interpolate(0.0, 1.0, ctx.now);
    let footer = text("© 2024 Kefka. All rights reserved.")
        .size(typography::CAPTION)
        .color(Color {
            a: footer_alpha,
            ..colors.text_secondary
        });

    Column::new()
        .push(
            row![Space::new().width(Length::Fill), close]
                .width(Length::Fill),
        )
        .push(container(items).height(Length::Fill).align_y(iced::alignment::Vertical::Center))
        .push(footer)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One drawer entry: animated label plus its hover underline.
fn menu_item<'a>(ctx: &ViewContext<'a>, index: usize, item: &'a MenuItem) -> Element<'a, Message> {
    let colors = ctx.colors;
    let anim = &ctx.state.items[index];

    let alpha = anim.entrance.interpolate(0.0, 1.0, ctx.now);
    let rise = anim
        .entrance
        .interpolate(sizing::ITEM_ENTRANCE_RISE, 0.0, ctx.now)
        .max(0.0);
    let underline_width = anim
        .underline
        .interpolate(0.0, ITEM_CONTENT_WIDTH, ctx.now)
        .max(0.0);

    // The label tint rides the underline animation, so both hover cues
    // move together.
    let tint = anim.underline.interpolate(0.0, 1.0, ctx.now);
    let label = text(item.title.as_str())
        .size(typography::MENU_ITEM)
        .color(Color {
            a: alpha,
            ..hover_tint(colors.text_primary, colors.text_secondary, tint)
        });

    let underline = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fixed(underline_width))
        .height(Length::Fixed(sizing::UNDERLINE_HEIGHT))
        .style(move |_theme| styles::container::underline(colors.text_primary));

    let entry = Column::new()
        .push(label)
        .push(underline)
        .spacing(spacing::XXS)
        .width(Length::Fill);

    let area = mouse_area(entry)
        .on_enter(Message::ItemHovered(index))
        .on_exit(Message::ItemUnhovered(index))
        .on_press(Message::ItemPressed(index))
        .interaction(mouse::Interaction::Pointer);

    container(area)
        .padding(Padding {
            top: spacing::SM + rise,
            bottom: spacing::SM,
            left: 0.0,
            right: 0.0,
        })
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrawerConfig;

    fn fixture() -> (State, DrawerConfig, Instant) {
        let config = DrawerConfig::default();
        let now = Instant::now();
        (State::new(&config, now), config, now)
    }

    #[test]
    fn drawer_starts_closed_with_nothing_hovered() {
        let (state, _, _) = fixture();
        assert!(!state.is_open());
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn toggle_parity_holds_across_hover_noise() {
        let (mut state, config, now) = fixture();

        for round in 1..=7 {
            update(&mut state, Message::ToggleDrawer, &config.items, now);
            // Interleaved hover events must not disturb the open flag.
            update(&mut state, Message::ItemHovered(2), &config.items, now);
            update(&mut state, Message::ItemUnhovered(2), &config.items, now);

            assert_eq!(state.is_open(), round % 2 == 1);
        }
    }

    #[test]
    fn scrim_click_closes_and_is_idempotent() {
        let (mut state, config, now) = fixture();

        update(&mut state, Message::ToggleDrawer, &config.items, now);
        assert!(state.is_open());

        update(&mut state, Message::CloseDrawer, &config.items, now);
        assert!(!state.is_open());

        update(&mut state, Message::CloseDrawer, &config.items, now);
        assert!(!state.is_open());
    }

    #[test]
    fn hover_round_trip_clears_index() {
        let (mut state, config, now) = fixture();

        update(&mut state, Message::ItemHovered(3), &config.items, now);
        assert_eq!(state.hovered(), Some(3));

        update(&mut state, Message::ItemUnhovered(3), &config.items, now);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn stale_unhover_keeps_newer_hover() {
        let (mut state, config, now) = fixture();

        // Pointer glides from item 1 onto item 2; the exit for 1 can arrive
        // after the enter for 2.
        update(&mut state, Message::ItemHovered(1), &config.items, now);
        update(&mut state, Message::ItemHovered(2), &config.items, now);
        update(&mut state, Message::ItemUnhovered(1), &config.items, now);

        assert_eq!(state.hovered(), Some(2));
    }

    #[test]
    fn hover_tint_blends_between_the_endpoint_colors() {
        let base = Color::from_rgb(0.1, 0.1, 0.1);
        let hover = Color::from_rgb(0.5, 0.5, 0.5);

        assert_eq!(hover_tint(base, hover, 0.0), base);
        assert_eq!(hover_tint(base, hover, 1.0), hover);

        let mid = hover_tint(base, hover, 0.5);
        assert!((mid.r - 0.3).abs() < 1e-6);

        // EaseInOut overshoot never leaves the endpoint range.
        assert_eq!(hover_tint(base, hover, -0.5), base);
        assert_eq!(hover_tint(base, hover, 1.5), hover);
    }

    #[test]
    fn item_press_emits_link_event() {
        let (mut state, config, now) = fixture();

        let event = update(&mut state, Message::ItemPressed(0), &config.items, now);
        assert!(matches!(event, Event::OpenLink(href) if href == "/"));

        let event = update(&mut state, Message::ItemPressed(99), &config.items, now);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn top_bar_renders_in_both_states() {
        let (mut state, config, now) = fixture();
        let colors = crate::ui::theming::ColorScheme::light();

        let _bar = view_top_bar(&ViewContext {
            items: &config.items,
            state: &state,
            colors: &colors,
            now,
        });
        drop(_bar);

        update(&mut state, Message::ToggleDrawer, &config.items, now);
        let _bar = view_top_bar(&ViewContext {
            items: &config.items,
            state: &state,
            colors: &colors,
            now,
        });
    }

    #[test]
    fn overlay_is_absent_until_opened() {
        let (mut state, config, now) = fixture();
        let colors = crate::ui::theming::ColorScheme::light();

        assert!(overlay(&ViewContext {
            items: &config.items,
            state: &state,
            colors: &colors,
            now,
        })
        .is_none());

        update(&mut state, Message::ToggleDrawer, &config.items, now);
        assert!(overlay(&ViewContext {
            items: &config.items,
            state: &state,
            colors: &colors,
            now,
        })
        .is_some());
    }
}
