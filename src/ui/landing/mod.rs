// SPDX-License-Identifier: MPL-2.0
//! Landing page: hero, marquee and masonry gallery in a scrollable column.
//!
//! The page owns the viewport dimensions and the scroll offset. Both feed the
//! gallery reveal: the masonry layout is recomputed from the viewport width,
//! and a tile starts its one-shot fade the first time its top edge enters the
//! scrolled window. Image downloads are fire-and-forget tasks; a failed
//! download leaves a placeholder tile and is never retried.

pub mod hero;
pub mod marquee;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::gallery::{self, masonry, GalleryEntry};
use crate::random::RandomSource;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::viewport::ViewportDimensions;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::animation::Easing;
use iced::time::{Duration, Instant};
use iced::widget::{container, image, mouse_area, scrollable, text, Column, Row};
use iced::{mouse, Animation, ContentFit, Element, Length, Padding, Size, Task};

/// Horizontal page padding around the gallery.
const PAGE_PADDING: f32 = spacing::XL;

/// Hover zoom grow/shrink duration on gallery tiles.
const TILE_HOVER_ZOOM_SECS: f32 = 0.25;

/// Fetched state of one gallery image.
enum ImageState {
    Loading,
    Loaded(image::Handle),
    Failed,
}

/// Reveal and hover state of one gallery tile.
struct TileState {
    fade: Animation<bool>,
    revealed: bool,
    /// Hover zoom: releases a small inset so the image grows in its slot.
    hover: Animation<bool>,
}

/// Landing page state.
pub struct State {
    viewport: ViewportDimensions,
    scroll_top: f32,
    hovered: Option<usize>,
    hero: hero::State,
    marquee: marquee::State,
    entries: Vec<GalleryEntry>,
    images: Vec<ImageState>,
    tiles: Vec<TileState>,
    /// Marquee settings snapshotted at construction so the view does not
    /// need the config.
    marquee_text: String,
    marquee_velocity: f32,
}

/// Messages produced by the landing page.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled(scrollable::Viewport),
    ImageFetched(usize, std::result::Result<image::Handle, Error>),
    TileHovered(usize),
    TileUnhovered(usize),
    TilePressed(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenLink(String),
}

impl State {
    /// Builds the page state and kicks off the nine image downloads.
    pub fn new<R: RandomSource>(
        config: &Config,
        rng: &mut R,
        now: Instant,
    ) -> (Self, Task<Message>) {
        let entries = gallery::entries(&config.gallery.links);

        let images = entries.iter().map(|_| ImageState::Loading).collect();
        let tiles = entries
            .iter()
            .map(|entry| TileState {
                fade: Animation::new(false)
                    .duration(Duration::from_secs_f32(config.gallery.fade_secs))
                    .delay(Duration::from_secs_f32(
                        config.gallery.base_delay_secs
                            + entry.index as f32 * config.gallery.stagger_secs,
                    ))
                    .easing(Easing::EaseOutCubic),
                revealed: false,
                hover: Animation::new(false)
                    .duration(Duration::from_secs_f32(TILE_HOVER_ZOOM_SECS))
                    .easing(Easing::EaseInOut),
            })
            .collect();

        let fetches = Task::batch(entries.iter().map(|entry| {
            let index = entry.index;
            Task::perform(fetch_image(entry.url.clone()), move |result| {
                Message::ImageFetched(index, result)
            })
        }));

        let state = Self {
            viewport: ViewportDimensions::default(),
            scroll_top: 0.0,
            hovered: None,
            hero: hero::State::new(&config.hero, rng, now),
            marquee: marquee::State::new(now),
            entries,
            images,
            tiles,
            marquee_text: config.marquee.text.clone(),
            marquee_velocity: config.marquee.velocity,
        };

        (state, fetches)
    }

    /// Records a window resize. A wider window can pull tiles above the
    /// reveal line, so visibility is re-derived immediately.
    pub fn resized(&mut self, size: Size, now: Instant) {
        self.viewport.update(size);
        self.reveal_visible(now);
    }

    #[must_use]
    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    #[must_use]
    pub fn hovered_tile(&self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    /// Indices of tiles whose reveal has been triggered.
    #[must_use]
    pub fn revealed_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.revealed)
            .map(|(i, _)| i)
            .collect()
    }

    /// Masonry layout for the current viewport.
    fn layout(&self) -> masonry::Layout {
        let columns = masonry::column_count(self.viewport.width);
        let content_width = (self.viewport.width - 2.0 * PAGE_PADDING).max(1.0);
        let column_width =
            (content_width - (columns as f32 - 1.0) * spacing::MD) / columns as f32;
        masonry::pack(&self.entries, columns, column_width.max(1.0), spacing::MD)
    }

    /// Distance from the top of the page content to the gallery section.
    /// Mirrors the section order in [`view`].
    fn gallery_top(&self) -> f32 {
        self.viewport.height + spacing::SECTION + marquee::BAND_HEIGHT + spacing::SECTION
    }

    /// Starts the fade of every tile that has scrolled into view and has not
    /// been revealed yet. Reveals are one-shot; scrolling back up never hides
    /// a tile again.
    fn reveal_visible(&mut self, now: Instant) {
        let layout = self.layout();
        let visible = masonry::visible_indices(
            &layout,
            self.gallery_top(),
            self.scroll_top,
            self.viewport.height,
        );

        for index in visible {
            let tile = &mut self.tiles[index];
            if !tile.revealed {
                tile.revealed = true;
                tile.fade.go_mut(true, now);
            }
        }
    }
}

/// Processes a landing page message.
pub fn update(state: &mut State, message: Message, now: Instant) -> Event {
    match message {
        Message::Scrolled(viewport) => {
            state.scroll_top = viewport.absolute_offset().y;
            state.reveal_visible(now);
            Event::None
        }
        Message::ImageFetched(index, result) => {
            if let Some(slot) = state.images.get_mut(index) {
                *slot = match result {
                    Ok(handle) => ImageState::Loaded(handle),
                    Err(err) => {
                        eprintln!(
                            "Warning: failed to load gallery image {}: {}",
                            index + 1,
                            err
                        );
                        ImageState::Failed
                    }
                };
            }
            Event::None
        }
        Message::TileHovered(index) => {
            if let Some(tile) = state.tiles.get_mut(index) {
                state.hovered = Some(index);
                tile.hover.go_mut(true, now);
            }
            Event::None
        }
        Message::TileUnhovered(index) => {
            if state.hovered == Some(index) {
                state.hovered = None;
            }
            if let Some(tile) = state.tiles.get_mut(index) {
                tile.hover.go_mut(false, now);
            }
            Event::None
        }
        Message::TilePressed(index) => match state.entries.get(index) {
            Some(entry) => Event::OpenLink(entry.link.clone()),
            None => Event::None,
        },
    }
}

/// Downloads one gallery image into a renderable handle.
async fn fetch_image(url: String) -> Result<image::Handle> {
    let response = reqwest::get(&url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}

/// Renders the page as a scrollable column of sections.
pub fn view<'a>(state: &'a State, colors: &'a ColorScheme, now: Instant) -> Element<'a, Message> {
    let content = Column::new()
        .push(hero::view(
            &state.hero,
            state.viewport.hero_text_size(),
            state.viewport.height,
            now,
        ))
        .push(vertical_gap(spacing::SECTION))
        .push(marquee::view(
            &state.marquee,
            &state.marquee_text,
            state.marquee_velocity,
            colors,
            now,
        ))
        .push(vertical_gap(spacing::SECTION))
        .push(gallery_view(state, colors, now))
        .push(vertical_gap(spacing::SECTION))
        .width(Length::Fill);

    let page = scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::Scrolled);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| styles::container::page(colors.surface_primary))
        .into()
}

fn vertical_gap<'a>(height: f32) -> Element<'a, Message> {
    iced::widget::Space::new().width(Length::Fill).height(Length::Fixed(height)).into()
}

/// The masonry grid, one widget column per layout column.
fn gallery_view<'a>(state: &'a State, colors: &ColorScheme, now: Instant) -> Element<'a, Message> {
    let layout = state.layout();

    let mut columns = Row::new().spacing(spacing::MD).width(Length::Fill);
    for column in 0..layout.columns {
        let mut stack = Column::new()
            .spacing(spacing::MD)
            .width(Length::FillPortion(1));
        for index in layout.column_entries(column) {
            stack = stack.push(tile_view(state, &layout, index, colors, now));
        }
        columns = columns.push(stack);
    }

    container(columns)
        .width(Length::Fill)
        .padding(Padding {
            top: 0.0,
            bottom: 0.0,
            left: PAGE_PADDING,
            right: PAGE_PADDING,
        })
        .into()
}

/// One gallery tile: the image (or its fallback) behind a click target.
fn tile_view<'a>(
    state: &'a State,
    layout: &masonry::Layout,
    index: usize,
    colors: &ColorScheme,
    now: Instant,
) -> Element<'a, Message> {
    let entry = &state.entries[index];
    let tile = &state.tiles[index];
    let height = layout.slots[index].height;

    let alpha = tile.fade.interpolate(0.0, 1.0, now);
    let rise = tile
        .fade
        .interpolate(crate::ui::design_tokens::sizing::TILE_ENTRANCE_RISE, 0.0, now)
        .max(0.0);
    // The image grows into its slot as the hover inset shrinks toward zero.
    let inset = tile
        .hover
        .interpolate(crate::ui::design_tokens::sizing::TILE_HOVER_INSET, 0.0, now)
        .max(0.0);

    let surface: Element<'a, Message> = match &state.images[index] {
        ImageState::Loaded(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        ImageState::Loading | ImageState::Failed => {
            let label = text(entry.alt_text()).size(typography::BODY).color({
                let mut c = colors.text_secondary;
                c.a = alpha;
                c
            });
            container(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style({
                    let background = {
                        let mut c = colors.surface_secondary;
                        c.a = alpha;
                        c
                    };
                    let text_color = colors.text_secondary;
                    move |_theme| styles::container::tile_placeholder(background, text_color)
                })
                .into()
        }
    };

    let framed = container(surface)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(inset);

    let target = mouse_area(framed)
        .on_enter(Message::TileHovered(index))
        .on_exit(Message::TileUnhovered(index))
        .on_press(Message::TilePressed(index))
        .interaction(mouse::Interaction::Pointer);

    container(target)
        .width(Length::Fill)
        .padding(Padding {
            top: rise,
            bottom: 0.0,
            left: 0.0,
            right: 0.0,
        })
        .into()
}
