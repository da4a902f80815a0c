// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the two components (navigation drawer, landing
//! page) to the shared animation clock and the loaded configuration. Policy
//! decisions (window sizing, theme selection, which links may leave the app)
//! live close to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::random::SystemRandom;
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{landing, navbar};
use iced::time::Instant;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    navbar: navbar::State,
    landing: landing::State,
    /// Latest animation clock reading; every view renders against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("drawer_open", &self.navbar.is_open())
            .field("scroll_top", &self.landing.scroll_top())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    config::init_cli_override(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the loaded configuration and kicks
    /// off the gallery image downloads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("Warning: {warning}");
        }

        if let Some(velocity) = flags.marquee_velocity {
            if velocity.is_finite() {
                config.marquee.velocity = velocity;
            }
        }

        let now = Instant::now();
        let mut rng = SystemRandom;

        let theme_mode = config.general.theme_mode;
        let navbar = navbar::State::new(&config.drawer, now);
        let (landing, fetches) = landing::State::new(&config, &mut rng, now);

        let app = Self {
            colors: ColorScheme::for_mode(theme_mode),
            theme_mode,
            config,
            navbar,
            landing,
            now,
        };

        (app, fetches.map(Message::Landing))
    }

    fn title(&self) -> String {
        "Kefka".to_string()
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_frame_subscription(),
            subscription::create_resize_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Landing(landing_message) => {
                update::handle_landing_message(self, landing_message)
            }
            Message::Tick(instant) => {
                self.now = instant;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.landing.resized(size, self.now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
