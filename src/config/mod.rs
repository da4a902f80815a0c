// SPDX-License-Identifier: MPL-2.0
//! Application configuration: recognized options and `settings.toml` handling.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[drawer]` - Menu items and drawer motion timings
//! - `[hero]` - Heading text and reveal timings
//! - `[marquee]` - Marquee text and base velocity
//! - `[gallery]` - Outbound links and reveal stagger
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` CLI argument, set via [`init_cli_override`]
//! 3. `KEFKA_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory via the `dirs` crate
//!
//! A missing file yields defaults silently; a malformed file yields defaults
//! plus a warning string so startup never fails on bad user edits.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::gallery::GALLERY_LEN;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "Kefka";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "KEFKA_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Should be called once at startup, before any load/save. Calling it twice
/// is a programming error.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_override(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Returns the config directory, honoring CLI and environment overrides.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(Some(path)) = CLI_CONFIG_DIR.get() {
        return Some(path.clone());
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

// =============================================================================
// Section Structs
// =============================================================================

/// One navigation entry in the drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Display label; also the rendering key, unique within the list.
    pub title: String,
    /// Link target. The page has no routing, so `/` is the norm.
    pub href: String,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Navigation drawer contents and motion timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawerConfig {
    /// Menu entries listed in the drawer, top to bottom.
    #[serde(default = "menu_items")]
    pub items: Vec<MenuItem>,

    /// Panel slide duration in seconds.
    #[serde(default = "default_drawer_slide_secs")]
    pub slide_secs: f32,

    /// Scrim fade duration in seconds.
    #[serde(default = "default_drawer_scrim_secs")]
    pub scrim_secs: f32,

    /// Per-item entrance duration in seconds.
    #[serde(default = "default_item_entrance_secs")]
    pub item_entrance_secs: f32,

    /// Delay before the first item starts its entrance.
    #[serde(default = "default_item_base_delay_secs")]
    pub item_base_delay_secs: f32,

    /// Additional entrance delay per item position.
    #[serde(default = "default_item_stagger_secs")]
    pub item_stagger_secs: f32,

    /// Hover underline grow/shrink duration in seconds.
    #[serde(default = "default_underline_secs")]
    pub underline_secs: f32,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            items: menu_items(),
            slide_secs: DEFAULT_DRAWER_SLIDE_SECS,
            scrim_secs: DEFAULT_DRAWER_SCRIM_SECS,
            item_entrance_secs: DEFAULT_ITEM_ENTRANCE_SECS,
            item_base_delay_secs: DEFAULT_ITEM_BASE_DELAY_SECS,
            item_stagger_secs: DEFAULT_ITEM_STAGGER_SECS,
            underline_secs: DEFAULT_UNDERLINE_SECS,
        }
    }
}

/// Hero section text and reveal timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Heading revealed character by character.
    #[serde(default = "default_hero_heading")]
    pub heading: String,

    /// Delay between consecutive character entrances.
    #[serde(default = "default_hero_char_stagger_secs")]
    pub char_stagger_secs: f32,

    /// Duration of a single character entrance.
    #[serde(default = "default_hero_char_entrance_secs")]
    pub char_entrance_secs: f32,

    /// Delay before the scroll cue fades in.
    #[serde(default = "default_cue_delay_secs")]
    pub cue_delay_secs: f32,

    /// Scroll cue fade duration.
    #[serde(default = "default_cue_fade_secs")]
    pub cue_fade_secs: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: default_hero_heading(),
            char_stagger_secs: DEFAULT_HERO_CHAR_STAGGER_SECS,
            char_entrance_secs: DEFAULT_HERO_CHAR_ENTRANCE_SECS,
            cue_delay_secs: DEFAULT_CUE_DELAY_SECS,
            cue_fade_secs: DEFAULT_CUE_FADE_SECS,
        }
    }
}

/// Marquee band settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarqueeConfig {
    /// Text repeated across the band.
    #[serde(default = "default_marquee_text")]
    pub text: String,

    /// Base scroll velocity in marquee units (1 unit = 40 px/s).
    #[serde(default = "default_marquee_velocity")]
    pub velocity: f32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: default_marquee_text(),
            velocity: DEFAULT_MARQUEE_VELOCITY,
        }
    }
}

/// Gallery links and reveal stagger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Outbound link per tile, position-matched to the image list. Must hold
    /// exactly [`GALLERY_LEN`] entries.
    #[serde(default = "gallery_links")]
    pub links: Vec<String>,

    /// Delay before the first visible tile starts fading in.
    #[serde(default = "default_gallery_base_delay_secs")]
    pub base_delay_secs: f32,

    /// Additional reveal delay per tile position.
    #[serde(default = "default_gallery_stagger_secs")]
    pub stagger_secs: f32,

    /// Tile fade/slide duration.
    #[serde(default = "default_gallery_fade_secs")]
    pub fade_secs: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            links: gallery_links(),
            base_delay_secs: DEFAULT_GALLERY_BASE_DELAY_SECS,
            stagger_secs: DEFAULT_GALLERY_STAGGER_SECS,
            fade_secs: DEFAULT_GALLERY_FADE_SECS,
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub drawer: DrawerConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Replaces sections that violate structural invariants with defaults.
    ///
    /// Returns a human-readable warning when anything was rejected. Motion
    /// durations are clamped rather than rejected: a zero or negative
    /// duration just snaps the transition.
    pub fn normalize(&mut self) -> Option<String> {
        let mut warnings = Vec::new();

        if self.drawer.items.is_empty() || !unique_titles(&self.drawer.items) {
            warnings.push("drawer.items must be a non-empty list with unique titles");
            self.drawer.items = menu_items();
        }

        if self.gallery.links.len() != GALLERY_LEN {
            warnings.push("gallery.links must hold exactly 9 entries");
            self.gallery.links = gallery_links();
        }

        for value in [
            &mut self.drawer.slide_secs,
            &mut self.drawer.scrim_secs,
            &mut self.drawer.item_entrance_secs,
            &mut self.drawer.item_base_delay_secs,
            &mut self.drawer.item_stagger_secs,
            &mut self.drawer.underline_secs,
            &mut self.hero.char_stagger_secs,
            &mut self.hero.char_entrance_secs,
            &mut self.hero.cue_delay_secs,
            &mut self.hero.cue_fade_secs,
            &mut self.gallery.base_delay_secs,
            &mut self.gallery.stagger_secs,
            &mut self.gallery.fade_secs,
        ] {
            if !value.is_finite() || *value < 0.0 {
                *value = 0.0;
            }
        }

        if !self.marquee.velocity.is_finite() {
            self.marquee.velocity = DEFAULT_MARQUEE_VELOCITY;
        }

        if warnings.is_empty() {
            None
        } else {
            Some(warnings.join("; "))
        }
    }
}

fn unique_titles(items: &[MenuItem]) -> bool {
    let mut seen = std::collections::HashSet::new();
    items.iter().all(|item| seen.insert(item.title.as_str()))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the resolved config directory.
///
/// Never fails: a missing file yields defaults, a malformed file yields
/// defaults plus a warning describing what was wrong.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_dir().map(|dir| dir.join(CONFIG_FILE)) else {
        return (Config::default(), None);
    };

    if !path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(mut config) => {
            let warning = config.normalize();
            (config, warning)
        }
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    let dir = config_dir().ok_or_else(|| {
        crate::error::Error::Config("could not determine config directory".to_string())
    })?;
    fs::create_dir_all(&dir)?;
    save_to_path(config, &dir.join(CONFIG_FILE))
}

/// Saves the configuration to an explicit path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}
