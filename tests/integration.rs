// SPDX-License-Identifier: MPL-2.0
use kefka::config::{self, Config, MenuItem};
use kefka::gallery::{self, masonry, GALLERY_LEN};
use kefka::ui::navbar;
use iced::time::Instant;
use tempfile::tempdir;

#[test]
fn config_round_trips_through_the_filesystem() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.marquee.text = "Hello there".to_string();
    config.marquee.velocity = 4.5;
    config.drawer.items.push(MenuItem {
        title: "Press".to_string(),
        href: "https://example.com/press".to_string(),
    });
    config.hero.heading = "Good evening".to_string();

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let restored = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(restored, config);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn malformed_config_is_rejected_with_an_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    std::fs::write(&path, "[drawer]\nslide_secs = \"fast\"\n").expect("Failed to write file");

    assert!(config::load_from_path(&path).is_err());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn normalized_config_survives_a_save_load_cycle() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    // Broken by hand: too few links, a negative duration.
    let mut config = Config::default();
    config.gallery.links.truncate(2);
    config.drawer.slide_secs = -3.0;
    let warning = config.normalize();
    assert!(warning.is_some());

    config::save_to_path(&config, &path).expect("Failed to write config file");
    let mut restored = config::load_from_path(&path).expect("Failed to load config");
    assert!(restored.normalize().is_none());
    assert_eq!(restored.gallery.links.len(), GALLERY_LEN);
    assert_eq!(restored.drawer.slide_secs, 0.0);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn gallery_pipeline_is_deterministic_end_to_end() {
    let links = kefka::config::defaults::gallery_links();

    let entries_a = gallery::entries(&links);
    let entries_b = gallery::entries(&links);
    assert_eq!(entries_a, entries_b);

    let layout_a = masonry::pack(&entries_a, 3, 320.0, 16.0);
    let layout_b = masonry::pack(&entries_b, 3, 320.0, 16.0);
    assert_eq!(layout_a, layout_b);

    // Every entry lands somewhere, and a deep enough scroll reveals all.
    assert_eq!(layout_a.slots.len(), GALLERY_LEN);
    let visible = masonry::visible_indices(&layout_a, 1500.0, 1500.0 + layout_a.height, 600.0);
    assert_eq!(visible.len(), GALLERY_LEN);
}

#[test]
fn drawer_scenario_open_hover_navigate_close() {
    let config = config::DrawerConfig::default();
    let now = Instant::now();
    let mut state = navbar::State::new(&config, now);

    // Open the drawer.
    navbar::update(
        &mut state,
        navbar::Message::ToggleDrawer,
        &config.items,
        now,
    );
    assert!(state.is_open());

    // Hover the third entry, then press it.
    navbar::update(
        &mut state,
        navbar::Message::ItemHovered(2),
        &config.items,
        now,
    );
    assert_eq!(state.hovered(), Some(2));

    let event = navbar::update(
        &mut state,
        navbar::Message::ItemPressed(2),
        &config.items,
        now,
    );
    assert!(matches!(event, navbar::Event::OpenLink(href) if href == config.items[2].href));

    // The scrim click closes the drawer regardless of the hover state.
    navbar::update(
        &mut state,
        navbar::Message::CloseDrawer,
        &config.items,
        now,
    );
    assert!(!state.is_open());

    // Toggle parity from a known state: two more toggles land closed again.
    navbar::update(
        &mut state,
        navbar::Message::ToggleDrawer,
        &config.items,
        now,
    );
    navbar::update(
        &mut state,
        navbar::Message::ToggleDrawer,
        &config.items,
        now,
    );
    assert!(!state.is_open());
}
