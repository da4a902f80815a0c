// SPDX-License-Identifier: MPL-2.0
//! Gallery entries: deterministic image/link tuples for the masonry grid.
//!
//! Entries are derived, not stored. Index `i` maps to a placeholder image
//! request whose seed and dimensions are fixed by position, plus an outbound
//! link taken from the configured 9-element list. Rebuilding the list always
//! yields identical entries.

pub mod masonry;

/// Number of gallery entries. The outbound link list must match this length.
pub const GALLERY_LEN: usize = 9;

/// Base URL of the placeholder image service.
const IMAGE_SERVICE: &str = "https://picsum.photos";

/// Orientation of a gallery image; alternates with the entry index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aspect {
    Landscape,
    Portrait,
}

impl Aspect {
    /// Orientation for a given entry position: even indices are landscape.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Aspect::Landscape
        } else {
            Aspect::Portrait
        }
    }

    /// Requested image dimensions in pixels.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Aspect::Landscape => (900, 600),
            Aspect::Portrait => (700, 467),
        }
    }

    /// Width-over-height ratio, used by the masonry packer to derive the
    /// rendered height from a column width.
    #[must_use]
    pub fn ratio(self) -> f32 {
        let (width, height) = self.dimensions();
        width as f32 / height as f32
    }
}

/// One tile of the gallery: where its image comes from and where it leads.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    /// Position in the grid, in `[0, GALLERY_LEN)`.
    pub index: usize,
    /// Placeholder image URL, seeded by position.
    pub url: String,
    /// Outbound link opened when the tile is clicked.
    pub link: String,
    pub aspect: Aspect,
}

impl GalleryEntry {
    /// Alt text shown when the image fails to load.
    #[must_use]
    pub fn alt_text(&self) -> String {
        format!("Random stock image {}", self.index + 1)
    }
}

/// Builds the full entry list from the configured outbound links.
///
/// Pure and restartable: the result depends only on `links`. Passing a list
/// of a different length than [`GALLERY_LEN`] is a programming error (the
/// config layer validates lengths before this is reached).
#[must_use]
pub fn entries(links: &[String]) -> Vec<GalleryEntry> {
    debug_assert_eq!(links.len(), GALLERY_LEN);

    links
        .iter()
        .enumerate()
        .map(|(index, link)| entry(index, link.clone()))
        .collect()
}

fn entry(index: usize, link: String) -> GalleryEntry {
    let aspect = Aspect::for_index(index);
    let (width, height) = aspect.dimensions();

    GalleryEntry {
        index,
        url: format!("{IMAGE_SERVICE}/seed/{}/{}/{}", index + 1, width, height),
        link,
        aspect,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn entries_are_deterministic() {
        let links = defaults::gallery_links();
        let first = entries(&links);
        let second = entries(&links);
        assert_eq!(first, second);
        assert_eq!(first.len(), GALLERY_LEN);
    }

    #[test]
    fn aspect_alternates_with_index() {
        let links = defaults::gallery_links();
        for entry in entries(&links) {
            if entry.index % 2 == 0 {
                assert_eq!(entry.aspect, Aspect::Landscape);
            } else {
                assert_eq!(entry.aspect, Aspect::Portrait);
            }
        }
    }

    #[test]
    fn url_embeds_seed_and_dimensions() {
        let links = defaults::gallery_links();
        let all = entries(&links);
        assert_eq!(all[0].url, "https://picsum.photos/seed/1/900/600");
        assert_eq!(all[1].url, "https://picsum.photos/seed/2/700/467");
        assert_eq!(all[8].url, "https://picsum.photos/seed/9/900/600");
    }

    #[test]
    fn links_follow_position() {
        let links = defaults::gallery_links();
        let all = entries(&links);
        for (i, entry) in all.iter().enumerate() {
            assert_eq!(entry.link, links[i]);
        }
    }

    #[test]
    fn landscape_ratio_is_wider_than_portrait() {
        assert!(Aspect::Landscape.ratio() > 1.0);
        assert!(Aspect::Portrait.ratio() > 1.0);
        assert!(Aspect::Landscape.ratio() > Aspect::Portrait.ratio());
    }

    #[test]
    fn alt_text_is_one_based() {
        let links = defaults::gallery_links();
        let all = entries(&links);
        assert_eq!(all[0].alt_text(), "Random stock image 1");
        assert_eq!(all[8].alt_text(), "Random stock image 9");
    }
}
