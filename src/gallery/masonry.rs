// SPDX-License-Identifier: MPL-2.0
//! Masonry packing for the gallery grid.
//!
//! The web original delegates this to CSS `columns`; a desktop renderer has
//! to own the layout. The packer is deterministic: entries go to the
//! currently shortest column (leftmost on ties) in index order, so the same
//! viewport always produces the same grid. Slot positions double as the
//! geometry used to decide when a tile has scrolled into view.

use super::GalleryEntry;

/// Breakpoints loosely matching the original's responsive column classes.
const TWO_COLUMN_MIN_WIDTH: f32 = 640.0;
const THREE_COLUMN_MIN_WIDTH: f32 = 1024.0;

/// Placement of a single entry within the packed grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Entry index this slot belongs to.
    pub index: usize,
    /// Column the entry landed in.
    pub column: usize,
    /// Distance from the top of the gallery section, in pixels.
    pub top: f32,
    /// Rendered tile height, derived from the column width and aspect ratio.
    pub height: f32,
}

/// A packed grid: per-entry slots plus overall geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub columns: usize,
    pub column_width: f32,
    pub spacing: f32,
    /// Slots in entry order (`slots[i].index == i`).
    pub slots: Vec<Slot>,
    /// Height of the tallest column.
    pub height: f32,
}

impl Layout {
    /// Entry indices of one column, ordered top to bottom.
    #[must_use]
    pub fn column_entries(&self, column: usize) -> Vec<usize> {
        let mut entries: Vec<&Slot> = self
            .slots
            .iter()
            .filter(|slot| slot.column == column)
            .collect();
        entries.sort_by(|a, b| a.top.total_cmp(&b.top));
        entries.iter().map(|slot| slot.index).collect()
    }
}

/// Number of masonry columns for a given viewport width.
#[must_use]
pub fn column_count(viewport_width: f32) -> usize {
    if viewport_width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if viewport_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Packs entries into `columns` columns of `column_width`, separated by
/// `spacing` both horizontally and vertically.
#[must_use]
pub fn pack(entries: &[GalleryEntry], columns: usize, column_width: f32, spacing: f32) -> Layout {
    debug_assert!(columns > 0);

    let mut column_heights = vec![0.0f32; columns.max(1)];
    let mut slots = Vec::with_capacity(entries.len());

    for entry in entries {
        let height = column_width / entry.aspect.ratio();

        // Shortest column wins; ties resolve to the leftmost.
        let (column, _) = column_heights
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap_or((0, &0.0));

        slots.push(Slot {
            index: entry.index,
            column,
            top: column_heights[column],
            height,
        });

        column_heights[column] += height + spacing;
    }

    let height = column_heights
        .iter()
        .fold(0.0f32, |max, &h| max.max((h - spacing).max(0.0)));

    Layout {
        columns,
        column_width,
        spacing,
        slots,
        height,
    }
}

/// Entry indices whose top edge has entered the scrolled viewport.
///
/// `gallery_top` is the distance from the top of the page content to the
/// gallery section; `scroll_top` is the current scroll offset. A tile counts
/// as visible as soon as its top edge rises above the bottom of the window,
/// mirroring the original's in-view trigger.
#[must_use]
pub fn visible_indices(
    layout: &Layout,
    gallery_top: f32,
    scroll_top: f32,
    viewport_height: f32,
) -> Vec<usize> {
    let reveal_line = scroll_top + viewport_height;

    layout
        .slots
        .iter()
        .filter(|slot| gallery_top + slot.top < reveal_line)
        .map(|slot| slot.index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;
    use crate::gallery;
    use crate::test_utils::assert_abs_diff_eq;

    fn sample_entries() -> Vec<GalleryEntry> {
        gallery::entries(&defaults::gallery_links())
    }

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(column_count(320.0), 1);
        assert_eq!(column_count(639.9), 1);
        assert_eq!(column_count(640.0), 2);
        assert_eq!(column_count(1023.9), 2);
        assert_eq!(column_count(1024.0), 3);
        assert_eq!(column_count(2560.0), 3);
    }

    #[test]
    fn pack_is_deterministic() {
        let entries = sample_entries();
        let a = pack(&entries, 3, 300.0, 16.0);
        let b = pack(&entries, 3, 300.0, 16.0);
        assert_eq!(a, b);
    }

    #[test]
    fn slots_stay_in_entry_order() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);
        for (i, slot) in layout.slots.iter().enumerate() {
            assert_eq!(slot.index, i);
        }
    }

    #[test]
    fn single_column_stacks_sequentially() {
        let entries = sample_entries();
        let layout = pack(&entries, 1, 300.0, 16.0);

        let mut expected_top = 0.0;
        for slot in &layout.slots {
            assert_eq!(slot.column, 0);
            assert_abs_diff_eq!(slot.top, expected_top, epsilon = 0.01);
            expected_top += slot.height + 16.0;
        }
    }

    #[test]
    fn entries_go_to_shortest_column() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        // Re-simulate the packing rule and verify each placement.
        let mut heights = [0.0f32; 3];
        for slot in &layout.slots {
            let shortest = heights
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.total_cmp(b))
                .map(|(i, _)| i)
                .unwrap();
            assert_eq!(slot.column, shortest);
            heights[slot.column] += slot.height + 16.0;
        }
    }

    #[test]
    fn tile_height_follows_aspect_ratio() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        // Landscape 900x600 at width 300 renders 200 tall.
        assert_abs_diff_eq!(layout.slots[0].height, 200.0, epsilon = 0.01);
        // Portrait 700x467 at width 300 renders just over 200 tall.
        assert_abs_diff_eq!(layout.slots[1].height, 300.0 * 467.0 / 700.0, epsilon = 0.01);
    }

    #[test]
    fn layout_height_is_tallest_column() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        let mut heights = [0.0f32; 3];
        for slot in &layout.slots {
            heights[slot.column] = heights[slot.column].max(slot.top + slot.height);
        }
        let tallest = heights.iter().fold(0.0f32, |m, &h| m.max(h));
        assert_abs_diff_eq!(layout.height, tallest, epsilon = 0.01);
    }

    #[test]
    fn nothing_visible_above_the_gallery() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        // Viewport ends before the gallery starts.
        let visible = visible_indices(&layout, 2000.0, 0.0, 800.0);
        assert!(visible.is_empty());
    }

    #[test]
    fn first_row_becomes_visible_at_the_reveal_line() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        // Scrolled just far enough that the gallery's first pixels show.
        let visible = visible_indices(&layout, 2000.0, 1200.1, 800.0);
        assert!(visible.contains(&0));
        assert!(visible.contains(&1));
        assert!(visible.contains(&2));
        assert!(!visible.contains(&3));
    }

    #[test]
    fn deep_scroll_reveals_everything() {
        let entries = sample_entries();
        let layout = pack(&entries, 3, 300.0, 16.0);

        let visible = visible_indices(&layout, 2000.0, 2000.0 + layout.height, 800.0);
        assert_eq!(visible.len(), entries.len());
    }
}
