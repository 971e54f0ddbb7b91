//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile iterators

use crate::bounding_box::BoundingBox;
use crate::tile_origin::TileOrigin;
use crate::tile_range::{tile_range, TileRange};
use crate::tile_scheme::TileScheme;

/// Level-by-level iterator
pub struct TileIterator {
    zoom: u8,
    column: u32,
    row: u32,
    /// Non-empty tile ranges with their zoom level
    levels: Vec<(u8, TileRange)>,
    level: usize,
    finished: bool,
}

impl TileIterator {
    /// Tiles intersecting `extent` from `min_zoom` up to and including `max_zoom`.
    ///
    /// The zoom range is clipped to the range of the tile scheme.
    pub fn new(
        scheme: &dyn TileScheme,
        min_zoom: u8,
        max_zoom: u8,
        bounds: &BoundingBox,
        origin: TileOrigin,
        extent: &BoundingBox,
    ) -> TileIterator {
        let (scheme_min, scheme_max) = scheme.zoom_range();
        let min_zoom = min_zoom.max(scheme_min);
        let max_zoom = max_zoom.min(scheme_max);
        let levels = if min_zoom <= max_zoom {
            (min_zoom..=max_zoom)
                .filter_map(|zoom| {
                    let dimensions = scheme.dimensions(zoom).ok()?;
                    let range = tile_range(bounds, &dimensions, origin, extent);
                    if range.is_empty() {
                        None
                    } else {
                        Some((zoom, range))
                    }
                })
                .collect()
        } else {
            Vec::new()
        };
        TileIterator::from_levels(levels)
    }

    fn from_levels(levels: Vec<(u8, TileRange)>) -> TileIterator {
        match levels.first() {
            Some(&(zoom, range)) => TileIterator {
                zoom,
                column: range.min_column,
                row: range.min_row,
                levels,
                level: 0,
                finished: false,
            },
            // Return "empty" iterator for invalid parameters
            None => TileIterator {
                zoom: 0,
                column: 0,
                row: 0,
                levels,
                level: 0,
                finished: true,
            },
        }
    }
}

impl Iterator for TileIterator {
    /// Current tile `(zoom, column, row)`
    type Item = (u8, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.zoom, self.column, self.row);
        let range = &self.levels[self.level].1;
        if self.row < range.max_row - 1 {
            self.row += 1;
        } else if self.column < range.max_column - 1 {
            self.column += 1;
            self.row = range.min_row;
        } else if self.level + 1 < self.levels.len() {
            self.level += 1;
            let (zoom, range) = self.levels[self.level];
            self.zoom = zoom;
            self.column = range.min_column;
            self.row = range.min_row;
        } else {
            self.finished = true;
        }
        Some(current)
    }
}
