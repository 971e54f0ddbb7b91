//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::profile::CrsProfile;
use crate::tile_matrix::TileMatrixDimensions;
use crate::tile_origin::{Horizontal, TileOrigin, Vertical};

/// Min and max tile numbers (max exclusive)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TileRange {
    pub min_column: u32,
    pub min_row: u32,
    pub max_column: u32,
    pub max_row: u32,
}

impl TileRange {
    pub fn is_empty(&self) -> bool {
        self.min_column >= self.max_column || self.min_row >= self.max_row
    }
    /// Number of tiles
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            u64::from(self.max_column - self.min_column) * u64::from(self.max_row - self.min_row)
        }
    }
    pub fn contains(&self, column: u32, row: u32) -> bool {
        column >= self.min_column
            && column < self.max_column
            && row >= self.min_row
            && row < self.max_row
    }
}

/// Tiles of a tile matrix intersecting `extent`, numbered from `origin`
pub fn tile_range(
    bounds: &BoundingBox,
    dimensions: &TileMatrixDimensions,
    origin: TileOrigin,
    extent: &BoundingBox,
) -> TileRange {
    // Based on mapcache_grid_compute_limits
    const EPSILON: f64 = 0.0000001;

    let extent = match bounds.intersection(extent) {
        Some(extent) => extent,
        None => return TileRange::default(),
    };
    let tile_size = CrsProfile::tile_size(bounds, dimensions);

    // distances of the near and far extent edges from the origin corner
    let (near_x, far_x) = match origin.horizontal() {
        Horizontal::Left => (extent.min_x() - bounds.min_x(), extent.max_x() - bounds.min_x()),
        Horizontal::Right => (bounds.max_x() - extent.max_x(), bounds.max_x() - extent.min_x()),
    };
    let (near_y, far_y) = match origin.vertical() {
        Vertical::Lower => (extent.min_y() - bounds.min_y(), extent.max_y() - bounds.min_y()),
        Vertical::Upper => (bounds.max_y() - extent.max_y(), bounds.max_y() - extent.min_y()),
    };

    let clamp = |value: f64, max: u32| -> u32 {
        if value < 0.0 {
            0
        } else if value > max as f64 {
            max
        } else {
            value as u32
        }
    };
    let min_column = clamp((near_x / tile_size.x + EPSILON).floor(), dimensions.width());
    let max_column = clamp((far_x / tile_size.x - EPSILON).ceil(), dimensions.width());
    let min_row = clamp((near_y / tile_size.y + EPSILON).floor(), dimensions.height());
    let max_row = clamp((far_y / tile_size.y - EPSILON).ceil(), dimensions.height());

    TileRange {
        min_column,
        min_row,
        max_column: max_column.max(min_column),
        max_row: max_row.max(min_row),
    }
}
