//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Tile matrix dimensions per zoom level

use crate::error::{Error, Result};
use crate::tile_matrix::TileMatrixDimensions;

pub trait TileScheme {
    /// Tile matrix dimensions of a zoom level
    fn dimensions(&self, zoom: u8) -> Result<TileMatrixDimensions>;
    /// Lowest and highest zoom level (inclusive)
    fn zoom_range(&self) -> (u8, u8);
}

/// Tile scheme doubling the number of columns and rows with every zoom level
#[derive(PartialEq, Clone, Debug)]
pub struct ZoomTimesTwo {
    min_zoom: u8,
    max_zoom: u8,
    level_dimensions: Vec<TileMatrixDimensions>,
}

impl ZoomTimesTwo {
    /// `base_width` and `base_height` are the tile matrix dimensions at `min_zoom`
    pub fn new(min_zoom: u8, max_zoom: u8, base_width: u32, base_height: u32) -> Result<ZoomTimesTwo> {
        if min_zoom > max_zoom {
            return Err(Error::invalid(
                "Minimum zoom level must be less than or equal to the maximum",
            ));
        }
        if base_width == 0 || base_height == 0 {
            return Err(Error::invalid(
                "The base tile matrix dimensions must be greater than 0",
            ));
        }
        let factor = 1u32
            .checked_shl(u32::from(max_zoom - min_zoom))
            .ok_or_else(|| Error::invalid("Zoom level range causes an overflow of tile numbers"))?;
        if base_width.checked_mul(factor).is_none() || base_height.checked_mul(factor).is_none() {
            return Err(Error::invalid(
                "This combination of base dimensions and zoom levels causes an overflow of tile numbers",
            ));
        }

        let level_dimensions = (0..=(max_zoom - min_zoom))
            .map(|level| TileMatrixDimensions::new(base_width << level, base_height << level))
            .collect::<Result<Vec<_>>>()?;
        Ok(ZoomTimesTwo {
            min_zoom,
            max_zoom,
            level_dimensions,
        })
    }
}

impl TileScheme for ZoomTimesTwo {
    fn dimensions(&self, zoom: u8) -> Result<TileMatrixDimensions> {
        if zoom < self.min_zoom || zoom > self.max_zoom {
            return Err(Error::invalid(format!(
                "Zoom level must be in the range [{}, {}]",
                self.min_zoom, self.max_zoom
            )));
        }
        Ok(self.level_dimensions[(zoom - self.min_zoom) as usize])
    }
    fn zoom_range(&self) -> (u8, u8) {
        (self.min_zoom, self.max_zoom)
    }
}
