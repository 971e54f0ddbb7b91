//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::Result;
use crate::store::metadata::TileSetMetadata;
use tile_crs::{BoundingBox, CrsCoordinate};

/// Tile blobs of a single tile set, addressed in the tile set's origin
pub trait TileStore {
    fn metadata(&self) -> &TileSetMetadata;
    /// `None` for missing tiles
    fn get_tile(&self, column: u32, row: u32, zoom: u8) -> Result<Option<Vec<u8>>>;
    fn put_tile(&self, column: u32, row: u32, zoom: u8, data: &[u8]) -> Result<()>;
    fn exists(&self, column: u32, row: u32, zoom: u8) -> bool;

    /// Tile containing a coordinate
    fn get_tile_at(&self, coordinate: &CrsCoordinate, zoom: u8) -> Result<Option<Vec<u8>>> {
        let tile = self.metadata().tile_coordinate(coordinate, zoom)?;
        self.get_tile(tile.x, tile.y, zoom)
    }
    fn put_tile_at(&self, coordinate: &CrsCoordinate, zoom: u8, data: &[u8]) -> Result<()> {
        let tile = self.metadata().tile_coordinate(coordinate, zoom)?;
        self.put_tile(tile.x, tile.y, zoom, data)
    }

    fn tile_bounds(&self, column: u32, row: u32, zoom: u8) -> Result<BoundingBox> {
        self.metadata().tile_bounds(column, row, zoom)
    }
}
