//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::{Result, StoreError};
use tile_crs::{
    factory, BoundingBox, Coordinate, CoordinateReferenceSystem, CrsCoordinate, CrsProfile,
    TileMatrixDimensions, TileOrigin, TileScheme, ZoomTimesTwo,
};

/// Persisted description of a tile set
#[derive(Clone, Debug)]
pub struct TileSetMetadata {
    name: String,
    crs: CoordinateReferenceSystem,
    bounds: BoundingBox,
    origin: TileOrigin,
    scheme: ZoomTimesTwo,
    image_format: String,
}

impl TileSetMetadata {
    /// Fails for unsupported coordinate reference systems and for bounds
    /// exceeding the world bounds of the CRS.
    pub fn new(
        name: &str,
        crs: CoordinateReferenceSystem,
        bounds: BoundingBox,
        origin: TileOrigin,
        scheme: ZoomTimesTwo,
        image_format: &str,
    ) -> Result<TileSetMetadata> {
        let world = factory::create(&crs)?.bounds();
        if !world.contains_bounds(&bounds) {
            return Err(StoreError::InvalidBounds { bounds, world, crs });
        }
        Ok(TileSetMetadata {
            name: name.to_string(),
            crs,
            bounds,
            origin,
            scheme,
            image_format: image_format.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn crs(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }
    pub fn origin(&self) -> TileOrigin {
        self.origin
    }
    pub fn scheme(&self) -> &ZoomTimesTwo {
        &self.scheme
    }
    /// File extension of the stored tiles
    pub fn image_format(&self) -> &str {
        &self.image_format
    }

    pub fn profile(&self) -> Result<&'static CrsProfile> {
        Ok(factory::create(&self.crs)?)
    }

    pub fn dimensions(&self, zoom: u8) -> Result<TileMatrixDimensions> {
        Ok(self.scheme.dimensions(zoom)?)
    }

    /// Tile (column, row) at `zoom` containing a coordinate
    pub fn tile_coordinate(&self, coordinate: &CrsCoordinate, zoom: u8) -> Result<Coordinate<u32>> {
        let dimensions = self.dimensions(zoom)?;
        let tile = self.profile()?.crs_to_tile_coordinate(
            coordinate,
            &self.bounds,
            &dimensions,
            self.origin,
        )?;
        Ok(tile)
    }

    /// Footprint of a tile in CRS units
    pub fn tile_bounds(&self, column: u32, row: u32, zoom: u8) -> Result<BoundingBox> {
        let dimensions = self.dimensions(zoom)?;
        if !dimensions.contains(column, row) {
            return Err(tile_crs::Error::InvalidArgument(format!(
                "Tile {}/{}/{} is outside of the tile matrix {}",
                zoom, column, row, dimensions
            ))
            .into());
        }
        let profile = self.profile()?;
        let near = profile.tile_to_crs_coordinate(column, row, &self.bounds, &dimensions, self.origin);
        let far = profile.tile_to_crs_coordinate(
            column + 1,
            row + 1,
            &self.bounds,
            &dimensions,
            self.origin,
        );
        let bounds = BoundingBox::new(
            near.x().min(far.x()),
            near.y().min(far.y()),
            near.x().max(far.x()),
            near.y().max(far.y()),
        )?;
        Ok(bounds)
    }

    /// Tile set description as JSON
    pub fn to_json(&self) -> serde_json::Value {
        let (minzoom, maxzoom) = self.scheme.zoom_range();
        let (base_width, base_height) = self
            .scheme
            .dimensions(minzoom)
            .map(|dims| (dims.width(), dims.height()))
            .unwrap_or((1, 1));
        json!({
            "name": self.name,
            "crs": self.crs.to_string(),
            "bounds": [
                self.bounds.min_x(),
                self.bounds.min_y(),
                self.bounds.max_x(),
                self.bounds.max_y()
            ],
            "origin": self.origin.to_string(),
            "minzoom": minzoom,
            "maxzoom": maxzoom,
            "base_width": base_width,
            "base_height": base_height,
            "format": self.image_format,
        })
    }
}
