//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors of tile set configuration and tile storage
#[derive(Error, Debug)]
pub enum StoreError {
    /// Coordinate or tile transformation failed
    #[error(transparent)]
    Crs(#[from] tile_crs::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown tile set '{0}'")]
    UnknownTileSet(String),

    /// Tile set bounds exceeding the world bounds of its CRS
    #[error("Tile set bounds {bounds} exceed the bounds {world} of {crs}")]
    InvalidBounds {
        bounds: tile_crs::BoundingBox,
        world: tile_crs::BoundingBox,
        crs: tile_crs::CoordinateReferenceSystem,
    },
}
