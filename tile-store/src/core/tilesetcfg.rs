//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{ExtentCfg, TilesetCfg};
use crate::core::Config;
use crate::store::TileSetMetadata;
use tile_crs::{factory, BoundingBox, CoordinateReferenceSystem, TileOrigin, ZoomTimesTwo};

impl ExtentCfg {
    pub fn to_bounds(&self) -> Result<BoundingBox, String> {
        BoundingBox::new(self.minx, self.miny, self.maxx, self.maxy).map_err(|e| e.to_string())
    }
}

impl<'a> Config<'a, TilesetCfg> for TileSetMetadata {
    fn from_config(cfg: &TilesetCfg) -> Result<Self, String> {
        let crs = cfg
            .crs
            .parse::<CoordinateReferenceSystem>()
            .map_err(|e| format!("Tileset '{}': {}", cfg.name, e))?;
        let bounds = match cfg.extent {
            Some(ref extent) => extent.to_bounds(),
            None => factory::create(&crs)
                .map(|profile| profile.bounds())
                .map_err(|e| e.to_string()),
        }
        .map_err(|e| format!("Tileset '{}': {}", cfg.name, e))?;
        let origin = cfg
            .origin
            .parse::<TileOrigin>()
            .map_err(|e| format!("Tileset '{}': {}", cfg.name, e))?;
        let scheme = ZoomTimesTwo::new(cfg.minzoom, cfg.maxzoom, cfg.base_width, cfg.base_height)
            .map_err(|e| format!("Tileset '{}': {}", cfg.name, e))?;
        TileSetMetadata::new(&cfg.name, crs, bounds, origin, scheme, &cfg.format)
            .map_err(|e| format!("Tileset '{}': {}", cfg.name, e))
    }
    fn gen_config() -> String {
        let toml = r#"
[[tileset]]
name = "world"
# Coordinate reference system (EPSG:4326, EPSG:3857 or EPSG:3395)
crs = "EPSG:3857"
# Tile matrix bounds in CRS units (Default: world bounds of the CRS)
#extent = { minx = -20037508.3427892, miny = -20037508.3427892, maxx = 20037508.3427892, maxy = 20037508.3427892 }
# Tile numbering origin (UpperLeft, LowerLeft, UpperRight, LowerRight)
origin = "UpperLeft"
minzoom = 0
maxzoom = 18
# Tile matrix dimensions at minzoom
base_width = 1
base_height = 1
format = "png"
"#;
        toml.to_string()
    }
}
