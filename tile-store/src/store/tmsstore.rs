//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::Result;
use crate::store::metadata::TileSetMetadata;
use crate::store::store::TileStore;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tile_crs::TileOrigin;

/// Tile directory `<basepath>/<tileset>/<zoom>/<column>/<row>.<format>` with TMS
/// numbering (origin in the lower left corner)
#[derive(Clone, Debug)]
pub struct TmsStore {
    basepath: String,
    metadata: TileSetMetadata,
}

impl TmsStore {
    pub fn new(basepath: &str, metadata: TileSetMetadata) -> TmsStore {
        info!(
            "Tile store '{}' in {} ({}, origin {})",
            metadata.name(),
            basepath,
            metadata.crs(),
            metadata.origin()
        );
        TmsStore {
            basepath: basepath.to_string(),
            metadata,
        }
    }

    pub fn basepath(&self) -> &str {
        &self.basepath
    }

    /// File path of a tile given in the tile set's origin
    pub fn tile_path(&self, column: u32, row: u32, zoom: u8) -> Result<PathBuf> {
        let dimensions = self.metadata.dimensions(zoom)?;
        let tms = self
            .metadata
            .origin()
            .transform(TileOrigin::LowerLeft, column, row, &dimensions)?;
        let mut path = PathBuf::from(&self.basepath);
        path.push(self.metadata.name());
        path.push(zoom.to_string());
        path.push(tms.x.to_string());
        path.push(format!("{}.{}", tms.y, self.metadata.image_format()));
        Ok(path)
    }
}

impl TileStore for TmsStore {
    fn metadata(&self) -> &TileSetMetadata {
        &self.metadata
    }
    fn get_tile(&self, column: u32, row: u32, zoom: u8) -> Result<Option<Vec<u8>>> {
        let fullpath = self.tile_path(column, row, zoom)?;
        debug!("TmsStore.get_tile {}", fullpath.display());
        match File::open(&fullpath) {
            Ok(mut f) => {
                let mut data = Vec::new();
                f.read_to_end(&mut data)?;
                Ok(Some(data))
            }
            Err(ref e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
    fn put_tile(&self, column: u32, row: u32, zoom: u8, data: &[u8]) -> Result<()> {
        let fullpath = self.tile_path(column, row, zoom)?;
        debug!("TmsStore.put_tile {}", fullpath.display());
        if let Some(dir) = fullpath.parent() {
            fs::create_dir_all(dir)?;
        }
        let mut f = File::create(&fullpath)?;
        f.write_all(data)?;
        Ok(())
    }
    fn exists(&self, column: u32, row: u32, zoom: u8) -> bool {
        self.tile_path(column, row, zoom)
            .map(|fullpath| fullpath.exists())
            .unwrap_or(false)
    }
}
