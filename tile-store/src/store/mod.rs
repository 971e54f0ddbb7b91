//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod metadata;
pub mod store;
pub mod tmsstore;


pub use self::metadata::TileSetMetadata;
pub use self::store::TileStore;
pub use self::tmsstore::TmsStore;
use crate::core::ApplicationCfg;
use crate::core::Config;
use crate::error::{self, StoreError};

/// Tile stores of all configured tile sets
#[derive(Clone, Debug)]
pub struct TileStores {
    stores: Vec<TmsStore>,
}

impl TileStores {
    pub fn get(&self, name: &str) -> error::Result<&TmsStore> {
        self.stores
            .iter()
            .find(|store| store.metadata().name() == name)
            .ok_or_else(|| StoreError::UnknownTileSet(name.to_string()))
    }
    pub fn names(&self) -> Vec<&str> {
        self.stores
            .iter()
            .map(|store| store.metadata().name())
            .collect()
    }
}

impl<'a> Config<'a, ApplicationCfg> for TileStores {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let mut stores = Vec::new();
        for tileset_cfg in config.tilesets.iter() {
            if stores
                .iter()
                .any(|store: &TmsStore| store.metadata().name() == tileset_cfg.name)
            {
                return Err(format!("Duplicate tileset '{}'", tileset_cfg.name));
            }
            let metadata = TileSetMetadata::from_config(tileset_cfg)?;
            stores.push(TmsStore::new(&config.store.base, metadata));
        }
        Ok(TileStores { stores })
    }
    fn gen_config() -> String {
        let toml = r#"
[store]
base = "/tmp/tiles"
"#;
        let mut config = toml.to_string();
        config.push_str(&TileSetMetadata::gen_config());
        config
    }
}
