//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub store: StoreCfg,
    #[serde(rename = "tileset", default)]
    pub tilesets: Vec<TilesetCfg>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreCfg {
    /// Base directory of the tile store
    pub base: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExtentCfg {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilesetCfg {
    pub name: String,
    /// Coordinate reference system, e.g. "EPSG:3857"
    pub crs: String,
    /// Tile matrix bounds in CRS units (Default: world bounds of the CRS)
    pub extent: Option<ExtentCfg>,
    /// Corner of the tile matrix where tile numbering starts
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default)]
    pub minzoom: u8,
    pub maxzoom: u8,
    /// Tile matrix width and height at `minzoom`
    #[serde(default = "default_base_dimension")]
    pub base_width: u32,
    #[serde(default = "default_base_dimension")]
    pub base_height: u32,
    /// Tile file extension
    #[serde(default = "default_format")]
    pub format: String,
}

pub fn default_origin() -> String {
    "UpperLeft".to_string()
}

pub fn default_base_dimension() -> u32 {
    1
}

pub fn default_format() -> String {
    "png".to_string()
}

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let env: HashMap<String, String> = env::vars().collect();
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
