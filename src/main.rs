//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;
use tile_crs::{
    factory, BoundingBox, CoordinateReferenceSystem, CrsCoordinate, CrsProfile,
    TileIterator, TileMatrixDimensions, TileOrigin,
};
use tile_store::core::{read_config, ApplicationCfg, Config};
use tile_store::store::{TileStore, TileStores};
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn parse_numbers<T: std::str::FromStr>(args: &ArgMatches<'_>, name: &str, count: usize) -> Result<Vec<T>, String> {
    let numlist = args
        .value_of(name)
        .ok_or_else(|| format!("Missing '{}'", name))?;
    let values = numlist
        .split(',')
        .map(|v| v.trim().parse::<T>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format!("Error parsing '{}' as list of numbers", name))?;
    if values.len() != count {
        return Err(format!("Expected {} values for '{}'", count, name));
    }
    Ok(values)
}

fn profile_from_args(args: &ArgMatches<'_>) -> Result<&'static CrsProfile, String> {
    let crs = args
        .value_of("crs")
        .unwrap_or("EPSG:3857")
        .parse::<CoordinateReferenceSystem>()
        .map_err(|e| e.to_string())?;
    factory::create(&crs).map_err(|e| e.to_string())
}

fn origin_from_args(args: &ArgMatches<'_>) -> Result<TileOrigin, String> {
    args.value_of("origin")
        .unwrap_or("UpperLeft")
        .parse::<TileOrigin>()
        .map_err(|e| e.to_string())
}

fn extent_from_args(args: &ArgMatches<'_>, profile: &CrsProfile) -> Result<BoundingBox, String> {
    if args.value_of("extent").is_none() {
        return Ok(profile.bounds());
    }
    let arr: Vec<f64> = parse_numbers(args, "extent", 4)?;
    BoundingBox::new(arr[0], arr[1], arr[2], arr[3]).map_err(|e| e.to_string())
}

fn dimensions_from_args(args: &ArgMatches<'_>) -> Result<TileMatrixDimensions, String> {
    let arr: Vec<u32> = parse_numbers(args, "dims", 2)?;
    TileMatrixDimensions::new(arr[0], arr[1]).map_err(|e| e.to_string())
}

fn zoom_from_args(args: &ArgMatches<'_>, name: &str) -> Result<Option<u8>, String> {
    args.value_of(name)
        .map(|s| {
            s.parse::<u8>()
                .map_err(|_| format!("Error parsing '{}' as integer value", name))
        })
        .transpose()
}

fn tile(args: &ArgMatches<'_>) -> Result<(), String> {
    let profile = profile_from_args(args)?;
    let coord: Vec<f64> = parse_numbers(args, "coord", 2)?;
    let coordinate = CrsCoordinate::new(
        coord[0],
        coord[1],
        profile.coordinate_reference_system().clone(),
    );
    let tile = profile
        .crs_to_tile_coordinate(
            &coordinate,
            &extent_from_args(args, profile)?,
            &dimensions_from_args(args)?,
            origin_from_args(args)?,
        )
        .map_err(|e| e.to_string())?;
    println!("{} {}", tile.x, tile.y);
    Ok(())
}

fn coord(args: &ArgMatches<'_>) -> Result<(), String> {
    let profile = profile_from_args(args)?;
    let tile: Vec<u32> = parse_numbers(args, "tile", 2)?;
    let coordinate = profile.tile_to_crs_coordinate(
        tile[0],
        tile[1],
        &extent_from_args(args, profile)?,
        &dimensions_from_args(args)?,
        origin_from_args(args)?,
    );
    println!("{} {}", coordinate.x(), coordinate.y());
    Ok(())
}

fn geodetic(args: &ArgMatches<'_>) -> Result<(), String> {
    let profile = profile_from_args(args)?;
    let coord: Vec<f64> = parse_numbers(args, "coord", 2)?;
    let coordinate = CrsCoordinate::new(
        coord[0],
        coord[1],
        profile.coordinate_reference_system().clone(),
    );
    let lonlat = if args.is_present("inverse") {
        profile.from_global_geodetic(coordinate.coordinate())
    } else {
        profile.to_global_geodetic(coordinate.coordinate())
    };
    println!("{} {}", lonlat.x, lonlat.y);
    Ok(())
}

fn profiles() {
    for crs in factory::registered_systems() {
        if let Ok(profile) = factory::create(crs) {
            println!(
                "{} {} bounds: {} precision: {}",
                crs,
                profile.name(),
                profile.bounds(),
                profile.precision()
            );
        }
    }
}

fn stores_from_args(args: &ArgMatches<'_>) -> Result<TileStores, String> {
    let path = args.value_of("config").ok_or("Missing config file")?;
    let config: ApplicationCfg = read_config(path)?;
    TileStores::from_config(&config)
}

/// Tile address from `--tile z/x/y` or `--coord x,y --zoom z`
fn tile_address(args: &ArgMatches<'_>, store: &dyn TileStore) -> Result<(u8, u32, u32), String> {
    if let Some(tile) = args.value_of("tile") {
        let parts: Vec<&str> = tile.split('/').collect();
        if parts.len() != 3 {
            return Err(format!("Expected tile as z/x/y, got '{}'", tile));
        }
        let zoom = parts[0]
            .parse::<u8>()
            .map_err(|_| "Error parsing zoom level as integer value".to_string())?;
        let column = parts[1]
            .parse::<u32>()
            .map_err(|_| "Error parsing column as integer value".to_string())?;
        let row = parts[2]
            .parse::<u32>()
            .map_err(|_| "Error parsing row as integer value".to_string())?;
        return Ok((zoom, column, row));
    }
    let zoom = zoom_from_args(args, "zoom")?.ok_or("Missing 'zoom'")?;
    let coord: Vec<f64> = parse_numbers(args, "coord", 2)?;
    let coordinate = CrsCoordinate::new(coord[0], coord[1], store.metadata().crs().clone());
    let tile = store
        .metadata()
        .tile_coordinate(&coordinate, zoom)
        .map_err(|e| e.to_string())?;
    Ok((zoom, tile.x, tile.y))
}

fn put(args: &ArgMatches<'_>) -> Result<(), String> {
    let stores = stores_from_args(args)?;
    let store = stores
        .get(args.value_of("tileset").unwrap_or(""))
        .map_err(|e| e.to_string())?;
    let (zoom, column, row) = tile_address(args, store)?;
    let mut data = Vec::new();
    let read = match args.value_of("file") {
        Some(path) => File::open(path).and_then(|mut f| f.read_to_end(&mut data)),
        None => io::stdin().read_to_end(&mut data),
    };
    read.map_err(|e| format!("Error reading tile data: {}", e))?;
    store
        .put_tile(column, row, zoom, &data)
        .map_err(|e| e.to_string())?;
    info!("Stored tile {}/{}/{} ({} bytes)", zoom, column, row, data.len());
    Ok(())
}

fn get(args: &ArgMatches<'_>) -> Result<(), String> {
    let stores = stores_from_args(args)?;
    let store = stores
        .get(args.value_of("tileset").unwrap_or(""))
        .map_err(|e| e.to_string())?;
    let (zoom, column, row) = tile_address(args, store)?;
    let data = store
        .get_tile(column, row, zoom)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Tile {}/{}/{} not found", zoom, column, row))?;
    let written = match args.value_of("file") {
        Some(path) => File::create(path).and_then(|mut f| f.write_all(&data)),
        None => io::stdout().write_all(&data),
    };
    written.map_err(|e| format!("Error writing tile data: {}", e))
}

fn info(args: &ArgMatches<'_>) -> Result<(), String> {
    let stores = stores_from_args(args)?;
    let names = match args.value_of("tileset") {
        Some(name) => vec![name],
        None => stores.names(),
    };
    for name in names {
        let store = stores.get(name).map_err(|e| e.to_string())?;
        println!("{}", store.metadata().to_json());
    }
    Ok(())
}

fn tiles(args: &ArgMatches<'_>) -> Result<(), String> {
    let stores = stores_from_args(args)?;
    let store = stores
        .get(args.value_of("tileset").unwrap_or(""))
        .map_err(|e| e.to_string())?;
    let metadata = store.metadata();
    let (scheme_min, scheme_max) = tile_crs::TileScheme::zoom_range(metadata.scheme());
    let minzoom = zoom_from_args(args, "minzoom")?.unwrap_or(scheme_min);
    let maxzoom = zoom_from_args(args, "maxzoom")?.unwrap_or(scheme_max);
    let extent = if args.value_of("extent").is_some() {
        let profile = metadata.profile().map_err(|e| e.to_string())?;
        extent_from_args(args, profile)?
    } else {
        *metadata.bounds()
    };
    let missing = args.is_present("missing");
    let tiles = TileIterator::new(
        metadata.scheme(),
        minzoom,
        maxzoom,
        metadata.bounds(),
        metadata.origin(),
        &extent,
    );
    for (zoom, column, row) in tiles {
        if !missing || !store.exists(column, row, zoom) {
            println!("{}/{}/{}", zoom, column, row);
        }
    }
    Ok(())
}

fn main() {
    dotenv().ok();
    // http://kbknapp.github.io/clap-rs/clap/
    let mut app = App::new("gpkg_tiler")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Tile addressing in GeoPackage coordinate reference systems")
        .subcommand(SubCommand::with_name("tile")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--crs=[AUTHORITY:ID] 'Coordinate reference system (Default: EPSG:3857)'
                                              --coord=<x,y> 'Coordinate in CRS units'
                                              --dims=<width,height> 'Tile matrix dimensions'
                                              --origin=[UpperLeft|LowerLeft|UpperRight|LowerRight] 'Tile origin (Default: UpperLeft)'
                                              --extent=[minx,miny,maxx,maxy] 'Tile matrix bounds (Default: CRS bounds)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tile containing a coordinate"))
        .subcommand(SubCommand::with_name("coord")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--crs=[AUTHORITY:ID] 'Coordinate reference system (Default: EPSG:3857)'
                                              --tile=<column,row> 'Tile column and row'
                                              --dims=<width,height> 'Tile matrix dimensions'
                                              --origin=[UpperLeft|LowerLeft|UpperRight|LowerRight] 'Tile origin (Default: UpperLeft)'
                                              --extent=[minx,miny,maxx,maxy] 'Tile matrix bounds (Default: CRS bounds)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Origin corner of a tile in CRS units"))
        .subcommand(SubCommand::with_name("geodetic")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--crs=[AUTHORITY:ID] 'Coordinate reference system (Default: EPSG:3857)'
                                              --coord=<x,y> 'Coordinate in CRS units (longitude/latitude with --inverse)'
                                              --inverse 'Convert longitude/latitude to CRS units'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Convert between CRS units and longitude/latitude"))
        .subcommand(SubCommand::with_name("profiles")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("List supported coordinate reference systems"))
        .subcommand(SubCommand::with_name("info")
                        .args_from_usage("-c, --config=<FILE> 'Load from custom config file'
                                              --tileset=[NAME] 'Tileset name'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Tile set metadata"))
        .subcommand(SubCommand::with_name("put")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=<FILE> 'Load from custom config file'
                                              --tileset=<NAME> 'Tileset name'
                                              --tile=[z/x/y] 'Tile address in the tile set origin'
                                              --coord=[x,y] 'Coordinate in CRS units'
                                              --zoom=[LEVEL] 'Zoom level of --coord'
                                              --file=[FILE] 'Tile data (Default: stdin)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Store a tile"))
        .subcommand(SubCommand::with_name("get")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=<FILE> 'Load from custom config file'
                                              --tileset=<NAME> 'Tileset name'
                                              --tile=[z/x/y] 'Tile address in the tile set origin'
                                              --coord=[x,y] 'Coordinate in CRS units'
                                              --zoom=[LEVEL] 'Zoom level of --coord'
                                              --file=[FILE] 'Output file (Default: stdout)'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Fetch a tile"))
        .subcommand(SubCommand::with_name("tiles")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("-c, --config=<FILE> 'Load from custom config file'
                                              --tileset=<NAME> 'Tileset name'
                                              --minzoom=[LEVEL] 'Minimum zoom level'
                                              --maxzoom=[LEVEL] 'Maximum zoom level'
                                              --extent=[minx,miny,maxx,maxy] 'Extent of tiles in CRS units'
                                              --missing 'Only tiles missing in the store'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("List tiles of a tile set"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => {
            let result = match matches.subcommand() {
                ("tile", Some(sub_m)) => {
                    init_logger(sub_m);
                    tile(sub_m)
                }
                ("coord", Some(sub_m)) => {
                    init_logger(sub_m);
                    coord(sub_m)
                }
                ("geodetic", Some(sub_m)) => {
                    init_logger(sub_m);
                    geodetic(sub_m)
                }
                ("profiles", Some(sub_m)) => {
                    init_logger(sub_m);
                    profiles();
                    Ok(())
                }
                ("info", Some(sub_m)) => {
                    init_logger(sub_m);
                    info(sub_m)
                }
                ("put", Some(sub_m)) => {
                    init_logger(sub_m);
                    put(sub_m)
                }
                ("get", Some(sub_m)) => {
                    init_logger(sub_m);
                    get(sub_m)
                }
                ("tiles", Some(sub_m)) => {
                    init_logger(sub_m);
                    tiles(sub_m)
                }
                ("genconfig", Some(sub_m)) => {
                    init_logger(sub_m);
                    println!("{}", TileStores::gen_config());
                    Ok(())
                }
                _ => {
                    let _ = app.print_help();
                    println!("");
                    Ok(())
                }
            };
            if let Err(e) = result {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
