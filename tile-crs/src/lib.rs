//! A library for addressing map tiles in coordinate reference systems
//!
//! ## Profiles
//!
//! ```rust
//! use tile_crs::{factory, CrsCoordinate, TileMatrixDimensions, TileOrigin};
//!
//! let profile = factory::create_from_code("EPSG", 4326).unwrap();
//! let dimensions = TileMatrixDimensions::new(2, 1).unwrap();
//! let coordinate = CrsCoordinate::new(
//!     10.0,
//!     45.0,
//!     profile.coordinate_reference_system().clone(),
//! );
//! let tile = profile
//!     .crs_to_tile_coordinate(&coordinate, &profile.bounds(), &dimensions, TileOrigin::UpperLeft)
//!     .unwrap();
//! assert_eq!((tile.x, tile.y), (1, 0));
//!
//! let corner = profile.tile_to_crs_coordinate(1, 0, &profile.bounds(), &dimensions, TileOrigin::UpperLeft);
//! assert_eq!((corner.x(), corner.y()), (0.0, 90.0));
//! ```
//!
//! ## Tile iterators
//!
//! ```rust
//! use tile_crs::{factory, TileIterator, TileOrigin, ZoomTimesTwo};
//!
//! let profile = factory::create_from_code("epsg", 3857).unwrap();
//! let scheme = ZoomTimesTwo::new(0, 2, 1, 1).unwrap();
//! let bounds = profile.bounds();
//! let tiles = TileIterator::new(&scheme, 0, 2, &bounds, TileOrigin::UpperLeft, &bounds);
//! for (zoom, column, row) in tiles {
//!     println!("Tile {}/{}/{}", zoom, column, row);
//! }
//! ```
//!
//! ## Geographic coordinates
//!
//! ```rust
//! use tile_crs::{factory, Coordinate};
//!
//! let profile = factory::create_from_code("EPSG", 3395).unwrap();
//! let meters = profile.from_global_geodetic(&Coordinate::new(8.5417, 47.3769));
//! let degrees = profile.to_global_geodetic(&meters);
//! assert!((degrees.y - 47.3769).abs() < 1e-9);
//! ```

#[macro_use]
extern crate lazy_static;

mod bounding_box;
pub mod bounds_utility;
mod coordinate;
mod ellipsoidal_mercator;
mod error;
pub mod factory;
mod geodetic;
mod profile;
mod spherical_mercator;
mod tile_iterator;
mod tile_matrix;
mod tile_origin;
mod tile_range;
mod tile_scheme;

#[cfg(test)]
mod ellipsoidal_mercator_test;
#[cfg(test)]
mod profile_test;

pub use bounding_box::BoundingBox;
pub use coordinate::{Coordinate, CoordinateReferenceSystem, CrsCoordinate};
pub use ellipsoidal_mercator::EllipsoidalMercatorCrsProfile;
pub use error::{Error, Result};
pub use geodetic::GlobalGeodeticCrsProfile;
pub use profile::CrsProfile;
pub use spherical_mercator::SphericalMercatorCrsProfile;
pub use tile_iterator::TileIterator;
pub use tile_matrix::TileMatrixDimensions;
pub use tile_origin::{Horizontal, TileOrigin, Vertical};
pub use tile_range::{tile_range, TileRange};
pub use tile_scheme::{TileScheme, ZoomTimesTwo};
