//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate reference system profiles

use crate::bounding_box::{round_to, BoundingBox};
use crate::bounds_utility;
use crate::coordinate::{Coordinate, CoordinateReferenceSystem, CrsCoordinate};
use crate::ellipsoidal_mercator::EllipsoidalMercatorCrsProfile;
use crate::error::{Error, Result};
use crate::geodetic::GlobalGeodeticCrsProfile;
use crate::spherical_mercator::SphericalMercatorCrsProfile;
use crate::tile_matrix::TileMatrixDimensions;
use crate::tile_origin::TileOrigin;

/// Fractional tile positions are rounded to this many decimal places before
/// taking the floor, so that float noise at exact tile boundaries does not
/// move a coordinate into the neighbouring tile.
const TILE_FRACTION_PRECISION: u32 = 9;

/// Supported coordinate reference systems
#[derive(PartialEq, Clone, Debug)]
pub enum CrsProfile {
    GlobalGeodetic(GlobalGeodeticCrsProfile),
    SphericalMercator(SphericalMercatorCrsProfile),
    EllipsoidalMercator(EllipsoidalMercatorCrsProfile),
}

impl CrsProfile {
    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.coordinate_reference_system(),
            CrsProfile::SphericalMercator(p) => p.coordinate_reference_system(),
            CrsProfile::EllipsoidalMercator(p) => p.coordinate_reference_system(),
        }
    }

    /// Legal coordinate domain of the CRS
    pub fn bounds(&self) -> BoundingBox {
        match self {
            CrsProfile::GlobalGeodetic(_) => GlobalGeodeticCrsProfile::BOUNDS,
            CrsProfile::SphericalMercator(_) => SphericalMercatorCrsProfile::BOUNDS,
            CrsProfile::EllipsoidalMercator(p) => p.bounds(),
        }
    }

    /// Number of significant decimal places of CRS units
    pub fn precision(&self) -> u32 {
        match self {
            CrsProfile::GlobalGeodetic(_) => GlobalGeodeticCrsProfile::PRECISION,
            CrsProfile::SphericalMercator(_) => SphericalMercatorCrsProfile::PRECISION,
            CrsProfile::EllipsoidalMercator(_) => EllipsoidalMercatorCrsProfile::PRECISION,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.name(),
            CrsProfile::SphericalMercator(p) => p.name(),
            CrsProfile::EllipsoidalMercator(p) => p.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.description(),
            CrsProfile::SphericalMercator(p) => p.description(),
            CrsProfile::EllipsoidalMercator(p) => p.description(),
        }
    }

    /// OGC WKT definition, as stored in a GeoPackage spatial reference system table
    pub fn well_known_text(&self) -> &'static str {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.well_known_text(),
            CrsProfile::SphericalMercator(p) => p.well_known_text(),
            CrsProfile::EllipsoidalMercator(p) => p.well_known_text(),
        }
    }

    /// Coordinate in CRS units to longitude/latitude in degrees
    pub fn to_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.to_global_geodetic(coordinate),
            CrsProfile::SphericalMercator(p) => p.to_global_geodetic(coordinate),
            CrsProfile::EllipsoidalMercator(p) => p.to_global_geodetic(coordinate),
        }
    }

    /// Longitude/latitude in degrees to CRS units
    pub fn from_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        match self {
            CrsProfile::GlobalGeodetic(p) => p.from_global_geodetic(coordinate),
            CrsProfile::SphericalMercator(p) => p.from_global_geodetic(coordinate),
            CrsProfile::EllipsoidalMercator(p) => p.from_global_geodetic(coordinate),
        }
    }

    /// Fails with `CrsMismatch` unless the coordinate is given in this profile's CRS
    pub fn check_crs(&self, coordinate: &CrsCoordinate) -> Result<()> {
        if coordinate.coordinate_reference_system() != self.coordinate_reference_system() {
            return Err(Error::CrsMismatch {
                expected: self.coordinate_reference_system().clone(),
                actual: coordinate.coordinate_reference_system().clone(),
            });
        }
        Ok(())
    }

    /// Width and height of a single tile in CRS units
    pub fn tile_size(bounds: &BoundingBox, dimensions: &TileMatrixDimensions) -> Coordinate<f64> {
        Coordinate::new(
            bounds.width() / dimensions.width() as f64,
            bounds.height() / dimensions.height() as f64,
        )
    }

    /// Tile (column, row) containing a coordinate.
    ///
    /// The tile matrix covers `bounds` with `dimensions` tiles, numbered from the
    /// corner given by `origin`. Coordinates on the edges opposite the origin are
    /// outside of the matrix.
    pub fn crs_to_tile_coordinate(
        &self,
        coordinate: &CrsCoordinate,
        bounds: &BoundingBox,
        dimensions: &TileMatrixDimensions,
        origin: TileOrigin,
    ) -> Result<Coordinate<u32>> {
        self.check_crs(coordinate)?;

        if !bounds_utility::contains(bounds, coordinate.coordinate(), origin) {
            return Err(Error::OutOfBounds {
                x: coordinate.x(),
                y: coordinate.y(),
                bounds: *bounds,
            });
        }

        let corner = bounds_utility::bounds_corner(bounds, origin);
        let tile_size = CrsProfile::tile_size(bounds, dimensions);

        let offset_x = (coordinate.x() - corner.x).abs();
        let offset_y = (coordinate.y() - corner.y).abs();

        // Coordinates closer to the far edges than the rounding tolerance
        // belong to the last column or row
        let column = tile_index(offset_x, tile_size.x).min(dimensions.width() - 1);
        let row = tile_index(offset_y, tile_size.y).min(dimensions.height() - 1);

        Ok(Coordinate::new(column, row))
    }

    /// CRS coordinate of the origin-side corner of a tile.
    ///
    /// Column and row are not checked against `dimensions`: tiles beyond the matrix
    /// yield coordinates outside of `bounds`, e.g. `(column + 1, row + 1)` gives the
    /// opposite corner of a tile.
    pub fn tile_to_crs_coordinate(
        &self,
        column: u32,
        row: u32,
        bounds: &BoundingBox,
        dimensions: &TileMatrixDimensions,
        origin: TileOrigin,
    ) -> CrsCoordinate {
        let corner = bounds_utility::bounds_corner(bounds, origin);
        let tile_size = CrsProfile::tile_size(bounds, dimensions);

        CrsCoordinate::new(
            corner.x + origin.x_direction() * column as f64 * tile_size.x,
            corner.y + origin.y_direction() * row as f64 * tile_size.y,
            self.coordinate_reference_system().clone(),
        )
    }
}

fn tile_index(offset: f64, tile_size: f64) -> u32 {
    round_to(offset / tile_size, TILE_FRACTION_PRECISION).floor() as u32
}

impl From<GlobalGeodeticCrsProfile> for CrsProfile {
    fn from(profile: GlobalGeodeticCrsProfile) -> Self {
        CrsProfile::GlobalGeodetic(profile)
    }
}

impl From<SphericalMercatorCrsProfile> for CrsProfile {
    fn from(profile: SphericalMercatorCrsProfile) -> Self {
        CrsProfile::SphericalMercator(profile)
    }
}

impl From<EllipsoidalMercatorCrsProfile> for CrsProfile {
    fn from(profile: EllipsoidalMercatorCrsProfile) -> Self {
        CrsProfile::EllipsoidalMercator(profile)
    }
}
