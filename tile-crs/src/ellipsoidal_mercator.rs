//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::coordinate::{Coordinate, CoordinateReferenceSystem};
use std::f64::consts;

/// WGS 84 ellipsoid world Mercator in meters (EPSG:3395)
#[derive(PartialEq, Clone, Debug)]
pub struct EllipsoidalMercatorCrsProfile {
    crs: CoordinateReferenceSystem,
    /// Use this for all calculations depending on the earth radius
    scaled_equatorial_radius: f64,
}

impl EllipsoidalMercatorCrsProfile {
    /// Semi-major axis of the WGS 84 spheroid in meters
    pub const EARTH_EQUATORIAL_RADIUS: f64 = 6378137.0;
    /// Inverse flattening of the WGS 84 spheroid
    pub const INVERSE_FLATTENING: f64 = 298.257223563;
    pub const FLATTENING: f64 = 1.0 / Self::INVERSE_FLATTENING;
    /// b = a - a / (1/f)
    pub const EARTH_POLAR_RADIUS: f64 =
        Self::EARTH_EQUATORIAL_RADIUS - Self::EARTH_EQUATORIAL_RADIUS / Self::INVERSE_FLATTENING;
    /// Decimal places of meter values
    pub const PRECISION: u32 = 2;

    const MAX_ITERATIONS: usize = 100;
    const CONVERGENCE: f64 = 1e-15;

    pub fn new() -> EllipsoidalMercatorCrsProfile {
        EllipsoidalMercatorCrsProfile::with_scale_factor(
            1.0,
            CoordinateReferenceSystem::epsg(3395, "WGS 84 / World Mercator"),
        )
    }

    /// Variant of the projection with a scaled equatorial radius
    pub fn with_scale_factor(
        earth_equatorial_radius_scale_factor: f64,
        crs: CoordinateReferenceSystem,
    ) -> EllipsoidalMercatorCrsProfile {
        EllipsoidalMercatorCrsProfile {
            crs,
            scaled_equatorial_radius: Self::EARTH_EQUATORIAL_RADIUS
                * earth_equatorial_radius_scale_factor,
        }
    }

    /// e = sqrt(f (2 - f))
    pub fn eccentricity() -> f64 {
        (Self::FLATTENING * (2.0 - Self::FLATTENING)).sqrt()
    }

    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }

    /// Square world bounds, y = +/- PI * a so that a single level 0 tile is square
    pub fn bounds(&self) -> BoundingBox {
        let half = consts::PI * self.scaled_equatorial_radius;
        BoundingBox::from_ordered(-half, -half, half, half)
    }

    /// Meters to longitude/latitude in degrees
    pub fn to_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        Coordinate::new(
            (coordinate.x / self.scaled_equatorial_radius).to_degrees(),
            self.latitude(coordinate.y).to_degrees(),
        )
    }

    /// Longitude/latitude in degrees to meters
    pub fn from_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        let a = self.scaled_equatorial_radius;
        let e = Self::eccentricity();
        let sin_lat = coordinate.y.to_radians().sin();
        Coordinate::new(
            a * coordinate.x.to_radians(),
            a * sin_lat.atanh() - a * e * (e * sin_lat).atanh(),
        )
    }

    /// Inverse mapping of a northing to latitude in radians.
    ///
    /// Fixed point iteration of the conformal latitude:
    ///   s(1)   = tanh(y/a)
    ///   s(n+1) = tanh(y/a + e atanh(e s(n)))
    ///   lat    = asin(s)
    fn latitude(&self, meters: f64) -> f64 {
        let e = Self::eccentricity();
        let y = meters / self.scaled_equatorial_radius;
        let mut previous = y.tanh();
        let mut next = previous;
        for _ in 0..Self::MAX_ITERATIONS {
            next = (y + e * (e * previous).atanh()).tanh();
            let difference = next - previous;
            previous = next;
            if difference.abs() <= Self::CONVERGENCE {
                break;
            }
        }
        next.asin()
    }

    pub fn name(&self) -> &'static str {
        "World Mercator"
    }
    pub fn description(&self) -> &'static str {
        "World (Ellipsoidal) Mercator"
    }
    pub fn well_known_text(&self) -> &'static str {
        r#"PROJCS["WGS 84 / World Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.01745329251994328,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],UNIT["metre",1,AUTHORITY["EPSG","9001"]],PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0],PARAMETER["scale_factor",1],PARAMETER["false_easting",0],PARAMETER["false_northing",0],AUTHORITY["EPSG","3395"],AXIS["Easting",EAST],AXIS["Northing",NORTH]]"#
    }
}

impl Default for EllipsoidalMercatorCrsProfile {
    fn default() -> Self {
        EllipsoidalMercatorCrsProfile::new()
    }
}
