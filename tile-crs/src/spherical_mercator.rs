//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::coordinate::{Coordinate, CoordinateReferenceSystem};
use std::f64::consts;

/// Spherical ("Web", "Pseudo") Mercator in meters (EPSG:3857)
#[derive(PartialEq, Clone, Debug)]
pub struct SphericalMercatorCrsProfile {
    crs: CoordinateReferenceSystem,
}

impl SphericalMercatorCrsProfile {
    /// Semi-major axis of the WGS 84 spheroid in meters
    pub const EARTH_EQUATORIAL_RADIUS: f64 = 6378137.0;
    /// Half of the equatorial circumference in both directions
    pub const BOUNDS: BoundingBox = BoundingBox::from_ordered(
        -consts::PI * Self::EARTH_EQUATORIAL_RADIUS,
        -consts::PI * Self::EARTH_EQUATORIAL_RADIUS,
        consts::PI * Self::EARTH_EQUATORIAL_RADIUS,
        consts::PI * Self::EARTH_EQUATORIAL_RADIUS,
    );
    /// Decimal places of meter values
    pub const PRECISION: u32 = 2;

    pub fn new() -> SphericalMercatorCrsProfile {
        SphericalMercatorCrsProfile {
            crs: CoordinateReferenceSystem::epsg(3857, "WGS 84 / Pseudo-Mercator"),
        }
    }
    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }

    /// Meters to longitude/latitude in degrees
    pub fn to_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        // USGS Professional Paper 1395, p. 44 (7-4): lat = PI/2 - 2 atan(e^(-y/R))
        let r = Self::EARTH_EQUATORIAL_RADIUS;
        Coordinate::new(
            (coordinate.x / r).to_degrees(),
            (consts::FRAC_PI_2 - 2.0 * (-coordinate.y / r).exp().atan()).to_degrees(),
        )
    }

    /// Longitude/latitude in degrees to meters
    pub fn from_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        let r = Self::EARTH_EQUATORIAL_RADIUS;
        Coordinate::new(
            r * coordinate.x.to_radians(),
            r * (consts::FRAC_PI_4 + 0.5 * coordinate.y.to_radians()).tan().ln(),
        )
    }

    pub fn name(&self) -> &'static str {
        "Web Mercator"
    }
    pub fn description(&self) -> &'static str {
        "Projection used in many popular web mapping applications (Google/Bing/OpenStreetMap/etc). Sometimes known as EPSG:900913."
    }
    pub fn well_known_text(&self) -> &'static str {
        r#"PROJCS["WGS 84 / Pseudo-Mercator",GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]],PROJECTION["Mercator_1SP"],PARAMETER["central_meridian",0],PARAMETER["scale_factor",1],PARAMETER["false_easting",0],PARAMETER["false_northing",0],UNIT["metre",1,AUTHORITY["EPSG","9001"]],AXIS["X",EAST],AXIS["Y",NORTH],AUTHORITY["EPSG","3857"]]"#
    }
}

impl Default for SphericalMercatorCrsProfile {
    fn default() -> Self {
        SphericalMercatorCrsProfile::new()
    }
}

#[test]
fn test_geodetic_conversion() {
    let profile = SphericalMercatorCrsProfile::new();
    let origin = profile.to_global_geodetic(&Coordinate::new(0.0, 0.0));
    assert!(origin.x.abs() < 1e-12 && origin.y.abs() < 1e-12);

    // the square world bounds end at ~85.0511 degrees
    let corner = profile.to_global_geodetic(&SphericalMercatorCrsProfile::BOUNDS.max());
    assert!((corner.x - 180.0).abs() < 1e-9);
    assert!((corner.y - 85.0511287798066).abs() < 1e-9);

    for &(lon, lat) in &[(8.5417, 47.3769), (-122.4194, 37.7749), (151.2093, -33.8688)] {
        let merc = profile.from_global_geodetic(&Coordinate::new(lon, lat));
        let back = profile.to_global_geodetic(&merc);
        assert!((back.x - lon).abs() < 1e-9, "{} != {}", back.x, lon);
        assert!((back.y - lat).abs() < 1e-9, "{} != {}", back.y, lat);
    }
}
