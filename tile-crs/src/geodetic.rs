//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::coordinate::{Coordinate, CoordinateReferenceSystem};

/// WGS 84 longitude/latitude in decimal degrees (EPSG:4326)
#[derive(PartialEq, Clone, Debug)]
pub struct GlobalGeodeticCrsProfile {
    crs: CoordinateReferenceSystem,
}

impl GlobalGeodeticCrsProfile {
    /// World bounds in degrees
    pub const BOUNDS: BoundingBox = BoundingBox::from_ordered(-180.0, -90.0, 180.0, 90.0);
    /// Decimal places of degree values
    pub const PRECISION: u32 = 7;

    pub fn new() -> GlobalGeodeticCrsProfile {
        GlobalGeodeticCrsProfile {
            crs: CoordinateReferenceSystem::epsg(4326, "WGS 84"),
        }
    }
    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }
    /// Coordinates are geodetic already
    pub fn to_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        *coordinate
    }
    pub fn from_global_geodetic(&self, coordinate: &Coordinate<f64>) -> Coordinate<f64> {
        *coordinate
    }
    pub fn name(&self) -> &'static str {
        "World Geodetic System 1984"
    }
    pub fn description(&self) -> &'static str {
        "World Geodetic System 1984 longitude/latitude in decimal degrees"
    }
    pub fn well_known_text(&self) -> &'static str {
        r#"GEOGCS["WGS 84",DATUM["WGS_1984",SPHEROID["WGS 84",6378137,298.257223563,AUTHORITY["EPSG","7030"]],AUTHORITY["EPSG","6326"]],PRIMEM["Greenwich",0,AUTHORITY["EPSG","8901"]],UNIT["degree",0.0174532925199433,AUTHORITY["EPSG","9122"]],AUTHORITY["EPSG","4326"]]"#
    }
}

impl Default for GlobalGeodeticCrsProfile {
    fn default() -> Self {
        GlobalGeodeticCrsProfile::new()
    }
}
