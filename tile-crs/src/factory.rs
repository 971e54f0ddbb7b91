//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Registry of supported coordinate reference system profiles

use crate::coordinate::CoordinateReferenceSystem;
use crate::ellipsoidal_mercator::EllipsoidalMercatorCrsProfile;
use crate::error::{Error, Result};
use crate::geodetic::GlobalGeodeticCrsProfile;
use crate::profile::CrsProfile;
use crate::spherical_mercator::SphericalMercatorCrsProfile;
use std::collections::BTreeMap;

lazy_static! {
    static ref PROFILES: BTreeMap<CoordinateReferenceSystem, CrsProfile> = {
        let profiles: Vec<CrsProfile> = vec![
            GlobalGeodeticCrsProfile::new().into(),
            SphericalMercatorCrsProfile::new().into(),
            EllipsoidalMercatorCrsProfile::new().into(),
        ];
        profiles
            .into_iter()
            .map(|profile| (profile.coordinate_reference_system().clone(), profile))
            .collect()
    };
}

/// Profile of a coordinate reference system
pub fn create(crs: &CoordinateReferenceSystem) -> Result<&'static CrsProfile> {
    PROFILES.get(crs).ok_or_else(|| Error::UnsupportedCrs {
        authority: crs.authority().to_string(),
        identifier: crs.identifier(),
    })
}

/// Profile by authority (case-insensitive) and identifier, e.g. ("epsg", 4326)
pub fn create_from_code(authority: &str, identifier: i32) -> Result<&'static CrsProfile> {
    let crs = CoordinateReferenceSystem::new(authority, identifier).map_err(|_| {
        Error::UnsupportedCrs {
            authority: authority.to_string(),
            identifier,
        }
    })?;
    create(&crs)
}

/// Coordinate reference systems with a registered profile, ordered by authority and identifier
pub fn registered_systems() -> Vec<&'static CoordinateReferenceSystem> {
    PROFILES.keys().collect()
}
