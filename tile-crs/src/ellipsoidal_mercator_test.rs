//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinate::Coordinate;
use crate::ellipsoidal_mercator::EllipsoidalMercatorCrsProfile;

/// (longitude, latitude, easting, northing)
const REFERENCE: [(f64, f64, f64, f64); 9] = [
    (0.0, 0.0, 0.0, 0.0),
    (45.0, 45.0, 5009377.085697311, 5591295.9185533915),
    (-122.4194, 37.7749, -13627665.271218073, 4521498.49893218),
    (151.2093, -33.8688, 16832542.27920734, -3987387.0195967257),
    (8.5417, 47.3769, 950857.6945089049, 5972356.185163209),
    (179.9, 80.0, 20026376.393709917, 15496570.739723712),
    (-60.0, -70.0, -6679169.447596414, -11028513.630920073),
    (30.0, 85.0, 3339584.723798207, 19929239.113379158),
    (-150.0, -85.0, -16697923.618991036, -19929239.113379158),
];

#[test]
fn test_constants() {
    assert_eq!(EllipsoidalMercatorCrsProfile::EARTH_EQUATORIAL_RADIUS, 6378137.0);
    assert!((EllipsoidalMercatorCrsProfile::EARTH_POLAR_RADIUS - 6356752.314245179).abs() < 1e-6);
    assert!((EllipsoidalMercatorCrsProfile::eccentricity() - 0.08181919084262149).abs() < 1e-15);

    let bounds = EllipsoidalMercatorCrsProfile::new().bounds();
    assert!((bounds.max_x() - 20037508.342789244).abs() < 1e-6);
    assert_eq!(bounds.min_x(), -bounds.max_x());
    assert_eq!(bounds.width(), bounds.height());
}

#[test]
fn test_from_global_geodetic() {
    let profile = EllipsoidalMercatorCrsProfile::new();
    for &(lon, lat, x, y) in REFERENCE.iter() {
        let meters = profile.from_global_geodetic(&Coordinate::new(lon, lat));
        assert!((meters.x - x).abs() < 1e-6, "{} != {}", meters.x, x);
        assert!((meters.y - y).abs() < 1e-6, "{} != {}", meters.y, y);
    }
}

#[test]
fn test_to_global_geodetic() {
    let profile = EllipsoidalMercatorCrsProfile::new();
    for &(lon, lat, x, y) in REFERENCE.iter() {
        let degrees = profile.to_global_geodetic(&Coordinate::new(x, y));
        assert!((degrees.x - lon).abs() < 1e-7, "{} != {}", degrees.x, lon);
        assert!((degrees.y - lat).abs() < 1e-7, "{} != {}", degrees.y, lat);
    }
}

#[test]
fn test_world_bounds_latitude() {
    let profile = EllipsoidalMercatorCrsProfile::new();
    let top = profile.to_global_geodetic(&profile.bounds().max());
    let bottom = profile.to_global_geodetic(&profile.bounds().min());
    assert!((top.x - 180.0).abs() < 1e-9);
    // the square world bounds end near 85.08 degrees
    assert!(top.y > 85.0 && top.y < 85.1, "{}", top.y);
    assert!((top.y + bottom.y).abs() < 1e-9);
}

#[test]
fn test_scaled_radius() {
    let crs = crate::coordinate::CoordinateReferenceSystem::new("EPSG", 3395).unwrap();
    let profile = EllipsoidalMercatorCrsProfile::with_scale_factor(0.5, crs);
    let meters = profile.from_global_geodetic(&Coordinate::new(45.0, 45.0));
    assert!((meters.x - 5009377.085697311 / 2.0).abs() < 1e-6);
    assert!((meters.y - 5591295.9185533915 / 2.0).abs() < 1e-6);
    let degrees = profile.to_global_geodetic(&meters);
    assert!((degrees.y - 45.0).abs() < 1e-7);
}
