//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::bounds_utility;
use crate::coordinate::{Coordinate, CoordinateReferenceSystem, CrsCoordinate};
use crate::ellipsoidal_mercator::EllipsoidalMercatorCrsProfile;
use crate::error::Error;
use crate::geodetic::GlobalGeodeticCrsProfile;
use crate::profile::CrsProfile;
use crate::spherical_mercator::SphericalMercatorCrsProfile;
use crate::tile_matrix::TileMatrixDimensions;
use crate::tile_origin::TileOrigin;

fn profiles() -> Vec<CrsProfile> {
    vec![
        GlobalGeodeticCrsProfile::new().into(),
        SphericalMercatorCrsProfile::new().into(),
        EllipsoidalMercatorCrsProfile::new().into(),
    ]
}

fn geodetic() -> CrsProfile {
    GlobalGeodeticCrsProfile::new().into()
}

fn lon_lat(lon: f64, lat: f64) -> CrsCoordinate {
    CrsCoordinate::new(lon, lat, CoordinateReferenceSystem::new("EPSG", 4326).unwrap())
}

fn dims(width: u32, height: u32) -> TileMatrixDimensions {
    TileMatrixDimensions::new(width, height).unwrap()
}

fn tile(
    profile: &CrsProfile,
    coordinate: &CrsCoordinate,
    dimensions: &TileMatrixDimensions,
    origin: TileOrigin,
) -> (u32, u32) {
    let tile = profile
        .crs_to_tile_coordinate(coordinate, &profile.bounds(), dimensions, origin)
        .unwrap();
    (tile.x, tile.y)
}

#[test]
fn test_geodetic_tiles() {
    let profile = geodetic();
    assert_eq!(
        tile(&profile, &lon_lat(150.0, 50.0), &dims(5, 3), TileOrigin::LowerLeft),
        (4, 2)
    );
    assert_eq!(
        tile(&profile, &lon_lat(140.0, 40.0), &dims(9, 7), TileOrigin::UpperLeft),
        (8, 1)
    );
    assert_eq!(
        tile(&profile, &lon_lat(120.0, -80.0), &dims(9, 7), TileOrigin::UpperRight),
        (1, 6)
    );
    assert_eq!(
        tile(&profile, &lon_lat(120.0, -80.0), &dims(9, 7), TileOrigin::LowerRight),
        (1, 0)
    );
}

#[test]
fn test_tile_boundaries() {
    let profile = geodetic();
    let dimensions = dims(9, 7);
    let tile_width = 360.0 / 9.0;
    let tile_height = 180.0 / 7.0;

    // exactly on the boundary between two tiles
    let coordinate = lon_lat(-180.0 + 4.0 * tile_width, -90.0 + 5.0 * tile_height);
    assert_eq!(tile(&profile, &coordinate, &dimensions, TileOrigin::LowerLeft), (4, 5));
    // in the middle of a tile
    let coordinate = lon_lat(-180.0 + 2.5 * tile_width, -90.0 + 3.5 * tile_height);
    assert_eq!(tile(&profile, &coordinate, &dimensions, TileOrigin::LowerLeft), (2, 3));
    let coordinate = lon_lat(180.0 - 7.5 * tile_width, 90.0 - 5.5 * tile_height);
    assert_eq!(tile(&profile, &coordinate, &dimensions, TileOrigin::UpperLeft), (1, 5));
    assert_eq!(tile(&profile, &coordinate, &dimensions, TileOrigin::UpperRight), (7, 5));
}

/// Coordinate at a distance from the origin corner, measured into the matrix
fn from_corner(profile: &CrsProfile, origin: TileOrigin, dx: f64, dy: f64) -> CrsCoordinate {
    let corner = bounds_utility::bounds_corner(&profile.bounds(), origin);
    CrsCoordinate::new(
        corner.x + origin.x_direction() * dx,
        corner.y + origin.y_direction() * dy,
        profile.coordinate_reference_system().clone(),
    )
}

#[test]
fn test_tile_boundaries_all_origins() {
    let dimensions = dims(9, 7);
    for profile in profiles().iter() {
        let bounds = profile.bounds();
        let size = CrsProfile::tile_size(&bounds, &dimensions);

        let coordinate = CrsCoordinate::new(
            bounds.min_x() + 7.0 * size.x,
            bounds.max_y() - 5.0 * size.y,
            profile.coordinate_reference_system().clone(),
        );
        assert_eq!(tile(profile, &coordinate, &dimensions, TileOrigin::UpperLeft), (7, 5));

        for origin in TileOrigin::ALL.iter() {
            let coordinate = from_corner(profile, *origin, 7.0 * size.x, 5.0 * size.y);
            assert_eq!(
                tile(profile, &coordinate, &dimensions, *origin),
                (7, 5),
                "{} {}",
                profile.coordinate_reference_system(),
                origin
            );
        }
    }
}

#[test]
fn test_edge_bands() {
    let profile = geodetic();
    let bounds = profile.bounds();
    let dimensions = dims(2, 1);
    assert_eq!(
        tile(&profile, &lon_lat(179.99999996, 0.0), &dimensions, TileOrigin::UpperLeft),
        (1, 0)
    );
    assert!(profile
        .crs_to_tile_coordinate(&lon_lat(-180.00000004, 0.0), &bounds, &dimensions, TileOrigin::UpperLeft)
        .is_err());

    let mercator: CrsProfile = SphericalMercatorCrsProfile::new().into();
    let coordinate = CrsCoordinate::new(
        mercator.bounds().max_x() - 0.004,
        0.0,
        mercator.coordinate_reference_system().clone(),
    );
    assert_eq!(tile(&mercator, &coordinate, &dims(2, 2), TileOrigin::UpperLeft), (1, 1));

    for profile in profiles().iter() {
        let bounds = profile.bounds();
        let delta_x = bounds.width() * 1e-10;
        let delta_y = bounds.height() * 1e-10;
        for dimensions in [dims(2, 1), dims(9, 7)].iter() {
            let last = (dimensions.width() - 1, dimensions.height() - 1);
            for origin in TileOrigin::ALL.iter() {
                let crs = profile.coordinate_reference_system();

                // just inside of the far edges
                let coordinate = from_corner(
                    profile,
                    *origin,
                    bounds.width() - delta_x,
                    bounds.height() - delta_y,
                );
                assert_eq!(
                    tile(profile, &coordinate, dimensions, *origin),
                    last,
                    "{} {} {}",
                    crs,
                    dimensions,
                    origin
                );

                // just outside of the near edges
                for &(dx, dy) in [(-delta_x, 0.0), (0.0, -delta_y)].iter() {
                    let coordinate = from_corner(profile, *origin, dx, dy);
                    match profile.crs_to_tile_coordinate(&coordinate, &bounds, dimensions, *origin) {
                        Err(Error::OutOfBounds { .. }) => {}
                        result => panic!("{} {} {}: {:?}", crs, dimensions, origin, result),
                    }
                }
            }
        }
    }
}

#[test]
fn test_origin_corners() {
    let dimensions = dims(9, 7);
    for profile in profiles().iter() {
        let bounds = profile.bounds();
        let crs = profile.coordinate_reference_system();
        let corners = [
            (TileOrigin::LowerLeft, bounds.bottom_left()),
            (TileOrigin::LowerRight, bounds.bottom_right()),
            (TileOrigin::UpperLeft, bounds.top_left()),
            (TileOrigin::UpperRight, bounds.top_right()),
        ];
        for (origin, corner) in corners.iter() {
            let coordinate = CrsCoordinate::from_coordinate(*corner, crs.clone());
            assert_eq!(tile(profile, &coordinate, &dimensions, *origin), (0, 0));
        }
    }
}

#[test]
fn test_far_corners_out_of_bounds() {
    let dimensions = dims(9, 7);
    for profile in profiles().iter() {
        let bounds = profile.bounds();
        let crs = profile.coordinate_reference_system();
        let opposite = [
            (TileOrigin::LowerLeft, bounds.top_right()),
            (TileOrigin::LowerRight, bounds.top_left()),
            (TileOrigin::UpperLeft, bounds.bottom_right()),
            (TileOrigin::UpperRight, bounds.bottom_left()),
        ];
        for (origin, corner) in opposite.iter() {
            let coordinate = CrsCoordinate::from_coordinate(*corner, crs.clone());
            let result = profile.crs_to_tile_coordinate(&coordinate, &bounds, &dimensions, *origin);
            match result {
                Err(Error::OutOfBounds { .. }) => {}
                _ => panic!("{} {}: {:?}", crs, origin, result),
            }
        }
    }
}

#[test]
fn test_out_of_bounds() {
    let profile = geodetic();
    let bounds = profile.bounds();
    let err = profile
        .crs_to_tile_coordinate(&lon_lat(-180.5, 0.0), &bounds, &dims(2, 1), TileOrigin::UpperLeft)
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err.to_string(),
        "Coordinate (-180.5, 0) is outside of the bounds (-180, -90, 180, 90)"
    );

    let err = profile
        .crs_to_tile_coordinate(&lon_lat(0.0, 90.1), &bounds, &dims(2, 1), TileOrigin::LowerLeft)
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_crs_mismatch() {
    let profile = geodetic();
    let coordinate = CrsCoordinate::new(2.0, 4.0, CoordinateReferenceSystem::new("EPSG", 9999).unwrap());
    let err = profile
        .crs_to_tile_coordinate(&coordinate, &profile.bounds(), &dims(5, 7), TileOrigin::LowerLeft)
        .unwrap_err();
    assert!(err.is_invalid_argument());
    match err {
        Error::CrsMismatch { expected, actual } => {
            assert_eq!(expected.to_string(), "EPSG:4326");
            assert_eq!(actual.to_string(), "EPSG:9999");
        }
        _ => panic!("{:?}", err),
    }

    // authority comparison ignores case
    let coordinate = CrsCoordinate::new(2.0, 4.0, CoordinateReferenceSystem::new("epsg", 4326).unwrap());
    assert!(profile
        .crs_to_tile_coordinate(&coordinate, &profile.bounds(), &dims(5, 7), TileOrigin::LowerLeft)
        .is_ok());
}

#[test]
fn test_tile_to_crs_coordinate() {
    let profile = geodetic();
    let bounds = profile.bounds();
    let dimensions = dims(4, 2);

    let corner = profile.tile_to_crs_coordinate(1, 1, &bounds, &dimensions, TileOrigin::LowerLeft);
    assert_eq!(corner.coordinate(), &Coordinate::new(-90.0, 0.0));
    assert_eq!(corner.coordinate_reference_system(), profile.coordinate_reference_system());

    let corner = profile.tile_to_crs_coordinate(1, 0, &bounds, &dimensions, TileOrigin::UpperRight);
    assert_eq!(corner.coordinate(), &Coordinate::new(90.0, 90.0));

    // tile beyond the matrix gives the opposite corner of the last tile
    let corner = profile.tile_to_crs_coordinate(4, 2, &bounds, &dimensions, TileOrigin::UpperLeft);
    assert_eq!(corner.coordinate(), &Coordinate::new(180.0, -90.0));
}

#[test]
fn test_round_trip() {
    let sizes = [dims(1, 1), dims(2, 1), dims(9, 7), dims(17, 31), dims(103, 103)];
    for profile in profiles().iter() {
        let bounds = profile.bounds();
        for dimensions in sizes.iter() {
            for origin in TileOrigin::ALL.iter() {
                for column in 0..dimensions.width() {
                    for row in 0..dimensions.height() {
                        let coordinate =
                            profile.tile_to_crs_coordinate(column, row, &bounds, dimensions, *origin);
                        let tile = profile
                            .crs_to_tile_coordinate(&coordinate, &bounds, dimensions, *origin)
                            .unwrap();
                        assert_eq!(
                            (tile.x, tile.y),
                            (column, row),
                            "{} {} {}",
                            profile.coordinate_reference_system(),
                            dimensions,
                            origin
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_sub_bounds_round_trip() {
    let profile: CrsProfile = EllipsoidalMercatorCrsProfile::new().into();
    let min = profile.from_global_geodetic(&Coordinate::new(-10.0, -10.0));
    let max = profile.from_global_geodetic(&Coordinate::new(30.0, 60.0));
    let bounds = BoundingBox::new(min.x, min.y, max.x, max.y).unwrap();
    let dimensions = dims(19, 76);
    for origin in TileOrigin::ALL.iter() {
        for column in 0..dimensions.width() {
            for row in 0..dimensions.height() {
                let coordinate = profile.tile_to_crs_coordinate(column, row, &bounds, &dimensions, *origin);
                let tile = profile
                    .crs_to_tile_coordinate(&coordinate, &bounds, &dimensions, *origin)
                    .unwrap();
                assert_eq!((tile.x, tile.y), (column, row), "{}", origin);
            }
        }
    }

    // tile centers
    let size = CrsProfile::tile_size(&bounds, &dimensions);
    let center = CrsCoordinate::new(
        bounds.min_x() + 3.5 * size.x,
        bounds.max_y() - 10.5 * size.y,
        profile.coordinate_reference_system().clone(),
    );
    let tile = profile
        .crs_to_tile_coordinate(&center, &bounds, &dimensions, TileOrigin::UpperLeft)
        .unwrap();
    assert_eq!((tile.x, tile.y), (3, 10));
}

#[test]
fn test_tile_size_halves() {
    for profile in profiles().iter() {
        let bounds = profile.bounds();
        let level0 = CrsProfile::tile_size(&bounds, &dims(1, 1));
        let level1 = CrsProfile::tile_size(&bounds, &dims(2, 2));
        assert_eq!(level0.x, 2.0 * level1.x);
        assert_eq!(level0.y, 2.0 * level1.y);
    }
}

#[test]
fn test_metadata() {
    for profile in profiles().iter() {
        let crs = profile.coordinate_reference_system();
        assert_eq!(crs.authority(), "EPSG");
        assert!(profile
            .well_known_text()
            .contains(&format!("AUTHORITY[\"EPSG\",\"{}\"]", crs.identifier())));
        assert!(!profile.name().is_empty());
        assert!(!profile.description().is_empty());
    }
    assert_eq!(geodetic().precision(), 7);
    assert_eq!(CrsProfile::from(SphericalMercatorCrsProfile::new()).precision(), 2);
}
