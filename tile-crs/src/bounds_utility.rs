//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Origin dependent bounding box queries
//!
//! Every tile owns the two edges adjacent to the tile origin. The edges of the
//! bounding box opposite the origin therefore belong to no tile.

use crate::bounding_box::BoundingBox;
use crate::coordinate::Coordinate;
use crate::tile_origin::{Horizontal, TileOrigin, Vertical};

/// True if the coordinate lies within `bounds` without touching the edges opposite `origin`
pub fn contains(bounds: &BoundingBox, coordinate: &Coordinate<f64>, origin: TileOrigin) -> bool {
    let far_x = match origin.horizontal() {
        Horizontal::Left => bounds.max_x(),
        Horizontal::Right => bounds.min_x(),
    };
    let far_y = match origin.vertical() {
        Vertical::Lower => bounds.max_y(),
        Vertical::Upper => bounds.min_y(),
    };
    let on_far_edge = coordinate.x == far_x || coordinate.y == far_y;

    !on_far_edge && bounds.contains(coordinate)
}

/// Corner of `bounds` matching the tile origin, e.g. (minx, maxy) for `UpperLeft`
pub fn bounds_corner(bounds: &BoundingBox, origin: TileOrigin) -> Coordinate<f64> {
    match origin {
        TileOrigin::LowerLeft => bounds.bottom_left(),
        TileOrigin::LowerRight => bounds.bottom_right(),
        TileOrigin::UpperLeft => bounds.top_left(),
        TileOrigin::UpperRight => bounds.top_right(),
    }
}
