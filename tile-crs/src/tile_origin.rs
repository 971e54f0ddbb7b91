//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::tile_matrix::TileMatrixDimensions;
use std::fmt;
use std::str::FromStr;

/// Horizontal side of a tile origin
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Horizontal {
    Left,
    Right,
}

/// Vertical side of a tile origin
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Vertical {
    Upper,
    Lower,
}

/// Corner of a tile matrix where tile (0, 0) is placed
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum TileOrigin {
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl TileOrigin {
    pub const ALL: [TileOrigin; 4] = [
        TileOrigin::LowerLeft,
        TileOrigin::LowerRight,
        TileOrigin::UpperLeft,
        TileOrigin::UpperRight,
    ];

    pub fn horizontal(self) -> Horizontal {
        match self {
            TileOrigin::LowerLeft | TileOrigin::UpperLeft => Horizontal::Left,
            TileOrigin::LowerRight | TileOrigin::UpperRight => Horizontal::Right,
        }
    }

    pub fn vertical(self) -> Vertical {
        match self {
            TileOrigin::UpperLeft | TileOrigin::UpperRight => Vertical::Upper,
            TileOrigin::LowerLeft | TileOrigin::LowerRight => Vertical::Lower,
        }
    }

    /// Direction of increasing column numbers in CRS units (+1.0 or -1.0)
    pub fn x_direction(self) -> f64 {
        match self.horizontal() {
            Horizontal::Left => 1.0,
            Horizontal::Right => -1.0,
        }
    }

    /// Direction of increasing row numbers in CRS units (+1.0 or -1.0)
    pub fn y_direction(self) -> f64 {
        match self.vertical() {
            Vertical::Lower => 1.0,
            Vertical::Upper => -1.0,
        }
    }

    /// Address of the same tile in the numbering of another origin
    pub fn transform(
        self,
        to_origin: TileOrigin,
        column: u32,
        row: u32,
        dimensions: &TileMatrixDimensions,
    ) -> Result<Coordinate<u32>> {
        if !dimensions.contains(column, row) {
            return Err(Error::invalid(format!(
                "Tile ({}, {}) is outside of the tile matrix dimensions {}",
                column, row, dimensions
            )));
        }
        let column = if self.horizontal() == to_origin.horizontal() {
            column
        } else {
            dimensions.width() - 1 - column
        };
        let row = if self.vertical() == to_origin.vertical() {
            row
        } else {
            dimensions.height() - 1 - row
        };
        Ok(Coordinate::new(column, row))
    }
}

impl fmt::Display for TileOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TileOrigin::LowerLeft => "LowerLeft",
            TileOrigin::LowerRight => "LowerRight",
            TileOrigin::UpperLeft => "UpperLeft",
            TileOrigin::UpperRight => "UpperRight",
        };
        f.write_str(name)
    }
}

impl FromStr for TileOrigin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lowerleft" => Ok(TileOrigin::LowerLeft),
            "lowerright" => Ok(TileOrigin::LowerRight),
            "upperleft" => Ok(TileOrigin::UpperLeft),
            "upperright" => Ok(TileOrigin::UpperRight),
            _ => Err(Error::invalid(format!("Unexpected tile origin '{}'", s))),
        }
    }
}
