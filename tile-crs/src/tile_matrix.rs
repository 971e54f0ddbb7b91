//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::{Error, Result};
use std::fmt;

/// Number of tile columns and rows of a tile matrix
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TileMatrixDimensions {
    width: u32,
    height: u32,
}

impl TileMatrixDimensions {
    pub fn new(width: u32, height: u32) -> Result<TileMatrixDimensions> {
        if width == 0 {
            return Err(Error::invalid("Tile matrix width must be greater than 0"));
        }
        if height == 0 {
            return Err(Error::invalid("Tile matrix height must be greater than 0"));
        }
        Ok(TileMatrixDimensions { width, height })
    }
    /// Number of tile columns
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Number of tile rows
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn contains(&self, column: u32, row: u32) -> bool {
        column < self.width && row < self.height
    }
}

impl fmt::Display for TileMatrixDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[test]
fn test_dimensions() {
    let dims = TileMatrixDimensions::new(77, 12).unwrap();
    assert_eq!((dims.width(), dims.height()), (77, 12));
    assert!(TileMatrixDimensions::new(0, 10).is_err());
    assert!(TileMatrixDimensions::new(10, 0).is_err());
}

#[test]
fn test_contains() {
    let dims = TileMatrixDimensions::new(77, 12).unwrap();
    assert!(dims.contains(76, 11));
    assert!(dims.contains(0, 0));
    assert!(dims.contains(38, 6));
    assert!(!dims.contains(76, 12));
    assert!(!dims.contains(77, 11));
}
