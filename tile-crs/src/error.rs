//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::bounding_box::BoundingBox;
use crate::coordinate::CoordinateReferenceSystem;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors of coordinate and tile transformations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Coordinate reference system {actual} does not match the profile's coordinate reference system {expected}")]
    CrsMismatch {
        expected: CoordinateReferenceSystem,
        actual: CoordinateReferenceSystem,
    },

    #[error("Coordinate ({x}, {y}) is outside of the bounds {bounds}")]
    OutOfBounds { x: f64, y: f64, bounds: BoundingBox },

    #[error("Unsupported coordinate reference system {authority}:{identifier}")]
    UnsupportedCrs { authority: String, identifier: i32 },
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Error {
        Error::InvalidArgument(msg.into())
    }

    /// Mismatching CRS and out of bounds coordinates are invalid arguments as well.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::InvalidArgument(_) | Error::CrsMismatch { .. } | Error::OutOfBounds { .. } => {
                true
            }
            Error::UnsupportedCrs { .. } => false,
        }
    }
}
