//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinates and coordinate reference systems

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Two dimensional coordinate
///
/// `Coordinate<f64>` holds CRS units, `Coordinate<u32>` a tile column (`x`) and row (`y`).
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub struct Coordinate<T> {
    pub x: T,
    pub y: T,
}

impl<T> Coordinate<T> {
    pub fn new(x: T, y: T) -> Coordinate<T> {
        Coordinate { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate reference system, identified by authority and identifier (e.g. EPSG:4326)
///
/// The authority is compared case-insensitively, the optional name is not compared at all.
#[derive(Clone, Debug)]
pub struct CoordinateReferenceSystem {
    name: Option<String>,
    authority: String,
    identifier: i32,
}

impl CoordinateReferenceSystem {
    pub fn new(authority: &str, identifier: i32) -> Result<CoordinateReferenceSystem> {
        if authority.trim().is_empty() {
            return Err(Error::invalid("Authority may not be empty"));
        }
        Ok(CoordinateReferenceSystem {
            name: None,
            authority: authority.to_uppercase(),
            identifier,
        })
    }

    pub fn with_name(name: &str, authority: &str, identifier: i32) -> Result<CoordinateReferenceSystem> {
        if name.is_empty() {
            return Err(Error::invalid("A coordinate reference system name may not be empty"));
        }
        let mut crs = CoordinateReferenceSystem::new(authority, identifier)?;
        crs.name = Some(name.to_string());
        Ok(crs)
    }

    /// Well-known system of the builtin profiles
    pub(crate) fn epsg(identifier: i32, name: &str) -> CoordinateReferenceSystem {
        CoordinateReferenceSystem {
            name: Some(name.to_string()),
            authority: "EPSG".to_string(),
            identifier,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// Upper case authority
    pub fn authority(&self) -> &str {
        &self.authority
    }
    pub fn identifier(&self) -> i32 {
        self.identifier
    }
}

impl PartialEq for CoordinateReferenceSystem {
    fn eq(&self, other: &Self) -> bool {
        self.authority == other.authority && self.identifier == other.identifier
    }
}

impl Eq for CoordinateReferenceSystem {}

impl Hash for CoordinateReferenceSystem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.authority.hash(state);
        self.identifier.hash(state);
    }
}

impl Ord for CoordinateReferenceSystem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.authority
            .cmp(&other.authority)
            .then(self.identifier.cmp(&other.identifier))
    }
}

impl PartialOrd for CoordinateReferenceSystem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CoordinateReferenceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.authority, self.identifier)
    }
}

impl FromStr for CoordinateReferenceSystem {
    type Err = Error;

    /// Parse `AUTHORITY:identifier`, e.g. `epsg:3857`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(2, ':');
        let authority = parts.next().unwrap_or("");
        let identifier = parts
            .next()
            .ok_or_else(|| Error::invalid(format!("Expected AUTHORITY:IDENTIFIER, got '{}'", s)))?;
        let identifier = identifier.trim().parse::<i32>().map_err(|e| {
            Error::invalid(format!("Invalid identifier '{}': {}", identifier, e))
        })?;
        CoordinateReferenceSystem::new(authority.trim(), identifier)
    }
}

/// Coordinate tagged with its coordinate reference system
#[derive(PartialEq, Clone, Debug)]
pub struct CrsCoordinate {
    coordinate: Coordinate<f64>,
    crs: CoordinateReferenceSystem,
}

impl CrsCoordinate {
    pub fn new(x: f64, y: f64, crs: CoordinateReferenceSystem) -> CrsCoordinate {
        CrsCoordinate {
            coordinate: Coordinate::new(x, y),
            crs,
        }
    }
    pub fn from_coordinate(coordinate: Coordinate<f64>, crs: CoordinateReferenceSystem) -> CrsCoordinate {
        CrsCoordinate { coordinate, crs }
    }
    pub fn x(&self) -> f64 {
        self.coordinate.x
    }
    pub fn y(&self) -> f64 {
        self.coordinate.y
    }
    pub fn coordinate(&self) -> &Coordinate<f64> {
        &self.coordinate
    }
    pub fn coordinate_reference_system(&self) -> &CoordinateReferenceSystem {
        &self.crs
    }
}

impl fmt::Display for CrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coordinate, self.crs)
    }
}
