//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use std::fmt;

/// Axis aligned extent in CRS units
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BoundingBox {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl BoundingBox {
    /// Bounding box ordered as minx, miny, maxx, maxy
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<BoundingBox> {
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return Err(Error::invalid("Bounds must be finite numbers"));
        }
        if min_x > max_x {
            return Err(Error::invalid("Min x cannot be greater than max x"));
        }
        if min_y > max_y {
            return Err(Error::invalid("Min y cannot be greater than max y"));
        }
        Ok(BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Constant bounds, callers guarantee ordering
    pub(crate) const fn from_ordered(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }
    pub fn min_y(&self) -> f64 {
        self.min_y
    }
    pub fn max_x(&self) -> f64 {
        self.max_x
    }
    pub fn max_y(&self) -> f64 {
        self.max_y
    }
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    pub fn center(&self) -> Coordinate<f64> {
        Coordinate::new(
            (self.max_x + self.min_x) / 2.0,
            (self.max_y + self.min_y) / 2.0,
        )
    }
    pub fn min(&self) -> Coordinate<f64> {
        Coordinate::new(self.min_x, self.min_y)
    }
    pub fn max(&self) -> Coordinate<f64> {
        Coordinate::new(self.max_x, self.max_y)
    }
    pub fn top_left(&self) -> Coordinate<f64> {
        Coordinate::new(self.min_x, self.max_y)
    }
    pub fn top_right(&self) -> Coordinate<f64> {
        self.max()
    }
    pub fn bottom_left(&self) -> Coordinate<f64> {
        self.min()
    }
    pub fn bottom_right(&self) -> Coordinate<f64> {
        Coordinate::new(self.max_x, self.min_y)
    }

    /// Point on the boundary or inside (all edges inclusive).
    ///
    /// Tile addressing uses the origin-aware `bounds_utility::contains` instead.
    pub fn contains(&self, point: &Coordinate<f64>) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }

    /// True if `other` lies completely within this bounding box
    pub fn contains_bounds(&self, other: &BoundingBox) -> bool {
        self.contains(&other.min()) && self.contains(&other.max())
    }

    /// Intersection with another bounding box, `None` if they are disjoint
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);
        if min_x > max_x || min_y > max_y {
            None
        } else {
            Some(BoundingBox::from_ordered(min_x, min_y, max_x, max_y))
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Round to a number of decimal places
pub(crate) fn round_to(value: f64, precision: u32) -> f64 {
    let divisor = 10f64.powi(precision as i32);
    (value * divisor).round() / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounds() {
        assert!(BoundingBox::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 1.0, 1.0, 0.0).is_err());
        assert!(BoundingBox::new(0.0, 0.0, f64::NAN, 1.0).is_err());
        assert!(BoundingBox::new(f64::NEG_INFINITY, 0.0, 0.0, 1.0).is_err());
        // degenerated boxes are valid
        assert!(BoundingBox::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_accessors() {
        let bbox = BoundingBox::new(-10.0, -5.0, 30.0, 15.0).unwrap();
        assert_eq!(bbox.width(), 40.0);
        assert_eq!(bbox.height(), 20.0);
        assert_eq!(bbox.center(), Coordinate::new(10.0, 5.0));
        assert_eq!(bbox.top_left(), Coordinate::new(-10.0, 15.0));
        assert_eq!(bbox.top_right(), Coordinate::new(30.0, 15.0));
        assert_eq!(bbox.bottom_left(), Coordinate::new(-10.0, -5.0));
        assert_eq!(bbox.bottom_right(), Coordinate::new(30.0, -5.0));
        assert_eq!(format!("{}", bbox), "(-10, -5, 30, 15)");
    }

    #[test]
    fn test_contains() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(bbox.contains(&Coordinate::new(0.0, 0.0)));
        assert!(bbox.contains(&Coordinate::new(10.0, 10.0)));
        assert!(bbox.contains(&Coordinate::new(5.0, 5.0)));
        assert!(!bbox.contains(&Coordinate::new(10.000001, 5.0)));
        assert!(!bbox.contains(&Coordinate::new(5.0, -0.1)));

        let inner = BoundingBox::new(2.0, 2.0, 10.0, 4.0).unwrap();
        assert!(bbox.contains_bounds(&inner));
        assert!(!inner.contains_bounds(&bbox));
    }

    #[test]
    fn test_intersection() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap();
        let b = BoundingBox::new(5.0, -5.0, 15.0, 5.0).unwrap();
        assert_eq!(
            a.intersection(&b),
            Some(BoundingBox::new(5.0, 0.0, 10.0, 5.0).unwrap())
        );
        let c = BoundingBox::new(11.0, 0.0, 12.0, 1.0).unwrap();
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(20037508.342789244, 2), 20037508.34);
        assert_eq!(round_to(-179.99999999, 7), -180.0);
        assert_eq!(round_to(1.9999999998, 9), 2.0);
    }
}
