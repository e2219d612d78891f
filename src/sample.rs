//! Pointer position sampling.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A pointer position in whole pixels, relative to the surface's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sample {
    pub x: i32,
    pub y: i32,
}

impl Sample {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert a page-space position into a surface-local sample.
    ///
    /// `offset` is the position of the surface's top-left corner in the same
    /// space as `page`. Coordinates are floored, so a pointer anywhere inside
    /// a pixel maps to that pixel.
    pub fn from_page(page: Point, offset: Point) -> Self {
        Self {
            x: (page.x - offset.x).floor() as i32,
            y: (page.y - offset.y).floor() as i32,
        }
    }

    pub fn to_point(self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    pub fn distance(self, other: Sample) -> f64 {
        self.to_point().distance(other.to_point())
    }
}

impl From<(i32, i32)> for Sample {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_relative_to_offset() {
        let s = Sample::from_page(Point::new(110.7, 52.2), Point::new(100.0, 40.0));
        assert_eq!(s, Sample::new(10, 12));
    }

    #[test]
    fn floors_negative_coordinates_downward() {
        let s = Sample::from_page(Point::new(99.5, 40.0), Point::new(100.0, 40.0));
        assert_eq!(s, Sample::new(-1, 0));
    }
}
