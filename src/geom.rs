//! Shared geometry utilities.

use kurbo::Point;

/// Width of a zero-length line; the thickest the pen gets.
pub const MAX_STROKE_WIDTH: f64 = 3.5;
/// Upper bound on the scaled length subtracted from [`MAX_STROKE_WIDTH`].
pub const LENGTH_CLAMP: f64 = 3.0;
/// Scale applied to the Euclidean distance before clamping.
pub const LENGTH_SCALE: f64 = 0.5;

/// Line width for a sub-segment of the given length.
///
/// Close samples (slow pen) draw thick, far samples (fast pen) draw thin:
/// `clamp(3.5 - min(distance * 0.5, 3), 0, 3.5)`.
pub fn stroke_width(distance: f64) -> f64 {
    let l = (distance * LENGTH_SCALE).min(LENGTH_CLAMP);
    (MAX_STROKE_WIDTH - l).clamp(0.0, MAX_STROKE_WIDTH)
}

/// Width of the line between two points.
pub fn width_between(a: Point, b: Point) -> f64 {
    stroke_width(a.distance(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_distance() {
        assert_eq!(stroke_width(0.0), 3.5);
        assert_eq!(stroke_width(2.0), 2.5);
        assert_eq!(stroke_width(6.0), 0.5);
        assert_eq!(stroke_width(100.0), 0.5);
    }

    #[test]
    fn width_between_points() {
        let w = width_between(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(w, 1.0);
    }
}
