//! Adaptive point reduction ahead of smoothing.
//!
//! Slow, tightly spaced strokes keep more of their points; fast, sparse
//! strokes keep fewer. Both the skipped arc length and the number of
//! skipped points are bounded.

use kurbo::Point;

use super::curves::Curve;

/// Lower bound on the point-count threshold.
pub const SKIP_FLOOR: usize = 4;
/// The point-count threshold is `SKIP_BASE - average spacing`.
pub const SKIP_BASE: f64 = 12.0;
/// Maximum arc length that may be skipped between kept points.
pub const ARC_THRESHOLD: f64 = 25.0;

/// Point-count threshold for a log with the given average segment length.
pub fn skip_for(average_spacing: f64) -> usize {
    let skip = (SKIP_BASE - average_spacing).floor();
    if skip > SKIP_FLOOR as f64 {
        skip as usize
    } else {
        SKIP_FLOOR
    }
}

/// Reduce a curve to a sparser subsequence of its points.
///
/// The first point is always kept. A later point is kept once the arc
/// length since the last kept point exceeds [`ARC_THRESHOLD`] or more than
/// `skip` points have gone by. The true final point is appended if the scan
/// did not already keep it.
pub fn resample(curve: &Curve, skip: usize) -> Curve {
    let points = curve.points();
    let Some(&first) = points.first() else {
        return curve.clone();
    };

    let mut kept: Vec<Point> = vec![first];
    let mut cur_seg = 0.0;
    let mut last = 0usize;
    for w in points.windows(2) {
        cur_seg += w[0].distance(w[1]);
        last += 1;
        if cur_seg > ARC_THRESHOLD || last > skip {
            kept.push(w[1]);
            cur_seg = 0.0;
            last = 0;
        }
    }

    if let (Some(&end), Some(&tail)) = (points.last(), kept.last()) {
        if tail != end {
            kept.push(end);
        }
    }
    Curve::new(kept)
}
