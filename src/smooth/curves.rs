//! Regrouping the flat segment log into continuous polylines.

use kurbo::{Line, Point};

use crate::segment::Segment;

/// A continuous polyline: one pen-down run, or a resampled/smoothed
/// version of one.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
}

impl Curve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Consecutive point pairs as lines.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }
}

impl From<Vec<Point>> for Curve {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Split the segment log into curves.
///
/// A segment continues the current curve when its move point equals the
/// previous segment's line point; otherwise the pen was lifted and a new
/// curve starts, seeded with the move point.
pub fn build(segments: &[Segment]) -> Vec<Curve> {
    segments
        .iter()
        .fold(Vec::<Vec<Point>>::new(), |mut runs, seg| {
            let start = seg.move_point();
            let continues = runs
                .last()
                .and_then(|run| run.last())
                .is_some_and(|&end| end == start);
            if !continues {
                runs.push(vec![start]);
            }
            if let Some(run) = runs.last_mut() {
                run.push(seg.line_point());
            }
            runs
        })
        .into_iter()
        .map(Curve::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Sample;

    fn seg(mx: i32, my: i32, lx: i32, ly: i32) -> Segment {
        Segment::new(Sample::new(mx, my), Sample::new(lx, ly))
    }

    #[test]
    fn chained_segments_form_one_curve() {
        let curves = build(&[seg(0, 0, 10, 0), seg(10, 0, 20, 0), seg(20, 0, 30, 5)]);
        assert_eq!(curves.len(), 1);
        let xs: Vec<f64> = curves[0].points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn discontinuity_starts_new_curve() {
        let curves = build(&[
            seg(0, 0, 5, 0),
            seg(5, 0, 6, 1),
            seg(40, 40, 40, 41),
            seg(40, 41, 42, 45),
        ]);
        assert_eq!(curves.len(), 2);
        assert_eq!(curves[0].len(), 3);
        assert_eq!(curves[1].first(), Some(Point::new(40.0, 40.0)));
        assert_eq!(curves[1].last(), Some(Point::new(42.0, 45.0)));
    }

    #[test]
    fn single_segment_curve_is_legal() {
        let curves = build(&[seg(3, 3, 3, 4)]);
        assert_eq!(curves, vec![Curve::new(vec![Point::new(3.0, 3.0), Point::new(3.0, 4.0)])]);
    }

    #[test]
    fn empty_log_has_no_curves() {
        assert!(build(&[]).is_empty());
    }
}
