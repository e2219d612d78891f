//! Captured line segments and the ordered log that holds them.

use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// One increment of pen motion: the pen position before (`move`) and after
/// (`line`) it.
///
/// Serialized with the short field names `mx`, `my`, `lx`, `ly`. Captured
/// segments always hold whole pixels, but stored signatures may carry any
/// number; whole values are written back without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Segment {
    #[serde(rename = "mx", with = "coord")]
    pub move_x: f64,
    #[serde(rename = "my", with = "coord")]
    pub move_y: f64,
    #[serde(rename = "lx", with = "coord")]
    pub line_x: f64,
    #[serde(rename = "ly", with = "coord")]
    pub line_y: f64,
}

impl Segment {
    pub fn new(from: Sample, to: Sample) -> Self {
        Self::from_points(from.to_point(), to.to_point())
    }

    pub fn from_points(from: Point, to: Point) -> Self {
        Self {
            move_x: from.x,
            move_y: from.y,
            line_x: to.x,
            line_y: to.y,
        }
    }

    pub fn move_point(&self) -> Point {
        Point::new(self.move_x, self.move_y)
    }

    pub fn line_point(&self) -> Point {
        Point::new(self.line_x, self.line_y)
    }

    pub fn to_line(&self) -> Line {
        Line::new(self.move_point(), self.line_point())
    }

    pub fn length(&self) -> f64 {
        self.move_point().distance(self.line_point())
    }
}

/// Coordinates on the wire: any JSON number in, integers out when whole.
mod coord {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() < (1u64 << 53) as f64 {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        f64::deserialize(deserializer)
    }
}

/// The ordered record of every segment drawn on a pad.
///
/// Insertion order is drawing order. This is the only state that gets
/// persisted; curves are rebuilt from it on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentLog {
    segments: Vec<Segment>,
}

impl SegmentLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn extend(&mut self, segments: impl IntoIterator<Item = Segment>) {
        self.segments.extend(segments);
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Mean segment length, or `None` for an empty log.
    pub fn average_spacing(&self) -> Option<f64> {
        average_spacing(&self.segments)
    }
}

impl From<Vec<Segment>> for SegmentLog {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl<'a> IntoIterator for &'a SegmentLog {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Mean Euclidean length over `segments`.
pub fn average_spacing(segments: &[Segment]) -> Option<f64> {
    if segments.is_empty() {
        return None;
    }
    let total: f64 = segments.iter().map(Segment::length).sum();
    Some(total / segments.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(mx: i32, my: i32, lx: i32, ly: i32) -> Segment {
        Segment::new(Sample::new(mx, my), Sample::new(lx, ly))
    }

    #[test]
    fn average_spacing_of_empty_log_is_none() {
        assert_eq!(SegmentLog::new().average_spacing(), None);
    }

    #[test]
    fn average_spacing_is_mean_length() {
        let log = SegmentLog::from(vec![seg(0, 0, 3, 4), seg(3, 4, 3, 5)]);
        assert_eq!(log.average_spacing(), Some(3.0));
    }

    #[test]
    fn serializes_with_short_field_names() {
        let json = serde_json::to_string(&seg(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"mx":1,"my":2,"lx":3,"ly":4}"#);
    }

    #[test]
    fn fractional_coordinates_survive_a_round_trip() {
        let text = r#"{"mx":20.5,"my":33,"lx":21.25,"ly":-4}"#;
        let segment: Segment = serde_json::from_str(text).unwrap();
        assert_eq!(
            segment,
            Segment::from_points(Point::new(20.5, 33.0), Point::new(21.25, -4.0))
        );
        assert_eq!(serde_json::to_string(&segment).unwrap(), text);
    }
}
