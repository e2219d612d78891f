//! Signature interchange: the segment log as JSON text, and replay.
//!
//! The format is a bare array of `{"mx", "my", "lx", "ly"}` records in
//! drawing order. Stroke boundaries are implicit: a record whose move point
//! differs from the previous record's line point starts a new stroke.

use tracing::trace;

use crate::config::PadConfig;
use crate::error::PadError;
use crate::render::draw_segments;
use crate::segment::{Segment, SegmentLog};
use crate::surface::Surface;

/// Encode segments as JSON text.
pub fn serialize(segments: &[Segment]) -> Result<String, PadError> {
    Ok(serde_json::to_string(segments)?)
}

/// Parse JSON text into segments.
///
/// The whole input is validated before anything is returned, so a caller
/// that only applies the result on success never sees a partial log.
pub fn deserialize(text: &str) -> Result<Vec<Segment>, PadError> {
    let segments: Vec<Segment> = serde_json::from_str(text)?;
    trace!(records = segments.len(), "parsed signature");
    Ok(segments)
}

/// Redraw previously captured segments onto `surface`.
///
/// Each record is drawn with the configured pen width and cap. When `log`
/// is given the records are appended to it as well, so the displayed
/// signature can be exported or smoothed later. Replay never smooths.
pub fn replay<S: Surface + ?Sized>(
    records: &[Segment],
    surface: &mut S,
    config: &PadConfig,
    log: Option<&mut SegmentLog>,
) {
    draw_segments(surface, records, config);
    if let Some(log) = log {
        log.extend(records.iter().copied());
    }
}
