//! Smoothing pipeline: segment log → smoothed curves.
//!
//! 1. Regroup segments into one curve per pen-down run
//! 2. Adaptive resampling driven by the log's average spacing
//! 3. Corner-cutting subdivision, endpoints fixed
//!
//! Smoothing is a render-time transform; nothing here is persisted.

pub mod curves;
pub mod resample;
pub mod subdivide;

use rayon::prelude::*;
use tracing::debug;

use crate::segment::{average_spacing, Segment};

pub use curves::Curve;

/// Subdivision passes applied after a stroke ends.
pub const SMOOTH_ITERATIONS: usize = 3;

/// Figures gathered while smoothing, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothStats {
    /// Mean length of the raw segments.
    pub average_spacing: f64,
    /// Point-count threshold used by the resampler.
    pub skip: usize,
    /// Number of curves (pen-down runs).
    pub curves: usize,
    /// Number of segments left after resampling.
    pub resampled_segments: usize,
    /// Longest segment left after resampling.
    pub longest_segment: f64,
    /// Mean segment length after resampling (0 when nothing is left).
    pub mean_segment: f64,
}

/// Output of one smoothing pass.
#[derive(Debug, Clone)]
pub struct Smoothed {
    pub curves: Vec<Curve>,
    pub stats: SmoothStats,
}

/// Run the full smoothing pipeline over a segment log.
///
/// Returns `None` for an empty log: there is no average spacing and nothing
/// to draw.
pub fn smooth_segments(segments: &[Segment], iterations: usize) -> Option<Smoothed> {
    let average_spacing = average_spacing(segments)?;
    let skip = resample::skip_for(average_spacing);

    // Stage 1: pen-down runs.
    let raw = curves::build(segments);

    // Stage 2: resample each curve independently.
    let resampled: Vec<Curve> = raw
        .par_iter()
        .map(|c| resample::resample(c, skip))
        .collect();

    let (resampled_segments, total_length, longest_segment) = resampled
        .iter()
        .flat_map(|c| c.lines())
        .map(|l| l.p0.distance(l.p1))
        .fold((0usize, 0.0f64, 0.0f64), |(n, total, longest), len| {
            (n + 1, total + len, longest.max(len))
        });
    let mean_segment = if resampled_segments > 0 {
        total_length / resampled_segments as f64
    } else {
        0.0
    };

    // Stage 3: corner cutting, each pass on the previous pass's output.
    let smoothed: Vec<Curve> = resampled
        .par_iter()
        .map(|c| subdivide::smooth(c, iterations))
        .collect();

    let stats = SmoothStats {
        average_spacing,
        skip,
        curves: smoothed.len(),
        resampled_segments,
        longest_segment,
        mean_segment,
    };
    debug!(
        average_spacing = stats.average_spacing,
        skip = stats.skip,
        curves = stats.curves,
        resampled_segments = stats.resampled_segments,
        longest_segment = stats.longest_segment,
        mean_segment = stats.mean_segment,
        "smoothed signature"
    );
    for (i, (r, s)) in resampled.iter().zip(&smoothed).enumerate() {
        debug!(curve = i, resampled = r.len(), smoothed = s.len(), "curve sizes");
    }

    Some(Smoothed {
        curves: smoothed,
        stats,
    })
}
