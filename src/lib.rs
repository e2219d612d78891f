//! sigpad: freehand signature capture → smooth, variable-width strokes.
//!
//! Pointer samples become line segments drawn live with a speed-sensitive
//! width. When the pen lifts, the segments are regrouped into curves,
//! resampled and smoothed by corner cutting, then redrawn. The raw segment
//! log is what gets stored; it can be replayed or exported as a bitmap.
//!
//! # Example
//!
//! ```no_run
//! use sigpad::{InputDevice, PadConfig, PixmapSurface, Sample, SignaturePad};
//!
//! let surface = PixmapSurface::new(198, 55)?;
//! let mut pad = SignaturePad::new(surface, PadConfig::default())?;
//! pad.start_stroke(Sample::new(20, 30), InputDevice::Mouse);
//! pad.append_sample(Sample::new(24, 31), InputDevice::Mouse);
//! pad.end_stroke();
//! let json = pad.serialize()?;
//! # Ok::<(), sigpad::PadError>(())
//! ```

#![forbid(unsafe_code)]

mod geom;
mod sample;
mod segment;
mod stroke;

pub mod codec;
pub mod config;
pub mod error;
pub mod pad;
pub mod render;
pub mod smooth;
pub mod surface;

// Re-export kurbo so hosts use the same point and line types.
pub use kurbo;
pub use tiny_skia;

pub use config::{Colour, PadConfig, PenCap};
pub use error::PadError;
pub use geom::{stroke_width, LENGTH_CLAMP, LENGTH_SCALE, MAX_STROKE_WIDTH};
pub use pad::SignaturePad;
pub use render::PixmapSurface;
pub use sample::Sample;
pub use segment::{Segment, SegmentLog};
pub use smooth::{Curve, SmoothStats, SMOOTH_ITERATIONS};
pub use stroke::{InputDevice, StrokeState, TAP_OFFSET_Y};
pub use surface::{Pen, RecordingSurface, Surface, SurfaceOp};

use std::time::Instant;

use tracing::info;

/// Redraw a stored signature onto a new pixmap.
///
/// With `smooth` set the replayed segments go through the same smoothing
/// pass a finished stroke gets; otherwise they are drawn verbatim at the
/// constant pen width.
pub fn render_signature(
    text: &str,
    (width, height): (u32, u32),
    config: &PadConfig,
    smooth: bool,
) -> Result<(tiny_skia::Pixmap, Option<SmoothStats>), PadError> {
    let t_start = Instant::now();

    let surface = PixmapSurface::new(width, height)?;
    let mut pad = SignaturePad::new(surface, config.clone())?;
    pad.regenerate(text)?;

    let stats = if smooth { pad.end_stroke() } else { None };
    info!(
        segments = pad.segments().len(),
        smoothed = stats.is_some(),
        elapsed_ms = t_start.elapsed().as_millis() as u64,
        "rendered signature"
    );
    Ok((pad.into_surface().into_pixmap(), stats))
}
