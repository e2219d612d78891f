//! The signature pad: one surface, one segment log, one stroke at a time.

use std::time::Instant;

use tracing::{debug, info};

use crate::codec;
use crate::config::PadConfig;
use crate::error::PadError;
use crate::render;
use crate::sample::Sample;
use crate::segment::{Segment, SegmentLog};
use crate::smooth::{smooth_segments, SmoothStats};
use crate::stroke::{self, InputDevice, StrokeContext, StrokeState};
use crate::surface::Surface;

/// A signature capture widget bound to a drawing surface.
///
/// The pad owns its surface and segment log exclusively. All operations
/// run to completion synchronously; hosts that share a pad across threads
/// must serialize access themselves (e.g. a `Mutex<SignaturePad<_>>`).
#[derive(Debug)]
pub struct SignaturePad<S: Surface> {
    surface: S,
    config: PadConfig,
    log: SegmentLog,
    stroke: StrokeContext,
    device: Option<InputDevice>,
}

impl<S: Surface> SignaturePad<S> {
    /// Bind a pad to `surface` and paint the background.
    ///
    /// Fails with [`PadError::SurfaceUnavailable`] if the surface has no
    /// pixels, and with [`PadError::InvalidConfig`] for unusable settings.
    pub fn new(mut surface: S, config: PadConfig) -> Result<Self, PadError> {
        config.validate()?;
        let (width, height) = surface.dimensions();
        if width == 0 || height == 0 {
            return Err(PadError::SurfaceUnavailable { width, height });
        }
        render::paint_background(&mut surface, &config);
        Ok(Self {
            surface,
            config,
            log: SegmentLog::new(),
            stroke: StrokeContext::default(),
            device: None,
        })
    }

    pub fn config(&self) -> &PadConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// The captured signature in drawing order.
    pub fn segments(&self) -> &SegmentLog {
        &self.log
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke.state()
    }

    /// The device kind latched by the first press, if any.
    pub fn device(&self) -> Option<InputDevice> {
        self.device
    }

    /// Latch the device on first use; reject input from the other kind.
    fn accepts(&mut self, device: InputDevice) -> bool {
        if self.config.display_only {
            return false;
        }
        *self.device.get_or_insert(device) == device
    }

    /// Pen down at `sample`.
    ///
    /// Draws the initial dot segment. A press while a stroke is still open
    /// finishes that stroke first.
    pub fn start_stroke(&mut self, sample: Sample, device: InputDevice) -> Option<Segment> {
        if !self.accepts(device) {
            return None;
        }
        if self.stroke.is_active() {
            self.end_stroke();
        }
        self.stroke.begin();
        stroke::record(
            &mut self.stroke,
            sample,
            true,
            &mut self.surface,
            &self.config,
            &mut self.log,
        )
    }

    /// Pointer moved to `sample` while the pen is down.
    ///
    /// Returns the recorded segment, or `None` when there is no open stroke
    /// or the sample repeats the previous one.
    pub fn append_sample(&mut self, sample: Sample, device: InputDevice) -> Option<Segment> {
        if !self.accepts(device) || !self.stroke.is_active() {
            return None;
        }
        self.stroke.resume();
        stroke::record(
            &mut self.stroke,
            sample,
            false,
            &mut self.surface,
            &self.config,
            &mut self.log,
        )
    }

    /// Pen up: close the stroke and redraw the signature smoothed.
    ///
    /// With an empty log nothing is redrawn and `None` is returned.
    pub fn end_stroke(&mut self) -> Option<SmoothStats> {
        self.stroke.finish();
        let smoothed = smooth_segments(self.log.as_slice(), self.config.smooth_iterations)?;
        render::draw_smoothed(&mut self.surface, &smoothed.curves, &self.config);
        Some(smoothed.stats)
    }

    /// The pointer left the surface at `now`.
    ///
    /// Mouse strokes end once the leave delay passes without another move
    /// (see [`SignaturePad::poll`]). Touch input has no leave.
    pub fn leave(&mut self, now: Instant) {
        if self.device == Some(InputDevice::Mouse) {
            self.stroke.leave(now + self.config.leave_delay());
        }
    }

    /// Drive the leave timer. Ends the stroke if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<SmoothStats> {
        if self.stroke.leave_expired(now) {
            debug!("pointer stayed outside, finishing stroke");
            self.end_stroke()
        } else {
            None
        }
    }

    /// Empty the log and repaint the background.
    pub fn clear(&mut self) {
        self.stroke.finish();
        self.log.clear();
        render::paint_background(&mut self.surface, &self.config);
        info!("cleared signature");
    }

    /// The signature as interchange JSON.
    pub fn serialize(&self) -> Result<String, PadError> {
        codec::serialize(self.log.as_slice())
    }

    /// Draw `records` on the visible surface without smoothing.
    /// With `append` they also join the segment log.
    pub fn replay(&mut self, records: &[Segment], append: bool) {
        let log = append.then_some(&mut self.log);
        codec::replay(records, &mut self.surface, &self.config, log);
    }

    /// Replace the current signature with one parsed from `text`.
    ///
    /// Parsing happens first; on error the pad is left exactly as it was.
    pub fn regenerate(&mut self, text: &str) -> Result<(), PadError> {
        let records = codec::deserialize(text)?;
        self.clear();
        self.replay(&records, true);
        info!(segments = records.len(), "regenerated signature");
        Ok(())
    }

    /// Render the raw segment log at constant pen width onto an offscreen
    /// pixmap the size of the visible surface.
    pub fn export_bitmap(&self) -> Result<tiny_skia::Pixmap, PadError> {
        render::export(self.log.as_slice(), self.surface.dimensions(), &self.config)
    }

    /// [`SignaturePad::export_bitmap`], encoded as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, PadError> {
        render::encode_png(&self.export_bitmap()?)
    }
}
