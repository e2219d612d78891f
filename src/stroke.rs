//! Live stroke capture.
//!
//! A stroke moves through `Idle → Capturing → (Leaving) → Idle`. The
//! context carries the previous sample and any pending leave deadline
//! between input events.

use std::time::Instant;

use tracing::trace;

use crate::config::PadConfig;
use crate::geom::stroke_width;
use crate::sample::Sample;
use crate::segment::{Segment, SegmentLog};
use crate::surface::{Pen, Surface};

/// Vertical offset applied to the first sample of a stroke so a tap
/// leaves a dot.
pub const TAP_OFFSET_Y: i32 = 1;

/// Kind of input device driving the pad. Latched at the first press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDevice {
    Mouse,
    Touch,
}

/// Where the current stroke is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Capturing,
    /// The pointer left the surface; the stroke ends at `deadline` unless
    /// it moves again first.
    Leaving { deadline: Instant },
}

/// Per-stroke state threaded through capture calls.
#[derive(Debug, Clone, Default)]
pub struct StrokeContext {
    previous: Option<Sample>,
    state: StrokeState,
}

impl StrokeContext {
    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != StrokeState::Idle
    }

    /// Pen down: forget the previous sample and start capturing.
    pub fn begin(&mut self) {
        self.previous = None;
        self.state = StrokeState::Capturing;
    }

    /// Pointer moved: a pending leave is cancelled.
    pub fn resume(&mut self) {
        if let StrokeState::Leaving { .. } = self.state {
            self.state = StrokeState::Capturing;
        }
    }

    /// Pointer left the surface. An existing deadline is kept.
    pub fn leave(&mut self, deadline: Instant) {
        if self.state == StrokeState::Capturing {
            self.state = StrokeState::Leaving { deadline };
        }
    }

    /// Whether a pending leave has run out at `now`.
    pub fn leave_expired(&self, now: Instant) -> bool {
        matches!(self.state, StrokeState::Leaving { deadline } if now >= deadline)
    }

    /// Pen up.
    pub fn finish(&mut self) {
        self.previous = None;
        self.state = StrokeState::Idle;
    }
}

/// Record one increment of motion ending at `current`.
///
/// On the first sample of a stroke the previous point is seeded with
/// `current`, which is then nudged down by [`TAP_OFFSET_Y`] so even a tap
/// yields a visible segment. A sample equal to the previous one is ignored.
///
/// The segment is drawn immediately with a width derived from its length
/// and appended to `log`.
pub fn record<S: Surface + ?Sized>(
    ctx: &mut StrokeContext,
    current: Sample,
    first_of_stroke: bool,
    surface: &mut S,
    config: &PadConfig,
    log: &mut SegmentLog,
) -> Option<Segment> {
    if ctx.previous == Some(current) {
        return None;
    }
    let previous = *ctx.previous.get_or_insert(current);
    let current = if first_of_stroke {
        Sample::new(current.x, current.y.saturating_add(TAP_OFFSET_Y))
    } else {
        current
    };

    let segment = Segment::new(previous, current);
    let width = stroke_width(previous.distance(current));
    surface.stroke_line(segment.to_line(), &Pen::from_config(config).with_width(width));
    log.push(segment);
    trace!(?segment, width, "recorded segment");

    ctx.previous = Some(current);
    Some(segment)
}
