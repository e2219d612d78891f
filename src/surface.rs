//! The drawing surface the pad renders onto.
//!
//! The pad only needs a handful of primitives, so hosts can back it with
//! whatever canvas they have. [`crate::render::PixmapSurface`] is the
//! built-in raster implementation.

use kurbo::Line;

use crate::config::{Colour, PadConfig, PenCap};

/// Stroke settings for a single line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub width: f64,
    pub cap: PenCap,
    pub colour: Colour,
}

impl Pen {
    /// The configured constant-width pen.
    pub fn from_config(config: &PadConfig) -> Self {
        Self {
            width: config.pen_width as f64,
            cap: config.pen_cap,
            colour: config.pen_colour,
        }
    }

    /// The same pen with a different width.
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }
}

/// Rendering primitives required by the pad.
pub trait Surface {
    /// Size in pixels as (width, height).
    fn dimensions(&self) -> (u32, u32);

    /// Erase every pixel to transparent.
    fn clear(&mut self);

    /// Fill the whole surface with a solid colour.
    fn fill(&mut self, colour: Colour);

    /// Stroke a straight line.
    fn stroke_line(&mut self, line: Line, pen: &Pen);
}

/// A drawing operation captured by [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Fill(Colour),
    Stroke(Line, Pen),
}

/// A surface that remembers what was drawn instead of rasterizing it.
///
/// Useful for headless hosts and for checking exactly what a render pass
/// emitted.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the recorded operations.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    /// Just the stroked lines, in drawing order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Line, &Pen)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Stroke(line, pen) => Some((line, pen)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill(&mut self, colour: Colour) {
        self.ops.push(SurfaceOp::Fill(colour));
    }

    fn stroke_line(&mut self, line: Line, pen: &Pen) {
        self.ops.push(SurfaceOp::Stroke(line, *pen));
    }
}
