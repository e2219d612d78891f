//! Raster rendering of signatures.
//!
//! Two independent paths: the smoothed pass that redraws the visible
//! surface after a stroke, and the raw pass that replays the segment log
//! verbatim onto an offscreen pixmap for export.

use kurbo::Line;
use tracing::debug;

use crate::config::{PadConfig, PenCap};
use crate::error::PadError;
use crate::geom::width_between;
use crate::segment::Segment;
use crate::smooth::Curve;
use crate::surface::{Pen, Surface};

/// A [`Surface`] backed by a tiny-skia pixmap.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: tiny_skia::Pixmap,
}

impl PixmapSurface {
    /// Allocate a transparent surface.
    ///
    /// Fails with [`PadError::SurfaceUnavailable`] for zero-sized or
    /// unallocatable dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, PadError> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(PadError::SurfaceUnavailable { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &tiny_skia::Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> tiny_skia::Pixmap {
        self.pixmap
    }

    /// Snapshot the surface as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, PadError> {
        encode_png(&self.pixmap)
    }
}

impl Surface for PixmapSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill(&mut self, colour: crate::config::Colour) {
        self.pixmap.fill(colour.to_skia());
    }

    fn stroke_line(&mut self, line: Line, pen: &Pen) {
        // A zero width would become a hairline in tiny-skia.
        if pen.width.is_nan() || pen.width <= 0.0 {
            return;
        }
        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(line.p0.x as f32, line.p0.y as f32);
        pb.line_to(line.p1.x as f32, line.p1.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(pen.colour.to_skia());
        paint.anti_alias = true;
        let stroke = tiny_skia::Stroke {
            width: pen.width as f32,
            line_cap: to_line_cap(pen.cap),
            ..tiny_skia::Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
    }
}

fn to_line_cap(cap: PenCap) -> tiny_skia::LineCap {
    match cap {
        PenCap::Butt => tiny_skia::LineCap::Butt,
        PenCap::Round => tiny_skia::LineCap::Round,
        PenCap::Square => tiny_skia::LineCap::Square,
    }
}

/// Erase the surface and repaint the background colour.
pub fn paint_background<S: Surface + ?Sized>(surface: &mut S, config: &PadConfig) {
    surface.clear();
    surface.fill(config.bg_colour);
}

/// Redraw the visible surface from smoothed curves.
///
/// Every sub-segment gets its own distance-derived width, so width varies
/// continuously along a finished stroke.
pub fn draw_smoothed<S: Surface + ?Sized>(surface: &mut S, curves: &[Curve], config: &PadConfig) {
    paint_background(surface, config);
    let pen = Pen::from_config(config);
    let mut strokes = 0usize;
    for curve in curves {
        for line in curve.lines() {
            surface.stroke_line(line, &pen.with_width(width_between(line.p0, line.p1)));
            strokes += 1;
        }
    }
    debug!(curves = curves.len(), strokes, "drew smoothed signature");
}

/// Draw segments verbatim at the configured constant pen width.
pub fn draw_segments<'a, S, I>(surface: &mut S, segments: I, config: &PadConfig)
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Segment>,
{
    let pen = Pen::from_config(config);
    for seg in segments {
        surface.stroke_line(seg.to_line(), &pen);
    }
}

/// Replay raw segments onto a fresh offscreen pixmap of the given size.
pub fn export(
    segments: &[Segment],
    (width, height): (u32, u32),
    config: &PadConfig,
) -> Result<tiny_skia::Pixmap, PadError> {
    let mut offscreen = PixmapSurface::new(width, height)?;
    offscreen.fill(config.bg_colour);
    draw_segments(&mut offscreen, segments, config);
    debug!(width, height, segments = segments.len(), "exported signature bitmap");
    Ok(offscreen.into_pixmap())
}

/// Encode a pixmap to PNG bytes (straight alpha).
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, PadError> {
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buf = Vec::new();
    let mut encoder = png::Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| PadError::Encode(e.to_string()))?;
    writer
        .write_image_data(&data)
        .map_err(|e| PadError::Encode(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| PadError::Encode(e.to_string()))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Colour;
    use crate::sample::Sample;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use kurbo::Point;

    fn seg(mx: i32, my: i32, lx: i32, ly: i32) -> Segment {
        Segment::new(Sample::new(mx, my), Sample::new(lx, ly))
    }

    #[test]
    fn zero_sized_surface_is_unavailable() {
        assert!(matches!(
            PixmapSurface::new(0, 10),
            Err(PadError::SurfaceUnavailable { width: 0, height: 10 })
        ));
    }

    #[test]
    fn smoothed_pass_clears_then_strokes_with_varying_width() {
        let config = PadConfig::default();
        let curve = Curve::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(11.0, 0.0),
        ]);
        let mut surface = RecordingSurface::new(50, 20);
        draw_smoothed(&mut surface, &[curve], &config);

        let ops = surface.ops();
        assert_eq!(ops[0], SurfaceOp::Clear);
        assert_eq!(ops[1], SurfaceOp::Fill(config.bg_colour));
        let widths: Vec<f64> = surface.strokes().map(|(_, pen)| pen.width).collect();
        assert_eq!(widths, vec![3.0, 0.5]);
    }

    #[test]
    fn raw_pass_uses_constant_pen_width() {
        let config = PadConfig::default();
        let mut surface = RecordingSurface::new(50, 20);
        draw_segments(&mut surface, &[seg(0, 0, 1, 0), seg(1, 0, 30, 0)], &config);
        assert!(surface.strokes().all(|(_, pen)| pen.width == 2.0));
        assert_eq!(surface.strokes().count(), 2);
    }

    #[test]
    fn export_inks_the_stroke_and_keeps_background() {
        let config = PadConfig {
            pen_colour: Colour::BLACK,
            pen_width: 4.0,
            ..PadConfig::default()
        };
        let pixmap = export(&[seg(2, 10, 38, 10)], (40, 20), &config).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 20));

        let on_line = pixmap.pixel(20, 10).unwrap();
        assert!(on_line.red() < 64, "expected ink, got {:?}", on_line);
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.alpha()), (255, 255));
    }

    #[test]
    fn png_has_signature_header() {
        let surface = PixmapSurface::new(4, 4).unwrap();
        let png = surface.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
