// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing sessions: one open target emitting an append-only script.

use std::io::Write;

use peniko::Color;
use peniko::color::Rgba8;
use peniko::kurbo::{Point, Rect};

use crate::Error;
use crate::script::Emitter;
use crate::style::{DrawStyle, LinePattern, StyleCache};

/// Estimated per-character advance, in device units, used to place
/// horizontally adjusted or rotated text.
///
/// The translator has no access to shaped-text extents at emission time,
/// so the horizontal-adjustment origin shift uses this fixed guess per
/// character instead of the true string width. The receiving renderer
/// defaults to a 10px face, for which 7 tracks the average advance more
/// closely. This is a deliberate, behavior-defining approximation:
/// replaying implementations must use the same constant to reproduce
/// identical output.
pub const CHAR_WIDTH_GUESS: f64 = 7.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Open,
    Poisoned,
    Closed,
}

/// One open drawing target.
///
/// A session owns its output sink exclusively and appends script
/// directives to it, one primitive call at a time, in the order the
/// abstract drawing occurred. Previously emitted directives are never
/// removed or reordered.
///
/// The API is synchronous and single-caller: every operation takes
/// `&mut self`, so concurrent use of one session is ruled out at compile
/// time. Each primitive is formatted in full before anything reaches the
/// sink; a failed write poisons the session and every later operation
/// fails fast with [`Error::Poisoned`].
///
/// [`close`](Self::close) finalizes the sink exactly once. Dropping an
/// unclosed session discards nothing that was already written but skips
/// the final flush.
pub struct Session<W: Write> {
    sink: W,
    width: f64,
    height: f64,
    background: Color,
    foreground: Color,
    style: StyleCache,
    scratch: String,
    lifecycle: Lifecycle,
}

impl<W: Write> Session<W> {
    /// Opens a session over `sink` with the given canvas extents.
    ///
    /// `background` and `foreground` are recorded as the page defaults a
    /// host passes back into [`new_page`](Self::new_page) and
    /// [`text`](Self::text); opening emits nothing by itself.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if `width` or `height` is not
    /// strictly positive.
    pub fn open(
        sink: W,
        width: f64,
        height: f64,
        background: Color,
        foreground: Color,
    ) -> Result<Self, Error> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidDimension { width, height });
        }
        log::trace!("session open, canvas {width}x{height}");
        Ok(Self {
            sink,
            width,
            height,
            background,
            foreground,
            style: StyleCache::default(),
            scratch: String::new(),
            lifecycle: Lifecycle::Open,
        })
    }

    /// Canvas width in device units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in device units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The page background color recorded at open.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The default drawing color recorded at open.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The fill color most recently emitted to the sink, if any.
    pub fn last_fill_color(&self) -> Option<Rgba8> {
        self.style.last_fill()
    }

    /// The stroke color most recently emitted to the sink, if any.
    pub fn last_stroke_color(&self) -> Option<Rgba8> {
        self.style.last_stroke()
    }

    /// Consumes the session and returns the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Starts a new page.
    ///
    /// Emits the page marker and, when `fill` is not fully transparent,
    /// a full-canvas fill in that color. Each call produces a complete,
    /// independent page; nothing carries over from the previous one.
    pub fn new_page(&mut self, fill: Color) -> Result<(), Error> {
        self.ensure_open()?;
        let mut style = self.style;
        let mut emitter = Emitter::new(&mut self.scratch);
        emitter.page_marker();
        let rgba = fill.to_rgba8();
        if rgba.a != 0 {
            emitter.fill_style(rgba);
            style.record_fill(rgba);
            emitter.fill_rect(Rect::new(0.0, 0.0, self.width, self.height));
            emitter.finish_line();
        }
        self.commit(style)
    }

    /// Sets the clip region. **This is a deliberate no-op.**
    ///
    /// Honoring clip regions would require saving and restoring the full
    /// renderer context (transform and style state included) around
    /// every region change, which this script format does not model.
    /// Nothing is recorded and the call never fails; conformance tests
    /// must not expect clipping behavior.
    pub fn set_clip(&mut self, region: Rect) {
        log::trace!("clip request ignored: {region:?}");
    }

    /// Draws a single line segment.
    pub fn line(&mut self, from: Point, to: Point, style: &DrawStyle) -> Result<(), Error> {
        self.ensure_open()?;
        let mut cache = self.style;
        if let Some(stroke) = stroke_color(style) {
            let mut emitter = Emitter::new(&mut self.scratch);
            cache.apply_line_style(&mut emitter, &style.line);
            emitter.stroke_style(stroke);
            cache.record_stroke(stroke);
            emitter.begin_path();
            emitter.move_to(from);
            emitter.line_to(to);
            emitter.stroke();
            emitter.finish_line();
        }
        self.commit(cache)
    }

    /// Draws an open run of connected line segments.
    ///
    /// Fewer than two points is not drawable and emits nothing; this is
    /// not an error.
    pub fn polyline(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error> {
        self.ensure_open()?;
        if points.len() < 2 {
            log::debug!("polyline with {} point(s) skipped", points.len());
            return Ok(());
        }
        let mut cache = self.style;
        if let Some(stroke) = stroke_color(style) {
            let mut emitter = Emitter::new(&mut self.scratch);
            emitter.begin_path();
            emitter.move_to(points[0]);
            for p in &points[1..] {
                emitter.line_to(*p);
            }
            cache.apply_line_style(&mut emitter, &style.line);
            emitter.stroke_style(stroke);
            cache.record_stroke(stroke);
            emitter.stroke();
            emitter.finish_line();
        }
        self.commit(cache)
    }

    /// Draws a closed polygon, fill under stroke.
    ///
    /// Fewer than two points is not drawable and emits nothing; this is
    /// not an error.
    pub fn polygon(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error> {
        self.ensure_open()?;
        if points.len() < 2 {
            log::debug!("polygon with {} point(s) skipped", points.len());
            return Ok(());
        }
        let fill = fill_color(style);
        let stroke = stroke_color(style);
        let mut cache = self.style;
        if fill.is_some() || stroke.is_some() {
            let mut emitter = Emitter::new(&mut self.scratch);
            emitter.begin_path();
            emitter.move_to(points[0]);
            for p in &points[1..] {
                emitter.line_to(*p);
            }
            emitter.close_path();
            if let Some(fill) = fill {
                emitter.fill_style(fill);
                cache.record_fill(fill);
                emitter.fill();
            }
            if let Some(stroke) = stroke {
                cache.apply_line_style(&mut emitter, &style.line);
                emitter.stroke_style(stroke);
                cache.record_stroke(stroke);
                emitter.stroke();
            }
            emitter.finish_line();
        }
        self.commit(cache)
    }

    /// Draws an axis-aligned rectangle, fill under stroke.
    pub fn rect(&mut self, rect: Rect, style: &DrawStyle) -> Result<(), Error> {
        self.ensure_open()?;
        let fill = fill_color(style);
        let stroke = stroke_color(style);
        let mut cache = self.style;
        if fill.is_some() || stroke.is_some() {
            let mut emitter = Emitter::new(&mut self.scratch);
            if let Some(fill) = fill {
                emitter.fill_style(fill);
                cache.record_fill(fill);
                emitter.fill_rect(rect);
            }
            if let Some(stroke) = stroke {
                cache.apply_line_style(&mut emitter, &style.line);
                emitter.stroke_style(stroke);
                cache.record_stroke(stroke);
                emitter.stroke_rect(rect);
            }
            emitter.finish_line();
        }
        self.commit(cache)
    }

    /// Draws a circle, fill under stroke.
    pub fn circle(&mut self, center: Point, radius: f64, style: &DrawStyle) -> Result<(), Error> {
        self.ensure_open()?;
        let fill = fill_color(style);
        let stroke = stroke_color(style);
        let mut cache = self.style;
        if fill.is_some() || stroke.is_some() {
            let mut emitter = Emitter::new(&mut self.scratch);
            emitter.begin_path();
            emitter.arc(center, radius);
            if let Some(fill) = fill {
                emitter.fill_style(fill);
                cache.record_fill(fill);
                emitter.fill();
            }
            if let Some(stroke) = stroke {
                cache.apply_line_style(&mut emitter, &style.line);
                emitter.stroke_style(stroke);
                cache.record_stroke(stroke);
                emitter.stroke();
            }
            emitter.finish_line();
        }
        self.commit(cache)
    }

    /// Draws filled text with its baseline origin at `origin`.
    ///
    /// `rotation` is in degrees, counter-clockwise. `hadj` shifts the
    /// origin left by `hadj` times the estimated string extent
    /// (see [`CHAR_WIDTH_GUESS`]): `0.0` left-aligns, `0.5` centers,
    /// `1.0` right-aligns on the origin.
    ///
    /// Text is always filled, never stroked, and a fill-color directive
    /// is emitted immediately before every text instruction. Rotated
    /// text is wrapped in a save/restore pair so the renderer transform
    /// is always restored.
    pub fn text(
        &mut self,
        origin: Point,
        content: &str,
        rotation: f64,
        hadj: f64,
        color: Color,
    ) -> Result<(), Error> {
        self.ensure_open()?;
        let rgba = color.to_rgba8();
        let mut cache = self.style;
        let mut emitter = Emitter::new(&mut self.scratch);
        if rotation != 0.0 {
            let extent = estimate_extent(content);
            emitter.save();
            emitter.fill_style(rgba);
            emitter.translate(origin);
            emitter.rotate_degrees(rotation);
            emitter.fill_text(content, Point::new(-extent * hadj, 0.0));
            emitter.restore();
        } else if hadj != 0.0 {
            let extent = estimate_extent(content);
            emitter.fill_style(rgba);
            emitter.fill_text(content, Point::new(origin.x - extent * hadj, origin.y));
        } else {
            emitter.fill_style(rgba);
            emitter.fill_text(content, origin);
        }
        emitter.finish_line();
        cache.record_fill(rgba);
        self.commit(cache)
    }

    /// Flushes and finalizes the sink.
    ///
    /// Valid on a session that never emitted a primitive. A second close
    /// fails with [`Error::DoubleClose`] and leaves the sink exactly as
    /// the first close flushed it.
    pub fn close(&mut self) -> Result<(), Error> {
        match self.lifecycle {
            Lifecycle::Closed => Err(Error::DoubleClose),
            Lifecycle::Poisoned => Err(Error::Poisoned),
            Lifecycle::Open => match self.sink.flush() {
                Ok(()) => {
                    self.lifecycle = Lifecycle::Closed;
                    log::trace!("session closed");
                    Ok(())
                }
                Err(e) => {
                    self.lifecycle = Lifecycle::Poisoned;
                    Err(Error::Io(e))
                }
            },
        }
    }

    fn ensure_open(&self) -> Result<(), Error> {
        match self.lifecycle {
            Lifecycle::Open => Ok(()),
            Lifecycle::Poisoned => Err(Error::Poisoned),
            Lifecycle::Closed => Err(Error::Closed),
        }
    }

    /// Writes the scratch buffer to the sink in one call, then commits
    /// the pending style cache.
    ///
    /// The cache is committed only on success, so it always reflects
    /// what actually reached the sink.
    fn commit(&mut self, pending: StyleCache) -> Result<(), Error> {
        let result = self.sink.write_all(self.scratch.as_bytes());
        self.scratch.clear();
        match result {
            Ok(()) => {
                self.style = pending;
                Ok(())
            }
            Err(e) => {
                self.lifecycle = Lifecycle::Poisoned;
                Err(Error::Io(e))
            }
        }
    }
}

impl<W: Write> core::fmt::Debug for Session<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}

/// Estimated string extent for text placement.
fn estimate_extent(content: &str) -> f64 {
    content.chars().count() as f64 * CHAR_WIDTH_GUESS
}

fn stroke_color(style: &DrawStyle) -> Option<Rgba8> {
    if style.line.pattern == LinePattern::Blank {
        return None;
    }
    let rgba = style.stroke.to_rgba8();
    (rgba.a != 0).then_some(rgba)
}

fn fill_color(style: &DrawStyle) -> Option<Rgba8> {
    let rgba = style.fill.to_rgba8();
    (rgba.a != 0).then_some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{LineCap, LineStyle};
    use std::io;

    fn open() -> Session<Vec<u8>> {
        Session::open(Vec::new(), 200.0, 100.0, Color::WHITE, Color::BLACK).unwrap()
    }

    fn script(session: Session<Vec<u8>>) -> String {
        String::from_utf8(session.into_inner()).unwrap()
    }

    const DEFAULT_STYLE_LINE: &str = "ctx.lineWidth = 1.000000; ctx.lineCap = \"butt\"; \
         ctx.lineJoin = \"miter\"; ctx.miterLimit = 10.000000;\n";

    #[test]
    fn open_rejects_bad_dimensions() {
        for (w, h) in [(0.0, 100.0), (100.0, 0.0), (-1.0, 100.0), (f64::NAN, 1.0)] {
            let result = Session::open(Vec::new(), w, h, Color::WHITE, Color::BLACK);
            assert!(matches!(
                result,
                Err(Error::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn open_emits_nothing() {
        let mut s = open();
        s.close().unwrap();
        assert_eq!(script(s), "");
    }

    #[test]
    fn line_emits_style_then_color_then_path() {
        let mut s = open();
        s.line(
            Point::new(10.0, 20.0),
            Point::new(30.0, 40.0),
            &DrawStyle::stroked(Color::BLACK),
        )
        .unwrap();
        s.close().unwrap();
        let expected = format!(
            "{DEFAULT_STYLE_LINE}ctx.strokeStyle = \"rgb(0,0,0)\"; ctx.beginPath(); \
             ctx.moveTo(10.000000,20.000000); ctx.lineTo(30.000000,40.000000); ctx.stroke();\n"
        );
        assert_eq!(script(s), expected);
    }

    #[test]
    fn repeated_style_is_not_reemitted() {
        let mut s = open();
        let style = DrawStyle::stroked(Color::BLACK);
        let (a, b) = (Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        s.line(a, b, &style).unwrap();
        s.line(a, b, &style).unwrap();
        s.close().unwrap();
        let out = script(s);
        assert_eq!(out.matches("ctx.lineWidth").count(), 1);
        assert_eq!(out.matches("ctx.lineCap").count(), 1);
        assert_eq!(out.matches("ctx.stroke();").count(), 2);
    }

    #[test]
    fn style_change_reemits_only_that_property() {
        let mut s = open();
        let style = DrawStyle::stroked(Color::BLACK);
        let mut round = style;
        round.line.cap = LineCap::Round;
        let (a, b) = (Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        s.line(a, b, &style).unwrap();
        s.line(a, b, &round).unwrap();
        s.close().unwrap();
        let out = script(s);
        assert_eq!(out.matches("ctx.lineWidth").count(), 1);
        assert_eq!(out.matches("ctx.lineCap").count(), 2);
        assert!(out.contains("ctx.lineCap = \"round\";\n"));
    }

    #[test]
    fn transparent_stroke_emits_nothing() {
        let mut s = open();
        s.line(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &DrawStyle::stroked(Color::TRANSPARENT),
        )
        .unwrap();
        s.close().unwrap();
        assert_eq!(script(s), "");
    }

    #[test]
    fn blank_pattern_disables_stroke() {
        let mut s = open();
        let mut style = DrawStyle::stroked(Color::BLACK);
        style.line.pattern = LinePattern::Blank;
        s.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &style)
            .unwrap();
        // A blank-pattern rect still fills.
        style.fill = Color::from_rgba8(0, 255, 0, 255);
        s.rect(Rect::new(0.0, 0.0, 10.0, 10.0), &style).unwrap();
        s.close().unwrap();
        let out = script(s);
        assert!(!out.contains("stroke"));
        assert!(out.contains("ctx.fillRect"));
    }

    #[test]
    fn new_page_twice_produces_two_independent_pages() {
        let mut s = open();
        s.new_page(Color::from_rgba8(255, 0, 0, 255)).unwrap();
        s.new_page(Color::from_rgba8(0, 0, 255, 255)).unwrap();
        s.close().unwrap();
        assert_eq!(
            script(s),
            "//NewPage\nctx.fillStyle = \"rgb(255,0,0)\"; \
             ctx.fillRect(0.000000,0.000000,200.000000,100.000000);\n\
             //NewPage\nctx.fillStyle = \"rgb(0,0,255)\"; \
             ctx.fillRect(0.000000,0.000000,200.000000,100.000000);\n"
        );
    }

    #[test]
    fn new_page_with_transparent_fill_only_marks() {
        let mut s = open();
        s.new_page(Color::TRANSPARENT).unwrap();
        s.close().unwrap();
        assert_eq!(script(s), "//NewPage\n");
    }

    #[test]
    fn set_clip_records_nothing() {
        let mut s = open();
        s.set_clip(Rect::new(10.0, 10.0, 50.0, 50.0));
        s.close().unwrap();
        assert_eq!(script(s), "");
    }

    #[test]
    fn degenerate_polyline_and_polygon_are_silent() {
        let mut s = open();
        let style = DrawStyle::stroked(Color::BLACK);
        s.polyline(&[], &style).unwrap();
        s.polyline(&[Point::new(1.0, 1.0)], &style).unwrap();
        s.polygon(&[Point::new(1.0, 1.0)], &style).unwrap();
        s.close().unwrap();
        assert_eq!(script(s), "");
    }

    #[test]
    fn polyline_emits_path_before_style() {
        let mut s = open();
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 5.0),
        ];
        s.polyline(&pts, &DrawStyle::stroked(Color::BLACK)).unwrap();
        s.close().unwrap();
        let out = script(s);
        assert_eq!(out.matches("ctx.lineTo").count(), 2);
        let path_at = out.find("ctx.beginPath").unwrap();
        let style_at = out.find("ctx.lineWidth").unwrap();
        let color_at = out.find("ctx.strokeStyle").unwrap();
        let stroke_at = out.find("ctx.stroke()").unwrap();
        assert!(path_at < style_at && style_at < color_at && color_at < stroke_at);
    }

    #[test]
    fn polygon_fills_under_stroke() {
        let mut s = open();
        let style = DrawStyle {
            stroke: Color::BLACK,
            fill: Color::from_rgba8(200, 10, 10, 255),
            line: LineStyle::default(),
        };
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ];
        s.polygon(&pts, &style).unwrap();
        s.close().unwrap();
        let out = script(s);
        assert!(out.contains("ctx.closePath()"));
        let fill_at = out.find("ctx.fill()").unwrap();
        let stroke_at = out.find("ctx.stroke()").unwrap();
        assert!(fill_at < stroke_at);
    }

    #[test]
    fn circle_arc_form() {
        let mut s = open();
        s.circle(
            Point::new(50.0, 40.0),
            10.0,
            &DrawStyle::filled(Color::from_rgba8(1, 2, 3, 255)),
        )
        .unwrap();
        s.close().unwrap();
        assert_eq!(
            script(s),
            "ctx.beginPath(); ctx.arc(50.000000,40.000000,10.000000,0,Math.PI*2,true); \
             ctx.fillStyle = \"rgb(1,2,3)\"; ctx.fill();\n"
        );
    }

    #[test]
    fn rect_with_fill_and_stroke() {
        let mut s = open();
        let style = DrawStyle {
            stroke: Color::BLACK,
            fill: Color::WHITE,
            line: LineStyle::default(),
        };
        s.rect(Rect::new(5.0, 6.0, 25.0, 16.0), &style).unwrap();
        s.close().unwrap();
        let expected = format!(
            "ctx.fillStyle = \"rgb(255,255,255)\"; \
             ctx.fillRect(5.000000,6.000000,20.000000,10.000000); \
             {DEFAULT_STYLE_LINE}ctx.strokeStyle = \"rgb(0,0,0)\"; \
             ctx.strokeRect(5.000000,6.000000,20.000000,10.000000);\n"
        );
        assert_eq!(script(s), expected);
    }

    #[test]
    fn plain_text_is_one_color_one_fill_text() {
        let mut s = open();
        s.text(Point::new(5.0, 6.0), "hi", 0.0, 0.0, Color::BLACK)
            .unwrap();
        s.close().unwrap();
        let out = script(s);
        assert_eq!(
            out,
            "ctx.fillStyle = \"rgb(0,0,0)\"; ctx.fillText(\"hi\",5.000000,6.000000);\n"
        );
        assert!(!out.contains("ctx.save"));
        assert!(!out.contains("ctx.restore"));
    }

    #[test]
    fn adjusted_text_shifts_by_estimated_extent() {
        let mut s = open();
        // "abc" estimates to 21 units; centering shifts by 10.5.
        s.text(Point::new(5.0, 6.0), "abc", 0.0, 0.5, Color::BLACK)
            .unwrap();
        s.close().unwrap();
        assert_eq!(
            script(s),
            "ctx.fillStyle = \"rgb(0,0,0)\"; ctx.fillText(\"abc\",-5.500000,6.000000);\n"
        );
    }

    #[test]
    fn rotated_text_is_wrapped_in_save_restore() {
        let mut s = open();
        s.text(Point::new(5.0, 6.0), "abc", 90.0, 0.5, Color::BLACK)
            .unwrap();
        s.close().unwrap();
        assert_eq!(
            script(s),
            "ctx.save(); ctx.fillStyle = \"rgb(0,0,0)\"; ctx.translate(5.000000,6.000000); \
             ctx.rotate(-90.000000 / 180 * Math.PI); ctx.fillText(\"abc\",-10.500000,0.000000); \
             ctx.restore();\n"
        );
    }

    #[test]
    fn text_records_last_fill_color() {
        let mut s = open();
        let color = Color::from_rgba8(9, 8, 7, 255);
        s.text(Point::new(0.0, 0.0), "x", 0.0, 0.0, color).unwrap();
        assert_eq!(s.last_fill_color(), Some(color.to_rgba8()));
        assert_eq!(s.last_stroke_color(), None);
    }

    #[test]
    fn double_close_reports_and_preserves_sink() {
        let mut s = open();
        s.new_page(Color::WHITE).unwrap();
        s.close().unwrap();
        assert!(matches!(s.close(), Err(Error::DoubleClose)));
        assert!(matches!(
            s.line(
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                &DrawStyle::default()
            ),
            Err(Error::Closed)
        ));
        let out = script(s);
        assert!(out.starts_with("//NewPage\n"));
    }

    /// A sink that fails every write.
    struct BrokenSink;

    impl io::Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("sink gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_poisons_the_session() {
        let mut s = Session::open(BrokenSink, 10.0, 10.0, Color::WHITE, Color::BLACK).unwrap();
        let style = DrawStyle::stroked(Color::BLACK);
        let result = s.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &style);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(matches!(
            s.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &style),
            Err(Error::Poisoned)
        ));
        assert!(matches!(s.new_page(Color::WHITE), Err(Error::Poisoned)));
        assert!(matches!(s.close(), Err(Error::Poisoned)));
    }

    #[test]
    fn failed_write_does_not_corrupt_style_cache() {
        let mut s = Session::open(BrokenSink, 10.0, 10.0, Color::WHITE, Color::BLACK).unwrap();
        let style = DrawStyle::stroked(Color::BLACK);
        let _ = s.line(Point::new(0.0, 0.0), Point::new(1.0, 1.0), &style);
        assert_eq!(s.last_stroke_color(), None);
    }
}
