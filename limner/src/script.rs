// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The script directive vocabulary.
//!
//! Each method appends the textual form of exactly one directive to the
//! session's scratch buffer, followed by a single separating space. The
//! directive spellings, their argument order, and the six-decimal float
//! format are a compatibility contract with the receiving renderer;
//! changing any of them changes the wire format.

use core::fmt::Write as _;

use peniko::color::Rgba8;
use peniko::kurbo::{Point, Rect};

use crate::color::write_color;
use crate::style::{LineCap, LineJoin};

pub(crate) struct Emitter<'a> {
    out: &'a mut String,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(out: &'a mut String) -> Self {
        Self { out }
    }

    /// Ends the current script line, dropping the trailing separator.
    pub(crate) fn finish_line(&mut self) {
        if self.out.ends_with(' ') {
            self.out.pop();
        }
        self.out.push('\n');
    }

    pub(crate) fn page_marker(&mut self) {
        self.out.push_str("//NewPage\n");
    }

    pub(crate) fn fill_style(&mut self, color: Rgba8) {
        self.style_property("fillStyle", color);
    }

    pub(crate) fn stroke_style(&mut self, color: Rgba8) {
        self.style_property("strokeStyle", color);
    }

    fn style_property(&mut self, property: &str, color: Rgba8) {
        let _ = write!(self.out, "ctx.{property} = \"");
        write_color(self.out, color);
        self.out.push_str("\"; ");
    }

    pub(crate) fn line_width(&mut self, width: f64) {
        let _ = write!(self.out, "ctx.lineWidth = {width:.6}; ");
    }

    pub(crate) fn line_cap(&mut self, cap: LineCap) {
        let _ = write!(self.out, "ctx.lineCap = \"{}\"; ", cap.as_script());
    }

    pub(crate) fn line_join(&mut self, join: LineJoin) {
        let _ = write!(self.out, "ctx.lineJoin = \"{}\"; ", join.as_script());
    }

    pub(crate) fn miter_limit(&mut self, limit: f64) {
        let _ = write!(self.out, "ctx.miterLimit = {limit:.6}; ");
    }

    pub(crate) fn begin_path(&mut self) {
        self.out.push_str("ctx.beginPath(); ");
    }

    pub(crate) fn close_path(&mut self) {
        self.out.push_str("ctx.closePath(); ");
    }

    pub(crate) fn move_to(&mut self, p: Point) {
        let _ = write!(self.out, "ctx.moveTo({:.6},{:.6}); ", p.x, p.y);
    }

    pub(crate) fn line_to(&mut self, p: Point) {
        let _ = write!(self.out, "ctx.lineTo({:.6},{:.6}); ", p.x, p.y);
    }

    /// A full-circle arc centered on `center`.
    pub(crate) fn arc(&mut self, center: Point, radius: f64) {
        let _ = write!(
            self.out,
            "ctx.arc({:.6},{:.6},{:.6},0,Math.PI*2,true); ",
            center.x, center.y, radius
        );
    }

    pub(crate) fn fill(&mut self) {
        self.out.push_str("ctx.fill(); ");
    }

    pub(crate) fn stroke(&mut self) {
        self.out.push_str("ctx.stroke(); ");
    }

    pub(crate) fn fill_rect(&mut self, rect: Rect) {
        let _ = write!(
            self.out,
            "ctx.fillRect({:.6},{:.6},{:.6},{:.6}); ",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
    }

    pub(crate) fn stroke_rect(&mut self, rect: Rect) {
        let _ = write!(
            self.out,
            "ctx.strokeRect({:.6},{:.6},{:.6},{:.6}); ",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height()
        );
    }

    pub(crate) fn save(&mut self) {
        self.out.push_str("ctx.save(); ");
    }

    pub(crate) fn restore(&mut self) {
        self.out.push_str("ctx.restore(); ");
    }

    pub(crate) fn translate(&mut self, p: Point) {
        let _ = write!(self.out, "ctx.translate({:.6},{:.6}); ", p.x, p.y);
    }

    /// Rotation by `degrees`, counter-clockwise in canvas coordinates.
    ///
    /// The emitted argument stays in degrees; the degree-to-radian
    /// conversion runs in the replaying renderer.
    pub(crate) fn rotate_degrees(&mut self, degrees: f64) {
        let _ = write!(self.out, "ctx.rotate(-{degrees:.6} / 180 * Math.PI); ");
    }

    pub(crate) fn fill_text(&mut self, content: &str, p: Point) {
        self.out.push_str("ctx.fillText(\"");
        write_escaped(self.out, content);
        let _ = write!(self.out, "\",{:.6},{:.6}); ", p.x, p.y);
    }
}

/// Escapes `text` so the emitted string literal stays well-formed.
fn write_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '"' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_end_with_single_separator() {
        let mut buf = String::new();
        let mut e = Emitter::new(&mut buf);
        e.begin_path();
        e.move_to(Point::new(1.0, 2.0));
        e.finish_line();
        assert_eq!(buf, "ctx.beginPath(); ctx.moveTo(1.000000,2.000000);\n");
    }

    #[test]
    fn text_content_is_escaped() {
        let mut buf = String::new();
        let mut e = Emitter::new(&mut buf);
        e.fill_text("say \"hi\"\\", Point::new(0.0, 0.0));
        assert_eq!(
            buf,
            "ctx.fillText(\"say \\\"hi\\\"\\\\\",0.000000,0.000000); "
        );
    }
}
