// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability interface between a host engine and a drawing surface.

use std::io::Write;

use peniko::Color;
use peniko::kurbo::{Point, Rect};

use crate::style::DrawStyle;
use crate::{Error, Session};

/// The set of primitive operations a drawing surface accepts.
///
/// A host engine drives any implementation through
/// `&mut dyn DrawingBackend`, one call per primitive, in the order the
/// abstract drawing occurred. [`Session`] is the canonical
/// implementation; alternative backends substitute their own directive
/// set but must preserve the same call ordering semantics.
pub trait DrawingBackend {
    /// Starts a new page, optionally filled with `fill`.
    fn new_page(&mut self, fill: Color) -> Result<(), Error>;

    /// Sets the clip region; implementations may ignore it.
    fn set_clip(&mut self, region: Rect);

    /// Draws a single line segment.
    fn line(&mut self, from: Point, to: Point, style: &DrawStyle) -> Result<(), Error>;

    /// Draws an open run of connected line segments.
    fn polyline(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error>;

    /// Draws a closed polygon.
    fn polygon(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error>;

    /// Draws an axis-aligned rectangle.
    fn rect(&mut self, rect: Rect, style: &DrawStyle) -> Result<(), Error>;

    /// Draws a circle.
    fn circle(&mut self, center: Point, radius: f64, style: &DrawStyle) -> Result<(), Error>;

    /// Draws filled text at `origin`, rotated by `rotation` degrees and
    /// horizontally adjusted by `hadj`.
    fn text(
        &mut self,
        origin: Point,
        content: &str,
        rotation: f64,
        hadj: f64,
        color: Color,
    ) -> Result<(), Error>;

    /// Finalizes the surface.
    fn close(&mut self) -> Result<(), Error>;
}

impl<W: Write> DrawingBackend for Session<W> {
    fn new_page(&mut self, fill: Color) -> Result<(), Error> {
        Self::new_page(self, fill)
    }

    fn set_clip(&mut self, region: Rect) {
        Self::set_clip(self, region);
    }

    fn line(&mut self, from: Point, to: Point, style: &DrawStyle) -> Result<(), Error> {
        Self::line(self, from, to, style)
    }

    fn polyline(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error> {
        Self::polyline(self, points, style)
    }

    fn polygon(&mut self, points: &[Point], style: &DrawStyle) -> Result<(), Error> {
        Self::polygon(self, points, style)
    }

    fn rect(&mut self, rect: Rect, style: &DrawStyle) -> Result<(), Error> {
        Self::rect(self, rect, style)
    }

    fn circle(&mut self, center: Point, radius: f64, style: &DrawStyle) -> Result<(), Error> {
        Self::circle(self, center, radius, style)
    }

    fn text(
        &mut self,
        origin: Point,
        content: &str,
        rotation: f64,
        hadj: f64,
        color: Color,
    ) -> Result<(), Error> {
        Self::text(self, origin, content, rotation, hadj, color)
    }

    fn close(&mut self) -> Result<(), Error> {
        Self::close(self)
    }
}
