// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke style parameters and last-emitted style state.

use peniko::Color;
use peniko::color::Rgba8;

use crate::script::Emitter;

/// Shape applied to stroke endpoints.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Squared end flush with the endpoint.
    #[default]
    Butt,
    /// Semicircular end centered on the endpoint.
    Round,
    /// Squared end extending half the line width past the endpoint.
    Square,
}

impl LineCap {
    pub(crate) fn as_script(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Shape applied where two stroke segments meet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    /// Sharp corner, subject to the miter limit.
    #[default]
    Miter,
    /// Rounded corner.
    Round,
    /// Flattened corner.
    Bevel,
}

impl LineJoin {
    pub(crate) fn as_script(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Whether a stroke is drawn at all.
///
/// [`LinePattern::Blank`] disables stroking for the primitive entirely,
/// independent of the stroke color. It corresponds to the "blank" line
/// type of the host graphics engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LinePattern {
    /// Draw a continuous stroke.
    #[default]
    Solid,
    /// Draw no stroke.
    Blank,
}

/// Per-primitive stroke parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke width in device units.
    pub width: f64,
    /// Endpoint cap.
    pub cap: LineCap,
    /// Segment join.
    pub join: LineJoin,
    /// Maximum ratio of miter length to stroke width.
    pub miter_limit: f64,
    /// Whether the stroke is drawn at all.
    pub pattern: LinePattern,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            miter_limit: 10.0,
            pattern: LinePattern::default(),
        }
    }
}

/// Style bundle accompanying every drawing primitive.
///
/// A stroke is emitted only when `stroke` has nonzero alpha and
/// `line.pattern` is [`LinePattern::Solid`]; a fill only when `fill` has
/// nonzero alpha. Fully transparent colors suppress the corresponding
/// operation rather than emitting a no-op draw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawStyle {
    /// Stroke (outline) color.
    pub stroke: Color,
    /// Fill (interior) color.
    pub fill: Color,
    /// Stroke parameters.
    pub line: LineStyle,
}

impl DrawStyle {
    /// A stroke-only style: `color` outline, no fill.
    pub fn stroked(color: Color) -> Self {
        Self {
            stroke: color,
            fill: Color::TRANSPARENT,
            line: LineStyle::default(),
        }
    }

    /// A fill-only style: `color` interior, no stroke.
    pub fn filled(color: Color) -> Self {
        Self {
            stroke: Color::TRANSPARENT,
            fill: color,
            line: LineStyle::default(),
        }
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self::stroked(Color::BLACK)
    }
}

/// Last-emitted style directives.
///
/// Every field holds the value most recently written to the sink, or
/// `None` if the corresponding directive has never been emitted, so the
/// first request for any property always emits. A request equal to the
/// cached value emits nothing and leaves the cache untouched.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct StyleCache {
    width: Option<f64>,
    cap: Option<LineCap>,
    join: Option<LineJoin>,
    miter_limit: Option<f64>,
    fill: Option<Rgba8>,
    stroke: Option<Rgba8>,
}

impl StyleCache {
    /// Emits directives for the line properties of `line` that differ
    /// from the cache and records the emitted values.
    ///
    /// Emission order is fixed (width, cap, join, miter limit) no matter
    /// which properties changed; downstream consumers replay the script
    /// relying on that order. Widths and miter limits compare by bit
    /// representation, not within an epsilon. When nothing differs,
    /// nothing is emitted, not even a line break.
    pub(crate) fn apply_line_style(&mut self, emitter: &mut Emitter<'_>, line: &LineStyle) {
        let mut changed = false;
        if self.width.map(f64::to_bits) != Some(line.width.to_bits()) {
            emitter.line_width(line.width);
            self.width = Some(line.width);
            changed = true;
        }
        if self.cap != Some(line.cap) {
            emitter.line_cap(line.cap);
            self.cap = Some(line.cap);
            changed = true;
        }
        if self.join != Some(line.join) {
            emitter.line_join(line.join);
            self.join = Some(line.join);
            changed = true;
        }
        if self.miter_limit.map(f64::to_bits) != Some(line.miter_limit.to_bits()) {
            emitter.miter_limit(line.miter_limit);
            self.miter_limit = Some(line.miter_limit);
            changed = true;
        }
        if changed {
            emitter.finish_line();
        }
    }

    pub(crate) fn record_fill(&mut self, color: Rgba8) {
        self.fill = Some(color);
    }

    pub(crate) fn record_stroke(&mut self, color: Rgba8) {
        self.stroke = Some(color);
    }

    /// The fill color most recently emitted, if any.
    pub(crate) fn last_fill(&self) -> Option<Rgba8> {
        self.fill
    }

    /// The stroke color most recently emitted, if any.
    pub(crate) fn last_stroke(&self) -> Option<Rgba8> {
        self.stroke
    }
}
