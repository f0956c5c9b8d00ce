// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rasterizer seam and the bundled skrifa-backed implementation.

use skrifa::instance::{LocationRef, Size};
use skrifa::{FontRef, MetadataProvider};

use crate::metrics::GlyphMetric;

/// Produces per-glyph metrics for codepoints of one loaded font face.
///
/// A rasterizer value embodies the opaque font handle: the host looks a
/// face up by family name through whatever cache it maintains, then
/// hands the resulting rasterizer to the measurement functions. The
/// service must be safe to call repeatedly and synchronously.
pub trait GlyphRasterizer {
    /// Metrics for `codepoint` rasterized at `point_size`, in device
    /// units relative to the baseline.
    fn metrics(&mut self, codepoint: char, point_size: f32) -> Result<GlyphMetric, MetricsError>;
}

/// A measurement failure.
///
/// Aborts the single measurement call it occurred in; it carries no
/// state and the rasterizer stays usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsError {
    kind: MetricsErrorKind,
    codepoint: Option<char>,
}

impl MetricsError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> MetricsErrorKind {
        self.kind
    }

    /// The codepoint being measured when the error occurred, when known.
    pub fn codepoint(&self) -> Option<char> {
        self.codepoint
    }

    /// A font whose data could not be read.
    pub fn font_load() -> Self {
        Self {
            kind: MetricsErrorKind::FontLoad,
            codepoint: None,
        }
    }

    /// A glyph that could not be rasterized.
    pub fn glyph(codepoint: char) -> Self {
        Self {
            kind: MetricsErrorKind::GlyphRasterization,
            codepoint: Some(codepoint),
        }
    }
}

impl core::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match (self.kind, self.codepoint) {
            (MetricsErrorKind::FontLoad, _) => {
                write!(f, "font data could not be read as an outline face")
            }
            (MetricsErrorKind::GlyphRasterization, Some(c)) => {
                write!(f, "no glyph metrics for {c:?}")
            }
            (MetricsErrorKind::GlyphRasterization, None) => write!(f, "no glyph metrics"),
        }
    }
}

impl core::error::Error for MetricsError {}

/// The non-exhaustive category of a measurement failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MetricsErrorKind {
    /// The font data was missing, malformed, or of an unsupported
    /// format.
    FontLoad,
    /// A single glyph could not be mapped or measured.
    GlyphRasterization,
}

/// A [`GlyphRasterizer`] backed by [`skrifa`] over in-memory font data.
///
/// `point_size` is applied as pixels per em, so metrics come back in
/// the same pixel units the drawing translator emits. Codepoints map
/// through the face's Unicode character map.
pub struct OutlineFont<'a> {
    font: FontRef<'a>,
}

impl<'a> OutlineFont<'a> {
    /// Wraps raw font data, reading the first face of a collection.
    pub fn new(data: &'a [u8]) -> Result<Self, MetricsError> {
        Self::from_index(data, 0)
    }

    /// Wraps face `index` of a font collection.
    pub fn from_index(data: &'a [u8], index: u32) -> Result<Self, MetricsError> {
        let font = FontRef::from_index(data, index).map_err(|e| {
            log::debug!("font load failed: {e}");
            MetricsError::font_load()
        })?;
        Ok(Self { font })
    }

    /// The underlying skrifa face.
    pub fn font_ref(&self) -> &FontRef<'a> {
        &self.font
    }
}

impl GlyphRasterizer for OutlineFont<'_> {
    fn metrics(&mut self, codepoint: char, point_size: f32) -> Result<GlyphMetric, MetricsError> {
        let glyph_id = self
            .font
            .charmap()
            .map(codepoint)
            .ok_or_else(|| MetricsError::glyph(codepoint))?;
        let metrics = self
            .font
            .glyph_metrics(Size::new(point_size), LocationRef::default());
        let advance = metrics
            .advance_width(glyph_id)
            .ok_or_else(|| MetricsError::glyph(codepoint))?;
        // Whitespace and other blank glyphs have an advance but no box.
        let (y_min, y_max) = match metrics.bounds(glyph_id) {
            Some(bounds) => (bounds.y_min, bounds.y_max),
            None => (0.0, 0.0),
        };
        Ok(GlyphMetric {
            advance,
            y_min,
            y_max,
        })
    }
}

impl core::fmt::Debug for OutlineFont<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutlineFont").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_data_is_a_font_load_error() {
        let err = OutlineFont::new(&[0_u8; 16]).unwrap_err();
        assert_eq!(err.kind(), MetricsErrorKind::FontLoad);
        assert_eq!(err.codepoint(), None);
    }

    #[test]
    fn error_messages_name_the_codepoint() {
        let err = MetricsError::glyph('q');
        assert_eq!(err.to_string(), "no glyph metrics for 'q'");
        assert_eq!(err.codepoint(), Some('q'));
    }
}
