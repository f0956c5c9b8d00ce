// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aggregation of per-glyph metrics into run metrics.

use crate::rasterize::{GlyphRasterizer, MetricsError};

/// Metrics of a single rasterized glyph, in device units relative to
/// the baseline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphMetric {
    /// Horizontal advance to the next glyph origin.
    pub advance: f32,
    /// Lowest point of the bounding box; negative when the glyph
    /// descends below the baseline.
    pub y_min: f32,
    /// Highest point of the bounding box; positive when the glyph
    /// ascends above the baseline.
    pub y_max: f32,
}

/// Aggregated metrics for a run of glyphs.
///
/// Width is the sum of advances, which models inter-glyph spacing;
/// summing bounding-box widths would double-count side bearings. Ascent
/// is the highest ascender of the run and descent the lowest descender,
/// with glyphs that stay on one side of the baseline contributing zero
/// to the other.
///
/// Ascent and width are non-negative magnitudes. Descent is **signed**:
/// zero or negative. Callers wanting the positive form use
/// [`descent_magnitude`](Self::descent_magnitude).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RunMetrics {
    width: f32,
    ascent: f32,
    descent: f32,
}

impl RunMetrics {
    /// Folds per-glyph metrics into run metrics.
    ///
    /// An empty sequence yields all zeros.
    pub fn from_glyphs<I>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = GlyphMetric>,
    {
        let mut run = Self::default();
        for glyph in glyphs {
            run.add(glyph);
        }
        run
    }

    pub(crate) fn add(&mut self, glyph: GlyphMetric) {
        self.width += glyph.advance;
        self.descent = self.descent.min(glyph.y_min.min(0.0));
        self.ascent = self.ascent.max(glyph.y_max.max(0.0));
    }

    /// Accumulated advance width of the run.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Highest ascender above the baseline; never negative.
    pub fn ascent(&self) -> f32 {
        self.ascent
    }

    /// Lowest descender, signed: zero or negative.
    pub fn descent(&self) -> f32 {
        self.descent
    }

    /// Descent as a positive magnitude.
    pub fn descent_magnitude(&self) -> f32 {
        self.descent.abs()
    }

    /// Run height: ascent plus descent magnitude.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent.abs()
    }

    /// The integer device-unit form used by the metric-info call site.
    pub fn rounded(&self) -> RoundedRunMetrics {
        RoundedRunMetrics {
            width: round(self.width),
            ascent: round(self.ascent),
            descent: round(self.descent),
            height: round(self.height()),
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "device-unit metrics are far below i32 range"
)]
fn round(v: f32) -> i32 {
    v.round() as i32
}

/// [`RunMetrics`] rounded to integer device units.
///
/// `descent` keeps the signed convention of [`RunMetrics::descent`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoundedRunMetrics {
    /// Accumulated advance width.
    pub width: i32,
    /// Highest ascender; never negative.
    pub ascent: i32,
    /// Lowest descender; zero or negative.
    pub descent: i32,
    /// Ascent plus descent magnitude.
    pub height: i32,
}

/// Measures `text` by rasterizing each character in order and folding
/// the results.
///
/// The first rasterizer failure aborts the whole measurement; no
/// partial metrics are returned.
pub fn measure<R>(rasterizer: &mut R, text: &str, point_size: f32) -> Result<RunMetrics, MetricsError>
where
    R: GlyphRasterizer + ?Sized,
{
    let mut run = RunMetrics::default();
    for ch in text.chars() {
        run.add(rasterizer.metrics(ch, point_size)?);
    }
    log::trace!(
        "measured {} chars at {point_size}px: width {}",
        text.chars().count(),
        run.width()
    );
    Ok(run)
}

/// The string-width call site: total advance of `text` in real device
/// units.
pub fn string_width<R>(rasterizer: &mut R, text: &str, point_size: f32) -> Result<f32, MetricsError>
where
    R: GlyphRasterizer + ?Sized,
{
    Ok(measure(rasterizer, text, point_size)?.width())
}

/// The metric-info call site: metrics of a single codepoint.
///
/// Use [`RunMetrics::rounded`] for the integer form, and choose
/// [`RunMetrics::descent`] (signed) or
/// [`RunMetrics::descent_magnitude`] (positive) explicitly; host
/// graphics engines disagree on the expected sign.
pub fn char_metrics<R>(
    rasterizer: &mut R,
    codepoint: char,
    point_size: f32,
) -> Result<RunMetrics, MetricsError>
where
    R: GlyphRasterizer + ?Sized,
{
    let mut run = RunMetrics::default();
    run.add(rasterizer.metrics(codepoint, point_size)?);
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterize::MetricsError;

    #[test]
    fn empty_run_is_all_zeros() {
        let run = RunMetrics::from_glyphs([]);
        assert_eq!(run.width(), 0.0);
        assert_eq!(run.ascent(), 0.0);
        assert_eq!(run.descent(), 0.0);
        assert_eq!(run.height(), 0.0);
    }

    #[test]
    fn run_aggregates_advances_and_extremes() {
        let glyphs = [
            GlyphMetric {
                advance: 10.0,
                y_min: -2.0,
                y_max: 8.0,
            },
            GlyphMetric {
                advance: 12.0,
                y_min: 0.0,
                y_max: 10.0,
            },
            GlyphMetric {
                advance: 9.0,
                y_min: -1.0,
                y_max: 9.0,
            },
        ];
        let run = RunMetrics::from_glyphs(glyphs);
        assert_eq!(run.width(), 31.0);
        assert_eq!(run.ascent(), 10.0);
        assert_eq!(run.descent(), -2.0);
        assert_eq!(run.descent_magnitude(), 2.0);
        assert_eq!(run.height(), 12.0);
    }

    #[test]
    fn glyph_entirely_below_baseline_does_not_lower_ascent() {
        let run = RunMetrics::from_glyphs([GlyphMetric {
            advance: 5.0,
            y_min: -6.0,
            y_max: -1.0,
        }]);
        assert_eq!(run.ascent(), 0.0);
        assert_eq!(run.descent(), -6.0);
        assert_eq!(run.height(), 6.0);
    }

    #[test]
    fn rounded_keeps_signed_descent() {
        let run = RunMetrics::from_glyphs([GlyphMetric {
            advance: 7.4,
            y_min: -2.6,
            y_max: 8.2,
        }]);
        let rounded = run.rounded();
        assert_eq!(rounded.width, 7);
        assert_eq!(rounded.ascent, 8);
        assert_eq!(rounded.descent, -3);
        assert_eq!(rounded.height, 11);
    }

    /// Fixed-advance rasterizer that fails on `'!'`.
    struct Grid;

    impl GlyphRasterizer for Grid {
        fn metrics(&mut self, codepoint: char, point_size: f32) -> Result<GlyphMetric, MetricsError> {
            if codepoint == '!' {
                return Err(MetricsError::glyph(codepoint));
            }
            Ok(GlyphMetric {
                advance: point_size / 2.0,
                y_min: if codepoint == 'g' { -3.0 } else { 0.0 },
                y_max: 8.0,
            })
        }
    }

    #[test]
    fn measure_folds_each_character() {
        let run = measure(&mut Grid, "dog", 10.0).unwrap();
        assert_eq!(run.width(), 15.0);
        assert_eq!(run.descent(), -3.0);
        assert_eq!(run.height(), 11.0);
    }

    #[test]
    fn measure_of_empty_text_is_zero() {
        let run = measure(&mut Grid, "", 10.0).unwrap();
        assert_eq!(run, RunMetrics::default());
    }

    #[test]
    fn rasterizer_failure_aborts_measurement() {
        let err = measure(&mut Grid, "do!g", 10.0).unwrap_err();
        assert_eq!(err.codepoint(), Some('!'));
    }

    #[test]
    fn string_width_is_accumulated_advance() {
        assert_eq!(string_width(&mut Grid, "dddd", 10.0).unwrap(), 20.0);
    }

    #[test]
    fn char_metrics_measures_one_codepoint() {
        let run = char_metrics(&mut Grid, 'g', 12.0).unwrap();
        assert_eq!(run.width(), 6.0);
        assert_eq!(run.descent(), -3.0);
        assert_eq!(run.descent_magnitude(), 3.0);
    }
}
