// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph-run metrics for the limner drawing translator.
//!
//! A run of text is measured by rasterizing each glyph in order through
//! a [`GlyphRasterizer`] and folding the per-glyph advances and vertical
//! bounds into [`RunMetrics`]: accumulated width, highest ascender, and
//! lowest descender. [`OutlineFont`] is the bundled rasterizer, backed
//! by [`skrifa`] over in-memory font data; font discovery and caching by
//! family name stay with the host.
//!
//! Descent is kept signed internally (zero or negative, below the
//! baseline). Call sites differ on which sign they expect, so both
//! [`RunMetrics::descent`] and [`RunMetrics::descent_magnitude`] are
//! provided and each caller must pick one explicitly.

// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod metrics;
mod rasterize;

pub use metrics::{GlyphMetric, RoundedRunMetrics, RunMetrics, char_metrics, measure, string_width};
pub use rasterize::{GlyphRasterizer, MetricsError, MetricsErrorKind, OutlineFont};

pub use skrifa;
