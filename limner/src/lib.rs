// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limner translates abstract 2D vector-drawing primitives into an
//! ordered, replayable script for a canvas-style imperative renderer.
//!
//! The central type is [`Session`]: one open drawing target that owns an
//! append-only output sink. The host calls one method per primitive, in
//! the order the abstract drawing occurred, and each call appends zero or
//! more script directives. Cached style state suppresses directives whose
//! value has not changed since they were last emitted, so the script
//! stays minimal without ever reordering.
//!
//! All coordinates are device units; the session performs no coordinate
//! transformation. Colors are [`peniko::Color`] values and serialize in
//! their 8-bit form.
//!
//! ```
//! use limner::{DrawStyle, Session};
//! use peniko::kurbo::Point;
//! use peniko::Color;
//!
//! let mut session = Session::open(Vec::new(), 400.0, 300.0, Color::WHITE, Color::BLACK)?;
//! session.new_page(Color::WHITE)?;
//! session.line(
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 50.0),
//!     &DrawStyle::stroked(Color::BLACK),
//! )?;
//! session.close()?;
//! let script = String::from_utf8(session.into_inner()).unwrap();
//! assert!(script.starts_with("//NewPage\n"));
//! # Ok::<(), limner::Error>(())
//! ```

// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]

mod backend;
mod color;
mod error;
mod script;
mod session;
mod style;

pub use backend::DrawingBackend;
pub use color::color_expression;
pub use error::Error;
pub use session::{CHAR_WIDTH_GUESS, Session};
pub use style::{DrawStyle, LineCap, LineJoin, LinePattern, LineStyle};

pub use peniko;
pub use peniko::Color;
