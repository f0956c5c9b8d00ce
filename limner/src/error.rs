// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::io;

/// Errors reported by a drawing [`Session`](crate::Session).
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The requested canvas extents were not strictly positive.
    InvalidDimension {
        /// Requested canvas width in device units.
        width: f64,
        /// Requested canvas height in device units.
        height: f64,
    },

    /// Writing to the session sink failed.
    ///
    /// This is terminal for the session: every subsequent operation
    /// fails with [`Error::Poisoned`]. There is no retry.
    Io(io::Error),

    /// An earlier sink write failed and the session no longer accepts
    /// operations.
    Poisoned,

    /// [`Session::close`](crate::Session::close) was called on a
    /// session that had already been closed.
    ///
    /// Recoverable: the session state is unchanged and the sink is left
    /// exactly as the first close flushed it.
    DoubleClose,

    /// A drawing operation was invoked on a closed session.
    Closed,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "canvas extents must be positive, got {width}x{height}")
            }
            Self::Io(e) => write!(f, "sink write failed: {e}"),
            Self::Poisoned => write!(f, "session poisoned by an earlier sink failure"),
            Self::DoubleClose => write!(f, "close called on an already closed session"),
            Self::Closed => write!(f, "drawing operation on a closed session"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
