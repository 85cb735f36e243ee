// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A corner of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom right corner.
    BottomRight,
    /// Bottom left corner.
    BottomLeft,
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TopLeft => "top left",
            Self::TopRight => "top right",
            Self::BottomRight => "bottom right",
            Self::BottomLeft => "bottom left",
        })
    }
}

/// Rejected [`Style`](crate::Style) change.
///
/// The style the change was applied to stays as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// Stripe pitch below 1.
    #[error("stripe pitch must be at least 1 (input value = {0})")]
    PitchTooSmall(f64),
    /// Negative border width.
    #[error("border width must be >= 0 (input value = {0})")]
    NegativeBorderWidth(f64),
    /// Negative corner radius.
    #[error("{corner} radius must be >= 0 (input value = {value})")]
    NegativeRadius {
        /// Corner the radius was meant for.
        corner: Corner,
        /// Rejected radius.
        value: f64,
    },
    /// Palette with fewer than two colors.
    #[error("at least 2 colors are needed (got {0})")]
    TooFewColors(usize),
    /// NaN or infinite input.
    #[error("{0} must be finite")]
    NonFinite(&'static str),
}
