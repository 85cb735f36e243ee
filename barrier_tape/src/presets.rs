// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready made styles.

use peniko::{color::palette, Color};

use crate::{
    clip::{Orientation, ShapeKind},
    style::Style,
};

/// Stripe pitch shared by the presets.
pub const PRESET_PITCH: f64 = 20.0;

fn signal_red() -> Color {
    Color::from_rgb8(0xcf, 0x32, 0x2e)
}

fn silver() -> Color {
    Color::from_rgb8(0xd7, 0xd4, 0xd5)
}

fn base() -> Style {
    Style::default().with_stripe_pitch(PRESET_PITCH).unwrap_or_default()
}

/// Yellow and black warning tape filling a rectangle.
pub fn warning_tape() -> Style {
    base()
}

/// Circle with a striped frame.
pub fn circle_sign() -> Style {
    framed(base().with_shape(ShapeKind::Circle), 10.0)
}

/// Equilateral triangle pointing down, with a striped frame.
pub fn triangle_sign() -> Style {
    framed(
        base()
            .with_shape(ShapeKind::EquilateralTriangle)
            .with_orientation(Orientation::Top),
        10.0,
    )
}

/// Red and white striped frame with rounded corners.
pub fn red_white_frame() -> Style {
    let style = base();
    let rounded = style
        .clone()
        .with_colors([signal_red(), silver()])
        .and_then(|s| s.with_corner_radius(10.0));
    framed(rounded.unwrap_or(style), 10.0)
}

/// Reversed `color` and black stripes with rounded corners.
pub fn laser_frame(color: Color) -> Style {
    let style = base().with_reversed(true);
    style
        .clone()
        .with_colors([color, palette::css::BLACK])
        .and_then(|s| s.with_corner_radius(20.0))
        .unwrap_or(style)
}

fn framed(style: Style, border: f64) -> Style {
    style.clone().with_border_width(border).unwrap_or(style)
}
