// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barrier tape appearance.

use alloc::vec::Vec;

use peniko::{color::palette, kurbo::RoundedRectRadii, Color};

use crate::{
    clip::{Orientation, ShapeKind},
    error::{Corner, StyleError},
};

/// Per-corner radii for [`ShapeKind::Rectangle`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerRadii {
    /// Radius of the top left corner.
    pub top_left: f64,
    /// Radius of the top right corner.
    pub top_right: f64,
    /// Radius of the bottom right corner.
    pub bottom_right: f64,
    /// Radius of the bottom left corner.
    pub bottom_left: f64,
}

impl CornerRadii {
    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f64) -> Self {
        Self {
            top_left: r,
            top_right: r,
            bottom_right: r,
            bottom_left: r,
        }
    }
}

impl From<CornerRadii> for RoundedRectRadii {
    fn from(r: CornerRadii) -> Self {
        Self::new(r.top_left, r.top_right, r.bottom_right, r.bottom_left)
    }
}

/// Immutable snapshot of everything that decides how the tape looks.
///
/// Changes go through the `with_*` methods, which consume the style and
/// return the changed one. Validated changes return a [`StyleError`]
/// instead; [`BarrierTape`](crate::BarrierTape) keeps its previous style when
/// that happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    stripe_pitch: f64,
    reversed: bool,
    shape: ShapeKind,
    orientation: Orientation,
    border_width: f64,
    corner_radii: CornerRadii,
    colors: Vec<Color>,
    opacity: u8,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stripe_pitch: 25.0,
            reversed: false,
            shape: ShapeKind::Rectangle,
            orientation: Orientation::Left,
            border_width: 0.0,
            corner_radii: CornerRadii::default(),
            colors: Vec::from([palette::css::YELLOW, palette::css::BLACK]),
            opacity: 255,
        }
    }
}

impl Style {
    /// Distance between stripe boundaries, measured along an edge.
    pub fn stripe_pitch(&self) -> f64 {
        self.stripe_pitch
    }

    /// `true` if stripes incline the other way (top-right to bottom-left).
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Shape the stripes are clipped to.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Orientation of triangle shapes.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Width of the striped frame, or 0 to fill the whole shape.
    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    /// Corner radii of the rectangle shape.
    pub fn corner_radii(&self) -> CornerRadii {
        self.corner_radii
    }

    /// Stripe colors, cycled in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Opacity applied to every stripe, 255 is fully opaque.
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Color of stripe `index`, with opacity applied.
    pub fn stripe_color(&self, index: usize) -> Color {
        let color = self.colors[index % self.colors.len()];
        self.apply_opacity(color)
    }

    pub(crate) fn apply_opacity(&self, color: Color) -> Color {
        if self.opacity == u8::MAX {
            color
        } else {
            color.multiply_alpha(f32::from(self.opacity) / 255.0)
        }
    }

    /// Set the stripe pitch.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::PitchTooSmall`] if `pitch < 1`.
    pub fn with_stripe_pitch(self, pitch: f64) -> Result<Self, StyleError> {
        finite("stripe pitch", pitch)?;
        if pitch < 1.0 {
            return Err(StyleError::PitchTooSmall(pitch));
        }
        Ok(Self {
            stripe_pitch: pitch,
            ..self
        })
    }

    /// Set the stripe incline.
    #[must_use]
    pub fn with_reversed(self, reversed: bool) -> Self {
        Self { reversed, ..self }
    }

    /// Set the shape.
    #[must_use]
    pub fn with_shape(self, shape: ShapeKind) -> Self {
        Self { shape, ..self }
    }

    /// Set the triangle orientation.
    ///
    /// Only used by [`ShapeKind::Triangle`] and [`ShapeKind::EquilateralTriangle`].
    #[must_use]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Set the border width.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NegativeBorderWidth`] if `width < 0`.
    pub fn with_border_width(self, width: f64) -> Result<Self, StyleError> {
        finite("border width", width)?;
        if width < 0.0 {
            return Err(StyleError::NegativeBorderWidth(width));
        }
        Ok(Self {
            border_width: width,
            ..self
        })
    }

    /// Set each corner radius, leaving corners given as `None` unchanged.
    ///
    /// Only used by [`ShapeKind::Rectangle`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NegativeRadius`] for the first negative radius.
    /// No corner is changed in that case.
    pub fn with_corner_radii(
        self,
        top_left: Option<f64>,
        top_right: Option<f64>,
        bottom_right: Option<f64>,
        bottom_left: Option<f64>,
    ) -> Result<Self, StyleError> {
        let current = self.corner_radii;
        let corner_radii = CornerRadii {
            top_left: radius(Corner::TopLeft, top_left, current.top_left)?,
            top_right: radius(Corner::TopRight, top_right, current.top_right)?,
            bottom_right: radius(Corner::BottomRight, bottom_right, current.bottom_right)?,
            bottom_left: radius(Corner::BottomLeft, bottom_left, current.bottom_left)?,
        };
        Ok(Self {
            corner_radii,
            ..self
        })
    }

    /// Set the same radius for all corners.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NegativeRadius`] if `radius < 0`.
    pub fn with_corner_radius(self, radius: f64) -> Result<Self, StyleError> {
        self.with_corner_radii(Some(radius), Some(radius), Some(radius), Some(radius))
    }

    /// Set the stripe colors.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::TooFewColors`] unless there are at least 2 colors.
    pub fn with_colors(self, colors: impl IntoIterator<Item = Color>) -> Result<Self, StyleError> {
        let colors: Vec<Color> = colors.into_iter().collect();
        if colors.len() < 2 {
            return Err(StyleError::TooFewColors(colors.len()));
        }
        Ok(Self { colors, ..self })
    }

    /// Set the opacity applied to every stripe.
    #[must_use]
    pub fn with_opacity(self, opacity: u8) -> Self {
        Self { opacity, ..self }
    }
}

fn finite(what: &'static str, value: f64) -> Result<(), StyleError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StyleError::NonFinite(what))
    }
}

fn radius(corner: Corner, input: Option<f64>, current: f64) -> Result<f64, StyleError> {
    let Some(value) = input else {
        return Ok(current);
    };
    finite("corner radius", value)?;
    if value < 0.0 {
        return Err(StyleError::NegativeRadius { corner, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn defaults() {
        let s = Style::default();
        assert_eq!(s.stripe_pitch(), 25.0);
        assert!(!s.reversed());
        assert_eq!(s.shape(), ShapeKind::Rectangle);
        assert_eq!(s.orientation(), Orientation::Left);
        assert_eq!(s.border_width(), 0.0);
        assert_eq!(s.corner_radii(), CornerRadii::all(0.0));
        assert_eq!(s.colors(), &[css::YELLOW, css::BLACK]);
        assert_eq!(s.opacity(), 255);
    }

    #[test]
    fn pitch_below_one_is_rejected() {
        assert_eq!(
            Style::default().with_stripe_pitch(0.5),
            Err(StyleError::PitchTooSmall(0.5))
        );
        assert_eq!(
            Style::default().with_stripe_pitch(f64::NAN),
            Err(StyleError::NonFinite("stripe pitch"))
        );
        assert_eq!(
            Style::default().with_stripe_pitch(1.0).unwrap().stripe_pitch(),
            1.0
        );
    }

    #[test]
    fn negative_widths_are_rejected() {
        assert_eq!(
            Style::default().with_border_width(-1.0),
            Err(StyleError::NegativeBorderWidth(-1.0))
        );
        assert_eq!(
            Style::default().with_corner_radius(-2.0),
            Err(StyleError::NegativeRadius {
                corner: Corner::TopLeft,
                value: -2.0
            })
        );
        assert!(Style::default().with_border_width(0.0).is_ok());
    }

    #[test]
    fn partial_radii_update() {
        let s = Style::default()
            .with_corner_radius(4.0)
            .unwrap()
            .with_corner_radii(None, Some(8.0), None, Some(0.0))
            .unwrap();
        assert_eq!(
            s.corner_radii(),
            CornerRadii {
                top_left: 4.0,
                top_right: 8.0,
                bottom_right: 4.0,
                bottom_left: 0.0,
            }
        );
    }

    #[test]
    fn bad_radius_changes_nothing() {
        let s = Style::default().with_corner_radius(4.0).unwrap();
        let err = s
            .clone()
            .with_corner_radii(Some(1.0), None, Some(-3.0), None)
            .unwrap_err();
        assert_eq!(
            err,
            StyleError::NegativeRadius {
                corner: Corner::BottomRight,
                value: -3.0
            }
        );
        assert_eq!(s.corner_radii(), CornerRadii::all(4.0));
    }

    #[test]
    fn palette_needs_two_colors() {
        assert_eq!(
            Style::default().with_colors([css::RED]),
            Err(StyleError::TooFewColors(1))
        );
        assert_eq!(
            Style::default().with_colors([] as [Color; 0]),
            Err(StyleError::TooFewColors(0))
        );
        let s = Style::default().with_colors([css::RED, css::BLUE]).unwrap();
        assert_eq!(s.stripe_color(0), css::RED);
        assert_eq!(s.stripe_color(3), css::BLUE);
    }

    #[test]
    fn opacity_scales_alpha() {
        let s = Style::default().with_opacity(0);
        assert_eq!(s.stripe_color(0).components[3], 0.0);
        let s = Style::default().with_opacity(51);
        assert!((s.stripe_color(1).components[3] - 0.2).abs() < 1e-6);
        assert_eq!(Style::default().stripe_color(0), css::YELLOW);
    }

    #[test]
    fn error_messages() {
        let err = StyleError::NegativeRadius {
            corner: Corner::BottomLeft,
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "bottom left radius must be >= 0 (input value = -1.5)"
        );
        assert_eq!(
            StyleError::TooFewColors(1).to_string(),
            "at least 2 colors are needed (got 1)"
        );
    }
}
