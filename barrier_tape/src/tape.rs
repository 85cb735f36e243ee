// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateful barrier tape drawable.

use peniko::{kurbo::Size, Color};

use crate::{
    clip::{Orientation, ShapeKind},
    error::StyleError,
    plan::RenderPlan,
    style::Style,
};

/// A barrier tape that can be painted as the background of any region.
///
/// Owns the current [`Style`] and remembers whether it changed since the
/// host last painted. Setters are meant to be called from the thread that
/// paints.
#[derive(Debug, Clone)]
pub struct BarrierTape {
    style: Style,
    needs_redraw: bool,
}

impl Default for BarrierTape {
    fn default() -> Self {
        Self::new(Style::default())
    }
}

impl BarrierTape {
    /// Make a new `BarrierTape` with `style`.
    ///
    /// A new tape always needs to be drawn.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            needs_redraw: true,
        }
    }

    /// Current style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// `true` if the style changed since the last [`take_needs_redraw`](Self::take_needs_redraw).
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Return whether a redraw is needed and clear the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        core::mem::take(&mut self.needs_redraw)
    }

    /// Build a fresh [`RenderPlan`] for bounds of `size`.
    pub fn plan(&self, size: Size) -> RenderPlan {
        RenderPlan::build(&self.style, size)
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: Style) {
        if style != self.style {
            self.style = style;
            self.needs_redraw = true;
        }
    }

    fn try_set(&mut self, next: Result<Style, StyleError>) -> Result<(), StyleError> {
        match next {
            Ok(style) => {
                self.set_style(style);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "rejected style change");
                Err(err)
            }
        }
    }

    /// Set the distance between stripe boundaries.
    ///
    /// # Errors
    ///
    /// See [`Style::with_stripe_pitch`]; the style is unchanged on error.
    pub fn set_stripe_pitch(&mut self, pitch: f64) -> Result<(), StyleError> {
        self.try_set(self.style.clone().with_stripe_pitch(pitch))
    }

    /// Set the stripe incline.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.set_style(self.style.clone().with_reversed(reversed));
    }

    /// Set the shape within which the tape is drawn.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.set_style(self.style.clone().with_shape(shape));
    }

    /// Set the triangle orientation.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.set_style(self.style.clone().with_orientation(orientation));
    }

    /// Set the border width, 0 fills the whole shape.
    ///
    /// # Errors
    ///
    /// See [`Style::with_border_width`]; the style is unchanged on error.
    pub fn set_border_width(&mut self, width: f64) -> Result<(), StyleError> {
        self.try_set(self.style.clone().with_border_width(width))
    }

    /// Set corner radii individually, `None` leaves a corner as it is.
    ///
    /// # Errors
    ///
    /// See [`Style::with_corner_radii`]; the style is unchanged on error.
    pub fn set_corner_radii(
        &mut self,
        top_left: Option<f64>,
        top_right: Option<f64>,
        bottom_right: Option<f64>,
        bottom_left: Option<f64>,
    ) -> Result<(), StyleError> {
        let next = self.style.clone().with_corner_radii(
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        );
        self.try_set(next)
    }

    /// Set the same radius for all corners.
    ///
    /// # Errors
    ///
    /// See [`Style::with_corner_radius`]; the style is unchanged on error.
    pub fn set_corner_radius(&mut self, radius: f64) -> Result<(), StyleError> {
        self.try_set(self.style.clone().with_corner_radius(radius))
    }

    /// Set the stripe colors.
    ///
    /// # Errors
    ///
    /// See [`Style::with_colors`]; the style is unchanged on error.
    pub fn set_colors(&mut self, colors: impl IntoIterator<Item = Color>) -> Result<(), StyleError> {
        self.try_set(self.style.clone().with_colors(colors))
    }

    /// Set the opacity of every stripe.
    pub fn set_opacity(&mut self, opacity: u8) {
        self.set_style(self.style.clone().with_opacity(opacity));
    }
}
