// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip geometry for each supported shape.

use peniko::kurbo::{Circle, Ellipse, Rect, RoundedRect, Size, Triangle};

use crate::{
    shape::{inradius, inset_triangle, ClipOutline, Outline},
    style::{CornerRadii, Style},
};

#[cfg(all(not(feature = "std"), not(test)))]
use crate::floatfuncs::FloatFuncs;

/// Shape within which the barrier tape is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Rectangle with independent corner radii.
    #[default]
    Rectangle,
    /// Ellipse inscribed in the bounds.
    Oval,
    /// Largest circle centered in the bounds.
    Circle,
    /// Triangle spanning the bounds.
    Triangle,
    /// Largest equilateral triangle centered in the bounds.
    EquilateralTriangle,
}

/// Which bounds edge a triangle's base lies on.
///
/// The apex points at the opposite edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Base on the left edge, pointing right.
    #[default]
    Left,
    /// Base on the right edge, pointing left.
    Right,
    /// Base on the top edge, pointing down.
    Top,
    /// Base on the bottom edge, pointing up.
    Bottom,
}

impl Orientation {
    /// `true` if the triangle's axis from base to apex is horizontal.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Build the clip for `style` over bounds `(0, 0)`-`(size.width, size.height)`.
///
/// With a positive border width the result carries an inset outline, unless
/// the border swallows the whole shape, in which case the whole shape is
/// border.
pub fn clip_outline(style: &Style, size: Size) -> ClipOutline {
    let border = style.border_width();
    let bounds = size.to_rect();
    match style.shape() {
        ShapeKind::Rectangle => {
            let radii = style.corner_radii();
            let outline = rounded(bounds, radii);
            match inset_rect(bounds, border) {
                Some(inner) => ClipOutline::with_inset(outline, rounded(inner, radii)),
                None => ClipOutline::new(outline),
            }
        }
        ShapeKind::Oval => {
            let outline = Ellipse::from_rect(bounds);
            match inset_rect(bounds, border) {
                Some(inner) => ClipOutline::with_inset(outline, Ellipse::from_rect(inner)),
                None => ClipOutline::new(outline),
            }
        }
        ShapeKind::Circle => {
            let center = bounds.center();
            let radius = (size.width * 0.5).min(size.height * 0.5);
            let outline = Circle::new(center, radius);
            if border > 0.0 && radius - border > 0.0 {
                ClipOutline::with_inset(outline, Circle::new(center, radius - border))
            } else {
                ClipOutline::new(outline)
            }
        }
        ShapeKind::Triangle => triangle_clip(triangle(size, style.orientation()), border),
        ShapeKind::EquilateralTriangle => {
            triangle_clip(equilateral_triangle(size, style.orientation()), border)
        }
    }
}

fn rounded(rect: Rect, radii: CornerRadii) -> RoundedRect {
    RoundedRect::from_rect(rect, radii)
}

/// `rect` shrunk by `border` on every side, if anything is left.
fn inset_rect(rect: Rect, border: f64) -> Option<Rect> {
    if border <= 0.0 {
        return None;
    }
    let inner = rect.inset(-border);
    (inner.width() > 0.0 && inner.height() > 0.0).then_some(inner)
}

fn triangle_clip(outer: Triangle, border: f64) -> ClipOutline {
    if border > 0.0 && border < inradius(&outer) {
        ClipOutline::with_inset(outer, inset_triangle(&outer, border))
    } else {
        ClipOutline::new(Outline::Triangle(outer))
    }
}

/// Triangle spanning the full bounds.
pub fn triangle(size: Size, orientation: Orientation) -> Triangle {
    let Size {
        width: w,
        height: h,
    } = size;
    let (a, b, c) = match orientation {
        Orientation::Left => ((0.0, 0.0), (0.0, h), (w, h * 0.5)),
        Orientation::Right => ((w, 0.0), (w, h), (0.0, h * 0.5)),
        Orientation::Top => ((0.0, 0.0), (w, 0.0), (w * 0.5, h)),
        Orientation::Bottom => ((w * 0.5, 0.0), (w, h), (0.0, h)),
    };
    Triangle::new(a, b, c)
}

/// Largest equilateral triangle that fits the bounds, centered.
pub fn equilateral_triangle(size: Size, orientation: Orientation) -> Triangle {
    let Size {
        width: w,
        height: h,
    } = size;
    // Height of an equilateral triangle relative to its side.
    let ratio = 3.0_f64.sqrt() * 0.5;

    // `across` is the bounds extent the base lies along, `along` the extent
    // from base to apex.
    let (across, along) = if orientation.is_horizontal() {
        (h, w)
    } else {
        (w, h)
    };
    let (margin_along, margin_across) = if ratio * across > along {
        (0.0, (across - along / ratio) * 0.5)
    } else {
        ((along - ratio * across) * 0.5, 0.0)
    };
    let (mx, my) = if orientation.is_horizontal() {
        (margin_along, margin_across)
    } else {
        (margin_across, margin_along)
    };

    let (a, b, c) = match orientation {
        Orientation::Left => ((mx, my), (mx, h - my), (w - mx, h * 0.5)),
        Orientation::Right => ((w - mx, my), (w - mx, h - my), (mx, h * 0.5)),
        Orientation::Top => ((mx, my), (w - mx, my), (w * 0.5, h - my)),
        Orientation::Bottom => ((w * 0.5, my), (w - mx, h - my), (mx, h - my)),
    };
    Triangle::new(a, b, c)
}
