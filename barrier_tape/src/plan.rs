// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output of a single render pass.

use alloc::vec::Vec;

use peniko::{
    kurbo::{BezPath, Point, Size},
    Color,
};
use smallvec::SmallVec;

#[cfg(all(not(feature = "std"), not(test)))]
use crate::floatfuncs::FloatFuncs;

use crate::{
    clip::clip_outline,
    layout::{BoundaryPoint, StripeBoundaries},
    shape::ClipOutline,
    style::Style,
};

/// One filled stripe.
#[derive(Debug, Clone, PartialEq)]
pub struct StripePolygon {
    /// Vertices in order, the polygon closes back to the first one.
    pub points: SmallVec<[Point; 6]>,
    /// Fill color, opacity already applied.
    pub color: Color,
}

impl StripePolygon {
    /// Closed path through the vertices.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut points = self.points.iter();
        if let Some(&first) = points.next() {
            path.move_to(first);
            for &p in points {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let (a, b) = (self.points[i], self.points[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum();
        (twice * 0.5).abs()
    }
}

/// Everything the host needs to paint the tape once.
///
/// Apply `clip`, then fill `stripes` in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Bounds the plan was built for.
    pub size: Size,
    /// Visible region, `None` for an empty plan.
    pub clip: Option<ClipOutline>,
    /// Stripes in fill order.
    pub stripes: Vec<StripePolygon>,
}

impl RenderPlan {
    /// A plan that paints nothing.
    pub fn empty(size: Size) -> Self {
        Self {
            size,
            clip: None,
            stripes: Vec::new(),
        }
    }

    /// Build the plan for `style` over bounds of `size`.
    ///
    /// Bounds without area give an [empty](Self::empty) plan.
    #[tracing::instrument(skip(style), fields(shape = ?style.shape()))]
    pub fn build(style: &Style, size: Size) -> Self {
        let Size { width, height } = size;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            tracing::debug!("no area, nothing to paint");
            return Self::empty(size);
        }

        let boundaries = StripeBoundaries::layout(size, style.stripe_pitch(), style.reversed());
        let stripes = assemble(&boundaries, style);
        tracing::debug!(stripes = stripes.len(), "built render plan");

        Self {
            size,
            clip: Some(clip_outline(style, size)),
            stripes,
        }
    }

    /// `true` if the plan paints nothing.
    pub fn is_empty(&self) -> bool {
        self.clip.is_none() || self.stripes.is_empty()
    }

    /// Total area covered by the stripes before clipping.
    pub fn stripe_area(&self) -> f64 {
        self.stripes.iter().map(StripePolygon::area).sum()
    }
}

/// Join consecutive boundaries into stripes, cycling through the palette.
fn assemble(boundaries: &StripeBoundaries, style: &Style) -> Vec<StripePolygon> {
    let origin = BoundaryPoint::new(0.0, 0.0);
    let StripeBoundaries {
        from,
        to,
        top_corner,
        bottom_corner,
    } = boundaries;

    from.iter()
        .enumerate()
        .zip(style.colors().iter().cycle())
        .map(|((i, &from_point), &color)| {
            let to_point = to.get(i).copied().unwrap_or(origin);
            let (prev_from, prev_to) = match i.checked_sub(1) {
                Some(p) => (from[p], to.get(p).copied().unwrap_or(origin)),
                None => (origin, origin),
            };

            let mut points = SmallVec::new();
            points.push(prev_from.point);
            points.push(prev_to.point);
            if prev_to.bottom_corner {
                points.push(*bottom_corner);
            }
            points.push(to_point.point);
            points.push(from_point.point);
            if prev_from.top_corner {
                points.push(*top_corner);
            }

            StripePolygon {
                points,
                color: style.apply_opacity(color),
            }
        })
        .collect()
}
