// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of stripe boundaries along the edges of a region.
//!
//! Every stripe boundary is a 45 degree line. Each boundary meets the region
//! twice: once on the `from` side (the top edge, then the trailing side edge)
//! and once on the `to` side (the leading side edge, then the bottom edge).
//! Both walks advance by the stripe pitch, so point `i` of `from` and point
//! `i` of `to` always lie on the same boundary line.

use alloc::vec::Vec;

use peniko::kurbo::{Point, Size};

/// A point on a stripe boundary, with its corner-wrap flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint {
    /// Position in the local coordinate space of the region.
    pub point: Point,
    /// Last point on the top edge before the walk wraps onto a side edge.
    pub top_corner: bool,
    /// Last point on the side edge before the walk wraps onto the bottom edge.
    pub bottom_corner: bool,
}

impl BoundaryPoint {
    /// A point without corner flags.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point::new(x, y),
            top_corner: false,
            bottom_corner: false,
        }
    }
}

/// The two ordered boundary walks bounding successive stripes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StripeBoundaries {
    /// Walk over the top edge, then the trailing side edge.
    pub from: Vec<BoundaryPoint>,
    /// Walk over the leading side edge, then the bottom edge.
    pub to: Vec<BoundaryPoint>,
    /// Region corner a stripe spans when `from` wraps off the top edge.
    pub top_corner: Point,
    /// Region corner a stripe spans when `to` wraps onto the bottom edge.
    pub bottom_corner: Point,
}

impl StripeBoundaries {
    /// Lay out stripe boundaries for a region of `size`.
    ///
    /// With `reversed == false` the stripes run from the top-left corner
    /// towards the bottom-right one, otherwise from the top-right corner
    /// towards the bottom-left one.
    ///
    /// Returns empty walks when the region has no area or `pitch` is below 1.
    pub fn layout(size: Size, pitch: f64, reversed: bool) -> Self {
        let Size {
            width: w,
            height: h,
        } = size;
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() && pitch.is_finite())
            || pitch < 1.0
        {
            return Self::default();
        }

        let boundaries = if reversed {
            Self {
                from: walk(w, w + h, pitch, Wrap::Top, |k| (w - k, 0.0), |k| (0.0, k - w)),
                to: walk(h, w + h, pitch, Wrap::Bottom, |k| (w, k), |k| (w - (k - h), h)),
                top_corner: Point::new(0.0, 0.0),
                bottom_corner: Point::new(w, h),
            }
            .closed_at(Point::new(0.0, h))
        } else {
            Self {
                from: walk(w, w + h, pitch, Wrap::Top, |k| (k, 0.0), |k| (w, k - w)),
                to: walk(h, w + h, pitch, Wrap::Bottom, |k| (0.0, k), |k| (k - h, h)),
                top_corner: Point::new(w, 0.0),
                bottom_corner: Point::new(0.0, h),
            }
            .closed_at(Point::new(w, h))
        };

        tracing::trace!(
            from = boundaries.from.len(),
            to = boundaries.to.len(),
            "laid out stripe boundaries"
        );
        boundaries
    }

    /// Number of stripes these boundaries bound.
    #[inline]
    pub fn len(&self) -> usize {
        self.from.len()
    }

    /// `true` if there are no stripes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }

    /// Close the last stripe against the far corner.
    fn closed_at(mut self, sentinel: Point) -> Self {
        let end = BoundaryPoint::new(sentinel.x, sentinel.y);
        self.from.push(end);
        self.to.push(end);
        self
    }
}

#[derive(Clone, Copy)]
enum Wrap {
    Top,
    Bottom,
}

/// Walk one boundary side.
///
/// `k` is the distance along the walk, advancing by `pitch` from 0 while it
/// stays below `total`. Points with `k < first` sit on the first edge, the
/// rest on the second edge. The last point of the first edge gets the wrap
/// flag.
fn walk(
    first: f64,
    total: f64,
    pitch: f64,
    wrap: Wrap,
    on_first: impl Fn(f64) -> (f64, f64),
    on_second: impl Fn(f64) -> (f64, f64),
) -> Vec<BoundaryPoint> {
    let mut points = Vec::new();
    let mut wrapped = false;
    for k in (0..).map(|n: u32| f64::from(n) * pitch) {
        if k >= total {
            break;
        }
        if k >= first && !wrapped {
            wrapped = true;
            mark_wrap(points.last_mut(), wrap);
        }
        let (x, y) = if wrapped { on_second(k) } else { on_first(k) };
        points.push(BoundaryPoint::new(x, y));
    }
    if !wrapped {
        mark_wrap(points.last_mut(), wrap);
    }
    points
}

fn mark_wrap(point: Option<&mut BoundaryPoint>, wrap: Wrap) {
    if let Some(point) = point {
        match wrap {
            Wrap::Top => point.top_corner = true,
            Wrap::Bottom => point.bottom_corner = true,
        }
    }
}
