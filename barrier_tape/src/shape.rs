// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed outlines used to clip the stripes.

use peniko::kurbo::{
    BezPath, Circle, Ellipse, Point, Rect, RoundedRect, Shape, Triangle, DEFAULT_ACCURACY,
};

#[cfg(all(not(feature = "std"), not(test)))]
use crate::floatfuncs::FloatFuncs;

/// Move the vertex `top` of triangle `(top, b, c)` inwards along the bisector
/// of its interior angle.
///
/// The result is at perpendicular distance `distance` from both edges meeting
/// at `top`, so applying this to every vertex yields the parallel inset
/// triangle.
pub fn bisector_offset(top: Point, b: Point, c: Point, distance: f64) -> Point {
    let ab = b - top;
    let ac = c - top;
    let (len_ab, len_ac) = (ab.hypot(), ac.hypot());
    let cos = (ab.dot(ac) / (len_ab * len_ac)).clamp(-1.0, 1.0);
    let angle = cos.acos();
    top + (ab / len_ab + ac / len_ac) * (distance / angle.sin())
}

/// Triangle whose edges are parallel to `triangle`'s, `distance` further inside.
///
/// Each vertex moves along the bisector of its interior angle, so this works
/// for either winding.
pub fn inset_triangle(triangle: &Triangle, distance: f64) -> Triangle {
    let Triangle { a, b, c } = *triangle;
    Triangle::new(
        bisector_offset(a, b, c, distance),
        bisector_offset(b, a, c, distance),
        bisector_offset(c, a, b, distance),
    )
}

/// Radius of the inscribed circle, regardless of winding.
///
/// An inset of this distance or more collapses the triangle.
pub fn inradius(triangle: &Triangle) -> f64 {
    triangle.inscribed_circle().radius.abs()
}

/// Enumeration of outlines the clip builder produces.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// [`RoundedRect`] from Kurbo, radii may be zero.
    RoundedRect(RoundedRect),
    /// [`Ellipse`] from Kurbo.
    Ellipse(Ellipse),
    /// [`Circle`] from Kurbo.
    Circle(Circle),
    /// [`Triangle`] from Kurbo, in either winding.
    Triangle(Triangle),
}

macro_rules! impl_outline_from {
    ( $($T:ident)|* ) => {
        $(impl From<$T> for Outline {
            fn from(x: $T) -> Self {
                Self::$T(x)
            }
        })*
    };
}

impl_outline_from!(RoundedRect | Ellipse | Circle | Triangle);

macro_rules! impl_outline_fun {
    ( $self:ident, $fun:ident $(, $arg:ident)? ) => {
        match $self {
            Outline::RoundedRect(x) => x.$fun($($arg)?),
            Outline::Ellipse(x) => x.$fun($($arg)?),
            Outline::Circle(x) => x.$fun($($arg)?),
            Outline::Triangle(x) => x.$fun($($arg)?),
        }
    };
}

impl Outline {
    /// Enclosed area.
    pub fn area(&self) -> f64 {
        // Triangle area is signed by winding.
        impl_outline_fun!(self, area).abs()
    }

    /// `true` if `p` is inside the outline.
    pub fn contains(&self, p: Point) -> bool {
        impl_outline_fun!(self, contains, p)
    }

    /// Get bounding box for the outline.
    pub fn bounding_box(&self) -> Rect {
        impl_outline_fun!(self, bounding_box)
    }

    /// Convert to a closed [`BezPath`].
    pub fn to_path(&self) -> BezPath {
        impl_outline_fun!(self, to_path, DEFAULT_ACCURACY)
    }
}

/// The visible region of a shape: an outline, minus an optional inset.
///
/// Stripes are only visible inside `outline` and outside `inset`, so with an
/// inset present they form a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipOutline {
    /// Outer outline of the shape.
    pub outline: Outline,
    /// Inner outline subtracted from `outline`.
    pub inset: Option<Outline>,
}

impl ClipOutline {
    /// Clip without a border.
    pub fn new(outline: impl Into<Outline>) -> Self {
        Self {
            outline: outline.into(),
            inset: None,
        }
    }

    /// Clip with a border region bounded by `inset`.
    pub fn with_inset(outline: impl Into<Outline>, inset: impl Into<Outline>) -> Self {
        Self {
            outline: outline.into(),
            inset: Some(inset.into()),
        }
    }

    /// Area of the visible region.
    pub fn area(&self) -> f64 {
        self.outline.area() - self.inset.as_ref().map_or(0.0, Outline::area)
    }

    /// `true` if `p` is inside the visible region.
    pub fn contains(&self, p: Point) -> bool {
        self.outline.contains(p) && !self.inset.as_ref().is_some_and(|i| i.contains(p))
    }

    /// Single path for the visible region.
    ///
    /// The inset subpath winds opposite to the outline, so filling or
    /// clipping with either the non-zero or the even-odd rule gives
    /// `outline - inset`.
    pub fn to_path(&self) -> BezPath {
        let mut path = self.outline.to_path();
        if let Some(inset) = &self.inset {
            path.extend(inset.to_path().reverse_subpaths());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;
    use peniko::kurbo::{RoundedRectRadii, Vec2};

    fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
        (b - a).cross(p - a).abs() / (b - a).hypot()
    }

    #[test]
    fn inset_edges_are_parallel_at_distance() {
        let triangles = [
            Triangle::new((0., 0.), (0., 100.), (200., 50.)),
            Triangle::new((0., 0.), (100., 0.), (50., 86.6)),
            Triangle::new((50., 0.), (200., 300.), (0., 300.)),
        ];
        for t in triangles {
            for d in [0.0, 1.0, 10.0, 49.0] {
                let i = inset_triangle(&t, d);
                for (outer, inner) in [
                    ((t.a, t.b), (i.a, i.b)),
                    ((t.b, t.c), (i.b, i.c)),
                    ((t.c, t.a), (i.c, i.a)),
                ] {
                    for p in [inner.0, inner.1] {
                        let got = distance_to_line(p, outer.0, outer.1);
                        assert!((got - d).abs() < 1e-9, "{t:?} inset {d}: {got}");
                    }
                }
            }
        }
    }

    #[test]
    fn small_inset_stays_inside() {
        let t = Triangle::new((0., 0.), (0., 100.), (200., 50.));
        let i = inset_triangle(&t, 5.0);
        assert!([i.a, i.b, i.c].iter().all(|&p| t.contains(p)));
        assert!(i.area().abs() < t.area().abs());
        // Winding is preserved.
        assert_eq!(i.area().signum(), t.area().signum());
    }

    #[test]
    fn zero_inset_is_identity() {
        let t = Triangle::new((10., 0.), (90., 20.), (40., 70.));
        let i = inset_triangle(&t, 0.0);
        for (p, q) in [(t.a, i.a), (t.b, i.b), (t.c, i.c)] {
            assert!((p - q).hypot() < 1e-12);
        }
    }

    #[test]
    fn inradius_of_right_triangle() {
        // 3-4-5 triangle has inradius 1.
        let t = Triangle::new((0., 0.), (3., 0.), (0., 4.));
        assert!((inradius(&t) - 1.0).abs() < 1e-12);
        let flipped = Triangle::new(t.a, t.c, t.b);
        assert!((inradius(&flipped) - 1.0).abs() < 1e-12);
        // An inset by the inradius collapses onto the incenter.
        let i = inset_triangle(&t, 1.0);
        assert!((i.a - Vec2::new(1.0, 1.0).to_point()).hypot() < 1e-9);
        assert!(i.area().abs() < 1e-9);
    }

    #[test]
    fn triangle_outline_either_winding() {
        let cw = Triangle::new((0., 0.), (10., 0.), (0., 10.));
        let ccw = Triangle::new(cw.a, cw.c, cw.b);
        for t in [cw, ccw] {
            let o = Outline::from(t);
            assert_eq!(o.area(), 50.0);
            assert!(o.contains(Point::new(2.0, 2.0)));
            assert!(!o.contains(Point::new(8.0, 8.0)));
            assert_eq!(o.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
        }
    }

    #[test]
    fn reversed_triangle_inset_cuts_a_hole() {
        let outer = Triangle::new((0., 0.), (0., 100.), (200., 50.));
        let clip = ClipOutline::with_inset(outer, inset_triangle(&outer, 10.0));
        let path = clip.to_path();
        assert!((path.area().abs() - clip.area()).abs() < 1e-9);
        let center = outer.inscribed_circle().center;
        assert!(!path.contains(center));
        assert!(path.contains(Point::new(2.0, 50.0)));
    }

    #[test]
    fn annulus_area() {
        let clip = ClipOutline::with_inset(
            Circle::new((50.0, 50.0), 50.0),
            Circle::new((50.0, 50.0), 40.0),
        );
        let expected = PI * (50.0 * 50.0 - 40.0 * 40.0);
        assert!((clip.area() - expected).abs() < 1e-6);
        // The combined path has opposite windings, so its signed area is the annulus.
        assert!((clip.to_path().area().abs() - expected).abs() < 1.0);
        assert!(clip.contains(Point::new(5.0, 50.0)));
        assert!(!clip.contains(Point::new(50.0, 50.0)));
        assert!(!clip.to_path().contains(Point::new(50.0, 50.0)));
        assert!(clip.to_path().contains(Point::new(95.0, 50.0)));
    }

    #[test]
    fn rounded_frame_path() {
        let outer = RoundedRect::from_rect(
            Rect::new(0.0, 0.0, 200.0, 100.0),
            RoundedRectRadii::from_single_radius(10.0),
        );
        let inner = RoundedRect::from_rect(
            Rect::new(10.0, 10.0, 190.0, 90.0),
            RoundedRectRadii::from_single_radius(10.0),
        );
        let clip = ClipOutline::with_inset(outer, inner);
        let path = clip.to_path();
        assert!((path.area().abs() - clip.area()).abs() < 1.0);
        assert!(path.contains(Point::new(5.0, 50.0)));
        assert!(!path.contains(Point::new(100.0, 50.0)));
    }

    #[test]
    fn outline_dispatch() {
        let o: Outline = Triangle::new((0., 0.), (4., 0.), (0., 4.)).into();
        assert_eq!(o.area(), 8.0);
        assert_eq!(o.bounding_box(), Rect::new(0.0, 0.0, 4.0, 4.0));
        assert!((o.to_path().area().abs() - 8.0).abs() < 1e-12);
        let e: Outline = Ellipse::from_rect(Rect::new(0.0, 0.0, 20.0, 10.0)).into();
        assert!((e.area() - PI * 50.0).abs() < 1e-9);
        assert!(e.contains(Point::new(10.0, 5.0)));
    }
}
