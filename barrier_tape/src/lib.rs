// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barrier tape: diagonal stripes of alternating colors, clipped to a shape.
//!
//! A [`Style`] describes the tape. For every paint of a region, build a
//! [`RenderPlan`] and hand it to the host's 2D drawing primitives: clip to
//! [`RenderPlan::clip`], then fill [`RenderPlan::stripes`] in order.
//!
//! ```
//! use barrier_tape::{peniko::kurbo::Size, BarrierTape, ShapeKind};
//!
//! let mut tape = BarrierTape::default();
//! tape.set_shape(ShapeKind::Circle);
//! tape.set_border_width(10.0).unwrap();
//!
//! let plan = tape.plan(Size::new(100.0, 100.0));
//! let clip = plan.clip.unwrap();
//! assert!(clip.inset.is_some());
//! assert!(!plan.stripes.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Use `libm` for float math when `std` is disabled.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub use peniko;

pub mod clip;
mod error;
mod floatfuncs;
pub mod layout;
pub mod plan;
pub mod presets;
pub mod shape;
pub mod style;
mod tape;

pub use clip::{Orientation, ShapeKind};
pub use error::{Corner, StyleError};
pub use layout::{BoundaryPoint, StripeBoundaries};
pub use plan::{RenderPlan, StripePolygon};
pub use shape::{ClipOutline, Outline};
pub use style::{CornerRadii, Style};
pub use tape::BarrierTape;
