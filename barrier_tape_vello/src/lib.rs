// Copyright 2025 the Barrier Tape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello rendering for barrier tape render plans.

use barrier_tape::{BarrierTape, RenderPlan};
use vello::{
    kurbo::{Affine, Rect},
    peniko::{Fill, Mix},
    Scene,
};

/// Add a [`RenderPlan`] to a Vello [`Scene`].
///
/// The stripes are filled in order inside a clip layer for the plan's clip
/// outline. `transform` maps the plan's local coordinates into the scene.
#[tracing::instrument(skip_all, fields(stripes = plan.stripes.len()))]
pub fn add_plan_to_scene(scene: &mut Scene, plan: &RenderPlan, transform: Affine) {
    let Some(clip) = &plan.clip else {
        return;
    };
    if plan.stripes.is_empty() {
        return;
    }

    scene.push_layer(Mix::Clip, 1.0, transform, &clip.to_path());
    for stripe in &plan.stripes {
        scene.fill(
            Fill::NonZero,
            transform,
            stripe.color,
            None,
            &stripe.to_path(),
        );
    }
    scene.pop_layer();
}

/// Paint `tape` as the background of `bounds` in `scene`.
///
/// Clears the tape's redraw request.
pub fn add_tape_to_scene(scene: &mut Scene, tape: &mut BarrierTape, bounds: Rect) {
    tape.take_needs_redraw();
    let plan = tape.plan(bounds.size());
    add_plan_to_scene(scene, &plan, Affine::translate(bounds.origin().to_vec2()));
}
