use std::collections::HashSet;

use crate::{
    composition::model::{AnimationKind, AnimationObject},
    countdown::generate_countdown,
    foundation::core::{CanvasSize, Frame, OverlayMap},
    shapes::{
        cross::generate_x, line::generate_line, rectangle::generate_rectangle,
        snake::generate_snake,
    },
};

/// Pixels one animation contributes, keyed by its own frame ids.
///
/// `PATH` animations are drawn by the editor and contribute nothing here.
#[tracing::instrument(
    level = "debug",
    skip(anim, canvas),
    fields(animation = %anim.id, kind = anim.kind.type_name())
)]
pub fn generate_animation(anim: &AnimationObject, canvas: &CanvasSize) -> OverlayMap {
    let out = match &anim.kind {
        AnimationKind::Line(p) => generate_line(anim, p, canvas),
        AnimationKind::X(p) => generate_x(anim, p, canvas),
        AnimationKind::Snake(p) => generate_snake(anim, p, canvas),
        AnimationKind::Rectangle(p) => generate_rectangle(anim, p, canvas),
        AnimationKind::Path(_) => OverlayMap::new(),
        AnimationKind::Countdown(p) => generate_countdown(anim, p, canvas),
    };
    tracing::trace!(
        frames = out.len(),
        pixels = out.values().map(Vec::len).sum::<usize>(),
        "animation generated"
    );
    out
}

/// An overlay with one empty entry per frame.
pub(crate) fn empty_overlay(frames: &[Frame]) -> OverlayMap {
    frames.iter().map(|f| (f.id.clone(), Vec::new())).collect()
}

/// Append `generated` onto `out`, dropping frame ids `out` does not know.
pub(crate) fn merge_overlay(out: &mut OverlayMap, generated: OverlayMap) {
    let mut dropped = 0usize;
    for (frame_id, pixels) in generated {
        match out.get_mut(&frame_id) {
            Some(slot) => slot.extend(pixels),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::trace!(dropped, "pixels for unknown frame ids dropped");
    }
}

/// Run every animation and merge the results per frame, in animation order.
///
/// Every id in `frames` is present in the output, with no pixels if nothing targets it.
/// `blocked_pixels` is part of the editor contract but filtering happens at render time, so it is
/// not applied here.
#[tracing::instrument(
    skip_all,
    fields(
        frames = frames.len(),
        animations = animations.len(),
        blocked = blocked_pixels.len()
    )
)]
pub fn apply_animations_to_frames(
    frames: &[Frame],
    animations: &[AnimationObject],
    canvas: &CanvasSize,
    blocked_pixels: &HashSet<(i32, i32)>,
) -> OverlayMap {
    let mut out = empty_overlay(frames);
    for anim in animations {
        merge_overlay(&mut out, generate_animation(anim, canvas));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/eval/compositor.rs"]
mod tests;
