use crate::{
    animation::ease::Ease,
    animation::rect::{RectangleState, interpolate_rectangles},
    composition::model::{AnimationObject, RectangleCycleMode, RectangleParams},
    foundation::core::{Bounds, CanvasSize, OverlayMap, PixelData, emit, ms_to_frames},
    foundation::math::round_half_up,
};

/// Transition length in frames at speed 1.
const BASE_TRANSITION_FRAMES: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Phase {
    /// Hold keyframe `state` for `frames` frames.
    Hold { state: usize, frames: usize },
    /// Morph `from -> to` over `frames` frames.
    Transition {
        from: usize,
        to: usize,
        frames: usize,
    },
}

impl Phase {
    fn frames(&self) -> usize {
        match *self {
            Phase::Hold { frames, .. } | Phase::Transition { frames, .. } => frames,
        }
    }
}

/// Frames one transition takes at `speed` (clamped to `[0.1, 10]`).
pub(crate) fn transition_frames(speed: f64) -> usize {
    let speed = if speed.is_finite() { speed.clamp(0.1, 10.0) } else { 1.0 };
    (round_half_up(BASE_TRANSITION_FRAMES / speed) as usize).max(1)
}

/// Phase timeline for `states` under `mode`; cyclic modes repeat it, `NoCycle` holds the last
/// state once it runs out.
pub(crate) fn build_phases(
    states: &[RectangleState],
    mode: RectangleCycleMode,
    speed: f64,
) -> Vec<Phase> {
    let n = states.len();
    let order: Vec<usize> = match mode {
        RectangleCycleMode::PingPong => (0..n).chain((1..n.saturating_sub(1)).rev()).collect(),
        RectangleCycleMode::Loop
        | RectangleCycleMode::DirectToStart
        | RectangleCycleMode::NoCycle => (0..n).collect(),
    };
    let cyclic = mode != RectangleCycleMode::NoCycle;
    let tf = transition_frames(speed);

    let mut phases = Vec::with_capacity(order.len() * 2);
    for (k, &state) in order.iter().enumerate() {
        phases.push(Phase::Hold {
            state,
            frames: ms_to_frames(f64::from(states[state].delay)),
        });
        let next = match order.get(k + 1) {
            Some(&next) => next,
            None if cyclic => order[0],
            None => break,
        };
        phases.push(Phase::Transition {
            from: state,
            to: next,
            frames: tf,
        });
    }
    phases
}

/// Keyframe geometry at animation frame `index`.
pub(crate) fn state_at(
    states: &[RectangleState],
    phases: &[Phase],
    cyclic: bool,
    easing: Ease,
    index: usize,
) -> Option<RectangleState> {
    let last = *states.last()?;
    let total: usize = phases.iter().map(Phase::frames).sum();
    if total == 0 {
        return Some(states[0]);
    }
    let mut v = if cyclic { index % total } else { index };
    for phase in phases {
        let len = phase.frames();
        if v < len {
            return Some(match *phase {
                Phase::Hold { state, .. } => states[state],
                Phase::Transition { from, to, frames } => interpolate_rectangles(
                    &states[from],
                    &states[to],
                    easing.apply(v as f64 / frames as f64),
                ),
            });
        }
        v -= len;
    }
    Some(last)
}

/// Cells of `rect` (absolute), filled or as a one-cell outline, clipped to `clip`.
pub(crate) fn rectangle_cells(rect: Bounds, filled: bool, clip: Bounds) -> Vec<(i32, i32)> {
    if rect.is_empty() {
        return Vec::new();
    }
    let mut cells = Vec::new();
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            let edge = x == rect.x || x == rect.right() - 1 || y == rect.y || y == rect.bottom() - 1;
            if (filled || edge) && clip.contains(x, y) {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// A rectangle morphing through keyframes.
///
/// States are viewport-relative and drawn offset by the viewport origin; a single state is drawn
/// statically.
pub fn generate_rectangle(
    anim: &AnimationObject,
    params: &RectangleParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    let mut out = OverlayMap::new();
    if anim.frames.is_empty() || params.states.is_empty() {
        return out;
    }

    let vp = canvas.viewport();
    let full = canvas.full();
    let phases = build_phases(&params.states, params.cycle_mode, params.speed);
    let cyclic = params.cycle_mode != RectangleCycleMode::NoCycle;

    for (i, frame_id) in anim.frames.iter().enumerate() {
        let Some(s) = state_at(&params.states, &phases, cyclic, params.easing, i) else {
            continue;
        };
        let rect = Bounds::new(vp.x + s.x, vp.y + s.y, s.width, s.height);
        let pixels = rectangle_cells(rect, params.filled, full)
            .into_iter()
            .map(|(x, y)| PixelData::tagged(x, y, &anim.color, &anim.id))
            .collect();
        emit(&mut out, frame_id, pixels);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/rectangle.rs"]
mod tests;
