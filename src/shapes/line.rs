use crate::{
    composition::model::{AnimationObject, BorderBehavior, Direction, LineParams, Orientation},
    foundation::core::{CanvasSize, OverlayMap, PixelData, emit},
};

/// Bar offset along its axis at animation frame `index`, in `[0, extent - 1]`.
pub(crate) fn line_position(
    index: usize,
    step: f64,
    extent: i32,
    behavior: BorderBehavior,
    backward: bool,
) -> i32 {
    if extent <= 1 {
        return 0;
    }
    let extent = i64::from(extent);
    let travelled = (index as f64 * step).floor() as i64;
    let pos = match behavior {
        BorderBehavior::Wrap => travelled.rem_euclid(extent),
        BorderBehavior::Bounce => {
            let cycle = 2 * (extent - 1);
            let off = travelled.rem_euclid(cycle);
            if off < extent { off } else { cycle - off }
        }
    };
    let pos = if backward { extent - 1 - pos } else { pos };
    pos.clamp(0, extent - 1) as i32
}

/// A one-cell bar sweeping across the viewport.
///
/// `HORIZONTAL` moves a full-height column along x, `VERTICAL` a full-width row along y. The step
/// per frame is `ceil(extent / frames) * speed`, so one pass takes roughly the whole timeline at
/// speed 1.
pub fn generate_line(
    anim: &AnimationObject,
    params: &LineParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    let mut out = OverlayMap::new();
    let vp = canvas.viewport();
    if anim.frames.is_empty() || vp.is_empty() {
        return out;
    }

    let along_x = params.orientation == Orientation::Horizontal;
    let extent = if along_x { vp.width } else { vp.height };
    let backward = matches!(
        (params.orientation, params.direction),
        (Orientation::Horizontal, Direction::Left) | (Orientation::Vertical, Direction::Up)
    );
    let speed = if params.speed.is_finite() {
        params.speed.max(0.0)
    } else {
        1.0
    };
    let step = (f64::from(extent) / anim.frames.len() as f64).ceil() * speed;

    for (i, frame_id) in anim.frames.iter().enumerate() {
        let pos = line_position(i, step, extent, params.border_behavior, backward);
        let pixels: Vec<PixelData> = if along_x {
            (vp.y..vp.bottom())
                .map(|y| PixelData::tagged(vp.x + pos, y, &anim.color, &anim.id))
                .collect()
        } else {
            (vp.x..vp.right())
                .map(|x| PixelData::tagged(x, vp.y + pos, &anim.color, &anim.id))
                .collect()
        };
        emit(&mut out, frame_id, pixels);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/line.rs"]
mod tests;
