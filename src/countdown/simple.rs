use crate::{
    composition::model::{AnimationObject, CountdownParams},
    countdown::{digits::place, frames_per_digit},
    foundation::core::{CanvasSize, OverlayMap, PixelData, emit},
};

/// Static digits with no effects: render each digit once and repeat it across its frames.
///
/// Produces the same map as the general countdown path for parameters where
/// [`CountdownParams::is_simple`] holds.
pub fn generate_simple_countdown(
    anim: &AnimationObject,
    params: &CountdownParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    let mut out: OverlayMap = anim
        .frames
        .iter()
        .map(|id| (id.clone(), Vec::new()))
        .collect();
    let per_digit = frames_per_digit(params);
    let mut frames = anim.frames.iter();

    for label in &params.digits {
        let pixels: Vec<PixelData> = place(label, params, canvas)
            .cells
            .into_iter()
            .map(|(x, y)| PixelData::tagged(x, y, &anim.color, &anim.id))
            .collect();
        for frame_id in frames.by_ref().take(per_digit) {
            emit(&mut out, frame_id, pixels.clone());
        }
    }
    out
}
