use crate::foundation::math::round_i32;

/// One keyframe in a rectangle's morph sequence (viewport-relative).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RectangleState {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
    /// Hold time at this state in milliseconds.
    #[serde(default)]
    pub delay: u32,
}

/// Interpolate two rectangles by center point and size.
///
/// Interpolating corners would skew the rectangle whenever the aspect ratio changes. Width and
/// height never drop below 1.
pub fn interpolate_rectangles(from: &RectangleState, to: &RectangleState, t: f64) -> RectangleState {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |a: f64, b: f64| a + (b - a) * t;

    let (fw, fh) = (f64::from(from.width), f64::from(from.height));
    let (tw, th) = (f64::from(to.width), f64::from(to.height));
    let cx = lerp(f64::from(from.x) + fw / 2.0, f64::from(to.x) + tw / 2.0);
    let cy = lerp(f64::from(from.y) + fh / 2.0, f64::from(to.y) + th / 2.0);

    let width = round_i32(lerp(fw, tw)).max(1);
    let height = round_i32(lerp(fh, th)).max(1);

    RectangleState {
        x: round_i32(cx - f64::from(width) / 2.0),
        y: round_i32(cy - f64::from(height) / 2.0),
        width,
        height,
        delay: from.delay,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rect.rs"]
mod tests;
