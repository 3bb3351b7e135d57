use std::collections::HashSet;

use crate::foundation::core::{Bounds, PixelData};

/// Fill `viewport` with `color`, skipping every coordinate in `exclude`.
///
/// Pixels come out row-major. O(width × height).
pub fn fill_viewport_except(
    viewport: Bounds,
    color: &str,
    exclude: &HashSet<(i32, i32)>,
    animation_id: &str,
) -> Vec<PixelData> {
    if viewport.is_empty() {
        return Vec::new();
    }
    let area = (viewport.width as usize) * (viewport.height as usize);
    let mut out = Vec::with_capacity(area.saturating_sub(exclude.len()));
    for y in viewport.y..viewport.bottom() {
        for x in viewport.x..viewport.right() {
            if !exclude.contains(&(x, y)) {
                out.push(PixelData::tagged(x, y, color, animation_id));
            }
        }
    }
    out
}
