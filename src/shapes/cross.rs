use std::collections::HashSet;

use crate::{
    composition::model::{AnimationObject, XParams},
    foundation::core::{Bounds, CanvasSize, OverlayMap, PixelData, emit},
    foundation::math::round_i32,
};

/// Cells on the segment `a -> b`, endpoints included (Bresenham).
pub(crate) fn bresenham(a: (i32, i32), b: (i32, i32)) -> Vec<(i32, i32)> {
    let (mut x, mut y) = a;
    let dx = (b.0 - a.0).abs();
    let dy = -(b.1 - a.1).abs();
    let sx = if a.0 < b.0 { 1 } else { -1 };
    let sy = if a.1 < b.1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut out = Vec::with_capacity((dx - dy + 1) as usize);
    loop {
        out.push((x, y));
        if x == b.0 && y == b.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    out
}

fn arm_radius(center: (i32, i32), full: Bounds, stretch: bool) -> f64 {
    let (cx, cy) = (f64::from(center.0), f64::from(center.1));
    let (max_x, max_y) = (f64::from(full.width - 1), f64::from(full.height - 1));
    if stretch {
        [(0.0, 0.0), (max_x, 0.0), (0.0, max_y), (max_x, max_y)]
            .iter()
            .map(|&(x, y)| ((x - cx).powi(2) + (y - cy).powi(2)).sqrt())
            .fold(0.0, f64::max)
    } else {
        cx.min(cy).min(max_x - cx).min(max_y - cy).max(0.0)
    }
}

/// Cells of the cross at `angle_deg`, thickened, deduplicated in first-seen order and clipped.
pub(crate) fn cross_cells(
    center: (i32, i32),
    radius: f64,
    angle_deg: f64,
    thickness: u32,
    clip: Bounds,
) -> Vec<(i32, i32)> {
    let t = thickness.max(1) as i32;
    let lo = -(t - 1) / 2;
    let hi = t / 2;

    let mut seen = HashSet::new();
    let mut cells = Vec::new();
    for arm in [45.0_f64, 135.0] {
        let a = (angle_deg + arm).to_radians();
        let (dx, dy) = (radius * a.cos(), radius * a.sin());
        let (cx, cy) = (f64::from(center.0), f64::from(center.1));
        let from = (round_i32(cx - dx), round_i32(cy - dy));
        let to = (round_i32(cx + dx), round_i32(cy + dy));
        for (x, y) in bresenham(from, to) {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    let c = (x + ox, y + oy);
                    if clip.contains(c.0, c.1) && seen.insert(c) {
                        cells.push(c);
                    }
                }
            }
        }
    }
    cells
}

/// Two perpendicular diagonals rotating about a center point.
///
/// Works in full-canvas coordinates; the default center is the canvas center.
pub fn generate_x(anim: &AnimationObject, params: &XParams, canvas: &CanvasSize) -> OverlayMap {
    let mut out = OverlayMap::new();
    let full = canvas.full();
    if anim.frames.is_empty() || full.is_empty() {
        return out;
    }

    let center = params
        .position
        .map(|p| (p.x, p.y))
        .unwrap_or((full.width / 2, full.height / 2));
    let radius = arm_radius(center, full, params.stretch_to_edges);
    let speed = if params.rotation_speed.is_finite() {
        params.rotation_speed
    } else {
        0.0
    };

    for (i, frame_id) in anim.frames.iter().enumerate() {
        let angle = (i as f64 * speed).rem_euclid(360.0);
        let pixels = cross_cells(center, radius, angle, params.thickness, full)
            .into_iter()
            .map(|(x, y)| PixelData::tagged(x, y, &anim.color, &anim.id))
            .collect();
        emit(&mut out, frame_id, pixels);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/cross.rs"]
mod tests;
