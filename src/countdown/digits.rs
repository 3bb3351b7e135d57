//! Digit glyphs and their placement on the canvas.

use crate::{
    composition::model::CountdownParams,
    foundation::core::{Bounds, CanvasSize},
};

/// Glyph width in unscaled cells.
pub const DIGIT_WIDTH: i32 = 3;
/// Glyph height in unscaled cells.
pub const DIGIT_HEIGHT: i32 = 5;
/// Blank columns between glyphs of a multi-character label.
const GLYPH_GAP: i32 = 1;

/// 3x5 bitmaps for `0`..`9`, one byte per row, bit 2 is the left column.
pub const DIGIT_BITMAPS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// A placed, scaled label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Glyph {
    /// Lit cells in row-major order (absolute coordinates).
    pub(crate) cells: Vec<(i32, i32)>,
    /// Box the label occupies, lit or not.
    pub(crate) bounds: Bounds,
}

fn label_columns(label: &str) -> i32 {
    let n = label.chars().count() as i32;
    if n == 0 {
        0
    } else {
        n * DIGIT_WIDTH + (n - 1) * GLYPH_GAP
    }
}

/// Whether unscaled cell `(col, row)` of `label` is lit. Non-digit characters are blank.
fn lit(label: &[char], col: i32, row: i32) -> bool {
    let pitch = DIGIT_WIDTH + GLYPH_GAP;
    let within = col % pitch;
    if within >= DIGIT_WIDTH {
        return false;
    }
    let Some(bitmap) = label
        .get((col / pitch) as usize)
        .and_then(|c| c.to_digit(10))
        .map(|d| DIGIT_BITMAPS[d as usize])
    else {
        return false;
    };
    bitmap[row as usize] & (1 << (DIGIT_WIDTH - 1 - within)) != 0
}

/// Scale factor: `size`, or the largest factor that fits `bounds` (at least 1).
pub(crate) fn scale_for(params: &CountdownParams, label_cols: i32) -> i32 {
    match params.bounds {
        Some(b) if label_cols > 0 => (b.width / label_cols).min(b.height / DIGIT_HEIGHT).max(1),
        _ => i32::try_from(params.size).unwrap_or(i32::MAX).max(1),
    }
}

/// Scale `label` and center it in the countdown bounds (or the viewport), then apply the offset.
pub(crate) fn place(label: &str, params: &CountdownParams, canvas: &CanvasSize) -> Glyph {
    let chars: Vec<char> = label.chars().collect();
    let cols = label_columns(label);
    if cols == 0 {
        return Glyph::default();
    }

    let area = params.bounds.unwrap_or_else(|| canvas.viewport());
    // A cell block wider than the whole canvas cannot show anything more.
    let full = canvas.full();
    let scale = scale_for(params, cols).min(full.width.max(full.height).max(1));
    let (w, h) = (cols.saturating_mul(scale), DIGIT_HEIGHT.saturating_mul(scale));
    let ox = area
        .x
        .saturating_add(area.width.saturating_sub(w).div_euclid(2))
        .saturating_add(params.offset.x);
    let oy = area
        .y
        .saturating_add(area.height.saturating_sub(h).div_euclid(2))
        .saturating_add(params.offset.y);

    let mut cells = Vec::new();
    for gy in 0..h {
        for gx in 0..w {
            if lit(&chars, gx / scale, gy / scale) {
                cells.push((ox + gx, oy + gy));
            }
        }
    }
    Glyph {
        cells,
        bounds: Bounds::new(ox, oy, w, h),
    }
}
