//! Digit enter/leave effects: row and column fades plus the digital drip.

use crate::{
    countdown::digits::Glyph,
    foundation::color::interpolate_color,
    foundation::core::{Bounds, PixelData},
    foundation::math::{round_half_up, round_i32},
};

/// Share of a digit's frames spent dripping; the rest staggers the columns.
pub(crate) const DRIP_SHARE: f64 = 0.8;
/// Share of a drip-out fall shown in the highlight color.
pub(crate) const DRIP_FLASH_SHARE: f64 = 0.15;
/// Progress at which a dripping column counts as landed (absorbs stagger rounding).
const LANDED: f64 = 1.0 - 1e-9;

/// Lit cells on the first `ceil(progress * rows)` rows counted from the bottom (or top).
pub(crate) fn fade_in_rows(glyph: &Glyph, from_bottom: bool, progress: f64) -> Vec<(i32, i32)> {
    let rows = glyph.bounds.height;
    let shown = (progress.clamp(0.0, 1.0) * f64::from(rows)).ceil() as i32;
    glyph
        .cells
        .iter()
        .copied()
        .filter(|&(_, y)| {
            let local = y - glyph.bounds.y;
            if from_bottom {
                local >= rows - shown
            } else {
                local < shown
            }
        })
        .collect()
}

/// Lit cells in the `cols - floor(progress * cols)` columns kept on the left (or right).
pub(crate) fn fade_out_columns(glyph: &Glyph, keep_left: bool, progress: f64) -> Vec<(i32, i32)> {
    let cols = glyph.bounds.width;
    let visible = cols - (progress.clamp(0.0, 1.0) * f64::from(cols)).floor() as i32;
    glyph
        .cells
        .iter()
        .copied()
        .filter(|&(x, _)| {
            let local = x - glyph.bounds.x;
            if keep_left {
                local < visible
            } else {
                local >= cols - visible
            }
        })
        .collect()
}

/// Column start offsets for a drip spanning `total` frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DripTiming {
    /// Frames one column takes to fall.
    pub(crate) drip: usize,
    /// Frames between consecutive column starts.
    pub(crate) stagger: f64,
}

impl DripTiming {
    pub(crate) fn new(total: usize, cols: i32) -> Self {
        let drip = (round_half_up(total as f64 * DRIP_SHARE) as usize).clamp(1, total.max(1));
        let stagger = if cols > 1 {
            total.saturating_sub(drip) as f64 / f64::from(cols - 1)
        } else {
            0.0
        };
        Self { drip, stagger }
    }

    /// Fall progress of local column `col` at frame `f`; `<= 0` before it starts.
    fn progress(&self, col: i32, f: f64) -> f64 {
        (f - f64::from(col) * self.stagger) / self.drip as f64
    }
}

/// Shared inputs for drip rendering.
pub(crate) struct DripFrame<'a> {
    pub(crate) glyph: &'a Glyph,
    pub(crate) viewport: Bounds,
    pub(crate) timing: DripTiming,
    pub(crate) frame: usize,
    pub(crate) highlight: &'a str,
    pub(crate) animation_id: &'a str,
}

impl DripFrame<'_> {
    /// Columns fall from above the viewport into place, blending from the highlight to
    /// `color_of(y)` as they land.
    pub(crate) fn drip_in(&self, color_of: impl Fn(i32) -> String) -> Vec<PixelData> {
        let g = self.glyph;
        let distance = f64::from(g.bounds.bottom() - self.viewport.y);
        let mut out = Vec::with_capacity(g.cells.len());
        for &(x, y) in &g.cells {
            let p = self.timing.progress(x - g.bounds.x, self.frame as f64 + 1.0);
            if p <= 0.0 {
                continue;
            }
            if p >= LANDED {
                out.push(PixelData::tagged(x, y, color_of(y), self.animation_id));
                continue;
            }
            let fy = y - round_i32((1.0 - p) * distance);
            if fy < self.viewport.y {
                continue;
            }
            let color = interpolate_color(self.highlight, &color_of(y), p);
            out.push(PixelData::tagged(x, fy, color, self.animation_id));
        }
        out
    }

    /// Columns fall off the viewport bottom, flashing the highlight first and then blending to
    /// `trail`.
    pub(crate) fn drip_out(&self, trail: &str, color_of: impl Fn(i32) -> String) -> Vec<PixelData> {
        let g = self.glyph;
        let distance = f64::from(self.viewport.bottom() - g.bounds.y);
        let mut out = Vec::with_capacity(g.cells.len());
        for &(x, y) in &g.cells {
            let p = self.timing.progress(x - g.bounds.x, self.frame as f64);
            if p <= 0.0 {
                out.push(PixelData::tagged(x, y, color_of(y), self.animation_id));
                continue;
            }
            if p >= LANDED {
                continue;
            }
            let fy = y + round_i32(p * distance);
            if fy >= self.viewport.bottom() {
                continue;
            }
            let color = if p < DRIP_FLASH_SHARE {
                self.highlight.to_owned()
            } else {
                let t = (p - DRIP_FLASH_SHARE) / (1.0 - DRIP_FLASH_SHARE);
                interpolate_color(self.highlight, trail, t)
            };
            out.push(PixelData::tagged(x, fy, color, self.animation_id));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/countdown/drip.rs"]
mod tests;
