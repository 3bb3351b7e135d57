//! Particle transitions that erode a pixel set as `progress` goes from 0 to 1.
//!
//! Every generator returns the surviving subset for one progress value. The survivor count never
//! grows with progress (matrix trails aside, which only re-add cells below a collapsing column)
//! and is always zero at `progress >= 1`.

use std::collections::BTreeMap;
use std::f64::consts::TAU;

use crate::foundation::color::hsl_to_hex;
use crate::foundation::core::{Bounds, PixelData};
use crate::foundation::lenient_name_enum;
use crate::foundation::math::{Rng64, noise01};

/// Color a disintegrating particle flashes just before it vanishes.
pub const SPARKLE_FLASH_COLOR: &str = "#FFE890";

/// Glyph color for the matrix transition when none is configured.
pub const DEFAULT_MATRIX_COLOR: &str = "#00FF41";

lenient_name_enum! {
    /// Which particle effect erodes the background after a countdown.
    pub enum TransitionEffect (default Thanos) {
        /// Radial disintegration from the center outward.
        Thanos => "thanos" | "disintegrate",
        /// Column-wise collapse with falling glyphs.
        Matrix => "matrix",
        /// Logarithmic spiral sweep.
        Spiral => "spiral",
    }
}

/// Tunables shared by the transition generators.
#[derive(Clone, Debug)]
pub struct TransitionParams {
    /// Disintegration particle size; scales the sparkle chance.
    pub particle_size: f64,
    /// Matrix glyph color.
    pub matrix_color: String,
    /// Seed for per-pixel vanish thresholds.
    pub seed: u64,
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            particle_size: 2.0,
            matrix_color: DEFAULT_MATRIX_COLOR.to_owned(),
            seed: 0,
        }
    }
}

/// Run `effect` on `pixels` at `progress`.
pub fn apply_transition(
    effect: TransitionEffect,
    pixels: &[PixelData],
    progress: f64,
    viewport: Bounds,
    params: &TransitionParams,
    rng: &mut Rng64,
) -> Vec<PixelData> {
    match effect {
        TransitionEffect::Thanos => disintegration_particles(
            pixels,
            progress,
            viewport,
            params.particle_size,
            params.seed,
            rng,
        ),
        TransitionEffect::Matrix => {
            matrix_transition_particles(pixels, progress, viewport, &params.matrix_color, rng)
        }
        TransitionEffect::Spiral => spiral_transition_particles(pixels, progress, viewport),
    }
}

fn polar(p: &PixelData, viewport: Bounds) -> (f64, f64) {
    let (cx, cy) = viewport.center();
    let half_diag = (f64::from(viewport.width) / 2.0).hypot(f64::from(viewport.height) / 2.0);
    let max_dist = if half_diag > 0.0 { half_diag } else { 1.0 };
    let dx = f64::from(p.x) - cx;
    let dy = f64::from(p.y) - cy;
    (dy.atan2(dx), (dx.hypot(dy) / max_dist).min(1.0))
}

/// "Thanos" disintegration: pixels near the center vanish first, with a ragged edge.
///
/// A pixel dies once `progress > dist * 0.8 + noise * 0.3`, where `noise` is fixed per
/// coordinate. During the last quarter of its life a pixel flashes
/// [`SPARKLE_FLASH_COLOR`] with probability `0.3 * particle_size / 2` per call.
pub fn disintegration_particles(
    pixels: &[PixelData],
    progress: f64,
    viewport: Bounds,
    particle_size: f64,
    seed: u64,
    rng: &mut Rng64,
) -> Vec<PixelData> {
    if progress >= 1.0 {
        return Vec::new();
    }
    let sparkle_chance = (0.3 * particle_size.max(0.0) / 2.0).min(1.0);

    let mut out = Vec::with_capacity(pixels.len());
    for p in pixels {
        let (_, dist) = polar(p, viewport);
        let threshold = dist * 0.8 + noise01(seed, p.x, p.y) * 0.3;
        if progress > threshold {
            continue;
        }
        let life = if threshold > 0.0 {
            progress / threshold
        } else {
            0.0
        };
        if life > 0.75 && rng.chance(sparkle_chance) {
            out.push(PixelData {
                color: SPARKLE_FLASH_COLOR.to_owned(),
                ..p.clone()
            });
        } else {
            out.push(p.clone());
        }
    }
    out
}

/// Matrix rain: every column collapses from the bottom up.
///
/// Each column keeps its top `ceil(count * (1 - progress))` cells. The two lowest kept cells turn
/// `matrix_color` with 70% probability, and past 30% progress a column has a 20% chance of
/// dragging 1-3 glyph cells below it, clipped to the viewport.
pub fn matrix_transition_particles(
    pixels: &[PixelData],
    progress: f64,
    viewport: Bounds,
    matrix_color: &str,
    rng: &mut Rng64,
) -> Vec<PixelData> {
    if progress >= 1.0 {
        return Vec::new();
    }
    let progress = progress.max(0.0);

    let mut columns: BTreeMap<i32, Vec<&PixelData>> = BTreeMap::new();
    for p in pixels {
        columns.entry(p.x).or_default().push(p);
    }

    let mut out = Vec::with_capacity(pixels.len());
    for column in columns.values_mut() {
        column.sort_by_key(|p| p.y);
        let keep = ((column.len() as f64) * (1.0 - progress)).ceil() as usize;
        let keep = keep.min(column.len());
        if keep == 0 {
            continue;
        }

        let glyph_from = keep.saturating_sub(2);
        for (i, p) in column[..keep].iter().enumerate() {
            if i >= glyph_from && rng.chance(0.7) {
                out.push(PixelData {
                    color: matrix_color.to_owned(),
                    ..(*p).clone()
                });
            } else {
                out.push((*p).clone());
            }
        }

        if progress > 0.3 && rng.chance(0.2) {
            let last = column[keep - 1];
            let trail = 1 + rng.next_index(3) as i32;
            for k in 1..=trail {
                let y = last.y + k;
                if y >= viewport.bottom() {
                    break;
                }
                out.push(PixelData {
                    y,
                    color: matrix_color.to_owned(),
                    is_head: false,
                    ..last.clone()
                });
            }
        }
    }
    out
}

/// Spiral peel: a logarithmic spiral sweeps the pixels away.
///
/// `spiral = angle / 2π + ln(1 + 8 * dist) / 2`; a pixel survives while `spiral > progress * 5`.
/// Pixels within 0.05 of the sweep edge glow in a rainbow, the rest are tinted by angle.
pub fn spiral_transition_particles(
    pixels: &[PixelData],
    progress: f64,
    viewport: Bounds,
) -> Vec<PixelData> {
    if progress >= 1.0 {
        return Vec::new();
    }
    let threshold = progress * 5.0;

    let mut out = Vec::new();
    for p in pixels {
        let (angle, dist) = polar(p, viewport);
        let angle = angle.rem_euclid(TAU);
        let spiral = angle / TAU + (1.0 + 8.0 * dist).ln() / 2.0;
        if spiral <= threshold {
            continue;
        }
        let deg = angle.to_degrees();
        let color = if spiral - threshold < 0.05 {
            hsl_to_hex(deg + dist * 360.0 + progress * 360.0, 100.0, 60.0)
        } else {
            hsl_to_hex(deg, 70.0, 30.0)
        };
        out.push(PixelData {
            color,
            ..p.clone()
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
