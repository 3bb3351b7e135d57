//! Countdown decorations drawn around the digit: loading bar, sparkles and the safe zone.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    composition::model::CountdownParams,
    foundation::color::modify_color_intensity,
    foundation::core::{Bounds, GridPoint, PixelData},
    foundation::math::{Rng64, round_half_up},
};

/// Frames in one safe-zone breathing cycle.
pub(crate) const SAFE_ZONE_PULSE_FRAMES: usize = 20;

/// Loading bar area: the configured bounds or the viewport's bottom row.
pub(crate) fn loading_bar_area(params: &CountdownParams, viewport: Bounds) -> Bounds {
    params
        .loading_bar_bounds
        .unwrap_or(Bounds::new(viewport.x, viewport.bottom() - 1, viewport.width, 1))
}

/// Fill fraction of the current segment `frame` frames into a digit lasting `frames_per_digit`.
pub(crate) fn segment_fill(frame: usize, frames_per_digit: usize, speed: f64) -> f64 {
    let speed = if speed.is_finite() && speed > 0.0 { speed } else { 1.0 };
    let divisor = frames_per_digit as f64 / speed - 1.0;
    if divisor <= 0.0 {
        return 1.0;
    }
    (frame as f64 / divisor).clamp(0.0, 1.0)
}

/// One segment per digit; segments before `digit` are full, `digit` fills left to right.
pub(crate) fn loading_bar(
    params: &CountdownParams,
    area: Bounds,
    digit: usize,
    fill: f64,
    fallback_color: &str,
    animation_id: &str,
) -> Vec<PixelData> {
    let segments = params.digits.len() as i32;
    if segments == 0 || area.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::new();
    for seg in 0..=(digit as i32).min(segments - 1) {
        let x0 = area.x + seg * area.width / segments;
        let x1 = area.x + (seg + 1) * area.width / segments;
        let width = x1 - x0;
        let lit = if seg < digit as i32 {
            width
        } else {
            round_half_up(fill * f64::from(width)) as i32
        };
        let color = if params.loading_bar_colors.is_empty() {
            fallback_color
        } else {
            params.loading_bar_colors[seg as usize % params.loading_bar_colors.len()].as_str()
        };
        for y in area.y..area.bottom() {
            for x in x0..x0 + lit {
                out.push(PixelData::tagged(x, y, color, animation_id));
            }
        }
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Sparkle {
    x: i32,
    y: i32,
    life: u32,
}

/// Sparkles dropping from the visible digit; state carries over between frames and digits.
#[derive(Clone, Debug)]
pub(crate) struct SparkleField {
    sparkles: Vec<Sparkle>,
    rng: Rng64,
}

impl SparkleField {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            sparkles: Vec::new(),
            rng: Rng64::new(seed),
        }
    }

    /// Age and move the live sparkles, spawn new ones under `bottom_row`, and draw them.
    pub(crate) fn tick(
        &mut self,
        params: &CountdownParams,
        viewport: Bounds,
        bottom_row: &[(i32, i32)],
        animation_id: &str,
    ) -> Vec<PixelData> {
        let rng = &mut self.rng;
        self.sparkles.retain_mut(|s| {
            s.life = s.life.saturating_sub(1);
            s.y += 1;
            s.x += rng.next_index(3) as i32 - 1;
            s.life > 0 && viewport.contains(s.x, s.y)
        });

        if params.sparkle_lifetime > 0 && !bottom_row.is_empty() {
            let spawn = self.rng.next_index(params.max_sparkles_per_frame as usize + 1);
            for _ in 0..spawn {
                let (x, y) = bottom_row[self.rng.next_index(bottom_row.len())];
                if viewport.contains(x, y + 1) {
                    self.sparkles.push(Sparkle {
                        x,
                        y: y + 1,
                        life: params.sparkle_lifetime,
                    });
                }
            }
        }

        self.sparkles
            .iter()
            .map(|s| PixelData::tagged(s.x, s.y, &params.sparkle_color, animation_id))
            .collect()
    }

    pub(crate) fn live(&self) -> usize {
        self.sparkles.len()
    }
}

/// Breathing intensity at digit frame `g`, in `[0.4, 1.0]`.
pub(crate) fn safe_zone_pulse(g: usize) -> f64 {
    let phase = (g % SAFE_ZONE_PULSE_FRAMES) as f64 / SAFE_ZONE_PULSE_FRAMES as f64;
    0.7 + 0.3 * (TAU * phase - FRAC_PI_2).sin()
}

/// Safe-zone pixels, optionally dimmed by `intensity`.
pub(crate) fn safe_zone(
    params: &CountdownParams,
    intensity: Option<f64>,
    animation_id: &str,
) -> Vec<PixelData> {
    let color = match intensity {
        Some(f) => modify_color_intensity(&params.safe_zone_color, f),
        None => params.safe_zone_color.clone(),
    };
    params
        .safe_zone_pixels
        .iter()
        .map(|p| PixelData::tagged(p.x, p.y, color.as_str(), animation_id))
        .collect()
}

/// Radial reveal of the safe zone from its centroid.
pub(crate) struct CenterOutIntro<'a> {
    pixels: &'a [GridPoint],
    distances: Vec<f64>,
    max_radius: f64,
}

impl<'a> CenterOutIntro<'a> {
    pub(crate) fn new(pixels: &'a [GridPoint]) -> Self {
        let n = pixels.len().max(1) as f64;
        let cx = pixels.iter().map(|p| f64::from(p.x)).sum::<f64>() / n;
        let cy = pixels.iter().map(|p| f64::from(p.y)).sum::<f64>() / n;
        let distances: Vec<f64> = pixels
            .iter()
            .map(|p| (f64::from(p.x) - cx).hypot(f64::from(p.y) - cy))
            .collect();
        let max_radius = distances.iter().copied().fold(0.0, f64::max);
        Self {
            pixels,
            distances,
            max_radius,
        }
    }

    /// Cells revealed on intro frame `i` of `total`.
    pub(crate) fn revealed(&self, i: usize, total: usize) -> Vec<GridPoint> {
        let radius = self.max_radius * (i + 1) as f64 / total.max(1) as f64;
        self.pixels
            .iter()
            .zip(&self.distances)
            .filter(|&(_, &d)| d <= radius + 1e-9)
            .map(|(p, _)| *p)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/countdown/overlays.rs"]
mod tests;
