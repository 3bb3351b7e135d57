//! Per-cell digit coloring: static vertical gradient and gradient pulse.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::{
    composition::model::CountdownParams,
    foundation::color::interpolate_color,
    foundation::core::{Bounds, STANDARD_FRAME_DURATION_MS},
};

/// Resolves the color of a digit cell at a given frame.
pub(crate) struct DigitStyle<'a> {
    params: &'a CountdownParams,
    base: &'a str,
}

impl<'a> DigitStyle<'a> {
    pub(crate) fn new(params: &'a CountdownParams, base: &'a str) -> Self {
        Self { params, base }
    }

    /// Color of a cell on row `y` of a glyph occupying `glyph`, `frame` frames into the digit.
    pub(crate) fn color(&self, glyph: Bounds, y: i32, frame: usize) -> String {
        let p = self.params;
        let mut color = if p.enable_static_gradient {
            self.gradient(glyph, y, frame)
        } else {
            self.base.to_owned()
        };
        if p.enable_gradient_pulse && p.gradient_pulse_speed > 0 {
            let elapsed = frame as f64 * f64::from(STANDARD_FRAME_DURATION_MS);
            let phase = elapsed / f64::from(p.gradient_pulse_speed) * TAU;
            let t = ((phase - FRAC_PI_2).sin() + 1.0) / 2.0;
            color = interpolate_color(&color, &p.gradient_pulse_color, t);
        }
        color
    }

    fn gradient(&self, glyph: Bounds, y: i32, frame: usize) -> String {
        let p = self.params;
        let start = p.static_gradient_start.as_deref().unwrap_or(self.base);
        let rows = i64::from(glyph.height.max(1));
        let mut row = i64::from(y - glyph.y);
        if p.static_gradient_cycle && p.static_gradient_cycle_speed.is_finite() {
            let shift = (frame as f64 * p.static_gradient_cycle_speed).floor() as i64;
            row = (row + shift).rem_euclid(rows);
        }
        let t = if rows > 1 {
            row as f64 / (rows - 1) as f64
        } else {
            0.0
        };
        interpolate_color(start, &p.static_gradient_end, t)
    }
}
