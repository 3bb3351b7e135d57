//! COUNTDOWN: a phased state machine over the animation's frame list.
//!
//! Phases run in order (safe-zone intro, pause, digits, background disintegration) and share
//! one frame budget. Every phase stops as soon as the budget runs out; frame ids nobody wrote to
//! stay in the output with no pixels.

pub(crate) mod digits;
pub(crate) mod drip;
pub(crate) mod overlays;
pub(crate) mod simple;
pub(crate) mod style;

use std::collections::HashSet;

use crate::{
    composition::model::{AnimationObject, CountdownParams, FadeOption, SafeZoneIntro},
    countdown::{
        digits::{Glyph, place},
        drip::{DripFrame, DripTiming, fade_in_rows, fade_out_columns},
        overlays::{
            CenterOutIntro, SparkleField, loading_bar, loading_bar_area, safe_zone,
            safe_zone_pulse, segment_fill,
        },
        style::DigitStyle,
    },
    effects::background::fill_viewport_except,
    effects::transitions::{DEFAULT_MATRIX_COLOR, TransitionParams, apply_transition},
    foundation::core::{Bounds, CanvasSize, OverlayMap, PixelData, emit, ms_to_frames},
    foundation::math::{Rng64, seed_for},
};

pub use simple::generate_simple_countdown;

const SPARKLE_SALT: u64 = 0x5350_4B4C;
const TRANSITION_SALT: u64 = 0x5452_414E;
const NOISE_SALT: u64 = 0x4E4F_4953;

/// Frames each digit occupies.
pub(crate) fn frames_per_digit(params: &CountdownParams) -> usize {
    match params.fade_option {
        FadeOption::DigitalDripCycle => {
            let (in_out, hold) = drip_cycle_frames(params);
            2 * in_out + hold
        }
        _ => ms_to_frames(f64::from(params.speed)).max(1),
    }
}

fn drip_cycle_frames(params: &CountdownParams) -> (usize, usize) {
    (
        ms_to_frames(f64::from(params.drip_phase_duration)).max(1),
        ms_to_frames(f64::from(params.drip_hold_duration)),
    )
}

fn positive_or_one(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

/// The animation's frame ids consumed front to back.
struct FrameBudget<'a> {
    frames: &'a [String],
    cursor: usize,
    out: OverlayMap,
    animation_id: &'a str,
    reported: bool,
}

impl<'a> FrameBudget<'a> {
    fn new(frames: &'a [String], animation_id: &'a str) -> Self {
        Self {
            frames,
            cursor: 0,
            out: frames.iter().map(|id| (id.clone(), Vec::new())).collect(),
            animation_id,
            reported: false,
        }
    }

    fn is_exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }

    /// Write the next frame; `false` once the budget is spent.
    fn push(&mut self, phase: &'static str, pixels: Vec<PixelData>) -> bool {
        if self.is_exhausted() {
            if !self.reported {
                tracing::debug!(
                    animation = self.animation_id,
                    phase,
                    frames = self.frames.len(),
                    "countdown frame budget exhausted"
                );
                self.reported = true;
            }
            return false;
        }
        emit(&mut self.out, &self.frames[self.cursor], pixels);
        self.cursor += 1;
        true
    }

    fn enter(&self, phase: &'static str) {
        tracing::debug!(
            animation = self.animation_id,
            phase,
            cursor = self.cursor,
            "countdown phase"
        );
    }

    fn finish(self) -> OverlayMap {
        self.out
    }
}

/// Stacks a frame's layers over the optional background fill.
struct Composer<'a> {
    params: &'a CountdownParams,
    viewport: Bounds,
    animation_id: &'a str,
}

impl Composer<'_> {
    fn compose(&self, layers: Vec<PixelData>) -> Vec<PixelData> {
        if !self.params.enable_black_background {
            return layers;
        }
        let drawn: HashSet<(i32, i32)> = layers.iter().map(PixelData::coord).collect();
        let mut frame = fill_viewport_except(
            self.viewport,
            &self.params.background_color,
            &drawn,
            self.animation_id,
        );
        frame.extend(layers);
        frame
    }
}

/// Generate a countdown, taking the fast path when no effect is enabled.
#[tracing::instrument(skip(anim, params, canvas), fields(animation = %anim.id))]
pub fn generate_countdown(
    anim: &AnimationObject,
    params: &CountdownParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    if params.is_simple() {
        generate_simple_countdown(anim, params, canvas)
    } else {
        generate_general(anim, params, canvas)
    }
}

/// The full phase machine; handles every parameter combination.
pub(crate) fn generate_general(
    anim: &AnimationObject,
    params: &CountdownParams,
    canvas: &CanvasSize,
) -> OverlayMap {
    let id = anim.id.as_str();
    let mut budget = FrameBudget::new(&anim.frames, id);
    if anim.frames.is_empty() {
        return budget.finish();
    }

    let viewport = canvas.viewport();
    let composer = Composer {
        params,
        viewport,
        animation_id: id,
    };
    let safe_enabled = params.enable_safe_zone && !params.safe_zone_pixels.is_empty();
    let safe_cells: HashSet<(i32, i32)> = if safe_enabled {
        params.safe_zone_pixels.iter().map(|p| (p.x, p.y)).collect()
    } else {
        HashSet::new()
    };

    if safe_enabled && params.safe_zone_intro == SafeZoneIntro::CenterOut {
        safe_zone_intro(params, &composer, &mut budget);
    }

    let digits_complete = digit_phase(anim, params, canvas, &composer, safe_enabled, &mut budget);

    if params.enable_black_background && digits_complete && !budget.is_exhausted() {
        budget.enter("disintegration");
        let total = ms_to_frames(f64::from(params.disintegration_duration));
        let background =
            fill_viewport_except(viewport, &params.background_color, &safe_cells, id);
        let safe_layer = if safe_enabled {
            safe_zone(params, None, id)
        } else {
            Vec::new()
        };
        let tparams = TransitionParams {
            particle_size: params.particle_size,
            matrix_color: params
                .matrix_color
                .clone()
                .unwrap_or_else(|| DEFAULT_MATRIX_COLOR.to_owned()),
            seed: seed_for(id, NOISE_SALT),
        };
        let mut rng = Rng64::new(seed_for(id, TRANSITION_SALT));
        for i in 0..total {
            let progress = (i + 1) as f64 / total as f64;
            let mut pixels = apply_transition(
                params.transition_effect,
                &background,
                progress,
                viewport,
                &tparams,
                &mut rng,
            );
            pixels.retain(|p| !safe_cells.contains(&p.coord()));
            pixels.extend(safe_layer.iter().cloned());
            if !budget.push("disintegration", pixels) {
                break;
            }
        }
    }

    budget.finish()
}

fn safe_zone_intro(params: &CountdownParams, composer: &Composer<'_>, budget: &mut FrameBudget<'_>) {
    budget.enter("safe-zone-intro");
    let duration_ms = (1000.0 / positive_or_one(params.safe_zone_speed)).max(100.0);
    let total = ms_to_frames(duration_ms);
    let intro = CenterOutIntro::new(&params.safe_zone_pixels);
    for i in 0..total {
        let layer = intro
            .revealed(i, total)
            .into_iter()
            .map(|p| {
                PixelData::tagged(p.x, p.y, params.safe_zone_color.as_str(), composer.animation_id)
            })
            .collect();
        if !budget.push("safe-zone-intro", composer.compose(layer)) {
            return;
        }
    }

    budget.enter("safe-zone-pause");
    for _ in 0..ms_to_frames(f64::from(params.safe_zone_pause_duration)) {
        let layer = safe_zone(params, None, composer.animation_id);
        if !budget.push("safe-zone-pause", composer.compose(layer)) {
            return;
        }
    }
}

/// Emit every digit frame; `true` when all of them fit in the budget.
fn digit_phase(
    anim: &AnimationObject,
    params: &CountdownParams,
    canvas: &CanvasSize,
    composer: &Composer<'_>,
    safe_enabled: bool,
    budget: &mut FrameBudget<'_>,
) -> bool {
    let id = anim.id.as_str();
    let viewport = composer.viewport;
    let per_digit = frames_per_digit(params);
    let style = DigitStyle::new(params, &anim.color);
    let bar_area = loading_bar_area(params, viewport);
    let mut sparkles = SparkleField::new(seed_for(id, SPARKLE_SALT));
    let mut pulse_frame = 0usize;

    budget.enter("digits");
    for (index, label) in params.digits.iter().enumerate() {
        let glyph = place(label, params, canvas);
        for f in 0..per_digit {
            let mut layers = Vec::new();
            if safe_enabled {
                let intensity = params.safe_zone_pulse.then(|| safe_zone_pulse(pulse_frame));
                layers.extend(safe_zone(params, intensity, id));
            }

            let digit = digit_frame(params, &glyph, &style, viewport, f, per_digit, id);
            let bottom_row = lowest_row(&digit);
            layers.extend(digit);

            if params.enable_loading_bar {
                let fill = segment_fill(f, per_digit, params.loading_bar_speed);
                layers.extend(loading_bar(params, bar_area, index, fill, &anim.color, id));
            }
            if params.enable_sparkle {
                layers.extend(sparkles.tick(params, viewport, &bottom_row, id));
            }

            if !budget.push("digits", composer.compose(layers)) {
                return false;
            }
            pulse_frame += 1;
        }
    }
    tracing::trace!(
        animation = id,
        frames = pulse_frame,
        sparkles = sparkles.live(),
        "countdown digits done"
    );
    true
}

fn lowest_row(pixels: &[PixelData]) -> Vec<(i32, i32)> {
    let Some(max_y) = pixels.iter().map(|p| p.y).max() else {
        return Vec::new();
    };
    pixels
        .iter()
        .filter(|p| p.y == max_y)
        .map(PixelData::coord)
        .collect()
}

/// Digit pixels for frame `f` of `total` under the configured fade option.
fn digit_frame(
    params: &CountdownParams,
    glyph: &Glyph,
    style: &DigitStyle<'_>,
    viewport: Bounds,
    f: usize,
    total: usize,
    animation_id: &str,
) -> Vec<PixelData> {
    let paint = |cells: Vec<(i32, i32)>, frame: usize| -> Vec<PixelData> {
        cells
            .into_iter()
            .map(|(x, y)| PixelData::tagged(x, y, style.color(glyph.bounds, y, frame), animation_id))
            .collect()
    };
    let drip = |timing: DripTiming, frame: usize| {
        DripFrame {
            glyph,
            viewport,
            timing,
            frame,
            highlight: params.drip_highlight_color.as_str(),
            animation_id,
        }
    };
    let progress = (f + 1) as f64 / total as f64;

    match params.fade_option {
        FadeOption::None => paint(glyph.cells.clone(), f),
        FadeOption::FadeInFromBottom => paint(fade_in_rows(glyph, true, progress), f),
        FadeOption::FadeInFromTop => paint(fade_in_rows(glyph, false, progress), f),
        FadeOption::FadeOutToLeft => paint(fade_out_columns(glyph, true, progress), f),
        FadeOption::FadeOutToRight => paint(fade_out_columns(glyph, false, progress), f),
        FadeOption::DigitalDripIn => drip(DripTiming::new(total, glyph.bounds.width), f)
            .drip_in(|y| style.color(glyph.bounds, y, f)),
        FadeOption::DigitalDripOut => drip(DripTiming::new(total, glyph.bounds.width), f)
            .drip_out(&params.drip_trail_color, |y| style.color(glyph.bounds, y, f)),
        FadeOption::DigitalDripCycle => {
            let (in_out, hold) = drip_cycle_frames(params);
            let timing = DripTiming::new(in_out, glyph.bounds.width);
            if f < in_out {
                drip(timing, f).drip_in(|y| style.color(glyph.bounds, y, f))
            } else if f < in_out + hold {
                paint(glyph.cells.clone(), f)
            } else {
                drip(timing, f - in_out - hold)
                    .drip_out(&params.drip_trail_color, |y| style.color(glyph.bounds, y, f))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/countdown/mod.rs"]
mod tests;
