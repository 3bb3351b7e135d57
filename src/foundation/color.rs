//! Hex color helpers.
//!
//! Colors travel through the engine as strings (`#rrggbb` or any CSS color the editor accepts).
//! Everything here is permissive: a color that does not parse as hex is passed through unchanged
//! instead of producing an error.

/// An 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parse `#rrggbb`, `rrggbb` or `#rgb` (case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let s = hex.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    fn hex_byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    match s.len() {
        6 => Some(Rgb::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        3 => {
            let nib = |i: usize| hex_byte(&s[i..i + 1]).map(|v| v * 17);
            Some(Rgb::new(nib(0)?, nib(1)?, nib(2)?))
        }
        _ => None,
    }
}

/// Format as lowercase `#rrggbb`.
pub fn rgb_to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn channel(v: f64) -> u8 {
    crate::foundation::math::round_half_up(v).clamp(0.0, 255.0) as u8
}

/// Linear per-channel RGB interpolation from `a` to `b`.
///
/// Returns `a` unchanged if either color is not hex.
pub fn interpolate_color(a: &str, b: &str, t: f64) -> String {
    let (Some(ca), Some(cb)) = (hex_to_rgb(a), hex_to_rgb(b)) else {
        return a.to_owned();
    };
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let lerp = |x: u8, y: u8| channel(f64::from(x) + (f64::from(y) - f64::from(x)) * t);
    rgb_to_hex(Rgb::new(
        lerp(ca.r, cb.r),
        lerp(ca.g, cb.g),
        lerp(ca.b, cb.b),
    ))
}

/// Multiply every channel by `factor`, clamped to `[0, 255]`.
///
/// Non-hex input is returned unchanged.
pub fn modify_color_intensity(color: &str, factor: f64) -> String {
    let Some(c) = hex_to_rgb(color) else {
        return color.to_owned();
    };
    let factor = if factor.is_finite() { factor.max(0.0) } else { 1.0 };
    rgb_to_hex(Rgb::new(
        channel(f64::from(c.r) * factor),
        channel(f64::from(c.g) * factor),
        channel(f64::from(c.b) * factor),
    ))
}

/// HSL to hex; `h` in degrees (any range), `s` and `l` in percent.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        let v = channel(l * 255.0);
        return rgb_to_hex(Rgb::new(v, v, v));
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    rgb_to_hex(Rgb::new(
        channel(hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0),
        channel(hue_to_rgb(p, q, h) * 255.0),
        channel(hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
