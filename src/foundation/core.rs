use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::math::round_half_up;

/// Milliseconds represented by one editor frame.
pub const STANDARD_FRAME_DURATION_MS: u32 = 100;

/// Convert a millisecond duration into a frame count at [`STANDARD_FRAME_DURATION_MS`].
///
/// Negative or non-finite durations count as zero frames.
pub fn ms_to_frames(ms: f64) -> usize {
    if !ms.is_finite() || ms <= 0.0 {
        return 0;
    }
    round_half_up(ms / f64::from(STANDARD_FRAME_DURATION_MS)) as usize
}

/// Engine output: frame id to the overlay pixels for that frame, in draw order.
pub type OverlayMap = BTreeMap<String, Vec<PixelData>>;

/// Append `pixels` to `frame_id`, keeping earlier pixels when an id repeats.
pub(crate) fn emit(out: &mut OverlayMap, frame_id: &str, pixels: Vec<PixelData>) {
    out.entry(frame_id.to_owned()).or_default().extend(pixels);
}

/// One colored pixel in absolute canvas coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelData {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
    /// Hex or CSS color.
    pub color: String,
    /// Animation that produced this pixel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_id: Option<String>,
    /// Marks a snake head.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_head: bool,
    /// LED index assigned by the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_number: Option<u32>,
}

impl PixelData {
    /// Plain pixel with no animation tag.
    pub fn new(x: i32, y: i32, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            color: color.into(),
            animation_id: None,
            is_head: false,
            pixel_number: None,
        }
    }

    /// Pixel tagged with the producing animation.
    pub fn tagged(x: i32, y: i32, color: impl Into<String>, animation_id: &str) -> Self {
        Self {
            animation_id: Some(animation_id.to_owned()),
            ..Self::new(x, y, color)
        }
    }

    /// `(x, y)` key used for exclusion sets.
    pub fn coord(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

/// Integer canvas coordinate. Accepts `{"x":..,"y":..}` or `[x, y]` in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl GridPoint {
    /// Build a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl<'de> Deserialize<'de> for GridPoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([i32; 2]),
            Obj { x: i32, y: i32 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

/// Axis-aligned integer rectangle (`x`, `y` is the top-left cell).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Width in cells.
    pub width: i32,
    /// Height in cells.
    pub height: i32,
}

impl Bounds {
    /// Build a rectangle.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the right-most column.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// `true` when the rectangle covers no cells.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether `(x, y)` lies inside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Geometric center in continuous coordinates.
    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }
}

/// Active viewport and full-canvas geometry supplied by the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSize {
    /// Viewport width.
    pub width: u32,
    /// Viewport height.
    pub height: u32,
    /// Full canvas width.
    pub original_width: u32,
    /// Full canvas height.
    pub original_height: u32,
    /// Viewport left offset within the full canvas.
    #[serde(default)]
    pub viewport_x: u32,
    /// Viewport top offset within the full canvas.
    #[serde(default)]
    pub viewport_y: u32,
}

impl CanvasSize {
    /// A canvas whose viewport is the whole canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            original_width: width,
            original_height: height,
            viewport_x: 0,
            viewport_y: 0,
        }
    }

    /// A `width x height` viewport at `(x, y)` inside this canvas.
    pub fn with_viewport(self, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            viewport_x: x,
            viewport_y: y,
            ..self
        }
    }

    /// The viewport rectangle in absolute coordinates.
    pub fn viewport(&self) -> Bounds {
        Bounds::new(
            self.viewport_x as i32,
            self.viewport_y as i32,
            self.width as i32,
            self.height as i32,
        )
    }

    /// The full canvas rectangle.
    pub fn full(&self) -> Bounds {
        Bounds::new(
            0,
            0,
            self.original_width as i32,
            self.original_height as i32,
        )
    }
}

/// Which part of the sequence a frame belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameSection {
    /// Played once before the main loop.
    Startup,
    /// Main loop.
    #[default]
    Main,
}

/// One timeline frame. The engine only reads `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Stable frame id.
    pub id: String,
    /// Display duration in milliseconds.
    #[serde(default = "default_frame_duration")]
    pub duration: u32,
    /// Painted pixels per layer.
    #[serde(default)]
    pub layer_data: BTreeMap<String, Vec<PixelData>>,
    /// Sequence section.
    #[serde(default)]
    pub section: FrameSection,
    /// Part of a superframe group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_super_frame_member: Option<bool>,
    /// Superframe group id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_frame_id: Option<String>,
}

fn default_frame_duration() -> u32 {
    STANDARD_FRAME_DURATION_MS
}

impl Frame {
    /// An empty main-section frame with the standard duration.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration: STANDARD_FRAME_DURATION_MS,
            layer_data: BTreeMap::new(),
            section: FrameSection::Main,
            is_super_frame_member: None,
            super_frame_id: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
