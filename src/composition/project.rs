use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    composition::model::AnimationObject,
    foundation::core::{CanvasSize, Frame, GridPoint},
    foundation::error::{PixelseqError, PixelseqResult},
};

/// Everything the engine consumes in one JSON document.
///
/// This is the boundary format the CLI reads; the editor's own storage layer is free to keep a
/// richer representation and only hand over these pieces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Canvas and viewport geometry.
    pub canvas: CanvasSize,
    /// Timeline frames in order.
    pub frames: Vec<Frame>,
    /// Animations in draw order.
    #[serde(default)]
    pub animations: Vec<AnimationObject>,
    /// Cells the renderer must leave dark.
    #[serde(default)]
    pub blocked_pixels: Vec<GridPoint>,
}

impl Project {
    /// Parse a project from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PixelseqResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PixelseqError::serde(format!("parse project JSON: {e}")))
    }

    /// Parse a project from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PixelseqResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PixelseqError::validation(format!("open project JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Blocked cells as a lookup set.
    pub fn blocked_set(&self) -> HashSet<(i32, i32)> {
        self.blocked_pixels.iter().map(|p| (p.x, p.y)).collect()
    }

    /// Check structural invariants the generators rely on for meaningful output.
    ///
    /// Generation itself never fails; this is for tooling that wants to reject broken input
    /// early.
    pub fn validate(&self) -> PixelseqResult<()> {
        let c = &self.canvas;
        if c.original_width == 0 || c.original_height == 0 {
            return Err(PixelseqError::validation("canvas must have a non-zero area"));
        }
        if c.width == 0 || c.height == 0 {
            return Err(PixelseqError::validation("viewport must have a non-zero area"));
        }
        if u64::from(c.viewport_x) + u64::from(c.width) > u64::from(c.original_width)
            || u64::from(c.viewport_y) + u64::from(c.height) > u64::from(c.original_height)
        {
            return Err(PixelseqError::validation(
                "viewport must lie inside the canvas",
            ));
        }

        let mut frame_ids = HashSet::with_capacity(self.frames.len());
        for f in &self.frames {
            if f.id.is_empty() {
                return Err(PixelseqError::validation("frame id must be non-empty"));
            }
            if !frame_ids.insert(f.id.as_str()) {
                return Err(PixelseqError::validation(format!(
                    "duplicate frame id '{}'",
                    f.id
                )));
            }
        }

        let mut anim_ids = HashSet::with_capacity(self.animations.len());
        for a in &self.animations {
            if !anim_ids.insert(a.id.as_str()) {
                return Err(PixelseqError::validation(format!(
                    "duplicate animation id '{}'",
                    a.id
                )));
            }
            if let Some(missing) = a.frames.iter().find(|id| !frame_ids.contains(id.as_str())) {
                return Err(PixelseqError::validation(format!(
                    "animation '{}' references unknown frame '{missing}'",
                    a.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/project.rs"]
mod tests;
