use std::io;

use serde::Serialize;
use xxhash_rust::xxh3::Xxh3;

use crate::{
    composition::model::AnimationObject,
    foundation::core::{CanvasSize, Frame},
    foundation::error::{PixelseqError, PixelseqResult},
};

const XXH3_SEED: u64 = 0x5d1f_83a2_c4e6_0b97;

/// 128-bit digest of everything that determines an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl OverlayFingerprint {
    /// Digest the animations (as JSON), the frame id list and the canvas geometry.
    ///
    /// Frame durations and layer data do not influence generation and are not hashed.
    pub fn compute(
        animations: &[AnimationObject],
        frames: &[Frame],
        canvas: &CanvasSize,
    ) -> PixelseqResult<Self> {
        let mut h = StableHasher::new();

        h.write_u32(animations.len() as u32);
        for anim in animations {
            h.write_json(anim)?;
            h.write_u8(0xff);
        }

        h.write_u32(frames.len() as u32);
        for f in frames {
            h.write_str(&f.id);
        }

        for v in [
            canvas.width,
            canvas.height,
            canvas.original_width,
            canvas.original_height,
            canvas.viewport_x,
            canvas.viewport_y,
        ] {
            h.write_u32(v);
        }
        Ok(h.finish())
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> PixelseqResult<()> {
        serde_json::to_writer(&mut *self, value)
            .map_err(|e| PixelseqError::serde(format!("fingerprint animation: {e}")))
    }

    fn finish(self) -> OverlayFingerprint {
        let v = self.inner.digest128();
        OverlayFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl io::Write for StableHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
