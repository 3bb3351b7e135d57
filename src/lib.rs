//! pixelseq generates procedural animation overlays for frame-by-frame LED and pixel displays.
//!
//! Given a timeline of frames, a canvas with its active viewport and a list of declarative
//! animations, the engine produces the colored pixels each animation contributes to each frame:
//!
//! - Shapes: scanning lines, a rotating X, wandering snakes and keyframed rectangles
//! - A multi-phase countdown with safe zone, loading bar, sparkles and drip effects
//! - Particle transitions (disintegration, matrix, spiral) that erode a background fill
//!
//! Generation is pure and deterministic. All randomness is seeded from animation ids, so equal
//! inputs always yield byte-identical output. [`apply_animations_to_frames`] is the plain entry
//! point; [`Engine`] adds parallel execution and memoization on top.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod animation;
pub(crate) mod composition;
pub(crate) mod countdown;
pub(crate) mod effects;
pub(crate) mod eval;
pub(crate) mod foundation;
pub(crate) mod shapes;

pub use crate::foundation::color::{
    Rgb, hex_to_rgb, hsl_to_hex, interpolate_color, modify_color_intensity, rgb_to_hex,
};
pub use crate::foundation::core::{
    Bounds, CanvasSize, Frame, FrameSection, GridPoint, OverlayMap, PixelData,
    STANDARD_FRAME_DURATION_MS, ms_to_frames,
};
pub use crate::foundation::error::{PixelseqError, PixelseqResult};
pub use crate::foundation::math::Rng64;

pub use crate::animation::ease::Ease;
pub use crate::animation::rect::{RectangleState, interpolate_rectangles};

pub use crate::effects::background::fill_viewport_except;
pub use crate::effects::transitions::{
    DEFAULT_MATRIX_COLOR, SPARKLE_FLASH_COLOR, TransitionEffect, TransitionParams,
    apply_transition, disintegration_particles, matrix_transition_particles,
    spiral_transition_particles,
};

pub use crate::composition::model::{
    AnimationKind, AnimationObject, BorderBehavior, CountdownParams, Direction, FadeOption,
    LineParams, Orientation, PathParams, RectangleCycleMode, RectangleParams, RenderPosition,
    RenderSection, SafeZoneIntro, SnakeParams, XParams,
};
pub use crate::composition::project::Project;

pub use crate::countdown::digits::{DIGIT_BITMAPS, DIGIT_HEIGHT, DIGIT_WIDTH};
pub use crate::countdown::{generate_countdown, generate_simple_countdown};
pub use crate::shapes::cross::generate_x;
pub use crate::shapes::line::generate_line;
pub use crate::shapes::rectangle::generate_rectangle;
pub use crate::shapes::snake::generate_snake;

pub use crate::eval::cache::{CacheStats, OverlayCache};
pub use crate::eval::compositor::{apply_animations_to_frames, generate_animation};
pub use crate::eval::engine::{Engine, EngineOpts, ExecutionStrategy};
pub use crate::eval::fingerprint::OverlayFingerprint;
