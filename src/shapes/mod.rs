//! Procedural shape animations.
//!
//! Each generator maps an animation's frame list to the pixels it contributes on those frames.
//! Generators are pure: the same animation and canvas always produce the same map.

pub(crate) mod cross;
pub(crate) mod line;
pub(crate) mod rectangle;
pub(crate) mod snake;
