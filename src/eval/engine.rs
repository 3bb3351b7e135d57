use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    composition::model::AnimationObject,
    composition::project::Project,
    eval::cache::OverlayCache,
    eval::compositor::{
        apply_animations_to_frames, empty_overlay, generate_animation, merge_overlay,
    },
    eval::fingerprint::OverlayFingerprint,
    foundation::core::{CanvasSize, Frame, OverlayMap},
    foundation::error::{PixelseqError, PixelseqResult},
};

/// How an [`Engine`] spreads work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Generate animations one after another on the calling thread.
    #[default]
    Sequential,
    /// Generate animations on a dedicated `rayon` pool, then merge in animation order.
    Parallel {
        /// Worker count; `None` lets rayon decide.
        threads: Option<usize>,
    },
}

/// Options for [`Engine::new`].
#[derive(Clone, Debug, Default)]
pub struct EngineOpts {
    /// Execution strategy.
    pub strategy: ExecutionStrategy,
    /// Overlays to memoize; `0` disables the cache.
    pub cache_capacity: usize,
}

/// Overlay generator with optional parallelism and memoization.
///
/// Output never depends on the options: every strategy and cache state yields the map
/// [`apply_animations_to_frames`] would.
#[derive(Debug)]
pub struct Engine {
    pool: Option<rayon::ThreadPool>,
    cache: Option<OverlayCache>,
}

impl Engine {
    /// Build an engine, creating the thread pool and cache up front.
    pub fn new(opts: EngineOpts) -> PixelseqResult<Self> {
        let pool = match opts.strategy {
            ExecutionStrategy::Sequential => None,
            ExecutionStrategy::Parallel { threads } => Some(build_thread_pool(threads)?),
        };
        let cache = if opts.cache_capacity > 0 {
            Some(OverlayCache::new(opts.cache_capacity)?)
        } else {
            None
        };
        Ok(Self { pool, cache })
    }

    /// Generate the overlay for `frames`.
    #[tracing::instrument(
        skip_all,
        fields(
            frames = frames.len(),
            animations = animations.len(),
            parallel = self.pool.is_some()
        )
    )]
    pub fn generate(
        &mut self,
        frames: &[Frame],
        animations: &[AnimationObject],
        canvas: &CanvasSize,
        blocked_pixels: &HashSet<(i32, i32)>,
    ) -> PixelseqResult<OverlayMap> {
        let key = match self.cache {
            Some(_) => Some(OverlayFingerprint::compute(animations, frames, canvas)?),
            None => None,
        };
        if let (Some(cache), Some(key)) = (self.cache.as_mut(), key.as_ref())
            && let Some(hit) = cache.get(key)
        {
            tracing::debug!("overlay cache hit");
            return Ok(hit);
        }

        let out = match &self.pool {
            None => apply_animations_to_frames(frames, animations, canvas, blocked_pixels),
            Some(pool) => {
                let generated: Vec<OverlayMap> = pool.install(|| {
                    animations
                        .par_iter()
                        .map(|anim| generate_animation(anim, canvas))
                        .collect()
                });
                let mut out = empty_overlay(frames);
                for g in generated {
                    merge_overlay(&mut out, g);
                }
                out
            }
        };

        if let (Some(cache), Some(key)) = (self.cache.as_mut(), key) {
            cache.insert(key, out.clone());
        }
        Ok(out)
    }

    /// Generate the overlay for every frame of `project`.
    pub fn generate_project(&mut self, project: &Project) -> PixelseqResult<OverlayMap> {
        self.generate(
            &project.frames,
            &project.animations,
            &project.canvas,
            &project.blocked_set(),
        )
    }

    /// The overlay cache, when enabled.
    pub fn cache(&self) -> Option<&OverlayCache> {
        self.cache.as_ref()
    }
}

fn build_thread_pool(threads: Option<usize>) -> PixelseqResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(PixelseqError::validation(
            "engine 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| PixelseqError::generation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/engine.rs"]
mod tests;
