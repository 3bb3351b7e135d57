/// Convenience result type used across pixelseq.
pub type PixelseqResult<T> = Result<T, PixelseqError>;

/// Top-level error taxonomy used at the crate's edges.
///
/// Generators never fail: malformed colors, empty timelines and degenerate geometry all degrade to
/// static or empty output. Errors only come from loading and validating projects, building
/// execution resources, and wrapped lower-level failures.
#[derive(thiserror::Error, Debug)]
pub enum PixelseqError {
    /// Invalid user-provided project or animation data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Failures while setting up or running overlay generation.
    #[error("generation error: {0}")]
    Generation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixelseqError {
    /// Build a [`PixelseqError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixelseqError::Generation`] value.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Build a [`PixelseqError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
