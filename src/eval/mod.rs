pub(crate) mod cache;
pub(crate) mod compositor;
pub(crate) mod engine;
pub(crate) mod fingerprint;
