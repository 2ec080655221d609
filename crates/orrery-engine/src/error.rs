use thiserror::Error;

/// Errors surfaced by the engine's fallible entry points.
///
/// Nothing here is fatal to a running scene: callers log and fall back.
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("invalid texture manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("unknown texture id {0}")]
    UnknownTexture(u32),
}

pub type Result<T> = std::result::Result<T, OrreryError>;
