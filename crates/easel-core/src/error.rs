// File: crates/easel-core/src/error.rs
// Summary: Engine-reported error taxonomy for mounting and rendering.

use thiserror::Error;

/// Failures surfaced by the engine half. The configuration builder itself
/// performs no validation: a bad mount id or color token stays inert until
/// registration or rendering touches it.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no mount point registered under id '{0}'")]
    MountNotFound(String),

    #[error("mount point id '{0}' is already taken")]
    MountTaken(String),

    #[error("invalid color token '{token}': {reason}")]
    InvalidColor { token: String, reason: &'static str },

    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    PngEncode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
