use thiserror::Error;

/// Errors reported by the signature pad.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PadError {
    #[error("malformed signature data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("failed to encode bitmap: {0}")]
    Encode(String),

    #[error("invalid colour: {0}")]
    InvalidColour(String),

    #[error("malformed config preset: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
