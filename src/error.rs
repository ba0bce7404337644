use thiserror::Error;

/// Errors raised while building or querying a terrain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("invalid terrain dimensions {width}x{height}: both must be positive")]
    InvalidArgument { width: i32, height: i32 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} terrain")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}
