/// Errors from pool loading and session accounting
#[derive(thiserror::Error, Debug)]
pub enum GachaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid pool data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Exchange unavailable: {points} points, limit {limit}")]
    InvalidState { points: u32, limit: u32 },

    #[error("Banner {0} has no drawable cards")]
    EmptyPool(String),
}

pub type Result<T> = std::result::Result<T, GachaError>;
