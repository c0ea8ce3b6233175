pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid poll payload shape: {message}")]
    InvalidShape { message: String },

    #[error("Poll payload JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
