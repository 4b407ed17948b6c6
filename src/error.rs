use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown mode {0:?}")]
    UnknownMode(String),
}
