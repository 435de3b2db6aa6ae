use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "im-io")]
    #[error("image: {0}")]
    Image(#[from] image::ImageError),

    #[error("canvas must have a positive size, got {width}x{height}")]
    EmptyCanvas { width: i32, height: i32 },

    #[error("ui: {0}")]
    Ui(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
