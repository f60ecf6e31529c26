use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error, unifying the lifecycle and codec errors
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] crate::app::AppError),

    #[error(transparent)]
    Codec(#[from] crate::codec::CodecError),
}
