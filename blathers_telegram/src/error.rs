use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Wiki client error: {0}")]
    Wiki(#[from] blathers_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
