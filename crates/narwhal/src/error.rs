#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid force options: {message}")]
    InvalidOptions { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
