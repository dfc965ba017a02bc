#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] bubbles_core::Error),

    #[error(transparent)]
    Physics(#[from] narwhal::Error),

    #[error("no bubble with id {id:?}")]
    UnknownNode { id: String },

    #[error("bubble id {id:?} appears more than once in the dataset")]
    DuplicateNode { id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
