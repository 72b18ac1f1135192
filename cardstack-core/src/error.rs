use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("catalog must contain at least one entry")]
    EmptyCatalog,

    #[error("index {index} is out of range for a catalog of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("unknown easing function: {0}")]
    UnknownEasing(String),

    #[error("invalid image url: {0}")]
    ImageUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
