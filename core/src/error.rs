use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Invalid tile identifier")]
    InvalidTileId,
    #[error("No question at category {column}, level {level}")]
    InvalidSelection { column: u8, level: u8 },
    #[error("Malformed dataset: {0}")]
    Dataset(String),
    #[error("Storage failure: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, BoardError>;
