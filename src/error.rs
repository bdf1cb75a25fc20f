use thiserror::Error;

pub type PatchResult<T> = Result<T, PatchError>;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),
}
