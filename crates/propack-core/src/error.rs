use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Scan root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Traversal failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PackError>;

impl PackError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RootNotFound { .. } => 2,
            Self::Walk(_) => 3,
            Self::Io(_) => 1,
        }
    }
}
