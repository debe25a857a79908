use std::path::PathBuf;

use thiserror::Error;

/// Everything that can terminate a conversion, each with its own exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("only jpg, jpeg and png files are accepted")]
    UnsupportedExtension,
    #[error("input file does not exist: {0}")]
    MissingFile(PathBuf),
    #[error("failed to decode image: {0:#}")]
    Decode(anyhow::Error),
    #[error("failed to write workbook: {0:#}")]
    Write(anyhow::Error),
}

impl AppError {
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::UnsupportedExtension => 1,
            AppError::MissingFile(_) => 2,
            AppError::Decode(_) => 3,
            AppError::Write(_) => 4,
        }
    }
}
