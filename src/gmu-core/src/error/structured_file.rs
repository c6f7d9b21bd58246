use crate::error::fs::FsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StructuredFileError {
    #[error("Failed to parse contents of {0} as INI")]
    DeserializeIniFileFailed(PathBuf, #[source] ini::ParseError),

    #[error("Failed to read INI file")]
    ReadIniFileFailed(#[source] FsError),

    #[error("Failed to serialize INI for {0}")]
    SerializeIniFileFailed(PathBuf, #[source] std::io::Error),
}
