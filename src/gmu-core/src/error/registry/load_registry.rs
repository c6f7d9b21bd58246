use crate::error::fs::FsError;
use crate::error::structured_file::StructuredFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadRegistryError {
    #[error("Cannot create registry file")]
    CreateRegistryFileFailed(#[source] FsError),

    #[error("Failed to load registry from {0}")]
    LoadRegistryFileFailed(PathBuf, #[source] StructuredFileError),

    #[error("No .gmuconfig found at {0}.")]
    RegistryNotFound(PathBuf),
}
