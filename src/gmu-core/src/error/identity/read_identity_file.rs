use crate::error::structured_file::StructuredFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadIdentityFileError {
    #[error("Failed to load identity file {0}")]
    LoadIdentityFileFailed(PathBuf, #[source] StructuredFileError),
}
