use crate::error::fs::FsError;
use crate::error::structured_file::StructuredFileError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveRegistryError {
    #[error("Failed to serialize the registry")]
    SerializeRegistryFailed(#[source] StructuredFileError),

    #[error("Failed to stage the registry")]
    StageRegistryFailed(#[source] FsError),

    #[error("Failed to write the registry")]
    WriteRegistryFailed(#[source] FsError),
}
