use crate::error::registry::archive::ArchiveError;
use crate::error::registry::load_registry::LoadRegistryError;
use crate::error::registry::save_registry::SaveRegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynchronizeError {
    #[error("Failed to load the identity registry")]
    LoadRegistryFailed(#[source] LoadRegistryError),

    #[error("Failed to archive the current identity")]
    ArchiveFailed(#[source] ArchiveError),

    #[error("Failed to save the identity registry")]
    SaveRegistryFailed(#[source] SaveRegistryError),
}
