use crate::error::identity::read_identity_file::ReadIdentityFileError;
use crate::error::registry::load_registry::LoadRegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurrentIdentityInfoError {
    #[error("Failed to load the identity registry")]
    LoadRegistryFailed(#[source] LoadRegistryError),

    #[error(transparent)]
    ReadIdentityFileFailed(ReadIdentityFileError),
}
