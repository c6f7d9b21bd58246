use crate::error::registry::load_registry::LoadRegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListIdentitiesError {
    #[error("Failed to load the identity registry")]
    LoadRegistryFailed(#[source] LoadRegistryError),
}
