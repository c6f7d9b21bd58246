use crate::error::fs::FsError;
use crate::error::identity::InvalidIdentityNameError;
use crate::error::registry::load_registry::LoadRegistryError;
use crate::error::registry::synchronize::SynchronizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Failed to load the identity registry")]
    LoadRegistryFailed(#[source] LoadRegistryError),

    #[error(r#""{0}" does not exist, can't checkout."#)]
    UnknownIdentity(String),

    #[error(r#"Cannot checkout "{0}""#)]
    InvalidIdentityName(String, #[source] InvalidIdentityNameError),

    #[error("Cannot find {identity}'s .gitconfig at {path}.")]
    IdentityFileArchiveMissing { identity: String, path: PathBuf },

    #[error("Cannot find {identity}'s .ssh at {path}.")]
    SshArchiveMissing { identity: String, path: PathBuf },

    #[error(r#"The live identity "{0}" has no archive, checking out would lose it. Give it a user.name without spaces and run 'gmu -u' first."#)]
    LiveIdentityNotArchived(String),

    #[error("Failed to enumerate the .ssh files to swap")]
    ReadSshDirectoryFailed(#[source] FsError),

    #[error("{identity}'s archived .ssh has no {file} to replace the live one.")]
    SshArchiveIncomplete { identity: String, file: PathBuf },

    #[error("Failed to stage {identity}'s files, nothing was swapped")]
    StageFailed {
        identity: String,
        #[source]
        source: FsError,
    },

    #[error("Checkout .gitconfig failed, nothing was swapped")]
    IdentityFileSwapFailed(#[source] FsError),

    #[error("Checkout .ssh failed at {file} after .gitconfig was swapped; {swapped} ssh file(s) already swapped are not rolled back")]
    SshSwapFailed {
        file: PathBuf,
        swapped: usize,
        #[source]
        source: FsError,
    },

    #[error("Checked out the identity, but failed to refresh the registry")]
    ResynchronizeFailed(#[source] SynchronizeError),
}
