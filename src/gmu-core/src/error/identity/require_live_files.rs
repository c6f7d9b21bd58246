use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequireLiveFilesError {
    #[error("No .gitconfig found at {0}.")]
    IdentityFileNotFound(PathBuf),

    #[error("No .ssh directory found at {0}.")]
    SshDirectoryNotFound(PathBuf),
}
