use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsErrorKind {
    #[error("Failed to canonicalize {0}: {1}")]
    CanonicalizeFailed(PathBuf, std::io::Error),

    #[error("Failed to copy {from} to {to}: {source}")]
    CopyFileFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create {0}: {1}")]
    CreateDirectoryFailed(PathBuf, std::io::Error),

    #[error("Failed to create file {0}: {1}")]
    CreateFileFailed(PathBuf, std::io::Error),

    #[error("Failed to create a staging directory in {0}: {1}")]
    CreateStagingDirectoryFailed(PathBuf, std::io::Error),

    #[error("Copied only {copied} of {expected} bytes from {from} to {to}")]
    IncompleteCopy {
        from: PathBuf,
        to: PathBuf,
        copied: u64,
        expected: u64,
    },

    #[error("Cannot determine parent folder for {0}")]
    NoParent(PathBuf),

    #[error("{0} is not a regular file")]
    NotARegularFile(PathBuf),

    #[error("Failed to read directory {0}: {1}")]
    ReadDirFailed(PathBuf, std::io::Error),

    #[error("Failed to read {0}: {1}")]
    ReadFileFailed(PathBuf, std::io::Error),

    #[error("Failed to read metadata of {0}: {1}")]
    ReadMetadataFailed(PathBuf, std::io::Error),

    #[error("Failed to read permissions of {0}: {1}")]
    ReadPermissionsFailed(PathBuf, std::io::Error),

    #[error("Failed to read {0} as string: {1}")]
    ReadToStringFailed(PathBuf, std::io::Error),

    #[error("Failed to rename {from} to {to}: {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write to {0}: {1}")]
    WriteFileFailed(PathBuf, std::io::Error),

    #[error("Failed to set permissions of {0}: {1}")]
    WritePermissionsFailed(PathBuf, std::io::Error),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct FsError(pub Box<FsErrorKind>);

impl FsError {
    pub fn new(kind: FsErrorKind) -> Self {
        FsError(Box::new(kind))
    }

    pub fn kind(&self) -> &FsErrorKind {
        &self.0
    }
}

impl From<FsErrorKind> for FsError {
    fn from(kind: FsErrorKind) -> Self {
        FsError::new(kind)
    }
}
