use crate::error::fs::FsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Failed to archive {live} as {archive}")]
    ArchiveIdentityFileFailed {
        live: PathBuf,
        archive: PathBuf,
        #[source]
        source: FsError,
    },

    #[error("Failed to archive {live} as {archive}")]
    ArchiveSshDirectoryFailed {
        live: PathBuf,
        archive: PathBuf,
        #[source]
        source: FsError,
    },
}
