use crate::error::foundation::FoundationError;
use crate::error::identity::require_live_files::RequireLiveFilesError;
use crate::error::identity::require_live_files::RequireLiveFilesError::{
    IdentityFileNotFound, SshDirectoryNotFound,
};
use crate::foundation::get_user_home;
use crate::identity::IdentityName;
use std::path::{Path, PathBuf};

pub const IDENTITY_FILE_NAME: &str = ".gitconfig";
pub const SSH_DIR_NAME: &str = ".ssh";
pub const REGISTRY_FILE_NAME: &str = ".gmuconfig";

/// Where the live identity files and the registry live, relative to one home directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityLocations {
    home: PathBuf,
}

impl IdentityLocations {
    pub fn new(home: PathBuf) -> Self {
        Self { home }
    }

    pub fn from_environment() -> Result<Self, FoundationError> {
        get_user_home().map(Self::new)
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn identity_file_path(&self) -> PathBuf {
        self.home.join(IDENTITY_FILE_NAME)
    }

    pub fn ssh_dir_path(&self) -> PathBuf {
        self.home.join(SSH_DIR_NAME)
    }

    pub fn registry_path(&self) -> PathBuf {
        self.home.join(REGISTRY_FILE_NAME)
    }

    /// The program cannot do anything useful unless both live locations exist.
    pub fn require_live_files(&self) -> Result<(), RequireLiveFilesError> {
        let identity_file = self.identity_file_path();
        if !identity_file.exists() {
            return Err(IdentityFileNotFound(identity_file));
        }
        let ssh_dir = self.ssh_dir_path();
        if !ssh_dir.exists() {
            return Err(SshDirectoryNotFound(ssh_dir));
        }
        Ok(())
    }
}

/// Archives sit next to the live path: `~/.gitconfig` is archived for `alice` as `~/.gitconfig.alice`.
pub fn archive_path(live: &Path, identity: &IdentityName) -> PathBuf {
    let mut archived = live.as_os_str().to_os_string();
    archived.push(".");
    archived.push(identity.as_str());
    PathBuf::from(archived)
}
