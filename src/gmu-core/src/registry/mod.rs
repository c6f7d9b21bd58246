//! The registry: a small INI file recording every identity gmu has seen.
//!
//! ```text
//! [current]
//! name=alice
//! gitconfig=/home/dev/.gitconfig
//! sshconfig=/home/dev/.ssh
//!
//! [users]
//! name=alice bob
//!
//! [alice]
//! gitconfig=/home/dev/.gitconfig.alice
//! sshconfig=/home/dev/.ssh.alice
//! ```
use crate::config::locations::IdentityLocations;
use crate::error::registry::load_registry::LoadRegistryError;
use crate::error::registry::load_registry::LoadRegistryError::{
    CreateRegistryFileFailed, LoadRegistryFileFailed, RegistryNotFound,
};
use crate::error::registry::save_registry::SaveRegistryError;
use crate::error::registry::save_registry::SaveRegistryError::{
    SerializeRegistryFailed, StageRegistryFailed, WriteRegistryFailed,
};
use crate::fs::StagingDir;
use crate::identity::{IdentityName, IdentityNameSet};
use crate::ini_file::{load_ini_file, serialize_ini};
use ini::Ini;
use std::path::{Path, PathBuf};

pub mod synchronize;

pub const CURRENT_SECTION: &str = "current";
pub const USERS_SECTION: &str = "users";
pub const RESERVED_SECTION_NAMES: [&str; 2] = [CURRENT_SECTION, USERS_SECTION];

pub const NAME_KEY: &str = "name";
pub const IDENTITY_FILE_KEY: &str = "gitconfig";
pub const SSH_DIR_KEY: &str = "sshconfig";

#[derive(Clone, Debug)]
pub struct Registry {
    path: PathBuf,
    document: Ini,
}

impl Registry {
    /// Loads an existing registry. A missing file is reported, not created.
    pub fn load(path: &Path) -> Result<Self, LoadRegistryError> {
        if !path.exists() {
            return Err(RegistryNotFound(path.to_path_buf()));
        }
        let document =
            load_ini_file(path).map_err(|err| LoadRegistryFileFailed(path.to_path_buf(), err))?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Loads the registry, first creating an empty file if there is none.
    pub fn load_or_create(path: &Path) -> Result<Self, LoadRegistryError> {
        if !path.exists() {
            crate::fs::create_empty_file(path).map_err(CreateRegistryFileFailed)?;
        }
        Self::load(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the registry back to disk if its content changed.
    ///
    /// The new content is staged next to the registry and renamed over it.
    /// A symlinked registry is written through to its target.
    /// Returns whether anything was written.
    pub fn save(&self) -> Result<bool, SaveRegistryError> {
        let content = serialize_ini(&self.path, &self.document).map_err(SerializeRegistryFailed)?;
        if crate::fs::read(&self.path).is_ok_and(|on_disk| on_disk == content) {
            return Ok(false);
        }

        let target = crate::fs::resolve_symlink(&self.path).map_err(StageRegistryFailed)?;
        let parent = crate::fs::parent(&target).map_err(StageRegistryFailed)?;
        let staging = StagingDir::new_in(&parent).map_err(StageRegistryFailed)?;
        let staged = staging.path().join(crate::config::locations::REGISTRY_FILE_NAME);
        crate::fs::write(&staged, content).map_err(StageRegistryFailed)?;
        crate::fs::rename(&staged, &target).map_err(WriteRegistryFailed)?;
        Ok(true)
    }

    /// The active identity name. Empty when unknown.
    pub fn current_name(&self) -> &str {
        self.get(CURRENT_SECTION, NAME_KEY).unwrap_or_default()
    }

    pub(crate) fn set_current_name(&mut self, name: &str) {
        self.set(CURRENT_SECTION, NAME_KEY, name);
    }

    pub fn current_identity_file_path(&self) -> Option<PathBuf> {
        self.get_path(CURRENT_SECTION, IDENTITY_FILE_KEY)
    }

    pub fn current_ssh_dir_path(&self) -> Option<PathBuf> {
        self.get_path(CURRENT_SECTION, SSH_DIR_KEY)
    }

    /// The live identity file every command works on: `[current]` first, the home default otherwise.
    pub fn live_identity_file_path(&self, locations: &IdentityLocations) -> PathBuf {
        self.current_identity_file_path()
            .unwrap_or_else(|| locations.identity_file_path())
    }

    pub fn live_ssh_dir_path(&self, locations: &IdentityLocations) -> PathBuf {
        self.current_ssh_dir_path()
            .unwrap_or_else(|| locations.ssh_dir_path())
    }

    pub fn users(&self) -> IdentityNameSet {
        IdentityNameSet::parse(self.get(USERS_SECTION, NAME_KEY).unwrap_or_default())
    }

    pub(crate) fn has_users(&self) -> bool {
        self.get(USERS_SECTION, NAME_KEY).is_some()
    }

    pub(crate) fn set_users(&mut self, users: &IdentityNameSet) {
        self.set(USERS_SECTION, NAME_KEY, &users.to_string());
    }

    pub fn archived_identity_file_path(&self, identity: &IdentityName) -> Option<PathBuf> {
        self.get_path(identity.as_str(), IDENTITY_FILE_KEY)
    }

    pub fn archived_ssh_dir_path(&self, identity: &IdentityName) -> Option<PathBuf> {
        self.get_path(identity.as_str(), SSH_DIR_KEY)
    }

    pub(crate) fn set_archived_identity_file_path(&mut self, identity: &IdentityName, path: &Path) {
        self.set(identity.as_str(), IDENTITY_FILE_KEY, &path.to_string_lossy());
    }

    pub(crate) fn set_archived_ssh_dir_path(&mut self, identity: &IdentityName, path: &Path) {
        self.set(identity.as_str(), SSH_DIR_KEY, &path.to_string_lossy());
    }

    /// Sets `key` only if the section does not have it yet.
    pub(crate) fn ensure(&mut self, section: &str, key: &str, default: &str) -> bool {
        if self.get(section, key).is_some() {
            false
        } else {
            self.set(section, key, default)
        }
    }

    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.document
            .section(Some(section))
            .and_then(|properties| properties.get(key))
    }

    fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get(section, key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    // Leaves the document untouched when the value is unchanged, so keys keep their order.
    fn set(&mut self, section: &str, key: &str, value: &str) -> bool {
        if self.get(section, key) == Some(value) {
            return false;
        }
        self.document.with_section(Some(section)).set(key, value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_registry() {
        let home = tempfile::tempdir().unwrap();
        let err = Registry::load(&home.path().join(".gmuconfig")).unwrap_err();
        assert!(matches!(err, RegistryNotFound(_)));
    }

    #[test]
    fn load_or_create_starts_empty() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join(".gmuconfig");

        let registry = Registry::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(registry.current_name(), "");
        assert!(registry.users().is_empty());
        assert!(!registry.has_users());
    }

    #[test]
    fn malformed_registry_fails_to_load() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join(".gmuconfig");
        std::fs::write(&path, "[current\nname=alice\n").unwrap();

        let err = Registry::load_or_create(&path).unwrap_err();
        assert!(matches!(err, LoadRegistryFileFailed(..)));
    }

    #[test]
    fn ensure_never_overwrites() {
        let home = tempfile::tempdir().unwrap();
        let mut registry = Registry::load_or_create(&home.path().join(".gmuconfig")).unwrap();

        assert!(registry.ensure(CURRENT_SECTION, IDENTITY_FILE_KEY, "/a"));
        assert!(!registry.ensure(CURRENT_SECTION, IDENTITY_FILE_KEY, "/b"));
        assert_eq!(registry.current_identity_file_path(), Some(PathBuf::from("/a")));
    }

    #[test]
    fn save_writes_only_on_change() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join(".gmuconfig");
        let mut registry = Registry::load_or_create(&path).unwrap();
        registry.set_current_name("alice");

        assert!(registry.save().unwrap());
        assert!(!registry.save().unwrap());

        let reloaded = Registry::load(&path).unwrap();
        assert_eq!(reloaded.current_name(), "alice");
        assert!(!reloaded.save().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn save_writes_through_a_symlinked_registry() {
        let home = tempfile::tempdir().unwrap();
        let dotfile = home.path().join("dotfiles_gmuconfig");
        std::fs::write(&dotfile, "").unwrap();
        let path = home.path().join(".gmuconfig");
        std::os::unix::fs::symlink(&dotfile, &path).unwrap();

        let mut registry = Registry::load(&path).unwrap();
        registry.set_current_name("alice");
        assert!(registry.save().unwrap());

        assert!(std::fs::symlink_metadata(&path).unwrap().file_type().is_symlink());
        assert_eq!(Registry::load(&dotfile).unwrap().current_name(), "alice");
    }

    #[test]
    fn live_paths_prefer_the_recorded_ones() {
        let home = tempfile::tempdir().unwrap();
        let locations = IdentityLocations::new(home.path().to_path_buf());
        let mut registry = Registry::load_or_create(&locations.registry_path()).unwrap();
        assert_eq!(
            registry.live_identity_file_path(&locations),
            locations.identity_file_path()
        );

        registry.ensure(CURRENT_SECTION, IDENTITY_FILE_KEY, "/work/.gitconfig");
        assert_eq!(
            registry.live_identity_file_path(&locations),
            PathBuf::from("/work/.gitconfig")
        );
        assert_eq!(registry.live_ssh_dir_path(&locations), locations.ssh_dir_path());
    }

    #[test]
    fn archived_paths_are_per_identity() {
        let home = tempfile::tempdir().unwrap();
        let mut registry = Registry::load_or_create(&home.path().join(".gmuconfig")).unwrap();
        let alice = IdentityName::new("alice").unwrap();
        let bob = IdentityName::new("bob").unwrap();

        registry.set_archived_identity_file_path(&alice, Path::new("/h/.gitconfig.alice"));
        assert_eq!(
            registry.archived_identity_file_path(&alice),
            Some(PathBuf::from("/h/.gitconfig.alice"))
        );
        assert_eq!(registry.archived_ssh_dir_path(&alice), None);
        assert_eq!(registry.archived_identity_file_path(&bob), None);
    }
}
