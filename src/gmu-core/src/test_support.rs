use crate::config::locations::IdentityLocations;
use slog::Logger;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) fn discard_logger() -> Logger {
    Logger::root(slog::Discard, slog::o!())
}

/// A throwaway home directory with a live `.gitconfig` and `.ssh`.
pub(crate) struct TestHome {
    _dir: TempDir,
    locations: IdentityLocations,
}

impl TestHome {
    pub(crate) fn new(identity: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let locations = IdentityLocations::new(dir.path().to_path_buf());
        std::fs::create_dir(locations.ssh_dir_path()).unwrap();
        std::fs::write(locations.ssh_dir_path().join("config"), "Host *\n").unwrap();
        let home = TestHome {
            _dir: dir,
            locations,
        };
        home.become_identity(identity, &format!("{identity} key"));
        home
    }

    pub(crate) fn path(&self) -> &Path {
        self.locations.home()
    }

    pub(crate) fn locations(&self) -> &IdentityLocations {
        &self.locations
    }

    /// Rewrites the live files the way a user switching by hand would.
    pub(crate) fn become_identity(&self, identity: &str, key: &str) {
        std::fs::write(
            self.locations.identity_file_path(),
            format!("[user]\n\tname = {identity}\n\temail = {identity}@example.com\n"),
        )
        .unwrap();
        std::fs::write(self.locations.ssh_dir_path().join("id_rsa"), key).unwrap();
    }

    /// Edits the registry behind gmu's back.
    pub(crate) fn set_registry_value(&self, section: &str, key: &str, value: &str) {
        let path = self.locations.registry_path();
        let mut document = ini::Ini::load_from_file(&path).unwrap();
        document.with_section(Some(section)).set(key, value);
        document.write_to_file(&path).unwrap();
    }

    pub(crate) fn live_identity_file(&self) -> Vec<u8> {
        std::fs::read(self.locations.identity_file_path()).unwrap()
    }

    /// Every path under the home directory, with file contents. Directories map to `None`.
    pub(crate) fn snapshot(&self) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
        let mut entries = BTreeMap::new();
        collect(self.path(), &mut entries);
        entries
    }
}

fn collect(dir: &Path, entries: &mut BTreeMap<PathBuf, Option<Vec<u8>>>) {
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            entries.insert(path.clone(), None);
            collect(&path, entries);
        } else {
            entries.insert(path.clone(), Some(std::fs::read(&path).unwrap()));
        }
    }
}
