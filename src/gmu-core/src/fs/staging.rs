use crate::error::fs::FsError;
use crate::error::fs::FsErrorKind::CreateStagingDirectoryFailed;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const STAGING_PREFIX: &str = ".gmu-staging-";

/// A scratch directory on the same filesystem as the files it will replace.
///
/// Files are copied in here first and then renamed into their final
/// location, so a failed copy never leaves a half-written destination.
/// The directory and anything left in it are removed on drop.
pub struct StagingDir {
    dir: TempDir,
}

impl StagingDir {
    pub fn new_in(parent: &Path) -> Result<Self, FsError> {
        tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)
            .map(|dir| StagingDir { dir })
            .map_err(|err| FsError::new(CreateStagingDirectoryFailed(parent.to_path_buf(), err)))
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Copies `source` into the staging directory under `name`.
    pub fn stage_copy(&self, source: &Path, name: &OsStr) -> Result<PathBuf, FsError> {
        let staged = self.dir.path().join(name);
        super::copy(source, &staged)?;
        Ok(staged)
    }
}

/// Copies staged next to the files they will replace.
///
/// A symlinked destination is resolved first, so the later rename lands on
/// the link target and the link itself survives. One `StagingDir` is kept per
/// destination directory, keeping every rename on a single filesystem.
#[derive(Default)]
pub struct StagingArea {
    dirs: Vec<(PathBuf, StagingDir)>,
    staged: usize,
}

impl StagingArea {
    /// Stages a copy of `source` for `destination`.
    /// Returns the staged copy and the resolved destination to rename it onto.
    pub fn stage(
        &mut self,
        source: &Path,
        destination: &Path,
    ) -> Result<(PathBuf, PathBuf), FsError> {
        let destination = super::resolve_symlink(destination)?;
        let parent = super::parent(&destination)?;
        let index = match self.dirs.iter().position(|(dir, _)| *dir == parent) {
            Some(index) => index,
            None => {
                let staging = StagingDir::new_in(&parent)?;
                self.dirs.push((parent, staging));
                self.dirs.len() - 1
            }
        };

        self.staged += 1;
        let name = self.staged.to_string();
        let staged = self.dirs[index].1.stage_copy(source, OsStr::new(&name))?;
        Ok((staged, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staging_dir_is_removed_on_drop() {
        let home = tempfile::tempdir().unwrap();
        let source = home.path().join("file");
        std::fs::write(&source, "content").unwrap();

        let staging = StagingDir::new_in(home.path()).unwrap();
        let staged = staging.stage_copy(&source, OsStr::new("file")).unwrap();
        assert_eq!(std::fs::read_to_string(&staged).unwrap(), "content");
        let staging_path = staging.path().to_path_buf();

        drop(staging);
        assert!(!staging_path.exists());
        assert!(source.exists());
    }

    #[cfg(unix)]
    #[test]
    fn staging_area_stages_beside_the_link_target() {
        let home = tempfile::tempdir().unwrap();
        let dotfiles = home.path().join("dotfiles");
        std::fs::create_dir(&dotfiles).unwrap();
        std::fs::write(dotfiles.join("gitconfig"), "old").unwrap();
        let link = home.path().join(".gitconfig");
        std::os::unix::fs::symlink(dotfiles.join("gitconfig"), &link).unwrap();
        let source = home.path().join(".gitconfig.alice");
        std::fs::write(&source, "new").unwrap();

        let mut area = StagingArea::default();
        let (staged, destination) = area.stage(&source, &link).unwrap();
        assert_eq!(destination, dotfiles.join("gitconfig").canonicalize().unwrap());
        let staging_parent = staged.parent().unwrap().parent().unwrap();
        assert_eq!(staging_parent.canonicalize().unwrap(), destination.parent().unwrap());

        std::fs::rename(&staged, &destination).unwrap();
        drop(area);
        assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&link).unwrap(), "new");
        assert_eq!(std::fs::read_dir(&dotfiles).unwrap().count(), 1);
    }
}
