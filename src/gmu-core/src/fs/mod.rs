use crate::error::fs::FsError;
use crate::error::fs::FsErrorKind::{
    CanonicalizeFailed, CopyFileFailed, CreateDirectoryFailed, CreateFileFailed, IncompleteCopy,
    NoParent, NotARegularFile, ReadDirFailed, ReadFileFailed, ReadMetadataFailed,
    ReadPermissionsFailed, ReadToStringFailed, RenameFailed, WriteFileFailed,
    WritePermissionsFailed,
};
use std::ffi::OsString;
use std::fs::{Metadata, Permissions};
use std::path::{Path, PathBuf};

mod staging;

pub use staging::{StagingArea, StagingDir};

pub fn canonicalize(path: &Path) -> Result<PathBuf, FsError> {
    std::fs::canonicalize(path)
        .map_err(|err| FsError::new(CanonicalizeFailed(path.to_path_buf(), err)))
}

/// Follows a symlink at `path` to the file it points at.
/// Any other path, including one that does not exist yet, is returned as given.
pub fn resolve_symlink(path: &Path) -> Result<PathBuf, FsError> {
    match std::fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

/// Copies a single regular file, failing unless every byte of the source reached the destination.
pub fn copy(from: &Path, to: &Path) -> Result<u64, FsError> {
    let metadata = metadata(from)?;
    if !metadata.is_file() {
        return Err(FsError::new(NotARegularFile(from.to_path_buf())));
    }

    let copied = std::fs::copy(from, to).map_err(|source| CopyFileFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    if copied != metadata.len() {
        return Err(FsError::new(IncompleteCopy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            copied,
            expected: metadata.len(),
        }));
    }
    Ok(copied)
}

pub fn create_dir_all(path: &Path) -> Result<(), FsError> {
    std::fs::create_dir_all(path)
        .map_err(|err| FsError::new(CreateDirectoryFailed(path.to_path_buf(), err)))
}

/// Creates an empty file at `path` unless something is already there.
pub fn create_empty_file(path: &Path) -> Result<(), FsError> {
    std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map(|_| ())
        .map_err(|err| FsError::new(CreateFileFailed(path.to_path_buf(), err)))
}

/// Lists the names of the regular files directly inside `dir`, sorted.
/// Subdirectories and symlinks are left out.
pub fn list_regular_files(dir: &Path) -> Result<Vec<OsString>, FsError> {
    let read_dir_failed = |err| FsError::new(ReadDirFailed(dir.to_path_buf(), err));

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_dir_failed)? {
        let entry = entry.map_err(read_dir_failed)?;
        // DirEntry::file_type does not follow symlinks
        let file_type = entry.file_type().map_err(read_dir_failed)?;
        if file_type.is_file() {
            names.push(entry.file_name());
        }
    }
    names.sort();
    Ok(names)
}

pub fn metadata(path: &Path) -> Result<Metadata, FsError> {
    std::fs::metadata(path).map_err(|err| FsError::new(ReadMetadataFailed(path.to_path_buf(), err)))
}

pub fn parent(path: &Path) -> Result<PathBuf, FsError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Err(FsError::new(NoParent(path.to_path_buf()))),
    }
}

pub fn read(path: &Path) -> Result<Vec<u8>, FsError> {
    std::fs::read(path).map_err(|err| FsError::new(ReadFileFailed(path.to_path_buf(), err)))
}

pub fn read_permissions(path: &Path) -> Result<Permissions, FsError> {
    std::fs::metadata(path)
        .map_err(|err| FsError::new(ReadPermissionsFailed(path.to_path_buf(), err)))
        .map(|x| x.permissions())
}

pub fn read_to_string(path: &Path) -> Result<String, FsError> {
    std::fs::read_to_string(path)
        .map_err(|err| FsError::new(ReadToStringFailed(path.to_path_buf(), err)))
}

pub fn rename(from: &Path, to: &Path) -> Result<(), FsError> {
    std::fs::rename(from, to).map_err(|source| {
        FsError::new(RenameFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    })
}

pub fn set_permissions(path: &Path, permissions: Permissions) -> Result<(), FsError> {
    std::fs::set_permissions(path, permissions)
        .map_err(|err| FsError::new(WritePermissionsFailed(path.to_path_buf(), err)))
}

pub fn write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<(), FsError> {
    std::fs::write(path.as_ref(), contents)
        .map_err(|err| FsError::new(WriteFileFailed(path.as_ref().to_path_buf(), err)))
}
