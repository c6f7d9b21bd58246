use crate::config::locations::{archive_path, IdentityLocations, IDENTITY_FILE_NAME, SSH_DIR_NAME};
use crate::error::registry::archive::ArchiveError;
use crate::error::registry::archive::ArchiveError::{
    ArchiveIdentityFileFailed, ArchiveSshDirectoryFailed,
};
use crate::error::registry::synchronize::SynchronizeError;
use crate::error::registry::synchronize::SynchronizeError::{
    ArchiveFailed, LoadRegistryFailed, SaveRegistryFailed,
};
use crate::fs::StagingDir;
use crate::identity::snapshot::current_identity_name;
use crate::identity::IdentityName;
use crate::registry::{Registry, CURRENT_SECTION, IDENTITY_FILE_KEY, NAME_KEY, SSH_DIR_KEY};
use slog::{debug, info, warn, Logger};
use std::ffi::OsStr;
use std::path::Path;

/// Reconciles the registry with what is on disk.
///
/// Records the active identity, registers it if it is new, captures archives
/// of its live files if none exist yet, and records the archives present.
/// Running it again without outside changes leaves the registry file as is.
pub fn synchronize(
    logger: &Logger,
    locations: &IdentityLocations,
) -> Result<Registry, SynchronizeError> {
    let mut registry =
        Registry::load_or_create(&locations.registry_path()).map_err(LoadRegistryFailed)?;

    registry.ensure(CURRENT_SECTION, NAME_KEY, "");
    registry.ensure(
        CURRENT_SECTION,
        IDENTITY_FILE_KEY,
        &locations.identity_file_path().to_string_lossy(),
    );
    registry.ensure(
        CURRENT_SECTION,
        SSH_DIR_KEY,
        &locations.ssh_dir_path().to_string_lossy(),
    );
    let live_identity_file = registry.live_identity_file_path(locations);
    let live_ssh_dir = registry.live_ssh_dir_path(locations);

    let current = match current_identity_name(&live_identity_file) {
        Ok(name) => name.unwrap_or_default(),
        Err(err) => {
            warn!(logger, "Cannot determine the current identity: {:#}", err);
            String::new()
        }
    };
    registry.set_current_name(&current);

    let identity = match IdentityName::new(current.as_str()) {
        Ok(identity) => Some(identity),
        Err(err) => {
            if !current.is_empty() {
                warn!(logger, "Not registering the current identity: {}", err);
            }
            None
        }
    };

    let mut users = registry.users();
    if !registry.has_users() {
        registry.set_users(&users);
    }
    if let Some(identity) = &identity {
        if users.insert(identity) {
            info!(logger, r#"Registered new identity "{}"."#, identity);
            registry.set_users(&users);
        }
    }

    if let Some(identity) = &identity {
        let archived_identity_file = archive_path(&live_identity_file, identity);
        archive_identity_file(logger, &live_identity_file, &archived_identity_file)
            .map_err(ArchiveFailed)?;

        let archived_ssh_dir = archive_path(&live_ssh_dir, identity);
        archive_ssh_dir(logger, &live_ssh_dir, &archived_ssh_dir).map_err(ArchiveFailed)?;

        if archived_identity_file.exists() {
            registry.set_archived_identity_file_path(identity, &archived_identity_file);
        }
        if archived_ssh_dir.exists() {
            registry.set_archived_ssh_dir_path(identity, &archived_ssh_dir);
        }
    }

    if registry.save().map_err(SaveRegistryFailed)? {
        debug!(logger, "Saved registry to {}.", registry.path().display());
    }
    Ok(registry)
}

/// Copies the live identity file to `archive` unless an archive is already there.
fn archive_identity_file(logger: &Logger, live: &Path, archive: &Path) -> Result<(), ArchiveError> {
    if archive.exists() || !live.exists() {
        return Ok(());
    }
    let failed = |source| ArchiveIdentityFileFailed {
        live: live.to_path_buf(),
        archive: archive.to_path_buf(),
        source,
    };

    let parent = crate::fs::parent(archive).map_err(failed)?;
    let staging = StagingDir::new_in(&parent).map_err(failed)?;
    let staged = staging
        .stage_copy(live, OsStr::new(IDENTITY_FILE_NAME))
        .map_err(failed)?;
    crate::fs::rename(&staged, archive).map_err(failed)?;

    info!(logger, "Archived {} as {}.", live.display(), archive.display());
    Ok(())
}

/// Copies the regular files of the live ssh directory into a new `archive` directory,
/// unless an archive is already there. The archive appears only once complete.
fn archive_ssh_dir(logger: &Logger, live: &Path, archive: &Path) -> Result<(), ArchiveError> {
    if archive.exists() || !live.is_dir() {
        return Ok(());
    }
    let failed = |source| ArchiveSshDirectoryFailed {
        live: live.to_path_buf(),
        archive: archive.to_path_buf(),
        source,
    };

    let parent = crate::fs::parent(archive).map_err(failed)?;
    let staging = StagingDir::new_in(&parent).map_err(failed)?;
    let staged_dir = staging.path().join(SSH_DIR_NAME);
    crate::fs::create_dir_all(&staged_dir).map_err(failed)?;

    for name in crate::fs::list_regular_files(live).map_err(failed)? {
        crate::fs::copy(&live.join(&name), &staged_dir.join(&name)).map_err(failed)?;
    }
    let permissions = crate::fs::read_permissions(live).map_err(failed)?;
    crate::fs::set_permissions(&staged_dir, permissions).map_err(failed)?;
    crate::fs::rename(&staged_dir, archive).map_err(failed)?;

    info!(logger, "Archived {} as {}.", live.display(), archive.display());
    Ok(())
}
