use crate::config::locations::{archive_path, IdentityLocations};
use crate::error::identity::checkout::CheckoutError;
use crate::error::identity::checkout::CheckoutError::{
    IdentityFileArchiveMissing, IdentityFileSwapFailed, InvalidIdentityName,
    LiveIdentityNotArchived, ReadSshDirectoryFailed, SshArchiveIncomplete, SshArchiveMissing,
    SshSwapFailed, StageFailed, UnknownIdentity,
};
use crate::fs::{list_regular_files, StagingArea};
use crate::identity::IdentityName;
use crate::registry::Registry;
use slog::{debug, info, Logger};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The target was already the current identity. Nothing was touched.
    AlreadyCurrent,

    /// The target's archived files now occupy the live locations.
    Switched,
}

/// Makes `target` the active identity by swapping its archived files into the live locations.
///
/// Every check runs before the first write: the target must be registered,
/// both its archives must exist, the identity being replaced must itself be
/// archived, and the archived ssh directory must hold every file currently in
/// the live one. All files are then staged next to their destination and
/// renamed into place, the identity file first. Symlinked live files are
/// written through to their targets.
pub fn checkout(
    logger: &Logger,
    locations: &IdentityLocations,
    registry: &Registry,
    target: &str,
) -> Result<CheckoutOutcome, CheckoutError> {
    if target == registry.current_name() {
        return Ok(CheckoutOutcome::AlreadyCurrent);
    }
    if !registry.users().contains(target) {
        return Err(UnknownIdentity(target.to_string()));
    }
    let identity =
        IdentityName::new(target).map_err(|err| InvalidIdentityName(target.to_string(), err))?;

    let live_identity_file = registry.live_identity_file_path(locations);
    let live_ssh_dir = registry.live_ssh_dir_path(locations);

    let (archived_identity_file, archived_ssh_dir) =
        archived_paths(registry, &identity, &live_identity_file, &live_ssh_dir);
    if !archived_identity_file.is_file() {
        return Err(IdentityFileArchiveMissing {
            identity: target.to_string(),
            path: archived_identity_file,
        });
    }
    if !archived_ssh_dir.is_dir() {
        return Err(SshArchiveMissing {
            identity: target.to_string(),
            path: archived_ssh_dir,
        });
    }

    // the files about to be replaced must be recoverable by a later checkout
    let current = registry.current_name();
    let current_is_archived = IdentityName::new(current).is_ok_and(|current| {
        let (identity_file, ssh_dir) =
            archived_paths(registry, &current, &live_identity_file, &live_ssh_dir);
        identity_file.is_file() && ssh_dir.is_dir()
    });
    if !current_is_archived {
        return Err(LiveIdentityNotArchived(current.to_string()));
    }

    let live_files = list_regular_files(&live_ssh_dir).map_err(ReadSshDirectoryFailed)?;
    let archived_files = list_regular_files(&archived_ssh_dir).map_err(ReadSshDirectoryFailed)?;
    if let Some(missing) = live_files.iter().find(|name| !archived_files.contains(*name)) {
        return Err(SshArchiveIncomplete {
            identity: target.to_string(),
            file: archived_ssh_dir.join(missing),
        });
    }

    let stage_failed = |source| StageFailed {
        identity: target.to_string(),
        source,
    };
    let mut staging = StagingArea::default();
    let (staged_identity_file, identity_file_destination) = staging
        .stage(&archived_identity_file, &live_identity_file)
        .map_err(stage_failed)?;
    let mut staged_ssh_files: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(archived_files.len());
    for name in &archived_files {
        let staged = staging
            .stage(&archived_ssh_dir.join(name), &live_ssh_dir.join(name))
            .map_err(stage_failed)?;
        staged_ssh_files.push(staged);
    }
    debug!(
        logger,
        "Staged {} and {} ssh file(s) for {}.",
        archived_identity_file.display(),
        staged_ssh_files.len(),
        identity
    );

    crate::fs::rename(&staged_identity_file, &identity_file_destination)
        .map_err(IdentityFileSwapFailed)?;
    for (swapped, (staged, live)) in staged_ssh_files.iter().enumerate() {
        crate::fs::rename(staged, live).map_err(|source| SshSwapFailed {
            file: live.clone(),
            swapped,
            source,
        })?;
    }

    info!(logger, r#"Checked out identity "{}"."#, identity);
    Ok(CheckoutOutcome::Switched)
}

/// Where `identity`'s archives are: the recorded paths, or the conventional ones beside the live files.
/// The registry only caches these, so callers still check the disk.
fn archived_paths(
    registry: &Registry,
    identity: &IdentityName,
    live_identity_file: &Path,
    live_ssh_dir: &Path,
) -> (PathBuf, PathBuf) {
    let identity_file = registry
        .archived_identity_file_path(identity)
        .unwrap_or_else(|| archive_path(live_identity_file, identity));
    let ssh_dir = registry
        .archived_ssh_dir_path(identity)
        .unwrap_or_else(|| archive_path(live_ssh_dir, identity));
    (identity_file, ssh_dir)
}
