//! Identity type and module.
//!
//! An identity is a git identity file plus an ssh key directory. The live
//! pair sits at `~/.gitconfig` and `~/.ssh`; every identity seen so far also
//! has an archived pair next to it, which `checkout` swaps back in.
use crate::config::locations::IdentityLocations;
use crate::error::identity::checkout::CheckoutError;
use crate::error::identity::checkout::CheckoutError::{LoadRegistryFailed, ResynchronizeFailed};
use crate::error::identity::current_identity_info::CurrentIdentityInfoError;
use crate::error::identity::list_identities::ListIdentitiesError;
use crate::error::registry::load_registry::LoadRegistryError::RegistryNotFound;
use crate::error::registry::synchronize::SynchronizeError;
use crate::registry::Registry;
use slog::{debug, Logger};

pub use checkout::CheckoutOutcome;
pub use list::{IdentityListing, ListedIdentity};
pub use name::{IdentityName, IdentityNameSet};
pub use snapshot::IdentityInfo;

pub mod checkout;
pub mod list;
mod name;
pub mod snapshot;

/// Entry point for everything gmu does with identities.
///
/// Built once at startup from the resolved home directory and handed to
/// every command; nothing in the crate reads the environment on its own.
#[derive(Clone, Debug)]
pub struct IdentityManager {
    logger: Logger,
    locations: IdentityLocations,
}

impl IdentityManager {
    pub fn new(logger: &Logger, locations: IdentityLocations) -> Self {
        Self {
            logger: logger.clone(),
            locations,
        }
    }

    pub fn locations(&self) -> &IdentityLocations {
        &self.locations
    }

    /// Reconciles the registry with the live files. Safe to run any number of times.
    pub fn synchronize(&self) -> Result<Registry, SynchronizeError> {
        debug!(
            self.logger,
            "Synchronizing {}.",
            self.locations.registry_path().display()
        );
        crate::registry::synchronize::synchronize(&self.logger, &self.locations)
    }

    /// Name and email of the live identity file.
    pub fn current_identity_info(&self) -> Result<IdentityInfo, CurrentIdentityInfoError> {
        let live_identity_file = match Registry::load(&self.locations.registry_path()) {
            Ok(registry) => registry.live_identity_file_path(&self.locations),
            // nothing recorded yet
            Err(RegistryNotFound(_)) => self.locations.identity_file_path(),
            Err(err) => return Err(CurrentIdentityInfoError::LoadRegistryFailed(err)),
        };
        snapshot::read_identity_info(&live_identity_file)
            .map_err(CurrentIdentityInfoError::ReadIdentityFileFailed)
    }

    /// Registered identities, the current one marked. Does not modify anything.
    pub fn list(&self) -> Result<IdentityListing, ListIdentitiesError> {
        let registry = Registry::load(&self.locations.registry_path())
            .map_err(ListIdentitiesError::LoadRegistryFailed)?;
        Ok(IdentityListing::from_registry(&registry))
    }

    /// Makes `target` the active identity, then refreshes the registry.
    pub fn checkout(&self, target: &str) -> Result<CheckoutOutcome, CheckoutError> {
        let registry =
            Registry::load(&self.locations.registry_path()).map_err(LoadRegistryFailed)?;
        let outcome = checkout::checkout(&self.logger, &self.locations, &registry, target)?;
        if outcome == CheckoutOutcome::Switched {
            self.synchronize().map_err(ResynchronizeFailed)?;
        }
        Ok(outcome)
    }
}
