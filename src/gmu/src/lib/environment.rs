use crate::lib::error::GmuResult;
use anyhow::Context;
use gmu_core::config::locations::IdentityLocations;
use gmu_core::identity::IdentityManager;
use slog::Logger;
use std::path::PathBuf;

pub trait Environment {
    fn get_logger(&self) -> &Logger;
    fn get_identity_manager(&self) -> &IdentityManager;
}

pub struct EnvironmentImpl {
    logger: Logger,
    identity_manager: IdentityManager,
}

impl EnvironmentImpl {
    /// Resolves the home directory and checks the live identity files exist.
    /// Failing either is fatal.
    pub fn new(logger: Logger, home_override: Option<PathBuf>) -> GmuResult<Self> {
        let locations = match home_override {
            Some(home) => IdentityLocations::new(home),
            None => IdentityLocations::from_environment()?,
        };
        locations
            .require_live_files()
            .context("gmu needs a .gitconfig and a .ssh directory to manage.")?;
        slog::trace!(logger, "Using home directory {}.", locations.home().display());

        let identity_manager = IdentityManager::new(&logger, locations);
        Ok(EnvironmentImpl {
            logger,
            identity_manager,
        })
    }
}

impl Environment for EnvironmentImpl {
    fn get_logger(&self) -> &Logger {
        &self.logger
    }

    fn get_identity_manager(&self) -> &IdentityManager {
        &self.identity_manager
    }
}
