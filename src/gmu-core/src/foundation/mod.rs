use crate::error::foundation::FoundationError;
use crate::error::foundation::FoundationError::NoHomeInEnvironment;
use std::path::PathBuf;

pub fn get_user_home() -> Result<PathBuf, FoundationError> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .ok_or(NoHomeInEnvironment())
}
