use crate::error::identity::read_identity_file::ReadIdentityFileError;
use crate::error::identity::read_identity_file::ReadIdentityFileError::LoadIdentityFileFailed;
use crate::ini_file::load_ini_file;
use ini::Ini;
use std::path::Path;

const USER_SECTION: &str = "user";
const NAME_KEY: &str = "name";
const EMAIL_KEY: &str = "email";

/// The `[user]` fields of a git identity file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityInfo {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Reads `user.name` and `user.email` from a git identity file.
///
/// A missing file or unset field is not an error: it comes back as `None`.
/// Only a file that exists but cannot be read or parsed is an error.
pub fn read_identity_info(path: &Path) -> Result<IdentityInfo, ReadIdentityFileError> {
    if !path.exists() {
        return Ok(IdentityInfo::default());
    }
    let document =
        load_ini_file(path).map_err(|err| LoadIdentityFileFailed(path.to_path_buf(), err))?;

    Ok(IdentityInfo {
        name: user_value(&document, NAME_KEY),
        email: user_value(&document, EMAIL_KEY),
    })
}

/// The name of the identity the live identity file belongs to.
pub fn current_identity_name(path: &Path) -> Result<Option<String>, ReadIdentityFileError> {
    read_identity_info(path).map(|info| info.name)
}

// git treats section and key names case-insensitively, and the last assignment wins.
fn user_value(document: &Ini, key: &str) -> Option<String> {
    document
        .iter()
        .filter(|(section, _)| section.is_some_and(|s| s.trim().eq_ignore_ascii_case(USER_SECTION)))
        .flat_map(|(_, properties)| properties.iter())
        .filter(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.trim())
        .last()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
