use thiserror::Error;

pub mod checkout;
pub mod current_identity_info;
pub mod list_identities;
pub mod read_identity_file;
pub mod require_live_files;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidIdentityNameError {
    #[error("An identity name cannot be empty.")]
    Empty,

    #[error("Identity name '{0}' contains whitespace.")]
    ContainsWhitespace(String),

    #[error("Identity name '{0}' contains a path separator.")]
    ContainsPathSeparator(String),

    #[error("Identity name '{0}' is a relative path component.")]
    RelativePathComponent(String),

    #[error("An identity named '{0}' cannot be registered as it is reserved for internal use.")]
    Reserved(String),
}
