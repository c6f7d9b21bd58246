pub mod config;
pub mod error;
pub mod foundation;
pub mod fs;
pub mod identity;
pub mod ini_file;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;
