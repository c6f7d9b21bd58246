pub mod foundation;
pub mod fs;
pub mod identity;
pub mod registry;
pub mod structured_file;
