pub mod archive;
pub mod load_registry;
pub mod save_registry;
pub mod synchronize;
