//! Loading and saving INI documents.
//!
//! Both the registry and the git identity file go through here, so parse
//! and I/O failures come back as a [`StructuredFileError`] naming the file.
use crate::error::structured_file::StructuredFileError;
use crate::error::structured_file::StructuredFileError::{
    DeserializeIniFileFailed, ReadIniFileFailed, SerializeIniFileFailed,
};
use ini::Ini;
use std::path::Path;

pub fn load_ini_file(path: &Path) -> Result<Ini, StructuredFileError> {
    let content = crate::fs::read_to_string(path).map_err(ReadIniFileFailed)?;

    Ini::load_from_str(&content).map_err(|err| DeserializeIniFileFailed(path.to_path_buf(), err))
}

pub fn serialize_ini(path: &Path, document: &Ini) -> Result<Vec<u8>, StructuredFileError> {
    let mut content = Vec::new();
    document
        .write_to(&mut content)
        .map_err(|err| SerializeIniFileFailed(path.to_path_buf(), err))?;
    Ok(content)
}
