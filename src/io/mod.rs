pub mod fake_file;

pub use fake_file::{FakeFile, FakeFileOptions};

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileSystem {
        message: format!("Failed to read {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(|source| Error::FileSystem {
        message: format!("Failed to write {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
