use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::FakegenConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".fakegen.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from TOML and check that it yields usable generator options
pub fn parse_and_validate_config(contents: &str) -> Result<FakegenConfig> {
    let config = toml::from_str::<FakegenConfig>(contents)
        .map_err(|e| Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;
    config.generator.to_options()?;
    Ok(config)
}

/// Try loading config from a specific path; problems fall back to defaults
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<FakegenConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} in {}. Using defaults.", e, config_path.display());
            Some(FakegenConfig::default())
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.fakegen.toml` at or above `start`, or defaults
pub fn load_config_from(start: PathBuf) -> FakegenConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            FakegenConfig::default()
        })
}

pub fn load_config() -> FakegenConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            FakegenConfig::default()
        }
    }
}

/// Load an explicitly requested config file; every problem is an error
pub fn load_config_file(path: &Path) -> Result<FakegenConfig> {
    let contents = read_config_file(path).map_err(|source| Error::FileSystem {
        message: format!("Failed to read config file {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(source),
    })?;
    parse_and_validate_config(&contents)
}
