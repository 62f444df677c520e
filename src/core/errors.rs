//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fakegen operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Catalog documents that parse but do not describe classes
    #[error("Catalog error in {}: {message}", display_path(.path))]
    Catalog {
        path: Option<PathBuf>,
        message: String,
    },

    /// Catalog format could not be determined
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Two methods keep the same identity key under `reject` or `disambiguate`
    #[error("Identity collision in {class_name}: `{key}` is shared by {}", .methods.join(", "))]
    IdentityCollision {
        class_name: String,
        key: String,
        methods: Vec<String>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Pattern errors
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Create a catalog error with optional path context
    pub fn catalog(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Catalog {
            path,
            message: message.into(),
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<input>".to_string())
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
