//! Catalog acquisition.
//!
//! The generator only needs an ordered list of class descriptors. This module
//! reads one from either a manifest document (JSON, YAML or TOML) or the JSON
//! printed by `sourcekitten structure --file <file>.swift`.

pub mod manifest;
pub mod sourcekitten;

use crate::core::errors::{Error, Result};
use crate::core::Catalog;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogFormat {
    /// `{ classes: [...] }` document in JSON, YAML or TOML
    Manifest,
    /// Output of `sourcekitten structure`
    #[value(name = "sourcekitten")]
    SourceKitten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestSyntax {
    Json,
    Yaml,
    Toml,
}

impl ManifestSyntax {
    pub fn from_extension(ext: &str) -> Option<Self> {
        static EXTENSION_MAP: &[(&[&str], ManifestSyntax)] = &[
            (&["json"], ManifestSyntax::Json),
            (&["yaml", "yml"], ManifestSyntax::Yaml),
            (&["toml"], ManifestSyntax::Toml),
        ];

        let ext = ext.to_ascii_lowercase();
        EXTENSION_MAP
            .iter()
            .find(|(exts, _)| exts.contains(&ext.as_str()))
            .map(|(_, syntax)| *syntax)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parse catalog text that is already in memory.
pub fn parse_catalog(contents: &str, format: CatalogFormat, syntax: ManifestSyntax) -> Result<Catalog> {
    match format {
        CatalogFormat::Manifest => manifest::parse_manifest(contents, syntax),
        CatalogFormat::SourceKitten => sourcekitten::parse_structure(contents),
    }
}

/// Read a catalog from disk. Without an explicit format, the extension picks
/// the manifest syntax.
pub fn load_catalog(path: &Path, format: Option<CatalogFormat>) -> Result<Catalog> {
    let contents = crate::io::read_file(path)?;
    let format = format.unwrap_or(CatalogFormat::Manifest);
    let syntax = match format {
        CatalogFormat::SourceKitten => ManifestSyntax::Json,
        CatalogFormat::Manifest => ManifestSyntax::from_path(path).ok_or_else(|| {
            Error::UnsupportedFormat(format!(
                "{} (expected .json, .yaml, .yml or .toml, or pass --format sourcekitten)",
                path.display()
            ))
        })?,
    };

    let catalog = parse_catalog(&contents, format, syntax).map_err(|err| match err {
        Error::Catalog { path: None, message } => Error::Catalog {
            path: Some(path.to_path_buf()),
            message,
        },
        other => other,
    })?;

    log::info!(
        "Loaded {} classes ({} methods) from {}",
        catalog.classes.len(),
        catalog.method_count(),
        path.display()
    );
    Ok(catalog)
}
