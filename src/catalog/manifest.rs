//! Manifest catalogs: a serialized [`Catalog`] in JSON, YAML or TOML.

use super::ManifestSyntax;
use crate::core::errors::{Error, Result};
use crate::core::Catalog;
use std::collections::HashSet;

pub fn parse_manifest(contents: &str, syntax: ManifestSyntax) -> Result<Catalog> {
    let catalog: Catalog = match syntax {
        ManifestSyntax::Json => serde_json::from_str(contents)?,
        ManifestSyntax::Yaml => serde_yaml::from_str(contents)?,
        ManifestSyntax::Toml => toml::from_str(contents)?,
    };
    check_class_names(&catalog)?;
    Ok(catalog)
}

/// Fake type names derive from class names, so they must be present and unique.
fn check_class_names(catalog: &Catalog) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, class) in catalog.classes.iter().enumerate() {
        if class.class_name.trim().is_empty() {
            return Err(Error::catalog(
                format!("class #{} has an empty class_name", index + 1),
                None,
            ));
        }
        if !seen.insert(class.class_name.as_str()) {
            return Err(Error::catalog(
                format!("class `{}` is declared more than once", class.class_name),
                None,
            ));
        }
    }
    Ok(())
}
