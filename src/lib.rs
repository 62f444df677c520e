// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod generator;
pub mod io;
pub mod runtime;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    ArgumentCategory, Catalog, ClassDescriptor, ClassKind, MethodDescriptor, MethodKind,
};

pub use crate::catalog::{load_catalog, parse_catalog, CatalogFormat, ManifestSyntax};

pub use crate::config::{load_config, FakegenConfig};

pub use crate::generator::{
    identity_key, CollisionPolicy, FakeClassGenerator, GeneratorOptions, TypeClassifier,
};

pub use crate::io::{FakeFile, FakeFileOptions};
