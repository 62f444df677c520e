//! CLI command implementations.
//!
//! - **generate**: read a catalog and write the fakes for every class in it
//! - **init**: write a default `.fakegen.toml`

pub mod generate;
pub mod init;

pub use generate::{generate_fakes, GenerateConfig};
pub use init::init_config;
